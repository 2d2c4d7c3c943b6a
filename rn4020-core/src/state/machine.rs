//! Protocol state definition
//!
//! The state alone records which command is outstanding: there is no
//! stored command string, only the response class the module still owes.

use rn4020_protocol::{Expect, Response};

/// Protocol states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolState {
    /// Power-up in progress, nothing expected yet
    #[default]
    Initializing,
    /// Waiting for the `CMD` prompt after wake or reboot
    WaitingForCmdPrompt,
    /// Idle, a command may be issued
    Ready,
    /// Waiting for `AOK`
    WaitingForAck,
    /// Waiting for `Reboot` after `R,1`
    WaitingForReboot,
    /// Collecting `LS` output until `END`
    WaitingForTableRefresh,
}

impl ProtocolState {
    /// State entered when a command expecting `expect` is sent
    pub fn armed(expect: Expect) -> Self {
        match expect {
            Expect::Ack => ProtocolState::WaitingForAck,
            Expect::Reboot => ProtocolState::WaitingForReboot,
            Expect::TableEnd => ProtocolState::WaitingForTableRefresh,
        }
    }

    /// Check if a command may be issued
    pub fn is_ready(&self) -> bool {
        matches!(self, ProtocolState::Ready)
    }

    /// Check if a response is outstanding
    pub fn is_waiting(&self) -> bool {
        matches!(
            self,
            ProtocolState::WaitingForCmdPrompt
                | ProtocolState::WaitingForAck
                | ProtocolState::WaitingForReboot
                | ProtocolState::WaitingForTableRefresh
        )
    }

    /// Process a response line and return the next state
    ///
    /// Returns `None` when the line does not move the machine. The
    /// synchronous tokens only count inside their own waiting state;
    /// everywhere else they are unexpected.
    pub fn transition(self, response: &Response) -> Option<Self> {
        use ProtocolState::*;

        match (self, response) {
            (WaitingForCmdPrompt, Response::Prompt) => Some(Ready),
            (WaitingForAck, Response::Ack) => Some(Ready),
            (WaitingForReboot, Response::Reboot) => Some(WaitingForCmdPrompt),
            (WaitingForTableRefresh, Response::TableEnd) => Some(Ready),

            // Default: stay in current state
            _ => None,
        }
    }
}
