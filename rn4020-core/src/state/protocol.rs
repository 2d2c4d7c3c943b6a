//! Line dispatcher
//!
//! [`ProtocolMachine`] owns the protocol state, the connection flag and the
//! handle table, and is the only thing that mutates them. Notification
//! lines are recognised before the state-specific switch so they can be
//! interleaved with any acknowledgement.

use rn4020_protocol::{Expect, Notification, Response};

use super::dispatch::Dispatch;
use super::machine::ProtocolState;
use crate::error::ProtocolError;
use crate::table::{HandleLookupItem, HandleTable, DEFAULT_TABLE_CAPACITY};

/// Protocol state machine and line dispatcher
#[derive(Debug, Clone)]
pub struct ProtocolMachine<const N: usize = DEFAULT_TABLE_CAPACITY> {
    state: ProtocolState,
    connected: bool,
    table: HandleTable<N>,
    /// Entries were dropped during the current or last refresh
    overflowed: bool,
}

impl<const N: usize> Default for ProtocolMachine<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ProtocolMachine<N> {
    /// Create a machine in the `Initializing` state
    pub const fn new() -> Self {
        Self {
            state: ProtocolState::Initializing,
            connected: false,
            table: HandleTable::new(),
            overflowed: false,
        }
    }

    /// Current protocol state
    pub fn state(&self) -> ProtocolState {
        self.state
    }

    /// Whether a central is connected
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Handle table as of the last refresh
    pub fn table(&self) -> &HandleTable<N> {
        &self.table
    }

    /// Enter the waiting state for a command about to be sent
    ///
    /// Only one command may be outstanding: fails with
    /// [`ProtocolError::AlreadyBusy`] unless the machine is `Ready`, and in
    /// that case nothing changes. Arming a table refresh clears the table.
    pub fn arm(&mut self, expect: Expect) -> Result<(), ProtocolError> {
        if !self.state.is_ready() {
            return Err(ProtocolError::AlreadyBusy);
        }
        if expect == Expect::TableEnd {
            self.table.clear();
            self.overflowed = false;
        }
        self.state = ProtocolState::armed(expect);
        Ok(())
    }

    /// Start over for a module power-up
    ///
    /// This is the recovery path after a timeout and is accepted in any
    /// state. The connection flag and the handle table are reset.
    pub fn begin_power_up(&mut self) {
        self.state = ProtocolState::Initializing;
        self.connected = false;
        self.table.clear();
        self.overflowed = false;
    }

    /// Wait for the `CMD` prompt once the wake sequence has run
    pub fn await_prompt(&mut self) -> Result<(), ProtocolError> {
        if self.state != ProtocolState::Initializing {
            return Err(ProtocolError::AlreadyBusy);
        }
        self.state = ProtocolState::WaitingForCmdPrompt;
        Ok(())
    }

    /// Report and clear the "entries dropped" flag of the last refresh
    pub fn take_overflow(&mut self) -> bool {
        core::mem::take(&mut self.overflowed)
    }

    /// Consume one trimmed, non-empty line
    pub fn advance(&mut self, line: &str) -> Result<Dispatch, ProtocolError> {
        // Notifications first, in every state
        match Notification::parse(line) {
            Ok(Some(notification)) => {
                match notification {
                    Notification::Connected => self.connected = true,
                    Notification::ConnectionEnd => self.connected = false,
                    _ => {}
                }
                return Ok(Dispatch::Notification(notification));
            }
            Ok(None) => {}
            Err(_) => return Err(ProtocolError::MalformedLine),
        }

        let response = Response::parse(line);
        if let Some(next) = self.state.transition(&response) {
            let from = self.state;
            self.state = next;
            return Ok(Dispatch::Transition { from, to: next });
        }

        if self.state == ProtocolState::WaitingForTableRefresh {
            match response {
                Response::Entry(entry) => {
                    return match self.table.insert(HandleLookupItem::from(entry)) {
                        Ok(()) => Ok(Dispatch::TableEntry(entry.handle)),
                        Err(ProtocolError::TableOverflow) => {
                            self.overflowed = true;
                            Err(ProtocolError::TableOverflow)
                        }
                        Err(e) => Err(e),
                    };
                }
                Response::ServiceUuid(uuid) => return Ok(Dispatch::ServiceEcho(uuid)),
                _ => {}
            }
        }

        Ok(Dispatch::Ignored)
    }
}
