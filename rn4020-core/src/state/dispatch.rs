//! Outcome of feeding one line to the protocol machine

use rn4020_protocol::{Notification, Uuid};

use super::machine::ProtocolState;

/// What a line did to the protocol machine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Asynchronous notification, consumed in any state
    Notification(Notification),
    /// The line completed or advanced the outstanding command
    Transition {
        from: ProtocolState,
        to: ProtocolState,
    },
    /// A characteristic line was appended to the handle table
    TableEntry(u16),
    /// Service UUID echoed during a table refresh
    ServiceEcho(Uuid),
    /// The line means nothing in the current state
    Ignored,
}
