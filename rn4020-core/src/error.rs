//! Protocol-level error kinds

/// Errors raised by the protocol machine
///
/// None of these are fatal: the offending line is dropped and processing
/// continues with the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// A command was requested while another is outstanding
    AlreadyBusy,
    /// A notification line had a broken body
    MalformedLine,
    /// More handle entries were reported than the table holds
    TableOverflow,
    /// The same handle was reported twice in one refresh
    DuplicateHandle,
}
