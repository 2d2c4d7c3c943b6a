//! Driver error type

use rn4020_core::ProtocolError;
use rn4020_protocol::CommandError;

/// Errors returned by driver operations
///
/// `E` is the transport's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Reading from or writing to the transport failed
    Transport(E),
    /// The wake sequence failed
    Power,
    /// The expected response did not arrive before the deadline
    ///
    /// The protocol state stays in its waiting value; run the setup
    /// sequence again before issuing further commands.
    Timeout,
    /// A command was requested while another is outstanding
    AlreadyBusy,
    /// The module reported more handles than the table holds
    TableOverflow,
    /// The command could not be encoded; nothing was sent
    Command(CommandError),
    /// Other protocol fault
    Protocol(ProtocolError),
}

impl<E> From<ProtocolError> for Error<E> {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::AlreadyBusy => Error::AlreadyBusy,
            ProtocolError::TableOverflow => Error::TableOverflow,
            other => Error::Protocol(other),
        }
    }
}

impl<E> From<CommandError> for Error<E> {
    fn from(err: CommandError) -> Self {
        Error::Command(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_mapping() {
        assert_eq!(Error::<()>::from(ProtocolError::AlreadyBusy), Error::AlreadyBusy);
        assert_eq!(Error::<()>::from(ProtocolError::TableOverflow), Error::TableOverflow);
        assert_eq!(
            Error::<()>::from(ProtocolError::MalformedLine),
            Error::Protocol(ProtocolError::MalformedLine)
        );
    }

    #[test]
    fn test_command_error_mapping() {
        assert_eq!(
            Error::<()>::from(CommandError::InvalidName),
            Error::Command(CommandError::InvalidName)
        );
    }
}
