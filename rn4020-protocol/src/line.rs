//! Response grammar for lines that are not notifications
//!
//! The module has no length prefix or frame delimiter beyond the newline,
//! and the grammars of acknowledgements, `LS` output and service echoes
//! overlap. This module only classifies a line by shape; whether a shape
//! means anything depends on the protocol state and is decided by the
//! state machine.

use crate::uuid::{parse_u16_hex, Uuid};

/// Errors for lines that cannot be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line has a recognised prefix but an invalid body
    Malformed,
    /// Line exceeded the receive buffer and was discarded
    LineTooLong,
    /// Notification value larger than the payload buffer
    PayloadTooLarge,
}

// Wire format
const PROMPT: &str = "CMD";
const ACK: &str = "AOK";
const ERROR: &str = "ERR";
const REBOOT: &str = "Reboot";
const TABLE_END: &str = "END";
const ENTRY_INDENT: &str = "  ";

/// One characteristic reported by the `LS` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandleEntry {
    /// Characteristic UUID
    pub uuid: Uuid,
    /// Handle the module assigned to it
    pub handle: u16,
    /// Characteristic property bits, when the module prints them
    pub properties: Option<u8>,
}

impl HandleEntry {
    /// Parse `"  <uuid hex>,<4 hex handle>[,<2 hex properties>]"`
    ///
    /// The UUID must be 4 or 32 hex digits. Returns `None` for any other
    /// shape.
    pub fn parse(line: &str) -> Option<Self> {
        let body = line.strip_prefix(ENTRY_INDENT)?;
        let mut fields = body.split(',');

        let uuid = Uuid::parse_hex(fields.next()?).ok()?;
        let handle = parse_u16_hex(fields.next()?).ok()?;
        let properties = match fields.next() {
            Some(props) if props.len() == 2 => {
                let mut byte = [0u8; 1];
                crate::uuid::decode_hex(props, &mut byte).ok()?;
                Some(byte[0])
            }
            Some(_) => return None,
            None => None,
        };
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            uuid,
            handle,
            properties,
        })
    }
}

/// Shape of a non-notification line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// `CMD` prompt after wake or reboot
    Prompt,
    /// `AOK` generic acknowledgement
    Ack,
    /// `ERR` command rejected by the module
    Error,
    /// `Reboot` after `R,1`
    Reboot,
    /// `END` terminating `LS` output
    TableEnd,
    /// Indented characteristic line from `LS`
    Entry(HandleEntry),
    /// Bare 4 or 32 hex digit service UUID from `LS`
    ServiceUuid(Uuid),
    /// Anything else
    Other,
}

impl Response {
    /// Classify a trimmed line
    pub fn parse(line: &str) -> Self {
        match line {
            PROMPT => Response::Prompt,
            ACK => Response::Ack,
            ERROR => Response::Error,
            REBOOT => Response::Reboot,
            TABLE_END => Response::TableEnd,
            _ => {
                if let Some(entry) = HandleEntry::parse(line) {
                    Response::Entry(entry)
                } else if let Ok(uuid) = Uuid::parse_hex(line) {
                    Response::ServiceUuid(uuid)
                } else {
                    Response::Other
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synchronous_tokens() {
        assert_eq!(Response::parse("CMD"), Response::Prompt);
        assert_eq!(Response::parse("AOK"), Response::Ack);
        assert_eq!(Response::parse("ERR"), Response::Error);
        assert_eq!(Response::parse("Reboot"), Response::Reboot);
        assert_eq!(Response::parse("END"), Response::TableEnd);
    }

    #[test]
    fn test_entry_uuid16() {
        let entry = HandleEntry::parse("  2A19,0025").unwrap();
        assert_eq!(entry.uuid, Uuid::Uuid16(0x2A19));
        assert_eq!(entry.handle, 0x0025);
        assert_eq!(entry.properties, None);
    }

    #[test]
    fn test_entry_uuid128_with_properties() {
        let entry = HandleEntry::parse("  BF3FBD80063F11E59E690002A5D5C501,001B,10").unwrap();
        assert_eq!(entry.handle, 0x001B);
        assert_eq!(entry.properties, Some(0x10));
        assert_eq!(entry.uuid.byte_len(), 16);
    }

    #[test]
    fn test_entry_rejects_other_shapes() {
        // Needs exactly two spaces of indent
        assert_eq!(HandleEntry::parse("2A19,0025"), None);
        assert_eq!(HandleEntry::parse("   2A19,0025"), None);
        // UUID must be 4 or 32 digits
        assert_eq!(HandleEntry::parse("  2A1,0025"), None);
        assert_eq!(HandleEntry::parse("  2A19,25"), None);
        assert_eq!(HandleEntry::parse("  2A19"), None);
        assert_eq!(HandleEntry::parse("  2A19,0025,1"), None);
        assert_eq!(HandleEntry::parse("  2A19,0025,10,00"), None);
    }

    #[test]
    fn test_service_echo() {
        assert_eq!(Response::parse("180F"), Response::ServiceUuid(Uuid::Uuid16(0x180F)));
        assert!(matches!(
            Response::parse("BF3FBD80063F11E59E690002A5D5C500"),
            Response::ServiceUuid(Uuid::Uuid128(_))
        ));
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(Response::parse("aok"), Response::Other);
        assert_eq!(Response::parse("Connected"), Response::Other);
        assert_eq!(Response::parse("12345"), Response::Other);
    }
}
