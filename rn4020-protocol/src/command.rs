//! Outgoing command lines
//!
//! Every operation is one ASCII line. Numbers are fixed-width uppercase
//! hex; UUIDs and values use the codec in [`crate::uuid`]. The line
//! terminator is appended by the transport layer, not here.

use core::fmt::Write;

use heapless::String;

use crate::uuid::{encode_hex, Uuid, UUID128_LEN};

/// Longest command line the encoder produces, without the newline
pub const MAX_COMMAND_LEN: usize = 128;

/// Longest device name the module stores
pub const MAX_NAME_LEN: usize = 20;

/// Longest name accepted by `S-`, which appends the MAC suffix itself
pub const MAX_MAC_NAME_LEN: usize = 15;

/// Encoded command line
pub type CommandLine = String<MAX_COMMAND_LEN>;

/// Errors that can occur while encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Encoded line exceeds [`MAX_COMMAND_LEN`]
    LineTooLong,
    /// Device name empty, too long, or not printable ASCII without commas
    InvalidName,
    /// Argument outside the range the module accepts
    ValueOutOfRange,
}

impl From<core::fmt::Error> for CommandError {
    fn from(_: core::fmt::Error) -> Self {
        CommandError::LineTooLong
    }
}

/// Line the module answers a command with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expect {
    /// `AOK`
    Ack,
    /// `Reboot`, followed by a fresh `CMD` prompt
    Reboot,
    /// Entry lines terminated by `END`
    TableEnd,
}

/// Commands sent to the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Restore factory settings (`SF,1`)
    FactoryReset,
    /// Select supported server services (`SS`)
    SetServices(u32),
    /// Select supported features (`SR`)
    SetFeatures(u32),
    /// Set the advertised device name (`SN`)
    SetName(&'a str),
    /// Set the device name with the last MAC bytes appended (`S-`)
    SetNameWithMac(&'a str),
    /// Reboot the module (`R,1`)
    Reboot,
    /// Start advertising (`A`)
    Advertise,
    /// Remove the stored bond (`U`)
    RemoveBond,
    /// List server services, characteristics and handles (`LS`)
    ListHandles,
    /// Remove all private services and characteristics (`PZ`)
    ClearPrivate,
    /// Declare a private service (`PS`)
    AddPrivateService(&'a [u8; UUID128_LEN]),
    /// Declare a private characteristic in the last declared service (`PC`)
    AddPrivateCharacteristic {
        uuid: &'a [u8; UUID128_LEN],
        properties: u8,
        size: u8,
        security: u8,
    },
    /// Write a local characteristic addressed by UUID (`SUW`)
    WriteByUuid { uuid: Uuid, payload: &'a [u8] },
    /// Write a local characteristic addressed by handle (`SHW`)
    WriteByHandle { handle: u16, payload: &'a [u8] },
}

impl<'a> Command<'a> {
    /// Response class that completes this command
    pub fn expect(&self) -> Expect {
        match self {
            Command::Reboot => Expect::Reboot,
            Command::ListHandles => Expect::TableEnd,
            _ => Expect::Ack,
        }
    }

    /// Encode this command into a line
    pub fn encode(&self) -> Result<CommandLine, CommandError> {
        let mut line = CommandLine::new();
        match self {
            Command::FactoryReset => line.push_str("SF,1").map_err(|_| CommandError::LineTooLong)?,
            Command::SetServices(services) => write!(line, "SS,{:08X}", services)?,
            Command::SetFeatures(features) => write!(line, "SR,{:08X}", features)?,
            Command::SetName(name) => {
                validate_name(name, MAX_NAME_LEN)?;
                write!(line, "SN,{}", name)?;
            }
            Command::SetNameWithMac(name) => {
                validate_name(name, MAX_MAC_NAME_LEN)?;
                write!(line, "S-,{}", name)?;
            }
            Command::Reboot => line.push_str("R,1").map_err(|_| CommandError::LineTooLong)?,
            Command::Advertise => line.push_str("A").map_err(|_| CommandError::LineTooLong)?,
            Command::RemoveBond => line.push_str("U").map_err(|_| CommandError::LineTooLong)?,
            Command::ListHandles => line.push_str("LS").map_err(|_| CommandError::LineTooLong)?,
            Command::ClearPrivate => line.push_str("PZ").map_err(|_| CommandError::LineTooLong)?,
            Command::AddPrivateService(uuid) => {
                line.push_str("PS,").map_err(|_| CommandError::LineTooLong)?;
                encode_hex(&uuid[..], &mut line)?;
            }
            Command::AddPrivateCharacteristic {
                uuid,
                properties,
                size,
                security,
            } => {
                line.push_str("PC,").map_err(|_| CommandError::LineTooLong)?;
                encode_hex(&uuid[..], &mut line)?;
                write!(line, ",{:02X},{:02X}", properties, size)?;
                // No security field at all means "no security"
                if *security != 0 {
                    write!(line, ",{:02X}", security)?;
                }
            }
            Command::WriteByUuid { uuid, payload } => {
                write!(line, "SUW,{},", uuid)?;
                encode_hex(payload, &mut line)?;
            }
            Command::WriteByHandle { handle, payload } => {
                write!(line, "SHW,{:04X},", handle)?;
                encode_hex(payload, &mut line)?;
            }
        }
        Ok(line)
    }
}

fn validate_name(name: &str, max_len: usize) -> Result<(), CommandError> {
    let valid = !name.is_empty()
        && name.len() <= max_len
        && name.bytes().all(|b| (b.is_ascii_graphic() && b != b',') || b == b' ');
    if valid {
        Ok(())
    } else {
        Err(CommandError::InvalidName)
    }
}
