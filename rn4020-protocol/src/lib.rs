//! RN4020 ASCII line protocol
//!
//! This crate defines the wire format spoken by the Microchip RN4020
//! Bluetooth Low Energy module over its UART. The protocol has no binary
//! framing: every command and every response is one line of ASCII text.
//!
//! # Protocol Overview
//!
//! ```text
//! host → module   SS,C0000000          configuration command
//! module → host   AOK                  acknowledgement
//! host → module   LS                   list handles
//! module → host   180F                 service UUID echo
//! module → host     2A19,000B,02       characteristic, handle, properties
//! module → host   END                  end of listing
//! module → host   WV,000B,64.          peer write (any time)
//! ```
//!
//! Notifications (`Connected`, `Connection End`, `RV`, `WV`) share the
//! channel with command responses and may arrive at any time.

#![no_std]
#![deny(unsafe_code)]

pub mod assembler;
pub mod command;
pub mod consts;
pub mod events;
pub mod line;
pub mod uuid;

pub use assembler::LineAssembler;
pub use command::{
    Command, CommandError, CommandLine, Expect, MAX_COMMAND_LEN, MAX_MAC_NAME_LEN,
    MAX_NAME_LEN,
};
pub use events::{Notification, WritePayload, MAX_WRITE_PAYLOAD};
pub use line::{HandleEntry, LineError, Response};
pub use uuid::{decode_hex, encode_hex, HexError, Uuid, UuidError, UUID128_LEN, UUID16_LEN};
