//! Board-agnostic core logic for the RN4020 driver
//!
//! This crate contains all protocol logic that does not depend on a
//! transport or a timer:
//!
//! - Protocol state machine and line dispatcher
//! - Characteristic handle lookup table
//! - Application event hooks
//! - Driver configuration

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod state;
pub mod table;
pub mod traits;

pub use config::{DriverConfig, WakeTiming};
pub use error::ProtocolError;
pub use state::{Dispatch, ProtocolMachine, ProtocolState};
pub use table::{HandleLookupItem, HandleTable, DEFAULT_TABLE_CAPACITY};
pub use traits::EventHandler;
