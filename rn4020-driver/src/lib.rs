//! RN4020 Bluetooth LE module driver
//!
//! Ties the protocol machine from `rn4020-core` to a line transport, a
//! millisecond clock and the module's wake pins:
//!
//! - [`Rn4020`] - command operations, polling and notification dispatch
//! - [`UartLineSource`] - line transport over an `embedded-io` serial port
//! - [`WakePins`] - wake sequence on `embedded-hal` output pins
//!
//! Logging goes through `defmt` or `log`, selected by the feature of the
//! same name.

#![no_std]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

pub mod error;
pub mod power;
pub mod rn4020;
pub mod uart;

#[cfg(test)]
mod mock;

pub use error::Error;
pub use power::WakePins;
pub use rn4020::Rn4020;
pub use uart::UartLineSource;
