//! RN4020 Hardware Abstraction Layer
//!
//! This crate defines the collaborators the RN4020 driver needs from the
//! platform. The driver never touches a UART, a timer or a GPIO directly;
//! a board crate implements these traits and hands them in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rn4020-driver                          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rn4020-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!         │               │             │
//!         ▼               ▼             ▼
//!   UART + line       tick source   wake pins
//!   buffering
//! ```
//!
//! # Traits
//!
//! - [`line::LineReader`], [`line::LineWriter`] - Line-oriented transport
//! - [`clock::Clock`] - Millisecond tick source
//! - [`power::PowerControl`] - Module power/wake sequencing

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod line;
pub mod power;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use line::{ErrorType, Line, LineReader, LineSource, LineWriter, MAX_LINE_LEN};
pub use power::PowerControl;
