//! Configuration types
//!
//! Driver timing configuration. The defaults match the module's data
//! sheet; boards with slower supply ramps can stretch the wake timing.

pub mod types;

pub use types::*;
