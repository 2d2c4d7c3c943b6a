//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time allowed for the module to answer a command, in milliseconds
pub const DEFAULT_COMMAND_TIMEOUT_MS: u32 = 5000;

/// Wake pin sequence timing
///
/// The sequence is: software wake low, wait `sw_low_settle_ms`, hardware
/// wake low, wait `hw_low_ms`, hardware wake high, wait
/// `hw_high_settle_ms`, software wake high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WakeTiming {
    /// Delay after pulling software wake low
    pub sw_low_settle_ms: u32,
    /// Time hardware wake is held low
    pub hw_low_ms: u32,
    /// Delay after releasing hardware wake, before software wake goes high
    pub hw_high_settle_ms: u32,
}

impl Default for WakeTiming {
    fn default() -> Self {
        Self {
            sw_low_settle_ms: 100,
            hw_low_ms: 500,
            hw_high_settle_ms: 100,
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Deadline for every blocking command, in milliseconds
    pub command_timeout_ms: u32,
    /// Wake pin sequence timing, consumed by `WakePins::from_config`
    pub wake: WakeTiming,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: DEFAULT_COMMAND_TIMEOUT_MS,
            wake: WakeTiming::default(),
        }
    }
}

impl DriverConfig {
    /// Default configuration with a different command timeout
    pub fn with_timeout_ms(command_timeout_ms: u32) -> Self {
        Self {
            command_timeout_ms,
            ..Self::default()
        }
    }
}
