//! Wake pin sequencing
//!
//! The module is brought up by driving its software and hardware wake
//! inputs through a fixed sequence. [`WakePins`] runs that sequence on any
//! `embedded-hal` output pins and delay provider.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorKind, OutputPin};
use rn4020_core::{DriverConfig, WakeTiming};
use rn4020_hal::PowerControl;

/// Software and hardware wake pins of the module
pub struct WakePins<SW, HW, D> {
    wake_sw: SW,
    wake_hw: HW,
    delay: D,
    timing: WakeTiming,
}

impl<SW: OutputPin, HW: OutputPin, D: DelayNs> WakePins<SW, HW, D> {
    /// Create the wake sequencer
    ///
    /// Pin levels are not touched until [`PowerControl::power_up`] runs.
    pub fn new(wake_sw: SW, wake_hw: HW, delay: D, timing: WakeTiming) -> Self {
        Self {
            wake_sw,
            wake_hw,
            delay,
            timing,
        }
    }

    /// Create the wake sequencer with the timing from `config.wake`
    pub fn from_config(wake_sw: SW, wake_hw: HW, delay: D, config: &DriverConfig) -> Self {
        Self::new(wake_sw, wake_hw, delay, config.wake)
    }

    /// Sequence timing in use
    pub fn timing(&self) -> WakeTiming {
        self.timing
    }

    /// Give the pins and delay back
    pub fn release(self) -> (SW, HW, D) {
        (self.wake_sw, self.wake_hw, self.delay)
    }
}

impl<SW: OutputPin, HW: OutputPin, D: DelayNs> PowerControl for WakePins<SW, HW, D> {
    type Error = ErrorKind;

    fn power_up(&mut self) -> Result<(), Self::Error> {
        self.wake_sw.set_low().map_err(|e| e.kind())?;
        self.delay.delay_ms(self.timing.sw_low_settle_ms);

        self.wake_hw.set_low().map_err(|e| e.kind())?;
        self.delay.delay_ms(self.timing.hw_low_ms);
        self.wake_hw.set_high().map_err(|e| e.kind())?;
        self.delay.delay_ms(self.timing.hw_high_settle_ms);

        self.wake_sw.set_high().map_err(|e| e.kind())?;
        debug!("wake sequence done");
        Ok(())
    }
}
