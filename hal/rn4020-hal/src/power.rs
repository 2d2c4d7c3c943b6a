//! Module power and wake sequencing
//!
//! The RN4020 is brought up by toggling its hardware and software wake
//! lines in a fixed, timed order. The driver only needs to know that the
//! sequence ran; how the pins are driven is board specific.

/// Power/wake sequencing collaborator
///
/// Invoked once by the driver's setup, after the protocol state has been
/// reset and before waiting for the module's `CMD` prompt.
pub trait PowerControl {
    /// Error type for pin or timer failures
    type Error: core::fmt::Debug;

    /// Run the wake sequence
    ///
    /// Returns once the module has been released from reset; the `CMD`
    /// prompt arrives asynchronously over the line transport.
    fn power_up(&mut self) -> Result<(), Self::Error>;
}

impl<T: PowerControl + ?Sized> PowerControl for &mut T {
    type Error = T::Error;

    fn power_up(&mut self) -> Result<(), Self::Error> {
        (**self).power_up()
    }
}
