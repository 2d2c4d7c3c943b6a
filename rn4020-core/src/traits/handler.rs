//! Application hooks for asynchronous module events

/// Receiver for notifications dispatched during poll
///
/// Every method has a no-op default, so an application overrides only
/// the events it cares about. Handlers are called synchronously from the
/// driver's poll and only get `&mut self`: they cannot reach the driver,
/// so a command cannot be issued from inside a callback.
pub trait EventHandler {
    /// A central connected (`true`) or the link ended (`false`)
    fn connection_changed(&mut self, _connected: bool) {}

    /// The peer is reading a real-time-read characteristic
    ///
    /// The application should refresh the value (for example with a
    /// handle write) while the module waits.
    fn real_time_read(&mut self, _handle: u16) {}

    /// The peer wrote `payload` to the characteristic at `handle`
    fn characteristic_written(&mut self, _handle: u16, _payload: &[u8]) {}
}

/// Ignore every event
impl EventHandler for () {}

impl<T: EventHandler + ?Sized> EventHandler for &mut T {
    fn connection_changed(&mut self, connected: bool) {
        (**self).connection_changed(connected)
    }

    fn real_time_read(&mut self, handle: u16) {
        (**self).real_time_read(handle)
    }

    fn characteristic_written(&mut self, handle: u16, payload: &[u8]) {
        (**self).characteristic_written(handle, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        connects: u8,
    }

    impl EventHandler for Counter {
        fn connection_changed(&mut self, connected: bool) {
            if connected {
                self.connects += 1;
            }
        }
    }

    #[test]
    fn test_defaults_are_noops() {
        let mut counter = Counter::default();
        counter.real_time_read(0x0025);
        counter.characteristic_written(0x0025, &[1, 2]);
        assert_eq!(counter.connects, 0);
    }

    fn connect_twice<H: EventHandler>(mut handler: H) {
        handler.connection_changed(true);
        handler.connection_changed(false);
        handler.connection_changed(true);
    }

    #[test]
    fn test_forwarding_through_reference() {
        let mut counter = Counter::default();
        connect_twice(&mut counter);
        assert_eq!(counter.connects, 2);
    }
}
