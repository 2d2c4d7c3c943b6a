//! Millisecond tick source

/// Monotonic millisecond clock
///
/// Only differences between two readings are used, so the epoch is
/// arbitrary. Test code injects a fake clock to make timeouts
/// deterministic.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed point
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Wall clock for host builds
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose epoch is now
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Ticks(Cell<u64>);

    impl Clock for Ticks {
        fn now_ms(&self) -> u64 {
            let now = self.0.get();
            self.0.set(now + 1);
            now
        }
    }

    #[test]
    fn test_clock_through_reference() {
        let ticks = Ticks(Cell::new(10));
        let by_ref = &ticks;
        assert_eq!(by_ref.now_ms(), 10);
        assert_eq!(ticks.now_ms(), 11);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_std_clock_is_monotonic() {
        let clock = StdClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
