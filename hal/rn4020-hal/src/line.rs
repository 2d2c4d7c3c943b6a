//! Line-oriented transport abstractions
//!
//! The RN4020 speaks one ASCII command or response per line. Whatever sits
//! underneath (DMA ring buffer, interrupt-driven FIFO, host serial port) is
//! hidden behind these traits.

use heapless::String;

/// Longest line the driver accepts from the module, in characters
///
/// `LS` output with 128-bit UUIDs and `WV` notifications carrying a full
/// characteristic value both fit comfortably.
pub const MAX_LINE_LEN: usize = 100;

/// A received line with the terminator and trailing whitespace removed
pub type Line = String<MAX_LINE_LEN>;

/// Error type shared by both halves of a transport
pub trait ErrorType {
    /// Error type for transport operations
    type Error;
}

impl<T: ErrorType + ?Sized> ErrorType for &mut T {
    type Error = T::Error;
}

/// Receive side of the transport
pub trait LineReader: ErrorType {
    /// Return the next complete line, if one is buffered
    ///
    /// Must not block. Returns `Ok(None)` when no full line is available
    /// yet. Lines are returned with trailing whitespace already stripped.
    fn try_read_line(&mut self) -> Result<Option<Line>, Self::Error>;

    /// Drop any partially received line
    ///
    /// Called when the module is reset, since bytes from before the reset
    /// can never complete a valid line.
    fn clear(&mut self) {}
}

/// Transmit side of the transport
pub trait LineWriter: ErrorType {
    /// Write raw bytes to the module
    ///
    /// Blocks until all data has been written or the implementation's own
    /// per-call timeout expires.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: LineReader + ?Sized> LineReader for &mut T {
    fn try_read_line(&mut self) -> Result<Option<Line>, Self::Error> {
        (**self).try_read_line()
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

impl<T: LineWriter + ?Sized> LineWriter for &mut T {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// Combined line transport
///
/// For transports that read and write through a single peripheral.
pub trait LineSource: LineReader + LineWriter {}

// Blanket implementation
impl<T: LineReader + LineWriter> LineSource for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        cleared: u8,
    }

    impl ErrorType for Counting {
        type Error = ();
    }

    impl LineReader for Counting {
        fn try_read_line(&mut self) -> Result<Option<Line>, ()> {
            Ok(None)
        }

        fn clear(&mut self) {
            self.cleared += 1;
        }
    }

    fn reset<R: LineReader>(mut reader: R) {
        reader.clear();
    }

    #[test]
    fn test_clear_through_reference() {
        let mut reader = Counting { cleared: 0 };
        reset(&mut reader);
        assert_eq!(reader.cleared, 1);
    }
}
