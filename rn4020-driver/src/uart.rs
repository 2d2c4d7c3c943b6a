//! Line source over a UART
//!
//! Adapts any `embedded-io` serial port to [`LineSource`]. Reads never
//! block: only bytes the port reports as ready are consumed.
//!
//! [`LineSource`]: rn4020_hal::LineSource

use embedded_io::{Read, ReadReady, Write};
use rn4020_hal::{ErrorType, Line, LineReader, LineWriter, MAX_LINE_LEN};
use rn4020_protocol::LineAssembler;

/// Line-oriented view of a serial port
pub struct UartLineSource<U> {
    uart: U,
    assembler: LineAssembler<MAX_LINE_LEN>,
}

impl<U> UartLineSource<U> {
    /// Wrap a serial port
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            assembler: LineAssembler::new(),
        }
    }

    /// Give the serial port back
    pub fn release(self) -> U {
        self.uart
    }
}

impl<U: embedded_io::ErrorType> ErrorType for UartLineSource<U> {
    type Error = U::Error;
}

impl<U: Read + ReadReady> LineReader for UartLineSource<U> {
    fn try_read_line(&mut self) -> Result<Option<Line>, Self::Error> {
        let mut byte = [0u8; 1];
        while self.uart.read_ready()? {
            if self.uart.read(&mut byte)? == 0 {
                break;
            }
            match self.assembler.feed(byte[0]) {
                Ok(Some(line)) => return Ok(Some(line)),
                Ok(None) => {}
                Err(e) => warn!("rx line dropped: {:?}", e),
            }
        }
        Ok(None)
    }

    fn clear(&mut self) {
        if self.assembler.pending() > 0 {
            debug!("dropping {} buffered bytes", self.assembler.pending());
        }
        self.assembler.reset();
    }
}

impl<U: Write> LineWriter for UartLineSource<U> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.uart.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.uart.flush()
    }
}
