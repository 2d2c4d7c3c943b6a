//! Byte stream to line assembly
//!
//! The module terminates every line with `\r\n`. [`LineAssembler`] collects
//! bytes until the terminator and hands back the trimmed line, so a UART
//! driver can feed it whatever chunk sizes the hardware delivers.

use heapless::{String, Vec};

use crate::line::LineError;

/// State machine for assembling incoming lines
#[derive(Debug, Clone)]
pub struct LineAssembler<const N: usize> {
    buffer: Vec<u8, N>,
    /// Current line overflowed; drop bytes until the next newline
    discarding: bool,
}

impl<const N: usize> Default for LineAssembler<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineAssembler<N> {
    /// Create a new line assembler
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            discarding: false,
        }
    }

    /// Reset the assembler state
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    /// Number of bytes buffered for the current line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a non-empty line is complete,
    /// `Ok(None)` when more bytes are needed, and
    /// `Err(LineError::LineTooLong)` once for a line that did not fit.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<N>>, LineError> {
        if byte == b'\n' {
            if self.discarding {
                self.discarding = false;
                return Ok(None);
            }
            return Ok(self.take_line());
        }

        if self.discarding {
            return Ok(None);
        }

        if self.buffer.push(byte).is_err() {
            self.buffer.clear();
            self.discarding = true;
            return Err(LineError::LineTooLong);
        }
        Ok(None)
    }

    /// Take the buffered line, trimmed; `None` if it is blank
    fn take_line(&mut self) -> Option<String<N>> {
        let mut line = String::new();
        if let Ok(text) = core::str::from_utf8(&self.buffer) {
            // Cannot fail, the buffer has the same capacity
            let _ = line.push_str(text.trim_end());
        }
        self.buffer.clear();

        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all<const N: usize>(
        assembler: &mut LineAssembler<N>,
        bytes: &[u8],
    ) -> Vec<Result<String<N>, LineError>, 8> {
        let mut out = Vec::new();
        for &byte in bytes {
            match assembler.feed(byte) {
                Ok(Some(line)) => out.push(Ok(line)).unwrap(),
                Ok(None) => {}
                Err(e) => out.push(Err(e)).unwrap(),
            }
        }
        out
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        let mut assembler = LineAssembler::<32>::new();
        let lines = feed_all(&mut assembler, b"CMD\r\nAOK\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_ref().unwrap().as_str(), "CMD");
        assert_eq!(lines[1].as_ref().unwrap().as_str(), "AOK");
    }

    #[test]
    fn test_leading_indent_is_kept() {
        let mut assembler = LineAssembler::<32>::new();
        let lines = feed_all(&mut assembler, b"  2A19,0025  \r\n");
        assert_eq!(lines[0].as_ref().unwrap().as_str(), "  2A19,0025");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut assembler = LineAssembler::<32>::new();
        let lines = feed_all(&mut assembler, b"\r\n\r\n \r\nEND\r\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_ref().unwrap().as_str(), "END");
    }

    #[test]
    fn test_partial_line_waits_for_newline() {
        let mut assembler = LineAssembler::<32>::new();
        assert!(feed_all(&mut assembler, b"Conn").is_empty());
        assert_eq!(assembler.pending(), 4);
        let lines = feed_all(&mut assembler, b"ected\r\n");
        assert_eq!(lines[0].as_ref().unwrap().as_str(), "Connected");
    }

    #[test]
    fn test_overlong_line_discarded_then_resyncs() {
        let mut assembler = LineAssembler::<4>::new();
        let lines = feed_all(&mut assembler, b"TOOLONG\nAOK\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Err(LineError::LineTooLong));
        assert_eq!(lines[1].as_ref().unwrap().as_str(), "AOK");
    }
}
