//! Test doubles for the driver

use core::cell::Cell;

use heapless::{Deque, String, Vec};
use rn4020_core::EventHandler;
use rn4020_hal::{Clock, ErrorType, Line, LineReader, LineWriter, PowerControl};
use rn4020_protocol::WritePayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Line source replaying queued lines and recording writes
pub struct ScriptedSource {
    lines: Deque<Line, 32>,
    pub written: String<512>,
    pub fail_writes: bool,
    /// Times the driver asked to drop a partial line
    pub cleared: u32,
}

impl ScriptedSource {
    pub fn new(lines: &[&str]) -> Self {
        let mut source = Self {
            lines: Deque::new(),
            written: String::new(),
            fail_writes: false,
            cleared: 0,
        };
        source.push_lines(lines);
        source
    }

    pub fn push_lines(&mut self, lines: &[&str]) {
        for line in lines {
            let mut owned = Line::new();
            owned.push_str(line).unwrap();
            self.lines.push_back(owned).unwrap();
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl ErrorType for ScriptedSource {
    type Error = MockError;
}

impl LineReader for ScriptedSource {
    fn try_read_line(&mut self) -> Result<Option<Line>, MockError> {
        Ok(self.lines.pop_front())
    }

    fn clear(&mut self) {
        self.cleared += 1;
    }
}

impl LineWriter for ScriptedSource {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), MockError> {
        if self.fail_writes {
            return Err(MockError);
        }
        let text = core::str::from_utf8(data).map_err(|_| MockError)?;
        self.written.push_str(text).map_err(|_| MockError)
    }
}

/// Clock that moves forward one millisecond every time it is read
pub struct FakeClock {
    now: Cell<u64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + 1);
        now
    }
}

#[derive(Default)]
pub struct NoPower {
    pub calls: u32,
    pub fail: bool,
}

impl PowerControl for NoPower {
    type Error = ();

    fn power_up(&mut self) -> Result<(), ()> {
        self.calls += 1;
        if self.fail {
            Err(())
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    Connection(bool),
    Read(u16),
    Written(u16, WritePayload),
}

impl Seen {
    pub fn written(handle: u16, payload: &[u8]) -> Self {
        Seen::Written(handle, WritePayload::from_slice(payload).unwrap())
    }
}

/// Handler recording every callback
#[derive(Default)]
pub struct Recorder {
    pub seen: Vec<Seen, 16>,
}

impl EventHandler for Recorder {
    fn connection_changed(&mut self, connected: bool) {
        self.seen.push(Seen::Connection(connected)).unwrap();
    }

    fn real_time_read(&mut self, handle: u16) {
        self.seen.push(Seen::Read(handle)).unwrap();
    }

    fn characteristic_written(&mut self, handle: u16, payload: &[u8]) {
        self.seen.push(Seen::written(handle, payload)).unwrap();
    }
}
