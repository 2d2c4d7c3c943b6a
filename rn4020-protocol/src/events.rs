//! Asynchronous notifications from the RN4020
//!
//! The module reports connection changes and peer activity on the same
//! line channel it uses for command responses. These lines can arrive at
//! any moment, interleaved with an acknowledgement, so they are recognised
//! before any state-specific parsing.

use heapless::Vec;

use crate::line::LineError;
use crate::uuid::{decode_hex, parse_u16_hex};

/// Largest characteristic value a `WV` line can carry, in bytes
pub const MAX_WRITE_PAYLOAD: usize = 45;

// Wire format
const CONNECTED: &str = "Connected";
const CONNECTION_END: &str = "Connection End";
const REAL_TIME_READ_PREFIX: &str = "RV,";
const WRITE_PREFIX: &str = "WV,";
const WRITE_TERMINATOR: char = '.';

/// Characteristic value written by the peer
pub type WritePayload = Vec<u8, MAX_WRITE_PAYLOAD>;

/// Notification lines, recognised in every protocol state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// A central connected (`Connected`)
    Connected,
    /// The link dropped (`Connection End`)
    ConnectionEnd,
    /// Peer is reading a characteristic configured for real-time read
    /// (`RV,HHHH`)
    RealTimeRead { handle: u16 },
    /// Peer wrote a characteristic (`WV,HHHH,<hex>.`)
    Write { handle: u16, payload: WritePayload },
}

impl Notification {
    /// Parse a trimmed line as a notification
    ///
    /// Returns `Ok(None)` when the line is not a notification at all, and
    /// `Err(LineError::Malformed)` when it carries a notification prefix but
    /// a broken body.
    pub fn parse(line: &str) -> Result<Option<Self>, LineError> {
        if line == CONNECTED {
            return Ok(Some(Notification::Connected));
        }
        if line == CONNECTION_END {
            return Ok(Some(Notification::ConnectionEnd));
        }

        if let Some(body) = line.strip_prefix(REAL_TIME_READ_PREFIX) {
            // Some firmware revisions close this line with a period too
            let body = body.strip_suffix(WRITE_TERMINATOR).unwrap_or(body);
            let handle = parse_u16_hex(body).map_err(|_| LineError::Malformed)?;
            return Ok(Some(Notification::RealTimeRead { handle }));
        }

        if let Some(body) = line.strip_prefix(WRITE_PREFIX) {
            let (handle, data) = body.split_once(',').ok_or(LineError::Malformed)?;
            let handle = parse_u16_hex(handle).map_err(|_| LineError::Malformed)?;
            let data = data
                .strip_suffix(WRITE_TERMINATOR)
                .ok_or(LineError::Malformed)?;
            if data.len() / 2 > MAX_WRITE_PAYLOAD {
                return Err(LineError::PayloadTooLarge);
            }

            let mut buf = [0u8; MAX_WRITE_PAYLOAD];
            let count = decode_hex(data, &mut buf).map_err(|_| LineError::Malformed)?;
            let mut payload = WritePayload::new();
            payload
                .extend_from_slice(&buf[..count])
                .map_err(|_| LineError::PayloadTooLarge)?;
            return Ok(Some(Notification::Write { handle, payload }));
        }

        Ok(None)
    }
}
