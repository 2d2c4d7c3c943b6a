//! UUID and hex payload codec
//!
//! The module exchanges UUIDs and characteristic values as uppercase hex
//! digits, two per byte, most significant nibble first. 16-bit (public)
//! UUIDs travel as a 2-byte big-endian array and 128-bit (private) UUIDs
//! as a 16-byte array; both share the same codec.

use core::fmt;

use heapless::Vec;

/// Length of a public (SIG-assigned) UUID in bytes
pub const UUID16_LEN: usize = 2;

/// Length of a private UUID in bytes
pub const UUID128_LEN: usize = 16;

/// Hex digits of a private UUID
pub const UUID128_HEX_LEN: usize = UUID128_LEN * 2;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Errors from hex decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// Hex string has an odd number of digits
    OddLength,
    /// Character outside `0-9`, `A-F`, `a-f`
    InvalidDigit,
    /// Output buffer cannot hold the decoded bytes
    BufferTooSmall,
}

/// Errors from UUID construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UuidError {
    /// Neither 2 nor 16 bytes (4 or 32 hex digits)
    InvalidLength,
    /// Hex decoding failed
    Hex(HexError),
}

impl From<HexError> for UuidError {
    fn from(err: HexError) -> Self {
        UuidError::Hex(err)
    }
}

/// Write `bytes` as uppercase hex, two digits per byte
pub fn encode_hex<W: fmt::Write>(bytes: &[u8], out: &mut W) -> fmt::Result {
    for &byte in bytes {
        out.write_char(HEX_DIGITS[(byte >> 4) as usize] as char)?;
        out.write_char(HEX_DIGITS[(byte & 0x0F) as usize] as char)?;
    }
    Ok(())
}

/// Decode a single hex digit
fn nibble(digit: u8) -> Result<u8, HexError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        _ => Err(HexError::InvalidDigit),
    }
}

/// Decode `hex` into `out`, two digits per byte
///
/// Returns the number of bytes written, always `hex.len() / 2`.
pub fn decode_hex(hex: &str, out: &mut [u8]) -> Result<usize, HexError> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }
    let count = digits.len() / 2;
    if out.len() < count {
        return Err(HexError::BufferTooSmall);
    }

    for (slot, pair) in out.iter_mut().zip(digits.chunks_exact(2)) {
        *slot = (nibble(pair[0])? << 4) | nibble(pair[1])?;
    }
    Ok(count)
}

/// Parse exactly four hex digits as a big-endian `u16`
///
/// Used for characteristic handles, which the module always prints with
/// four digits.
pub fn parse_u16_hex(hex: &str) -> Result<u16, HexError> {
    if hex.len() != 4 {
        return Err(HexError::InvalidDigit);
    }
    let mut bytes = [0u8; 2];
    decode_hex(hex, &mut bytes)?;
    Ok(u16::from_be_bytes(bytes))
}

/// A characteristic or service UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Uuid {
    /// 16-bit SIG-assigned UUID
    Uuid16(u16),
    /// 128-bit private UUID, in wire (big-endian) order
    Uuid128([u8; UUID128_LEN]),
}

impl Uuid {
    /// Number of bytes on the wire (2 or 16)
    pub fn byte_len(&self) -> usize {
        match self {
            Uuid::Uuid16(_) => UUID16_LEN,
            Uuid::Uuid128(_) => UUID128_LEN,
        }
    }

    /// Wire representation
    pub fn to_bytes(&self) -> Vec<u8, UUID128_LEN> {
        let mut bytes = Vec::new();
        // Both variants fit in UUID128_LEN
        let _ = match self {
            Uuid::Uuid16(value) => bytes.extend_from_slice(&value.to_be_bytes()),
            Uuid::Uuid128(value) => bytes.extend_from_slice(value),
        };
        bytes
    }

    /// Build from a 2- or 16-byte wire representation
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, UuidError> {
        match bytes.len() {
            UUID16_LEN => Ok(Uuid::Uuid16(u16::from_be_bytes([bytes[0], bytes[1]]))),
            UUID128_LEN => {
                let mut value = [0u8; UUID128_LEN];
                value.copy_from_slice(bytes);
                Ok(Uuid::Uuid128(value))
            }
            _ => Err(UuidError::InvalidLength),
        }
    }

    /// Parse 4 or 32 hex digits
    pub fn parse_hex(hex: &str) -> Result<Self, UuidError> {
        if hex.len() != UUID16_LEN * 2 && hex.len() != UUID128_HEX_LEN {
            return Err(UuidError::InvalidLength);
        }
        let mut bytes = [0u8; UUID128_LEN];
        let count = decode_hex(hex, &mut bytes)?;
        Self::from_bytes(&bytes[..count])
    }

    /// True if this is the given 16-bit UUID
    pub fn is_uuid16(&self, uuid: u16) -> bool {
        matches!(self, Uuid::Uuid16(value) if *value == uuid)
    }

    /// True if this is the given 128-bit UUID
    pub fn is_uuid128(&self, uuid: &[u8; UUID128_LEN]) -> bool {
        matches!(self, Uuid::Uuid128(value) if value == uuid)
    }
}

impl From<u16> for Uuid {
    fn from(uuid: u16) -> Self {
        Uuid::Uuid16(uuid)
    }
}

impl From<[u8; UUID128_LEN]> for Uuid {
    fn from(uuid: [u8; UUID128_LEN]) -> Self {
        Uuid::Uuid128(uuid)
    }
}

/// Uppercase hex, as sent to the module
impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        encode_hex(&self.to_bytes(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;
    use proptest::prelude::*;

    fn hex<const N: usize>(bytes: &[u8]) -> String<N> {
        let mut out = String::new();
        encode_hex(bytes, &mut out).unwrap();
        out
    }

    #[test]
    fn test_encode_uppercase_msb_first() {
        let out: String<8> = hex(&[0x0A, 0x1B, 0xFF, 0x00]);
        assert_eq!(out.as_str(), "0A1BFF00");
    }

    #[test]
    fn test_decode_accepts_lowercase() {
        let mut out = [0u8; 2];
        assert_eq!(decode_hex("2a19", &mut out), Ok(2));
        assert_eq!(out, [0x2A, 0x19]);
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        let mut out = [0u8; 4];
        assert_eq!(decode_hex("ABC", &mut out), Err(HexError::OddLength));
    }

    #[test]
    fn test_decode_rejects_bad_digit() {
        let mut out = [0u8; 4];
        assert_eq!(decode_hex("0G", &mut out), Err(HexError::InvalidDigit));
    }

    #[test]
    fn test_decode_buffer_too_small() {
        let mut out = [0u8; 1];
        assert_eq!(decode_hex("0102", &mut out), Err(HexError::BufferTooSmall));
    }

    #[test]
    fn test_parse_handle() {
        assert_eq!(parse_u16_hex("00A1"), Ok(0x00A1));
        assert!(parse_u16_hex("A1").is_err());
        assert!(parse_u16_hex("00A1F").is_err());
    }

    #[test]
    fn test_uuid16_is_big_endian() {
        let uuid = Uuid::Uuid16(0x2A19);
        assert_eq!(uuid.to_bytes().as_slice(), &[0x2A, 0x19]);
        let text: String<4> = {
            let mut s = String::new();
            core::fmt::write(&mut s, format_args!("{}", uuid)).unwrap();
            s
        };
        assert_eq!(text.as_str(), "2A19");
    }

    #[test]
    fn test_uuid_parse_lengths() {
        assert_eq!(Uuid::parse_hex("180F"), Ok(Uuid::Uuid16(0x180F)));
        assert!(matches!(
            Uuid::parse_hex("00112233445566778899AABBCCDDEEFF"),
            Ok(Uuid::Uuid128(_))
        ));
        assert_eq!(Uuid::parse_hex("0011223344"), Err(UuidError::InvalidLength));
    }

    #[test]
    fn test_uuid_matchers_check_length() {
        let short = Uuid::Uuid16(0x2A19);
        let long = Uuid::Uuid128([0x2A; 16]);
        assert!(short.is_uuid16(0x2A19));
        assert!(!short.is_uuid128(&[0x2A; 16]));
        assert!(long.is_uuid128(&[0x2A; 16]));
        assert!(!long.is_uuid16(0x2A2A));
    }

    proptest! {
        #[test]
        fn prop_uuid16_codec_roundtrip(bytes in proptest::array::uniform2(any::<u8>())) {
            let text: String<4> = hex(&bytes);
            let mut decoded = [0u8; 2];
            prop_assert_eq!(decode_hex(&text, &mut decoded), Ok(2));
            prop_assert_eq!(decoded, bytes);
        }

        #[test]
        fn prop_uuid128_codec_roundtrip(bytes in proptest::array::uniform16(any::<u8>())) {
            let text: String<32> = hex(&bytes);
            let mut decoded = [0u8; 16];
            prop_assert_eq!(decode_hex(&text, &mut decoded), Ok(16));
            prop_assert_eq!(decoded, bytes);
            prop_assert_eq!(Uuid::parse_hex(&text), Ok(Uuid::Uuid128(bytes)));
        }
    }
}
