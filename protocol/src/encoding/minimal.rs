//! Minimal big-endian encoding of field values.
//!
//! Optional transaction fields go on the wire as length-prefixed byte
//! strings holding the *minimal* big-endian form of their value: no leading
//! zero byte, and zero itself is the empty string. An empty string is then
//! omitted from the frame entirely.

use crate::config::{HEX_PREFIX, MAX_INTEGER_BYTES};
use crate::error::{CodecError, Result};

use super::hex::{bytes_to_hex, hex_to_bytes};

/// A value that can be normalized into wire bytes.
///
/// Each variant has exactly one conversion rule in [`to_minimal_bytes`].
/// Anything that is not one of these shapes cannot be passed in at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteSource<'a> {
    /// An unsigned integer, encoded as minimal big-endian bytes.
    Uint(u128),
    /// A hex string, with or without `0x`. Decoded as-is, leading zero
    /// bytes included.
    Hex(&'a str),
    /// Raw bytes, passed through unchanged.
    Raw(&'a [u8]),
    /// No value. Always the empty byte string.
    Absent,
}

impl From<u128> for ByteSource<'_> {
    fn from(v: u128) -> Self {
        ByteSource::Uint(v)
    }
}

impl From<u64> for ByteSource<'_> {
    fn from(v: u64) -> Self {
        ByteSource::Uint(v as u128)
    }
}

impl From<u32> for ByteSource<'_> {
    fn from(v: u32) -> Self {
        ByteSource::Uint(v as u128)
    }
}

impl<'a> From<&'a str> for ByteSource<'a> {
    fn from(s: &'a str) -> Self {
        ByteSource::Hex(s)
    }
}

impl<'a> From<&'a [u8]> for ByteSource<'a> {
    fn from(b: &'a [u8]) -> Self {
        ByteSource::Raw(b)
    }
}

impl<'a, T> From<Option<T>> for ByteSource<'a>
where
    T: Into<ByteSource<'a>>,
{
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(ByteSource::Absent)
    }
}

/// Normalizes a value into its wire byte form.
///
/// - `Uint(0)` → `[]`, `Uint(255)` → `[0xff]`, `Uint(256)` → `[0x01, 0x00]`
/// - `Hex(s)` → [`hex_to_bytes`]`(s)`
/// - `Raw(b)` → `b`
/// - `Absent` → `[]`
///
/// # Errors
///
/// Only the `Hex` variant can fail, with [`CodecError::InvalidEncoding`].
pub fn to_minimal_bytes(value: ByteSource<'_>) -> Result<Vec<u8>> {
    match value {
        ByteSource::Uint(v) => Ok(uint_to_minimal_bytes(v)),
        ByteSource::Hex(s) => hex_to_bytes(s),
        ByteSource::Raw(b) => Ok(b.to_vec()),
        ByteSource::Absent => Ok(Vec::new()),
    }
}

/// `0x`-prefixed hex of a normalized value.
///
/// Integers come out in their minimal form, so `to_hex(Uint(0))` is `"0x"`.
pub fn to_hex(value: ByteSource<'_>) -> Result<String> {
    Ok(bytes_to_hex(&to_minimal_bytes(value)?, true))
}

/// Interprets bytes as a big-endian unsigned integer.
///
/// The empty string is zero. Leading zero bytes are tolerated so that
/// non-minimal encodings from other producers still decode.
///
/// # Errors
///
/// Returns [`CodecError::Overflow`] when more than 16 significant bytes
/// remain after the leading zeros.
pub fn bytes_to_uint(bytes: &[u8]) -> Result<u128> {
    let first_significant = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_significant..];

    if significant.len() > MAX_INTEGER_BYTES {
        return Err(CodecError::Overflow {
            len: significant.len(),
            max: MAX_INTEGER_BYTES,
        });
    }

    Ok(significant
        .iter()
        .fold(0u128, |acc, &b| (acc << 8) | b as u128))
}

/// Minimal big-endian bytes of an integer. Infallible form of
/// [`to_minimal_bytes`] for the `Uint` variant.
pub fn uint_to_minimal_bytes(v: u128) -> Vec<u8> {
    let bytes = v.to_be_bytes();
    let skip = (v.leading_zeros() / 8) as usize;
    bytes[skip..].to_vec()
}

/// Parses a decimal or `0x`-hex integer literal, as typed on a command line.
///
/// # Errors
///
/// [`CodecError::InvalidType`] if the literal is neither form, and
/// [`CodecError::Overflow`] if a hex literal is wider than 16 bytes.
pub fn parse_uint_literal(s: &str) -> Result<u128> {
    let trimmed = s.trim();
    if trimmed.starts_with(HEX_PREFIX) {
        let bytes = hex_to_bytes(trimmed).map_err(|_| {
            CodecError::InvalidType(format!("{s:?} is not a hex integer"))
        })?;
        return bytes_to_uint(&bytes);
    }
    trimmed
        .parse::<u128>()
        .map_err(|_| CodecError::InvalidType(format!("{s:?} is not an unsigned integer")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_empty() {
        assert_eq!(to_minimal_bytes(ByteSource::Uint(0)).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn integers_are_minimal_big_endian() {
        assert_eq!(to_minimal_bytes(255u64.into()).unwrap(), vec![0xff]);
        assert_eq!(to_minimal_bytes(256u64.into()).unwrap(), vec![0x01, 0x00]);
        assert_eq!(
            to_minimal_bytes(ByteSource::Uint(u128::MAX)).unwrap(),
            vec![0xff; 16]
        );
    }

    #[test]
    fn one_idna_in_base_units() {
        // 10^18 = 0x0de0b6b3a7640000
        let bytes = to_minimal_bytes(ByteSource::Uint(1_000_000_000_000_000_000)).unwrap();
        assert_eq!(bytes, vec![0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00]);
    }

    #[test]
    fn hex_source_keeps_leading_zero_bytes() {
        assert_eq!(to_minimal_bytes("0x0001".into()).unwrap(), vec![0x00, 0x01]);
        assert_eq!(to_minimal_bytes("abc".into()).unwrap(), vec![0x0a, 0xbc]);
    }

    #[test]
    fn raw_and_absent() {
        let raw = [1u8, 2, 3];
        assert_eq!(to_minimal_bytes(ByteSource::Raw(&raw)).unwrap(), raw.to_vec());
        assert!(to_minimal_bytes(ByteSource::Absent).unwrap().is_empty());
        assert!(to_minimal_bytes(None::<u64>.into()).unwrap().is_empty());
    }

    #[test]
    fn bad_hex_source_fails() {
        assert!(matches!(
            to_minimal_bytes("0xnope".into()),
            Err(CodecError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn to_hex_of_sources() {
        assert_eq!(to_hex(ByteSource::Uint(0)).unwrap(), "0x");
        assert_eq!(to_hex(ByteSource::Uint(4096)).unwrap(), "0x1000");
        assert_eq!(to_hex("0xABC".into()).unwrap(), "0x0abc");
    }

    #[test]
    fn bytes_to_uint_basics() {
        assert_eq!(bytes_to_uint(&[]).unwrap(), 0);
        assert_eq!(bytes_to_uint(&[0xff]).unwrap(), 255);
        assert_eq!(bytes_to_uint(&[0x01, 0x00]).unwrap(), 256);
        assert_eq!(bytes_to_uint(&[0x00, 0x00, 0x01]).unwrap(), 1);
    }

    #[test]
    fn bytes_to_uint_ceiling() {
        assert_eq!(bytes_to_uint(&[0xff; 16]).unwrap(), u128::MAX);

        let mut padded = vec![0u8; 4];
        padded.extend_from_slice(&[0xff; 16]);
        assert_eq!(bytes_to_uint(&padded).unwrap(), u128::MAX);

        let mut too_wide = vec![0x01];
        too_wide.extend_from_slice(&[0u8; 16]);
        assert_eq!(
            bytes_to_uint(&too_wide),
            Err(CodecError::Overflow { len: 17, max: 16 })
        );
    }

    #[test]
    fn minimal_bytes_invert_through_bytes_to_uint() {
        for v in [1u128, 127, 128, 65_535, 1 << 64, u128::MAX - 1] {
            let bytes = to_minimal_bytes(ByteSource::Uint(v)).unwrap();
            assert_ne!(bytes[0], 0, "leading zero byte for {v}");
            assert_eq!(bytes_to_uint(&bytes).unwrap(), v);
        }
    }

    #[test]
    fn uint_literals() {
        assert_eq!(parse_uint_literal("42").unwrap(), 42);
        assert_eq!(parse_uint_literal("0x2a").unwrap(), 42);
        assert_eq!(parse_uint_literal("0x").unwrap(), 0);
        assert!(matches!(
            parse_uint_literal("forty-two"),
            Err(CodecError::InvalidType(_))
        ));
        assert!(matches!(
            parse_uint_literal("-1"),
            Err(CodecError::InvalidType(_))
        ));
    }
}
