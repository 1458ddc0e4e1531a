//! Hex string conversion with `0x` prefix handling.
//!
//! Decoding is lenient about shape (the prefix is optional and odd-length
//! bodies are left-padded with a single `0` nibble) but strict about
//! content: any character outside `[0-9a-fA-F]` is rejected. Encoding is
//! always lower-case.

use crate::config::HEX_PREFIX;
use crate::error::{CodecError, Result};

/// Returns `s` without its leading `0x`, if it has one.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX).unwrap_or(s)
}

/// Decodes a hex string into bytes.
///
/// The `0x` prefix is optional. An odd-length body is padded to even length
/// with a leading `0` before conversion, so `"0xabc"` decodes as `"0x0abc"`.
/// An empty body (`""` or `"0x"`) yields an empty vector.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] if any character of the body is
/// not a hex digit.
///
/// # Example
///
/// ```
/// use idena_tx::encoding::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("0xabc").unwrap(), vec![0x0a, 0xbc]);
/// assert!(hex_to_bytes("0xzz").is_err());
/// ```
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>> {
    let body = strip_hex_prefix(s);

    if let Some(bad) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidEncoding(format!(
            "non-hex character {bad:?} in {s:?}"
        )));
    }

    let decoded = if body.len() % 2 == 1 {
        hex::decode(format!("0{body}"))
    } else {
        hex::decode(body)
    };

    decoded.map_err(|e| CodecError::InvalidEncoding(e.to_string()))
}

/// Encodes bytes as lower-case hex, two characters per byte.
pub fn bytes_to_hex(bytes: &[u8], with_prefix: bool) -> String {
    if with_prefix {
        format!("{HEX_PREFIX}{}", hex::encode(bytes))
    } else {
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_prefixed_and_bare() {
        assert_eq!(hex_to_bytes("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn odd_length_is_left_padded() {
        assert_eq!(hex_to_bytes("0xabc").unwrap(), vec![0x0a, 0xbc]);
        assert_eq!(hex_to_bytes("f").unwrap(), vec![0x0f]);
    }

    #[test]
    fn empty_body_is_empty_bytes() {
        assert!(hex_to_bytes("").unwrap().is_empty());
        assert!(hex_to_bytes("0x").unwrap().is_empty());
    }

    #[test]
    fn upper_case_digits_are_accepted() {
        assert_eq!(hex_to_bytes("0xABcd").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(matches!(
            hex_to_bytes("0xzz"),
            Err(CodecError::InvalidEncoding(_))
        ));
        assert!(matches!(
            hex_to_bytes("0x12 34"),
            Err(CodecError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn only_a_single_prefix_is_stripped() {
        // "0x0x12" leaves "0x12", where the 'x' is not a hex digit.
        assert!(hex_to_bytes("0x0x12").is_err());
    }

    #[test]
    fn encodes_lower_case() {
        assert_eq!(bytes_to_hex(&[0xAB, 0x01], false), "ab01");
        assert_eq!(bytes_to_hex(&[0xAB, 0x01], true), "0xab01");
        assert_eq!(bytes_to_hex(&[], true), "0x");
    }

    #[test]
    fn strip_prefix_is_idempotent_on_bare_input() {
        assert_eq!(strip_hex_prefix("0x12"), "12");
        assert_eq!(strip_hex_prefix("12"), "12");
    }
}
