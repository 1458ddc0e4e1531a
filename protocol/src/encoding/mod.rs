//! # Numeric and Byte Normalization
//!
//! Canonical conversions between hex strings, unsigned integers and the
//! minimal byte sequences that go on the wire.
//!
//! This module is the only place where "zero" and "absent" are reconciled.
//! An integer zero, an empty hex body and [`ByteSource::Absent`] all
//! normalize to the empty byte string, and the codec omits empty fields from
//! the frame. Every other module goes through here instead of doing its own
//! conversions, so the wire encoding cannot silently diverge.
//!
//! ```text
//! hex.rs     — hex_to_bytes / bytes_to_hex, prefix handling and odd-length padding
//! minimal.rs — ByteSource, to_minimal_bytes, bytes_to_uint
//! ```

pub mod hex;
pub mod minimal;

pub use self::hex::{bytes_to_hex, hex_to_bytes, strip_hex_prefix};
pub use minimal::{
    bytes_to_uint, parse_uint_literal, to_hex, to_minimal_bytes, uint_to_minimal_bytes, ByteSource,
};
