//! Error types for the transaction codec.
//!
//! Every fallible operation in the crate returns a [`CodecError`]. The
//! crypto layer has its own narrower errors ([`KeyError`], [`SignatureError`])
//! which convert into the matching variant here.

use thiserror::Error;

use crate::crypto::keys::KeyError;
use crate::crypto::signatures::SignatureError;

/// Errors that can occur while normalizing, signing, encoding or decoding
/// a transaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A hex string contained a non-hex character, or a hex value had the
    /// wrong length for its destination type.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A value of an unsupported shape was offered to the normalizer.
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// The private key is not a valid secp256k1 scalar.
    #[error("invalid private key")]
    InvalidKey,

    /// Wire bytes do not parse against the transaction schema.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// A decoded integer does not fit in the integer width of the model.
    #[error("integer overflow: {len} significant bytes exceed the {max}-byte ceiling")]
    Overflow {
        /// Significant (non-leading-zero) byte count of the decoded value.
        len: usize,
        /// Maximum byte width the model can hold.
        max: usize,
    },

    /// The attached signature is absent, has the wrong shape, or does not
    /// recover to a public key.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}

impl From<KeyError> for CodecError {
    fn from(_: KeyError) -> Self {
        // Key errors stay vague on purpose; no detail about the material.
        CodecError::InvalidKey
    }
}

impl From<SignatureError> for CodecError {
    fn from(err: SignatureError) -> Self {
        CodecError::InvalidSignature(err.to_string())
    }
}

impl From<prost::DecodeError> for CodecError {
    fn from(err: prost::DecodeError) -> Self {
        CodecError::MalformedFrame(err.to_string())
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CodecError>;
