//! # Key Handling
//!
//! secp256k1 private and public keys for transaction signing.
//!
//! The crate never generates or stores keys; callers bring their own 32-byte
//! secret. This module only validates it and derives the public point.
//!
//! Key bytes are never logged and never appear in error messages or
//! `Debug` output.

use secp256k1::{PublicKey as SecpPublicKey, Secp256k1, SecretKey};
use std::fmt;
use thiserror::Error;

use crate::config::{PRIVATE_KEY_LENGTH, UNCOMPRESSED_PUBLIC_KEY_LENGTH};
use crate::encoding::hex_to_bytes;

/// Errors that can occur while loading keys.
///
/// Messages never include key material.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid secret key bytes: wrong length or not a valid scalar")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid secp256k1 point")]
    InvalidPublicKey,
}

/// A secp256k1 private key.
///
/// Does not implement `Serialize`, `Clone` is explicit, and `Debug` is
/// redacted. Exporting the secret is not supported.
///
/// # Examples
///
/// ```
/// use idena_tx::crypto::PrivateKey;
///
/// let key = PrivateKey::from_hex(
///     "0x0000000000000000000000000000000000000000000000000000000000000001",
/// )
/// .unwrap();
/// assert_eq!(key.public_key().to_uncompressed()[0], 0x04);
/// ```
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
}

/// The public point of a [`PrivateKey`], or one recovered from a signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    inner: SecpPublicKey,
}

impl PrivateKey {
    /// Loads a key from raw secret bytes.
    ///
    /// Fails unless `bytes` is exactly 32 bytes encoding a scalar in
    /// `[1, n)`, where `n` is the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(KeyError::InvalidSecretKey);
        }
        let secret = SecretKey::from_slice(bytes).map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self { secret })
    }

    /// Loads a key from a hex string, with or without `0x`.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex_to_bytes(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        Self::from_bytes(&bytes)
    }

    /// Derives the public key.
    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::signing_only();
        PublicKey {
            inner: SecpPublicKey::from_secret_key(&secp, &self.secret),
        }
    }

    pub(crate) fn secret(&self) -> &SecretKey {
        &self.secret
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl PublicKey {
    /// Parses a serialized public key (33-byte compressed or 65-byte
    /// uncompressed form).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        SecpPublicKey::from_slice(bytes)
            .map(|inner| Self { inner })
            .map_err(|_| KeyError::InvalidPublicKey)
    }

    /// The uncompressed SEC1 encoding: `0x04 || x || y`.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH] {
        self.inner.serialize_uncompressed()
    }

    pub(crate) fn inner(&self) -> &SecpPublicKey {
        &self.inner
    }

    pub(crate) fn from_inner(inner: SecpPublicKey) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_uncompressed()))
    }
}
