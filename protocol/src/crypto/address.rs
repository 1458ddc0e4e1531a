//! # Addresses
//!
//! An Idena address is the last 20 bytes of the Keccak-256 hash of the
//! signer's uncompressed public key, with the `0x04` SEC1 prefix dropped.
//! The same construction Ethereum uses, so a key maps to the same address
//! on both networks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::hash::keccak256;
use super::keys::{PrivateKey, PublicKey};
use crate::config::{ADDRESS_LENGTH, HASH_OUTPUT_LENGTH};
use crate::encoding::{bytes_to_hex, hex_to_bytes};
use crate::error::{CodecError, Result};

/// A 20-byte account address.
///
/// Parsed from and rendered as `0x`-prefixed lower-case hex. Serde uses the
/// same string form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// Wraps raw address bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a slice that must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; ADDRESS_LENGTH] = bytes.try_into().map_err(|_| {
            CodecError::InvalidEncoding(format!(
                "address must be {ADDRESS_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Address of the given public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let uncompressed = public_key.to_uncompressed();
        let digest = keccak256(&uncompressed[1..]);
        let mut out = [0u8; ADDRESS_LENGTH];
        out.copy_from_slice(&digest[HASH_OUTPUT_LENGTH - ADDRESS_LENGTH..]);
        Self(out)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// `0x`-prefixed lower-case hex.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0, true)
    }
}

impl FromStr for Address {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(&hex_to_bytes(s)?)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Derives the address controlled by `private_key`.
pub fn derive_address(private_key: &PrivateKey) -> Address {
    Address::from_public_key(&private_key.public_key())
}

/// Hex-in, hex-out address derivation.
///
/// # Errors
///
/// [`CodecError::InvalidKey`] if the input is not a valid secp256k1 secret.
///
/// # Example
///
/// ```
/// use idena_tx::crypto::derive_address_hex;
///
/// let address = derive_address_hex(
///     "0x0000000000000000000000000000000000000000000000000000000000000001",
/// )
/// .unwrap();
/// assert_eq!(address, "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
/// ```
pub fn derive_address_hex(private_key_hex: &str) -> Result<String> {
    let key = PrivateKey::from_hex(private_key_hex)?;
    Ok(derive_address(&key).to_hex())
}
