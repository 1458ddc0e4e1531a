//! # Hashing
//!
//! Idena uses the original Keccak-256 (the pre-standard padding variant
//! Ethereum also uses), not NIST SHA3-256. The two differ on every input,
//! so the wrong one produces addresses and digests no node will recognize.

use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 digest of `data`.
///
/// # Example
///
/// ```
/// use idena_tx::crypto::keccak256;
///
/// let digest = keccak256(b"");
/// assert_eq!(
///     hex::encode(digest),
///     "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
/// );
/// ```
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
