//! # Recoverable ECDSA Signatures
//!
//! Signing and verification over 32-byte digests.
//!
//! Idena signatures are 65 bytes: the compact `r || s` form followed by the
//! recovery id. The recovery id lets a verifier reconstruct the signer's
//! public key from the digest and signature alone, which is how nodes learn
//! the sender of a transaction (there is no `from` field on the wire).
//!
//! libsecp256k1 derives the nonce with RFC 6979 and normalizes to low-s, so
//! signing the same digest with the same key is byte-for-byte repeatable.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1};
use thiserror::Error;

use super::keys::{PrivateKey, PublicKey};
use crate::config::{COMPACT_SIGNATURE_LENGTH, SIGNATURE_LENGTH};

/// Errors during signature recovery and verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("expected 65 signature bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    #[error("signature bytes do not form a valid signature")]
    InvalidSignatureBytes,

    #[error("public key recovery failed")]
    RecoveryFailed,
}

/// Signs a 32-byte digest, returning `r || s || recovery_id`.
///
/// Cannot fail: a [`PrivateKey`] is already a validated scalar and a digest
/// is always a valid message.
pub fn sign_digest(key: &PrivateKey, digest: &[u8; 32]) -> [u8; SIGNATURE_LENGTH] {
    let secp = Secp256k1::signing_only();
    let message = Message::from_digest(*digest);
    let (recovery_id, compact) = secp
        .sign_ecdsa_recoverable(&message, key.secret())
        .serialize_compact();

    let mut out = [0u8; SIGNATURE_LENGTH];
    out[..COMPACT_SIGNATURE_LENGTH].copy_from_slice(&compact);
    // Recovery ids are 0..=3 by construction.
    out[COMPACT_SIGNATURE_LENGTH] = recovery_id.to_i32() as u8;
    out
}

/// Recovers the public key that produced `signature` over `digest`.
pub fn recover_public_key(digest: &[u8; 32], signature: &[u8]) -> Result<PublicKey, SignatureError> {
    let recoverable = parse_recoverable(signature)?;
    let secp = Secp256k1::verification_only();
    let message = Message::from_digest(*digest);

    secp.recover_ecdsa(&message, &recoverable)
        .map(PublicKey::from_inner)
        .map_err(|_| SignatureError::RecoveryFailed)
}

/// Verifies `signature` over `digest` against a known public key.
///
/// Returns `false` for any failure, including malformed signature bytes.
/// The recovery byte is parsed but the check itself is a plain ECDSA verify.
pub fn verify_digest(public_key: &PublicKey, digest: &[u8; 32], signature: &[u8]) -> bool {
    let Ok(recoverable) = parse_recoverable(signature) else {
        return false;
    };
    let secp = Secp256k1::verification_only();
    let message = Message::from_digest(*digest);

    secp.verify_ecdsa(&message, &recoverable.to_standard(), public_key.inner())
        .is_ok()
}

fn parse_recoverable(signature: &[u8]) -> Result<RecoverableSignature, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength(signature.len()));
    }
    let recovery_byte = signature[COMPACT_SIGNATURE_LENGTH];
    let recovery_id = RecoveryId::from_i32(recovery_byte as i32)
        .map_err(|_| SignatureError::InvalidRecoveryId(recovery_byte))?;

    RecoverableSignature::from_compact(&signature[..COMPACT_SIGNATURE_LENGTH], recovery_id)
        .map_err(|_| SignatureError::InvalidSignatureBytes)
}
