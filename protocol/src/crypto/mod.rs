//! # Cryptographic Primitives
//!
//! Thin, typed wrappers around the two primitives an Idena transaction
//! depends on:
//!
//! - **secp256k1** for keys and recoverable ECDSA signatures, via the
//!   `secp256k1` crate (bindings to libsecp256k1). Signing uses RFC 6979
//!   deterministic nonces and always emits low-s signatures.
//! - **Keccak-256** for address derivation and pre-image digests, via `sha3`.
//!
//! Nothing here knows about transactions. The codec hands in digests and
//! gets back bytes.

pub mod address;
pub mod hash;
pub mod keys;
pub mod signatures;

pub use address::{derive_address, derive_address_hex, Address};
pub use hash::keccak256;
pub use keys::{KeyError, PrivateKey, PublicKey};
pub use signatures::{recover_public_key, sign_digest, verify_digest, SignatureError};
