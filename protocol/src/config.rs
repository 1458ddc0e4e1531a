//! # Protocol Constants
//!
//! Every fixed width, tag number and algorithm name used by the codec lives
//! here. These values are inherited from the deployed Idena network; changing
//! any of them produces transactions that no node will accept.

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Curve used for transaction signatures.
pub const SIGNING_CURVE: &str = "secp256k1";

/// Hash used for both address derivation and pre-image digests.
pub const HASH_FUNCTION: &str = "Keccak-256";

/// Private key length in bytes. A secp256k1 secret scalar.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Uncompressed public key length: `0x04 || x(32) || y(32)`.
pub const UNCOMPRESSED_PUBLIC_KEY_LENGTH: usize = 65;

/// Keccak-256 digest length in bytes.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Address length in bytes: the trailing slice of the public key hash.
pub const ADDRESS_LENGTH: usize = 20;

/// Compact ECDSA signature length, `r(32) || s(32)`.
pub const COMPACT_SIGNATURE_LENGTH: usize = 64;

/// Full transaction signature length, `r(32) || s(32) || recovery_id(1)`.
pub const SIGNATURE_LENGTH: usize = COMPACT_SIGNATURE_LENGTH + 1;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Prefix carried by every hex string the crate produces.
pub const HEX_PREFIX: &str = "0x";

/// Widest integer the model holds for `amount`, `max_fee` and `tips`.
/// Values are `u128`, so anything with more than 16 significant bytes
/// overflows on decode.
pub const MAX_INTEGER_BYTES: usize = 16;

// ---------------------------------------------------------------------------
// Wire Schema (models.proto)
// ---------------------------------------------------------------------------

/// `ProtoTransaction.data` field tag.
pub const TAG_TX_DATA: u32 = 1;
/// `ProtoTransaction.signature` field tag.
pub const TAG_TX_SIGNATURE: u32 = 2;

/// `ProtoTransaction.Data.nonce` field tag.
pub const TAG_DATA_NONCE: u32 = 1;
/// `ProtoTransaction.Data.epoch` field tag.
pub const TAG_DATA_EPOCH: u32 = 2;
/// `ProtoTransaction.Data.type` field tag.
pub const TAG_DATA_TYPE: u32 = 3;
/// `ProtoTransaction.Data.to` field tag.
pub const TAG_DATA_TO: u32 = 4;
/// `ProtoTransaction.Data.amount` field tag.
pub const TAG_DATA_AMOUNT: u32 = 5;
/// `ProtoTransaction.Data.maxFee` field tag.
pub const TAG_DATA_MAX_FEE: u32 = 6;
/// `ProtoTransaction.Data.tips` field tag.
pub const TAG_DATA_TIPS: u32 = 7;
/// `ProtoTransaction.Data.payload` field tag.
pub const TAG_DATA_PAYLOAD: u32 = 8;
