//! # Transaction Module
//!
//! Construction, signing and wire encoding of Idena transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs   — Transaction, TransactionKind, TransactionDisplay
//! builder.rs — Fluent TransactionBuilder for unsigned transactions
//! proto.rs   — prost messages mirroring the deployed models.proto
//! codec.rs   — Pre-image construction, encode/decode, hex helpers
//! signing.rs — Keccak-256 + secp256k1 signing and sender recovery
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — [`TransactionBuilder`] or a struct literal.
//! 2. **Sign** — [`sign_transaction`] (or [`Transaction::sign`]).
//! 3. **Encode** — [`Transaction::encode`] / [`Transaction::encode_hex`]
//!    for broadcast.
//! 4. **Decode** — [`Transaction::decode`] / [`Transaction::decode_hex`] on
//!    the receiving side, then [`recover_sender`] to learn who signed it.
//!
//! ## Design Decisions
//!
//! - `amount`, `max_fee` and `tips` are `u128`. Total iDNA supply in base
//!   units fits comfortably; wider values fail to decode with `Overflow`.
//! - `payload` is held as bytes. Hex only enters through the builder and
//!   leaves through the display view, so decode → encode is byte-identical.
//! - `to` is an [`Address`](crate::crypto::Address), which cannot hold
//!   anything but 20 bytes.

pub mod builder;
pub mod codec;
pub mod proto;
pub mod signing;
pub mod types;

pub use builder::TransactionBuilder;
pub use proto::{ProtoTransaction, ProtoTransactionData};
pub use signing::{recover_sender, sign_transaction, signing_digest, verify_sender};
pub use types::{Transaction, TransactionDisplay, TransactionKind};
