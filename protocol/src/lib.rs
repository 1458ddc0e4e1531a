// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # idena-tx — Transaction Codec & Signer
//!
//! Client-side encoding and signing for Idena transactions: a private key
//! and a set of fields in, canonical protobuf bytes out, and back again.
//!
//! ## Architecture
//!
//! - **encoding** — Hex and minimal big-endian conversions. The one place
//!   "zero" and "absent" are reconciled.
//! - **crypto** — secp256k1 keys and recoverable signatures, Keccak-256,
//!   address derivation.
//! - **transaction** — The transaction model, builder, wire schema, codec
//!   and signer.
//! - **config** — Fixed widths, tag numbers and algorithm names.
//! - **error** — The [`CodecError`] taxonomy.
//!
//! ## Quick Start
//!
//! ```
//! use idena_tx::crypto::{derive_address, PrivateKey};
//! use idena_tx::transaction::{Transaction, TransactionBuilder, TransactionKind};
//!
//! let key = PrivateKey::from_hex(
//!     "0x0000000000000000000000000000000000000000000000000000000000000001",
//! )?;
//!
//! let mut tx = TransactionBuilder::new(TransactionKind::SendTx)
//!     .nonce(1)
//!     .epoch(100)
//!     .to_hex("0x2b5ad5c4795c026514f8317c7a215e218dccd6cf")?
//!     .amount(1_000_000_000_000_000_000)
//!     .build();
//! tx.sign(&key);
//!
//! let wire = tx.encode_hex();
//! let decoded = Transaction::decode_hex(&wire)?;
//! assert_eq!(decoded, tx);
//! assert_eq!(decoded.sender()?, derive_address(&key));
//! # Ok::<(), idena_tx::CodecError>(())
//! ```
//!
//! Nothing here talks to the network. Broadcasting, fee estimation and key
//! storage are the caller's business.

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod transaction;

pub use error::{CodecError, Result};
