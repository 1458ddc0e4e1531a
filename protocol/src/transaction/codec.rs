//! Wire encoding and decoding of transactions.
//!
//! The signed pre-image is the protobuf encoding of `ProtoTransaction.Data`.
//! Field handling is deliberately asymmetric and must stay that way:
//!
//! - `nonce`, `epoch`, `type` are always set on the message as native
//!   `uint32` values.
//! - `to`, `amount`, `max_fee`, `tips`, `payload` are normalized to minimal
//!   bytes and left unset when that is empty.
//!
//! The full wire message wraps the data and, when present, the signature.

use prost::Message;
use tracing::{debug, trace};

use super::proto::{ProtoTransaction, ProtoTransactionData};
use super::types::Transaction;
use crate::config::ADDRESS_LENGTH;
use crate::crypto::Address;
use crate::encoding::{bytes_to_hex, bytes_to_uint, hex_to_bytes, uint_to_minimal_bytes};
use crate::error::{CodecError, Result};

impl Transaction {
    /// Builds the `Data` message that is hashed for signing.
    ///
    /// Everything except the signature, in schema order.
    pub fn build_unsigned_payload(&self) -> ProtoTransactionData {
        let mut data = ProtoTransactionData {
            nonce: self.nonce,
            epoch: self.epoch,
            r#type: self.tx_type,
            ..Default::default()
        };

        if let Some(to) = &self.to {
            data.to = to.as_bytes().to_vec();
        }
        data.amount = uint_to_minimal_bytes(self.amount);
        data.max_fee = uint_to_minimal_bytes(self.max_fee);
        data.tips = uint_to_minimal_bytes(self.tips);
        data.payload = self.payload.clone();

        data
    }

    /// Serialized pre-image bytes.
    pub fn unsigned_bytes(&self) -> Vec<u8> {
        self.build_unsigned_payload().encode_to_vec()
    }

    /// Serializes the full wire message.
    ///
    /// An unsigned transaction carries only the data sub-message.
    pub fn encode(&self) -> Vec<u8> {
        let message = ProtoTransaction {
            data: Some(self.build_unsigned_payload()),
            signature: self.signature.clone().unwrap_or_default(),
        };
        let bytes = message.encode_to_vec();
        trace!(
            len = bytes.len(),
            signed = self.is_signed(),
            "encoded transaction"
        );
        bytes
    }

    /// `0x`-prefixed hex of [`Transaction::encode`].
    pub fn encode_hex(&self) -> String {
        bytes_to_hex(&self.encode(), true)
    }

    /// Parses a wire message.
    ///
    /// # Errors
    ///
    /// - [`CodecError::MalformedFrame`] if the bytes do not parse against the
    ///   schema, `to` is present with a length other than 20, or `amount`,
    ///   `max_fee` or `tips` carry a leading zero byte.
    /// - [`CodecError::Overflow`] if `amount`, `max_fee` or `tips` exceed
    ///   `u128`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let message = ProtoTransaction::decode(bytes)?;
        let data = message.data.unwrap_or_default();

        let to = match data.to.len() {
            0 => None,
            ADDRESS_LENGTH => Some(Address::from_slice(&data.to)?),
            n => {
                return Err(CodecError::MalformedFrame(format!(
                    "recipient must be {ADDRESS_LENGTH} bytes, got {n}"
                )))
            }
        };

        let tx = Self {
            nonce: data.nonce,
            epoch: data.epoch,
            tx_type: data.r#type,
            to,
            amount: decode_canonical_uint("amount", &data.amount)?,
            max_fee: decode_canonical_uint("max_fee", &data.max_fee)?,
            tips: decode_canonical_uint("tips", &data.tips)?,
            payload: data.payload,
            signature: (!message.signature.is_empty()).then_some(message.signature),
        };

        debug!(
            nonce = tx.nonce,
            epoch = tx.epoch,
            tx_type = tx.tx_type,
            signed = tx.is_signed(),
            "decoded transaction"
        );
        Ok(tx)
    }

    /// [`Transaction::decode`] over a hex string, with or without `0x`.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidEncoding`] for bad hex, otherwise as `decode`.
    pub fn decode_hex(hex_str: &str) -> Result<Self> {
        Self::decode(&hex_to_bytes(hex_str)?)
    }
}

/// Reads a wire integer that must already be in minimal form.
///
/// A leading zero byte would hash differently from the re-encoded
/// pre-image, so recovery would yield some other signer.
fn decode_canonical_uint(field: &str, bytes: &[u8]) -> Result<u128> {
    if bytes.first() == Some(&0) {
        return Err(CodecError::MalformedFrame(format!(
            "{field} has a leading zero byte"
        )));
    }
    bytes_to_uint(bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
