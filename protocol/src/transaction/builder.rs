//! Transaction construction via the builder pattern.
//!
//! The builder does not sign. That happens in [`super::signing`], which
//! keeps construction testable without key material.
//!
//! Setters that take typed values cannot fail. The hex-accepting setters
//! ([`TransactionBuilder::to_hex`], [`TransactionBuilder::payload_hex`]) go
//! through the normalizer and return `Result<Self>`, so a chain reads
//! `.payload_hex("0x…")?`.

use super::types::{Transaction, TransactionKind};
use crate::crypto::Address;
use crate::encoding::{to_minimal_bytes, ByteSource};
use crate::error::Result;

/// Fluent builder for unsigned [`Transaction`] values.
///
/// # Usage
///
/// ```
/// use idena_tx::transaction::{TransactionBuilder, TransactionKind};
///
/// let tx = TransactionBuilder::new(TransactionKind::SendTx)
///     .nonce(7)
///     .epoch(104)
///     .to_hex("0x2b5ad5c4795c026514f8317c7a215e218dccd6cf")?
///     .amount(1_000_000_000_000_000_000)
///     .max_fee(20_000_000_000_000_000)
///     .build();
///
/// assert!(!tx.is_signed());
/// # Ok::<(), idena_tx::CodecError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// Starts a builder for the given kind. All other fields default to zero.
    pub fn new(kind: TransactionKind) -> Self {
        Self::default().tx_type(kind.as_u32())
    }

    /// Sets the sender's nonce.
    pub fn nonce(mut self, nonce: u32) -> Self {
        self.tx.nonce = nonce;
        self
    }

    /// Sets the epoch.
    pub fn epoch(mut self, epoch: u32) -> Self {
        self.tx.epoch = epoch;
        self
    }

    /// Sets a raw type discriminator, known or not.
    pub fn tx_type(mut self, tx_type: u32) -> Self {
        self.tx.tx_type = tx_type;
        self
    }

    /// Sets the recipient.
    pub fn to(mut self, to: Address) -> Self {
        self.tx.to = Some(to);
        self
    }

    /// Sets the recipient from `0x` hex.
    pub fn to_hex(self, to: &str) -> Result<Self> {
        Ok(self.to(to.parse()?))
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: u128) -> Self {
        self.tx.amount = amount;
        self
    }

    /// Sets the maximum fee.
    pub fn max_fee(mut self, max_fee: u128) -> Self {
        self.tx.max_fee = max_fee;
        self
    }

    /// Sets the proposer tip.
    pub fn tips(mut self, tips: u128) -> Self {
        self.tx.tips = tips;
        self
    }

    /// Sets the payload bytes.
    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.tx.payload = payload;
        self
    }

    /// Sets the payload from hex. Odd-length input is left-padded with a
    /// zero nibble; `""` and `"0x"` clear it.
    pub fn payload_hex(self, payload: &str) -> Result<Self> {
        Ok(self.payload(to_minimal_bytes(ByteSource::Hex(payload))?))
    }

    /// Consumes the builder and returns the unsigned transaction.
    pub fn build(self) -> Transaction {
        self.tx
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn default_builder_is_default_transaction() {
        assert_eq!(TransactionBuilder::default().build(), Transaction::default());
    }

    #[test]
    fn new_sets_kind() {
        let tx = TransactionBuilder::new(TransactionKind::OnlineStatusTx).build();
        assert_eq!(tx.tx_type, 9);
        assert_eq!(tx.kind(), Some(TransactionKind::OnlineStatusTx));
    }

    #[test]
    fn all_setters_apply() {
        let to: Address = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf".parse().unwrap();
        let tx = TransactionBuilder::default()
            .nonce(1)
            .epoch(2)
            .tx_type(3)
            .to(to)
            .amount(4)
            .max_fee(5)
            .tips(6)
            .payload(vec![7])
            .build();

        assert_eq!(tx.nonce, 1);
        assert_eq!(tx.epoch, 2);
        assert_eq!(tx.tx_type, 3);
        assert_eq!(tx.to, Some(to));
        assert_eq!(tx.amount, 4);
        assert_eq!(tx.max_fee, 5);
        assert_eq!(tx.tips, 6);
        assert_eq!(tx.payload, vec![7]);
        assert!(tx.signature.is_none());
    }

    #[test]
    fn hex_setters() {
        let tx = TransactionBuilder::default()
            .to_hex("0x7e5f4552091a69125d5dfcb7b8c2659029395bdf")
            .unwrap()
            .payload_hex("0xabc")
            .unwrap()
            .build();
        assert_eq!(tx.payload, vec![0x0a, 0xbc]);
        assert!(tx.to.is_some());

        let cleared = TransactionBuilder::default()
            .payload(vec![1, 2])
            .payload_hex("0x")
            .unwrap()
            .build();
        assert!(cleared.payload.is_empty());
    }

    #[test]
    fn hex_setters_report_bad_input() {
        assert!(matches!(
            TransactionBuilder::default().payload_hex("0xzz"),
            Err(CodecError::InvalidEncoding(_))
        ));
        assert!(matches!(
            TransactionBuilder::default().to_hex("0x1234"),
            Err(CodecError::InvalidEncoding(_))
        ));
    }
}
