//! Core transaction types.
//!
//! [`Transaction`] is a plain data holder: seven signed fields plus the
//! optional signature. Encoding lives in [`super::codec`], signing in
//! [`super::signing`].

use serde::Serialize;
use std::fmt;

use crate::crypto::Address;
use crate::encoding::bytes_to_hex;

// ---------------------------------------------------------------------------
// TransactionKind
// ---------------------------------------------------------------------------

/// Well-known values of the `type` field.
///
/// The wire carries a bare `u32` and the codec accepts any value; this enum
/// only names the discriminators the network currently defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u32)]
pub enum TransactionKind {
    SendTx = 0,
    ActivationTx = 1,
    InviteTx = 2,
    KillTx = 3,
    SubmitFlipTx = 4,
    SubmitAnswersHashTx = 5,
    SubmitShortAnswersTx = 6,
    SubmitLongAnswersTx = 7,
    EvidenceTx = 8,
    OnlineStatusTx = 9,
    KillInviteeTx = 10,
    ChangeGodAddressTx = 11,
    BurnTx = 12,
    ChangeProfileTx = 13,
    DeleteFlipTx = 14,
    DeployContractTx = 15,
    CallContractTx = 16,
    TerminateContractTx = 17,
    DelegateTx = 18,
    UndelegateTx = 19,
    KillDelegatorTx = 20,
    StoreToIpfsTx = 21,
    ReplenishStakeTx = 22,
}

impl TransactionKind {
    const ALL: [TransactionKind; 23] = [
        Self::SendTx,
        Self::ActivationTx,
        Self::InviteTx,
        Self::KillTx,
        Self::SubmitFlipTx,
        Self::SubmitAnswersHashTx,
        Self::SubmitShortAnswersTx,
        Self::SubmitLongAnswersTx,
        Self::EvidenceTx,
        Self::OnlineStatusTx,
        Self::KillInviteeTx,
        Self::ChangeGodAddressTx,
        Self::BurnTx,
        Self::ChangeProfileTx,
        Self::DeleteFlipTx,
        Self::DeployContractTx,
        Self::CallContractTx,
        Self::TerminateContractTx,
        Self::DelegateTx,
        Self::UndelegateTx,
        Self::KillDelegatorTx,
        Self::StoreToIpfsTx,
        Self::ReplenishStakeTx,
    ];

    /// Looks up the kind for a raw discriminator, if it is a known one.
    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// The raw discriminator.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl From<TransactionKind> for u32 {
    fn from(kind: TransactionKind) -> Self {
        kind.as_u32()
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// An Idena transaction.
///
/// Every field has a zero default, so `Transaction::default()` is a valid
/// (if useless) transaction. Integer fields `amount`, `max_fee` and `tips`
/// are in the smallest unit (10^-18 iDNA); zero means the field is left off
/// the wire.
///
/// The signature covers every field except itself. Changing any field after
/// signing invalidates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    /// Per-sender sequence number.
    pub nonce: u32,

    /// Epoch the transaction is valid in.
    pub epoch: u32,

    /// Transaction kind discriminator. See [`TransactionKind`].
    pub tx_type: u32,

    /// Recipient. `None` emits no recipient field.
    pub to: Option<Address>,

    /// Transferred amount.
    pub amount: u128,

    /// Highest fee the sender accepts.
    pub max_fee: u128,

    /// Tip paid to the block proposer on top of the fee.
    pub tips: u128,

    /// Opaque kind-specific payload.
    pub payload: Vec<u8>,

    /// `r || s || recovery_id`, set by signing or decoding.
    pub signature: Option<Vec<u8>>,
}

impl Transaction {
    /// Returns `true` if a signature is attached.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// The kind, when `tx_type` is a known discriminator.
    pub fn kind(&self) -> Option<TransactionKind> {
        TransactionKind::from_u32(self.tx_type)
    }

    /// Human-readable view of the fields, for logs and debugging.
    ///
    /// Not a wire format; there is no way back from it.
    pub fn to_display(&self) -> TransactionDisplay {
        TransactionDisplay {
            nonce: self.nonce,
            epoch: self.epoch,
            tx_type: self.tx_type,
            kind: self.kind(),
            to: self.to,
            amount: self.amount,
            max_fee: self.max_fee,
            tips: self.tips,
            payload: bytes_to_hex(&self.payload, true),
            signature: self.signature.as_deref().map(|s| bytes_to_hex(s, true)),
        }
    }
}

// ---------------------------------------------------------------------------
// TransactionDisplay
// ---------------------------------------------------------------------------

/// Field-name → value view of a [`Transaction`].
///
/// Integers stay integers; byte fields become `0x` hex. `Display` renders
/// compact JSON, `{:#}` pretty JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDisplay {
    pub nonce: u32,
    pub epoch: u32,
    #[serde(rename = "type")]
    pub tx_type: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    pub to: Option<Address>,
    pub amount: u128,
    pub max_fee: u128,
    pub tips: u128,
    pub payload: String,
    pub signature: Option<String>,
}

impl fmt::Display for TransactionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = if f.alternate() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        f.write_str(&rendered.map_err(|_| fmt::Error)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_zero_and_unsigned() {
        let tx = Transaction::default();
        assert_eq!(tx.nonce, 0);
        assert_eq!(tx.epoch, 0);
        assert_eq!(tx.tx_type, 0);
        assert!(tx.to.is_none());
        assert_eq!(tx.amount, 0);
        assert!(tx.payload.is_empty());
        assert!(!tx.is_signed());
    }

    #[test]
    fn kind_lookup() {
        assert_eq!(TransactionKind::from_u32(0), Some(TransactionKind::SendTx));
        assert_eq!(
            TransactionKind::from_u32(16),
            Some(TransactionKind::CallContractTx)
        );
        assert_eq!(
            TransactionKind::from_u32(22),
            Some(TransactionKind::ReplenishStakeTx)
        );
        assert_eq!(TransactionKind::from_u32(23), None);
    }

    #[test]
    fn kind_table_matches_discriminants() {
        for (i, kind) in TransactionKind::ALL.iter().enumerate() {
            assert_eq!(kind.as_u32() as usize, i);
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(TransactionKind::SendTx.to_string(), "SendTx");
        assert_eq!(TransactionKind::BurnTx.to_string(), "BurnTx");
    }

    #[test]
    fn display_json_shape() {
        let tx = Transaction {
            nonce: 3,
            epoch: 100,
            tx_type: 0,
            to: Some("0x2b5ad5c4795c026514f8317c7a215e218dccd6cf".parse().unwrap()),
            amount: 1_000_000_000_000_000_000,
            payload: vec![0xca, 0xfe],
            ..Default::default()
        };
        let value = serde_json::to_value(tx.to_display()).unwrap();
        assert_eq!(value["nonce"], 3);
        assert_eq!(value["epoch"], 100);
        assert_eq!(value["type"], 0);
        assert_eq!(value["kind"], "SendTx");
        assert_eq!(value["to"], "0x2b5ad5c4795c026514f8317c7a215e218dccd6cf");
        assert_eq!(value["maxFee"], 0);
        assert_eq!(value["payload"], "0xcafe");
        assert!(value["signature"].is_null());
    }

    #[test]
    fn display_renders_json_text() {
        let tx = Transaction {
            tx_type: 999,
            ..Default::default()
        };
        let text = tx.to_display().to_string();
        assert!(text.starts_with('{'));
        assert!(text.contains("\"type\":999"));
        assert!(!text.contains("kind"));
        assert!(text.contains("\"to\":null"));

        let pretty = format!("{:#}", tx.to_display());
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn display_keeps_large_amounts_exact() {
        let tx = Transaction {
            amount: u128::MAX,
            ..Default::default()
        };
        let text = tx.to_display().to_string();
        assert!(text.contains(&format!("\"amount\":{}", u128::MAX)));
    }
}
