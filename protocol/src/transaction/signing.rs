//! Transaction signing and signer recovery.
//!
//! Signing is a separate step from building because the key may not be
//! available at construction time. The signed message is the Keccak-256
//! digest of [`Transaction::unsigned_bytes`], which excludes the signature.

use tracing::debug;

use super::types::Transaction;
use crate::crypto::address::Address;
use crate::crypto::hash::keccak256;
use crate::crypto::keys::PrivateKey;
use crate::crypto::signatures::{recover_public_key, sign_digest};
use crate::error::{CodecError, Result};

/// The digest a signature over `tx` commits to.
pub fn signing_digest(tx: &Transaction) -> [u8; 32] {
    keccak256(&tx.unsigned_bytes())
}

/// Signs a transaction in place.
///
/// 1. Serialize the unsigned `Data` message.
/// 2. Hash it with Keccak-256.
/// 3. Sign the digest with recoverable ECDSA.
/// 4. Store `r || s || recovery_id` (65 bytes) in `tx.signature`.
///
/// Any previous signature is overwritten. Signing is deterministic: the same
/// fields and key always give the same signature.
///
/// # Returns
///
/// A reference to the (now signed) transaction, for chaining.
///
/// # Example
///
/// ```
/// use idena_tx::crypto::PrivateKey;
/// use idena_tx::transaction::{sign_transaction, TransactionBuilder, TransactionKind};
///
/// let key = PrivateKey::from_bytes(&[7u8; 32]).unwrap();
/// let mut tx = TransactionBuilder::new(TransactionKind::SendTx)
///     .nonce(1)
///     .amount(5)
///     .build();
///
/// sign_transaction(&mut tx, &key);
/// assert_eq!(tx.signature.as_ref().map(Vec::len), Some(65));
/// ```
pub fn sign_transaction<'a>(tx: &'a mut Transaction, key: &PrivateKey) -> &'a Transaction {
    let digest = signing_digest(tx);
    tx.signature = Some(sign_digest(key, &digest).to_vec());
    debug!(
        nonce = tx.nonce,
        epoch = tx.epoch,
        tx_type = tx.tx_type,
        "signed transaction"
    );
    tx
}

/// Recovers the address that signed `tx`.
///
/// # Errors
///
/// [`CodecError::InvalidSignature`] if the transaction is unsigned, the
/// signature is not 65 bytes, the recovery id is out of range, or no key
/// recovers from it.
pub fn recover_sender(tx: &Transaction) -> Result<Address> {
    let signature = tx
        .signature
        .as_deref()
        .ok_or_else(|| CodecError::InvalidSignature("transaction is unsigned".into()))?;
    let public_key = recover_public_key(&signing_digest(tx), signature)?;
    Ok(Address::from_public_key(&public_key))
}

/// Checks that `tx` was signed by `expected`.
///
/// `Ok(false)` means a well-formed signature from someone else.
pub fn verify_sender(tx: &Transaction, expected: &Address) -> Result<bool> {
    Ok(recover_sender(tx)? == *expected)
}

impl Transaction {
    /// Signs with `key`. See [`sign_transaction`].
    pub fn sign(&mut self, key: &PrivateKey) -> &Self {
        sign_transaction(self, key)
    }

    /// Signs with a hex-encoded private key.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidKey`] if the key does not parse or is not a valid
    /// secp256k1 scalar. The transaction is left untouched in that case.
    pub fn sign_with_hex(&mut self, private_key_hex: &str) -> Result<&Self> {
        let key = PrivateKey::from_hex(private_key_hex)?;
        Ok(sign_transaction(self, &key))
    }

    /// Address that signed this transaction. See [`recover_sender`].
    pub fn sender(&self) -> Result<Address> {
        recover_sender(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::address::derive_address;
    use crate::crypto::keys::PublicKey;
    use crate::crypto::signatures::verify_digest;
    use crate::transaction::builder::TransactionBuilder;
    use crate::transaction::types::TransactionKind;

    const KEY_HEX: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn key() -> PrivateKey {
        PrivateKey::from_hex(KEY_HEX).unwrap()
    }

    fn sample_tx() -> Transaction {
        TransactionBuilder::new(TransactionKind::SendTx)
            .nonce(1)
            .epoch(42)
            .to_hex("0x2b5ad5c4795c026514f8317c7a215e218dccd6cf")
            .unwrap()
            .amount(1_000_000_000_000_000_000)
            .max_fee(1_000_000_000_000_000)
            .build()
    }

    #[test]
    fn sign_sets_65_byte_signature() {
        let mut tx = sample_tx();
        assert!(!tx.is_signed());
        sign_transaction(&mut tx, &key());
        assert_eq!(tx.signature.as_ref().unwrap().len(), 65);
    }

    #[test]
    fn signing_is_deterministic() {
        let mut a = sample_tx();
        let mut b = sample_tx();
        a.sign(&key());
        b.sign(&key());
        assert_eq!(a.signature, b.signature);
    }

    #[test]
    fn signing_does_not_touch_data_fields() {
        let before = sample_tx();
        let mut tx = before.clone();
        tx.sign(&key());
        assert_eq!(tx.unsigned_bytes(), before.unsigned_bytes());
    }

    #[test]
    fn re_signing_overwrites_previous_signature() {
        let mut tx = sample_tx();
        tx.sign(&key());
        let first = tx.signature.clone();

        tx.sign(&PrivateKey::from_bytes(&[5u8; 32]).unwrap());
        assert_ne!(tx.signature, first);
    }

    #[test]
    fn signature_commits_to_fields() {
        let mut a = sample_tx();
        let mut b = sample_tx();
        b.tips = 1;
        a.sign(&key());
        b.sign(&key());
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn signature_verifies_against_signer_public_key() {
        let mut tx = sample_tx();
        tx.sign(&key());
        let digest = signing_digest(&tx);
        let public_key: PublicKey = key().public_key();
        assert!(verify_digest(
            &public_key,
            &digest,
            tx.signature.as_ref().unwrap()
        ));
    }

    #[test]
    fn recovered_sender_is_derived_address() {
        let mut tx = sample_tx();
        tx.sign(&key());
        let expected = derive_address(&key());
        assert_eq!(tx.sender().unwrap(), expected);
        assert!(verify_sender(&tx, &expected).unwrap());

        let other = derive_address(&PrivateKey::from_bytes(&[5u8; 32]).unwrap());
        assert!(!verify_sender(&tx, &other).unwrap());
    }

    #[test]
    fn tampering_changes_recovered_sender() {
        let mut tx = sample_tx();
        tx.sign(&key());
        tx.amount += 1;
        // Either recovery fails or it yields some unrelated key.
        match recover_sender(&tx) {
            Ok(addr) => assert_ne!(addr, derive_address(&key())),
            Err(err) => assert!(matches!(err, CodecError::InvalidSignature(_))),
        }
    }

    #[test]
    fn unsigned_has_no_sender() {
        assert!(matches!(
            recover_sender(&sample_tx()),
            Err(CodecError::InvalidSignature(_))
        ));
    }

    #[test]
    fn truncated_signature_has_no_sender() {
        let mut tx = sample_tx();
        tx.sign(&key());
        tx.signature.as_mut().unwrap().pop();
        assert!(matches!(
            recover_sender(&tx),
            Err(CodecError::InvalidSignature(_))
        ));
    }

    #[test]
    fn sign_with_hex_matches_typed_key() {
        let mut a = sample_tx();
        let mut b = sample_tx();
        a.sign_with_hex(KEY_HEX).unwrap();
        b.sign(&key());
        assert_eq!(a.signature, b.signature);
    }

    #[test]
    fn sign_with_bad_key_leaves_tx_unsigned() {
        let mut tx = sample_tx();
        assert_eq!(
            tx.sign_with_hex("0x00").unwrap_err(),
            CodecError::InvalidKey
        );
        assert!(!tx.is_signed());
    }
}
