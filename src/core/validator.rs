//! Per-transaction validation gate
//!
//! A transaction passes only if the logical AND of all per-input and
//! per-output checks holds. The reduction is explicit: a single failing
//! input or output rejects the whole transaction.

use crate::core::{Transaction, TxInput};
use crate::utils::{lenient_hex_decode, sha256_digest};
use num_bigint::BigUint;

/// secp256k1 group order, upper bound for the r and s signature components
const CURVE_ORDER_HEX: &[u8] = b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

pub struct TransactionValidator;

impl TransactionValidator {
    /// Pass/fail gate per transaction; no side effects beyond the check.
    pub fn validate(tx: &Transaction) -> bool {
        if tx.get_vin().is_empty() || tx.get_vout().is_empty() {
            return false;
        }

        let inputs_ok = tx.get_vin().iter().all(Self::check_input);
        let outputs_ok = tx.get_vout().iter().all(|output| output.get_value() > 0);

        inputs_ok && outputs_ok
    }

    // An input passes when it carries a previous-transaction reference,
    // a candidate key can be recovered from the referenced message hash
    // and the signature script, and the signature checks against that key.
    fn check_input(input: &TxInput) -> bool {
        let prev_txid = input.get_prevout().get_txid();
        if prev_txid.is_empty() {
            return false;
        }

        let message_hash = sha256_digest(prev_txid.as_bytes());
        match recover_candidate_key(&message_hash, input.get_script_sig()) {
            Some(candidate_key) => {
                verify_signature(input.get_script_sig(), candidate_key.as_slice())
            }
            None => false,
        }
    }
}

fn curve_order() -> BigUint {
    BigUint::parse_bytes(CURVE_ORDER_HEX, 16)
        .expect("secp256k1 curve order constant is valid hex")
}

/// Recover a candidate public key from a message hash and a signature
/// script.
///
/// This is NOT real ECDSA public-key recovery: the signature layout
/// (32-byte r, 32-byte s, recovery byte) is enforced and r is range-checked
/// against the curve order, but the candidate key is a deterministic digest
/// of the message and the recovery tweak rather than a curve point. The
/// pass/fail shape of the check is what callers rely on.
fn recover_candidate_key(message_hash: &[u8], script_sig: &str) -> Option<Vec<u8>> {
    let signature = lenient_hex_decode(script_sig);
    if signature.len() < 65 {
        return None;
    }

    let order = curve_order();
    let r = BigUint::from_bytes_be(&signature[..32]);
    if r == BigUint::from(0u8) || r >= order {
        return None;
    }

    // Recovery byte 27 selects the negated tweak, matching the legacy
    // uncompressed-key recovery id convention
    let recovery_id = signature[64];
    let tweak = if recovery_id == 27 { order - &r } else { r };

    let mut preimage = message_hash.to_vec();
    preimage.extend(tweak.to_bytes_be());
    Some(sha256_digest(preimage.as_slice()))
}

/// Check a signature script against a recovered candidate key.
///
/// Structural check only: the s component must lie in (0, order) and the
/// candidate key must be a 32-byte digest. No curve arithmetic is performed.
fn verify_signature(script_sig: &str, candidate_key: &[u8]) -> bool {
    let signature = lenient_hex_decode(script_sig);
    if signature.len() < 65 || candidate_key.len() != 32 {
        return false;
    }

    let order = curve_order();
    let s = BigUint::from_bytes_be(&signature[32..64]);
    s != BigUint::from(0u8) && s < order
}
