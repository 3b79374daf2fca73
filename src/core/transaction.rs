// This file implements the transaction data model consumed by the assembler.
// Records arrive as self-describing JSON from the mempool directory; a
// transaction's identity is its canonical JSON serialization, so field
// layout here is part of the wire contract.

use crate::core::COINBASE_PREV_TXID;
use crate::error::Result;
use crate::utils::sha256_digest;
use serde::{Deserialize, Serialize};

// Reference to the output being spent: which transaction created it,
// how much it is worth, and the script that locks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrevOutput {
    txid: String,
    value: i64,
    #[serde(
        rename = "scriptPubKey",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    script_pub_key: String,
}

impl PrevOutput {
    pub fn new(txid: &str, value: i64, script_pub_key: &str) -> PrevOutput {
        PrevOutput {
            txid: txid.to_string(),
            value,
            script_pub_key: script_pub_key.to_string(),
        }
    }

    pub fn get_txid(&self) -> &str {
        self.txid.as_str()
    }

    pub fn get_value(&self) -> i64 {
        self.value
    }

    pub fn get_script_pub_key(&self) -> &str {
        self.script_pub_key.as_str()
    }
}

/// Transaction input: a previous-output reference plus the unlocking
/// signature script (hex)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    prevout: PrevOutput,
    #[serde(
        rename = "scriptSig",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    script_sig: String,
}

impl TxInput {
    pub fn new(prevout: PrevOutput, script_sig: &str) -> TxInput {
        TxInput {
            prevout,
            script_sig: script_sig.to_string(),
        }
    }

    pub fn get_prevout(&self) -> &PrevOutput {
        &self.prevout
    }

    pub fn get_script_sig(&self) -> &str {
        self.script_sig.as_str()
    }
}

/// Transaction output: a value and the script descriptor that locks it.
/// Empty descriptor fields are omitted from the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    value: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    scriptpubkey: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    scriptpubkey_asm: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    scriptpubkey_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    scriptpubkey_address: String,
}

impl TxOutput {
    pub fn new(
        value: i64,
        scriptpubkey: &str,
        scriptpubkey_asm: &str,
        scriptpubkey_type: &str,
        scriptpubkey_address: &str,
    ) -> TxOutput {
        TxOutput {
            value,
            scriptpubkey: scriptpubkey.to_string(),
            scriptpubkey_asm: scriptpubkey_asm.to_string(),
            scriptpubkey_type: scriptpubkey_type.to_string(),
            scriptpubkey_address: scriptpubkey_address.to_string(),
        }
    }

    pub fn get_value(&self) -> i64 {
        self.value
    }

    pub fn get_scriptpubkey(&self) -> &str {
        self.scriptpubkey.as_str()
    }

    pub fn get_scriptpubkey_address(&self) -> &str {
        self.scriptpubkey_address.as_str()
    }
}

/// A candidate transaction as parsed from a mempool record.
///
/// Immutable once validated; the canonical JSON text doubles as the
/// serialized form written to the output sink and the preimage of the
/// Merkle leaf hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    locktime: u32,
    #[serde(default)]
    vin: Vec<TxInput>,
    #[serde(default)]
    vout: Vec<TxOutput>,
}

fn default_version() -> u32 {
    1
}

impl Transaction {
    pub fn new(vin: Vec<TxInput>, vout: Vec<TxOutput>) -> Transaction {
        Transaction {
            version: default_version(),
            locktime: 0,
            vin,
            vout,
        }
    }

    pub fn get_version(&self) -> u32 {
        self.version
    }

    pub fn get_locktime(&self) -> u32 {
        self.locktime
    }

    pub fn get_vin(&self) -> &[TxInput] {
        self.vin.as_slice()
    }

    pub fn get_vout(&self) -> &[TxOutput] {
        self.vout.as_slice()
    }

    pub fn is_coinbase(&self) -> bool {
        self.vin.len() == 1 && self.vin[0].prevout.txid == COINBASE_PREV_TXID
    }

    /// Canonical serialized form; transaction identity is this exact text.
    pub fn to_canonical_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Single SHA-256 round over the canonical serialized form.
    ///
    /// This is the Merkle leaf hash; a single round (not double SHA-256)
    /// keeps the commitment compatible with the header hash convention.
    pub fn hash(&self) -> Result<Vec<u8>> {
        let serialized = self.to_canonical_json()?;
        Ok(sha256_digest(serialized.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testnet::test_utils::sample_transaction;

    #[test]
    fn test_canonical_json_is_deterministic() {
        let tx = sample_transaction(100_000, 90_000);
        let first = tx.to_canonical_json().unwrap();
        let second = tx.to_canonical_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hash_is_single_sha256_of_canonical_json() {
        let tx = sample_transaction(100_000, 90_000);
        let expected = sha256_digest(tx.to_canonical_json().unwrap().as_bytes());
        assert_eq!(tx.hash().unwrap(), expected);
        assert_eq!(tx.hash().unwrap().len(), 32);
    }

    #[test]
    fn test_parse_record_with_missing_optional_fields() {
        let record = r#"{"vin":[{"prevout":{"txid":"ab","value":5}}],"vout":[{"value":3}]}"#;
        let tx: Transaction = serde_json::from_str(record).unwrap();
        assert_eq!(tx.get_version(), 1);
        assert_eq!(tx.get_locktime(), 0);
        assert_eq!(tx.get_vin().len(), 1);
        assert_eq!(tx.get_vin()[0].get_script_sig(), "");
        assert_eq!(tx.get_vout()[0].get_value(), 3);
    }

    #[test]
    fn test_empty_script_fields_are_omitted_from_canonical_form() {
        let input = TxInput::new(PrevOutput::new(COINBASE_PREV_TXID, 42, ""), "");
        let tx = Transaction::new(vec![input], vec![TxOutput::new(0, "", "", "", "")]);
        let json = tx.to_canonical_json().unwrap();
        assert!(!json.contains("scriptSig"));
        assert!(!json.contains("scriptPubKey"));
        assert!(!json.contains("scriptpubkey_asm"));
    }

    #[test]
    fn test_is_coinbase() {
        let coinbase_input = TxInput::new(PrevOutput::new(COINBASE_PREV_TXID, 2_500_000, ""), "");
        let tx = Transaction::new(vec![coinbase_input], vec![TxOutput::new(0, "", "", "", "")]);
        assert!(tx.is_coinbase());

        let regular = sample_transaction(100_000, 90_000);
        assert!(!regular.is_coinbase());
    }
}
