use crate::core::{BlockHeader, MerkleTree, Transaction};
use crate::error::Result;
use data_encoding::HEXLOWER;

/// A finished block: mined header, coinbase, and the validated
/// transactions in validation order. Immutable after assembly.
#[derive(Debug, Clone)]
pub struct Block {
    header: BlockHeader,
    coinbase: Transaction,
    transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: BlockHeader, coinbase: Transaction, transactions: Vec<Transaction>) -> Block {
        Block {
            header,
            coinbase,
            transactions,
        }
    }

    pub fn get_header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn get_coinbase(&self) -> &Transaction {
        &self.coinbase
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    /// Recompute the commitment over coinbase ++ transactions and compare
    /// it with the root committed in the header.
    pub fn verify_merkle_root(&self) -> Result<bool> {
        let mut ordered = Vec::with_capacity(self.transactions.len() + 1);
        ordered.push(self.coinbase.clone());
        ordered.extend(self.transactions.iter().cloned());

        let calculated = MerkleTree::compute_root(&ordered)?;
        Ok(HEXLOWER.encode(calculated.as_slice()) == self.header.get_merkle_root())
    }

    /// Text lines for the output sink, in sink order: encoded header,
    /// coinbase JSON, then one JSON line per transaction.
    pub fn to_output_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(self.transactions.len() + 2);
        lines.push(self.header.encode()?);
        lines.push(self.coinbase.to_canonical_json()?);
        for tx in &self.transactions {
            lines.push(tx.to_canonical_json()?);
        }
        Ok(lines)
    }
}
