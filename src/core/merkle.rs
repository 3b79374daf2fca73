use crate::core::Transaction;
use crate::error::{MinerError, Result};
use crate::utils::sha256_digest;

/// Merkle commitment over an ordered transaction list
///
/// Leaf hash is a single SHA-256 round over the transaction's canonical
/// serialized form; internal nodes hash the concatenation of their two raw
/// 32-byte children. One hash round per node is non-standard relative to
/// double-SHA-256 block formats but matches the header hash convention of
/// this assembler.
pub struct MerkleTree;

impl MerkleTree {
    /// Compute the Merkle root over transactions in the given order.
    ///
    /// Order matters: this is a commitment to the sequence, not to the set.
    pub fn compute_root(transactions: &[Transaction]) -> Result<Vec<u8>> {
        if transactions.is_empty() {
            return Err(MinerError::InvalidBlock(
                "Cannot compute a Merkle root over an empty transaction list".to_string(),
            ));
        }

        let mut leaf_hashes = Vec::with_capacity(transactions.len());
        for tx in transactions {
            leaf_hashes.push(tx.hash()?);
        }

        Self::root_from_hashes(leaf_hashes)
    }

    /// Reduce a list of hashes to a single root, level by level.
    ///
    /// A single-element input is its own root.
    pub fn root_from_hashes(hashes: Vec<Vec<u8>>) -> Result<Vec<u8>> {
        if hashes.is_empty() {
            return Err(MinerError::InvalidBlock(
                "Cannot compute a Merkle root over an empty hash list".to_string(),
            ));
        }

        let mut current_level = hashes;
        while current_level.len() > 1 {
            current_level = Self::reduce_level(&current_level);
        }

        current_level
            .into_iter()
            .next()
            .ok_or_else(|| MinerError::InvalidBlock("Merkle reduction lost its root".to_string()))
    }

    // One reduction step: pair adjacent hashes left to right; an odd level
    // duplicates its last hash to pair with itself.
    fn reduce_level(level: &[Vec<u8>]) -> Vec<Vec<u8>> {
        let mut next_level = Vec::with_capacity((level.len() + 1) / 2);
        let mut i = 0;

        while i < level.len() {
            let left = &level[i];
            let right = if i + 1 < level.len() {
                &level[i + 1]
            } else {
                &level[i]
            };

            let mut combined = Vec::with_capacity(left.len() + right.len());
            combined.extend_from_slice(left);
            combined.extend_from_slice(right);
            next_level.push(sha256_digest(combined.as_slice()));

            i += 2;
        }

        next_level
    }
}
