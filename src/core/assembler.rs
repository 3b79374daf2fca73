use crate::config::Config;
use crate::core::{
    Block, BlockHeader, CancelToken, CoinbaseBuilder, FeeCalculator, MerkleTree, ProofOfWork,
    Transaction, TransactionValidator,
};
use crate::error::{MinerError, Result};
use crate::utils::current_timestamp;
use data_encoding::HEXLOWER;
use log::info;

/// Per-run accounting: how many records came in, how many were dropped at
/// parse time, how many the validator rejected, and what got mined.
/// Rejections are silent individually; this summary keeps them auditable.
#[derive(Debug, Clone, Default)]
pub struct AssemblySummary {
    pub total_records: usize,
    pub malformed: usize,
    pub rejected: usize,
    pub accepted: usize,
    pub total_fee: i64,
    pub nonce: u32,
    pub block_hash: String,
}

/// Orchestrates the assembly pipeline: validation, fee accounting,
/// coinbase synthesis, Merkle commitment, header construction, and the
/// proof-of-work search.
pub struct BlockAssembler {
    config: Config,
}

impl BlockAssembler {
    pub fn new(config: Config) -> BlockAssembler {
        BlockAssembler { config }
    }

    /// Assemble and mine one block from parsed candidate transactions.
    ///
    /// `malformed` is the count of records the loader already dropped; it
    /// only feeds the summary. The transaction set is frozen before mining
    /// starts, so the root committed in the header stays valid for the
    /// winning nonce.
    pub fn assemble(
        &self,
        candidates: Vec<Transaction>,
        malformed: usize,
        token: &CancelToken,
    ) -> Result<(Block, AssemblySummary)> {
        let total_records = candidates.len() + malformed;

        let valid: Vec<Transaction> = candidates
            .into_iter()
            .filter(|tx| TransactionValidator::validate(tx))
            .collect();
        let rejected = total_records - malformed - valid.len();

        let total_fee = FeeCalculator::total_fee(valid.as_slice());
        let coinbase = CoinbaseBuilder::new(self.config.payout.clone())
            .build(total_fee, self.config.block_reward)?;

        // The commitment covers the coinbase first, then the validated
        // transactions in validation order
        let mut ordered = Vec::with_capacity(valid.len() + 1);
        ordered.push(coinbase.clone());
        ordered.extend(valid.iter().cloned());
        let merkle_root = HEXLOWER.encode(MerkleTree::compute_root(&ordered)?.as_slice());

        let header = BlockHeader::new(
            self.config.version,
            self.config.previous_block_hash.as_str(),
            merkle_root.as_str(),
            current_timestamp()?,
            self.config.bits,
        );

        let pow = ProofOfWork::new(header, self.config.difficulty_target.as_str())?;
        let (mined_header, block_hash) = pow.run(token)?;

        // Defensive re-check before accepting the search result
        if !ProofOfWork::verify(&mined_header, self.config.difficulty_target.as_str())? {
            return Err(MinerError::InvalidBlock(
                "Mined header does not satisfy the difficulty target".to_string(),
            ));
        }

        let summary = AssemblySummary {
            total_records,
            malformed,
            rejected,
            accepted: valid.len(),
            total_fee,
            nonce: mined_header.get_nonce(),
            block_hash,
        };
        info!(
            "Assembled block: {} accepted, {} rejected, {} malformed, total fee {}, nonce {}",
            summary.accepted, summary.rejected, summary.malformed, summary.total_fee, summary.nonce
        );

        Ok((Block::new(mined_header, coinbase, valid), summary))
    }
}
