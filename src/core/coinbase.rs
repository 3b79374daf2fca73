use crate::config::PayoutScript;
use crate::core::{PrevOutput, Transaction, TxInput, TxOutput, COINBASE_PREV_TXID};
use crate::error::{MinerError, Result};

/// Synthesizes the reward-collecting coinbase transaction
///
/// The coinbase claims the whole reward on its single input: the input
/// references the all-zero transaction id with a value of fees + subsidy,
/// and the single payout output carries value 0. Moving the value to the
/// output side would change the canonical form and break the Merkle and
/// header commitments, so the input-side convention stays.
pub struct CoinbaseBuilder {
    payout: PayoutScript,
}

impl CoinbaseBuilder {
    pub fn new(payout: PayoutScript) -> CoinbaseBuilder {
        CoinbaseBuilder { payout }
    }

    pub fn build(&self, total_fee: i64, block_reward: u64) -> Result<Transaction> {
        let subsidy = i64::try_from(block_reward).map_err(|_| {
            MinerError::Config(format!("Block reward {block_reward} exceeds i64 range"))
        })?;
        let claimed_value = total_fee.checked_add(subsidy).ok_or_else(|| {
            MinerError::InvalidBlock("Coinbase input value overflow".to_string())
        })?;

        let input = TxInput::new(PrevOutput::new(COINBASE_PREV_TXID, claimed_value, ""), "");
        let output = TxOutput::new(
            0,
            self.payout.scriptpubkey.as_str(),
            self.payout.scriptpubkey_asm.as_str(),
            self.payout.scriptpubkey_type.as_str(),
            self.payout.scriptpubkey_address.as_str(),
        );

        Ok(Transaction::new(vec![input], vec![output]))
    }
}
