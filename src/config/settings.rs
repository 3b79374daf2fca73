use crate::core::{
    ProofOfWork, BLOCK_VERSION, DEFAULT_BITS, DEFAULT_BLOCK_REWARD, DEFAULT_DIFFICULTY_TARGET,
    GENESIS_PREV_BLOCK_HASH,
};
use crate::error::{MinerError, Result};
use crate::utils::validate_payout_address;
use log::warn;
use std::env;

const DIFFICULTY_TARGET_KEY: &str = "DIFFICULTY_TARGET";
const BLOCK_REWARD_KEY: &str = "BLOCK_REWARD";
const PREV_BLOCK_HASH_KEY: &str = "PREV_BLOCK_HASH";
const PAYOUT_ADDRESS_KEY: &str = "PAYOUT_ADDRESS";

/// The script descriptor every coinbase output pays to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutScript {
    pub scriptpubkey: String,
    pub scriptpubkey_asm: String,
    pub scriptpubkey_type: String,
    pub scriptpubkey_address: String,
}

impl Default for PayoutScript {
    fn default() -> Self {
        PayoutScript {
            scriptpubkey: "76a9146085312a9c500ff9cc35b571b0a1e5efb7fb9f1688ac".to_string(),
            scriptpubkey_asm: "OP_DUP OP_HASH160 OP_PUSHBYTES_20 \
                               6085312a9c500ff9cc35b571b0a1e5efb7fb9f16 OP_EQUALVERIFY OP_CHECKSIG"
                .to_string(),
            scriptpubkey_type: "p2pkh".to_string(),
            scriptpubkey_address: "19oMRmCWMYuhnP5W61ABrjjxHc6RphZh11".to_string(),
        }
    }
}

/// Options recognized by one assembly run
#[derive(Debug, Clone)]
pub struct Config {
    /// Big-integer hex bound the winning digest must not exceed
    pub difficulty_target: String,
    /// Subsidy added to collected fees in the coinbase
    pub block_reward: u64,
    /// 64-char hex, or the all-zero genesis sentinel
    pub previous_block_hash: String,
    pub version: u32,
    /// Compact difficulty encoding carried in the header
    pub bits: u32,
    pub payout: PayoutScript,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            difficulty_target: DEFAULT_DIFFICULTY_TARGET.to_string(),
            block_reward: DEFAULT_BLOCK_REWARD,
            previous_block_hash: GENESIS_PREV_BLOCK_HASH.to_string(),
            version: BLOCK_VERSION,
            bits: DEFAULT_BITS,
            payout: PayoutScript::default(),
        }
    }
}

impl Config {
    /// Defaults with environment-variable overrides applied.
    pub fn new() -> Config {
        let mut config = Config::default();

        if let Ok(target) = env::var(DIFFICULTY_TARGET_KEY) {
            config.difficulty_target = target;
        }
        if let Ok(reward) = env::var(BLOCK_REWARD_KEY) {
            match reward.parse::<u64>() {
                Ok(parsed) => config.block_reward = parsed,
                Err(e) => warn!("Ignoring unparsable {BLOCK_REWARD_KEY}={reward}: {e}"),
            }
        }
        if let Ok(prev_hash) = env::var(PREV_BLOCK_HASH_KEY) {
            config.previous_block_hash = prev_hash;
        }
        if let Ok(address) = env::var(PAYOUT_ADDRESS_KEY) {
            config.payout.scriptpubkey_address = address;
        }

        config
    }

    /// Reject unusable options before any assembly work starts.
    pub fn validate(&self) -> Result<()> {
        ProofOfWork::parse_target(self.difficulty_target.as_str())?;

        let prev = self.previous_block_hash.as_str();
        if prev.len() != 64 || !prev.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MinerError::Config(format!(
                "Previous block hash must be 64 hex characters: {prev}"
            )));
        }

        if !validate_payout_address(self.payout.scriptpubkey_address.as_str()) {
            return Err(MinerError::Config(format!(
                "Invalid payout address: {}",
                self.payout.scriptpubkey_address
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_bad_target_rejected() {
        let config = Config {
            difficulty_target: "not-hex".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(MinerError::Config(_))));
    }

    #[test]
    fn test_bad_prev_hash_rejected() {
        let config = Config {
            previous_block_hash: "abc".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(MinerError::Config(_))));

        let config = Config {
            previous_block_hash: "g".repeat(64),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_payout_address_rejected() {
        let mut config = Config::default();
        config.payout.scriptpubkey_address = "not-an-address".to_string();
        assert!(matches!(config.validate(), Err(MinerError::Config(_))));
    }
}
