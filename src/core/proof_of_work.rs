use crate::core::BlockHeader;
use crate::error::{MinerError, Result};
use log::info;
use num_bigint::BigUint;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation handle for the nonce search.
///
/// Cheap to clone; cancelling any clone stops the search at its next
/// iteration. Without one, an unsatisfiable target would block the caller
/// for the full 32-bit range.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Sequential proof-of-work search over the header nonce
///
/// The header enters with nonce 0; each step hashes the header and compares
/// the digest, read as a big unsigned integer, against the difficulty
/// target. The first nonce whose digest does not exceed the target wins.
pub struct ProofOfWork {
    header: BlockHeader,
    target: BigUint,
}

impl ProofOfWork {
    pub fn new(header: BlockHeader, target_hex: &str) -> Result<ProofOfWork> {
        let target = Self::parse_target(target_hex)?;
        Ok(ProofOfWork { header, target })
    }

    /// Parse a big-integer difficulty target from a hex string, with or
    /// without a 0x prefix.
    pub fn parse_target(target_hex: &str) -> Result<BigUint> {
        let digits = target_hex.strip_prefix("0x").unwrap_or(target_hex);
        BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| {
            MinerError::Config(format!("Difficulty target is not valid hex: {target_hex}"))
        })
    }

    /// Search until a satisfying nonce is found, the nonce range is
    /// exhausted, or the token is cancelled. Consumes the miner and returns
    /// the frozen header together with its winning digest.
    pub fn run(mut self, token: &CancelToken) -> Result<(BlockHeader, String)> {
        info!(
            "Mining block with merkle root {} against target {}",
            self.header.get_merkle_root(),
            self.target.to_str_radix(16)
        );

        loop {
            if token.is_cancelled() {
                return Err(MinerError::Cancelled);
            }

            let digest = self.header.hash();
            let digest_int = BigUint::parse_bytes(digest.as_bytes(), 16)
                .ok_or_else(|| MinerError::Crypto("Header digest is not valid hex".to_string()))?;

            if digest_int <= self.target {
                info!(
                    "Found nonce {} with digest {digest}",
                    self.header.get_nonce()
                );
                return Ok((self.header, digest));
            }

            // A wrapped nonce would shift mining cost onto already-searched
            // ground; exhaustion is fatal for this block attempt
            let nonce = self.header.get_nonce();
            if nonce == u32::MAX {
                return Err(MinerError::ExhaustedSearchSpace);
            }
            self.header.set_nonce(nonce + 1);
        }
    }

    /// Re-check a mined header against a target.
    pub fn verify(header: &BlockHeader, target_hex: &str) -> Result<bool> {
        let target = Self::parse_target(target_hex)?;
        let digest = header.hash();
        let digest_int = BigUint::parse_bytes(digest.as_bytes(), 16)
            .ok_or_else(|| MinerError::Crypto("Header digest is not valid hex".to_string()))?;
        Ok(digest_int <= target)
    }
}
