//! Monetary and consensus constants for block assembly
//!
//! Values follow a satoshi-style unit system: the block reward and all
//! transaction values are expressed in the smallest fee-unit.

/// Block subsidy paid to the coinbase on top of collected fees (25 coins)
pub const DEFAULT_BLOCK_REWARD: u64 = 2_500_000;

/// Default difficulty target the header digest must not exceed
pub const DEFAULT_DIFFICULTY_TARGET: &str =
    "0000ffff00000000000000000000000000000000000000000000000000000000";

/// Compact encoding of the default difficulty target
/// (mantissa 0x00ffff, exponent 0x1f)
pub const DEFAULT_BITS: u32 = 0x1f00ffff;

/// Header version for every block attempt
pub const BLOCK_VERSION: u32 = 1;

/// All-zero previous-block hash used when mining on no prior chain
pub const GENESIS_PREV_BLOCK_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// All-zero previous-transaction id claimed by the coinbase input
pub const COINBASE_PREV_TXID: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";
