//! # Blockforge - Single-Run Block Assembler
//!
//! Assembles one block from a directory of pending transaction records:
//! validates candidates, accounts fees, synthesizes the coinbase, commits
//! the transaction list through a Merkle root, and searches the header
//! nonce space for a digest under the difficulty target.
//!
//! ## How the Code Is Organized
//! - `core/`: the assembly pipeline (validation, fees, coinbase, Merkle,
//!   header codec, proof of work, orchestration)
//! - `storage/`: the filesystem edges (mempool directory in, output file out)
//! - `config/`: run options with env and CLI overrides
//! - `utils/`: hashing and encoding helpers
//! - `cli/`: command-line interface for the binary
//!
//! ## Key Design Decisions
//! - A transaction's identity is its canonical JSON text; the Merkle leaf
//!   hash is one SHA-256 round over it, matching the header hash convention
//! - The coinbase claims fees + subsidy on its input side; its output pays 0
//! - The nonce search is bounded at 32 bits and cancellable; exhaustion is
//!   an error, never a silent wraparound
//! - Malformed mempool records are skipped and counted, not fatal

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub mod testnet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, PayoutScript};
pub use core::{
    AssemblySummary, Block, BlockAssembler, BlockHeader, CancelToken, CoinbaseBuilder,
    FeeCalculator, MerkleTree, PrevOutput, ProofOfWork, Transaction, TransactionValidator,
    TxInput, TxOutput,
};
pub use error::{MinerError, Result};
pub use storage::{MempoolLoader, OutputSink};
pub use utils::{
    current_timestamp, double_sha256_digest, lenient_hex_decode, sha256_digest,
    validate_payout_address,
};
