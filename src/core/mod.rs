//! Core block assembly functionality
//!
//! This module contains the assembly pipeline: transaction validation,
//! fee accounting, coinbase synthesis, Merkle commitment, the header
//! codec, and the proof-of-work search.

pub mod assembler;
pub mod block;
pub mod coinbase;
pub mod fees;
pub mod header;
pub mod merkle;
pub mod monetary;
pub mod proof_of_work;
pub mod transaction;
pub mod validator;

pub use assembler::{AssemblySummary, BlockAssembler};
pub use block::Block;
pub use coinbase::CoinbaseBuilder;
pub use fees::FeeCalculator;
pub use header::{BlockHeader, ENCODED_HEADER_LEN};
pub use merkle::MerkleTree;
pub use monetary::{
    BLOCK_VERSION, COINBASE_PREV_TXID, DEFAULT_BITS, DEFAULT_BLOCK_REWARD,
    DEFAULT_DIFFICULTY_TARGET, GENESIS_PREV_BLOCK_HASH,
};
pub use proof_of_work::{CancelToken, ProofOfWork};
pub use transaction::{PrevOutput, Transaction, TxInput, TxOutput};
pub use validator::TransactionValidator;
