//! Error handling for block assembly
//!
//! This module provides error types for every stage of the assembly pipeline.

use std::fmt;

/// Result type alias for block assembly operations
pub type Result<T> = std::result::Result<T, MinerError>;

/// Error types for the block assembly pipeline
#[derive(Debug, Clone)]
pub enum MinerError {
    /// File I/O errors
    Io(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Configuration errors
    Config(String),
    /// A mempool record could not be parsed into a transaction
    MalformedRecord(String),
    /// Block-level consistency errors
    InvalidBlock(String),
    /// A field does not fit its fixed-width header representation
    EncodingOverflow(String),
    /// The 32-bit nonce range was exhausted without meeting the target
    ExhaustedSearchSpace,
    /// The nonce search was cancelled by the caller
    Cancelled,
    /// Cryptographic operation errors
    Crypto(String),
}

impl fmt::Display for MinerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinerError::Io(msg) => write!(f, "I/O error: {msg}"),
            MinerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            MinerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            MinerError::MalformedRecord(msg) => write!(f, "Malformed record: {msg}"),
            MinerError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            MinerError::EncodingOverflow(msg) => write!(f, "Encoding overflow: {msg}"),
            MinerError::ExhaustedSearchSpace => {
                write!(
                    f,
                    "Nonce range exhausted without meeting the difficulty target"
                )
            }
            MinerError::Cancelled => write!(f, "Nonce search cancelled"),
            MinerError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
        }
    }
}

impl std::error::Error for MinerError {}

impl From<std::io::Error> for MinerError {
    fn from(err: std::io::Error) -> Self {
        MinerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MinerError {
    fn from(err: serde_json::Error) -> Self {
        MinerError::Serialization(err.to_string())
    }
}
