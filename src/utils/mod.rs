//! Utility functions and helpers
//!
//! This module contains cryptographic utilities, encoding functions,
//! and other helper functions used throughout the assembler.

pub mod crypto;

pub use crypto::{
    base58_decode, current_timestamp, double_sha256_digest, lenient_hex_decode, sha256_digest,
    validate_payout_address, ADDRESS_CHECK_SUM_LEN,
};
