//! Shared fixtures for unit tests

use crate::config::Config;
use crate::core::{PrevOutput, Transaction, TxInput, TxOutput};

/// Structurally well-formed signature script: 32-byte r, 32-byte s, one
/// recovery byte, hex encoded.
pub const VALID_SCRIPT_SIG: &str =
    "1111111111111111111111111111111111111111111111111111111111111111\
     2222222222222222222222222222222222222222222222222222222222222222\
     1c";

/// A p2pkh-shaped output paying `value`.
pub fn sample_output(value: i64) -> TxOutput {
    TxOutput::new(
        value,
        "76a914abcdefabcdefabcdefabcdefabcdefabcdefabcd88ac",
        "",
        "p2pkh",
        "",
    )
}

/// One-input one-output transaction that passes validation whenever
/// `output_value` is positive.
pub fn sample_transaction(input_value: i64, output_value: i64) -> Transaction {
    let prevout = PrevOutput::new(
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        input_value,
        "76a914abcdefabcdefabcdefabcdefabcdefabcdefabcd88ac",
    );
    Transaction::new(
        vec![TxInput::new(prevout, VALID_SCRIPT_SIG)],
        vec![sample_output(output_value)],
    )
}

/// Config with the maximal difficulty target so mining in tests finishes
/// at nonce 0.
pub fn easy_config() -> Config {
    Config {
        difficulty_target: "f".repeat(64),
        ..Config::default()
    }
}
