//! Command-line interface
//!
//! Argument parsing for the assembler binary.

pub mod commands;

pub use commands::{Command, Opt};
