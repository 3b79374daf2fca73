//! Configuration management
//!
//! Assembly options with sensible defaults, overridable through the
//! environment and the CLI.

pub mod settings;

pub use settings::{Config, PayoutScript};
