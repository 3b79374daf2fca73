//! Filesystem collaborators
//!
//! This module contains the external edges of the pipeline: loading
//! candidate records from the mempool directory and writing the finished
//! block to the output file.

pub mod mempool;
pub mod output;

pub use mempool::MempoolLoader;
pub use output::OutputSink;
