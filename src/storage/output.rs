use crate::core::Block;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the finished block to a text file
///
/// Line order: encoded header, coinbase JSON, then each validated
/// transaction in validation order. The whole file is written in one
/// operation, so an earlier fatal error never leaves partial output.
pub struct OutputSink {
    path: PathBuf,
}

impl OutputSink {
    pub fn new<P: AsRef<Path>>(path: P) -> OutputSink {
        OutputSink {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn write_block(&self, block: &Block) -> Result<()> {
        let mut contents = block.to_output_lines()?.join("\n");
        contents.push('\n');
        fs::write(self.path.as_path(), contents)?;
        Ok(())
    }
}
