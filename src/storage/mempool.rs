use crate::core::Transaction;
use crate::error::Result;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads candidate transaction records from a directory of JSON files
///
/// One file is one record. Files are consumed in file-name order so a run
/// is reproducible regardless of directory iteration order.
pub struct MempoolLoader {
    path: PathBuf,
}

impl MempoolLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> MempoolLoader {
        MempoolLoader {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load every record in the directory.
    ///
    /// A record that cannot be read or parsed is skipped and counted,
    /// never fatal; a missing directory is. Returns the parsed candidates
    /// and the skipped-record count.
    pub fn load(&self) -> Result<(Vec<Transaction>, usize)> {
        let mut files: Vec<PathBuf> = fs::read_dir(self.path.as_path())?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        let mut transactions = Vec::with_capacity(files.len());
        let mut malformed = 0;

        for path in files {
            let contents = match fs::read_to_string(path.as_path()) {
                Ok(contents) => contents,
                Err(e) => {
                    warn!("Skipping unreadable record {}: {e}", path.display());
                    malformed += 1;
                    continue;
                }
            };
            match serde_json::from_str::<Transaction>(contents.as_str()) {
                Ok(tx) => transactions.push(tx),
                Err(e) => {
                    warn!("Skipping malformed record {}: {e}", path.display());
                    malformed += 1;
                }
            }
        }

        Ok((transactions, malformed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_record(dir: &Path, name: &str, contents: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_parses_records_in_file_name_order() {
        let dir = tempdir().unwrap();
        write_record(
            dir.path(),
            "b.json",
            r#"{"vin":[{"prevout":{"txid":"bb","value":2}}],"vout":[{"value":1}]}"#,
        );
        write_record(
            dir.path(),
            "a.json",
            r#"{"vin":[{"prevout":{"txid":"aa","value":5}}],"vout":[{"value":4}]}"#,
        );

        let (transactions, malformed) = MempoolLoader::new(dir.path()).load().unwrap();
        assert_eq!(malformed, 0);
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].get_vin()[0].get_prevout().get_txid(), "aa");
        assert_eq!(transactions[1].get_vin()[0].get_prevout().get_txid(), "bb");
    }

    #[test]
    fn test_malformed_records_are_skipped_and_counted() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "bad.json", "{ this is not json");
        write_record(
            dir.path(),
            "good.json",
            r#"{"vin":[{"prevout":{"txid":"aa","value":5}}],"vout":[{"value":4}]}"#,
        );

        let (transactions, malformed) = MempoolLoader::new(dir.path()).load().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(malformed, 1);
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let dir = tempdir().unwrap();
        let (transactions, malformed) = MempoolLoader::new(dir.path()).load().unwrap();
        assert!(transactions.is_empty());
        assert_eq!(malformed, 0);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(MempoolLoader::new(missing).load().is_err());
    }
}
