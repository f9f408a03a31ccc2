//! Newline-delimited JSON input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed record")]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read every record of a JSONL file, in order.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_jsonl(BufReader::new(file), path)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Parse JSONL from any reader. `path` is only used in errors.
///
/// Blank lines are skipped; line numbers in errors are 1-based.
pub fn parse_jsonl<T, R>(reader: R, path: &Path) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}
