//! Source file provenance.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use polars::prelude::DataFrame;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{IngestError, Result};

/// Buffer size for reading files during digest computation.
const BUFFER_SIZE: usize = 65536; // 64 KB

/// Identity of one ingested file, captured at read time.
///
/// Carried into logs and reports so a ranking can always be traced back to
/// the exact bytes it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    /// Path as given by the caller.
    pub path: String,
    /// File size in bytes.
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the file contents.
    pub sha256: String,
    /// Data rows in the parsed frame.
    pub rows: usize,
    /// Columns in the parsed frame.
    pub columns: usize,
}

impl SourceInfo {
    /// Captures provenance for a file and the frame parsed from it.
    pub fn capture(path: &Path, frame: &DataFrame) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Ok(Self {
            path: path.display().to_string(),
            bytes: metadata.len(),
            sha256: file_sha256(path)?,
            rows: frame.height(),
            columns: frame.width(),
        })
    }
}

/// Computes the SHA-256 hash of a file, streamed in chunks.
fn file_sha256(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
