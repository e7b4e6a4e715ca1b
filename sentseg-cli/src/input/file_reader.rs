//! File reading utilities

use anyhow::{Context, Result};
use sentseg_core::decode_lossy;
use std::fs;
use std::path::Path;

/// File reader with lenient UTF-8 decoding
pub struct FileReader;

impl FileReader {
    /// Read a file as text, dropping invalid UTF-8 sequences
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(decode_lossy(&bytes).into_owned())
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
