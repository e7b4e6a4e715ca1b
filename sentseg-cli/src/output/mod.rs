//! Output formatting module

use anyhow::Result;
use sentseg_core::{Chunk, Tier};
use serde::{Deserialize, Serialize};

/// One output chunk, trimmed and positioned within its source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Trimmed chunk text
    pub text: String,
    /// Byte offset of the untrimmed chunk in the source file
    pub offset: usize,
    /// Byte length of the untrimmed chunk
    pub length: usize,
    /// Speech weight of the chunk
    pub weight: f64,
    /// Tier that produced the chunk
    pub tier: Tier,
}

impl ChunkRecord {
    /// Record for `chunk` found in a line starting at `line_offset`; `None`
    /// when the chunk is blank once trimmed
    pub fn from_chunk(chunk: &Chunk<'_>, line_offset: usize) -> Option<Self> {
        let text = chunk.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            offset: line_offset + chunk.offset,
            length: chunk.text.len(),
            weight: chunk.weight,
            tier: chunk.tier,
        })
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single chunk
    fn format_chunk(&mut self, chunk: &ChunkRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
