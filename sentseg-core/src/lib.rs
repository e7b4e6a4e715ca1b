//! Weight-budgeted cascading text segmentation
//!
//! This crate cuts text into contiguous chunks whose "speech weight" stays
//! under a budget, for feeding speech synthesis or other line-oriented
//! pipelines. Chunks are never reordered and always concatenate back to the
//! input.
//!
//! # Architecture
//!
//! Segmentation cascades through four boundary tiers:
//! - **Sentence**: strong terminators such as `。`, `！`, `?` or `...`
//! - **Clause**: comma-class separators
//! - **Generic**: any run of non-word characters
//! - **Word**: word units from the tokenizer, the unconditional floor
//!
//! At each tier the text is split, the pieces are weighed and greedily merged
//! back toward an even partition under the budget. Only merged groups still
//! over budget move on to the next tier.
//!
//! # Example
//!
//! ```rust
//! use sentseg_core::Segmenter;
//!
//! let segmenter = Segmenter::new();
//! let text = "今天天气很好。我们去公园散步吧！";
//!
//! let chunks: Vec<&str> = segmenter
//!     .tokenize_limited_length(text, 10.0, true)
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(chunks, vec!["今天天气很好。", "我们去公园散步吧！"]);
//! assert_eq!(chunks.concat(), text);
//! ```

pub mod boundary;
pub mod config;
pub mod encoding;
pub mod error;
pub mod merge;
pub mod segmenter;
pub mod tokenizer;
pub mod weight;

pub use boundary::{BoundaryPatternSet, Fragment, Tier};
pub use config::{ConfigBuilder, PatternConfig, SegmenterConfig, WeightConfig};
pub use encoding::decode_lossy;
pub use error::{Error, Result};
pub use merge::{merge, MergeGroup};
pub use segmenter::{Chunk, DetailedSegments, Segmenter, Segments};
pub use tokenizer::{BasicWordTokenizer, WordTokenizer, WordUnit};
pub use weight::{WeightEstimator, WeightedFragment};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_segmenter_is_shareable() {
        assert_send_sync::<Segmenter>();
        assert_send_sync::<BoundaryPatternSet>();
        assert_send_sync::<WeightEstimator>();
    }

    #[test]
    fn test_crate_exports() {
        let segmenter = Segmenter::default();
        let _config: &SegmenterConfig = segmenter.config();
        let _tier = Tier::Sentence;
        let _units = BasicWordTokenizer::new().tokenize("ok");
    }
}
