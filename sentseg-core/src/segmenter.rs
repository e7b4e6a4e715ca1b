//! Cascading segmenter
//!
//! Text is split at the sentence tier and merged under the budget. Each
//! merged group that is still over budget is split again at the next finer
//! tier, up to the word tier, whose output is accepted as is. The walk uses
//! an explicit stack rather than recursion, so at most four levels of
//! pending candidates exist for any root fragment.

use crate::boundary::{BoundaryPatternSet, Fragment, Tier};
use crate::config::{self, SegmenterConfig};
use crate::error::Result;
use crate::merge::merge;
use crate::tokenizer::{BasicWordTokenizer, WordTokenizer};
use crate::weight::WeightEstimator;
use serde::Serialize;
use std::iter::FusedIterator;
use std::sync::Arc;

/// A chunk accepted as output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chunk<'a> {
    /// Chunk text, a slice of the segmented input
    pub text: &'a str,
    /// Byte offset within the segmented input
    pub offset: usize,
    /// Summed weight of the chunk's fragments
    pub weight: f64,
    /// Tier whose merge produced the chunk
    pub tier: Tier,
}

/// What to do with a merged candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Emit,
    Escalate(Tier),
}

/// Weight-budgeted cascading segmenter
///
/// Construction compiles the boundary patterns once; afterwards the
/// segmenter is immutable and can be shared across threads.
#[derive(Debug)]
pub struct Segmenter {
    patterns: BoundaryPatternSet,
    estimator: WeightEstimator,
    config: SegmenterConfig,
}

impl Segmenter {
    /// Create a segmenter with the default configuration
    pub fn new() -> Self {
        Self::with_config(SegmenterConfig::default())
            .expect("Default config should always be valid")
    }

    /// Create a segmenter with a custom configuration
    pub fn with_config(config: SegmenterConfig) -> Result<Self> {
        Self::with_tokenizer(config, Arc::new(BasicWordTokenizer::new()))
    }

    /// Create a segmenter with a custom word tokenizer
    pub fn with_tokenizer(
        config: SegmenterConfig,
        tokenizer: Arc<dyn WordTokenizer>,
    ) -> Result<Self> {
        config.validate()?;
        let patterns = BoundaryPatternSet::new(&config.patterns, Arc::clone(&tokenizer))?;
        let estimator = WeightEstimator::new(&config.weight, tokenizer);
        log::debug!(
            "segmenter ready: max_len={}, force={}",
            config.max_len,
            config.force
        );
        Ok(Self {
            patterns,
            estimator,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment `text` with the configured budget and force setting
    pub fn segment<'s, 'a>(&'s self, text: &'a str) -> Segments<'s, 'a> {
        Segments::new(self, text, self.config.max_len, self.config.force)
    }

    /// Segment `text` into chunks of at most `max_len` weight
    ///
    /// With `force` unset, clause-tier chunks over budget are accepted
    /// instead of being split further; the other tiers are unaffected.
    pub fn tokenize_limited_length<'s, 'a>(
        &'s self,
        text: &'a str,
        max_len: f64,
        force: bool,
    ) -> Result<Segments<'s, 'a>> {
        config::validate_budget(max_len)?;
        Ok(Segments::new(self, text, max_len, force))
    }

    /// Speech weight of `text`
    pub fn weight_of(&self, text: &str) -> f64 {
        self.estimator.weight(text)
    }

    /// Split `text` at one tier without merging
    pub fn split<'a>(&self, text: &'a str, tier: Tier) -> Vec<Fragment<'a>> {
        self.patterns.split(text, tier)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate waiting on the work stack
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    text: &'a str,
    offset: usize,
    weight: f64,
    tier: Tier,
}

/// Lazy sequence of chunks for one input
///
/// Chunks come out in input order and concatenate back to the input. The
/// sequence is single-pass: once drained it stays empty and cannot be
/// rewound. Segment the text again to start over.
#[derive(Debug)]
pub struct Segments<'s, 'a> {
    segmenter: &'s Segmenter,
    text: &'a str,
    max_len: f64,
    force: bool,
    started: bool,
    stack: Vec<Candidate<'a>>,
}

impl<'s, 'a> Segments<'s, 'a> {
    fn new(segmenter: &'s Segmenter, text: &'a str, max_len: f64, force: bool) -> Self {
        Self {
            segmenter,
            text,
            max_len,
            force,
            started: false,
            stack: Vec::new(),
        }
    }

    /// Yield chunks with offset, weight and tier instead of bare text
    pub fn detailed(self) -> DetailedSegments<'s, 'a> {
        DetailedSegments { inner: self }
    }

    /// Next accepted chunk
    fn next_chunk(&mut self) -> Option<Chunk<'a>> {
        if !self.started {
            self.started = true;
            self.expand(self.text, 0, Tier::Sentence);
        }

        while let Some(candidate) = self.stack.pop() {
            match self.outcome(&candidate) {
                Outcome::Emit => {
                    return Some(Chunk {
                        text: candidate.text,
                        offset: candidate.offset,
                        weight: candidate.weight,
                        tier: candidate.tier,
                    });
                }
                Outcome::Escalate(next) => {
                    log::trace!(
                        "escalating {} chunk at {} (weight {} > {}) to {}",
                        candidate.tier,
                        candidate.offset,
                        candidate.weight,
                        self.max_len,
                        next
                    );
                    self.expand(candidate.text, candidate.offset, next);
                }
            }
        }

        None
    }

    fn outcome(&self, candidate: &Candidate<'a>) -> Outcome {
        if candidate.weight <= self.max_len {
            return Outcome::Emit;
        }
        match candidate.tier.next() {
            None => Outcome::Emit,
            Some(_) if candidate.tier == Tier::Clause && !self.force => Outcome::Emit,
            Some(next) => Outcome::Escalate(next),
        }
    }

    /// Split, weigh and merge `text` at `tier`, queueing the groups in order
    fn expand(&mut self, text: &'a str, base: usize, tier: Tier) {
        let segmenter = self.segmenter;
        let fragments = segmenter.patterns.split(text, tier);
        let weighted = segmenter.estimator.weigh(fragments);
        let groups = merge(text, &weighted, self.max_len);

        self.stack.extend(groups.into_iter().rev().map(|group| Candidate {
            text: group.text,
            offset: base + group.offset,
            weight: group.weight,
            tier,
        }));
    }
}

impl<'s, 'a> Iterator for Segments<'s, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().map(|chunk| chunk.text)
    }
}

impl FusedIterator for Segments<'_, '_> {}

/// Chunk-yielding view of [`Segments`]
#[derive(Debug)]
pub struct DetailedSegments<'s, 'a> {
    inner: Segments<'s, 'a>,
}

impl<'s, 'a> Iterator for DetailedSegments<'s, 'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_chunk()
    }
}

impl FusedIterator for DetailedSegments<'_, '_> {}
