//! Boundary detection tiers
//!
//! Text is split at four levels of strictness. The first three use a
//! precompiled pattern each; the last delegates to the word tokenizer and is
//! the floor of the cascade. Every split is lossless: delimiter pieces are
//! glued onto the fragment before them, so concatenating the fragments of one
//! split always gives back the input.

pub mod patterns;

use crate::config::PatternConfig;
use crate::error::{Error, Result};
use crate::tokenizer::WordTokenizer;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Escalation tier, coarse to fine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Strong terminal punctuation
    Sentence,
    /// Comma-class separators
    Clause,
    /// Any non-word run
    Generic,
    /// Word units; never escalated
    Word,
}

impl Tier {
    /// All tiers in escalation order
    pub const ALL: [Tier; 4] = [Tier::Sentence, Tier::Clause, Tier::Generic, Tier::Word];

    /// Ordinal level, 1 through 4
    pub fn level(self) -> u8 {
        match self {
            Tier::Sentence => 1,
            Tier::Clause => 2,
            Tier::Generic => 3,
            Tier::Word => 4,
        }
    }

    /// Tier for an ordinal level
    pub fn from_level(level: u8) -> Option<Tier> {
        match level {
            1 => Some(Tier::Sentence),
            2 => Some(Tier::Clause),
            3 => Some(Tier::Generic),
            4 => Some(Tier::Word),
            _ => None,
        }
    }

    /// The next finer tier, `None` at the floor
    pub fn next(self) -> Option<Tier> {
        Tier::from_level(self.level() + 1)
    }

    /// Whether this is the terminal tier
    pub fn is_floor(self) -> bool {
        self == Tier::Word
    }

    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Sentence => "sentence",
            Tier::Clause => "clause",
            Tier::Generic => "generic",
            Tier::Word => "word",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Tier {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        Tier::from_level(level)
            .ok_or_else(|| Error::Configuration(format!("unknown tier level {level}")))
    }
}

/// A contiguous slice produced by one split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Fragment text, delimiters included
    pub text: &'a str,
    /// Byte offset within the text that was split
    pub offset: usize,
    /// Tier whose rule produced the fragment
    pub tier: Tier,
}

/// One raw piece of a split before classification
struct Piece {
    start: usize,
    end: usize,
    matched: bool,
}

/// Collects classified pieces into fragments, gluing delimiters backwards
struct FragmentBuilder<'a> {
    text: &'a str,
    tier: Tier,
    spans: Vec<(usize, usize)>,
}

impl<'a> FragmentBuilder<'a> {
    fn new(text: &'a str, tier: Tier) -> Self {
        Self {
            text,
            tier,
            spans: Vec::new(),
        }
    }

    fn push(&mut self, start: usize, end: usize, delimiter: bool) {
        if start == end {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if delimiter => last.1 = end,
            _ => self.spans.push((start, end)),
        }
    }

    fn finish(self) -> Vec<Fragment<'a>> {
        let text = self.text;
        let tier = self.tier;
        self.spans
            .into_iter()
            .map(|(start, end)| Fragment {
                text: &text[start..end],
                offset: start,
                tier,
            })
            .collect()
    }
}

/// Precompiled boundary rules for all four tiers
pub struct BoundaryPatternSet {
    sentence: Regex,
    clause: Regex,
    generic: Regex,
    non_word: Regex,
    tokenizer: Arc<dyn WordTokenizer>,
}

impl fmt::Debug for BoundaryPatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryPatternSet")
            .field("sentence", &self.sentence.as_str())
            .field("clause", &self.clause.as_str())
            .field("generic", &self.generic.as_str())
            .finish_non_exhaustive()
    }
}

impl BoundaryPatternSet {
    /// Compile a pattern set; the tokenizer backs the word tier
    pub fn new(config: &PatternConfig, tokenizer: Arc<dyn WordTokenizer>) -> Result<Self> {
        Ok(Self {
            sentence: compile(Tier::Sentence, &config.sentence)?,
            clause: compile(Tier::Clause, &config.clause)?,
            generic: compile(Tier::Generic, &config.generic)?,
            non_word: compile(Tier::Generic, patterns::NON_WORD)?,
            tokenizer,
        })
    }

    /// Pattern used by `tier`, `None` for the word tier
    pub fn pattern(&self, tier: Tier) -> Option<&Regex> {
        match tier {
            Tier::Sentence => Some(&self.sentence),
            Tier::Clause => Some(&self.clause),
            Tier::Generic => Some(&self.generic),
            Tier::Word => None,
        }
    }

    /// Split `text` at the boundaries of `tier`
    pub fn split<'a>(&self, text: &'a str, tier: Tier) -> Vec<Fragment<'a>> {
        match self.pattern(tier) {
            Some(pattern) => self.split_by_pattern(text, pattern, tier),
            None => self.split_by_words(text),
        }
    }

    fn split_by_pattern<'a>(&self, text: &'a str, pattern: &Regex, tier: Tier) -> Vec<Fragment<'a>> {
        let mut builder = FragmentBuilder::new(text, tier);
        for piece in raw_pieces(text, pattern) {
            let slice = &text[piece.start..piece.end];
            let delimiter = piece.matched || self.non_word.is_match(slice);
            builder.push(piece.start, piece.end, delimiter);
        }
        builder.finish()
    }

    /// Word units become fragments; the gaps the tokenizer dropped are
    /// delimiters so nothing is lost
    fn split_by_words<'a>(&self, text: &'a str) -> Vec<Fragment<'a>> {
        let mut builder = FragmentBuilder::new(text, Tier::Word);
        let mut cursor = 0;
        for unit in self.tokenizer.tokenize(text) {
            if unit.offset < cursor {
                continue;
            }
            builder.push(cursor, unit.offset, true);
            builder.push(unit.offset, unit.end(), false);
            cursor = unit.end();
        }
        builder.push(cursor, text.len(), true);
        builder.finish()
    }
}

/// Pattern matches and the gaps between them, in order
fn raw_pieces(text: &str, pattern: &Regex) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            pieces.push(Piece {
                start: cursor,
                end: found.start(),
                matched: false,
            });
        }
        if found.end() > found.start() {
            pieces.push(Piece {
                start: found.start(),
                end: found.end(),
                matched: true,
            });
        }
        cursor = found.end();
    }
    if cursor < text.len() {
        pieces.push(Piece {
            start: cursor,
            end: text.len(),
            matched: false,
        });
    }
    pieces
}

fn compile(tier: Tier, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern { tier, source })
}
