//! Word tokenization capability
//!
//! The segmenter never inspects words itself. Weighing fragments and the
//! word-level fallback tier both go through a [`WordTokenizer`], which is
//! injected at construction so tests and callers can substitute their own.

mod basic;

pub use basic::{is_ignorable, visible_chars, BasicWordTokenizer};

/// A word-like unit borrowed from the tokenized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordUnit<'a> {
    /// The unit's text
    pub text: &'a str,
    /// Byte offset of the unit within the tokenized text
    pub offset: usize,
}

impl<'a> WordUnit<'a> {
    /// Create a unit starting at `offset`
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Byte offset one past the unit's last byte
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Length in characters
    #[inline]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits text into word-like units
///
/// Implementations must return units in input order, without overlap, each
/// one a slice of `text` at the recorded offset. Characters not covered by any
/// unit (typically whitespace) are treated as dropped separators.
pub trait WordTokenizer: Send + Sync {
    /// Tokenize `text` into ordered units
    fn tokenize<'a>(&self, text: &'a str) -> Vec<WordUnit<'a>>;
}

impl<T: WordTokenizer + ?Sized> WordTokenizer for std::sync::Arc<T> {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<WordUnit<'a>> {
        (**self).tokenize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_unit_bounds() {
        let unit = WordUnit::new("你好", 3);
        assert_eq!(unit.end(), 9);
        assert_eq!(unit.char_len(), 2);
    }
}
