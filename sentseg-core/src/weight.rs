//! Speech weight heuristic
//!
//! Weight approximates how long a fragment takes to say: one CJK character
//! or punctuation mark is one unit, an English word is a fixed number of
//! units regardless of its letter count, and anything else counts its
//! characters unless a fixed weight is configured.

use crate::boundary::Fragment;
use crate::config::WeightConfig;
use crate::tokenizer::{visible_chars, WordTokenizer};
use std::fmt;
use std::sync::Arc;

/// A fragment with its weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedFragment<'a> {
    /// The weighed fragment
    pub fragment: Fragment<'a>,
    /// Weight, never negative
    pub weight: f64,
}

/// Converts text into speech weight
#[derive(Clone)]
pub struct WeightEstimator {
    tokenizer: Arc<dyn WordTokenizer>,
    latin_word_weight: f64,
    other_weight: Option<f64>,
}

impl fmt::Debug for WeightEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightEstimator")
            .field("latin_word_weight", &self.latin_word_weight)
            .field("other_weight", &self.other_weight)
            .finish_non_exhaustive()
    }
}

impl WeightEstimator {
    /// Create an estimator using `tokenizer` for word units
    pub fn new(config: &WeightConfig, tokenizer: Arc<dyn WordTokenizer>) -> Self {
        Self {
            tokenizer,
            latin_word_weight: config.latin_word_weight,
            other_weight: config.other_weight,
        }
    }

    /// Weight of arbitrary text
    pub fn weight(&self, text: &str) -> f64 {
        self.tokenizer
            .tokenize(text)
            .iter()
            .map(|unit| self.unit_weight(unit.text))
            .sum()
    }

    /// Weight of one tokenizer unit
    ///
    /// Ignorable characters such as a zero-width space or soft hyphen do not
    /// count.
    pub fn unit_weight(&self, unit: &str) -> f64 {
        match visible_chars(unit).count() {
            0 => 0.0,
            1 => 1.0,
            _ if visible_chars(unit).all(|ch| ch.is_ascii_alphabetic()) => self.latin_word_weight,
            count => self.other_weight.unwrap_or(count as f64),
        }
    }

    /// Weigh each fragment of a split
    pub fn weigh<'a>(&self, fragments: Vec<Fragment<'a>>) -> Vec<WeightedFragment<'a>> {
        fragments
            .into_iter()
            .map(|fragment| WeightedFragment {
                weight: self.weight(fragment.text),
                fragment,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Tier;
    use crate::tokenizer::BasicWordTokenizer;

    fn estimator() -> WeightEstimator {
        WeightEstimator::new(&WeightConfig::default(), Arc::new(BasicWordTokenizer::new()))
    }

    #[test]
    fn test_reference_weights() {
        let est = estimator();
        assert_eq!(est.weight("ab"), 2.5);
        assert_eq!(est.weight("好"), 1.0);
        assert_eq!(est.weight("你好"), 2.0);
        assert_eq!(est.weight("12345"), 5.0);
    }

    #[test]
    fn test_latin_word_ignores_letter_count() {
        let est = estimator();
        assert_eq!(est.weight("internationalization"), 2.5);
        assert_eq!(est.weight("a"), 1.0);
        assert_eq!(est.weight("hello world"), 5.0);
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        let est = estimator();
        assert_eq!(est.weight("你好，世界。"), 6.0);
        assert_eq!(est.weight("   "), 0.0);
        assert_eq!(est.weight(""), 0.0);
    }

    #[test]
    fn test_mixed_units_use_char_count() {
        let est = estimator();
        assert_eq!(est.weight("abc123"), 6.0);
        assert_eq!(est.weight("これは"), 3.0);
        assert_eq!(est.weight("café"), 4.0);
    }

    #[test]
    fn test_invisible_characters_weigh_nothing() {
        let est = estimator();
        assert_eq!(est.weight("\u{FEFF}你好"), 2.0);
        assert_eq!(est.weight("你\u{200B}好"), 2.0);
        assert_eq!(est.weight("co\u{00AD}op"), 2.5);
        assert_eq!(est.weight("\u{2060}a\u{200D}"), 1.0);
        assert_eq!(est.unit_weight("\u{FEFF}"), 0.0);
    }

    #[test]
    fn test_non_cjk_punctuation_is_one_unit() {
        let est = estimator();
        assert_eq!(est.weight("ab\u{060C}cd"), 6.0);
        assert_eq!(est.weight("ab\u{0964}"), 3.5);
    }

    #[test]
    fn test_other_weight_override() {
        let config = WeightConfig {
            latin_word_weight: 3.0,
            other_weight: Some(1.5),
        };
        let est = WeightEstimator::new(&config, Arc::new(BasicWordTokenizer::new()));
        assert_eq!(est.weight("12345"), 1.5);
        assert_eq!(est.weight("word"), 3.0);
        assert_eq!(est.weight("7"), 1.0);
    }

    #[test]
    fn test_weigh_fragments() {
        let est = estimator();
        let fragments = vec![
            Fragment {
                text: "你好。",
                offset: 0,
                tier: Tier::Sentence,
            },
            Fragment {
                text: "ok!",
                offset: 9,
                tier: Tier::Sentence,
            },
        ];
        let weighted = est.weigh(fragments);
        assert_eq!(weighted[0].weight, 3.0);
        assert_eq!(weighted[1].weight, 3.5);
    }
}
