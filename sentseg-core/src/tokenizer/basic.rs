//! Default word tokenizer
//!
//! CJK ideographs and punctuation become single-character units, any other
//! run of non-whitespace characters (Latin words, digit runs, kana) becomes
//! one unit. Whitespace separates units and is dropped. Control and format
//! characters such as a BOM or zero-width space are ignored: they never start
//! or break a run. No case folding or accent stripping is applied.

use super::{WordTokenizer, WordUnit};
use regex::Regex;
use std::sync::OnceLock;

/// Unicode general-category tests for non-ASCII characters
struct CategoryClasses {
    format: Regex,
    punctuation: Regex,
}

static CATEGORIES: OnceLock<Option<CategoryClasses>> = OnceLock::new();

fn categories() -> Option<&'static CategoryClasses> {
    CATEGORIES
        .get_or_init(|| {
            Some(CategoryClasses {
                format: Regex::new(r"\A\p{Cf}\z").ok()?,
                punctuation: Regex::new(r"\A\p{P}\z").ok()?,
            })
        })
        .as_ref()
}

fn in_class(class: impl Fn(&CategoryClasses) -> &Regex, ch: char) -> bool {
    let mut buf = [0u8; 4];
    categories().is_some_and(|classes| class(classes).is_match(ch.encode_utf8(&mut buf)))
}

/// Whitespace/punctuation/CJK tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicWordTokenizer;

impl BasicWordTokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }
}

impl WordTokenizer for BasicWordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<WordUnit<'a>> {
        let mut units = Vec::new();
        let mut run_start: Option<usize> = None;

        for (pos, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = run_start.take() {
                    units.push(WordUnit::new(&text[start..pos], start));
                }
            } else if is_cjk_ideograph(ch) || is_punctuation(ch) {
                if let Some(start) = run_start.take() {
                    units.push(WordUnit::new(&text[start..pos], start));
                }
                let end = pos + ch.len_utf8();
                units.push(WordUnit::new(&text[pos..end], pos));
            } else if run_start.is_none() && !is_ignorable(ch) {
                run_start = Some(pos);
            }
        }

        if let Some(start) = run_start {
            units.push(WordUnit::new(&text[start..], start));
        }

        units
    }
}

/// Characters invisible to tokenization: control (`Cc`) other than
/// whitespace, format (`Cf`), NUL and the replacement character
///
/// Inside a run they are kept in the unit's slice but do not count towards
/// its length; see [`visible_chars`].
pub fn is_ignorable(ch: char) -> bool {
    if ch.is_whitespace() || is_cjk_ideograph(ch) {
        return false;
    }
    if ch.is_control() || ch == '\u{FFFD}' {
        return true;
    }
    !ch.is_ascii() && in_class(|c| &c.format, ch)
}

/// Characters of `unit` that tokenization does not ignore
pub fn visible_chars(unit: &str) -> impl Iterator<Item = char> + '_ {
    unit.chars().filter(|&ch| !is_ignorable(ch))
}

/// CJK Unified Ideographs and their extension/compatibility blocks
///
/// Hiragana, katakana and hangul are deliberately absent: they are written
/// with spaces or as runs and stay grouped.
pub fn is_cjk_ideograph(ch: char) -> bool {
    matches!(
        ch as u32,
        0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0x20000..=0x2A6DF
            | 0x2A700..=0x2B73F
            | 0x2B740..=0x2B81F
            | 0x2B820..=0x2CEAF
            | 0xF900..=0xFAFF
            | 0x2F800..=0x2FA1F
    )
}

/// Punctuation: every non-alphanumeric printable ASCII character plus any
/// character in the Unicode `P*` categories
pub fn is_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_punctuation();
    }
    in_class(|c| &c.punctuation, ch)
}
