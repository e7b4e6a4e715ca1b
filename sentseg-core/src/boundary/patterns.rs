//! Built-in boundary patterns
//!
//! Closing quotes and brackets that directly follow a terminator belong to
//! the boundary, so a sentence keeps its closing `”` or `」`. Opening ones are
//! excluded from the generic net so they stay with the text they open.

/// Strong terminal marks: CJK/Latin period, semicolon, exclamation and
/// question marks, `…`, three or more dots, or two dots before whitespace
pub const SENTENCE: &str =
    r"(?:[。；;！!？?…]|\.{3,}|\.{2,}\s)+[”’』」）］〕】》〉)\]}]*";

/// Comma-class separators
pub const CLAUSE: &str = r"[，,：:]+[”’』」）］〕】》〉)\]}]*";

/// Any run of non-word characters other than opening quotes/brackets
pub const GENERIC: &str = r"[^\w“‘『「（［〔【《〈(\[{]+";

/// Pieces made only of whitespace or punctuation
pub(crate) const NON_WORD: &str = r"\A[\s\W]+\z";
