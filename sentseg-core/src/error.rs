//! Error types for segmentation
//!
//! Segmentation itself never fails on content; every variant here describes
//! misuse or misconfiguration detected before any text is processed.

use crate::boundary::Tier;
use thiserror::Error;

/// Error type for segmenter construction and calls
#[derive(Debug, Error)]
pub enum Error {
    /// Budget was zero, negative, NaN or infinite
    #[error("invalid budget {0}: max_len must be a positive finite number")]
    InvalidBudget(f64),

    /// A boundary pattern failed to compile
    #[error("invalid {tier} boundary pattern: {source}")]
    InvalidPattern {
        /// Tier the pattern was configured for
        tier: Tier,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// Configuration value out of range or unreadable
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration(err.to_string())
    }
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_budget_display() {
        let err = Error::InvalidBudget(0.0);
        assert_eq!(
            err.to_string(),
            "invalid budget 0: max_len must be a positive finite number"
        );
    }

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("[").unwrap_err();
        let err = Error::InvalidPattern {
            tier: Tier::Clause,
            source,
        };
        assert!(err.to_string().starts_with("invalid clause boundary pattern:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Table>("max_len = ").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
