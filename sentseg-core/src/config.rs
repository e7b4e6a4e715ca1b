//! Segmenter configuration
//!
//! Configuration can be built in code through [`ConfigBuilder`] or loaded
//! from TOML. Every field is optional in TOML and falls back to the defaults
//! below.

use crate::boundary::patterns;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Default weight budget per chunk
    pub const MAX_LEN: f64 = 50.0;

    /// Escalate past the clause tier by default
    pub const FORCE: bool = true;

    /// Weight of one multi-letter Latin word
    pub const LATIN_WORD_WEIGHT: f64 = 2.5;
}

/// Complete segmenter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Weight budget per chunk
    pub max_len: f64,
    /// Escalate over-budget clause chunks instead of accepting them
    pub force: bool,
    /// Weight heuristic tuning
    pub weight: WeightConfig,
    /// Boundary pattern overrides
    pub patterns: PatternConfig,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_len: defaults::MAX_LEN,
            force: defaults::FORCE,
            weight: WeightConfig::default(),
            patterns: PatternConfig::default(),
        }
    }
}

/// Weight heuristic parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    /// Weight of a word made only of ASCII letters
    pub latin_word_weight: f64,
    /// Fixed weight for other multi-character units (digit runs, mixed
    /// words); `None` uses the unit's character count
    pub other_weight: Option<f64>,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            latin_word_weight: defaults::LATIN_WORD_WEIGHT,
            other_weight: None,
        }
    }
}

/// Regex sources for the three pattern tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Sentence tier pattern
    pub sentence: String,
    /// Clause tier pattern
    pub clause: String,
    /// Generic tier pattern
    pub generic: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            sentence: patterns::SENTENCE.to_string(),
            clause: patterns::CLAUSE.to_string(),
            generic: patterns::GENERIC.to_string(),
        }
    }
}

impl SegmenterConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SegmenterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Configuration(e.to_string()))
    }

    /// Check value ranges; patterns are checked when compiled
    pub fn validate(&self) -> Result<()> {
        validate_budget(self.max_len)?;

        if !self.weight.latin_word_weight.is_finite() || self.weight.latin_word_weight < 0.0 {
            return Err(Error::Configuration(
                "latin_word_weight must be a non-negative number".into(),
            ));
        }

        if let Some(other) = self.weight.other_weight {
            if !other.is_finite() || other < 0.0 {
                return Err(Error::Configuration(
                    "other_weight must be a non-negative number".into(),
                ));
            }
        }

        for (name, source) in [
            ("sentence", &self.patterns.sentence),
            ("clause", &self.patterns.clause),
            ("generic", &self.patterns.generic),
        ] {
            if source.is_empty() {
                return Err(Error::Configuration(format!(
                    "{name} pattern must not be empty"
                )));
            }
        }

        Ok(())
    }
}

/// Reject budgets that are not positive finite numbers
pub(crate) fn validate_budget(max_len: f64) -> Result<()> {
    if max_len.is_finite() && max_len > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidBudget(max_len))
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_len: Option<f64>,
    force: Option<bool>,
    latin_word_weight: Option<f64>,
    other_weight: Option<f64>,
    patterns: Option<PatternConfig>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight budget
    pub fn max_len(mut self, max_len: f64) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Set whether clause chunks over budget are split further
    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }

    /// Set the weight of a Latin word
    pub fn latin_word_weight(mut self, weight: f64) -> Self {
        self.latin_word_weight = Some(weight);
        self
    }

    /// Use a fixed weight for non-Latin multi-character units
    pub fn other_weight(mut self, weight: f64) -> Self {
        self.other_weight = Some(weight);
        self
    }

    /// Replace the boundary patterns
    pub fn patterns(mut self, patterns: PatternConfig) -> Self {
        self.patterns = Some(patterns);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SegmenterConfig> {
        let mut config = SegmenterConfig::default();

        if let Some(max_len) = self.max_len {
            config.max_len = max_len;
        }
        if let Some(force) = self.force {
            config.force = force;
        }
        if let Some(weight) = self.latin_word_weight {
            config.weight.latin_word_weight = weight;
        }
        if self.other_weight.is_some() {
            config.weight.other_weight = self.other_weight;
        }
        if let Some(patterns) = self.patterns {
            config.patterns = patterns;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = SegmenterConfig::default();
        assert_eq!(config.max_len, 50.0);
        assert!(config.force);
        assert_eq!(config.weight.latin_word_weight, 2.5);
        assert_eq!(config.weight.other_weight, None);
        assert_eq!(config.patterns.sentence, patterns::SENTENCE);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SegmenterConfig::builder()
            .max_len(10.0)
            .force(false)
            .latin_word_weight(3.0)
            .other_weight(1.5)
            .build()
            .unwrap();
        assert_eq!(config.max_len, 10.0);
        assert!(!config.force);
        assert_eq!(config.weight.latin_word_weight, 3.0);
        assert_eq!(config.weight.other_weight, Some(1.5));
    }

    #[test]
    fn test_builder_rejects_bad_budget() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = SegmenterConfig::builder().max_len(bad).build();
            assert!(matches!(result, Err(Error::InvalidBudget(_))));
        }
    }

    #[test]
    fn test_builder_rejects_negative_weights() {
        assert!(SegmenterConfig::builder()
            .latin_word_weight(-1.0)
            .build()
            .is_err());
        assert!(SegmenterConfig::builder().other_weight(-0.5).build().is_err());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let patterns = PatternConfig {
            generic: String::new(),
            ..PatternConfig::default()
        };
        let err = SegmenterConfig::builder().patterns(patterns).build().unwrap_err();
        assert!(err.to_string().contains("generic pattern must not be empty"));
    }

    #[test]
    fn test_partial_toml() {
        let config = SegmenterConfig::from_toml_str(
            r#"
max_len = 12

[weight]
other_weight = 1.0
"#,
        )
        .unwrap();
        assert_eq!(config.max_len, 12.0);
        assert!(config.force);
        assert_eq!(config.weight.latin_word_weight, 2.5);
        assert_eq!(config.weight.other_weight, Some(1.0));
        assert_eq!(config.patterns, PatternConfig::default());
    }

    #[test]
    fn test_toml_invalid_budget() {
        let result = SegmenterConfig::from_toml_str("max_len = -3.0");
        assert!(matches!(result, Err(Error::InvalidBudget(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SegmenterConfig::builder().max_len(20.0).build().unwrap();
        let source = config.to_toml_string().unwrap();
        assert_eq!(SegmenterConfig::from_toml_str(&source).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "force = false").unwrap();
        let config = SegmenterConfig::from_file(file.path()).unwrap();
        assert!(!config.force);
    }

    #[test]
    fn test_from_missing_file() {
        let err = SegmenterConfig::from_file("/nonexistent/sentseg.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
