//! Configuration module
//!
//! The CLI config file wraps the core segmenter settings under
//! `[segmentation]` and adds output and performance tables.

use crate::error::CliError;
use sentseg_core::{Segmenter, SegmenterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmenter configuration
    #[serde(default)]
    pub segmentation: SegmenterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, CliError> {
        let config: CliConfig =
            toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.segmentation.validate()?;
        Ok(config)
    }

    /// Load a TOML file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let source = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Build a segmenter, compiling the configured patterns
    pub fn build_segmenter(&self) -> Result<Segmenter, CliError> {
        Ok(Segmenter::with_config(self.segmentation.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.segmentation.max_len, 50.0);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_nested_segmentation_tables() {
        let config = CliConfig::from_toml_str(
            r#"
[segmentation]
max_len = 20
force = false

[segmentation.weight]
latin_word_weight = 3.0

[output]
default_format = "json"

[performance]
worker_threads = 2
"#,
        )
        .unwrap();
        assert_eq!(config.segmentation.max_len, 20.0);
        assert!(!config.segmentation.force);
        assert_eq!(config.segmentation.weight.latin_word_weight, 3.0);
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
        assert_eq!(config.performance.worker_threads, 2);
    }

    #[test]
    fn test_invalid_budget_rejected() {
        let err = CliConfig::from_toml_str("[segmentation]\nmax_len = 0").unwrap_err();
        assert!(matches!(err, CliError::ProcessingError(_)));
    }

    #[test]
    fn test_bad_pattern_rejected_at_build() {
        let config = CliConfig::from_toml_str("[segmentation.patterns]\nclause = \"(\"").unwrap();
        let err = config.build_segmenter().unwrap_err();
        assert!(err.to_string().contains("clause"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = CliConfig::from_toml_str("[segmentation").unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }
}
