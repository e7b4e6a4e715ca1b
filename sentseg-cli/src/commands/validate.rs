//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config).and_then(|config| {
            config.build_segmenter()?;
            Ok(config)
        }) {
            Ok(config) => {
                let segmentation = &config.segmentation;
                println!("✓ Configuration is valid!");
                println!("  max_len: {}", segmentation.max_len);
                println!("  force: {}", segmentation.force);
                println!(
                    "  latin_word_weight: {}",
                    segmentation.weight.latin_word_weight
                );
                println!("  default format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[segmentation]
max_len = 20.0

[segmentation.patterns]
clause = '[，,]+'
"#;
        assert!(validate(toml_content).is_ok());
    }

    #[test]
    fn test_validate_bad_budget() {
        assert!(validate("[segmentation]\nmax_len = 0.0\n").is_err());
    }

    #[test]
    fn test_validate_bad_pattern() {
        let err = validate("[segmentation.patterns]\nsentence = '(['\n").unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/sentseg.toml"),
        };
        assert!(args.execute().is_err());
    }
}
