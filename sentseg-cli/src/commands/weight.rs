//! Weight command implementation

use super::process::load_config;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the weight command
#[derive(Debug, Args)]
pub struct WeightArgs {
    /// Text to weigh
    #[arg(value_name = "TEXT", required = true)]
    pub text: String,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl WeightArgs {
    /// Execute the weight command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.weight()?);
        Ok(())
    }

    fn weight(&self) -> Result<f64> {
        let segmenter = load_config(self.config.as_deref())?.build_segmenter()?;
        Ok(segmenter.weight_of(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_weight_default() {
        let args = WeightArgs {
            text: "hello 世界".to_string(),
            config: None,
        };
        assert_eq!(args.weight().unwrap(), 4.5);
    }

    #[test]
    fn test_weight_with_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[segmentation.weight]\nlatin_word_weight = 1.0\n").unwrap();
        let args = WeightArgs {
            text: "hello world".to_string(),
            config: Some(file.path().to_path_buf()),
        };
        assert_eq!(args.weight().unwrap(), 2.0);
    }
}
