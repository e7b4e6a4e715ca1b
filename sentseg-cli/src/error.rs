//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given inputs
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "No files found matching: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<sentseg_core::Error> for CliError {
    fn from(err: sentseg_core::Error) -> Self {
        match err {
            sentseg_core::Error::InvalidBudget(_) => CliError::ProcessingError(err.to_string()),
            _ => CliError::ConfigError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("*.txt".to_string());
        assert_eq!(error.to_string(), "No files found matching: *.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("budget".to_string());
        assert_eq!(error.to_string(), "Processing error: budget");
    }

    #[test]
    fn test_from_core_error() {
        let budget: CliError = sentseg_core::Error::InvalidBudget(0.0).into();
        assert!(matches!(budget, CliError::ProcessingError(_)));

        let config: CliError = sentseg_core::Error::Configuration("bad".into()).into();
        assert!(matches!(config, CliError::ConfigError(_)));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(
            error.to_string(),
            "No files found matching: ファイル/test 文件.txt"
        );
    }
}
