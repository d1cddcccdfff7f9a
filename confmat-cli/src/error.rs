//! Error handling for the CLI application

use std::fmt;

/// Message shown for any label input the evaluator rejects
pub const INVALID_INPUT_MESSAGE: &str = "Please enter labels correctly using Cat or Dog only.";

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Label input rejected by the evaluator
    InvalidInput(String),
    /// Configuration error
    ConfigError(String),
    /// Writing the report failed
    OutputError(String),
}

impl CliError {
    /// The user-facing error for rejected label input
    pub fn invalid_input() -> Self {
        CliError::InvalidInput(INVALID_INPUT_MESSAGE.to_string())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(msg) => write!(f, "{msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_generic() {
        let error = CliError::invalid_input();
        assert_eq!(
            error.to_string(),
            "Please enter labels correctly using Cat or Dog only."
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_output_error_display() {
        let error = CliError::OutputError("broken pipe".to_string());
        assert_eq!(error.to_string(), "Output error: broken pipe");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::ConfigError("bad".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
        assert!(debug_str.contains("bad"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let failure: CliResult<()> = Err(CliError::invalid_input().into());
        let err = failure.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }
}
