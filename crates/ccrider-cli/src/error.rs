//! Error types for the ccrider CLI

use ccrider_curves::CurveError;
use ccrider_engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid points: {0}")]
    InvalidPoints(#[from] CurveError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] EngineError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) | CliError::InvalidPoints(_) => 2,
            CliError::Configuration(_) => 3,
            CliError::JsonError(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(
            CliError::from(CurveError::TooFewPoints { count: 1 }).exit_code(),
            2
        );
        assert_eq!(CliError::from(EngineError::config("bad")).exit_code(), 3);
    }
}
