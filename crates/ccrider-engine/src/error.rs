//! Error types for rider construction and configuration.
//!
//! Runtime rider operations never fail; these errors only surface while
//! building riders or loading configuration.

use thiserror::Error;

/// Errors raised by the engine crate.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configuration value is out of its allowed range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Two riders in one bank share a key.
    #[error("Duplicate rider key: {0}")]
    DuplicateKey(String),

    /// No rider with this key exists in the bank.
    #[error("Unknown rider: {0}")]
    UnknownRider(String),

    /// The configuration file extension is not recognised.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl EngineError {
    /// Create an [`EngineError::InvalidConfiguration`] from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration(msg.into())
    }

    /// True for errors caused by the configuration contents rather than I/O.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, EngineError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_config() {
        let err = EngineError::config("epsilon must be positive");
        let msg = err.to_string();
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("epsilon must be positive"));
    }

    #[test]
    fn test_io_is_not_configuration() {
        let err: EngineError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_configuration());
        assert!(EngineError::DuplicateKey("e".into()).is_configuration());
    }
}
