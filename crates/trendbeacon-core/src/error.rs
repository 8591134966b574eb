//! Error types for `TrendBeacon`

use thiserror::Error;

/// Main error type shared by the `TrendBeacon` crates
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    #[error("Validation error: {field} - {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Upstream service error
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Logging could not be initialised
    #[error("Logging initialisation failed: {0}")]
    Logging(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "token.json");
        let app_error = Error::from(io_error);

        assert!(matches!(app_error, Error::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "missing client key".to_string(),
        };

        assert_eq!(error.to_string(), "Configuration error: missing client key");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_validation_error() {
        let error = Error::Validation {
            field: "server.port".to_string(),
            message: "must be non-zero".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Validation error: server.port - must be non-zero"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{\"broken\": }").unwrap_err();
        let app_error = Error::from(json_error);

        assert!(matches!(app_error, Error::Serialization(_)));
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let config_error = config::ConfigError::Message("bad value".to_string());
        let app_error = Error::from(config_error);

        assert_eq!(app_error.to_string(), "Configuration error: bad value");
    }
}
