//! Error types for the TikTok client

use std::io;
use thiserror::Error;

/// Result type alias for TikTok operations
pub type TikTokResult<T> = Result<T, TikTokError>;

/// Errors that can occur while talking to TikTok or the local stores
#[derive(Error, Debug)]
pub enum TikTokError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error on the token or history file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Client key or secret not configured
    #[error("TikTok client credentials are not configured")]
    MissingCredentials,
}

impl TikTokError {
    /// Whether the failure came from the upstream service rather than local state
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Json(_))
    }
}

impl From<TikTokError> for trendbeacon_core::Error {
    fn from(err: TikTokError) -> Self {
        match err {
            TikTokError::Io(e) => Self::Io(e),
            TikTokError::Json(e) => Self::Serialization(e),
            TikTokError::MissingCredentials => Self::Configuration {
                message: err.to_string(),
            },
            TikTokError::Http(e) => Self::Upstream(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TikTokError::MissingCredentials.to_string(),
            "TikTok client credentials are not configured"
        );
    }

    #[test]
    fn test_upstream_classification() {
        let json = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        assert!(TikTokError::Json(json).is_upstream());
        assert!(!TikTokError::MissingCredentials.is_upstream());
        assert!(!TikTokError::Io(io::Error::other("disk")).is_upstream());
    }

    #[test]
    fn test_conversion_into_core_error() {
        let core: trendbeacon_core::Error = TikTokError::MissingCredentials.into();
        assert!(matches!(core, trendbeacon_core::Error::Configuration { .. }));

        let core: trendbeacon_core::Error = TikTokError::Io(io::Error::other("disk")).into();
        assert!(matches!(core, trendbeacon_core::Error::Io(_)));
    }
}
