//! Error types for dashboard assembly

use thiserror::Error;

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors raised while wiring the page together
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// An element id was empty or contained whitespace
    #[error("Invalid element id for {role}: {id:?}")]
    InvalidElementId {
        /// Which element the id names
        role: &'static str,
        /// Offending id
        id: String,
    },

    /// Two elements were given the same id
    #[error("Element id {id:?} is used by both {first} and {second}")]
    DuplicateElementId {
        /// Shared id
        id: String,
        /// First role using it
        first: &'static str,
        /// Second role using it
        second: &'static str,
    },

    /// Two navigation items share a key
    #[error("Navigation key {0:?} is not unique")]
    DuplicateNavKey(String),

    /// Chart configuration could not be serialised
    #[error("Chart serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<DashboardError> for trendbeacon_core::Error {
    fn from(err: DashboardError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}
