//! Error types for Sealbox canonicalization

use thiserror::Error;

/// Errors that can occur during canonicalization
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("Value has no canonical literal form: {0}")]
    UnrepresentableValue(String),

    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Serialization(err.to_string())
    }
}
