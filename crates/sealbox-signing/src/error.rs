//! Error types for Sealbox signing

use sealbox_canonical::CanonicalError;
use thiserror::Error;

/// Errors that can occur while signing or verifying
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error(transparent)]
    Canonical(#[from] CanonicalError),
}
