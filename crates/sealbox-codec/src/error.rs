//! Error types for the Sealbox codec

use sealbox_canonical::CanonicalError;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error(transparent)]
    Canonical(#[from] CanonicalError),

    #[error("Top-level value must be an object or a single text token, got {0}")]
    StructuralMismatch(&'static str),
}
