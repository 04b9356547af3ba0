//! Process-wide secret key configuration
//!
//! The secret is established once at startup and treated as immutable for
//! the process lifetime. It is passed explicitly to the signing functions
//! rather than held in global state.

use std::env;
use std::fmt;

/// Environment variable the secret is read from.
pub const SECRET_ENV_VAR: &str = "SEALBOX_SECRET_KEY";

/// Fallback used when the environment variable is absent.
///
/// Insecure by definition: anyone reading this source can forge signatures
/// made with it. Set `SEALBOX_SECRET_KEY` in any real deployment.
pub const INSECURE_DEFAULT_SECRET: &str = "sealbox-insecure-default";

/// The signing key.
///
/// `Debug` is redacted so the key cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Create a secret from an explicit key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the secret from `SEALBOX_SECRET_KEY`, falling back to
    /// [`INSECURE_DEFAULT_SECRET`] when unset.
    pub fn from_env() -> Self {
        match env::var(SECRET_ENV_VAR) {
            Ok(key) if !key.is_empty() => Self(key),
            _ => Self(INSECURE_DEFAULT_SECRET.to_owned()),
        }
    }

    /// Whether this is the documented insecure fallback.
    pub fn is_insecure_default(&self) -> bool {
        self.0 == INSECURE_DEFAULT_SECRET
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_is_not_the_default() {
        let secret = Secret::new("super-secret");
        assert!(!secret.is_insecure_default());
    }

    #[test]
    fn default_key_is_flagged_insecure() {
        let secret = Secret::new(INSECURE_DEFAULT_SECRET);
        assert!(secret.is_insecure_default());
    }

    #[test]
    fn debug_redacts_the_key() {
        let secret = Secret::new("super-secret");
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("redacted"));
    }
}
