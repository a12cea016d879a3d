//! Session signing secret management for JWT session handling.
//!
//! The signing secret is loaded once from the process environment at startup
//! and is immutable for the lifetime of the process. Both issuance and
//! verification fail closed if the secret is absent or empty.

use std::fmt;
use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::{Error, Result};

/// Tracing target for session key operations.
const TRACING_TARGET: &str = "gallus_server::service::session_keys";

/// Secret keys used for JWT session authentication.
///
/// This struct provides thread-safe, read-only access to the HMAC keys used
/// for encoding and decoding session tokens. Cloning is cheap (shared Arc),
/// and concurrent readers need no synchronization.
#[derive(Clone)]
pub struct SessionKeys {
    inner: Arc<SessionKeysInner>,
}

/// Internal container for the actual key data.
struct SessionKeysInner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionKeys {
    /// Environment variable holding the session signing secret.
    pub const SECRET_ENV_VAR: &'static str = "JWT_SECRET";

    /// Creates a new `SessionKeys` instance from the given secret bytes.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty secret: the codec must
    /// fail closed rather than sign with a trivial key.
    pub fn from_secret(secret: &[u8]) -> Result<Self> {
        if secret.is_empty() {
            return Err(Error::config("session signing secret must not be empty"));
        }

        let inner = Arc::new(SessionKeysInner {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        });

        tracing::info!(
            target: TRACING_TARGET,
            secret_len = secret.len(),
            "session signing keys initialized",
        );

        Ok(Self { inner })
    }

    /// Creates a new `SessionKeys` instance from the `JWT_SECRET` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the variable is unset or empty.
    /// This is a fatal startup error: the process must not serve requests
    /// without a signing secret.
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var(Self::SECRET_ENV_VAR).map_err(|_| {
            tracing::error!(
                target: TRACING_TARGET,
                env_var = Self::SECRET_ENV_VAR,
                "session signing secret is not set",
            );
            Error::config("JWT_SECRET environment variable is not set")
        })?;

        Self::from_secret(secret.as_bytes())
    }

    /// Returns a reference to the encoding key.
    ///
    /// This key is used to sign session tokens.
    #[inline]
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.inner.encoding_key
    }

    /// Returns a reference to the decoding key.
    ///
    /// This key is used to verify session tokens.
    #[inline]
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.inner.decoding_key
    }

    /// Validates that the keys are functional for JWT operations.
    ///
    /// Performs a round-trip test by creating and verifying a test token.
    pub fn validate_keys(&self) -> Result<()> {
        use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
        use serde::{Deserialize, Serialize};

        #[derive(Debug, Clone, Serialize, Deserialize)]
        struct TestClaims {
            sub: String,
            exp: usize,
        }

        let claims = TestClaims {
            sub: "test".to_string(),
            exp: (std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
                + 300) as usize,
        };

        let header = Header::new(Algorithm::HS256);
        let token = encode(&header, &claims, self.encoding_key()).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                "key validation failed during encoding",
            );
            Error::auth("key validation encoding failed").with_source(e)
        })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        decode::<TestClaims>(&token, self.decoding_key(), &validation).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                "key validation failed during decoding",
            );
            Error::auth("key validation decoding failed").with_source(e)
        })?;

        Ok(())
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_valid_secret() {
        let keys = SessionKeys::from_secret(b"test-secret-at-least-some-bytes").unwrap();
        let result = keys.validate_keys();
        assert!(result.is_ok(), "validate_keys failed: {:?}", result.err());
    }

    #[test]
    fn reject_empty_secret() {
        let result = SessionKeys::from_secret(b"");
        assert!(result.is_err(), "empty secret must fail closed");
    }
}
