//! Secure password hashing and verification using Argon2id.
//!
//! This module provides password hashing using the Argon2id algorithm with
//! its recommended default parameters. The hashing and verification methods
//! are designed for use in HTTP handlers and return appropriate HTTP error
//! responses for client consumption.

use argon2::password_hash::{Error as ArgonError, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier};

use crate::handler::{ErrorKind, Result};

/// Target identifier for password hashing service logging.
const TRACING_TARGET: &str = "gallus_server::service::password_hasher";

/// Minimum accepted password length, counted in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Secure password hashing and verification service using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Creates a new instance of the [`PasswordHasher`] service.
    pub fn new() -> Self {
        let argon2 = Argon2::default();
        Self { argon2 }
    }

    /// Hashes a password using Argon2id with a cryptographically secure random salt.
    ///
    /// Passwords shorter than 8 characters are rejected before any hashing
    /// work is done. The returned PHC string includes the algorithm tag,
    /// cost parameters, and salt, making later verification self-contained.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::BadRequest` if the password is too short
    /// - `ErrorKind::InternalServerError` if the hashing operation fails
    ///
    /// # Security Notes
    ///
    /// - Each call generates a unique cryptographically secure salt
    /// - The password is processed securely and not logged
    pub fn hash_password(&self, password: &str) -> Result<String> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ErrorKind::BadRequest
                .with_message("Password must be at least 8 characters long")
                .with_resource("authentication"));
        }

        let salt = SaltString::generate(&mut rand::thread_rng());

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password hashing operation failed"
                );

                ErrorKind::InternalServerError
                    .with_message("Password processing failed")
                    .with_context("Hash generation error")
                    .with_resource("authentication")
            })?;

        Ok(password_hash.to_string())
    }

    /// Verifies a password against a stored hash.
    ///
    /// This function performs timing-safe verification to prevent
    /// side-channel attacks.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::Unauthorized` for incorrect passwords
    /// - `ErrorKind::InternalServerError` for invalid hash format or system errors
    ///
    /// # Security Notes
    ///
    /// - Uses timing-safe comparison to prevent timing attacks
    /// - Does not leak information about why verification failed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<()> {
        let parsed_hash = PasswordHash::new(stored_hash).map_err(|e| {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %e,
                "invalid password hash format provided"
            );

            ErrorKind::InternalServerError
                .with_message("Authentication system temporarily unavailable")
                .with_context("Hash format error")
                .with_resource("authentication")
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(()),
            Err(ArgonError::Password) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    "password verification failed: incorrect password provided"
                );

                Err(ErrorKind::Unauthorized
                    .with_message("Authentication failed")
                    .with_context("Invalid credentials")
                    .with_resource("authentication"))
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password verification system error"
                );

                Err(ErrorKind::InternalServerError
                    .with_message("Authentication temporarily unavailable")
                    .with_context("Verification error")
                    .with_resource("authentication"))
            }
        }
    }

    /// Performs a dummy password verification to maintain consistent timing.
    ///
    /// This method is used when an account doesn't exist to prevent timing
    /// attacks that could reveal which accounts exist in the system. It
    /// hashes a random password and performs verification (which will always
    /// fail).
    pub fn verify_dummy_password(&self, password: &str) -> bool {
        use rand::Rng;
        use rand::distributions::Alphanumeric;

        // Random dummy password, same work as a real verification
        let dummy_password: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();

        if let Ok(dummy_hash) = self.hash_password(&dummy_password) {
            let _ = self.verify_password(password, &dummy_hash);
        }

        false
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let password = "secure_password_123";
        let hash = hasher.hash_password(password)?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password(password, &hash).is_ok());
        assert!(hasher.verify_password("wrong_password", &hash).is_err());

        Ok(())
    }

    #[test]
    fn hash_produces_unique_salts() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let password = "test_password";

        let hash1 = hasher.hash_password(password)?;
        let hash2 = hasher.hash_password(password)?;

        assert_ne!(hash1, hash2);
        assert!(hasher.verify_password(password, &hash1).is_ok());
        assert!(hasher.verify_password(password, &hash2).is_ok());

        Ok(())
    }

    #[test]
    fn rejects_short_passwords() {
        let hasher = PasswordHasher::new();

        for too_short in ["", "1234567", "abcdefg"] {
            let result = hasher.hash_password(too_short);
            let error = result.expect_err("short password must be rejected");
            assert_eq!(error.kind(), ErrorKind::BadRequest);
        }

        // Exactly 8 characters passes the length gate
        assert!(hasher.hash_password("12345678").is_ok());
    }

    #[test]
    fn length_check_counts_characters_not_bytes() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();

        // 8 multi-byte characters, more than 8 bytes either way
        let hash = hasher.hash_password("pässwörd")?;
        assert!(hasher.verify_password("pässwörd", &hash).is_ok());

        Ok(())
    }

    #[test]
    fn wrong_password_returns_unauthorized() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("correct_password")?;

        let error = hasher
            .verify_password("wrong_password", &hash)
            .expect_err("wrong password must fail");
        assert_eq!(error.kind(), ErrorKind::Unauthorized);

        Ok(())
    }

    #[test]
    fn invalid_hash_returns_internal_error() {
        let hasher = PasswordHasher::new();

        let error = hasher
            .verify_password("test_password", "not_a_valid_hash_format")
            .expect_err("invalid hash must fail");
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn dummy_verification_always_fails() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify_dummy_password("any_password_at_all"));
    }
}
