//! JWT authentication header extraction and session token codec.
//!
//! This module handles session tokens in HTTP Authorization Bearer headers.
//! Tokens are self-contained: all identity claims plus an HMAC signature over
//! them, so verification needs no server-side session state.
//!
//! # Security
//!
//! When used as an extractor, the token is validated for:
//! - Signature integrity using the process-wide secret (HS256 only; an
//!   attacker-supplied algorithm field is never trusted)
//! - Expiration and not-before bounds
//! - Required claims (iss, aud, sub, iat, exp, nbf)
//! - Issuer and audience matching

use std::borrow::Cow;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use axum_extra::typed_header::TypedHeaderRejectionReason;
use jiff::Timestamp;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::SessionKeys;

/// Serde adapter for JWT timestamps: integer Unix seconds on the wire,
/// [`jiff::Timestamp`] in memory.
mod unix_seconds {
    use jiff::Timestamp;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(ts.as_second())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let seconds = i64::deserialize(deserializer)?;
        Timestamp::from_second(seconds).map_err(serde::de::Error::custom)
    }
}

/// Claims carried inside a session token.
///
/// # Standard JWT Claims
///
/// | Claim | Field | Description |
/// |-------|-------|-------------|
/// | `iss` | `issued_by` | Token issuer identifier |
/// | `aud` | `audience` | Token audience identifier |
/// | `sub` | `account_id` | Account ID this token represents |
/// | `iat` | `issued_at` | Token creation timestamp |
/// | `nbf` | `not_before` | Earliest valid timestamp |
/// | `exp` | `expires_at` | Token expiration timestamp |
///
/// # Application-Specific Claims
///
/// | Claim | Field | Description |
/// |-------|-------|-------------|
/// | `name` | `display_name` | Account display name |
///
/// Claims are built fresh on every successful login and never persisted
/// server-side; the token is their sole carrier.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AuthClaims {
    // Standard (or registered) claims.
    /// Issuer (who created the token).
    #[serde(rename = "iss")]
    issued_by: Cow<'static, str>,
    /// Audience (who the token is intended for).
    #[serde(rename = "aud")]
    audience: Cow<'static, str>,

    /// Subject ID (unique identifier of the associated account).
    #[serde(rename = "sub")]
    pub account_id: Uuid,

    /// Issued at (as UTC timestamp).
    #[serde(rename = "iat", with = "unix_seconds")]
    pub issued_at: Timestamp,
    /// Not valid before (as UTC timestamp).
    #[serde(rename = "nbf", with = "unix_seconds")]
    pub not_before: Timestamp,
    /// Expiration time (as UTC timestamp).
    #[serde(rename = "exp", with = "unix_seconds")]
    pub expires_at: Timestamp,

    // Private (or custom) claims.
    /// Display name of the associated account.
    #[serde(rename = "name")]
    pub display_name: String,
}

impl AuthClaims {
    /// Default JWT audience identifier for authentication tokens.
    const JWT_AUDIENCE: &'static str = "gallus:users";
    /// Default JWT issuer identifier for authentication tokens.
    const JWT_ISSUER: &'static str = "gallus";
    /// Fixed validity window for issued tokens.
    const VALIDITY_WINDOW_SECS: i64 = 24 * 60 * 60;

    /// Creates a new claims structure for the given account.
    ///
    /// Issued-at and not-before are set to the current time; expiry is
    /// always issued-at plus the fixed 24-hour validity window.
    pub fn new(account_id: Uuid, display_name: impl Into<String>) -> Self {
        let now = Timestamp::now();
        let now = Timestamp::from_second(now.as_second()).unwrap_or(now);

        Self {
            issued_by: Cow::Borrowed(Self::JWT_ISSUER),
            audience: Cow::Borrowed(Self::JWT_AUDIENCE),
            account_id,
            issued_at: now,
            not_before: now,
            expires_at: now + jiff::Span::new().seconds(Self::VALIDITY_WINDOW_SECS),
            display_name: display_name.into(),
        }
    }

    /// Checks if the token has expired based on current UTC time.
    #[inline]
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Timestamp::now()
    }

    /// Encodes the claims into a signed compact session token.
    ///
    /// # Errors
    ///
    /// Returns an internal error if JWT encoding fails.
    pub fn encode(&self, keys: &SessionKeys) -> Result<String> {
        let header = Header::new(Algorithm::HS256);

        encode(&header, self, keys.encoding_key()).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_AUTHENTICATION,
                error = %e,
                account_id = %self.account_id,
                "failed to encode session token"
            );

            ErrorKind::InternalServerError
                .with_message("Authentication token generation failed")
                .with_context("Unable to create session token")
                .with_resource("authentication")
        })
    }

    /// Parses and validates a session token.
    ///
    /// This method performs comprehensive validation including:
    /// - Signature verification (HS256 only)
    /// - Standard JWT claims validation (iss, aud, exp, nbf)
    /// - Required claim presence
    ///
    /// # Errors
    ///
    /// Returns unauthorized-class errors for invalid, expired, or
    /// malformed tokens.
    pub fn decode(token: &str, keys: &SessionKeys) -> Result<Self> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = true;
        validation.set_audience(&[Self::JWT_AUDIENCE]);
        validation.set_issuer(&[Self::JWT_ISSUER]);
        validation.set_required_spec_claims(&["iss", "aud", "sub", "iat", "exp", "nbf"]);

        let token_data = decode::<Self>(token, keys.decoding_key(), &validation)?;
        let claims = token_data.claims;

        // Double-check expiration for security
        if claims.is_expired() {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                account_id = %claims.account_id,
                expired_at = %claims.expires_at,
                "session token validation failed: token expired"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("Authentication session has expired")
                .with_context("Please sign in again to continue")
                .with_resource("authentication"));
        }

        tracing::debug!(
            target: TRACING_TARGET_AUTHENTICATION,
            account_id = %claims.account_id,
            expires_at = %claims.expires_at,
            "session token validation completed successfully"
        );

        Ok(claims)
    }
}

impl From<JwtError> for Error<'static> {
    fn from(error: JwtError) -> Self {
        match error.kind() {
            JwtErrorKind::ExpiredSignature => ErrorKind::Unauthorized
                .with_message("Your session has expired")
                .with_context("Please sign in again to continue"),
            JwtErrorKind::ImmatureSignature => ErrorKind::Unauthorized
                .with_message("Authentication token is not yet valid")
                .with_context("Token not-before time is in the future"),
            JwtErrorKind::InvalidToken => ErrorKind::MalformedAuthToken
                .with_message("Authentication token is invalid")
                .with_context("The provided token format is unrecognized"),
            JwtErrorKind::InvalidSignature => ErrorKind::Unauthorized
                .with_message("Authentication token verification failed")
                .with_context("Token signature could not be verified"),
            JwtErrorKind::InvalidAlgorithm => ErrorKind::MalformedAuthToken
                .with_message("Authentication token uses unsupported format")
                .with_context("Token was signed with an incompatible algorithm"),
            JwtErrorKind::InvalidAudience => ErrorKind::Unauthorized
                .with_message("Authentication token is not valid for this service")
                .with_context("Token was issued for a different application"),
            JwtErrorKind::InvalidIssuer => ErrorKind::Unauthorized
                .with_message("Authentication token is from an untrusted source")
                .with_context("Token was not issued by this authentication system"),
            JwtErrorKind::MissingRequiredClaim(claim) => ErrorKind::MalformedAuthToken
                .with_message("Authentication token is incomplete")
                .with_context(format!("Token is missing required field: {}", claim)),
            JwtErrorKind::Base64(_) => ErrorKind::MalformedAuthToken
                .with_message("Authentication token format is corrupted")
                .with_context("Token contains invalid base64 encoding"),
            JwtErrorKind::Json(_) => ErrorKind::MalformedAuthToken
                .with_message("Authentication token structure is invalid")
                .with_context("Token payload contains malformed data"),
            _ => ErrorKind::InternalServerError
                .with_message("Authentication processing failed")
                .with_context("An unexpected error occurred during token validation"),
        }
    }
}

/// Session token extractor for `Authorization: Bearer` headers.
///
/// The expected header shape is the literal scheme token `Bearer` followed by
/// a single space and the token string; any other shape is rejected before
/// the codec is invoked. On success the verified claims are cached in the
/// request extensions so downstream extractions do not re-parse the token.
///
/// # Examples
///
/// ```rust,ignore
/// async fn handler(AuthHeader(claims): AuthHeader) -> Result<impl IntoResponse> {
///     println!("account: {}", claims.account_id);
///     Ok("Success")
/// }
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct AuthHeader(pub AuthClaims);

impl AuthHeader {
    /// Returns a reference to the verified claims.
    #[inline]
    pub fn as_auth_claims(&self) -> &AuthClaims {
        &self.0
    }

    /// Consumes this extractor and returns the verified claims.
    #[inline]
    pub fn into_auth_claims(self) -> AuthClaims {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthHeader
where
    S: Sync + Send,
    SessionKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Return cached claims if available to avoid re-parsing
        if let Some(auth_header) = parts.extensions.get::<Self>() {
            return Ok(auth_header.clone());
        }

        // Extract Bearer token from Authorization header
        type AuthBearerHeader = TypedHeader<Authorization<Bearer>>;
        let session_keys = SessionKeys::from_ref(state);

        match AuthBearerHeader::from_request_parts(parts, state).await {
            Ok(bearer_header) => {
                let claims = AuthClaims::decode(bearer_header.token(), &session_keys)?;
                let auth_header = Self(claims);
                // Cache for subsequent extractors in the same request
                parts.extensions.insert(auth_header.clone());
                Ok(auth_header)
            }
            Err(rejection) => {
                let error = match rejection.reason() {
                    TypedHeaderRejectionReason::Missing => ErrorKind::MissingAuthToken
                        .with_message("Authentication required")
                        .with_context("Missing Authorization header with Bearer token")
                        .with_resource("authentication"),
                    TypedHeaderRejectionReason::Error(_) => ErrorKind::MalformedAuthToken
                        .with_message("Invalid token format")
                        .with_context("Authorization header must contain a valid Bearer token")
                        .with_resource("authentication"),
                    _ => ErrorKind::InternalServerError
                        .with_message("Authentication processing failed")
                        .with_context("Unexpected error during header extraction")
                        .with_resource("authentication"),
                };
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> SessionKeys {
        SessionKeys::from_secret(b"unit-test-secret-0123456789").unwrap()
    }

    #[test]
    fn round_trip_preserves_claims() {
        let keys = test_keys();
        let account_id = Uuid::new_v4();
        let claims = AuthClaims::new(account_id, "Alice");

        let token = claims.encode(&keys).unwrap();
        let decoded = AuthClaims::decode(&token, &keys).unwrap();

        assert_eq!(decoded, claims);
        assert_eq!(decoded.account_id, account_id);
        assert_eq!(decoded.display_name, "Alice");
    }

    #[test]
    fn expiry_is_issued_at_plus_validity_window() {
        let claims = AuthClaims::new(Uuid::new_v4(), "Alice");
        let window = claims.expires_at - claims.issued_at;
        assert_eq!(window.get_seconds(), 24 * 60 * 60);
        assert_eq!(claims.not_before, claims.issued_at);
        assert!(!claims.is_expired());
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let keys = test_keys();
        let token = AuthClaims::new(Uuid::new_v4(), "Alice").encode(&keys).unwrap();

        // Alter one character in each of the three token sections
        for section in 0..3 {
            let mut parts: Vec<String> =
                token.split('.').map(ToOwned::to_owned).collect();
            let target = &mut parts[section];
            let replacement = if target.starts_with('A') { "B" } else { "A" };
            target.replace_range(0..1, replacement);

            let tampered = parts.join(".");
            assert!(
                AuthClaims::decode(&tampered, &keys).is_err(),
                "tampered section {section} was accepted"
            );
        }
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = test_keys();
        let mut claims = AuthClaims::new(Uuid::new_v4(), "Alice");

        // Backdate the whole token so the signature is valid but expiry has passed
        let two_days = jiff::Span::new().hours(48);
        claims.issued_at = claims.issued_at - two_days;
        claims.not_before = claims.not_before - two_days;
        claims.expires_at = claims.expires_at - two_days;

        let token = claims.encode(&keys).unwrap();
        let error = AuthClaims::decode(&token, &keys)
            .expect_err("expired token must be rejected");
        assert_eq!(error.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn token_with_wrong_algorithm_is_rejected() {
        let keys = test_keys();
        let claims = AuthClaims::new(Uuid::new_v4(), "Alice");

        // Same secret, different HMAC variant: the codec must not trust
        // the attacker-supplied algorithm field
        let header = Header::new(Algorithm::HS384);
        let token = encode(&header, &claims, keys.encoding_key()).unwrap();

        assert!(AuthClaims::decode(&token, &keys).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let keys = test_keys();
        let other_keys = SessionKeys::from_secret(b"a-completely-different-secret").unwrap();

        let token = AuthClaims::new(Uuid::new_v4(), "Alice")
            .encode(&other_keys)
            .unwrap();

        assert!(AuthClaims::decode(&token, &keys).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = test_keys();
        let error = AuthClaims::decode("not-a-token", &keys)
            .expect_err("garbage must be rejected");
        assert_eq!(error.kind(), ErrorKind::MalformedAuthToken);
    }
}
