//! Validated JSON extractor with automatic validation.
//!
//! This module provides [`ValidateJson`], an enhanced JSON extractor that
//! combines deserialization with automatic validation using the `validator`
//! crate.

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::Json;
use crate::handler::{Error, ErrorKind};

/// Enhanced JSON extractor with automatic validation using the `validator` crate.
///
/// This extractor combines JSON deserialization with automatic validation,
/// providing comprehensive error messages for validation failures. It works
/// with any type that implements both `serde::Deserialize` and
/// `validator::Validate`.
///
/// Also see [`Json`]
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Creates a new instance of [`ValidateJson`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First, deserialize the JSON
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;

        // Then validate the deserialized data
        data.validate()?;
        Ok(Self::new(data))
    }
}

/// Formats a single validation error with a user-friendly message.
fn format_validation_error(field: &str, error: &validator::ValidationError) -> String {
    if let Some(custom_message) = &error.message {
        return format!("Field '{}': {}", field, custom_message);
    }

    let message = match error.code.as_ref() {
        "required" => "is required and cannot be empty".to_string(),
        "email" => "must be a valid email address (e.g., user@example.com)".to_string(),
        "length" => {
            let min = error.params.get("min").and_then(|v| v.as_i64());
            let max = error.params.get("max").and_then(|v| v.as_i64());
            match (min, max) {
                (Some(min), Some(max)) => {
                    format!("must be between {} and {} characters long", min, max)
                }
                (Some(min), None) => format!("must be at least {} characters long", min),
                (None, Some(max)) => format!("must be at most {} characters long", max),
                _ => "has invalid length".to_string(),
            }
        }
        "range" => {
            let min = error.params.get("min").and_then(|v| v.as_f64());
            let max = error.params.get("max").and_then(|v| v.as_f64());
            match (min, max) {
                (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
                (Some(min), None) => format!("must be at least {}", min),
                (None, Some(max)) => format!("must be at most {}", max),
                _ => "is out of valid range".to_string(),
            }
        }
        code => format!("failed validation: {}", code),
    };

    format!("Field '{}' {}", field, message)
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let error_messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(move |error| format_validation_error(field, error))
            })
            .collect();

        // Show validation details in the user-facing message
        let user_message = match error_messages.as_slice() {
            [] => "Validation failed".to_string(),
            [single_error] => single_error.clone(),
            multiple => multiple.join(". "),
        };

        tracing::warn!(
            errors = ?errors.field_errors(),
            "request validation failed"
        );

        ErrorKind::BadRequest
            .with_message(user_message)
            .with_resource("request")
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Debug, serde::Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 2, max = 32))]
        name: String,
    }

    #[test]
    fn validation_errors_become_bad_request() {
        let sample = Sample {
            name: "x".to_owned(),
        };
        let errors = sample.validate().unwrap_err();

        let error: Error<'_> = errors.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert!(error.message().unwrap_or_default().contains("name"));
    }
}
