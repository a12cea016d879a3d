//! Structural validation of email-like login identifiers.
//!
//! Validation is purely syntactic: local part from the RFC 5321 symbol set,
//! one `@`, and a hostname-like domain whose dot-separated labels start and
//! end with an alphanumeric and are at most 63 characters. No DNS lookup is
//! performed.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex is valid")
});

/// Why an identifier failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailFormatError {
    /// The identifier was empty.
    #[error("email cannot be empty")]
    Empty,
    /// The identifier does not match the email grammar.
    #[error("invalid email format")]
    Invalid,
}

/// Checks whether the provided identifier has a valid email format.
///
/// # Errors
///
/// Returns [`EmailFormatError::Empty`] for an empty string and
/// [`EmailFormatError::Invalid`] for anything outside the grammar.
pub fn validate_email(email: &str) -> Result<(), EmailFormatError> {
    if email.is_empty() {
        return Err(EmailFormatError::Empty);
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(EmailFormatError::Invalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        for email in [
            "a@b.com",
            "user@example.com",
            "first.last@example.co.ke",
            "user+tag@sub.domain.example",
            "u_n-usual!{chars}@host-name.example",
            "a@b",
        ] {
            assert_eq!(validate_email(email), Ok(()), "rejected {email}");
        }
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate_email(""), Err(EmailFormatError::Empty));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "plainaddress",
            "@no-local-part.com",
            "user@",
            "user@-leadinghyphen.com",
            "user@trailinghyphen-.com",
            "user@domain..com",
            "user name@example.com",
            "user@domain.com ",
        ] {
            assert_eq!(
                validate_email(email),
                Err(EmailFormatError::Invalid),
                "accepted {email}"
            );
        }
    }

    #[test]
    fn rejects_overlong_domain_labels() {
        let long_label = "a".repeat(64);
        let email = format!("user@{long_label}.com");
        assert_eq!(validate_email(&email), Err(EmailFormatError::Invalid));

        // 63 characters is the limit and passes
        let max_label = "a".repeat(63);
        let email = format!("user@{max_label}.com");
        assert_eq!(validate_email(&email), Ok(()));
    }
}
