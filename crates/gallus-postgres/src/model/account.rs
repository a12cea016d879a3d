//! Main account model for PostgreSQL database operations.
//!
//! This module provides the core account model for user authentication and
//! management.
//!
//! ## Models
//!
//! - [`Account`] - Main account model with credential and profile information
//! - [`NewAccount`] - Data structure for creating new user accounts
//! - [`UpdateAccount`] - Data structure for updating existing account information

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::accounts;

/// Main account model representing a registered identity in the system.
///
/// The clear-text password never appears here: only the salted one-way
/// hash is persisted, and response types must not expose it.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Human-readable name for UI and communications.
    pub display_name: String,
    /// Primary email used for login lookup (unique, validated format).
    pub email_address: String,
    /// Salted PHC-format password hash (never empty for a persisted row).
    pub password_hash: String,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new account.
///
/// The identifier and timestamps are generated by the caller at
/// registration time, not by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAccount {
    /// Unique account identifier (fresh v4).
    pub id: Uuid,
    /// Human-readable name for UI and communications.
    pub display_name: String,
    /// Primary email used for login lookup.
    pub email_address: String,
    /// Salted PHC-format password hash.
    pub password_hash: String,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
}

/// Data for updating an account.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateAccount {
    /// Human-readable name for UI and communications.
    pub display_name: Option<String>,
    /// Primary email used for login lookup.
    pub email_address: Option<String>,
    /// Salted PHC-format password hash.
    pub password_hash: Option<String>,
}

impl Account {
    /// Returns the domain part of the account's email address.
    pub fn email_domain(&self) -> Option<&str> {
        self.email_address.rsplit_once('@').map(|(_, domain)| domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        let now = jiff::Timestamp::now();
        Account {
            id: Uuid::new_v4(),
            display_name: "Alice".to_owned(),
            email_address: "alice@example.com".to_owned(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn email_domain() {
        let account = sample_account();
        assert_eq!(account.email_domain(), Some("example.com"));
    }
}
