//! Application state and dependency injection.

mod config;
mod security;

use gallus_postgres::PgClient;

pub use crate::service::config::ServiceConfig;
pub use crate::service::security::{
    EmailFormatError, PasswordHasher, SessionKeys, validate_email,
};
// Re-export error types from crate root for convenience
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    // External services:
    pub postgres: PgClient,

    // Internal services:
    pub password_hasher: PasswordHasher,
    pub session_keys: SessionKeys,
}

impl ServiceState {
    /// Creates application state from already-constructed services.
    pub fn new(
        postgres: PgClient,
        password_hasher: PasswordHasher,
        session_keys: SessionKeys,
    ) -> Self {
        Self {
            postgres,
            password_hasher,
            session_keys,
        }
    }

    /// Initializes application state from configuration.
    ///
    /// Connects to the database, applies pending migrations, and loads the
    /// session signing secret. Any failure here is fatal: the process must
    /// not serve requests with a partially-initialized state.
    pub async fn from_config(service_config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            postgres: service_config.connect_postgres().await?,
            password_hasher: PasswordHasher::new(),
            session_keys: service_config.load_session_keys()?,
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// External services:
impl_di!(postgres: PgClient);

// Internal services:
impl_di!(password_hasher: PasswordHasher);
impl_di!(session_keys: SessionKeys);
