//! Database error to HTTP error conversion.
//!
//! Maps [`PgError`] values into the handler [`Error`] type. Known constraint
//! violations become specific client errors; everything else is a generic
//! server error so database detail never reaches the client.

use gallus_postgres::PgError;
use gallus_postgres::types::ConstraintViolation;

use crate::handler::{Error, ErrorKind};

/// Tracing target for database error conversions.
const TRACING_TARGET: &str = "gallus_server::postgres_errors";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        if constraint.is_unique_violation() {
            return ErrorKind::Conflict.with_context(constraint.to_string());
        }

        if constraint.is_missing_reference() {
            return ErrorKind::BadRequest.with_context(constraint.to_string());
        }

        ErrorKind::BadRequest.with_context(constraint.to_string())
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                // Known constraint violations map to specific client errors
                if let Some(constraint_name) = error.constraint()
                    && let Some(constraint) = ConstraintViolation::new(constraint_name)
                {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return constraint.into();
                }

                if error.is_not_found() {
                    return ErrorKind::NotFound.into_error();
                }

                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "database query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(message) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %message,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_conflict() {
        let error: Error<'_> = ConstraintViolation::AccountEmailTaken.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn missing_reference_maps_to_bad_request() {
        let error: Error<'_> = ConstraintViolation::UnknownCohort.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn opaque_store_errors_map_to_internal_error() {
        let error: Error<'_> = PgError::Config("bad pool size".to_owned()).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);

        let error: Error<'_> = PgError::Unexpected("pool disappeared".into()).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
