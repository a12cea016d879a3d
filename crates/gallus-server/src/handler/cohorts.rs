//! Cohort management handlers.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use gallus_postgres::PgClient;
use gallus_postgres::model::{Cohort, NewCohort, UpdateCohort};
use gallus_postgres::query::CohortRepository;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::extract::{Json, Path, ValidateJson};
use crate::handler::{ErrorKind, PaginationParams, Result};
use crate::service::ServiceState;

/// Tracing target for cohort operations.
const TRACING_TARGET: &str = "gallus_server::handler::cohorts";

/// Request payload for creating a new cohort.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateCohortRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub breed: String,
    pub started_on: Timestamp,
}

/// Request payload for updating a cohort.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateCohortRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub breed: Option<String>,
    pub started_on: Option<Timestamp>,
}

/// Describes a single cohort.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CohortResponse {
    pub cohort_id: Uuid,
    pub name: String,
    pub breed: String,
    pub started_on: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Cohort> for CohortResponse {
    fn from(cohort: Cohort) -> Self {
        Self {
            cohort_id: cohort.id,
            name: cohort.name,
            breed: cohort.breed,
            started_on: cohort.started_on.into(),
            created_at: cohort.created_at.into(),
            updated_at: cohort.updated_at.into(),
        }
    }
}

/// Creates a new cohort.
#[tracing::instrument(skip_all)]
async fn create_cohort(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateCohortRequest>,
) -> Result<(StatusCode, Json<CohortResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_cohort = NewCohort {
        id: Uuid::new_v4(),
        name: request.name,
        breed: request.breed,
        started_on: request.started_on.into(),
    };
    let cohort = conn.create_cohort(new_cohort).await?;

    tracing::info!(
        target: TRACING_TARGET,
        cohort_id = %cohort.id,
        name = %cohort.name,
        "cohort created",
    );

    Ok((StatusCode::CREATED, Json(cohort.into())))
}

/// Fetches a single cohort by id.
#[tracing::instrument(skip_all)]
async fn get_cohort(
    State(pg_client): State<PgClient>,
    Path(cohort_id): Path<Uuid>,
) -> Result<Json<CohortResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let cohort = conn
        .find_cohort_by_id(cohort_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("cohort"))?;

    Ok(Json(cohort.into()))
}

/// Lists cohorts.
#[tracing::instrument(skip_all)]
async fn list_cohorts(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<CohortResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let cohorts = conn.list_cohorts(pagination.into()).await?;
    let response = cohorts.into_iter().map(Into::into).collect();

    Ok(Json(response))
}

/// Updates a cohort.
#[tracing::instrument(skip_all)]
async fn update_cohort(
    State(pg_client): State<PgClient>,
    Path(cohort_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateCohortRequest>,
) -> Result<Json<CohortResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let updates = UpdateCohort {
        name: request.name,
        breed: request.breed,
        started_on: request.started_on.map(Into::into),
    };
    let cohort = conn.update_cohort(cohort_id, updates).await?;

    tracing::info!(
        target: TRACING_TARGET,
        cohort_id = %cohort.id,
        "cohort updated",
    );

    Ok(Json(cohort.into()))
}

/// Deletes a cohort.
#[tracing::instrument(skip_all)]
async fn delete_cohort(
    State(pg_client): State<PgClient>,
    Path(cohort_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_cohort(cohort_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound.with_resource("cohort").into_static());
    }

    tracing::info!(
        target: TRACING_TARGET,
        cohort_id = %cohort_id,
        "cohort deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/cohorts", post(create_cohort).get(list_cohorts))
        .route(
            "/cohorts/{cohort_id}",
            get(get_cohort).put(update_cohort).delete(delete_cohort),
        )
}
