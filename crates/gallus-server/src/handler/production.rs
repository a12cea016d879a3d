//! Egg production record handlers.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use gallus_postgres::PgClient;
use gallus_postgres::model::{NewProductionRecord, ProductionRecord, UpdateProductionRecord};
use gallus_postgres::query::ProductionRecordRepository;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::extract::{Json, Path, ValidateJson};
use crate::handler::{ErrorKind, PaginationParams, Result};
use crate::service::ServiceState;

/// Tracing target for production record operations.
const TRACING_TARGET: &str = "gallus_server::handler::production";

/// Request payload for recording a day's egg count.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateProductionRecordRequest {
    pub cohort_id: Uuid,
    pub recorded_on: Timestamp,
    #[validate(range(min = 0))]
    pub egg_count: i32,
}

/// Request payload for correcting a production record.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateProductionRecordRequest {
    pub recorded_on: Option<Timestamp>,
    #[validate(range(min = 0))]
    pub egg_count: Option<i32>,
}

/// Query parameters for listing production records.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListProductionRecordsParams {
    /// Restrict the listing to one cohort.
    pub cohort_id: Option<Uuid>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Describes a single production record.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductionRecordResponse {
    pub record_id: Uuid,
    pub cohort_id: Uuid,
    pub recorded_on: Timestamp,
    pub egg_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProductionRecord> for ProductionRecordResponse {
    fn from(record: ProductionRecord) -> Self {
        Self {
            record_id: record.id,
            cohort_id: record.cohort_id,
            recorded_on: record.recorded_on.into(),
            egg_count: record.egg_count,
            created_at: record.created_at.into(),
            updated_at: record.updated_at.into(),
        }
    }
}

/// Records a day's egg count for a cohort.
#[tracing::instrument(skip_all)]
async fn create_production_record(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateProductionRecordRequest>,
) -> Result<(StatusCode, Json<ProductionRecordResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_record = NewProductionRecord {
        id: Uuid::new_v4(),
        cohort_id: request.cohort_id,
        recorded_on: request.recorded_on.into(),
        egg_count: request.egg_count,
    };
    let record = conn.create_production_record(new_record).await?;

    tracing::info!(
        target: TRACING_TARGET,
        record_id = %record.id,
        cohort_id = %record.cohort_id,
        egg_count = record.egg_count,
        "production record created",
    );

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Fetches a single production record by id.
#[tracing::instrument(skip_all)]
async fn get_production_record(
    State(pg_client): State<PgClient>,
    Path(record_id): Path<Uuid>,
) -> Result<Json<ProductionRecordResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let record = conn
        .find_production_record_by_id(record_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("production_record"))?;

    Ok(Json(record.into()))
}

/// Lists production records, optionally filtered by cohort.
#[tracing::instrument(skip_all)]
async fn list_production_records(
    State(pg_client): State<PgClient>,
    Query(params): Query<ListProductionRecordsParams>,
) -> Result<Json<Vec<ProductionRecordResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let pagination = PaginationParams {
        page: params.page,
        per_page: params.per_page,
    };

    let records = match params.cohort_id {
        Some(cohort_id) => {
            conn.list_production_records_by_cohort(cohort_id, pagination.into())
                .await?
        }
        None => conn.list_production_records(pagination.into()).await?,
    };

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Corrects a production record.
#[tracing::instrument(skip_all)]
async fn update_production_record(
    State(pg_client): State<PgClient>,
    Path(record_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateProductionRecordRequest>,
) -> Result<Json<ProductionRecordResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let updates = UpdateProductionRecord {
        recorded_on: request.recorded_on.map(Into::into),
        egg_count: request.egg_count,
    };
    let record = conn.update_production_record(record_id, updates).await?;

    Ok(Json(record.into()))
}

/// Deletes a production record.
#[tracing::instrument(skip_all)]
async fn delete_production_record(
    State(pg_client): State<PgClient>,
    Path(record_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_production_record(record_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound
            .with_resource("production_record")
            .into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route(
            "/production-records",
            post(create_production_record).get(list_production_records),
        )
        .route(
            "/production-records/{record_id}",
            get(get_production_record)
                .put(update_production_record)
                .delete(delete_production_record),
        )
}
