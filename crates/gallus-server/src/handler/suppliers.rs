//! Supplier management handlers.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use gallus_postgres::PgClient;
use gallus_postgres::model::{NewSupplier, Supplier, UpdateSupplier};
use gallus_postgres::query::SupplierRepository;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::extract::{Json, Path, ValidateJson};
use crate::handler::{ErrorKind, PaginationParams, Result};
use crate::service::ServiceState;

/// Tracing target for supplier operations.
const TRACING_TARGET: &str = "gallus_server::handler::suppliers";

/// Request payload for creating a supplier.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateSupplierRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub contact: String,
}

/// Request payload for updating a supplier.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateSupplierRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub contact: Option<String>,
}

/// Describes a single supplier.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SupplierResponse {
    pub supplier_id: Uuid,
    pub name: String,
    pub contact: String,
    pub created_at: Timestamp,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            supplier_id: supplier.id,
            name: supplier.name,
            contact: supplier.contact,
            created_at: supplier.created_at.into(),
        }
    }
}

/// Creates a new supplier.
#[tracing::instrument(skip_all)]
async fn create_supplier(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<SupplierResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_supplier = NewSupplier {
        id: Uuid::new_v4(),
        name: request.name,
        contact: request.contact,
    };
    let supplier = conn.create_supplier(new_supplier).await?;

    tracing::info!(
        target: TRACING_TARGET,
        supplier_id = %supplier.id,
        name = %supplier.name,
        "supplier created",
    );

    Ok((StatusCode::CREATED, Json(supplier.into())))
}

/// Fetches a single supplier by id.
#[tracing::instrument(skip_all)]
async fn get_supplier(
    State(pg_client): State<PgClient>,
    Path(supplier_id): Path<Uuid>,
) -> Result<Json<SupplierResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let supplier = conn
        .find_supplier_by_id(supplier_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("supplier"))?;

    Ok(Json(supplier.into()))
}

/// Lists suppliers.
#[tracing::instrument(skip_all)]
async fn list_suppliers(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<SupplierResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let suppliers = conn.list_suppliers(pagination.into()).await?;

    Ok(Json(suppliers.into_iter().map(Into::into).collect()))
}

/// Updates a supplier.
#[tracing::instrument(skip_all)]
async fn update_supplier(
    State(pg_client): State<PgClient>,
    Path(supplier_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateSupplierRequest>,
) -> Result<Json<SupplierResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let updates = UpdateSupplier {
        name: request.name,
        contact: request.contact,
    };
    let supplier = conn.update_supplier(supplier_id, updates).await?;

    Ok(Json(supplier.into()))
}

/// Deletes a supplier.
#[tracing::instrument(skip_all)]
async fn delete_supplier(
    State(pg_client): State<PgClient>,
    Path(supplier_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_supplier(supplier_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound.with_resource("supplier").into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/suppliers", post(create_supplier).get(list_suppliers))
        .route(
            "/suppliers/{supplier_id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}
