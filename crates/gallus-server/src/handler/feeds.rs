//! Feed purchase and consumption handlers.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use bigdecimal::BigDecimal;
use gallus_postgres::PgClient;
use gallus_postgres::model::{
    FeedConsumption, FeedPurchase, NewFeedConsumption, NewFeedPurchase, UpdateFeedConsumption,
    UpdateFeedPurchase,
};
use gallus_postgres::query::{FeedConsumptionRepository, FeedPurchaseRepository};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::extract::{Json, Path, ValidateJson};
use crate::handler::{ErrorKind, PaginationParams, Result};
use crate::service::ServiceState;

/// Tracing target for feed operations.
const TRACING_TARGET: &str = "gallus_server::handler::feeds";

// ========== Feed purchases ==========

/// Request payload for recording a feed purchase.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateFeedPurchaseRequest {
    pub supplier_id: Uuid,
    pub purchased_on: Timestamp,
    pub cost: BigDecimal,
    #[validate(range(min = 1))]
    pub bags: i32,
}

/// Request payload for correcting a feed purchase.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateFeedPurchaseRequest {
    pub purchased_on: Option<Timestamp>,
    pub cost: Option<BigDecimal>,
    #[validate(range(min = 1))]
    pub bags: Option<i32>,
}

/// Describes a single feed purchase.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedPurchaseResponse {
    pub purchase_id: Uuid,
    pub supplier_id: Uuid,
    pub purchased_on: Timestamp,
    pub cost: BigDecimal,
    pub bags: i32,
    pub created_at: Timestamp,
}

impl From<FeedPurchase> for FeedPurchaseResponse {
    fn from(purchase: FeedPurchase) -> Self {
        Self {
            purchase_id: purchase.id,
            supplier_id: purchase.supplier_id,
            purchased_on: purchase.purchased_on.into(),
            cost: purchase.cost,
            bags: purchase.bags,
            created_at: purchase.created_at.into(),
        }
    }
}

/// Records a feed purchase.
#[tracing::instrument(skip_all)]
async fn create_feed_purchase(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateFeedPurchaseRequest>,
) -> Result<(StatusCode, Json<FeedPurchaseResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_purchase = NewFeedPurchase {
        id: Uuid::new_v4(),
        supplier_id: request.supplier_id,
        purchased_on: request.purchased_on.into(),
        cost: request.cost,
        bags: request.bags,
    };
    let purchase = conn.create_feed_purchase(new_purchase).await?;

    tracing::info!(
        target: TRACING_TARGET,
        purchase_id = %purchase.id,
        supplier_id = %purchase.supplier_id,
        bags = purchase.bags,
        "feed purchase recorded",
    );

    Ok((StatusCode::CREATED, Json(purchase.into())))
}

/// Fetches a single feed purchase by id.
#[tracing::instrument(skip_all)]
async fn get_feed_purchase(
    State(pg_client): State<PgClient>,
    Path(purchase_id): Path<Uuid>,
) -> Result<Json<FeedPurchaseResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let purchase = conn
        .find_feed_purchase_by_id(purchase_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("feed_purchase"))?;

    Ok(Json(purchase.into()))
}

/// Lists feed purchases.
#[tracing::instrument(skip_all)]
async fn list_feed_purchases(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<FeedPurchaseResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let purchases = conn.list_feed_purchases(pagination.into()).await?;

    Ok(Json(purchases.into_iter().map(Into::into).collect()))
}

/// Corrects a feed purchase.
#[tracing::instrument(skip_all)]
async fn update_feed_purchase(
    State(pg_client): State<PgClient>,
    Path(purchase_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateFeedPurchaseRequest>,
) -> Result<Json<FeedPurchaseResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let updates = UpdateFeedPurchase {
        purchased_on: request.purchased_on.map(Into::into),
        cost: request.cost,
        bags: request.bags,
    };
    let purchase = conn.update_feed_purchase(purchase_id, updates).await?;

    Ok(Json(purchase.into()))
}

/// Deletes a feed purchase.
#[tracing::instrument(skip_all)]
async fn delete_feed_purchase(
    State(pg_client): State<PgClient>,
    Path(purchase_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_feed_purchase(purchase_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound
            .with_resource("feed_purchase")
            .into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

// ========== Feed consumption ==========

/// Request payload for recording feed consumption.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateFeedConsumptionRequest {
    pub cohort_id: Uuid,
    pub consumed_on: Timestamp,
    pub feed_kg: BigDecimal,
    pub water_liters: BigDecimal,
}

/// Request payload for correcting a feed consumption record.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateFeedConsumptionRequest {
    pub consumed_on: Option<Timestamp>,
    pub feed_kg: Option<BigDecimal>,
    pub water_liters: Option<BigDecimal>,
}

/// Describes a single feed consumption record.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedConsumptionResponse {
    pub consumption_id: Uuid,
    pub cohort_id: Uuid,
    pub consumed_on: Timestamp,
    pub feed_kg: BigDecimal,
    pub water_liters: BigDecimal,
    pub created_at: Timestamp,
}

impl From<FeedConsumption> for FeedConsumptionResponse {
    fn from(consumption: FeedConsumption) -> Self {
        Self {
            consumption_id: consumption.id,
            cohort_id: consumption.cohort_id,
            consumed_on: consumption.consumed_on.into(),
            feed_kg: consumption.feed_kg,
            water_liters: consumption.water_liters,
            created_at: consumption.created_at.into(),
        }
    }
}

/// Records a day's feed and water consumption.
#[tracing::instrument(skip_all)]
async fn create_feed_consumption(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateFeedConsumptionRequest>,
) -> Result<(StatusCode, Json<FeedConsumptionResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_consumption = NewFeedConsumption {
        id: Uuid::new_v4(),
        cohort_id: request.cohort_id,
        consumed_on: request.consumed_on.into(),
        feed_kg: request.feed_kg,
        water_liters: request.water_liters,
    };
    let consumption = conn.create_feed_consumption(new_consumption).await?;

    tracing::info!(
        target: TRACING_TARGET,
        consumption_id = %consumption.id,
        cohort_id = %consumption.cohort_id,
        "feed consumption recorded",
    );

    Ok((StatusCode::CREATED, Json(consumption.into())))
}

/// Fetches a single feed consumption record by id.
#[tracing::instrument(skip_all)]
async fn get_feed_consumption(
    State(pg_client): State<PgClient>,
    Path(consumption_id): Path<Uuid>,
) -> Result<Json<FeedConsumptionResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let consumption = conn
        .find_feed_consumption_by_id(consumption_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("feed_consumption"))?;

    Ok(Json(consumption.into()))
}

/// Lists feed consumption records.
#[tracing::instrument(skip_all)]
async fn list_feed_consumption(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<FeedConsumptionResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let records = conn.list_feed_consumption(pagination.into()).await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Corrects a feed consumption record.
#[tracing::instrument(skip_all)]
async fn update_feed_consumption(
    State(pg_client): State<PgClient>,
    Path(consumption_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateFeedConsumptionRequest>,
) -> Result<Json<FeedConsumptionResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let updates = UpdateFeedConsumption {
        consumed_on: request.consumed_on.map(Into::into),
        feed_kg: request.feed_kg,
        water_liters: request.water_liters,
    };
    let consumption = conn.update_feed_consumption(consumption_id, updates).await?;

    Ok(Json(consumption.into()))
}

/// Deletes a feed consumption record.
#[tracing::instrument(skip_all)]
async fn delete_feed_consumption(
    State(pg_client): State<PgClient>,
    Path(consumption_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_feed_consumption(consumption_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound
            .with_resource("feed_consumption")
            .into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route(
            "/feed-purchases",
            post(create_feed_purchase).get(list_feed_purchases),
        )
        .route(
            "/feed-purchases/{purchase_id}",
            get(get_feed_purchase)
                .put(update_feed_purchase)
                .delete(delete_feed_purchase),
        )
        .route(
            "/feed-consumption",
            post(create_feed_consumption).get(list_feed_consumption),
        )
        .route(
            "/feed-consumption/{consumption_id}",
            get(get_feed_consumption)
                .put(update_feed_consumption)
                .delete(delete_feed_consumption),
        )
}
