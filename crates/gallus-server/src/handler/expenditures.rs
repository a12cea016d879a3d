//! Expenditure and category handlers.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use bigdecimal::BigDecimal;
use gallus_postgres::PgClient;
use gallus_postgres::model::{
    Category, Expenditure, NewCategory, NewExpenditure, UpdateCategory, UpdateExpenditure,
};
use gallus_postgres::query::{CategoryRepository, ExpenditureRepository};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::extract::{Json, Path, ValidateJson};
use crate::handler::{ErrorKind, PaginationParams, Result};
use crate::service::ServiceState;

/// Tracing target for expenditure operations.
const TRACING_TARGET: &str = "gallus_server::handler::expenditures";

// ========== Categories ==========

/// Request payload for creating a category.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Request payload for renaming a category.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
}

/// Describes a single category.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryResponse {
    pub category_id: Uuid,
    pub name: String,
    pub created_at: Timestamp,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.id,
            name: category.name,
            created_at: category.created_at.into(),
        }
    }
}

/// Creates a new expenditure category.
#[tracing::instrument(skip_all)]
async fn create_category(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_category = NewCategory {
        id: Uuid::new_v4(),
        name: request.name,
    };
    let category = conn.create_category(new_category).await?;

    tracing::info!(
        target: TRACING_TARGET,
        category_id = %category.id,
        name = %category.name,
        "category created",
    );

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Fetches a single category by id.
#[tracing::instrument(skip_all)]
async fn get_category(
    State(pg_client): State<PgClient>,
    Path(category_id): Path<Uuid>,
) -> Result<Json<CategoryResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let category = conn
        .find_category_by_id(category_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("category"))?;

    Ok(Json(category.into()))
}

/// Lists categories.
#[tracing::instrument(skip_all)]
async fn list_categories(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<CategoryResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let categories = conn.list_categories(pagination.into()).await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Renames a category.
#[tracing::instrument(skip_all)]
async fn update_category(
    State(pg_client): State<PgClient>,
    Path(category_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let updates = UpdateCategory { name: request.name };
    let category = conn.update_category(category_id, updates).await?;

    Ok(Json(category.into()))
}

/// Deletes a category.
#[tracing::instrument(skip_all)]
async fn delete_category(
    State(pg_client): State<PgClient>,
    Path(category_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_category(category_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound.with_resource("category").into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

// ========== Expenditures ==========

/// Request payload for recording an expenditure.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateExpenditureRequest {
    pub category_id: Uuid,
    pub cohort_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub purpose: String,
    pub amount: BigDecimal,
    pub spent_on: Timestamp,
}

/// Request payload for correcting an expenditure.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateExpenditureRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub purpose: Option<String>,
    pub amount: Option<BigDecimal>,
    pub spent_on: Option<Timestamp>,
}

/// Describes a single expenditure.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenditureResponse {
    pub expenditure_id: Uuid,
    pub category_id: Uuid,
    pub cohort_id: Uuid,
    pub name: String,
    pub purpose: String,
    pub amount: BigDecimal,
    pub spent_on: Timestamp,
    pub created_at: Timestamp,
}

impl From<Expenditure> for ExpenditureResponse {
    fn from(expenditure: Expenditure) -> Self {
        Self {
            expenditure_id: expenditure.id,
            category_id: expenditure.category_id,
            cohort_id: expenditure.cohort_id,
            name: expenditure.name,
            purpose: expenditure.purpose,
            amount: expenditure.amount,
            spent_on: expenditure.spent_on.into(),
            created_at: expenditure.created_at.into(),
        }
    }
}

/// Records a new expenditure.
#[tracing::instrument(skip_all)]
async fn create_expenditure(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateExpenditureRequest>,
) -> Result<(StatusCode, Json<ExpenditureResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_expenditure = NewExpenditure {
        id: Uuid::new_v4(),
        category_id: request.category_id,
        cohort_id: request.cohort_id,
        name: request.name,
        purpose: request.purpose,
        amount: request.amount,
        spent_on: request.spent_on.into(),
    };
    let expenditure = conn.create_expenditure(new_expenditure).await?;

    tracing::info!(
        target: TRACING_TARGET,
        expenditure_id = %expenditure.id,
        category_id = %expenditure.category_id,
        cohort_id = %expenditure.cohort_id,
        "expenditure recorded",
    );

    Ok((StatusCode::CREATED, Json(expenditure.into())))
}

/// Fetches a single expenditure by id.
#[tracing::instrument(skip_all)]
async fn get_expenditure(
    State(pg_client): State<PgClient>,
    Path(expenditure_id): Path<Uuid>,
) -> Result<Json<ExpenditureResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let expenditure = conn
        .find_expenditure_by_id(expenditure_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("expenditure"))?;

    Ok(Json(expenditure.into()))
}

/// Lists expenditures.
#[tracing::instrument(skip_all)]
async fn list_expenditures(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<ExpenditureResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let expenditures = conn.list_expenditures(pagination.into()).await?;

    Ok(Json(expenditures.into_iter().map(Into::into).collect()))
}

/// Corrects an expenditure.
#[tracing::instrument(skip_all)]
async fn update_expenditure(
    State(pg_client): State<PgClient>,
    Path(expenditure_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateExpenditureRequest>,
) -> Result<Json<ExpenditureResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let updates = UpdateExpenditure {
        category_id: request.category_id,
        name: request.name,
        purpose: request.purpose,
        amount: request.amount,
        spent_on: request.spent_on.map(Into::into),
    };
    let expenditure = conn.update_expenditure(expenditure_id, updates).await?;

    Ok(Json(expenditure.into()))
}

/// Deletes an expenditure.
#[tracing::instrument(skip_all)]
async fn delete_expenditure(
    State(pg_client): State<PgClient>,
    Path(expenditure_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_expenditure(expenditure_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound
            .with_resource("expenditure")
            .into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/categories", post(create_category).get(list_categories))
        .route(
            "/categories/{category_id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route(
            "/expenditures",
            post(create_expenditure).get(list_expenditures),
        )
        .route(
            "/expenditures/{expenditure_id}",
            get(get_expenditure)
                .put(update_expenditure)
                .delete(delete_expenditure),
        )
}
