//! Invoice and payment handlers.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use bigdecimal::BigDecimal;
use gallus_postgres::PgClient;
use gallus_postgres::model::{Invoice, NewInvoice, NewPayment, Payment, UpdateInvoice};
use gallus_postgres::query::{InvoiceRepository, PaymentRepository};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::extract::{Json, Path, ValidateJson};
use crate::handler::{ErrorKind, PaginationParams, Result};
use crate::service::ServiceState;

/// Tracing target for sales operations.
const TRACING_TARGET: &str = "gallus_server::handler::sales";

// ========== Invoices ==========

/// Request payload for issuing an invoice.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateInvoiceRequest {
    pub cohort_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub client_name: String,
    #[validate(range(min = 0))]
    pub egg_quantity: i32,
    pub amount: BigDecimal,
    #[validate(length(min = 1, max = 32))]
    pub status: String,
    pub due_on: Timestamp,
}

/// Request payload for updating an invoice.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateInvoiceRequest {
    #[validate(length(min = 1, max = 100))]
    pub client_name: Option<String>,
    #[validate(range(min = 0))]
    pub egg_quantity: Option<i32>,
    pub amount: Option<BigDecimal>,
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
    pub due_on: Option<Timestamp>,
}

/// Describes a single invoice.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceResponse {
    pub invoice_id: Uuid,
    pub cohort_id: Uuid,
    pub client_name: String,
    pub egg_quantity: i32,
    pub amount: BigDecimal,
    pub status: String,
    pub due_on: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            invoice_id: invoice.id,
            cohort_id: invoice.cohort_id,
            client_name: invoice.client_name,
            egg_quantity: invoice.egg_quantity,
            amount: invoice.amount,
            status: invoice.status,
            due_on: invoice.due_on.into(),
            created_at: invoice.created_at.into(),
            updated_at: invoice.updated_at.into(),
        }
    }
}

/// Issues a new invoice.
#[tracing::instrument(skip_all)]
async fn create_invoice(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_invoice = NewInvoice {
        id: Uuid::new_v4(),
        cohort_id: request.cohort_id,
        client_name: request.client_name,
        egg_quantity: request.egg_quantity,
        amount: request.amount,
        status: request.status,
        due_on: request.due_on.into(),
    };
    let invoice = conn.create_invoice(new_invoice).await?;

    tracing::info!(
        target: TRACING_TARGET,
        invoice_id = %invoice.id,
        cohort_id = %invoice.cohort_id,
        client_name = %invoice.client_name,
        "invoice created",
    );

    Ok((StatusCode::CREATED, Json(invoice.into())))
}

/// Fetches a single invoice by id.
#[tracing::instrument(skip_all)]
async fn get_invoice(
    State(pg_client): State<PgClient>,
    Path(invoice_id): Path<Uuid>,
) -> Result<Json<InvoiceResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let invoice = conn
        .find_invoice_by_id(invoice_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("invoice"))?;

    Ok(Json(invoice.into()))
}

/// Lists invoices.
#[tracing::instrument(skip_all)]
async fn list_invoices(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<InvoiceResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let invoices = conn.list_invoices(pagination.into()).await?;

    Ok(Json(invoices.into_iter().map(Into::into).collect()))
}

/// Updates an invoice.
#[tracing::instrument(skip_all)]
async fn update_invoice(
    State(pg_client): State<PgClient>,
    Path(invoice_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let updates = UpdateInvoice {
        client_name: request.client_name,
        egg_quantity: request.egg_quantity,
        amount: request.amount,
        status: request.status,
        due_on: request.due_on.map(Into::into),
    };
    let invoice = conn.update_invoice(invoice_id, updates).await?;

    Ok(Json(invoice.into()))
}

/// Deletes an invoice.
#[tracing::instrument(skip_all)]
async fn delete_invoice(
    State(pg_client): State<PgClient>,
    Path(invoice_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_invoice(invoice_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound.with_resource("invoice").into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

// ========== Payments ==========

/// Request payload for recording a payment.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreatePaymentRequest {
    pub invoice_id: Uuid,
    pub amount: BigDecimal,
    pub paid_at: Timestamp,
}

/// Describes a single payment.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentResponse {
    pub payment_id: Uuid,
    pub invoice_id: Uuid,
    pub amount: BigDecimal,
    pub paid_at: Timestamp,
    pub created_at: Timestamp,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            payment_id: payment.id,
            invoice_id: payment.invoice_id,
            amount: payment.amount,
            paid_at: payment.paid_at.into(),
            created_at: payment.created_at.into(),
        }
    }
}

/// Records a payment against an invoice.
#[tracing::instrument(skip_all)]
async fn create_payment(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_payment = NewPayment {
        id: Uuid::new_v4(),
        invoice_id: request.invoice_id,
        amount: request.amount,
        paid_at: request.paid_at.into(),
    };
    let payment = conn.create_payment(new_payment).await?;

    tracing::info!(
        target: TRACING_TARGET,
        payment_id = %payment.id,
        invoice_id = %payment.invoice_id,
        "payment recorded",
    );

    Ok((StatusCode::CREATED, Json(payment.into())))
}

/// Fetches a single payment by id.
#[tracing::instrument(skip_all)]
async fn get_payment(
    State(pg_client): State<PgClient>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<PaymentResponse>> {
    let mut conn = pg_client.get_connection().await?;

    let payment = conn
        .find_payment_by_id(payment_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("payment"))?;

    Ok(Json(payment.into()))
}

/// Lists payments.
#[tracing::instrument(skip_all)]
async fn list_payments(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<PaymentResponse>>> {
    let mut conn = pg_client.get_connection().await?;

    let payments = conn.list_payments(pagination.into()).await?;

    Ok(Json(payments.into_iter().map(Into::into).collect()))
}

/// Deletes a payment.
#[tracing::instrument(skip_all)]
async fn delete_payment(
    State(pg_client): State<PgClient>,
    Path(payment_id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn.delete_payment(payment_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound.with_resource("payment").into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/invoices", post(create_invoice).get(list_invoices))
        .route(
            "/invoices/{invoice_id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
        .route("/payments", post(create_payment).get(list_payments))
        .route(
            "/payments/{payment_id}",
            get(get_payment).delete(delete_payment),
        )
}
