//! Payment repository.
//!
//! Payments have no update operation; a mistaken entry is deleted and
//! re-recorded.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::Pagination;
use crate::model::{NewPayment, Payment};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for payment database operations.
pub trait PaymentRepository {
    /// Records a new payment.
    fn create_payment(
        &mut self,
        new_payment: NewPayment,
    ) -> impl Future<Output = PgResult<Payment>> + Send;

    /// Finds a payment by its unique identifier.
    fn find_payment_by_id(
        &mut self,
        payment_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Payment>>> + Send;

    /// Lists payments ordered by payment time, most recent first.
    fn list_payments(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Payment>>> + Send;

    /// Deletes a payment. Returns `false` if no row matched.
    fn delete_payment(
        &mut self,
        payment_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl PaymentRepository for PgConnection {
    async fn create_payment(&mut self, new_payment: NewPayment) -> PgResult<Payment> {
        use schema::payments;

        diesel::insert_into(payments::table)
            .values(&new_payment)
            .returning(Payment::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_payment_by_id(&mut self, payment_id: Uuid) -> PgResult<Option<Payment>> {
        use schema::payments::{self, dsl};

        payments::table
            .filter(dsl::id.eq(payment_id))
            .select(Payment::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_payments(&mut self, pagination: Pagination) -> PgResult<Vec<Payment>> {
        use schema::payments::{self, dsl};

        payments::table
            .order(dsl::paid_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Payment::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_payment(&mut self, payment_id: Uuid) -> PgResult<bool> {
        use schema::payments::{self, dsl};

        let deleted = diesel::delete(payments::table.filter(dsl::id.eq(payment_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
