//! Invoice repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use super::Pagination;
use crate::model::{Invoice, NewInvoice, UpdateInvoice};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for invoice database operations.
pub trait InvoiceRepository {
    /// Creates a new invoice.
    fn create_invoice(
        &mut self,
        new_invoice: NewInvoice,
    ) -> impl Future<Output = PgResult<Invoice>> + Send;

    /// Finds an invoice by its unique identifier.
    fn find_invoice_by_id(
        &mut self,
        invoice_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Invoice>>> + Send;

    /// Lists invoices ordered by due date, soonest first.
    fn list_invoices(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Invoice>>> + Send;

    /// Updates an invoice.
    fn update_invoice(
        &mut self,
        invoice_id: Uuid,
        updates: UpdateInvoice,
    ) -> impl Future<Output = PgResult<Invoice>> + Send;

    /// Deletes an invoice. Returns `false` if no row matched.
    fn delete_invoice(
        &mut self,
        invoice_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl InvoiceRepository for PgConnection {
    async fn create_invoice(&mut self, new_invoice: NewInvoice) -> PgResult<Invoice> {
        use schema::invoices;

        diesel::insert_into(invoices::table)
            .values(&new_invoice)
            .returning(Invoice::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_invoice_by_id(&mut self, invoice_id: Uuid) -> PgResult<Option<Invoice>> {
        use schema::invoices::{self, dsl};

        invoices::table
            .filter(dsl::id.eq(invoice_id))
            .select(Invoice::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_invoices(&mut self, pagination: Pagination) -> PgResult<Vec<Invoice>> {
        use schema::invoices::{self, dsl};

        invoices::table
            .order(dsl::due_on.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Invoice::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_invoice(
        &mut self,
        invoice_id: Uuid,
        updates: UpdateInvoice,
    ) -> PgResult<Invoice> {
        use schema::invoices::{self, dsl};

        diesel::update(invoices::table.filter(dsl::id.eq(invoice_id)))
            .set((
                &updates,
                dsl::updated_at.eq(jiff_diesel::Timestamp::from(Timestamp::now())),
            ))
            .returning(Invoice::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_invoice(&mut self, invoice_id: Uuid) -> PgResult<bool> {
        use schema::invoices::{self, dsl};

        let deleted = diesel::delete(invoices::table.filter(dsl::id.eq(invoice_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
