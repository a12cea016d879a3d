//! Sales invoices for egg deliveries.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::invoices;

/// An invoice issued to a client for an egg delivery.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Invoice {
    /// Unique invoice identifier.
    pub id: Uuid,
    /// Cohort the eggs came from.
    pub cohort_id: Uuid,
    /// Name of the invoiced client.
    pub client_name: String,
    /// Number of eggs delivered.
    pub egg_quantity: i32,
    /// Invoiced amount.
    pub amount: BigDecimal,
    /// Settlement status (e.g. "pending", "paid").
    pub status: String,
    /// Payment due date.
    pub due_on: Timestamp,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
    /// Timestamp when the record was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new invoice.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewInvoice {
    pub id: Uuid,
    pub cohort_id: Uuid,
    pub client_name: String,
    pub egg_quantity: i32,
    pub amount: BigDecimal,
    pub status: String,
    pub due_on: Timestamp,
}

/// Data for updating an invoice.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateInvoice {
    pub client_name: Option<String>,
    pub egg_quantity: Option<i32>,
    pub amount: Option<BigDecimal>,
    pub status: Option<String>,
    pub due_on: Option<Timestamp>,
}
