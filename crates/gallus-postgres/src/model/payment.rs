//! Payments received against invoices.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::payments;

/// A payment received against an invoice.
///
/// Payments are immutable once recorded; corrections are made by
/// deleting and re-recording.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    /// Unique payment identifier.
    pub id: Uuid,
    /// Invoice this payment settles (fully or partially).
    pub invoice_id: Uuid,
    /// Amount paid.
    pub amount: BigDecimal,
    /// When the payment was received.
    pub paid_at: Timestamp,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
}

/// Data for recording a new payment.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPayment {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub amount: BigDecimal,
    pub paid_at: Timestamp,
}
