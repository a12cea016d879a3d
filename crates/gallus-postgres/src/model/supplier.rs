//! Feed supplier contact records.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::suppliers;

/// A supplier the farm purchases feed from.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = suppliers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Supplier {
    /// Unique supplier identifier.
    pub id: Uuid,
    /// Supplier business name.
    pub name: String,
    /// Free-form contact details.
    pub contact: String,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
}

/// Data for creating a new supplier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = suppliers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewSupplier {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
}

/// Data for updating a supplier.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = suppliers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateSupplier {
    pub name: Option<String>,
    pub contact: Option<String>,
}
