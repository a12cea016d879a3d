//! Expenditure categories.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::categories;

/// A named expenditure category (unique by name).
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
}

/// Data for creating a new category.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCategory {
    pub id: Uuid,
    pub name: String,
}

/// Data for updating a category.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateCategory {
    pub name: Option<String>,
}
