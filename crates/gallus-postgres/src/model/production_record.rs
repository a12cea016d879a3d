//! Daily egg production records per cohort.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::production_records;

/// A single day's egg count for a cohort.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = production_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductionRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// Cohort the eggs were collected from.
    pub cohort_id: Uuid,
    /// Date the count was recorded.
    pub recorded_on: Timestamp,
    /// Number of eggs collected.
    pub egg_count: i32,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
    /// Timestamp when the record was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new production record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = production_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewProductionRecord {
    pub id: Uuid,
    pub cohort_id: Uuid,
    pub recorded_on: Timestamp,
    pub egg_count: i32,
}

/// Data for updating a production record.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = production_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateProductionRecord {
    pub recorded_on: Option<Timestamp>,
    pub egg_count: Option<i32>,
}
