//! Cohort model: a batch of birds raised and tracked together.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::cohorts;

/// A cohort of birds with a shared breed and start date.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = cohorts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Cohort {
    /// Unique cohort identifier.
    pub id: Uuid,
    /// Display name of the cohort.
    pub name: String,
    /// Breed of the birds in this cohort.
    pub breed: String,
    /// Date the cohort was started.
    pub started_on: Timestamp,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
    /// Timestamp when the record was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new cohort.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cohorts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCohort {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub started_on: Timestamp,
}

/// Data for updating a cohort.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = cohorts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateCohort {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub started_on: Option<Timestamp>,
}
