//! Expenditure records, categorized and attributed to a cohort.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::expenditures;

/// A single expenditure entry.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = expenditures)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Expenditure {
    /// Unique expenditure identifier.
    pub id: Uuid,
    /// Category this expenditure belongs to.
    pub category_id: Uuid,
    /// Cohort this expenditure is attributed to.
    pub cohort_id: Uuid,
    /// Short name of the expenditure.
    pub name: String,
    /// Free-form purpose description.
    pub purpose: String,
    /// Amount spent.
    pub amount: BigDecimal,
    /// Date the money was spent.
    pub spent_on: Timestamp,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
}

/// Data for creating a new expenditure.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = expenditures)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewExpenditure {
    pub id: Uuid,
    pub category_id: Uuid,
    pub cohort_id: Uuid,
    pub name: String,
    pub purpose: String,
    pub amount: BigDecimal,
    pub spent_on: Timestamp,
}

/// Data for updating an expenditure.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = expenditures)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateExpenditure {
    pub category_id: Option<Uuid>,
    pub name: Option<String>,
    pub purpose: Option<String>,
    pub amount: Option<BigDecimal>,
    pub spent_on: Option<Timestamp>,
}
