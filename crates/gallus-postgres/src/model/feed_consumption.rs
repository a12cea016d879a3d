//! Daily feed and water consumption per cohort.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::feed_consumption;

/// A single day's feed and water consumption for a cohort.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = feed_consumption)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FeedConsumption {
    /// Unique record identifier.
    pub id: Uuid,
    /// Cohort that consumed the feed.
    pub cohort_id: Uuid,
    /// Date of consumption.
    pub consumed_on: Timestamp,
    /// Feed consumed in kilograms.
    pub feed_kg: BigDecimal,
    /// Water consumed in liters.
    pub water_liters: BigDecimal,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
}

/// Data for creating a new feed consumption record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feed_consumption)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewFeedConsumption {
    pub id: Uuid,
    pub cohort_id: Uuid,
    pub consumed_on: Timestamp,
    pub feed_kg: BigDecimal,
    pub water_liters: BigDecimal,
}

/// Data for updating a feed consumption record.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = feed_consumption)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateFeedConsumption {
    pub consumed_on: Option<Timestamp>,
    pub feed_kg: Option<BigDecimal>,
    pub water_liters: Option<BigDecimal>,
}
