//! Feed purchase records.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::feed_purchases;

/// A feed purchase from a supplier.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = feed_purchases)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FeedPurchase {
    /// Unique purchase identifier.
    pub id: Uuid,
    /// Supplier the feed was bought from.
    pub supplier_id: Uuid,
    /// Date of the purchase.
    pub purchased_on: Timestamp,
    /// Total cost of the purchase.
    pub cost: BigDecimal,
    /// Number of bags purchased.
    pub bags: i32,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
}

/// Data for creating a new feed purchase.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feed_purchases)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewFeedPurchase {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub purchased_on: Timestamp,
    pub cost: BigDecimal,
    pub bags: i32,
}

/// Data for updating a feed purchase.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = feed_purchases)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateFeedPurchase {
    pub purchased_on: Option<Timestamp>,
    pub cost: Option<BigDecimal>,
    pub bags: Option<i32>,
}
