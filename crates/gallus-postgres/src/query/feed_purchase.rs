//! Feed purchase repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::Pagination;
use crate::model::{FeedPurchase, NewFeedPurchase, UpdateFeedPurchase};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for feed purchase database operations.
pub trait FeedPurchaseRepository {
    /// Creates a new feed purchase.
    fn create_feed_purchase(
        &mut self,
        new_purchase: NewFeedPurchase,
    ) -> impl Future<Output = PgResult<FeedPurchase>> + Send;

    /// Finds a feed purchase by its unique identifier.
    fn find_feed_purchase_by_id(
        &mut self,
        purchase_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<FeedPurchase>>> + Send;

    /// Lists feed purchases ordered by purchase date, most recent first.
    fn list_feed_purchases(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<FeedPurchase>>> + Send;

    /// Updates a feed purchase.
    fn update_feed_purchase(
        &mut self,
        purchase_id: Uuid,
        updates: UpdateFeedPurchase,
    ) -> impl Future<Output = PgResult<FeedPurchase>> + Send;

    /// Deletes a feed purchase. Returns `false` if no row matched.
    fn delete_feed_purchase(
        &mut self,
        purchase_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl FeedPurchaseRepository for PgConnection {
    async fn create_feed_purchase(
        &mut self,
        new_purchase: NewFeedPurchase,
    ) -> PgResult<FeedPurchase> {
        use schema::feed_purchases;

        diesel::insert_into(feed_purchases::table)
            .values(&new_purchase)
            .returning(FeedPurchase::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_feed_purchase_by_id(
        &mut self,
        purchase_id: Uuid,
    ) -> PgResult<Option<FeedPurchase>> {
        use schema::feed_purchases::{self, dsl};

        feed_purchases::table
            .filter(dsl::id.eq(purchase_id))
            .select(FeedPurchase::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_feed_purchases(
        &mut self,
        pagination: Pagination,
    ) -> PgResult<Vec<FeedPurchase>> {
        use schema::feed_purchases::{self, dsl};

        feed_purchases::table
            .order(dsl::purchased_on.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(FeedPurchase::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_feed_purchase(
        &mut self,
        purchase_id: Uuid,
        updates: UpdateFeedPurchase,
    ) -> PgResult<FeedPurchase> {
        use schema::feed_purchases::{self, dsl};

        diesel::update(feed_purchases::table.filter(dsl::id.eq(purchase_id)))
            .set(&updates)
            .returning(FeedPurchase::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_feed_purchase(&mut self, purchase_id: Uuid) -> PgResult<bool> {
        use schema::feed_purchases::{self, dsl};

        let deleted = diesel::delete(feed_purchases::table.filter(dsl::id.eq(purchase_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
