//! Feed consumption repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::Pagination;
use crate::model::{FeedConsumption, NewFeedConsumption, UpdateFeedConsumption};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for feed consumption database operations.
pub trait FeedConsumptionRepository {
    /// Creates a new feed consumption record.
    fn create_feed_consumption(
        &mut self,
        new_consumption: NewFeedConsumption,
    ) -> impl Future<Output = PgResult<FeedConsumption>> + Send;

    /// Finds a feed consumption record by its unique identifier.
    fn find_feed_consumption_by_id(
        &mut self,
        consumption_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<FeedConsumption>>> + Send;

    /// Lists feed consumption records ordered by date, most recent first.
    fn list_feed_consumption(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<FeedConsumption>>> + Send;

    /// Updates a feed consumption record.
    fn update_feed_consumption(
        &mut self,
        consumption_id: Uuid,
        updates: UpdateFeedConsumption,
    ) -> impl Future<Output = PgResult<FeedConsumption>> + Send;

    /// Deletes a feed consumption record. Returns `false` if no row matched.
    fn delete_feed_consumption(
        &mut self,
        consumption_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl FeedConsumptionRepository for PgConnection {
    async fn create_feed_consumption(
        &mut self,
        new_consumption: NewFeedConsumption,
    ) -> PgResult<FeedConsumption> {
        use schema::feed_consumption;

        diesel::insert_into(feed_consumption::table)
            .values(&new_consumption)
            .returning(FeedConsumption::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_feed_consumption_by_id(
        &mut self,
        consumption_id: Uuid,
    ) -> PgResult<Option<FeedConsumption>> {
        use schema::feed_consumption::{self, dsl};

        feed_consumption::table
            .filter(dsl::id.eq(consumption_id))
            .select(FeedConsumption::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_feed_consumption(
        &mut self,
        pagination: Pagination,
    ) -> PgResult<Vec<FeedConsumption>> {
        use schema::feed_consumption::{self, dsl};

        feed_consumption::table
            .order(dsl::consumed_on.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(FeedConsumption::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_feed_consumption(
        &mut self,
        consumption_id: Uuid,
        updates: UpdateFeedConsumption,
    ) -> PgResult<FeedConsumption> {
        use schema::feed_consumption::{self, dsl};

        diesel::update(feed_consumption::table.filter(dsl::id.eq(consumption_id)))
            .set(&updates)
            .returning(FeedConsumption::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_feed_consumption(&mut self, consumption_id: Uuid) -> PgResult<bool> {
        use schema::feed_consumption::{self, dsl};

        let deleted =
            diesel::delete(feed_consumption::table.filter(dsl::id.eq(consumption_id)))
                .execute(self)
                .await
                .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
