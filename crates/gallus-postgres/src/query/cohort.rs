//! Cohort repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use super::Pagination;
use crate::model::{Cohort, NewCohort, UpdateCohort};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for cohort database operations.
pub trait CohortRepository {
    /// Creates a new cohort.
    fn create_cohort(
        &mut self,
        new_cohort: NewCohort,
    ) -> impl Future<Output = PgResult<Cohort>> + Send;

    /// Finds a cohort by its unique identifier.
    fn find_cohort_by_id(
        &mut self,
        cohort_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Cohort>>> + Send;

    /// Lists cohorts ordered by start date, most recent first.
    fn list_cohorts(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Cohort>>> + Send;

    /// Updates a cohort with new information.
    fn update_cohort(
        &mut self,
        cohort_id: Uuid,
        updates: UpdateCohort,
    ) -> impl Future<Output = PgResult<Cohort>> + Send;

    /// Deletes a cohort. Returns `false` if no row matched.
    fn delete_cohort(&mut self, cohort_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;
}

impl CohortRepository for PgConnection {
    async fn create_cohort(&mut self, mut new_cohort: NewCohort) -> PgResult<Cohort> {
        use schema::cohorts;

        new_cohort.name = new_cohort.name.trim().to_owned();

        diesel::insert_into(cohorts::table)
            .values(&new_cohort)
            .returning(Cohort::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_cohort_by_id(&mut self, cohort_id: Uuid) -> PgResult<Option<Cohort>> {
        use schema::cohorts::{self, dsl};

        cohorts::table
            .filter(dsl::id.eq(cohort_id))
            .select(Cohort::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_cohorts(&mut self, pagination: Pagination) -> PgResult<Vec<Cohort>> {
        use schema::cohorts::{self, dsl};

        cohorts::table
            .order(dsl::started_on.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Cohort::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_cohort(
        &mut self,
        cohort_id: Uuid,
        updates: UpdateCohort,
    ) -> PgResult<Cohort> {
        use schema::cohorts::{self, dsl};

        diesel::update(cohorts::table.filter(dsl::id.eq(cohort_id)))
            .set((
                &updates,
                dsl::updated_at.eq(jiff_diesel::Timestamp::from(Timestamp::now())),
            ))
            .returning(Cohort::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_cohort(&mut self, cohort_id: Uuid) -> PgResult<bool> {
        use schema::cohorts::{self, dsl};

        let deleted = diesel::delete(cohorts::table.filter(dsl::id.eq(cohort_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
