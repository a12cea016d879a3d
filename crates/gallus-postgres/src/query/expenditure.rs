//! Expenditure repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::Pagination;
use crate::model::{Expenditure, NewExpenditure, UpdateExpenditure};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for expenditure database operations.
pub trait ExpenditureRepository {
    /// Creates a new expenditure.
    fn create_expenditure(
        &mut self,
        new_expenditure: NewExpenditure,
    ) -> impl Future<Output = PgResult<Expenditure>> + Send;

    /// Finds an expenditure by its unique identifier.
    fn find_expenditure_by_id(
        &mut self,
        expenditure_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Expenditure>>> + Send;

    /// Lists expenditures ordered by spend date, most recent first.
    fn list_expenditures(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Expenditure>>> + Send;

    /// Updates an expenditure.
    fn update_expenditure(
        &mut self,
        expenditure_id: Uuid,
        updates: UpdateExpenditure,
    ) -> impl Future<Output = PgResult<Expenditure>> + Send;

    /// Deletes an expenditure. Returns `false` if no row matched.
    fn delete_expenditure(
        &mut self,
        expenditure_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl ExpenditureRepository for PgConnection {
    async fn create_expenditure(
        &mut self,
        new_expenditure: NewExpenditure,
    ) -> PgResult<Expenditure> {
        use schema::expenditures;

        diesel::insert_into(expenditures::table)
            .values(&new_expenditure)
            .returning(Expenditure::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_expenditure_by_id(
        &mut self,
        expenditure_id: Uuid,
    ) -> PgResult<Option<Expenditure>> {
        use schema::expenditures::{self, dsl};

        expenditures::table
            .filter(dsl::id.eq(expenditure_id))
            .select(Expenditure::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_expenditures(
        &mut self,
        pagination: Pagination,
    ) -> PgResult<Vec<Expenditure>> {
        use schema::expenditures::{self, dsl};

        expenditures::table
            .order(dsl::spent_on.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Expenditure::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_expenditure(
        &mut self,
        expenditure_id: Uuid,
        updates: UpdateExpenditure,
    ) -> PgResult<Expenditure> {
        use schema::expenditures::{self, dsl};

        diesel::update(expenditures::table.filter(dsl::id.eq(expenditure_id)))
            .set(&updates)
            .returning(Expenditure::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_expenditure(&mut self, expenditure_id: Uuid) -> PgResult<bool> {
        use schema::expenditures::{self, dsl};

        let deleted = diesel::delete(expenditures::table.filter(dsl::id.eq(expenditure_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
