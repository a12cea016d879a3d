//! Expenditure category repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::Pagination;
use crate::model::{Category, NewCategory, UpdateCategory};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for expenditure category database operations.
pub trait CategoryRepository {
    /// Creates a new category. Fails with a unique-constraint violation on
    /// duplicate names.
    fn create_category(
        &mut self,
        new_category: NewCategory,
    ) -> impl Future<Output = PgResult<Category>> + Send;

    /// Finds a category by its unique identifier.
    fn find_category_by_id(
        &mut self,
        category_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Category>>> + Send;

    /// Lists categories ordered by name.
    fn list_categories(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Category>>> + Send;

    /// Updates a category.
    fn update_category(
        &mut self,
        category_id: Uuid,
        updates: UpdateCategory,
    ) -> impl Future<Output = PgResult<Category>> + Send;

    /// Deletes a category. Returns `false` if no row matched.
    fn delete_category(
        &mut self,
        category_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl CategoryRepository for PgConnection {
    async fn create_category(&mut self, mut new_category: NewCategory) -> PgResult<Category> {
        use schema::categories;

        new_category.name = new_category.name.trim().to_owned();

        diesel::insert_into(categories::table)
            .values(&new_category)
            .returning(Category::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_category_by_id(&mut self, category_id: Uuid) -> PgResult<Option<Category>> {
        use schema::categories::{self, dsl};

        categories::table
            .filter(dsl::id.eq(category_id))
            .select(Category::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_categories(&mut self, pagination: Pagination) -> PgResult<Vec<Category>> {
        use schema::categories::{self, dsl};

        categories::table
            .order(dsl::name.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Category::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_category(
        &mut self,
        category_id: Uuid,
        updates: UpdateCategory,
    ) -> PgResult<Category> {
        use schema::categories::{self, dsl};

        diesel::update(categories::table.filter(dsl::id.eq(category_id)))
            .set(&updates)
            .returning(Category::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_category(&mut self, category_id: Uuid) -> PgResult<bool> {
        use schema::categories::{self, dsl};

        let deleted = diesel::delete(categories::table.filter(dsl::id.eq(category_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
