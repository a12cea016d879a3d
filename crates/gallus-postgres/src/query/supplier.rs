//! Supplier repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::Pagination;
use crate::model::{NewSupplier, Supplier, UpdateSupplier};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for supplier database operations.
pub trait SupplierRepository {
    /// Creates a new supplier.
    fn create_supplier(
        &mut self,
        new_supplier: NewSupplier,
    ) -> impl Future<Output = PgResult<Supplier>> + Send;

    /// Finds a supplier by its unique identifier.
    fn find_supplier_by_id(
        &mut self,
        supplier_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Supplier>>> + Send;

    /// Lists suppliers ordered by name.
    fn list_suppliers(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Supplier>>> + Send;

    /// Updates a supplier.
    fn update_supplier(
        &mut self,
        supplier_id: Uuid,
        updates: UpdateSupplier,
    ) -> impl Future<Output = PgResult<Supplier>> + Send;

    /// Deletes a supplier. Returns `false` if no row matched.
    fn delete_supplier(
        &mut self,
        supplier_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl SupplierRepository for PgConnection {
    async fn create_supplier(&mut self, mut new_supplier: NewSupplier) -> PgResult<Supplier> {
        use schema::suppliers;

        new_supplier.name = new_supplier.name.trim().to_owned();

        diesel::insert_into(suppliers::table)
            .values(&new_supplier)
            .returning(Supplier::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_supplier_by_id(&mut self, supplier_id: Uuid) -> PgResult<Option<Supplier>> {
        use schema::suppliers::{self, dsl};

        suppliers::table
            .filter(dsl::id.eq(supplier_id))
            .select(Supplier::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_suppliers(&mut self, pagination: Pagination) -> PgResult<Vec<Supplier>> {
        use schema::suppliers::{self, dsl};

        suppliers::table
            .order(dsl::name.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Supplier::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_supplier(
        &mut self,
        supplier_id: Uuid,
        updates: UpdateSupplier,
    ) -> PgResult<Supplier> {
        use schema::suppliers::{self, dsl};

        diesel::update(suppliers::table.filter(dsl::id.eq(supplier_id)))
            .set(&updates)
            .returning(Supplier::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_supplier(&mut self, supplier_id: Uuid) -> PgResult<bool> {
        use schema::suppliers::{self, dsl};

        let deleted = diesel::delete(suppliers::table.filter(dsl::id.eq(supplier_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
