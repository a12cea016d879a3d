//! Production record repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use super::Pagination;
use crate::model::{NewProductionRecord, ProductionRecord, UpdateProductionRecord};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for production record database operations.
pub trait ProductionRecordRepository {
    /// Creates a new production record.
    fn create_production_record(
        &mut self,
        new_record: NewProductionRecord,
    ) -> impl Future<Output = PgResult<ProductionRecord>> + Send;

    /// Finds a production record by its unique identifier.
    fn find_production_record_by_id(
        &mut self,
        record_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<ProductionRecord>>> + Send;

    /// Lists production records ordered by record date, most recent first.
    fn list_production_records(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<ProductionRecord>>> + Send;

    /// Lists production records for one cohort, most recent first.
    fn list_production_records_by_cohort(
        &mut self,
        cohort_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<ProductionRecord>>> + Send;

    /// Updates a production record.
    fn update_production_record(
        &mut self,
        record_id: Uuid,
        updates: UpdateProductionRecord,
    ) -> impl Future<Output = PgResult<ProductionRecord>> + Send;

    /// Deletes a production record. Returns `false` if no row matched.
    fn delete_production_record(
        &mut self,
        record_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl ProductionRecordRepository for PgConnection {
    async fn create_production_record(
        &mut self,
        new_record: NewProductionRecord,
    ) -> PgResult<ProductionRecord> {
        use schema::production_records;

        diesel::insert_into(production_records::table)
            .values(&new_record)
            .returning(ProductionRecord::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_production_record_by_id(
        &mut self,
        record_id: Uuid,
    ) -> PgResult<Option<ProductionRecord>> {
        use schema::production_records::{self, dsl};

        production_records::table
            .filter(dsl::id.eq(record_id))
            .select(ProductionRecord::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_production_records(
        &mut self,
        pagination: Pagination,
    ) -> PgResult<Vec<ProductionRecord>> {
        use schema::production_records::{self, dsl};

        production_records::table
            .order(dsl::recorded_on.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(ProductionRecord::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_production_records_by_cohort(
        &mut self,
        cohort_id: Uuid,
        pagination: Pagination,
    ) -> PgResult<Vec<ProductionRecord>> {
        use schema::production_records::{self, dsl};

        production_records::table
            .filter(dsl::cohort_id.eq(cohort_id))
            .order(dsl::recorded_on.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(ProductionRecord::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_production_record(
        &mut self,
        record_id: Uuid,
        updates: UpdateProductionRecord,
    ) -> PgResult<ProductionRecord> {
        use schema::production_records::{self, dsl};

        diesel::update(production_records::table.filter(dsl::id.eq(record_id)))
            .set((
                &updates,
                dsl::updated_at.eq(jiff_diesel::Timestamp::from(Timestamp::now())),
            ))
            .returning(ProductionRecord::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_production_record(&mut self, record_id: Uuid) -> PgResult<bool> {
        use schema::production_records::{self, dsl};

        let deleted =
            diesel::delete(production_records::table.filter(dsl::id.eq(record_id)))
                .execute(self)
                .await
                .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
