//! Database query repositories for all entities in the system.
//!
//! This module contains repository implementations that provide high-level
//! database operations for all entities, encapsulating common patterns
//! and providing type-safe interfaces.
//!
//! # Pagination
//!
//! All queries that may return large result sets use the [`Pagination`] struct
//! to provide consistent, bounded pagination across the system.

pub mod account;
pub mod category;
pub mod cohort;
pub mod expenditure;
pub mod feed_consumption;
pub mod feed_purchase;
pub mod invoice;
pub mod payment;
pub mod production_record;
pub mod supplier;

pub use account::AccountRepository;
pub use category::CategoryRepository;
pub use cohort::CohortRepository;
pub use expenditure::ExpenditureRepository;
pub use feed_consumption::FeedConsumptionRepository;
pub use feed_purchase::FeedPurchaseRepository;
pub use invoice::InvoiceRepository;
pub use payment::PaymentRepository;
pub use production_record::ProductionRecordRepository;
use serde::{Deserialize, Serialize};
pub use supplier::SupplierRepository;

/// Pagination parameters for database queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl Pagination {
    /// Creates a new pagination instance.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            // Ensure limit is between 1 and 1000
            limit: limit.clamp(1, 1000),
            // Ensure offset is non-negative
            offset: offset.max(0),
        }
    }

    /// Creates pagination from page number and page size.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, 1000);
        Self::new(page_size, (page - 1) * page_size)
    }

    /// Gets the current page number (1-based).
    pub fn page_number(&self) -> i64 {
        (self.offset / self.limit) + 1
    }

    /// Gets the page size.
    pub fn page_size(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(50, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_limit_and_offset() {
        let pagination = Pagination::new(5000, -10);
        assert_eq!(pagination.limit, 1000);
        assert_eq!(pagination.offset, 0);

        let pagination = Pagination::new(0, 20);
        assert_eq!(pagination.limit, 1);
        assert_eq!(pagination.offset, 20);
    }

    #[test]
    fn from_page() {
        let pagination = Pagination::from_page(3, 25);
        assert_eq!(pagination.limit, 25);
        assert_eq!(pagination.offset, 50);
        assert_eq!(pagination.page_number(), 3);
        assert_eq!(pagination.page_size(), 25);
    }
}
