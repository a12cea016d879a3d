//! Database models for all entities in the system.
//!
//! This module contains Diesel model definitions for all database tables,
//! including structs for querying, inserting, and updating records.

mod account;
mod category;
mod cohort;
mod expenditure;
mod feed_consumption;
mod feed_purchase;
mod invoice;
mod payment;
mod production_record;
mod supplier;

// Account models
pub use account::{Account, NewAccount, UpdateAccount};
// Expenditure models
pub use category::{Category, NewCategory, UpdateCategory};
// Cohort models
pub use cohort::{Cohort, NewCohort, UpdateCohort};
pub use expenditure::{Expenditure, NewExpenditure, UpdateExpenditure};
// Feed models
pub use feed_consumption::{FeedConsumption, NewFeedConsumption, UpdateFeedConsumption};
pub use feed_purchase::{FeedPurchase, NewFeedPurchase, UpdateFeedPurchase};
// Sales models
pub use invoice::{Invoice, NewInvoice, UpdateInvoice};
pub use payment::{NewPayment, Payment};
pub use production_record::{NewProductionRecord, ProductionRecord, UpdateProductionRecord};
pub use supplier::{NewSupplier, Supplier, UpdateSupplier};
