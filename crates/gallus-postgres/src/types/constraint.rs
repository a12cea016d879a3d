//! Structured handling of named database constraint violations.
//!
//! Postgres reports the violated constraint by name; this module maps the
//! names declared in the migrations to a closed enum so callers can branch
//! on the violation kind instead of parsing error strings.

use std::fmt;

/// A known database constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintViolation {
    /// `accounts.email_address` unique index: the identifier is already registered.
    AccountEmailTaken,
    /// `accounts.display_name` must be non-empty.
    AccountDisplayNameEmpty,
    /// `accounts.password_hash` must be non-empty.
    AccountPasswordHashEmpty,
    /// `categories.name` unique index.
    CategoryNameTaken,
    /// `cohorts.name` must be non-empty.
    CohortNameEmpty,
    /// `suppliers.name` must be non-empty.
    SupplierNameEmpty,
    /// `production_records.egg_count` must be non-negative.
    EggCountNegative,
    /// `feed_purchases.bags` must be positive.
    BagsNotPositive,
    /// `invoices.egg_quantity` must be non-negative.
    EggQuantityNegative,
    /// A `cohort_id` reference points at a missing cohort.
    UnknownCohort,
    /// A `supplier_id` reference points at a missing supplier.
    UnknownSupplier,
    /// A `category_id` reference points at a missing category.
    UnknownCategory,
    /// An `invoice_id` reference points at a missing invoice.
    UnknownInvoice,
}

impl ConstraintViolation {
    /// Maps a Postgres constraint name to a structured violation.
    ///
    /// Returns `None` for constraint names this crate does not declare.
    pub fn new(constraint_name: &str) -> Option<Self> {
        match constraint_name {
            "accounts_email_address_key" => Some(Self::AccountEmailTaken),
            "accounts_display_name_not_empty" => Some(Self::AccountDisplayNameEmpty),
            "accounts_password_hash_not_empty" => Some(Self::AccountPasswordHashEmpty),
            "categories_name_key" => Some(Self::CategoryNameTaken),
            "cohorts_name_not_empty" => Some(Self::CohortNameEmpty),
            "suppliers_name_not_empty" => Some(Self::SupplierNameEmpty),
            "production_records_egg_count_min" => Some(Self::EggCountNegative),
            "feed_purchases_bags_min" => Some(Self::BagsNotPositive),
            "invoices_egg_quantity_min" => Some(Self::EggQuantityNegative),
            name if name.ends_with("_cohort_id_fkey") => Some(Self::UnknownCohort),
            name if name.ends_with("_supplier_id_fkey") => Some(Self::UnknownSupplier),
            name if name.ends_with("_category_id_fkey") => Some(Self::UnknownCategory),
            name if name.ends_with("_invoice_id_fkey") => Some(Self::UnknownInvoice),
            _ => None,
        }
    }

    /// Returns whether this violation is a uniqueness conflict.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::AccountEmailTaken | Self::CategoryNameTaken)
    }

    /// Returns whether this violation is a dangling foreign-key reference.
    pub fn is_missing_reference(&self) -> bool {
        matches!(
            self,
            Self::UnknownCohort | Self::UnknownSupplier | Self::UnknownCategory | Self::UnknownInvoice
        )
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::AccountEmailTaken => "email address is already registered",
            Self::AccountDisplayNameEmpty => "display name cannot be empty",
            Self::AccountPasswordHashEmpty => "password hash cannot be empty",
            Self::CategoryNameTaken => "category name is already in use",
            Self::CohortNameEmpty => "cohort name cannot be empty",
            Self::SupplierNameEmpty => "supplier name cannot be empty",
            Self::EggCountNegative => "egg count cannot be negative",
            Self::BagsNotPositive => "bag count must be positive",
            Self::EggQuantityNegative => "egg quantity cannot be negative",
            Self::UnknownCohort => "referenced cohort does not exist",
            Self::UnknownSupplier => "referenced supplier does not exist",
            Self::UnknownCategory => "referenced category does not exist",
            Self::UnknownInvoice => "referenced invoice does not exist",
        };
        f.write_str(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_declared_constraints() {
        assert_eq!(
            ConstraintViolation::new("accounts_email_address_key"),
            Some(ConstraintViolation::AccountEmailTaken)
        );
        assert_eq!(
            ConstraintViolation::new("production_records_cohort_id_fkey"),
            Some(ConstraintViolation::UnknownCohort)
        );
        assert_eq!(
            ConstraintViolation::new("payments_invoice_id_fkey"),
            Some(ConstraintViolation::UnknownInvoice)
        );
        assert_eq!(ConstraintViolation::new("something_else"), None);
    }

    #[test]
    fn classifies_violations() {
        assert!(ConstraintViolation::AccountEmailTaken.is_unique_violation());
        assert!(!ConstraintViolation::AccountEmailTaken.is_missing_reference());
        assert!(ConstraintViolation::UnknownCohort.is_missing_reference());
        assert!(!ConstraintViolation::UnknownCohort.is_unique_violation());
    }
}
