//! Income/expense ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Ledger entries and their income/expense type
//! - Draft and patch validation
//! - The store seam implemented by the database layer
//! - Summaries (totals and balance)
//! - The ledger service orchestrating all of the above

pub mod entry;
pub mod error;
pub mod service;
pub mod store;
pub mod summary;
pub mod types;
pub mod validation;

#[cfg(test)]
mod summary_props;

pub use entry::{Entry, EntryId, EntryType, NewEntry};
pub use error::LedgerError;
pub use service::LedgerService;
pub use store::LedgerStore;
pub use summary::{PeriodSummary, Summary};
pub use types::{
    DateField, EntryDraft, EntryPatch, FilterQuery, RangeQuery, SortDirection, SortField,
    SortOrder, SumQuery,
};
