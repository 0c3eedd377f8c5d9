//! Persistence seam for ledger entries.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::entry::{Entry, EntryId, NewEntry};
use super::error::LedgerError;
use super::types::{RangeQuery, SortOrder, SumQuery};

/// Storage of ledger entries.
///
/// Implementations hide logically deleted entries from every method, assign
/// monotonic ids, and keep `created_at` immutable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Persists a new entry, assigning `id`, `created_at` and `updated_at`.
    async fn insert(&self, entry: NewEntry) -> Result<Entry, LedgerError>;

    /// Loads a live entry.
    async fn find_by_id(&self, id: EntryId) -> Result<Entry, LedgerError>;

    /// Every live entry in the given total order.
    async fn list_all(&self, order: SortOrder) -> Result<Vec<Entry>, LedgerError>;

    /// Live entries inside a half-open range, optionally of one type.
    async fn range(&self, query: RangeQuery) -> Result<Vec<Entry>, LedgerError>;

    /// Σ amount over matching live entries; zero for an empty set.
    async fn sum_amount(&self, query: SumQuery) -> Result<Decimal, LedgerError>;

    /// Persists every field of a live entry and refreshes `updated_at`.
    async fn update(&self, entry: Entry) -> Result<Entry, LedgerError>;

    /// Logically deletes a live entry.
    async fn delete(&self, id: EntryId) -> Result<(), LedgerError>;
}
