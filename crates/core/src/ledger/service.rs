//! Ledger service: validation and orchestration over a [`LedgerStore`].
//!
//! Every externally visible mutation is issued as a single store call.

use chrono::Local;

use super::entry::{Entry, EntryId, EntryType};
use super::error::LedgerError;
use super::store::LedgerStore;
use super::summary::{PeriodSummary, Summary};
use super::types::{
    DateField, EntryDraft, EntryPatch, FilterQuery, RangeQuery, SortField, SortOrder, SumQuery,
};
use super::validation;
use crate::period::{DateRange, DateResolver, PeriodQuery};

/// Ledger operations behind the HTTP API.
#[derive(Debug, Clone)]
pub struct LedgerService<S> {
    store: S,
}

impl<S: LedgerStore> LedgerService<S> {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and stores a new entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` or `Period` for a bad draft, `Storage` if the
    /// store fails.
    pub async fn create(&self, draft: EntryDraft) -> Result<Entry, LedgerError> {
        let entry = validation::validate_draft(draft, Local::now())?;
        self.store.insert(entry).await
    }

    /// Loads one live entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown or deleted id.
    pub async fn get(&self, id: EntryId) -> Result<Entry, LedgerError> {
        self.store.find_by_id(id).await
    }

    /// Every live entry, newest display date first, ties by id descending.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store fails.
    pub async fn list_all(&self) -> Result<Vec<Entry>, LedgerError> {
        self.store.list_all(SortOrder::desc(SortField::DateString)).await
    }

    /// Entries whose `parsed_date` falls on any day from `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns `MissingDateRange` when either bound is absent, `Period` when
    /// one does not parse, `InvalidType` for an unknown type predicate.
    pub async fn filter(&self, query: FilterQuery) -> Result<Vec<Entry>, LedgerError> {
        let (Some(start), Some(end)) = (
            query.start.as_deref().filter(|s| !s.is_empty()),
            query.end.as_deref().filter(|s| !s.is_empty()),
        ) else {
            return Err(LedgerError::MissingDateRange);
        };

        let start = DateResolver::parse_day(start)?;
        let end = DateResolver::parse_day(end)?;
        let entry_type = validation::parse_type_filter(query.entry_type.as_deref())?;

        self.store
            .range(RangeQuery {
                field: DateField::ParsedDate,
                range: DateResolver::day_range(start, end),
                entry_type,
                order: SortOrder::desc(SortField::ParsedDate),
            })
            .await
    }

    /// Overlays `patch` onto a live entry and persists it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, and the create validation errors
    /// for a bad patch.
    pub async fn update(&self, id: EntryId, patch: EntryPatch) -> Result<Entry, LedgerError> {
        let existing = self.store.find_by_id(id).await?;
        let entry = validation::apply_patch(existing, patch)?;
        self.store.update(entry).await
    }

    /// Deletes a live entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown or already deleted id.
    pub async fn delete(&self, id: EntryId) -> Result<(), LedgerError> {
        self.store.find_by_id(id).await?;
        self.store.delete(id).await
    }

    /// Totals and balance over the whole ledger.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store fails.
    pub async fn resume_overall(&self) -> Result<Summary, LedgerError> {
        self.totals(None).await
    }

    /// Totals and balance within a month, a year, or the current month.
    ///
    /// # Errors
    ///
    /// Returns `Period` when the month or year does not parse.
    pub async fn resume_period(&self, query: &PeriodQuery) -> Result<PeriodSummary, LedgerError> {
        let period = DateResolver::resolve(query)?;
        let summary = self.totals(Some(period.range)).await?;
        Ok(PeriodSummary::new(summary, period))
    }

    async fn totals(&self, range: Option<DateRange>) -> Result<Summary, LedgerError> {
        let income = self
            .store
            .sum_amount(SumQuery::of_type(EntryType::Income, range))
            .await?;
        let expense = self
            .store
            .sum_amount(SumQuery::of_type(EntryType::Expense, range))
            .await?;
        Ok(Summary::new(income, expense))
    }
}
