//! Business rule validation for ledger entries.
//!
//! The same rules guard both create and update: the type must be income or
//! expense, and a supplied date must parse as `YYYY-MM-DD`.

use chrono::{DateTime, Local, Utc};

use super::entry::{Entry, EntryType, NewEntry};
use super::error::LedgerError;
use super::types::{EntryDraft, EntryPatch};
use crate::period::{DAY_FORMAT, DateResolver};

/// Validates a draft into an entry ready for insertion.
///
/// # Errors
///
/// Returns an error if the type is not income or expense, or if a non-empty
/// date does not parse.
pub fn validate_draft(draft: EntryDraft, now: DateTime<Local>) -> Result<NewEntry, LedgerError> {
    let entry_type: EntryType = draft.entry_type.parse()?;
    let (date_string, parsed_date) = resolve_entry_date(draft.date_string.as_deref(), now)?;

    Ok(NewEntry {
        name: draft.name,
        purpose: draft.purpose,
        category: draft.category,
        amount: draft.amount,
        entry_type,
        date_string,
        parsed_date,
    })
}

/// Overlays `patch` onto a stored entry.
///
/// `id`, `created_at` and `updated_at` are left to the store.
///
/// # Errors
///
/// Same rules as [`validate_draft`], applied to the fields the patch carries.
pub fn apply_patch(mut entry: Entry, patch: EntryPatch) -> Result<Entry, LedgerError> {
    if let Some(raw) = patch.entry_type {
        entry.entry_type = raw.parse()?;
    }
    if let Some(raw) = patch.date_string.filter(|s| !s.is_empty()) {
        let day = DateResolver::parse_day(&raw)?;
        entry.parsed_date = DateResolver::local_midnight(day);
        entry.date_string = raw;
    }
    if let Some(name) = patch.name {
        entry.name = name;
    }
    if let Some(purpose) = patch.purpose {
        entry.purpose = purpose;
    }
    if let Some(category) = patch.category {
        entry.category = category;
    }
    if let Some(amount) = patch.amount {
        entry.amount = amount;
    }

    Ok(entry)
}

/// Display string and canonical instant of an entry date.
///
/// A missing or empty input falls back to `now`, echoed as its local day.
///
/// # Errors
///
/// Returns an error if a non-empty input is not `YYYY-MM-DD`.
pub fn resolve_entry_date(
    date_string: Option<&str>,
    now: DateTime<Local>,
) -> Result<(String, DateTime<Utc>), LedgerError> {
    match date_string.filter(|s| !s.is_empty()) {
        Some(raw) => {
            let day = DateResolver::parse_day(raw)?;
            Ok((raw.to_string(), DateResolver::local_midnight(day)))
        }
        None => Ok((
            now.date_naive().format(DAY_FORMAT).to_string(),
            now.with_timezone(&Utc),
        )),
    }
}

/// Parses the optional type predicate of a filter request.
///
/// # Errors
///
/// Returns an error for a non-empty value that is not income or expense.
pub fn parse_type_filter(raw: Option<&str>) -> Result<Option<EntryType>, LedgerError> {
    raw.filter(|s| !s.is_empty()).map(str::parse).transpose()
}
