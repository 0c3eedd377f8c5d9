//! Request and query types for ledger operations.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::entry::EntryType;
use crate::period::DateRange;

/// Client-supplied fields of a new entry (POST body).
///
/// Missing strings decode as empty and a missing amount as zero, so that
/// validation reports on the content rather than the shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntryDraft {
    /// Payer or payee label.
    #[serde(rename = "nama")]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "keperluan")]
    pub purpose: String,
    /// Free-form category tag.
    #[serde(rename = "kategori")]
    pub category: String,
    /// Amount, JSON number or numeric string.
    pub amount: Decimal,
    /// `pemasukan` or `pengeluaran`.
    #[serde(rename = "tipe")]
    pub entry_type: String,
    /// `YYYY-MM-DD`; absent or empty means "now".
    #[serde(rename = "tanggal")]
    pub date_string: Option<String>,
}

/// Partial update of an entry (PUT body). Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntryPatch {
    /// Payer or payee label.
    #[serde(rename = "nama")]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(rename = "keperluan")]
    pub purpose: Option<String>,
    /// Free-form category tag.
    #[serde(rename = "kategori")]
    pub category: Option<String>,
    /// Amount.
    pub amount: Option<Decimal>,
    /// `pemasukan` or `pengeluaran`.
    #[serde(rename = "tipe")]
    pub entry_type: Option<String>,
    /// `YYYY-MM-DD`; empty keeps the stored dates.
    #[serde(rename = "tanggal")]
    pub date_string: Option<String>,
}

/// Date-range filter request, still unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// First day, `YYYY-MM-DD`, required.
    pub start: Option<String>,
    /// Last day (inclusive), `YYYY-MM-DD`, required.
    pub end: Option<String>,
    /// Optional `pemasukan` / `pengeluaran` predicate.
    pub entry_type: Option<String>,
}

/// Column an entry list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Display date string.
    DateString,
    /// Canonical instant.
    ParsedDate,
    /// Insertion time.
    CreatedAt,
}

/// Sort direction. Ties on the sort field are broken by id in the same direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Total ordering of an entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// Primary sort column.
    pub field: SortField,
    /// Direction for both the column and the id tie-break.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Descending by `field`.
    #[must_use]
    pub const fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Ascending by `field`.
    #[must_use]
    pub const fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }
}

/// Instant column a range query applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// Canonical entry date.
    ParsedDate,
    /// Insertion time.
    CreatedAt,
}

/// Live entries with `range.start <= field < range.end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery {
    /// Column the range applies to.
    pub field: DateField,
    /// Half-open bounds.
    pub range: DateRange,
    /// Extra predicate on the entry type.
    pub entry_type: Option<EntryType>,
    /// Result ordering.
    pub order: SortOrder,
}

/// Predicate of an amount sum over live entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumQuery {
    /// Only entries of this type.
    pub entry_type: Option<EntryType>,
    /// Only entries whose `parsed_date` lies in this range.
    pub range: Option<DateRange>,
}

impl SumQuery {
    /// Sum of one entry type, optionally within a range.
    #[must_use]
    pub const fn of_type(entry_type: EntryType, range: Option<DateRange>) -> Self {
        Self {
            entry_type: Some(entry_type),
            range,
        }
    }
}
