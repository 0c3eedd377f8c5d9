//! Ledger entry model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Store-assigned entry identifier.
pub type EntryId = i64;

/// Direction of a money flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Adds to the balance.
    #[serde(rename = "pemasukan")]
    Income,
    /// Subtracts from the balance.
    #[serde(rename = "pengeluaran")]
    Expense,
}

impl EntryType {
    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "pemasukan",
            Self::Expense => "pengeluaran",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pemasukan" => Ok(Self::Income),
            "pengeluaran" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidType(other.to_string())),
        }
    }
}

/// A persisted ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique, monotonic identifier.
    pub id: EntryId,
    /// Set on insert, never mutated.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
    /// Present once the entry is logically deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Payer or payee label.
    #[serde(rename = "nama")]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "keperluan")]
    pub purpose: String,
    /// Free-form category tag.
    #[serde(rename = "kategori")]
    pub category: String,
    /// Non-negative by convention; the sign comes from `entry_type`.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "tipe")]
    pub entry_type: EntryType,
    /// Display date as supplied (`YYYY-MM-DD`).
    #[serde(rename = "tanggal")]
    pub date_string: String,
    /// Canonical instant used by range queries and aggregation.
    pub parsed_date: DateTime<Utc>,
}

/// A validated entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    /// Payer or payee label.
    pub name: String,
    /// Free-form description.
    pub purpose: String,
    /// Free-form category tag.
    pub category: String,
    /// Amount.
    pub amount: Decimal,
    /// Income or expense.
    pub entry_type: EntryType,
    /// Display date (`YYYY-MM-DD`).
    pub date_string: String,
    /// Canonical instant.
    pub parsed_date: DateTime<Utc>,
}
