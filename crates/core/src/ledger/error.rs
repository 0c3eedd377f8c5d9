//! Ledger error types for validation, lookup and storage failures.

use dompet_shared::AppError;
use thiserror::Error;

use super::entry::EntryId;
use crate::period::PeriodError;

/// Errors that can occur during ledger operations.
///
/// Display text of the client-facing variants is the message returned by the
/// API.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Entry type is neither income nor expense.
    #[error("Tipe harus 'pemasukan' atau 'pengeluaran'")]
    InvalidType(String),

    /// A date, month or year input did not match its format.
    #[error(transparent)]
    Period(#[from] PeriodError),

    /// Filter request without `start` or `end`.
    #[error("start dan end date harus diisi (format: YYYY-MM-DD)")]
    MissingDateRange,

    // ========== Lookup Errors ==========
    /// No live entry with this id.
    #[error("Data tidak ditemukan")]
    NotFound(EntryId),

    // ========== Storage Errors ==========
    /// Underlying store failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidType(_) => "INVALID_TYPE",
            Self::Period(e) => e.error_code(),
            Self::MissingDateRange => "MISSING_DATE_RANGE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidType(_) | Self::Period(_) | Self::MissingDateRange => 400,
            Self::NotFound(_) => 404,
            Self::Storage(_) => 500,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidType(_) | LedgerError::Period(_) | LedgerError::MissingDateRange => {
                Self::BadRequest(err.to_string())
            }
            LedgerError::NotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::Storage(detail) => Self::Storage(detail),
        }
    }
}
