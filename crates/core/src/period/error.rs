//! Date and period parsing errors.

use thiserror::Error;

/// A user-supplied date, month or year did not match its fixed format.
///
/// The display text is the message shown to API clients; the payload keeps
/// the offending input for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Expected `YYYY-MM-DD`.
    #[error("Format date salah. Gunakan YYYY-MM-DD")]
    InvalidDay(String),

    /// Expected `YYYY-MM`.
    #[error("Format bulan salah. Gunakan YYYY-MM")]
    InvalidMonth(String),

    /// Expected `YYYY`.
    #[error("Format tahun salah. Gunakan YYYY")]
    InvalidYear(String),
}

impl PeriodError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDay(_) => "INVALID_DAY",
            Self::InvalidMonth(_) => "INVALID_MONTH",
            Self::InvalidYear(_) => "INVALID_YEAR",
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidDay(s) | Self::InvalidMonth(s) | Self::InvalidYear(s) => s,
        }
    }
}
