//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Transport-neutral: the HTTP layer maps each variant onto a status code and
/// a `{message}` body, binaries report them as fatal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input: bad JSON, invalid type, unparseable date, missing parameter.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found (or logically deleted).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Underlying store failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The store could not be opened or migrated at boot.
    #[error("Startup error: {0}")]
    Startup(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Storage(_) | Self::Startup(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for logs and diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Startup(_) => "STARTUP_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for failures on the server side.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// The message that is safe to show to a client.
    ///
    /// Server-side variants never echo their detail string, which may carry
    /// engine-specific text.
    #[must_use]
    pub fn public_message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::Storage(_) | Self::Startup(_) | Self::Internal(_) => {
                "Terjadi kesalahan pada server"
            }
        }
    }
}
