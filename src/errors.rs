//! Unified application error type.
//! All modules (ledger, journal, notify, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use crate::notify::NotifyError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ledger storage
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error in {}: {reason}", path.display())]
    Storage { path: PathBuf, reason: String },

    // ---------------------------
    // Journal (SQLite)
    // ---------------------------
    #[error("Journal error: {0}")]
    Journal(#[from] rusqlite::Error),

    // ---------------------------
    // Notification
    // ---------------------------
    #[error("Notification failed: {0}")]
    Notify(#[from] NotifyError),

    #[error("Missing credential: {0}")]
    Credential(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Shorthand for a `Storage` error bound to a ledger path.
    pub fn storage(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AppError::Storage {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
