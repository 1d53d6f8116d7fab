//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Log text errors
    // ---------------------------
    /// A date header could not be read under the active dialect.
    #[error("Invalid date header in {source_name}: {message}")]
    Format {
        source_name: String,
        message: String,
    },

    /// A recognised event line carries a malformed payload.
    #[error("Invalid event line '{line}': {message}")]
    Parse { line: String, message: String },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid dialect '{0}': expected 'monthly' or 'daily'")]
    InvalidDialect(String),

    #[error("Birth date is not configured (set birth_date, BABY_BIRTH_DATE or --birth-date)")]
    MissingBirthDate,

    #[error("Invalid birth date '{0}': expected YYYY-MM-DD")]
    InvalidBirthDate(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn format(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Format {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn parse(line: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Parse {
            line: line.into(),
            message: message.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
