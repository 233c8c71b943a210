//! Unified application error type.
//! All modules (db, store, core, cli, utils) return AppError to keep the error
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

    #[error("Corrupted record in '{store}': {message}")]
    CorruptRecord { store: &'static str, message: String },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid weekday: {0} (expected mon, tue, wed, thu or fri)")]
    InvalidWeekday(String),

    #[error("Invalid week identifier: {0}")]
    InvalidWeekId(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No recorded day for date {0}")]
    NoRecordForDate(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("'{0}' is reserved for the default template")]
    ReservedTemplateName(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    // ---------------------------
    // Transfer errors
    // ---------------------------
    #[error("Import failed: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
