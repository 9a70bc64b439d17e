//! Unified application error type.
//! Storage, config, export and CLI code return AppError to keep the error
//! handling consistent. The time-accounting engine never fails: it works on
//! whatever entries it is given.

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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid stored timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Entry mutation errors
    // ---------------------------
    #[error("Already clocked in since {0}")]
    AlreadyClockedIn(String),

    #[error("Not clocked in")]
    NotClockedIn,

    #[error("Clock-out ({clock_out}) must be after clock-in ({clock_in})")]
    ClockOutBeforeClockIn { clock_in: String, clock_out: String },

    #[error("No entry matches id '{0}'")]
    EntryNotFound(String),

    #[error("Id '{0}' matches more than one entry, use a longer prefix")]
    AmbiguousEntryId(String),

    #[error("Entry {0} is still open and cannot be edited")]
    OpenEntryNotEditable(String),

    #[error("Nothing to do: {0}")]
    NothingToDo(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / alert errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clock-out alert check failed: {0}")]
    Alert(String),
}

pub type AppResult<T> = Result<T, AppError>;
