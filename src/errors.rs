//! Unified application error type.
//! All modules (storage, core, cli, utils) return AppError to keep the error
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
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid pay rate: {0}")]
    InvalidPay(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Job name cannot be empty")]
    EmptyJobName,

    #[error("A job named '{0}' already exists")]
    DuplicateJob(String),

    #[error("End time is before start time; pass --overnight for a shift ending the next day")]
    EndBeforeStart,

    // ---------------------------
    // Clock state conflicts
    // ---------------------------
    #[error("You are already clocked in to {0}")]
    AlreadyClockedIn(String),

    #[error("You are not currently clocked in to {0}")]
    NotClockedIn(String),

    #[error("No shifts recorded for {0}")]
    NoShifts(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No job named '{0}'")]
    UnknownJob(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
