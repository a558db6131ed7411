//! Unified application error type.
//! All modules (core, config, export, cli) return AppError to keep the error
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

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input / ingestion
    // ---------------------------
    #[error("Malformed input: {reason}; {expected}")]
    MalformedInput { reason: String, expected: String },

    #[error("Invalid timestamp '{value}' at line {line}; {expected}")]
    InvalidTimestamp {
        line: u64,
        value: String,
        expected: String,
    },

    // ---------------------------
    // Pipeline
    // ---------------------------
    #[error("No attendance sessions left after filtering ({0})")]
    EmptyResult(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Build a `MalformedInput` error carrying the expected schema description.
    pub fn malformed(reason: impl Into<String>, expected: impl Into<String>) -> Self {
        AppError::MalformedInput {
            reason: reason.into(),
            expected: expected.into(),
        }
    }

    /// `EmptyResult` is a soft outcome: the run worked but nothing was left.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, AppError::EmptyResult(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
