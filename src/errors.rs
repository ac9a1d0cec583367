//! Unified application error type.
//! All modules (core, cli, config, export) return AppError to keep the error
//! handling consistent and easy to manage. Form validation has its own
//! `ValidationError`, which is wrapped here when it has to leave the session.

use crate::models::field::Field;
use std::io;
use thiserror::Error;

/// Rejection reasons produced by the validator, one fixed message per rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields(Vec<Field>),

    #[error("Please enter valid positive numbers (quality score must be 0-100)")]
    InvalidValues(Vec<Field>),

    #[error("Downtime cannot exceed hours worked")]
    DowntimeExceedsHours,
}

impl ValidationError {
    /// Fields responsible for the rejection (empty for cross-field rules).
    pub fn fields(&self) -> &[Field] {
        match self {
            ValidationError::MissingFields(f) | ValidationError::InvalidValues(f) => f,
            ValidationError::DowntimeExceedsHours => &[],
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Form input
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown field: {0}")]
    InvalidField(String),

    #[error("Invalid workstation id: {0}")]
    InvalidId(String),

    #[error("Unknown command: {0} (type `help` for the list)")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
