//! Error handling for roster processing operations.
//!
//! Provides the error taxonomy for the pipeline: unavailable sources,
//! schema violations at row-mapping time, and out-of-range page requests.
//! The record parser itself is permissive by design and never raises.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source unavailable: {source_id} ({reason})")]
    SourceUnavailable { source_id: String, reason: String },

    #[error("Schema mismatch: expected at least {expected} fields, found {found}")]
    SchemaMismatch { expected: usize, found: usize },

    #[error("Page {page} out of range: only {total_pages} page(s) available")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("Unknown cohort '{cohort}'. Available cohorts: {available}")]
    UnknownCohort { cohort: String, available: String },

    #[error("Data directory not found: {path}")]
    DataDirNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialisation error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    /// Create a source-unavailable error with context
    pub fn source_unavailable(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown-cohort error listing the valid names
    pub fn unknown_cohort(cohort: impl Into<String>) -> Self {
        Self::UnknownCohort {
            cohort: cohort.into(),
            available: crate::constants::cohort_names().join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
