//! Dataset loader for cohort roster files
//!
//! Retrieves raw text for a named cohort source, runs the delimited text
//! scanner, strips the header row when present, maps raw rows onto player
//! records, and orders the dataset by its sort key.
//!
//! Retrieval failures surface as [`crate::RosterError::SourceUnavailable`];
//! callers are expected to substitute an empty dataset so the presentation
//! layer always has something renderable.

pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::{from_csv_text, load_cohort, load_from_path};
pub use stats::{LoadResult, LoadStats};
