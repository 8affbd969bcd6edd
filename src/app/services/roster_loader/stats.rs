//! Load result and statistics structures for the dataset loader

use crate::app::models::Dataset;

/// Loading result: the ordered dataset plus loading statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The loaded, sort-key-ordered dataset
    pub dataset: Dataset,

    /// Loading statistics
    pub stats: LoadStats,
}

/// Statistics collected while mapping raw rows onto player records
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Rows emitted by the scanner (after noise-line discard)
    pub rows_scanned: usize,

    /// Whether a header row was detected and stripped
    pub header_stripped: bool,

    /// Player records successfully mapped
    pub players_loaded: usize,

    /// Rows skipped because they did not satisfy the schema
    pub rows_skipped: usize,

    /// Per-row mapping errors, for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}
