//! Parse result and statistics structures for the delimited text scanner

/// Scanning result: raw field rows plus basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Field rows, in source order
    pub rows: Vec<Vec<String>>,

    /// Basic scanning statistics
    pub stats: ParseStats,
}

/// Simple scanning statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of text lines scanned
    pub lines_seen: usize,

    /// Number of rows emitted as usable field rows
    pub rows_emitted: usize,

    /// Number of lines discarded as blank or noise (one field or fewer)
    pub rows_discarded: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}
