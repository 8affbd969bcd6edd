//! Loading and ordering of cohort datasets

use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, info, warn};

use super::stats::{LoadResult, LoadStats};
use crate::app::models::{Dataset, Player};
use crate::app::services::csv_parser;
use crate::constants::{FIELD_SEPARATOR, HEADER_LABEL, HEADER_LABEL_FRAGMENT};
use crate::{Result, RosterError};

/// Load the dataset for a named cohort from the data directory.
///
/// The cohort name is resolved to its source filename through the cohort
/// table; unknown names fail before any I/O.
pub async fn load_cohort(data_dir: &Path, cohort: &str) -> Result<LoadResult> {
    let file = crate::constants::cohort_file(cohort)
        .ok_or_else(|| RosterError::unknown_cohort(cohort))?;

    load_from_path(cohort, &data_dir.join(file)).await
}

/// Load a cohort dataset from an explicit file path.
///
/// A missing or unreadable file is a [`RosterError::SourceUnavailable`];
/// the caller decides whether to degrade to an empty dataset.
pub async fn load_from_path(cohort: &str, path: &Path) -> Result<LoadResult> {
    info!("Loading roster source: {}", path.display());

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RosterError::source_unavailable(path.display().to_string(), e.to_string()))?;

    Ok(from_csv_text(cohort, &text))
}

/// Build a cohort dataset from raw delimited text.
///
/// This is the retrieval-free seam: tests and non-file collaborators hand
/// text straight to the pipeline. Never fails; rows that do not satisfy the
/// schema are skipped and recorded in the returned statistics.
pub fn from_csv_text(cohort: &str, text: &str) -> LoadResult {
    let parsed = csv_parser::parse_text(text, FIELD_SEPARATOR);
    let mut stats = LoadStats::new();
    stats.rows_scanned = parsed.stats.rows_emitted;

    let mut rows = parsed.rows.as_slice();
    if let Some(first) = rows.first() {
        if is_header_row(first) {
            stats.header_stripped = true;
            rows = &rows[1..];
            debug!("Header row stripped from cohort '{}'", cohort);
        }
    }

    let mut players = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match Player::from_row(row) {
            Ok(player) => {
                players.push(player);
                stats.players_loaded += 1;
            }
            Err(e) => {
                stats.rows_skipped += 1;
                stats.errors.push(format!("Row {}: {}", index + 1, e));
                warn!("Skipped row {} in cohort '{}': {}", index + 1, cohort, e);
            }
        }
    }

    // Stable sort keeps equal keys in source order, so reloading the same
    // text always yields the same dataset order.
    players.sort_by(|a, b| compare_sort_keys(&a.sort_key, &b.sort_key));

    info!(
        "Loaded {} player(s) for cohort '{}' ({} row(s) skipped)",
        stats.players_loaded, cohort, stats.rows_skipped
    );

    LoadResult {
        dataset: Dataset::new(cohort, players),
        stats,
    }
}

/// Detect the optional header row by its first field
fn is_header_row(row: &[String]) -> bool {
    row.first()
        .map(|first| first == HEADER_LABEL || first.contains(HEADER_LABEL_FRAGMENT))
        .unwrap_or(false)
}

/// Case-insensitive sort-key comparison with byte-order tiebreak
fn compare_sort_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
