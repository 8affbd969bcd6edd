//! Shared components for CLI commands
//!
//! Logging setup, graceful dataset loading, data-directory discovery, and
//! the field escaping used by the CSV output format.

use std::path::Path;

use colored::Colorize;
use tracing::{debug, warn};

use crate::app::models::Dataset;
use crate::app::services::roster_loader;
use crate::constants::ROSTER_FILE_PATTERN;
use crate::{Result, RosterError};

/// Set up structured logging at the level derived from verbosity flags
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load a cohort dataset, degrading to an empty dataset when the source is
/// unavailable.
///
/// The notice names the missing source so the user can fix the data
/// directory; every other error still propagates.
pub async fn load_or_empty(data_dir: &Path, cohort: &str) -> Result<Dataset> {
    match roster_loader::load_cohort(data_dir, cohort).await {
        Ok(result) => Ok(result.dataset),
        Err(RosterError::SourceUnavailable { source_id, reason }) => {
            warn!("Source unavailable: {} ({})", source_id, reason);

            let mut notice = format!(
                "Roster source '{}' is unavailable; showing an empty {} roster.",
                source_id, cohort
            );
            let available = discover_roster_files(data_dir);
            if !available.is_empty() {
                notice.push_str(&format!(
                    " Files found in the data directory: {}",
                    available.join(", ")
                ));
            }
            eprintln!("{} {}", "Notice:".yellow().bold(), notice);

            Ok(Dataset::empty(cohort))
        }
        Err(e) => Err(e),
    }
}

/// List roster files present in the data directory, for diagnostics
pub fn discover_roster_files(data_dir: &Path) -> Vec<String> {
    let pattern = data_dir.join(ROSTER_FILE_PATTERN);

    let Ok(paths) = glob::glob(&pattern.to_string_lossy()) else {
        return Vec::new();
    };

    let mut files: Vec<String> = paths
        .filter_map(|entry| entry.ok())
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    files.sort();
    files
}

/// Escape one field for the CSV output format.
///
/// Fields containing the separator or quotes are wrapped in quotes, with
/// embedded quotes doubled.
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
