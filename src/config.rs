//! Configuration management for the roster processor.
//!
//! Holds the resolvable settings the CLI builds its pipeline calls from:
//! where the roster files live, which federation counts as the home
//! national team, and which optional aggregation extensions are computed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::services::stats_aggregator::AggregateOptions;
use crate::constants::HOME_NT_CODE;
use crate::{Result, RosterError};

/// Runtime configuration for roster processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the cohort source files
    pub data_dir: PathBuf,

    /// Federation code treated as the home national team in statistics
    pub home_nt_code: String,

    /// Compute the club-status partition when aggregating
    pub include_club_status: bool,

    /// Compute the national-team callup partition when aggregating
    pub include_nt_callups: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            home_nt_code: HOME_NT_CODE.to_string(),
            include_club_status: true,
            include_nt_callups: true,
        }
    }
}

impl Config {
    /// Build a configuration, overriding the data directory when the caller
    /// supplied one explicitly
    pub fn with_data_dir(data_dir: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        debug!("Using data directory: {}", config.data_dir.display());
        config
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            return Err(RosterError::DataDirNotFound {
                path: self.data_dir.clone(),
            });
        }

        if self.home_nt_code.trim().is_empty() {
            return Err(RosterError::configuration(
                "Home national-team code cannot be empty",
            ));
        }

        Ok(())
    }

    /// Aggregation options derived from this configuration
    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            home_nt_code: self.home_nt_code.clone(),
            include_club_status: self.include_club_status,
            include_nt_callups: self.include_nt_callups,
        }
    }
}

/// Default data directory: `./data` when present (the layout the roster
/// site repository uses), otherwise the per-user data directory.
pub fn default_data_dir() -> PathBuf {
    let local = Path::new("data");
    if local.is_dir() {
        return local.to_path_buf();
    }

    dirs::data_dir()
        .map(|dir| dir.join("roster_processor"))
        .unwrap_or_else(|| local.to_path_buf())
}
