//! Command-line argument definitions for the roster processor
//!
//! This module defines the CLI interface using the clap derive API: one
//! subcommand per pipeline view, shared output-format and verbosity options,
//! and validation helpers mirrored by each command.

use crate::constants::{DEFAULT_COHORTS, HOME_NT_CODE, cohort_names};
use crate::{Result, RosterError};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the roster processor
///
/// Browses and summarises rosters of Bangladeshi-heritage football players
/// kept as delimited text files, one file per cohort.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster-processor",
    version,
    about = "Browse and summarise football player rosters from delimited text files",
    long_about = "Loads cohort roster files (men's and women's divisions), answers \
                  name/position/birth-year/country filter queries with fixed-size \
                  pagination, and aggregates per-cohort statistics: position \
                  categories, club status, national-team callups, and geographic \
                  spread."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the roster processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Browse one page of a cohort roster, optionally filtered
    Browse(BrowseArgs),
    /// List the filter vocabulary (positions, birth years, countries) of a cohort
    Filters(FiltersArgs),
    /// Aggregate summary statistics across cohorts
    Stats(StatsArgs),
}

/// Arguments for the browse command
#[derive(Debug, Clone, Parser)]
pub struct BrowseArgs {
    /// Directory containing the cohort roster files
    ///
    /// Defaults to ./data when present, otherwise the per-user data
    /// directory.
    #[arg(short = 'i', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Cohort to browse
    #[arg(short = 'c', long = "cohort", value_name = "NAME", default_value = "men")]
    pub cohort: String,

    /// Keep players whose full name contains this text (case-insensitive)
    #[arg(short = 'n', long = "name", value_name = "TEXT")]
    pub name: Option<String>,

    /// Keep players listing exactly this position code (e.g. GK, CM)
    #[arg(short = 'p', long = "position", value_name = "CODE")]
    pub position: Option<String>,

    /// Keep players born in this year
    #[arg(short = 'b', long = "birth-year", value_name = "YYYY")]
    pub birth_year: Option<String>,

    /// Keep players from this country
    #[arg(long = "country", value_name = "NAME")]
    pub country: Option<String>,

    /// Page to show (1-based, 15 players per page; out-of-range pages clamp)
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Output format for results
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the filters command
#[derive(Debug, Clone, Parser)]
pub struct FiltersArgs {
    /// Directory containing the cohort roster files
    #[arg(short = 'i', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Cohort to extract the vocabulary from
    #[arg(short = 'c', long = "cohort", value_name = "NAME", default_value = "men")]
    pub cohort: String,

    /// Output format for results
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Directory containing the cohort roster files
    #[arg(short = 'i', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Cohorts to aggregate (comma-separated list)
    ///
    /// Defaults to all known cohorts. A cohort whose source file is missing
    /// degrades to an empty dataset rather than failing the command.
    #[arg(short = 'c', long = "cohorts", value_name = "LIST")]
    pub cohorts: Option<CohortList>,

    /// Federation code counted as the home national team
    #[arg(long = "home-nt", value_name = "CODE", default_value = HOME_NT_CODE)]
    pub home_nt_code: String,

    /// Skip the club-status breakdown
    #[arg(long = "no-club-status")]
    pub no_club_status: bool,

    /// Skip the national-team callup breakdown
    #[arg(long = "no-nt-callups")]
    pub no_nt_callups: bool,

    /// Output format for results
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Wrapper for parsing comma-separated cohort lists
#[derive(Debug, Clone)]
pub struct CohortList {
    pub cohorts: Vec<String>,
}

impl FromStr for CohortList {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let cohorts: Vec<String> = s
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect();

        if cohorts.is_empty() {
            return Err(RosterError::configuration("Cohort list cannot be empty"));
        }

        for cohort in &cohorts {
            if !cohort_names().contains(&cohort.as_str()) {
                return Err(RosterError::unknown_cohort(cohort.clone()));
            }
        }

        Ok(CohortList { cohorts })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl BrowseArgs {
    /// Validate the browse arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_cohort(&self.cohort)?;
        validate_data_dir(self.data_dir.as_deref())?;

        if self.page == 0 {
            return Err(RosterError::configuration("Page numbers start at 1"));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl FiltersArgs {
    /// Validate the filters arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_cohort(&self.cohort)?;
        validate_data_dir(self.data_dir.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

impl StatsArgs {
    /// Validate the stats arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(self.data_dir.as_deref())?;

        if self.home_nt_code.trim().is_empty() {
            return Err(RosterError::configuration(
                "Home national-team code cannot be empty",
            ));
        }

        Ok(())
    }

    /// Get the list of cohorts to aggregate
    pub fn get_cohorts(&self) -> Vec<String> {
        match &self.cohorts {
            Some(list) => list.cohorts.clone(),
            None => DEFAULT_COHORTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn validate_cohort(cohort: &str) -> Result<()> {
    if cohort_names().contains(&cohort) {
        Ok(())
    } else {
        Err(RosterError::unknown_cohort(cohort))
    }
}

fn validate_data_dir(data_dir: Option<&std::path::Path>) -> Result<()> {
    if let Some(path) = data_dir {
        if !path.exists() {
            return Err(RosterError::configuration(format!(
                "Data directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(RosterError::configuration(format!(
                "Data path is not a directory: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
