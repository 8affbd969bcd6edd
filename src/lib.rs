//! Roster Processor Library
//!
//! A Rust library for loading, querying, and summarising rosters of
//! Bangladeshi-heritage football players kept in delimited text files.
//!
//! This library provides tools for:
//! - Parsing quote-aware delimited text into raw field rows
//! - Loading cohort datasets with header stripping and sort-key ordering
//! - Extracting filter vocabularies (positions, birth years, countries)
//! - Answering conjunctive filter queries with fixed-size pagination
//! - Aggregating per-cohort statistics (position categories, club status,
//!   national-team callups, geographic spread, latest update date)

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_parser;
        pub mod filter_options;
        pub mod query_engine;
        pub mod roster_loader;
        pub mod stats_aggregator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Dataset, Player};
pub use config::Config;
pub use error::{Result, RosterError};
