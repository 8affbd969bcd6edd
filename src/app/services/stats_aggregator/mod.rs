//! Statistics aggregation over cohort datasets
//!
//! Computes per-dataset summary counts: position-category breakdowns, club
//! status, national-team callups, geographic spread, and the newest update
//! date. Each dataset is aggregated independently; no state crosses cohorts.
//!
//! - [`categories`] - Position token categorisation tables
//! - [`last_updated`] - Update-date parsing and formatting

pub mod categories;
pub mod last_updated;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use categories::{PositionCategory, categorize};
pub use last_updated::{format_update_date, latest_update, parse_update_date};

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::Dataset;
use crate::constants::{HOME_NT_CODE, UNATTACHED_MARKER, is_blank_or_placeholder};

/// Toggles for the optional aggregation extensions.
///
/// Position categories, country cardinality, and the update date are always
/// computed; club status and national-team callups can be switched off for
/// views that do not display them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateOptions {
    /// Federation code counted as the home national team
    pub home_nt_code: String,

    /// Compute the with-club / without-club partition
    pub include_club_status: bool,

    /// Compute the home / other / none callup partition
    pub include_nt_callups: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            home_nt_code: HOME_NT_CODE.to_string(),
            include_club_status: true,
            include_nt_callups: true,
        }
    }
}

/// Per-category position counts.
///
/// A player with positions spanning two categories is counted once in each,
/// so these counts may sum to more than the dataset size. "Other" and
/// "Unknown" are exclusive of the named categories and of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCounts {
    pub forwards: usize,
    pub midfielders: usize,
    pub defenders: usize,
    pub wingers: usize,
    pub goalkeepers: usize,
    pub other: usize,
    pub unknown: usize,
}

impl PositionCounts {
    fn increment(&mut self, category: PositionCategory) {
        match category {
            PositionCategory::Forwards => self.forwards += 1,
            PositionCategory::Midfielders => self.midfielders += 1,
            PositionCategory::Defenders => self.defenders += 1,
            PositionCategory::Wingers => self.wingers += 1,
            PositionCategory::Goalkeepers => self.goalkeepers += 1,
        }
    }

    /// Labelled counts in report order
    pub fn rows(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Forwards", self.forwards),
            ("Wingers", self.wingers),
            ("Midfielders", self.midfielders),
            ("Defenders", self.defenders),
            ("Goalkeepers", self.goalkeepers),
            ("Other", self.other),
            ("Unknown", self.unknown),
        ]
    }
}

/// With-club / without-club partition; the two counts sum to dataset size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubStatusCounts {
    pub with_club: usize,
    pub without_club: usize,
}

/// National-team callup partition; the three counts sum to dataset size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtCallupCounts {
    pub home: usize,
    pub other: usize,
    pub none: usize,
}

/// Aggregate counts for one cohort dataset
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    /// Cohort the summary was computed for
    pub cohort: String,

    /// Total players in the dataset
    pub total_players: usize,

    /// Count of distinct non-placeholder countries
    pub distinct_countries: usize,

    /// Position-category breakdown
    pub positions: PositionCounts,

    /// Club-status partition, when enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_status: Option<ClubStatusCounts>,

    /// National-team callup partition, when enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nt_callups: Option<NtCallupCounts>,

    /// Newest valid update date found in the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
}

impl StatsSummary {
    /// Long-form update-date label, or the documented fallback
    pub fn last_updated_label(&self) -> String {
        format_update_date(self.last_updated)
    }
}

/// Compute the statistics summary for one dataset
pub fn aggregate(dataset: &Dataset, options: &AggregateOptions) -> StatsSummary {
    let mut positions = PositionCounts::default();
    let mut club_status = options.include_club_status.then(ClubStatusCounts::default);
    let mut nt_callups = options.include_nt_callups.then(NtCallupCounts::default);
    let mut countries = HashSet::new();

    for player in &dataset.players {
        if !is_blank_or_placeholder(&player.country) {
            countries.insert(player.country.as_str());
        }

        if let Some(club_status) = club_status.as_mut() {
            if player.club == UNATTACHED_MARKER || is_blank_or_placeholder(&player.club) {
                club_status.without_club += 1;
            } else {
                club_status.with_club += 1;
            }
        }

        if let Some(nt_callups) = nt_callups.as_mut() {
            if player.national_team == options.home_nt_code {
                nt_callups.home += 1;
            } else if !is_blank_or_placeholder(&player.national_team) {
                nt_callups.other += 1;
            } else {
                nt_callups.none += 1;
            }
        }

        tally_positions(player.position_tokens(), &mut positions);
    }

    let summary = StatsSummary {
        cohort: dataset.cohort.clone(),
        total_players: dataset.len(),
        distinct_countries: countries.len(),
        positions,
        club_status,
        nt_callups,
        last_updated: latest_update(dataset),
    };

    debug!(
        "Aggregated cohort '{}': {} player(s), {} country(ies)",
        summary.cohort, summary.total_players, summary.distinct_countries
    );

    summary
}

/// Count one player's categories, deduplicated per record
fn tally_positions(tokens: Vec<&str>, counts: &mut PositionCounts) {
    if tokens.is_empty() {
        counts.unknown += 1;
        return;
    }

    let matched: HashSet<PositionCategory> =
        tokens.iter().filter_map(|token| categorize(token)).collect();

    if matched.is_empty() {
        counts.other += 1;
        return;
    }

    for category in matched {
        counts.increment(category);
    }
}
