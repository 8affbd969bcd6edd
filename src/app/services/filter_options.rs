//! Filter vocabulary extraction
//!
//! Scans a dataset once to produce the distinct values usable as filter
//! choices: position codes, birth years, and countries. Sentinel values
//! meaning "unknown" are excluded from positions and years; countries are
//! collected unconditionally (callers filter blanks at render time).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::app::models::Dataset;
use crate::constants;

/// Distinct admissible filter values derived from one dataset.
///
/// Recomputed whenever the dataset is reloaded; holds no identity of its
/// own. Positions and countries are sorted lexicographically, birth years
/// descending numerically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterVocabulary {
    pub positions: Vec<String>,
    pub birth_years: Vec<String>,
    pub countries: Vec<String>,
}

/// Extract the filter vocabulary from a dataset in a single pass
pub fn extract_vocabulary(dataset: &Dataset) -> FilterVocabulary {
    let mut positions = BTreeSet::new();
    let mut years = BTreeSet::new();
    let mut countries = BTreeSet::new();

    for player in &dataset.players {
        for token in player.position_tokens() {
            positions.insert(token.to_string());
        }

        if !player.birth_year.is_empty() && !constants::is_sentinel(&player.birth_year) {
            years.insert(player.birth_year.clone());
        }

        countries.insert(player.country.clone());
    }

    let mut birth_years: Vec<String> = years.into_iter().collect();
    birth_years.sort_by_key(|year| std::cmp::Reverse(year.parse::<i32>().unwrap_or(i32::MIN)));

    FilterVocabulary {
        positions: positions.into_iter().collect(),
        birth_years,
        countries: countries.into_iter().collect(),
    }
}
