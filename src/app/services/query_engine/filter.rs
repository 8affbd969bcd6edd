//! Conjunctive filtering of player records

use serde::{Deserialize, Serialize};

use crate::app::models::{Dataset, Player};

/// A set of filter constraints, ANDed together.
///
/// An empty name and `None` for the remaining fields mean "no constraint".
/// The name constraint is a case-insensitive substring match over the full
/// "given family" name; position matches any one of the record's
/// comma-split position tokens exactly; birth year and country compare as
/// literal strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: String,
    pub position: Option<String>,
    pub birth_year: Option<String>,
    pub country: Option<String>,
}

impl FilterCriteria {
    /// Check whether a single player satisfies every set constraint
    pub fn matches(&self, player: &Player) -> bool {
        matches_with_needle(player, self, &self.name.trim().to_lowercase())
    }
}

/// Return the players matching the criteria, preserving dataset order.
///
/// Empty criteria return the whole dataset unchanged.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a Player> {
    // Lowercase the needle once, not per record.
    let needle = criteria.name.trim().to_lowercase();

    dataset
        .players
        .iter()
        .filter(|player| matches_with_needle(player, criteria, &needle))
        .collect()
}

fn matches_with_needle(player: &Player, criteria: &FilterCriteria, needle: &str) -> bool {
    if !needle.is_empty() && !player.full_name().to_lowercase().contains(needle) {
        return false;
    }

    if let Some(position) = &criteria.position {
        let tokens: Vec<&str> = player.positions.split(',').map(str::trim).collect();
        if !tokens.contains(&position.as_str()) {
            return false;
        }
    }

    if let Some(birth_year) = &criteria.birth_year {
        if player.birth_year != *birth_year {
            return false;
        }
    }

    if let Some(country) = &criteria.country {
        if player.country != *country {
            return false;
        }
    }

    true
}
