//! Data models for roster processing
//!
//! This module contains the core data structures for representing player
//! records and cohort datasets. Players carry named fields mapped from the
//! positional source columns; the column order lives in one place
//! ([`crate::constants::columns`]) instead of being scattered as indices.

use crate::constants::{self, PLACEHOLDER, PLAYER_MIN_FIELDS, columns};
use crate::{Result, RosterError};
use serde::{Deserialize, Serialize};

// =============================================================================
// Player Record Structure
// =============================================================================

/// One athlete's data row, mapped onto named fields.
///
/// All fields are kept as raw strings from the source; empty values render
/// as the "-" placeholder through the display accessors. The sort key is
/// used only for dataset ordering and is never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Given name(s)
    pub given_name: String,

    /// Family name
    pub family_name: String,

    /// Comma-joined list of position codes (e.g. "ST,CM")
    pub positions: String,

    /// Birth year as it appears in the source (kept as a string; filters
    /// compare it literally)
    pub birth_year: String,

    /// Current club, the "Unattached" marker, or blank
    pub club: String,

    /// Country of residence or heritage
    pub country: String,

    /// National-team federation code ("BAN", another code, or blank)
    pub national_team: String,

    /// Last-updated date in one of the accepted source formats
    pub last_updated: String,

    /// Ordering key, always the last source field; never displayed
    pub sort_key: String,
}

impl Player {
    /// Map a raw field row onto a player record.
    ///
    /// Fails with [`RosterError::SchemaMismatch`] when the row is shorter
    /// than the schema requires, rather than yielding placeholders deep in
    /// downstream logic.
    pub fn from_row(row: &[String]) -> Result<Self> {
        if row.len() < PLAYER_MIN_FIELDS {
            return Err(RosterError::SchemaMismatch {
                expected: PLAYER_MIN_FIELDS,
                found: row.len(),
            });
        }

        Ok(Self {
            given_name: row[columns::GIVEN_NAME].clone(),
            family_name: row[columns::FAMILY_NAME].clone(),
            positions: row[columns::POSITIONS].clone(),
            birth_year: row[columns::BIRTH_YEAR].clone(),
            club: row[columns::CLUB].clone(),
            country: row[columns::COUNTRY].clone(),
            national_team: row[columns::NATIONAL_TEAM].clone(),
            last_updated: row[columns::LAST_UPDATED].clone(),
            // The sort key is the last field, whatever the row's width.
            sort_key: row[row.len() - 1].clone(),
        })
    }

    /// Full display name, "given family"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// Position field split into trimmed tokens, sentinels and blanks removed
    pub fn position_tokens(&self) -> Vec<&str> {
        self.positions
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty() && !constants::is_sentinel(token))
            .collect()
    }

    /// Render a field value, substituting the placeholder for blanks
    pub fn display_field(value: &str) -> &str {
        if value.is_empty() { PLACEHOLDER } else { value }
    }
}

// =============================================================================
// Dataset Structure
// =============================================================================

/// One cohort's ordered collection of player records.
///
/// Created once per load and replaced wholesale on reload; never mutated
/// in place. Order is ascending by sort key, established at load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Cohort name this dataset was loaded for (e.g. "men")
    pub cohort: String,

    /// Player records in sort-key order
    pub players: Vec<Player>,
}

impl Dataset {
    /// Create a dataset from already-ordered players
    pub fn new(cohort: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            cohort: cohort.into(),
            players,
        }
    }

    /// Create an empty dataset, the graceful-degradation substitute when a
    /// source is unavailable
    pub fn empty(cohort: impl Into<String>) -> Self {
        Self::new(cohort, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
