//! Position token categorisation
//!
//! Maps raw position tokens onto the five fixed statistics categories.
//! A token belongs to the first category whose code it equals or contains
//! after uppercasing; the contains rule keeps variants like "CM2" in the
//! Midfielders bucket.

use serde::{Deserialize, Serialize};

use crate::constants::position_codes;

/// The five position groupings used in statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionCategory {
    Forwards,
    Midfielders,
    Defenders,
    Wingers,
    Goalkeepers,
}

/// Category code tables, in match-precedence order
const CATEGORY_TABLE: &[(PositionCategory, &[&str])] = &[
    (PositionCategory::Forwards, position_codes::FORWARDS),
    (PositionCategory::Midfielders, position_codes::MIDFIELDERS),
    (PositionCategory::Defenders, position_codes::DEFENDERS),
    (PositionCategory::Wingers, position_codes::WINGERS),
    (PositionCategory::Goalkeepers, position_codes::GOALKEEPERS),
];

/// Categorise a single position token.
///
/// Returns `None` for tokens matching no category; the caller decides
/// whether the record lands in "Other" or "Unknown".
pub fn categorize(token: &str) -> Option<PositionCategory> {
    let upper = token.trim().to_uppercase();
    if upper.is_empty() {
        return None;
    }

    for (category, codes) in CATEGORY_TABLE {
        for code in codes.iter() {
            if upper == *code || upper.contains(code) {
                return Some(*category);
            }
        }
    }

    None
}
