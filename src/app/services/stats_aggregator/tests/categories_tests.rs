//! Tests for position token categorisation

use crate::app::services::stats_aggregator::{PositionCategory, categorize};

#[test]
fn test_exact_codes_map_to_their_category() {
    assert_eq!(categorize("ST"), Some(PositionCategory::Forwards));
    assert_eq!(categorize("CAM"), Some(PositionCategory::Midfielders));
    assert_eq!(categorize("CB"), Some(PositionCategory::Defenders));
    assert_eq!(categorize("LW"), Some(PositionCategory::Wingers));
    assert_eq!(categorize("GK"), Some(PositionCategory::Goalkeepers));
}

#[test]
fn test_lowercase_and_padded_tokens_match() {
    assert_eq!(categorize("gk"), Some(PositionCategory::Goalkeepers));
    assert_eq!(categorize(" st "), Some(PositionCategory::Forwards));
}

#[test]
fn test_containment_keeps_variant_codes() {
    // "CM2" is not an exact code but contains "CM".
    assert_eq!(categorize("CM2"), Some(PositionCategory::Midfielders));
}

#[test]
fn test_first_category_in_table_order_wins() {
    // "STRIKER" contains both "ST" (Forwards) and "RIKER" nothing else;
    // Forwards is checked first and wins.
    assert_eq!(categorize("STRIKER"), Some(PositionCategory::Forwards));
}

#[test]
fn test_unrecognised_tokens_are_uncategorised() {
    assert_eq!(categorize("SWEEPER"), None);
    assert_eq!(categorize(""), None);
}

#[test]
fn test_wingbacks_are_wingers_not_defenders() {
    // "LWB"/"RWB" must not be swallowed by the Defenders codes.
    assert_eq!(categorize("LWB"), Some(PositionCategory::Wingers));
    assert_eq!(categorize("RWB"), Some(PositionCategory::Wingers));
}
