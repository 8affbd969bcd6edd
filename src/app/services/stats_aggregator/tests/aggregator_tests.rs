//! Tests for per-dataset statistics aggregation

use super::{dataset, player};
use crate::app::services::stats_aggregator::{AggregateOptions, aggregate};

#[test]
fn test_multi_category_player_counts_once_per_category() {
    let data = dataset(vec![player("ST,CM", "Club", "USA", "")]);
    let summary = aggregate(&data, &AggregateOptions::default());

    assert_eq!(summary.positions.forwards, 1);
    assert_eq!(summary.positions.midfielders, 1);
    assert_eq!(summary.positions.other, 0);
    assert_eq!(summary.positions.unknown, 0);
}

#[test]
fn test_duplicate_tokens_in_one_category_count_once() {
    // Two tokens, both Forwards: the record still counts once.
    let data = dataset(vec![player("ST,CF", "Club", "USA", "")]);
    let summary = aggregate(&data, &AggregateOptions::default());

    assert_eq!(summary.positions.forwards, 1);
}

#[test]
fn test_unrecognised_tokens_land_in_other() {
    let data = dataset(vec![player("SWEEPER", "Club", "USA", "")]);
    let summary = aggregate(&data, &AggregateOptions::default());

    assert_eq!(summary.positions.other, 1);
    assert_eq!(summary.positions.unknown, 0);
}

#[test]
fn test_no_usable_tokens_land_in_unknown() {
    let data = dataset(vec![
        player("", "Club", "USA", ""),
        player("??", "Club", "USA", ""),
    ]);
    let summary = aggregate(&data, &AggregateOptions::default());

    assert_eq!(summary.positions.unknown, 2);
    assert_eq!(summary.positions.other, 0);
}

#[test]
fn test_club_status_partitions_the_dataset() {
    let data = dataset(vec![
        player("GK", "Dhaka FC", "BAN", ""),
        player("GK", "Unattached", "BAN", ""),
        player("GK", "", "BAN", ""),
        player("GK", "-", "BAN", ""),
    ]);
    let summary = aggregate(&data, &AggregateOptions::default());

    let club = summary.club_status.unwrap();
    assert_eq!(club.with_club, 1);
    assert_eq!(club.without_club, 3);
    assert_eq!(club.with_club + club.without_club, summary.total_players);
}

#[test]
fn test_nt_callups_partition_the_dataset() {
    let data = dataset(vec![
        player("GK", "Club", "BAN", "BAN"),
        player("GK", "Club", "ENG", "ENG"),
        player("GK", "Club", "USA", ""),
        player("GK", "Club", "USA", "-"),
    ]);
    let summary = aggregate(&data, &AggregateOptions::default());

    let nt = summary.nt_callups.unwrap();
    assert_eq!(nt.home, 1);
    assert_eq!(nt.other, 1);
    assert_eq!(nt.none, 2);
    assert_eq!(nt.home + nt.other + nt.none, summary.total_players);
}

#[test]
fn test_home_code_is_configurable() {
    let data = dataset(vec![player("GK", "Club", "ENG", "ENG")]);
    let options = AggregateOptions {
        home_nt_code: "ENG".to_string(),
        ..Default::default()
    };
    let summary = aggregate(&data, &options);

    assert_eq!(summary.nt_callups.unwrap().home, 1);
}

#[test]
fn test_club_and_nt_breakdowns_are_optional() {
    let data = dataset(vec![player("GK", "Club", "USA", "BAN")]);
    let options = AggregateOptions {
        include_club_status: false,
        include_nt_callups: false,
        ..Default::default()
    };
    let summary = aggregate(&data, &options);

    assert!(summary.club_status.is_none());
    assert!(summary.nt_callups.is_none());
    // The always-on aggregates are unaffected.
    assert_eq!(summary.total_players, 1);
    assert_eq!(summary.distinct_countries, 1);
}

#[test]
fn test_country_cardinality_ignores_placeholders() {
    let data = dataset(vec![
        player("GK", "Club", "USA", ""),
        player("GK", "Club", "USA", ""),
        player("GK", "Club", "BRA", ""),
        player("GK", "Club", "-", ""),
        player("GK", "Club", "", ""),
    ]);
    let summary = aggregate(&data, &AggregateOptions::default());

    assert_eq!(summary.distinct_countries, 2);
}

#[test]
fn test_cohorts_aggregate_independently() {
    let men = dataset(vec![player("GK", "Club", "USA", "")]);
    let women = crate::app::models::Dataset::new(
        "women",
        vec![player("ST", "Club", "BRA", ""), player("CM", "Club", "FRA", "")],
    );

    let men_summary = aggregate(&men, &AggregateOptions::default());
    let women_summary = aggregate(&women, &AggregateOptions::default());

    assert_eq!(men_summary.total_players, 1);
    assert_eq!(women_summary.total_players, 2);
    assert_eq!(men_summary.positions.goalkeepers, 1);
    assert_eq!(women_summary.positions.goalkeepers, 0);
}

#[test]
fn test_empty_dataset_summary() {
    let data = dataset(Vec::new());
    let summary = aggregate(&data, &AggregateOptions::default());

    assert_eq!(summary.total_players, 0);
    assert_eq!(summary.distinct_countries, 0);
    assert_eq!(summary.positions.unknown, 0);
    assert!(summary.last_updated.is_none());
    assert_eq!(summary.last_updated_label(), "Unknown");
}
