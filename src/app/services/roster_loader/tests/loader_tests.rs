//! Tests for dataset loading, header stripping, and ordering

use std::io::Write;
use tempfile::NamedTempFile;

use super::{player_line, sample_source};
use crate::RosterError;
use crate::app::services::roster_loader::{from_csv_text, load_cohort, load_from_path};
use crate::constants::PLAYER_MIN_FIELDS;

#[test]
fn test_header_row_stripped() {
    let result = from_csv_text("men", &sample_source());

    assert!(result.stats.header_stripped);
    assert_eq!(result.dataset.len(), 2);
    assert!(
        result
            .dataset
            .players
            .iter()
            .all(|p| p.given_name != "Given Names(s)")
    );
}

#[test]
fn test_header_fragment_variant_stripped() {
    let mut source = sample_source();
    source = source.replace("Given Names(s)", "Given Names");
    let result = from_csv_text("men", &source);

    assert!(result.stats.header_stripped);
    assert_eq!(result.dataset.len(), 2);
}

#[test]
fn test_source_without_header_untouched() {
    let source = format!(
        "{}\n",
        player_line(
            "Jamal", "Bhuyan", "CM", "1990", "Abahani", "Denmark", "BAN", "-", "bhuyan jamal",
        )
    );
    let result = from_csv_text("men", &source);

    assert!(!result.stats.header_stripped);
    assert_eq!(result.dataset.len(), 1);
}

#[test]
fn test_dataset_sorted_by_sort_key() {
    let source = format!(
        "{}\n{}\n{}\n",
        player_line("C", "Chowdhury", "GK", "2000", "-", "-", "-", "-", "zeta"),
        player_line("A", "Ahmed", "ST", "2001", "-", "-", "-", "-", "Alpha"),
        player_line("B", "Begum", "CM", "2002", "-", "-", "-", "-", "beta"),
    );
    let result = from_csv_text("women", &source);

    let keys: Vec<&str> = result
        .dataset
        .players
        .iter()
        .map(|p| p.sort_key.as_str())
        .collect();
    // Case-insensitive ordering: "Alpha" sorts before "beta".
    assert_eq!(keys, vec!["Alpha", "beta", "zeta"]);
}

#[test]
fn test_reload_yields_identical_order() {
    let source = sample_source();
    let first = from_csv_text("men", &source);
    let second = from_csv_text("men", &source);

    assert_eq!(first.dataset.players, second.dataset.players);
}

#[test]
fn test_short_rows_skipped_and_recorded() {
    let source = format!(
        "too,short,row\n{}\n",
        player_line(
            "Jamal", "Bhuyan", "CM", "1990", "Abahani", "Denmark", "BAN", "-", "bhuyan jamal",
        )
    );
    let result = from_csv_text("men", &source);

    assert_eq!(result.dataset.len(), 1);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert!(result.stats.errors[0].contains(&PLAYER_MIN_FIELDS.to_string()));
}

#[tokio::test]
async fn test_load_from_path_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(sample_source().as_bytes()).unwrap();

    let result = load_from_path("men", file.path()).await.unwrap();
    assert_eq!(result.dataset.len(), 2);
    assert_eq!(result.dataset.cohort, "men");
}

#[tokio::test]
async fn test_missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    let err = load_from_path("men", &missing).await.unwrap_err();
    assert!(matches!(err, RosterError::SourceUnavailable { .. }));
}

#[tokio::test]
async fn test_unknown_cohort_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_cohort(dir.path(), "juniors").await.unwrap_err();
    assert!(matches!(err, RosterError::UnknownCohort { .. }));
}

#[tokio::test]
async fn test_load_cohort_resolves_filename() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("mens.csv"), sample_source()).unwrap();

    let result = load_cohort(dir.path(), "men").await.unwrap();
    assert_eq!(result.dataset.len(), 2);
}
