//! Test utilities and modules for the dataset loader

mod loader_tests;

use crate::constants::PLAYER_MIN_FIELDS;

/// Build a well-formed source line for a player.
///
/// Unlisted columns are filled with the placeholder; the sort key lands in
/// the final column.
pub fn player_line(
    given: &str,
    family: &str,
    positions: &str,
    birth_year: &str,
    club: &str,
    country: &str,
    national_team: &str,
    last_updated: &str,
    sort_key: &str,
) -> String {
    let mut fields = vec!["-".to_string(); PLAYER_MIN_FIELDS];
    fields[crate::constants::columns::GIVEN_NAME] = given.to_string();
    fields[crate::constants::columns::FAMILY_NAME] = family.to_string();
    fields[crate::constants::columns::POSITIONS] = quote_if_needed(positions);
    fields[crate::constants::columns::BIRTH_YEAR] = birth_year.to_string();
    fields[crate::constants::columns::CLUB] = club.to_string();
    fields[crate::constants::columns::COUNTRY] = country.to_string();
    fields[crate::constants::columns::NATIONAL_TEAM] = national_team.to_string();
    fields[crate::constants::columns::LAST_UPDATED] = last_updated.to_string();
    fields[PLAYER_MIN_FIELDS - 1] = sort_key.to_string();
    fields.join(",")
}

fn quote_if_needed(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// A small two-player source with a header row
pub fn sample_source() -> String {
    let header: Vec<&str> = std::iter::once("Given Names(s)")
        .chain(std::iter::repeat_n("col", PLAYER_MIN_FIELDS - 1))
        .collect();
    format!(
        "{}\n{}\n{}\n",
        header.join(","),
        player_line(
            "Hamza",
            "Choudhury",
            "CDM, CM",
            "1997",
            "Sheffield United",
            "England",
            "BAN",
            "2025-03-20",
            "choudhury hamza",
        ),
        player_line(
            "Jamal",
            "Bhuyan",
            "CM",
            "1990",
            "Abahani",
            "Denmark",
            "BAN",
            "12/01/2024",
            "bhuyan jamal",
        ),
    )
}
