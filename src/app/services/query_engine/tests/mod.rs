//! Test utilities and modules for the query engine


use crate::app::models::{Dataset, Player};
use crate::constants::{PLAYER_MIN_FIELDS, columns};

/// Build a player with the fields the query engine inspects
pub fn player(given: &str, family: &str, positions: &str, birth_year: &str, country: &str) -> Player {
    let mut row = vec![String::new(); PLAYER_MIN_FIELDS];
    row[columns::GIVEN_NAME] = given.to_string();
    row[columns::FAMILY_NAME] = family.to_string();
    row[columns::POSITIONS] = positions.to_string();
    row[columns::BIRTH_YEAR] = birth_year.to_string();
    row[columns::COUNTRY] = country.to_string();
    row[PLAYER_MIN_FIELDS - 1] = format!("{} {}", family, given).to_lowercase();
    Player::from_row(&row).unwrap()
}

/// Dataset of `n` distinct numbered players
pub fn numbered_dataset(n: usize) -> Dataset {
    let players = (0..n)
        .map(|i| player(&format!("Player{i:02}"), "Test", "CM", "2000", "USA"))
        .collect();
    Dataset::new("men", players)
}
