//! Test utilities and modules for the statistics aggregator

mod aggregator_tests;
mod categories_tests;

use crate::app::models::{Dataset, Player};
use crate::constants::{PLAYER_MIN_FIELDS, columns};

/// Build a player with the fields the aggregator inspects
pub fn player(positions: &str, club: &str, country: &str, national_team: &str) -> Player {
    let mut row = vec![String::new(); PLAYER_MIN_FIELDS];
    row[columns::POSITIONS] = positions.to_string();
    row[columns::CLUB] = club.to_string();
    row[columns::COUNTRY] = country.to_string();
    row[columns::NATIONAL_TEAM] = national_team.to_string();
    Player::from_row(&row).unwrap()
}

/// Build a player carrying only a last-updated value
pub fn player_updated(last_updated: &str) -> Player {
    let mut row = vec![String::new(); PLAYER_MIN_FIELDS];
    row[columns::LAST_UPDATED] = last_updated.to_string();
    Player::from_row(&row).unwrap()
}

pub fn dataset(players: Vec<Player>) -> Dataset {
    Dataset::new("men", players)
}
