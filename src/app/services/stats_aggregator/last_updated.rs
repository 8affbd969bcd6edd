//! Last-updated date extraction
//!
//! The last-updated column mixes `MM/DD/YYYY`, `MM/DD/YY` (two-digit years
//! are 20xx), and `YYYY-MM-DD` values with sentinels. The newest valid date
//! across a dataset is the reported "last updated" value.

use chrono::NaiveDate;

use crate::app::models::Dataset;
use crate::constants::{
    PLACEHOLDER, UPDATE_DATE_FALLBACK, UPDATE_DATE_FORMAT, UPDATE_STATUS_UNKNOWN,
};

/// Parse one last-updated field. Sentinels and unparseable values are `None`.
pub fn parse_update_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() || value == PLACEHOLDER || value == UPDATE_STATUS_UNKNOWN {
        return None;
    }

    if value.contains('/') {
        let parts: Vec<&str> = value.split('/').collect();
        if parts.len() != 3 {
            return None;
        }

        let month: u32 = parts[0].trim().parse().ok()?;
        let day: u32 = parts[1].trim().parse().ok()?;
        let year_part = parts[2].trim();
        let year: i32 = if year_part.len() == 2 {
            // Two-digit years are always this century.
            format!("20{year_part}").parse().ok()?
        } else {
            year_part.parse().ok()?
        };

        NaiveDate::from_ymd_opt(year, month, day)
    } else if value.contains('-') {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    } else {
        None
    }
}

/// The newest valid update date across a dataset, if any
pub fn latest_update(dataset: &Dataset) -> Option<NaiveDate> {
    dataset
        .players
        .iter()
        .filter_map(|player| parse_update_date(&player.last_updated))
        .max()
}

/// Render an update date long-form, or the documented fallback label
pub fn format_update_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format(UPDATE_DATE_FORMAT).to_string(),
        None => UPDATE_DATE_FALLBACK.to_string(),
    }
}
