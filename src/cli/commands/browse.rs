//! Browse command implementation
//!
//! Loads one cohort, applies the filter criteria from the command line,
//! and renders a single page of the result list.

use colored::Colorize;
use tracing::info;

use super::shared::{csv_field, load_or_empty, setup_logging};
use crate::Result;
use crate::app::models::Player;
use crate::app::services::query_engine::{self, FilterCriteria, Page, PageRequest};
use crate::cli::args::{BrowseArgs, OutputFormat};
use crate::config::Config;

/// Browse command runner
pub async fn run_browse(args: BrowseArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = Config::with_data_dir(args.data_dir.clone());
    let dataset = load_or_empty(&config.data_dir, &args.cohort).await?;

    let criteria = FilterCriteria {
        name: args.name.clone().unwrap_or_default(),
        position: args.position.clone(),
        birth_year: args.birth_year.clone(),
        country: args.country.clone(),
    };

    let matches = query_engine::filter(&dataset, &criteria);
    info!(
        "Cohort '{}': {} of {} player(s) match the criteria",
        args.cohort,
        matches.len(),
        dataset.len()
    );

    let page = query_engine::paginate(&matches, &PageRequest::new(args.page));

    match args.output_format {
        OutputFormat::Human => render_human(&args.cohort, &page),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
        OutputFormat::Csv => render_csv(&page),
    }

    Ok(())
}

fn render_human(cohort: &str, page: &Page<'_>) {
    println!("{}", format!("Roster ({} cohort)", cohort).bold());
    println!();

    if page.players.is_empty() {
        println!("{}", "No players found matching your filters".dimmed());
    } else {
        println!(
            "{}",
            format!(
                "{:<28} {:<12} {:<6} {:<24} {:<16} {:<4} {}",
                "NAME", "POS", "BORN", "CLUB", "COUNTRY", "NT", "UPDATED"
            )
            .bold()
        );
        for player in &page.players {
            println!(
                "{:<28} {:<12} {:<6} {:<24} {:<16} {:<4} {}",
                player.full_name(),
                Player::display_field(&player.positions),
                Player::display_field(&player.birth_year),
                Player::display_field(&player.club),
                Player::display_field(&player.country),
                Player::display_field(&player.national_team),
                Player::display_field(&player.last_updated),
            );
        }
    }

    println!();
    if page.total_players > 0 {
        println!(
            "Showing {}-{} of {} players",
            page.start_index, page.end_index, page.total_players
        );
    } else {
        println!("Showing 0 of 0 players");
    }
    println!("Page {} of {}", page.page, page.total_pages);
}

fn render_csv(page: &Page<'_>) {
    println!("given_name,family_name,positions,birth_year,club,country,national_team,last_updated");
    for player in &page.players {
        let fields = [
            player.given_name.as_str(),
            player.family_name.as_str(),
            player.positions.as_str(),
            player.birth_year.as_str(),
            player.club.as_str(),
            player.country.as_str(),
            player.national_team.as_str(),
            player.last_updated.as_str(),
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        println!("{}", line.join(","));
    }
}
