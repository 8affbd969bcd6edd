//! Stats command implementation
//!
//! Loads every requested cohort concurrently, aggregates each one
//! independently, and renders the summaries. A missing source degrades to
//! an empty dataset; one cohort's failure never blocks the others.

use colored::Colorize;
use futures::future::join_all;
use tracing::info;

use super::shared::{csv_field, load_or_empty, setup_logging};
use crate::Result;
use crate::app::models::Dataset;
use crate::app::services::stats_aggregator::{
    self, AggregateOptions, StatsSummary, format_update_date,
};
use crate::cli::args::{OutputFormat, StatsArgs};
use crate::config::Config;

/// Stats command runner
pub async fn run_stats(args: StatsArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = Config::with_data_dir(args.data_dir.clone());
    let options = AggregateOptions {
        home_nt_code: args.home_nt_code.clone(),
        include_club_status: !args.no_club_status,
        include_nt_callups: !args.no_nt_callups,
    };

    let cohorts = args.get_cohorts();
    info!("Aggregating {} cohort(s): {:?}", cohorts.len(), cohorts);

    // Each load is an independent future; a failed source degrades inside
    // load_or_empty without disturbing its siblings.
    let loads = cohorts
        .iter()
        .map(|cohort| load_or_empty(&config.data_dir, cohort));
    let datasets: Vec<Dataset> = join_all(loads)
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    let summaries: Vec<StatsSummary> = datasets
        .iter()
        .map(|dataset| stats_aggregator::aggregate(dataset, &options))
        .collect();

    match args.output_format {
        OutputFormat::Human => render_human(&summaries, &options),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Csv => render_csv(&summaries),
    }

    Ok(())
}

fn render_human(summaries: &[StatsSummary], options: &AggregateOptions) {
    println!("{}", "Roster Statistics".bold());

    for summary in summaries {
        println!();
        println!("{}", format!("[{} cohort]", summary.cohort).bold());
        println!("  Total players:         {}", summary.total_players);
        println!("  Countries represented: {}", summary.distinct_countries);

        println!("  Positions:");
        for (label, count) in summary.positions.rows() {
            println!("    {:<12} {}", label, count);
        }

        if let Some(club) = summary.club_status {
            println!(
                "  Club status:  with club {}, without club {}",
                club.with_club, club.without_club
            );
        }

        if let Some(nt) = summary.nt_callups {
            println!(
                "  NT callups:   {} {}, other countries {}, none {}",
                options.home_nt_code, nt.home, nt.other, nt.none
            );
        }

        println!("  Last updated: {}", summary.last_updated_label());
    }

    // Newest update across every cohort, the figure the site footer shows.
    let overall = summaries.iter().filter_map(|s| s.last_updated).max();
    println!();
    println!(
        "{} {}",
        "Database last updated:".bold(),
        format_update_date(overall)
    );
}

fn render_csv(summaries: &[StatsSummary]) {
    println!("cohort,metric,value");
    for summary in summaries {
        let cohort = csv_field(&summary.cohort);
        println!("{},total_players,{}", cohort, summary.total_players);
        println!("{},countries,{}", cohort, summary.distinct_countries);

        for (label, count) in summary.positions.rows() {
            println!("{},positions/{},{}", cohort, label.to_lowercase(), count);
        }

        if let Some(club) = summary.club_status {
            println!("{},club_status/with_club,{}", cohort, club.with_club);
            println!("{},club_status/without_club,{}", cohort, club.without_club);
        }

        if let Some(nt) = summary.nt_callups {
            println!("{},nt_callups/home,{}", cohort, nt.home);
            println!("{},nt_callups/other,{}", cohort, nt.other);
            println!("{},nt_callups/none,{}", cohort, nt.none);
        }

        println!(
            "{},last_updated,{}",
            cohort,
            csv_field(&summary.last_updated_label())
        );
    }
}
