//! Filters command implementation
//!
//! Loads one cohort and prints its filter vocabulary: the distinct
//! positions, birth years, and countries a browse query can constrain on.

use colored::Colorize;

use super::shared::{csv_field, load_or_empty, setup_logging};
use crate::Result;
use crate::app::services::filter_options::{self, FilterVocabulary};
use crate::cli::args::{FiltersArgs, OutputFormat};
use crate::config::Config;

/// Filters command runner
pub async fn run_filters(args: FiltersArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = Config::with_data_dir(args.data_dir.clone());
    let dataset = load_or_empty(&config.data_dir, &args.cohort).await?;
    let vocabulary = filter_options::extract_vocabulary(&dataset);

    match args.output_format {
        OutputFormat::Human => render_human(&args.cohort, &vocabulary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vocabulary)?),
        OutputFormat::Csv => render_csv(&vocabulary),
    }

    Ok(())
}

fn render_human(cohort: &str, vocabulary: &FilterVocabulary) {
    println!("{}", format!("Filter options ({} cohort)", cohort).bold());

    println!();
    println!("{} ({})", "Positions".bold(), vocabulary.positions.len());
    for position in &vocabulary.positions {
        println!("  {}", position);
    }

    println!();
    println!("{} ({})", "Birth years".bold(), vocabulary.birth_years.len());
    for year in &vocabulary.birth_years {
        println!("  {}", year);
    }

    // Blank countries stay in the vocabulary; skip them when rendering.
    let countries: Vec<&String> = vocabulary
        .countries
        .iter()
        .filter(|c| !c.trim().is_empty())
        .collect();
    println!();
    println!("{} ({})", "Countries".bold(), countries.len());
    for country in countries {
        println!("  {}", country);
    }
}

fn render_csv(vocabulary: &FilterVocabulary) {
    println!("kind,value");
    for position in &vocabulary.positions {
        println!("position,{}", csv_field(position));
    }
    for year in &vocabulary.birth_years {
        println!("birth_year,{}", csv_field(year));
    }
    for country in &vocabulary.countries {
        if !country.trim().is_empty() {
            println!("country,{}", csv_field(country));
        }
    }
}
