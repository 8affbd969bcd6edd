use clap::Parser;
use roster_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Roster Processor - Football Player Database Tool");
    println!("================================================");
    println!();
    println!("Browse and summarise rosters of Bangladeshi-heritage football players");
    println!("loaded from delimited text files, one file per cohort.");
    println!();
    println!("USAGE:");
    println!("    roster-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    browse      Browse one page of a cohort roster, optionally filtered");
    println!("    filters     List the filter vocabulary of a cohort");
    println!("    stats       Aggregate summary statistics across cohorts");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # First page of the men's roster:");
    println!("    roster-processor browse");
    println!();
    println!("    # Women's goalkeepers born in 2001, page 2:");
    println!("    roster-processor browse --cohort women --position GK \\");
    println!("                            --birth-year 2001 --page 2");
    println!();
    println!("    # Statistics for both cohorts as JSON:");
    println!("    roster-processor stats --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    roster-processor <COMMAND> --help");
}
