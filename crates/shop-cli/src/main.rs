//! Shop CLI
//!
//! Runs the sample shop walkthrough against a SQLite database file

use clap::{Parser, Subcommand, ValueEnum};
use shop_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;
mod report;

#[derive(Debug, Parser)]
#[command(name = "shop")]
#[command(about = "Shop - users, products and orders in SQLite", long_about = None)]
struct Cli {
    /// Path to the database file
    #[arg(long, global = true, default_value = "shop.db")]
    db: PathBuf,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogProfile::Development)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed the database and run every report and mutation (default)
    Run,
    /// Seed the database and print the resulting row counts
    Seed,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::execute(&cli.db),
        Commands::Seed => commands::seed::execute(&cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
