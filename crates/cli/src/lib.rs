pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "packlist",
    about = "Packing-list recommendation CLI",
    long_about = "Generate packing recommendations for a trip and inspect the item catalog.",
    after_help = "Examples:\n  packlist generate --destination \"Lisbon, Portugal\" --start 2025-06-02 --end 2025-06-09 --transport plane --climate warm\n  packlist catalog --category clothing --essential\n  packlist doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Generate a ranked packing list for a trip")]
    Generate(GenerateArgs),
    #[command(about = "Inspect the loaded catalog with optional filters")]
    Catalog(CatalogArgs),
    #[command(about = "Validate config and catalog source readiness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long, help = "Free-text destination, e.g. \"Lisbon, Portugal\"")]
    pub destination: String,
    #[arg(long, help = "Trip start date (YYYY-MM-DD)")]
    pub start: NaiveDate,
    #[arg(long, help = "Trip end date (YYYY-MM-DD)")]
    pub end: NaiveDate,
    #[arg(long = "transport", help = "Transport mode, repeatable")]
    pub transports: Vec<String>,
    #[arg(long, default_value = "hotel")]
    pub accommodation: String,
    #[arg(long = "activity", help = "Planned activity, repeatable")]
    pub activities: Vec<String>,
    #[arg(long, help = "Mark the trip as a business trip")]
    pub business: bool,
    #[arg(long, default_value_t = 1, help = "Number of travellers")]
    pub party: u32,
    #[arg(long, default_value = "moderate")]
    pub climate: String,
    #[arg(long, help = "Catalog dataset path (overrides config)")]
    pub catalog: Option<PathBuf>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[arg(long = "category", help = "Item category filter, repeatable")]
    pub categories: Vec<String>,
    #[arg(long = "tag", help = "Tag filter, repeatable")]
    pub tags: Vec<String>,
    #[arg(long = "priority", help = "Priority tier filter, repeatable")]
    pub priorities: Vec<String>,
    #[arg(long, help = "Only essential entries")]
    pub essential: bool,
    #[arg(long, help = "Catalog dataset path (overrides config)")]
    pub catalog: Option<PathBuf>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => commands::generate::run(&args),
        Command::Catalog(args) => commands::catalog::run(&args),
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
