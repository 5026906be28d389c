mod commands;
mod input;
mod output;
mod settings;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::analyze::AnalyzeArgs;
use commands::geocode::GeocodeArgs;
use commands::market::MarketArgs;
use commands::model::ModelArgs;
use commands::report::ReportArgs;

/// Site-feasibility analysis for retail and food-service locations
#[derive(Parser)]
#[command(
    name = "sitescout",
    version,
    about = "Site-feasibility analysis for retail and food-service locations",
    long_about = "Geocodes a candidate location, models monthly revenue, costs, \
                  break-even and return ratios from business assumptions, and \
                  assembles an investor memo with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Settings file (TOML); defaults to ./sitescout.toml when present
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug detail to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the monthly financial model from business assumptions
    Model(ModelArgs),
    /// Assemble the investor memo for a site
    Report(ReportArgs),
    /// Geocode a location and run the full feasibility analysis
    Analyze(AnalyzeArgs),
    /// Resolve a location query to coordinates
    Geocode(GeocodeArgs),
    /// Generate the synthetic market snapshot around a point
    Market(MarketArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Memo,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match settings::Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Model(args) => commands::model::run_model(args, &settings),
        Commands::Report(args) => commands::report::run_report(args, &settings),
        Commands::Analyze(args) => commands::analyze::run_analyze(args, &settings),
        Commands::Geocode(args) => commands::geocode::run_geocode(args, &settings),
        Commands::Market(args) => commands::market::run_market(args, &settings),
        Commands::Version => {
            println!("sitescout {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
