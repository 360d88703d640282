mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::market::MarketArgs;
use commands::pricing::{AnalyzeArgs, RevenueArgs};
use commands::report::ReportArgs;
use commands::scenarios::CompareArgs;

/// Decide whether a product discount pays for itself
#[derive(Parser)]
#[command(
    name = "discount",
    version,
    about = "Decide whether a product discount pays for itself",
    long_about = "Compares today's profit against a proposed discount net of \
                  customer-acquisition cost, ranks a set of discount tiers at a \
                  shared estimated volume, exports a Markdown report, and shows \
                  exchange-rate context."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log debug detail to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the pricing formula to one set of inputs
    Revenue(RevenueArgs),
    /// Compare today's position with the proposed discount
    Analyze(AnalyzeArgs),
    /// Compare discount tiers and pick the best discounted one
    Compare(CompareArgs),
    /// Export a Markdown report of the analysis
    Report(ReportArgs),
    /// Fetch exchange-rate history with market commentary
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
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Revenue(args) => commands::pricing::run_revenue(args),
        Commands::Analyze(args) => commands::pricing::run_analyze(args),
        Commands::Compare(args) => commands::scenarios::run_compare(args),
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Market(args) => commands::market::run_market(args),
        Commands::Version => {
            println!("discount {}", env!("CARGO_PKG_VERSION"));
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
