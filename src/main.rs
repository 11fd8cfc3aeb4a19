use analytics::{FundStats, StatsEngine};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::load_config;
use filings::{FileStore, FilingsProvider};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the 13F Insights application.
#[tokio::main]
async fn main() {
    // Load environment variables from .env file, if one exists.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            if let Err(e) = handle_serve(args).await {
                eprintln!("Error running server: {}", e);
            }
        }
        Commands::Report(args) => {
            if let Err(e) = handle_report(args).await {
                eprintln!("Error building report: {}", e);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Quarterly 13F filing analytics for institutional funds.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the JSON API consumed by the dashboard.
    Serve(ServeArgs),
    /// Print one fund's performance report to the console.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Override the bind address from config.toml (e.g. "0.0.0.0:3000").
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[derive(Parser)]
struct ReportArgs {
    /// The CIK of the fund to report on (must be in the registry).
    #[arg(long)]
    cik: String,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config()?;
    if let Some(addr) = args.addr {
        config.server.bind_addr = addr;
    }
    web_server::run_server(config).await
}

/// Loads one fund's history, runs the stats engine over it, and prints the
/// same report the dashboard's stats panel shows.
async fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let name = config
        .funds
        .iter()
        .find(|fund| fund.cik == args.cik)
        .map(|fund| fund.name.clone())
        .unwrap_or_else(|| format!("CIK {}", args.cik));

    tracing::info!(cik = %args.cik, "Building fund report.");
    let store = FileStore::new(&config.store.data_dir);
    let filings = store.fund_filings(&args.cik).await?;
    let stats = StatsEngine::new().summarize(&filings)?;

    println!("{name} — {} filings", filings.len());
    println!("{}", report_table(&stats));
    Ok(())
}

fn report_table(stats: &FundStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    let rows = [
        ("Latest AUM (USD)", format!("{:.2}", stats.aum)),
        ("Latest quarter", stats.quarter.clone()),
        ("QoQ change", percent_or_na(stats.qoq_change)),
        ("YoY growth", percent_or_na(stats.yoy_growth)),
        (
            "Total appreciation",
            format!("{:.2}%", stats.total_appreciation),
        ),
        ("Volatility", format!("{:.2}%", stats.volatility)),
        ("Max growth", format!("{:.2}%", stats.max_growth)),
        ("Max decline", format!("{:.2}%", stats.max_decline)),
        (
            "Growth consistency",
            format!("{:.2}%", stats.growth_consistency),
        ),
    ];
    for (metric, value) in rows {
        table.add_row(vec![metric.to_string(), value]);
    }
    table
}

fn percent_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "N/A".to_string(),
    }
}
