//! SMA crossover backtest CLI.
//!
//! Fetches daily closes (or loads a previously exported CSV), runs the
//! backtest and hands the curves to the plotting step as CSV/JSON files.
//!
//! Usage:
//!   cargo run -- --symbol aapl.us --from 2010-01-01 --to 2024-08-01

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crossover_backtest::api::StooqClient;
use crossover_backtest::backtest::run_backtest;
use crossover_backtest::models::PriceSeries;
use crossover_backtest::strategy::CrossoverParams;
use crossover_backtest::utils::{load_price_series_csv, save_price_series_csv};

#[derive(Parser, Debug)]
#[command(name = "crossover-backtest")]
#[command(about = "Run an SMA crossover backtest on daily equity data")]
struct Args {
    /// Stooq symbol (e.g., aapl.us, msft.us)
    #[arg(short, long, default_value = "aapl.us")]
    symbol: String,

    /// First trading date (YYYY-MM-DD); default is 5 years back
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last trading date (YYYY-MM-DD); default is today
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Short moving-average window
    #[arg(long, default_value_t = 20)]
    short: usize,

    /// Long moving-average window
    #[arg(long, default_value_t = 50)]
    long: usize,

    /// Load prices from a date,close CSV instead of fetching
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for the report artifacts
    #[arg(short, long, default_value = "output")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();
    let params = CrossoverParams::new(args.short, args.long)?;

    let series = match &args.input {
        Some(path) => {
            info!("Loading prices from {}", path.display());
            load_price_series_csv(path)?
        }
        None => {
            let to = args.to.unwrap_or_else(|| Utc::now().date_naive());
            let from = args.from.unwrap_or(to - Duration::days(5 * 365));
            info!("Fetching {} from {} to {}", args.symbol, from, to);

            let client = StooqClient::new();
            let bars = client.daily_closes(&args.symbol, from, to).await?;
            let series = PriceSeries::new(bars)?;

            // Keep a local copy so reruns can use --input.
            let cache = args.output.join(format!("{}_closes.csv", args.symbol));
            save_price_series_csv(&series, &cache)?;
            info!("Saved prices to {}", cache.display());
            series
        }
    };

    println!(
        "Loaded {} trading days for {}",
        series.len(),
        args.symbol
    );

    let result = run_backtest(&args.symbol, &series, &params)?;
    result.print_report();

    let csv_path = args.output.join(format!("{}_curves.csv", args.symbol));
    let json_path = args.output.join(format!("{}_result.json", args.symbol));
    result.save_csv(&csv_path)?;
    result.save_json(&json_path)?;

    println!("Curves saved to:  {}", csv_path.display());
    println!("Result saved to:  {}", json_path.display());

    Ok(())
}
