//! SMAC CLI — fetch prices, compute the crossover signal, draw the chart.
//!
//! With a ticker argument the run is fully flag-driven. Without one it
//! falls back to the interactive flow: prompts for ticker and windows, a
//! numbered time-range menu, and a price-overlay toggle.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDate};
use clap::{Parser, ValueEnum};

use smac_chart::ChartView;
use smac_core::data::{CsvImport, PriceProvider, YahooProvider};
use smac_core::engine::{compute, AvgKind, ComparisonPolicy, SmacConfig};
use smac_core::events::{extract_events, MarkerSource};
use smac_core::rolling::WindowPolicy;

#[derive(Parser)]
#[command(
    name = "smac",
    about = "Simple moving average crossover signals with a terminal chart"
)]
struct Cli {
    /// Ticker symbol (e.g., AAPL). Omit to be prompted interactively.
    ticker: Option<String>,

    /// Short rolling window in trading days.
    #[arg(long, default_value_t = 50)]
    short: usize,

    /// Long rolling window in trading days.
    #[arg(long, default_value_t = 120)]
    long: usize,

    /// Coarse time range: 1=1m, 2=3m, 3=6m, 4=1y, 5=3y, 6=5y.
    #[arg(long, default_value_t = 4)]
    range: u32,

    /// Start date (YYYY-MM-DD). Overrides --range.
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    end: Option<String>,

    /// Overlay the raw adjusted close on the chart.
    #[arg(long, default_value_t = false)]
    show_price: bool,

    /// Rolling-window boundary policy.
    #[arg(long, value_enum, default_value = "min-periods")]
    policy: PolicyArg,

    /// What the binary signal compares.
    #[arg(long, value_enum, default_value = "avg")]
    compare: CompareArg,

    /// Evaluate the average-vs-average comparison from day one instead
    /// of forcing the first `--short` entries to 0.
    #[arg(long, default_value_t = false)]
    no_suppress_warmup: bool,

    /// Read prices from a CSV file (date,adj_close) instead of Yahoo.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the computed series as JSON instead of drawing the chart.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Partial windows average over the days available so far.
    MinPeriods,
    /// The first window-1 entries are left undefined.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CompareArg {
    /// Short average vs long average.
    Avg,
    /// Raw price vs the short average.
    PriceShort,
    /// Raw price vs the long average.
    PriceLong,
}

/// Fully resolved run parameters, from flags or prompts.
struct Params {
    ticker: String,
    short: usize,
    long: usize,
    start: NaiveDate,
    end: NaiveDate,
    show_price: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let params = if cli.ticker.is_some() {
        params_from_flags(&cli)?
    } else {
        params_interactive(&cli)?
    };

    run(&cli, &params)
}

fn run(cli: &Cli, params: &Params) -> Result<()> {
    let config = SmacConfig {
        short_window: params.short,
        long_window: params.long,
        window_policy: match cli.policy {
            PolicyArg::MinPeriods => WindowPolicy::MinPeriods,
            PolicyArg::Strict => WindowPolicy::Strict,
        },
        comparison: match cli.compare {
            CompareArg::Avg => ComparisonPolicy::AvgVsAvg {
                suppress_warmup: !cli.no_suppress_warmup,
            },
            CompareArg::PriceShort => ComparisonPolicy::PriceVsAvg {
                reference: AvgKind::Short,
            },
            CompareArg::PriceLong => ComparisonPolicy::PriceVsAvg {
                reference: AvgKind::Long,
            },
        },
    };

    let provider: Box<dyn PriceProvider> = match &cli.csv {
        Some(path) => Box::new(CsvImport::new(path)),
        None => Box::new(YahooProvider::new()),
    };

    println!(
        "Fetching {} from {} ({} to {})...",
        params.ticker,
        provider.name(),
        params.start,
        params.end
    );
    let series = provider.fetch(&params.ticker, params.start, params.end)?;

    if series.is_empty() {
        println!(
            "No trading days for {} between {} and {}. Try a wider range.",
            params.ticker, params.start, params.end
        );
        return Ok(());
    }

    let output = compute(&series, &config)?;

    // Annotate markers on the series the comparison actually used.
    let marker = match cli.compare {
        CompareArg::Avg => MarkerSource::ShortAvg,
        CompareArg::PriceShort | CompareArg::PriceLong => MarkerSource::Price,
    };
    let events = extract_events(&output, marker);

    if cli.json {
        let report = serde_json::json!({
            "ticker": params.ticker,
            "short_window": params.short,
            "long_window": params.long,
            "output": output,
            "events": events,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}: {} buy / {} sell crossovers over {} trading days",
        params.ticker,
        events.buys.len(),
        events.sells.len(),
        output.len()
    );

    let view = ChartView {
        ticker: &params.ticker,
        output: &output,
        events: &events,
        show_price: params.show_price,
    };
    smac_chart::show(&view)?;
    Ok(())
}

// ── Parameter resolution ─────────────────────────────────────────────

fn params_from_flags(cli: &Cli) -> Result<Params> {
    let ticker = cli.ticker.clone().unwrap_or_default().to_uppercase();

    let end = match &cli.end {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let start = match &cli.start {
        Some(s) => parse_date(s)?,
        None => end - Duration::days(range_days_or_default(cli.range)),
    };

    Ok(Params {
        ticker,
        short: cli.short,
        long: cli.long,
        start,
        end,
        show_price: cli.show_price,
    })
}

fn params_interactive(cli: &Cli) -> Result<Params> {
    let ticker = loop {
        let raw = prompt("Enter the ticker symbol: ")?;
        if !raw.is_empty() {
            break raw.to_uppercase();
        }
    };

    let long = prompt_window("long", cli.long)?;
    let short = prompt_window("short", cli.short)?;

    let raw = prompt("Display actual price? Enter 0 for No, 1 for Yes (default is Yes): ")?;
    let show_price = raw.is_empty() || raw != "0";

    println!("Choose a time range for the stock data:");
    println!("1. 1 Month");
    println!("2. 3 Months");
    println!("3. 6 Months");
    println!("4. 1 Year");
    println!("5. 3 Years");
    println!("6. 5 Years");
    let choice = prompt("Enter the number corresponding to your choice: ")?;

    let end = today();
    let days = choice
        .parse::<u32>()
        .ok()
        .and_then(range_days)
        .unwrap_or_else(|| {
            println!("Invalid choice. Defaulting to 1 year of data.");
            365
        });

    Ok(Params {
        ticker,
        short,
        long,
        start: end - Duration::days(days),
        end,
        show_price,
    })
}

/// Map a 1-6 menu choice to a day count.
fn range_days(choice: u32) -> Option<i64> {
    match choice {
        1 => Some(30),
        2 => Some(90),
        3 => Some(180),
        4 => Some(365),
        5 => Some(3 * 365),
        6 => Some(5 * 365),
        _ => None,
    }
}

fn range_days_or_default(choice: u32) -> i64 {
    range_days(choice).unwrap_or_else(|| {
        println!("Invalid --range {choice}. Defaulting to 1 year of data.");
        365
    })
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("'{s}' is not a valid YYYY-MM-DD date"))
}

// ── Prompt helpers ───────────────────────────────────────────────────

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("stdin closed");
    }
    Ok(line.trim().to_string())
}

fn prompt_window(label: &str, default: usize) -> Result<usize> {
    let raw = prompt(&format!(
        "Enter the {label} window in days (default is {default}): "
    ))?;
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse()
        .with_context(|| format!("'{raw}' is not a valid window length"))
}
