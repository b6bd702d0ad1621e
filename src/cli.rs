//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvSource;
use crate::adapters::json_adapter::JsonFileSource;
use crate::domain::dateparse::parse_date;
use crate::domain::engine::FilterEngine;
use crate::domain::error::OrderdeskError;
use crate::domain::order::Dataset;
use crate::ports::order_source::OrderSource;
use crate::protocol::FilterParams;

#[derive(Parser, Debug)]
#[command(name = "orderdesk", about = "Trade order filtering and aggregation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter a dataset and print aggregate metrics
    Filter {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        /// Emit the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Convert a broker CSV export to dataset JSON
    Convert {
        #[arg(long)]
        csv: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show dataset shape: order counts, date coverage, symbols
    Info {
        #[arg(short, long)]
        data: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Filter {
            data,
            search,
            status,
            start,
            end,
            json,
        } => run_filter(&data, search, status, start, end, json),
        Command::Convert { csv, output } => run_convert(&csv, output.as_deref()),
        Command::Info { data } => run_info(&data),
    }
}

/// Pick the adapter by extension: `.csv` is a broker export, anything
/// else is dataset JSON.
fn load_dataset(path: &Path) -> Result<Dataset, OrderdeskError> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        CsvSource::new(path.to_path_buf()).load()
    } else {
        JsonFileSource::new(path.to_path_buf()).load()
    }
}

fn run_filter(
    data: &Path,
    search: Option<String>,
    status: Option<String>,
    start: Option<String>,
    end: Option<String>,
    json: bool,
) -> ExitCode {
    let dataset = match load_dataset(data) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loaded {} orders from {}", dataset.len(), data.display());

    let params = FilterParams {
        search,
        status,
        start,
        end,
    };
    let engine = FilterEngine::with_dataset(dataset);
    let result = engine.filter(&params.into_criteria());

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!(
        "Matched {} buy / {} sell orders",
        result.filtered_buy_orders.len(),
        result.filtered_sell_orders.len()
    );
    println!("Total bought:  {:.2}", result.totals.total_bought);
    println!("Total sold:    {:.2}", result.totals.total_sold);
    println!("Total profit:  {:.2}", result.totals.total_profit);
    println!(
        "Trades: {} ({} wins, {} losses)",
        result.metrics.trades, result.metrics.wins, result.metrics.losses
    );
    println!("Avg PnL:       {:.2}", result.metrics.avg_pnl);
    println!("Win rate:      {:.1}%", result.metrics.win_rate * 100.0);
    if !result.top_symbols.is_empty() {
        println!("Top symbols:");
        for entry in &result.top_symbols {
            println!("  {:<8} {:.0}", entry.symbol, entry.volume);
        }
    }
    ExitCode::SUCCESS
}

fn run_convert(csv: &Path, output: Option<&Path>) -> ExitCode {
    let dataset = match CsvSource::new(csv.to_path_buf()).load() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!(
        "Converted {} buy / {} sell orders",
        dataset.buy_orders.len(),
        dataset.sell_orders.len()
    );

    let text = match serde_json::to_string_pretty(&dataset) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                let err = OrderdeskError::Io(e);
                eprintln!("error: {err}");
                return (&err).into();
            }
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    ExitCode::SUCCESS
}

fn run_info(data: &Path) -> ExitCode {
    let dataset = match load_dataset(data) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let all = dataset.buy_orders.iter().chain(dataset.sell_orders.iter());
    let mut symbols: Vec<&str> = Vec::new();
    let mut earliest = None;
    let mut latest = None;
    let mut undated = 0usize;
    for order in all {
        let symbol = order.symbol_or_na();
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
        match order.date.as_deref().and_then(parse_date) {
            Some(date) => {
                if earliest.is_none_or(|d| date < d) {
                    earliest = Some(date);
                }
                if latest.is_none_or(|d| date > d) {
                    latest = Some(date);
                }
            }
            None => undated += 1,
        }
    }

    println!(
        "Orders: {} buy, {} sell",
        dataset.buy_orders.len(),
        dataset.sell_orders.len()
    );
    println!("Symbols: {}", symbols.len());
    match (earliest, latest) {
        (Some(from), Some(to)) => println!("Date range: {from} to {to}"),
        _ => println!("Date range: none"),
    }
    if undated > 0 {
        println!("Orders without a parseable date: {undated}");
    }
    ExitCode::SUCCESS
}
