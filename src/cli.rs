//! CLI definition and dispatch.

use clap::Parser;
use log::info;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_prompt_adapter::ConsolePromptAdapter;
use crate::adapters::csv_adapter::CsvTickerAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::iex_adapter::IexCloudAdapter;
use crate::adapters::xlsx_report_adapter::XlsxReportAdapter;
use crate::domain::allocator::{AllocationSummary, allocate};
use crate::domain::batch::{batch_count, batches};
use crate::domain::error::EqWeightError;
use crate::domain::quote_table::fetch_quote_table;
use crate::domain::ticker::Ticker;
use crate::ports::quote_port::QuotePort;
use crate::ports::report_port::ReportPort;
use crate::ports::ticker_port::TickerPort;
use crate::ports::value_port::PortfolioValuePort;
use crate::run_config::{RunConfig, TOKEN_ENV_VAR, build_run_config};

#[derive(Parser, Debug)]
#[command(name = "eqweight", about = "Equal-weight index fund trade generator")]
pub struct Cli {
    /// INI configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// CSV file with a Ticker column (overrides [input] tickers_path)
    #[arg(short, long)]
    pub tickers: Option<PathBuf>,
    /// Workbook to write (overrides [report] output_path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Validate config and tickers, print the batch plan, fetch nothing
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn execute(cli: Cli) -> Result<(), EqWeightError> {
    // Stage 1: Load config
    let adapter = load_config(cli.config.as_ref())?;
    let run_config = build_run_config(&adapter, env::var(TOKEN_ENV_VAR).ok())?
        .with_overrides(cli.tickers, cli.output);

    // Stage 2: Load constituents
    info!("Loading tickers from {}", run_config.tickers_path.display());
    let tickers = CsvTickerAdapter::new(run_config.tickers_path.clone()).load_tickers()?;
    info!("{} tickers loaded", tickers.len());

    if cli.dry_run {
        print_batch_plan(&tickers, &run_config);
        return Ok(());
    }

    // Stage 3: Wire adapters
    let quote_port = IexCloudAdapter::new(
        &run_config.base_url,
        run_config.require_token()?,
        run_config.timeout,
    )?;
    let report_port = XlsxReportAdapter::new(run_config.output_path.clone())
        .with_sheet_name(&run_config.sheet_name)
        .with_column_width(run_config.column_width);
    let mut value_port = ConsolePromptAdapter::new(io::stdin().lock(), io::stdout());

    // Stages 4-7
    run_allocation_pipeline(
        &quote_port,
        &report_port,
        &mut value_port,
        &tickers,
        &run_config,
    )?;
    Ok(())
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, EqWeightError> {
    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            FileConfigAdapter::from_file(path).map_err(|e| EqWeightError::ConfigParse {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

/// Fetches quotes, reads the portfolio value, allocates and writes the report.
///
/// Nothing is written unless every earlier stage succeeds.
pub fn run_allocation_pipeline(
    quote_port: &dyn QuotePort,
    report_port: &dyn ReportPort,
    value_port: &mut dyn PortfolioValuePort,
    tickers: &[Ticker],
    run_config: &RunConfig,
) -> Result<AllocationSummary, EqWeightError> {
    // Stage 4: Fetch quotes batch by batch
    let quotes = fetch_quote_table(quote_port, tickers, run_config.batch_size)?;
    info!("{} quotes fetched", quotes.len());

    // Stage 5: Portfolio value
    let total = value_port.read_portfolio_value()?;

    // Stage 6: Allocate
    let positions = allocate(&quotes, total)?;
    let summary = AllocationSummary::compute(&positions, total);
    info!(
        "Allocated {} across {} positions ({:.2} each): {:.2} invested, {:.2} left over",
        total,
        summary.positions,
        summary.per_position_budget,
        summary.invested,
        summary.uninvested_cash,
    );

    // Stage 7: Report
    report_port.write(&positions)?;
    info!("Report written to: {}", report_port.destination());

    Ok(summary)
}

fn print_batch_plan(tickers: &[Ticker], run_config: &RunConfig) {
    let total = batch_count(tickers.len(), run_config.batch_size);
    println!("Quote source: {}", run_config.base_url);
    println!(
        "Token: {}",
        if run_config.token.is_some() {
            "configured"
        } else {
            "MISSING"
        }
    );
    println!(
        "{} tickers in {} batches of up to {}",
        tickers.len(),
        total,
        run_config.batch_size
    );
    for (i, batch) in batches(tickers, run_config.batch_size).enumerate() {
        let first = batch.first().map(Ticker::as_str).unwrap_or_default();
        let last = batch.last().map(Ticker::as_str).unwrap_or_default();
        println!("  batch {}: {} symbols ({}..{})", i + 1, batch.len(), first, last);
    }
    println!("Report: {}", run_config.output_path.display());
}
