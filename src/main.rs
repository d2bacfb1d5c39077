mod cli;
mod models;
mod query;
mod stats;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::Cli;
use crate::storage::{CsvLedger, LedgerConfig, Storage};

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let config = LedgerConfig::new(&cli.ledger)
        .with_layout(cli.layout)
        .with_timestamp_format(cli.timestamp_format);

    let ledger = CsvLedger::new(config);

    ledger.ensure_created()?;

    let mut output = BufWriter::new(stdout().lock());
    cli::execute(&cli.command, &ledger, &mut output)?;
    output.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries command output (history is CSV), logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
