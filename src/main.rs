mod engine;
mod models;
mod report;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::Path;
use std::process::exit;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::storage::TransactionStore;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: capital-gains-report [export].csv [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: warn)");
        exit(1);
    }

    let path = Path::new(&args[1]);
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(DEFAULT_LOG_LEVEL);

    setup_logging(log_level);

    // NOTE: The whole export is read before anything is written, a bad value never leaves a partial report
    let store = engine::import_transactions(path)?;

    write_report_to_stdout(store)?;

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
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            DEFAULT_LOG_LEVEL
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // NOTE: stdout carries the report, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(mut store: TransactionStore) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    report::write_report(&mut store, &mut output)?;

    output.flush()?;

    Ok(())
}
