mod engine;
mod error;
mod reader;
mod types;

use std::{path::PathBuf, process};

use clap::Parser;
use log::info;

use crate::{error::LedgerError, reader::summarize_path};

/// Sums the Bet and Payout rows of a semicolon-delimited transaction log.
#[derive(Parser)]
#[command(name = "ledger-summarizer")]
#[command(version)]
struct Args {
    /// Transaction log to read; its first 3 lines are skipped
    #[arg(default_value = "transactions.csv")]
    path: PathBuf,
}

fn run(args: Args) -> Result<(), LedgerError> {
    let summary = summarize_path(&args.path)?;

    info!(
        "{}: counted {} rows, skipped {}",
        args.path.display(),
        summary.counted,
        summary.skipped
    );
    println!("{summary}");
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("{err}");
        process::exit(1);
    }
}
