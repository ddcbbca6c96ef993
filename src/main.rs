//! Flight Tracker - flight status lookup in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::process::ExitCode;

use clap::Parser;
use flight_tracker::cli::Args;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    Ok(flight_tracker::run(args).await?)
}
