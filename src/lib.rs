//! Flight Tracker Library
//!
//! Binary-side wiring: command-line arguments, startup (logging, config),
//! and the headless NDJSON mode. The screen itself lives in the
//! `flighttrack-app` and `flighttrack-tui` crates.

pub mod cli;
pub mod headless;

use std::process::ExitCode;

use cli::Args;
use flighttrack_app::config::{self, Settings};
use flighttrack_core::prelude::*;

/// Resolve the config path from `--config` or the platform default
pub fn config_path(args: &Args) -> Option<std::path::PathBuf> {
    args.config.clone().or_else(config::default_config_path)
}

/// Load settings from the config file and apply command-line overrides
pub fn load_settings(args: &Args) -> Settings {
    let mut settings = match config_path(args) {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("Could not determine config directory, using defaults");
            Settings::default()
        }
    };
    args.apply_overrides(&mut settings);
    settings
}

/// Main application entry point
pub async fn run(args: Args) -> Result<ExitCode> {
    // Initialize logging (to file, since the TUI owns the terminal)
    flighttrack_core::logging::init()?;

    if args.init_config {
        return init_config(&args);
    }

    let settings = load_settings(&args);
    info!("Settings: {:?}", settings);

    let result = match (args.headless, args.flight) {
        (true, Some(flight)) => headless::run_headless(settings, &flight)
            .await
            .map(|outcome| outcome.exit_code()),
        (_, flight) => flighttrack_tui::run(settings, flight).map(|()| ExitCode::SUCCESS),
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

fn init_config(args: &Args) -> Result<ExitCode> {
    let path = config_path(args)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if config::init_config_file(&path)? {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}
