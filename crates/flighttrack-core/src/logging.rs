//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the default filter
pub const LOG_ENV_VAR: &str = "FLIGHTTRACK_LOG";

const LOG_FILE_NAME: &str = "flighttrack.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/flight-tracker/logs/` because the
/// terminal belongs to the TUI while it runs.
/// Log level is controlled by the `FLIGHTTRACK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FLIGHTTRACK_LOG=debug cargo run
/// FLIGHTTRACK_LOG=trace cargo run -- --headless AA123
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, warn for everything else
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Flight Tracker starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter directive used when `FLIGHTTRACK_LOG` is unset or invalid
fn default_filter() -> &'static str {
    "flighttrack=info,flight_tracker=info,flighttrack_core=info,flighttrack_app=info,flighttrack_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("flight-tracker").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_app_dir() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("flight-tracker/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter()).is_ok());
    }
}
