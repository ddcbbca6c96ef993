//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use flighttrack_app::config::Settings;

/// Flight Tracker - look up flight status from the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "flighttrack")]
#[command(about = "Look up flight status in a terminal UI", long_about = None)]
pub struct Args {
    /// Flight number to look up (e.g. AA123). In TUI mode the search starts
    /// immediately.
    #[arg(value_name = "FLIGHT")]
    pub flight: Option<String>,

    /// Run one lookup without the TUI and print NDJSON events to stdout
    #[arg(long, requires = "flight")]
    pub headless: bool,

    /// Simulated lookup latency in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default config file (if none exists) and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of file settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(delay_ms) = self.delay_ms {
            settings.lookup.delay_ms = delay_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_flight() {
        let args = Args::try_parse_from(["flighttrack", "aa123"]).unwrap();
        assert_eq!(args.flight.as_deref(), Some("aa123"));
        assert!(!args.headless);
    }

    #[test]
    fn test_headless_requires_flight() {
        assert!(Args::try_parse_from(["flighttrack", "--headless"]).is_err());
        assert!(Args::try_parse_from(["flighttrack", "--headless", "DL456"]).is_ok());
    }

    #[test]
    fn test_delay_override() {
        let args = Args::try_parse_from(["flighttrack", "--delay-ms", "5"]).unwrap();
        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);
        assert_eq!(settings.lookup.delay_ms, 5);
    }

    #[test]
    fn test_no_override_keeps_file_value() {
        let args = Args::try_parse_from(["flighttrack"]).unwrap();
        let mut settings = Settings::default();
        settings.lookup.delay_ms = 300;
        args.apply_overrides(&mut settings);
        assert_eq!(settings.lookup.delay_ms, 300);
    }
}
