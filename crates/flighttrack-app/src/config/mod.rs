//! Configuration file parsing for Flight Tracker
//!
//! Supports `<config_dir>/flight-tracker/config.toml` (or a path given on
//! the command line).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
