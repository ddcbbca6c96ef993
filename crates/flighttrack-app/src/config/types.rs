//! Configuration types for Flight Tracker

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub lookup: LookupSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Lookup behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupSettings {
    /// Simulated latency before a result is shown, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl LookupSettings {
    /// Smallest delay ever used; a search always takes a perceptible, non-zero time
    pub const MIN_DELAY_MS: u64 = 1;

    /// Configured delay, clamped to [`Self::MIN_DELAY_MS`]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.max(Self::MIN_DELAY_MS))
    }
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Show the demo instructions panel listing the sample codes
    #[serde(default = "default_true")]
    pub show_demo_hint: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_demo_hint: true,
        }
    }
}
