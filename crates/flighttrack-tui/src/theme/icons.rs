//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use flighttrack_app::config::IconMode;

/// Braille spinner used in both modes
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn plane(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f072}", // nf-fa-plane
            IconMode::Unicode => "\u{2708}",   // ✈
        }
    }

    /// Between departure and arrival
    pub fn route(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f061}", // nf-fa-arrow_right
            IconMode::Unicode => "\u{2192}",   // →
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    /// Spinner glyph for an animation frame counter
    pub fn spinner(&self, frame: u64) -> &'static str {
        SPINNER_FRAMES[(frame % SPINNER_FRAMES.len() as u64) as usize]
    }
}
