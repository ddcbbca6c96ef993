//! Color palette for the flight tracker screen.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const INPUT_BG: Color = Color::Rgb(22, 27, 34);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Rgb(0, 122, 255); // iOS system blue

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(0, 122, 255);
pub const CONTRAST_FG: Color = Color::White;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Flight status ---
pub const STATUS_GREEN: Color = Color::Rgb(52, 199, 89);
pub const STATUS_ORANGE: Color = Color::Rgb(255, 149, 0);
pub const STATUS_RED: Color = Color::Rgb(255, 59, 48);
pub const STATUS_BLUE: Color = Color::Rgb(0, 122, 255);

// --- Effects ---
pub const SHADOW: Color = Color::Black;
pub const BUTTON_BUSY_BG: Color = Color::DarkGray;
