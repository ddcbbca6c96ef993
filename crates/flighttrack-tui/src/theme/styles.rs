//! Semantic style builders for the flight tracker screen.

use flighttrack_core::StatusAccent;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    text_primary().add_modifier(Modifier::BOLD)
}

/// Small uppercase-ish labels ("Departure", "Arrival")
pub fn label() -> Style {
    text_muted().add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_ORANGE)
}

// --- Input and button ---
pub fn input_text() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::INPUT_BG)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(palette::TEXT_MUTED).bg(palette::INPUT_BG)
}

/// "Track Flight" button; greyed out while a search is outstanding
pub fn button(busy: bool) -> Style {
    let bg = if busy {
        palette::BUTTON_BUSY_BG
    } else {
        palette::ACCENT
    };
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---

/// Terminal color for a status accent
pub fn status_style(accent: StatusAccent) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match accent {
        StatusAccent::Green => style.fg(palette::STATUS_GREEN),
        StatusAccent::Orange => style.fg(palette::STATUS_ORANGE),
        StatusAccent::Red => style.fg(palette::STATUS_RED),
        StatusAccent::Blue => style.fg(palette::STATUS_BLUE),
        StatusAccent::Neutral => style.fg(palette::TEXT_SECONDARY),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
