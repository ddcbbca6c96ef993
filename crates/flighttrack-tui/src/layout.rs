//! Screen layout definitions for the TUI
//!
//! Top to bottom: header, search panel, flight card (takes the remaining
//! space), optional demo instructions, key hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const SEARCH_HEIGHT: u16 = 5;
pub const DEMO_HINT_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and subtitle
    pub header: Rect,

    /// Flight number input and "Track Flight" button
    pub search: Rect,

    /// Flight details card
    pub card: Rect,

    /// Demo instructions panel, when enabled
    pub demo_hint: Option<Rect>,

    /// Keybinding hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_demo_hint: bool) -> ScreenAreas {
    let mut constraints = vec![
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(0),
    ];
    if show_demo_hint {
        constraints.push(Constraint::Length(DEMO_HINT_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let chunks = Layout::vertical(constraints).split(area);

    let (demo_hint, footer) = if show_demo_hint {
        (Some(chunks[3]), chunks[4])
    } else {
        (None, chunks[3])
    };

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        card: chunks[2],
        demo_hint,
        footer,
    }
}
