//! Footer line with keybinding hints for the current mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use flighttrack_app::state::UiMode;

use crate::theme::styles;

pub struct KeyHints {
    mode: UiMode,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => &[
                ("Enter", "Track"),
                ("Ctrl+U", "Clear"),
                ("Esc", "Clear/Quit"),
                ("Ctrl+C", "Quit"),
            ],
            UiMode::Alert => &[("Enter", "OK"), ("Esc", "Dismiss")],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.bindings() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {action}  "), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
