//! Test utilities for TUI rendering verification
//!
//! Helpers for testing widgets and full-screen rendering against ratatui's
//! TestBackend.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.draw_with(|frame| view(frame, &state));
//! assert!(term.buffer_contains("Flight Tracker"));
//! ```

use flighttrack_app::state::AppState;
use flighttrack_core::{normalize, FlightTable};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame (e.g. `render::view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere (within a single row)
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Foreground color of the first cell of the first occurrence of `text`
    pub fn fg_of(&self, text: &str) -> Option<Color> {
        let buffer = self.buffer();
        for y in 0..buffer.area.height {
            let line = get_line_content(buffer, y);
            if let Some(byte_idx) = line.find(text) {
                // Column = number of cells before the match
                let x = line[..byte_idx].chars().count() as u16;
                return buffer[(x, y)].style().fg;
            }
        }
        None
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState with a completed search for `code` (a demo flight)
pub fn state_with_result(code: &str) -> AppState {
    let mut state = AppState::new();
    let code = normalize(code).expect("non-blank code");
    let record = FlightTable::demo()
        .lookup(&code)
        .expect("demo flight")
        .clone();
    state.query.input = code.to_string();
    state.query.complete_found(record);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;
    use ratatui::text::Span;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::compact().area(), Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn test_buffer_contains_and_fg_of() {
        let mut term = TestTerminal::with_size(20, 2);
        term.render_widget(
            Span::styled("Hello World", Style::default().fg(Color::Red)),
            term.area(),
        );

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "World"));
        assert_eq!(term.fg_of("World"), Some(Color::Red));
        assert_eq!(term.fg_of("Goodbye"), None);
    }

    #[test]
    fn test_state_with_result() {
        let state = state_with_result("ua789");
        assert_eq!(
            state.query.result.as_ref().map(|r| r.flight_number.as_str()),
            Some("UA789")
        );
    }
}
