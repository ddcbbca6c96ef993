//! Search panel widget
//!
//! Flight number input with placeholder, and the "Track Flight" button that
//! turns into a spinner while a search is outstanding.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use flighttrack_app::query::QueryState;

use crate::theme::{icons::IconSet, styles};

pub const PANEL_TITLE: &str = " Search Flight ";
pub const PLACEHOLDER: &str = "Enter flight number (e.g., AA123)";
pub const BUTTON_LABEL: &str = "Track Flight";
pub const BUSY_LABEL: &str = "Searching...";

/// Input cursor glyph
const CURSOR: &str = "▏";

/// Cells taken by the search icon prompt
const PROMPT_WIDTH: usize = 3;

pub struct SearchPanel<'a> {
    query: &'a QueryState,
    icons: IconSet,
    spinner_frame: u64,
    /// Input has keyboard focus (false while an alert is shown)
    focused: bool,
}

impl<'a> SearchPanel<'a> {
    pub fn new(query: &'a QueryState, icons: IconSet) -> Self {
        Self {
            query,
            icons,
            spinner_frame: 0,
            focused: true,
        }
    }

    pub fn spinner_frame(mut self, frame: u64) -> Self {
        self.spinner_frame = frame;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Input row for a field `width` cells wide. Text that does not fit is
    /// scrolled so the end and the cursor stay visible.
    fn input_line(&self, width: u16) -> Line<'a> {
        let prompt = Span::styled(format!(" {} ", self.icons.search()), styles::accent());
        let mut spans = vec![prompt];
        if self.query.input.is_empty() {
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            spans.push(Span::styled(PLACEHOLDER, styles::input_placeholder()));
        } else {
            let cursor_width = usize::from(self.focused);
            let room = (width as usize).saturating_sub(PROMPT_WIDTH + cursor_width);
            spans.push(Span::styled(
                visible_tail(&self.query.input, room),
                styles::input_text(),
            ));
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
        }
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'static> {
        let busy = self.query.is_busy();
        let label = if busy {
            format!("  {} {}  ", self.icons.spinner(self.spinner_frame), BUSY_LABEL)
        } else {
            format!("  {} {}  ", self.icons.plane(), BUTTON_LABEL)
        };
        Line::from(Span::styled(label, styles::button(busy)))
    }
}

impl Widget for SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(PANEL_TITLE)
            .title_style(styles::text_bold());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Input row with its own background
        let input_area = Rect { height: 1, ..inner };
        buf.set_style(input_area, styles::input_text());
        buf.set_line(inner.x, inner.y, &self.input_line(inner.width), inner.width);

        // Button on the last inner row, right-aligned
        if inner.height >= 2 {
            let button_area = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            Paragraph::new(self.button_line())
                .alignment(Alignment::Right)
                .render(button_area, buf);
        }
    }
}

/// Last `room` characters of `input`
fn visible_tail(input: &str, room: usize) -> &str {
    let len = input.chars().count();
    if len <= room {
        return input;
    }
    match input.char_indices().nth(len - room) {
        Some((idx, _)) => &input[idx..],
        None => "",
    }
}
