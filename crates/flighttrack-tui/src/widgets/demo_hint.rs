//! Demo instructions panel listing the sample flight numbers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use flighttrack_core::FlightTable;

use crate::theme::{icons::IconSet, styles};

pub const PANEL_TITLE: &str = " Demo Instructions ";

pub struct DemoHint<'a> {
    table: &'a FlightTable,
    icons: IconSet,
}

impl<'a> DemoHint<'a> {
    pub fn new(table: &'a FlightTable, icons: IconSet) -> Self {
        Self { table, icons }
    }

    /// "Try searching for these sample flights: AA123, DL456, or UA789 to see ..."
    pub fn text(&self) -> String {
        let codes = self.table.demo_codes();
        let list = match codes.as_slice() {
            [] => return "No sample flights are loaded.".to_string(),
            [only] => only.to_string(),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        };
        format!(
            "Try searching for these sample flights: {list} to see different flight statuses and information."
        )
    }
}

impl Widget for DemoHint<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.info(), styles::accent()),
                Span::styled(PANEL_TITLE, styles::text_bold()),
            ]));
        Paragraph::new(Span::styled(self.text(), styles::text_secondary()))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
