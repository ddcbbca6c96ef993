//! Flight details card
//!
//! Shows the last found flight: number, airline, colored status, the
//! departure/arrival pair, and aircraft. Renders an empty-state hint when
//! there is no result.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use flighttrack_core::{Endpoint, FlightRecord};

use crate::theme::{icons::IconSet, styles};

pub const EMPTY_HINT: &str = "Enter a flight number above and press Enter to track it";

pub struct FlightCard<'a> {
    record: Option<&'a FlightRecord>,
    icons: IconSet,
}

impl<'a> FlightCard<'a> {
    pub fn new(record: Option<&'a FlightRecord>, icons: IconSet) -> Self {
        Self { record, icons }
    }
}

impl Widget for FlightCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let Some(record) = self.record else {
            render_empty(area, buf);
            return;
        };

        let block = styles::glass_block(false).title(" Flight Details ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        // Title, gap, five route rows, gap, aircraft; clipped from the bottom
        let title_row = row_slice(inner, 0, 1);
        let route_rows = row_slice(inner, 2, 5);
        let aircraft_row = row_slice(inner, 8, 1);

        if let Some(title_row) = title_row {
            render_title_row(record, title_row, buf);
        }
        if let Some(route_rows) = route_rows {
            self.render_route(record, route_rows, buf);
        }

        if let (Some(aircraft), Some(aircraft_row)) = (&record.aircraft, aircraft_row) {
            let line = Line::from(vec![
                Span::styled(" Aircraft: ", styles::label()),
                Span::styled(aircraft.as_str(), styles::text_secondary()),
            ]);
            buf.set_line(aircraft_row.x, aircraft_row.y, &line, aircraft_row.width);
        }
    }
}

impl FlightCard<'_> {
    fn render_route(&self, record: &FlightRecord, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let [departure, middle, arrival] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(endpoint_lines("Departure", &record.departure))
            .alignment(Alignment::Left)
            .render(pad_left(departure), buf);

        // Icon sits level with the airport codes
        if middle.height >= 2 {
            let row = Rect {
                y: middle.y + 1,
                height: 1,
                ..middle
            };
            Paragraph::new(Line::from(vec![
                Span::styled(self.icons.plane(), styles::accent()),
                Span::raw(" "),
                Span::styled(self.icons.route(), styles::text_muted()),
            ]))
            .alignment(Alignment::Center)
            .render(row, buf);
        }

        Paragraph::new(endpoint_lines("Arrival", &record.arrival))
            .alignment(Alignment::Right)
            .render(pad_right(arrival), buf);
    }
}

fn render_title_row(record: &FlightRecord, area: Rect, buf: &mut Buffer) {
    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(record.flight_number.as_str(), styles::text_bold()),
        Span::raw("  "),
        Span::styled(record.airline.as_str(), styles::text_secondary()),
    ]);
    buf.set_line(area.x, area.y, &left, area.width);

    let status = Line::from(Span::styled(
        format!("{} ", record.status_text()),
        styles::status_style(record.status.accent()),
    ));
    let status_width = status.width() as u16;
    // Status wins over the airline name on narrow screens
    if status_width <= area.width {
        let x = area.x + area.width - status_width;
        buf.set_line(x, area.y, &status, status_width);
    }
}

fn endpoint_lines<'a>(label: &'static str, endpoint: &'a Endpoint) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(label, styles::label())),
        Line::from(Span::styled(endpoint.airport.as_str(), styles::text_bold())),
        Line::from(Span::styled(endpoint.city.as_str(), styles::text_secondary())),
        Line::from(Span::styled(endpoint.time.as_str(), styles::text_primary())),
    ];
    if let Some(gate) = endpoint.gate_label() {
        lines.push(Line::from(Span::styled(gate, styles::accent())));
    }
    lines
}

fn render_empty(area: Rect, buf: &mut Buffer) {
    let y = area.y + area.height / 2;
    let row = Rect {
        y,
        height: 1,
        ..area
    };
    Paragraph::new(Span::styled(EMPTY_HINT, styles::text_muted()))
        .alignment(Alignment::Center)
        .render(row, buf);
}

/// Rows `offset..offset + height` of `area`, clipped; `None` when fully outside
fn row_slice(area: Rect, offset: u16, height: u16) -> Option<Rect> {
    if offset >= area.height {
        return None;
    }
    Some(Rect {
        y: area.y + offset,
        height: height.min(area.height - offset),
        ..area
    })
}

fn pad_left(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(1),
        ..area
    }
}

fn pad_right(area: Rect) -> Rect {
    Rect {
        width: area.width.saturating_sub(1),
        ..area
    }
}
