//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};
use flighttrack_app::state::{AppState, UiMode};

/// Render the complete UI (View function in TEA)
///
/// Pure function of `state`; the alert modal, when present, is drawn last
/// over everything else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = IconSet::new(state.settings.ui.icons);
    let mode = state.ui_mode();
    let areas = layout::create(area, state.settings.ui.show_demo_hint);

    frame.render_widget(widgets::MainHeader::new(icons), areas.header);

    frame.render_widget(
        widgets::SearchPanel::new(&state.query, icons)
            .spinner_frame(state.spinner.frame)
            .focused(mode == UiMode::Normal),
        areas.search,
    );

    frame.render_widget(
        widgets::FlightCard::new(state.query.result.as_ref(), icons),
        areas.card,
    );

    if let Some(hint_area) = areas.demo_hint {
        frame.render_widget(widgets::DemoHint::new(state.table, icons), hint_area);
    }

    frame.render_widget(widgets::KeyHints::new(mode), areas.footer);

    if let Some(alert) = &state.alert {
        frame.render_widget(widgets::AlertDialog::new(alert, icons), area);
    }
}
