//! Alert modal for invalid input and unknown flights

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use flighttrack_app::alert::{AlertKind, AlertState};

use super::modal_overlay;
use crate::theme::{icons::IconSet, styles};

const DIALOG_WIDTH: u16 = 50;
pub const DISMISS_LABEL: &str = " OK ";

/// Renders over the whole screen: dims it and centers the dialog.
pub struct AlertDialog<'a> {
    alert: &'a AlertState,
    icons: IconSet,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a AlertState, icons: IconSet) -> Self {
        Self { alert, icons }
    }

    /// Message lines after wrapping to the dialog's inner width
    fn message_height(&self, inner_width: u16) -> u16 {
        if inner_width == 0 {
            return 1;
        }
        let chars = self.alert.message.chars().count() as u16;
        // Word wrap may need a line more than the plain division
        chars.div_ceil(inner_width) + 1
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = DIALOG_WIDTH.min(area.width);
        let inner_width = width.saturating_sub(4);
        // border + message + gap + button + border
        let height = self.message_height(inner_width) + 4;

        let modal = modal_overlay::prepare_modal(buf, area, width, height);

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.alert(), styles::status_style(accent(self.alert.kind))),
            Span::raw(" "),
            Span::styled(self.alert.title.as_str(), styles::text_bold()),
            Span::raw(" "),
        ]);
        let block = styles::modal_block(title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }
        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        let message_rows = content.height.saturating_sub(2).max(1);
        Paragraph::new(Span::styled(
            self.alert.message.as_str(),
            styles::text_primary(),
        ))
        .wrap(Wrap { trim: true })
        .render(
            Rect {
                height: message_rows,
                ..content
            },
            buf,
        );

        if content.height >= 3 {
            let button_row = Rect {
                y: content.y + content.height - 1,
                height: 1,
                ..content
            };
            Paragraph::new(Line::from(Span::styled(DISMISS_LABEL, styles::button(false))))
                .alignment(Alignment::Right)
                .render(button_row, buf);
        }
    }
}

fn accent(kind: AlertKind) -> flighttrack_core::StatusAccent {
    match kind {
        AlertKind::InvalidInput => flighttrack_core::StatusAccent::Orange,
        AlertKind::NotFound => flighttrack_core::StatusAccent::Red,
    }
}
