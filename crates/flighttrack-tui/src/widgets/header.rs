//! Header bar widget
//!
//! App title with the plane icon and the tagline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

pub const TITLE: &str = "Flight Tracker";
pub const SUBTITLE: &str = "Track your flight status in real-time";

/// Main header showing app title and subtitle
pub struct MainHeader {
    icons: IconSet,
}

impl MainHeader {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.plane(), styles::accent()),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Subtitle goes right of the title when it fits, otherwise it is dropped
        let subtitle_x = inner.x + title_width + 2;
        let subtitle_width = SUBTITLE.chars().count() as u16;
        if subtitle_x + subtitle_width <= inner.x + inner.width {
            buf.set_span(
                subtitle_x,
                inner.y,
                &Span::styled(SUBTITLE, styles::text_secondary()),
                subtitle_width,
            );
        }
    }
}
