//! Modal overlay helpers: centering, background dimming, and drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area.
///
/// ```
/// use ratatui::layout::Rect;
/// use flighttrack_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so the screen behind a modal reads as inactive.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    buf.set_style(area.intersection(buf.area), dim_style);
}

/// 1-cell shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = Rect::new(modal.right(), modal.y.saturating_add(1), 1, modal.height);
    let bottom = Rect::new(modal.x.saturating_add(1), modal.bottom(), modal.width, 1);

    for edge in [right, bottom] {
        let edge = edge.intersection(buf.area);
        for position in edge.positions() {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ');
                cell.set_style(shadow_style);
            }
        }
    }
}

/// Dim `screen`, draw the shadow, and clear a centered `width` x `height`
/// rect for modal content. Returns the cleared rect.
pub fn prepare_modal(buf: &mut Buffer, screen: Rect, width: u16, height: u16) -> Rect {
    dim_background(buf, screen);
    let modal = centered_rect(width, height, screen);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
    modal
}
