//! Help overlay. The text ships inside the binary; see `build.rs`.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::markdown;
use crate::theme::Palette;
use crate::ui::UiFrame;

include!(concat!(env!("OUT_DIR"), "/generated_help.rs"));

const MAX_WIDTH: u16 = 54;
const MAX_HEIGHT: u16 = 20;

/// Centered rect the overlay occupies within `area`.
pub fn overlay_rect(area: Rect) -> Rect {
    let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(1);
    let height = MAX_HEIGHT.min(area.height.saturating_sub(2)).max(1);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

pub fn render(frame: &mut UiFrame<'_>, area: Rect, palette: &Palette) {
    let overlay = overlay_rect(area);
    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.window_border_focused))
        .style(Style::default().bg(palette.window_bg))
        .title(" help ");
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(
        Paragraph::new(markdown::lines(EMBEDDED_HELP, palette)),
        inner,
    );
}
