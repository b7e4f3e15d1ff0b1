//! Window chrome: border, title bar and the minimize/close controls.
//!
//! The title bar is the second row of the frame (inside the border), in
//! the style of the original desk: title on the left, `[-]` and `[x]`
//! controls on the right. Hit-testing and rendering share the same
//! geometry constants so the two cannot drift.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::FloatRect;
use crate::theme::Palette;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// Rows consumed by chrome: top border, title bar, bottom border.
pub const CHROME_ROWS: u16 = 3;

/// Minimum frame width for the controls to be drawn and clickable.
pub const MIN_CONTROL_WIDTH: u16 = 12;

// Both controls are three cells wide, right-aligned in the title bar.
const CLOSE_SPAN: (u16, u16) = (4, 3); // offset back from the right border, width
const MINIMIZE_SPAN: (u16, u16) = (8, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    /// Draggable region of the title bar.
    TitleBar,
    Minimize,
    Close,
    /// Anything else inside the frame; raises the window but never drags.
    Body,
}

/// Classify a pointer position against a window frame.
pub fn hit_test(frame: FloatRect, column: u16, row: u16) -> Option<ChromeHit> {
    if !frame.contains(column, row) {
        return None;
    }
    let title_row = frame.y + 1;
    if row as i32 != title_row {
        return Some(ChromeHit::Body);
    }
    let rel = (column as i32 - frame.x) as u16;
    if frame.width >= MIN_CONTROL_WIDTH {
        let (close_back, close_w) = CLOSE_SPAN;
        let close_start = frame.width - close_back;
        if rel >= close_start && rel < close_start + close_w {
            return Some(ChromeHit::Close);
        }
        let (min_back, min_w) = MINIMIZE_SPAN;
        let min_start = frame.width - min_back;
        if rel >= min_start && rel < min_start + min_w {
            return Some(ChromeHit::Minimize);
        }
    }
    if rel == 0 || rel == frame.width - 1 {
        // side borders of the title row are not a drag handle
        return Some(ChromeHit::Body);
    }
    Some(ChromeHit::TitleBar)
}

/// Draw the chrome into a window-local frame (origin at 0,0).
pub fn render(
    frame: &mut UiFrame<'_>,
    area: Rect,
    title: &str,
    focused: bool,
    minimized: bool,
    palette: &Palette,
) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let border_style = if focused {
        Style::default().fg(palette.window_border_focused)
    } else {
        Style::default().fg(palette.window_border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(palette.window_bg));
    frame.render_widget(block, area);

    if area.height < CHROME_ROWS {
        return;
    }
    let bar_style = if focused {
        Style::default()
            .bg(palette.title_bar_focused_bg)
            .fg(palette.title_bar_focused_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(palette.title_bar_bg).fg(palette.title_bar_fg)
    };
    let bar_y = area.y + 1;
    let buffer = frame.buffer_mut();
    for x in area.x + 1..area.x + area.width - 1 {
        if let Some(cell) = buffer.cell_mut((x, bar_y)) {
            cell.set_char(' ');
            cell.set_style(bar_style);
        }
    }

    let controls_reserved = if area.width >= MIN_CONTROL_WIDTH {
        MINIMIZE_SPAN.0 as usize
    } else {
        2
    };
    let title_width = (area.width as usize).saturating_sub(2 + controls_reserved);
    let text = truncate_to_width(title, title_width);
    safe_set_string(buffer, area, area.x + 2, bar_y, &text, bar_style);

    if area.width >= MIN_CONTROL_WIDTH {
        let minimize_label = if minimized { "[+]" } else { "[-]" };
        let min_x = area.x + area.width - MINIMIZE_SPAN.0;
        let close_x = area.x + area.width - CLOSE_SPAN.0;
        safe_set_string(buffer, area, min_x, bar_y, minimize_label, bar_style);
        safe_set_string(buffer, area, close_x, bar_y, "[x]", bar_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FloatRect {
        FloatRect {
            x: 10,
            y: 5,
            width: 30,
            height: 12,
        }
    }

    #[test]
    fn outside_the_frame_misses() {
        assert_eq!(hit_test(frame(), 9, 6), None);
        assert_eq!(hit_test(frame(), 10, 17), None);
    }

    #[test]
    fn title_row_drags_except_controls() {
        let f = frame();
        assert_eq!(hit_test(f, 15, 6), Some(ChromeHit::TitleBar));
        // close spans the last three cells before the right border
        let close_x = f.x as u16 + f.width - 4;
        assert_eq!(hit_test(f, close_x, 6), Some(ChromeHit::Close));
        assert_eq!(hit_test(f, close_x + 2, 6), Some(ChromeHit::Close));
        let min_x = f.x as u16 + f.width - 8;
        assert_eq!(hit_test(f, min_x, 6), Some(ChromeHit::Minimize));
        assert_eq!(hit_test(f, min_x + 2, 6), Some(ChromeHit::Minimize));
    }

    #[test]
    fn body_rows_raise_without_dragging() {
        let f = frame();
        assert_eq!(hit_test(f, 20, 10), Some(ChromeHit::Body));
        assert_eq!(hit_test(f, 10, 5), Some(ChromeHit::Body)); // top border
        assert_eq!(hit_test(f, 10, 6), Some(ChromeHit::Body)); // left border on title row
    }

    #[test]
    fn narrow_frames_drop_the_controls() {
        let f = FloatRect {
            x: 0,
            y: 0,
            width: 10,
            height: 5,
        };
        // everything on the title row except the borders drags
        assert_eq!(hit_test(f, 7, 1), Some(ChromeHit::TitleBar));
        assert_eq!(hit_test(f, 9, 1), Some(ChromeHit::Body));
    }
}
