//! `UiFrame`: a thin wrapper around the terminal buffer that clamps drawing
//! to a visible area.
//!
//! Floating windows are allowed to drift partially or fully off-screen, so
//! panel code regularly computes rectangles that fall outside the terminal
//! buffer. Writing out of bounds into a `Buffer` panics; `UiFrame` clips
//! every draw call instead so panels never have to guard their own geometry.
//!
//! Windows render into an offscreen buffer sized to their logical frame and
//! are then composited onto the screen with [`UiFrame::blit_signed`], which
//! accepts a signed destination origin.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::window::FloatRect;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer. Used for the
    /// offscreen window surfaces composited by the desktop shell.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Composite `src` onto this frame at a signed destination origin,
    /// skipping every cell that lands outside the visible area.
    pub fn blit_signed(&mut self, src: &Buffer, dest: FloatRect) {
        let x0 = self.area.x as i32;
        let y0 = self.area.y as i32;
        let x1 = x0 + self.area.width as i32;
        let y1 = y0 + self.area.height as i32;
        for sy in 0..dest.height as i32 {
            let dy = dest.y + sy;
            if dy < y0 || dy >= y1 {
                continue;
            }
            for sx in 0..dest.width as i32 {
                let dx = dest.x + sx;
                if dx < x0 || dx >= x1 {
                    continue;
                }
                if let (Some(src_cell), Some(dst_cell)) = (
                    src.cell((sx as u16, sy as u16)),
                    self.buffer.cell_mut((dx as u16, dy as u16)),
                ) {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }
}

/// Write a string into the buffer, truncated to the right edge of `bounds`.
pub fn safe_set_string(buffer: &mut Buffer, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
    if y < bounds.y || y >= bounds.y.saturating_add(bounds.height) {
        return;
    }
    let mut cx = x;
    let right = bounds.x.saturating_add(bounds.width);
    for ch in text.chars() {
        if cx < bounds.x {
            cx = cx.saturating_add(1);
            continue;
        }
        if cx >= right {
            break;
        }
        if let Some(cell) = buffer.cell_mut((cx, y)) {
            cell.set_char(ch);
            cell.set_style(style);
        }
        cx = cx.saturating_add(1);
    }
}

/// Truncate `text` to at most `width` characters, appending an ellipsis when
/// anything was cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
