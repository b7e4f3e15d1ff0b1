//! The generic floating window: one draggable, minimizable, closable shell
//! reused by every panel type. Content rendering is injected by the desktop
//! shell; this module owns only position, minimize and drag state.

pub mod chrome;

use ratatui::prelude::Rect;

/// Signed floating rectangle origin with unsigned size. Origins may be
/// negative: windows can be dragged partially or fully off-screen and no
/// clamping is applied anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl FloatRect {
    /// The on-screen portion of this rect, if any.
    pub fn visible(&self, bounds: Rect) -> Option<Rect> {
        let bx0 = bounds.x as i32;
        let by0 = bounds.y as i32;
        let bx1 = bx0 + bounds.width as i32;
        let by1 = by0 + bounds.height as i32;
        let x0 = self.x.max(bx0);
        let y0 = self.y.max(by0);
        let x1 = (self.x + self.width as i32).min(bx1);
        let y1 = (self.y + self.height as i32).min(by1);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        })
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let c = column as i32;
        let r = row as i32;
        c >= self.x
            && c < self.x + self.width as i32
            && r >= self.y
            && r < self.y + self.height as i32
    }
}

/// Pointer offset from the window origin, captured when a title-bar drag
/// begins so the grab point stays under the pointer for the whole gesture.
#[derive(Debug, Clone, Copy)]
struct DragGrab {
    dx: i32,
    dy: i32,
}

#[derive(Debug)]
pub struct FloatWindow {
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    minimized: bool,
    drag: Option<DragGrab>,
}

impl FloatWindow {
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
            minimized: false,
            drag: None,
        }
    }

    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The window frame in screen space. A minimized window collapses its
    /// content region and keeps only the chrome rows; position is retained.
    pub fn frame(&self) -> FloatRect {
        let height = if self.minimized {
            chrome::CHROME_ROWS
        } else {
            self.height
        };
        FloatRect {
            x: self.x,
            y: self.y,
            width: self.width,
            height,
        }
    }

    /// The content region inside the chrome, or `None` while minimized.
    pub fn content(&self) -> Option<FloatRect> {
        if self.minimized {
            return None;
        }
        let inner_h = self.height.saturating_sub(chrome::CHROME_ROWS);
        let inner_w = self.width.saturating_sub(2);
        if inner_h == 0 || inner_w == 0 {
            return None;
        }
        Some(FloatRect {
            x: self.x + 1,
            y: self.y + 2,
            width: inner_w,
            height: inner_h,
        })
    }

    /// Begin a drag from a pointer position on the title bar, capturing the
    /// pointer offset from the window origin.
    pub fn begin_drag(&mut self, column: u16, row: u16) {
        self.drag = Some(DragGrab {
            dx: column as i32 - self.x,
            dy: row as i32 - self.y,
        });
    }

    /// Recompute the origin from the current pointer position. Events are
    /// applied in arrival order; the last write wins. No-op while idle.
    pub fn drag_to(&mut self, column: u16, row: u16) {
        if let Some(grab) = self.drag {
            self.x = column as i32 - grab.dx;
            self.y = row as i32 - grab.dy;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}
