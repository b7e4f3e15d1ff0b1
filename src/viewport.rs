//! Desktop-versus-mobile layout decision.
//!
//! The threshold mirrors the usual web breakpoint: a viewport at most
//! 768 pixels wide is "mobile". Terminals that report a pixel size are
//! measured exactly; everything else is estimated from the column count.

/// Widths at or below this many pixels select [`ViewportMode::Mobile`].
pub const MOBILE_MAX_WIDTH_PX: u16 = 768;

/// Estimated glyph cell width when the terminal reports no pixel size.
pub const CELL_PX_ESTIMATE: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

/// Pure width-to-mode decision. No hysteresis band; rapid toggling around
/// the threshold is accepted behavior.
pub fn mode_for_width(width_px: u16) -> ViewportMode {
    if width_px <= MOBILE_MAX_WIDTH_PX {
        ViewportMode::Mobile
    } else {
        ViewportMode::Desktop
    }
}

/// Estimate a pixel width from a column count.
pub fn estimate_width_px(columns: u16) -> u16 {
    columns.saturating_mul(CELL_PX_ESTIMATE)
}

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub mode: ViewportMode,
    /// True the first time this mode is entered in the session. Default
    /// panels are opened only then; later re-entries must not re-open
    /// anything the user has closed since.
    pub first_entry: bool,
}

/// Tracks which modes have been entered across a session and applies an
/// optional forced mode from the command line.
#[derive(Debug)]
pub struct ViewportController {
    forced: Option<ViewportMode>,
    seen_desktop: bool,
    seen_mobile: bool,
}

impl ViewportController {
    pub fn new(forced: Option<ViewportMode>) -> Self {
        Self {
            forced,
            seen_desktop: false,
            seen_mobile: false,
        }
    }

    pub fn sample(&mut self, width_px: u16) -> Sample {
        let mode = self.forced.unwrap_or_else(|| mode_for_width(width_px));
        let first_entry = match mode {
            ViewportMode::Desktop => !std::mem::replace(&mut self.seen_desktop, true),
            ViewportMode::Mobile => !std::mem::replace(&mut self.seen_mobile, true),
        };
        Sample { mode, first_entry }
    }
}
