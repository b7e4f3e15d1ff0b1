//! Desk sidebar: clock, date and the current moon phase, drawn in the
//! top-left corner of the desktop.

use chrono::{Local, NaiveDate};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme::Palette;
use crate::ui::{UiFrame, safe_set_string};

/// Synodic month in days.
const LUNAR_CYCLE: f64 = 29.53;

/// A known new moon used as the phase origin.
const EPOCH: (i32, u32, u32) = (2000, 1, 6);

const PHASES: [(&str, &str); 8] = [
    ("●", "new moon"),
    ("◔", "waxing crescent"),
    ("◑", "first quarter"),
    ("◕", "waxing gibbous"),
    ("○", "full moon"),
    ("◕", "waning gibbous"),
    ("◑", "last quarter"),
    ("◔", "waning crescent"),
];

/// Maps a date onto one of the eight named moon phases.
pub fn moon_phase(date: NaiveDate) -> (&'static str, &'static str) {
    let (y, m, d) = EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(date);
    let days = (date - epoch).num_days() as f64;
    let age = days.rem_euclid(LUNAR_CYCLE);
    let slot = ((age / LUNAR_CYCLE) * 8.0).floor() as usize % 8;
    PHASES[slot]
}

pub fn render(frame: &mut UiFrame<'_>, area: Rect, palette: &Palette) {
    let now = Local::now();
    let bounds = frame.area();
    let x = area.x + 2;
    let y = area.y + 1;

    let clock = now.format("%H:%M").to_string();
    safe_set_string(
        frame.buffer_mut(),
        bounds,
        x,
        y,
        &clock,
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    );

    let date = now.format("%a %d %b").to_string();
    safe_set_string(
        frame.buffer_mut(),
        bounds,
        x,
        y + 1,
        &date,
        Style::default().fg(palette.text_dim),
    );

    let (glyph, name) = moon_phase(now.date_naive());
    safe_set_string(
        frame.buffer_mut(),
        bounds,
        x,
        y + 2,
        &format!("{glyph} {name}"),
        Style::default().fg(palette.text_dim),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_a_new_moon() {
        assert_eq!(moon_phase(date(2000, 1, 6)).1, "new moon");
    }

    #[test]
    fn half_a_cycle_later_is_full() {
        assert_eq!(moon_phase(date(2000, 1, 21)).1, "full moon");
    }

    #[test]
    fn phase_wraps_across_cycles() {
        // 296 days is just past ten full cycles.
        assert_eq!(moon_phase(date(2000, 10, 28)).1, "new moon");
    }

    #[test]
    fn dates_before_the_epoch_still_resolve() {
        let (_, name) = moon_phase(date(1999, 12, 22));
        assert!(PHASES.iter().any(|(_, n)| *n == name));
    }
}
