//! One-shot onboarding hint shown on the first frame. It fades out on a
//! timer or as soon as the visitor does anything.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme::Palette;
use crate::ui::{UiFrame, safe_set_string};

const TEXT: &str = "drag the windows around · press ? for help";
const VISIBLE_FOR: Duration = Duration::from_secs(8);

#[derive(Debug)]
pub struct Hint {
    deadline: Instant,
    dismissed: bool,
}

impl Hint {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(start: Instant) -> Self {
        Self {
            deadline: start + VISIBLE_FOR,
            dismissed: false,
        }
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn visible_at(&self, now: Instant) -> bool {
        !self.dismissed && now < self.deadline
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect, palette: &Palette) {
        if !self.visible_at(Instant::now()) {
            return;
        }
        let x = area.x + area.width.saturating_sub(TEXT.chars().count() as u16) / 2;
        let y = area.y + area.height.saturating_sub(3);
        let bounds = frame.area();
        safe_set_string(
            frame.buffer_mut(),
            bounds,
            x,
            y,
            TEXT,
            Style::default()
                .fg(palette.text_dim)
                .add_modifier(Modifier::ITALIC),
        );
    }
}

impl Default for Hint {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_expires_on_its_own() {
        let start = Instant::now();
        let hint = Hint::starting_at(start);
        assert!(hint.visible_at(start + Duration::from_secs(1)));
        assert!(!hint.visible_at(start + VISIBLE_FOR));
    }

    #[test]
    fn any_interaction_dismisses_it_for_good() {
        let start = Instant::now();
        let mut hint = Hint::starting_at(start);
        hint.dismiss();
        assert!(!hint.visible_at(start + Duration::from_millis(1)));
    }
}
