//! Bottom dock: one launcher per window, centered on the last terminal
//! row. Open windows get a marker under their label.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::registry::{PanelId, Registry};
use crate::theme::Palette;
use crate::ui::{UiFrame, safe_set_string};

/// Launchers shown in the dock, in display order. The case study window
/// has no launcher; it is only reachable from the project gallery.
pub const DOCK_ENTRIES: [PanelId; 5] = [
    PanelId::About,
    PanelId::Playlist,
    PanelId::Experience,
    PanelId::Projects,
    PanelId::Chatbot,
];

const GAP: u16 = 2;

fn label(id: PanelId) -> &'static str {
    match id {
        PanelId::About => " about ",
        PanelId::Playlist => " playlist ",
        PanelId::Experience => " experience ",
        PanelId::Projects => " projects ",
        PanelId::CaseStudy => " case study ",
        PanelId::Chatbot => " chat ",
    }
}

fn entry_spans(area: Rect) -> Vec<(PanelId, u16, u16)> {
    let total: u16 = DOCK_ENTRIES
        .iter()
        .map(|id| label(*id).len() as u16)
        .sum::<u16>()
        + GAP * (DOCK_ENTRIES.len() as u16 - 1);
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let mut spans = Vec::with_capacity(DOCK_ENTRIES.len());
    for id in DOCK_ENTRIES {
        let width = label(id).len() as u16;
        spans.push((id, x, width));
        x += width + GAP;
    }
    spans
}

/// Row the dock occupies within `area`.
pub fn dock_row(area: Rect) -> u16 {
    area.y + area.height.saturating_sub(1)
}

/// Maps a click to the launcher under it, if any.
pub fn hit_test(area: Rect, col: u16, row: u16) -> Option<PanelId> {
    if row != dock_row(area) {
        return None;
    }
    entry_spans(area)
        .into_iter()
        .find(|(_, x, width)| col >= *x && col < x + width)
        .map(|(id, _, _)| id)
}

pub fn render(frame: &mut UiFrame<'_>, area: Rect, registry: &Registry, palette: &Palette) {
    let row = dock_row(area);
    let bounds = frame.area();
    for (id, x, _) in entry_spans(area) {
        let open = registry.is_open(id);
        let style = if open {
            Style::default()
                .bg(palette.chip_bg)
                .fg(palette.chip_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(palette.desktop_bg)
                .fg(palette.text_dim)
        };
        safe_set_string(frame.buffer_mut(), bounds, x, row, label(id), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        }
    }

    #[test]
    fn every_launcher_is_hittable() {
        for (id, x, width) in entry_spans(area()) {
            assert_eq!(hit_test(area(), x, 29), Some(id));
            assert_eq!(hit_test(area(), x + width - 1, 29), Some(id));
        }
    }

    #[test]
    fn gaps_and_other_rows_miss() {
        let spans = entry_spans(area());
        let (_, first_x, first_width) = spans[0];
        assert_eq!(hit_test(area(), first_x + first_width, 29), None);
        assert_eq!(hit_test(area(), first_x, 28), None);
    }

    #[test]
    fn case_study_has_no_launcher() {
        assert!(!DOCK_ENTRIES.contains(&PanelId::CaseStudy));
    }
}
