//! The playlist window. Chrome only: a static track list with a selected
//! row that pretends to be the one playing. Actual audio playback is out
//! of scope.

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{PanelContext, PanelRequest, PanelView};
use crate::content;
use crate::ui::UiFrame;

#[derive(Debug, Default)]
pub struct PlaylistPanel {
    current: usize,
}

impl PlaylistPanel {
    pub fn current(&self) -> usize {
        self.current
    }
}

impl PanelView for PlaylistPanel {
    fn title(&self) -> String {
        "playlist.exe".to_string()
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PanelContext<'_>) {
        let palette = ctx.palette;
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            format!("♪ {}", content::PLAYLIST_NAME),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        for (idx, (track, artist)) in content::PLAYLIST_TRACKS.iter().enumerate() {
            let playing = idx == self.current;
            let marker = if playing { "▸ " } else { "  " };
            let style = if playing {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            lines.push(Line::from(vec![
                Span::styled(marker.to_string(), style),
                Span::styled((*track).to_string(), style),
                Span::styled(format!("  {artist}"), Style::default().fg(palette.text_dim)),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(
        &mut self,
        event: &Event,
        area: Rect,
        _ctx: &PanelContext<'_>,
    ) -> Option<PanelRequest> {
        // clicking a track row selects it
        if let Event::Mouse(mouse) = event
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && mouse.row > area.y + 1
        {
            let idx = (mouse.row - area.y - 2) as usize;
            if idx < content::PLAYLIST_TRACKS.len() {
                self.current = idx;
            }
        }
        None
    }
}
