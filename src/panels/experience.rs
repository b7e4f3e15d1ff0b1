//! Work experience window: one card per role, scrollable with the mouse
//! wheel.

use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{PanelContext, PanelRequest, PanelView};
use crate::content;
use crate::ui::UiFrame;

#[derive(Debug, Default)]
pub struct ExperiencePanel {
    scroll: u16,
}

impl ExperiencePanel {
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn total_lines() -> u16 {
        // role + company/period + highlights + trailing blank, per entry
        content::EXPERIENCE
            .iter()
            .map(|entry| 3 + entry.highlights.len() as u16)
            .sum()
    }

    fn max_scroll(view_height: u16) -> u16 {
        Self::total_lines().saturating_sub(view_height)
    }
}

impl PanelView for ExperiencePanel {
    fn title(&self) -> String {
        "experience.exe".to_string()
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PanelContext<'_>) {
        let palette = ctx.palette;
        self.scroll = self.scroll.min(Self::max_scroll(area.height));
        let mut lines: Vec<Line> = Vec::new();
        for entry in content::EXPERIENCE {
            lines.push(Line::from(Span::styled(
                entry.role,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled(entry.company, Style::default().fg(palette.accent)),
                Span::styled(
                    format!("  {}", entry.period),
                    Style::default().fg(palette.text_dim),
                ),
            ]));
            for highlight in entry.highlights {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(palette.accent)),
                    Span::styled(*highlight, Style::default().fg(palette.text)),
                ]));
            }
            lines.push(Line::default());
        }
        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), area);
    }

    fn handle_event(
        &mut self,
        event: &Event,
        area: Rect,
        _ctx: &PanelContext<'_>,
    ) -> Option<PanelRequest> {
        if let Event::Mouse(mouse) = event {
            match mouse.kind {
                MouseEventKind::ScrollDown => {
                    self.scroll = (self.scroll + 1).min(Self::max_scroll(area.height));
                }
                MouseEventKind::ScrollUp => {
                    self.scroll = self.scroll.saturating_sub(1);
                }
                _ => {}
            }
        }
        None
    }
}
