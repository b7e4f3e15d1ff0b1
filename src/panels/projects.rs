//! Project gallery: a row of cards, one per project. Clicking a card asks
//! the desk to open the case study window on that project.

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use super::{PanelContext, PanelRequest, PanelView};
use crate::content;
use crate::ui::UiFrame;

const CARD_HEIGHT: u16 = 6;

#[derive(Debug, Default)]
pub struct ProjectsPanel;

impl ProjectsPanel {
    /// One rect per project, stacked vertically inside `area`. Cards that
    /// do not fit are dropped rather than squeezed.
    fn card_rects(area: Rect) -> Vec<(usize, Rect)> {
        let mut rects = Vec::new();
        let mut y = area.y;
        for (idx, _) in content::PROJECTS.iter().enumerate() {
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            rects.push((
                idx,
                Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height: CARD_HEIGHT,
                },
            ));
            y += CARD_HEIGHT;
        }
        rects
    }
}

impl PanelView for ProjectsPanel {
    fn title(&self) -> String {
        "projects".to_string()
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PanelContext<'_>) {
        let palette = ctx.palette;
        for (idx, card) in Self::card_rects(area) {
            let project = &content::PROJECTS[idx];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.window_border))
                .style(Style::default().bg(palette.card_bg));
            let inner = block.inner(card);
            frame.render_widget(block, card);

            let mut lines = vec![Line::from(Span::styled(
                project.title,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ))];
            let tags = project
                .tags
                .iter()
                .map(|tag| format!("[{tag}]"))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(Span::styled(
                tags,
                Style::default().fg(palette.accent),
            )));
            lines.push(Line::from(Span::styled(
                project.description,
                Style::default().fg(palette.text_dim),
            )));
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
    }

    fn handle_event(
        &mut self,
        event: &Event,
        area: Rect,
        _ctx: &PanelContext<'_>,
    ) -> Option<PanelRequest> {
        if let Event::Mouse(mouse) = event
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
        {
            for (idx, card) in Self::card_rects(area) {
                if card.contains((mouse.column, mouse.row).into()) {
                    return Some(PanelRequest::OpenCaseStudy(idx));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::viewport::ViewportMode;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn clicking_a_card_requests_its_case_study() {
        let mut panel = ProjectsPanel;
        let palette = Theme::Dark.palette();
        let ctx = PanelContext {
            palette: &palette,
            focused: true,
            mode: ViewportMode::Desktop,
        };
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 30,
        };
        assert_eq!(
            panel.handle_event(&click(3, 1), area, &ctx),
            Some(PanelRequest::OpenCaseStudy(0))
        );
        assert_eq!(
            panel.handle_event(&click(3, CARD_HEIGHT * 2 + 1), area, &ctx),
            Some(PanelRequest::OpenCaseStudy(2))
        );
    }

    #[test]
    fn clicking_past_the_cards_does_nothing() {
        let mut panel = ProjectsPanel;
        let palette = Theme::Dark.palette();
        let ctx = PanelContext {
            palette: &palette,
            focused: true,
            mode: ViewportMode::Desktop,
        };
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 30,
        };
        assert_eq!(panel.handle_event(&click(3, 29), area, &ctx), None);
    }
}
