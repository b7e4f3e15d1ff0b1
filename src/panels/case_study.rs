//! Case study reader. Shows one project's write-up as rendered markdown
//! with prev/next navigation across the project list.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{PanelContext, PanelRequest, PanelView};
use crate::content;
use crate::markdown;
use crate::ui::UiFrame;

const PREV_LABEL: &str = "[< prev]";
const NEXT_LABEL: &str = "[next >]";

#[derive(Debug, Default)]
pub struct CaseStudyPanel {
    project: usize,
    scroll: u16,
}

impl CaseStudyPanel {
    pub fn project(&self) -> usize {
        self.project
    }

    /// Pins the reader to a project and resets the scroll position.
    pub fn show_project(&mut self, index: usize) {
        if index < content::PROJECTS.len() {
            self.project = index;
            self.scroll = 0;
        }
    }

    fn prev_index(&self) -> Option<usize> {
        self.project.checked_sub(1)
    }

    fn next_index(&self) -> Option<usize> {
        let next = self.project + 1;
        (next < content::PROJECTS.len()).then_some(next)
    }

    fn nav_row(area: Rect) -> u16 {
        area.y + area.height.saturating_sub(1)
    }

    /// Text between the prev and next buttons. Render and hit-test both
    /// use this, so the clickable spans track the drawn ones.
    fn position_segment(&self) -> String {
        format!("  {} / {}  ", self.project + 1, content::PROJECTS.len())
    }
}

impl PanelView for CaseStudyPanel {
    fn title(&self) -> String {
        format!("{}.md", content::PROJECTS[self.project].title)
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PanelContext<'_>) {
        let palette = ctx.palette;
        let project = &content::PROJECTS[self.project];

        let chips = project
            .tags
            .iter()
            .flat_map(|tag| {
                [
                    Span::styled(
                        format!(" {tag} "),
                        Style::default().bg(palette.chip_bg).fg(palette.chip_fg),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>();

        let mut lines = vec![Line::from(chips), Line::default()];
        lines.extend(markdown::lines(project.content, palette));

        let body = Rect {
            height: area.height.saturating_sub(2),
            ..area
        };
        let body_lines = lines.len() as u16;
        self.scroll = self.scroll.min(body_lines.saturating_sub(body.height));
        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), body);

        let nav_style = |enabled: bool| {
            if enabled {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_dim)
            }
        };
        let nav = Line::from(vec![
            Span::styled(PREV_LABEL, nav_style(self.prev_index().is_some())),
            Span::styled(
                self.position_segment(),
                Style::default().fg(palette.text_dim),
            ),
            Span::styled(NEXT_LABEL, nav_style(self.next_index().is_some())),
        ]);
        let nav_area = Rect {
            y: Self::nav_row(area),
            height: 1,
            ..area
        };
        frame.render_widget(Paragraph::new(nav), nav_area);
    }

    fn handle_event(
        &mut self,
        event: &Event,
        area: Rect,
        _ctx: &PanelContext<'_>,
    ) -> Option<PanelRequest> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Left => self.prev_index().map(PanelRequest::ShowProject),
                KeyCode::Right => self.next_index().map(PanelRequest::ShowProject),
                _ => None,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) if mouse.row == Self::nav_row(area) => {
                    let col = mouse.column;
                    let prev_end = area.x + PREV_LABEL.len() as u16;
                    let next_start = prev_end + self.position_segment().chars().count() as u16;
                    let next_end = next_start + NEXT_LABEL.len() as u16;
                    if col >= area.x && col < prev_end {
                        self.prev_index().map(PanelRequest::ShowProject)
                    } else if col >= next_start && col < next_end {
                        self.next_index().map(PanelRequest::ShowProject)
                    } else {
                        None
                    }
                }
                MouseEventKind::ScrollDown => {
                    self.scroll = self.scroll.saturating_add(1);
                    None
                }
                MouseEventKind::ScrollUp => {
                    self.scroll = self.scroll.saturating_sub(1);
                    None
                }
                _ => None,
            },
            _ => None,
        }
    }
}
