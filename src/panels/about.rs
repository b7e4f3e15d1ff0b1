//! The intro window: name, role, and a short bio next to a portrait
//! placeholder.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use super::{PanelContext, PanelView};
use crate::content;
use crate::ui::UiFrame;

#[derive(Debug, Default)]
pub struct AboutPanel;

impl PanelView for AboutPanel {
    fn title(&self) -> String {
        "about-minh-phong.exe".to_string()
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PanelContext<'_>) {
        let palette = ctx.palette;
        // portrait column only when there is room for it
        let (text_area, portrait_area) = if area.width >= 42 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(24), Constraint::Length(14)])
                .split(area);
            (cols[0], Some(cols[1]))
        } else {
            (area, None)
        };

        let mut lines: Vec<Line> = Vec::new();
        for title_line in content::ABOUT_TITLE.lines() {
            lines.push(Line::from(Span::styled(
                title_line.to_string(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            content::ABOUT_SEEKING,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        for body_line in content::ABOUT_BODY.lines() {
            lines.push(Line::from(Span::styled(
                body_line.to_string(),
                Style::default().fg(palette.text),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            text_area.inner(ratatui::layout::Margin {
                horizontal: 1,
                vertical: 0,
            }),
        );

        if let Some(portrait) = portrait_area {
            let block = Block::default().style(Style::default().bg(palette.card_bg));
            frame.render_widget(block, portrait);
            let label_y = portrait.y + portrait.height / 2;
            let label = "[ photo ]";
            let label_x = portrait.x + portrait.width.saturating_sub(label.len() as u16) / 2;
            crate::ui::safe_set_string(
                frame.buffer_mut(),
                portrait,
                label_x,
                label_y,
                label,
                Style::default().fg(palette.text_dim).bg(palette.card_bg),
            );
        }
    }
}
