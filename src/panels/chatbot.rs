//! Scripted chat window. Replies are keyword-matched against a fixed
//! table, so the whole exchange stays local and deterministic.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{PanelContext, PanelRequest, PanelView};
use crate::content;
use crate::ui::{UiFrame, safe_set_string};

const GREETING: &str =
    "hey! ask me about Minh Phong, or type /help to see what I know.";

const HELP_REPLY: &str = indoc! {"
    you can ask me things like:
    /about — who is Minh Phong?
    /experience — where has he worked?
    /education — what did he study?
"};

const ABOUT_REPLY: &str = indoc! {"
    Minh Phong is a Product Analyst based in Singapore. He works at the
    intersection of data, product, and design, and built this desk to
    show his work the way he likes to browse it.
"};

const EXPERIENCE_REPLY: &str = indoc! {"
    he has worked at PSA International, United Visual Researchers in
    Paris, SPH Media, and Shopee. open the experience window for the
    full story.
"};

const EDUCATION_REPLY: &str = indoc! {"
    he studied at the National University of Singapore, mixing business
    analytics with a healthy amount of side projects.
"};

const FALLBACK_REPLY: &str =
    "I only know a few things. try /help to see the list.";

/// Picks the scripted reply for one user message. Exact slash commands
/// win outright; free text is keyword-matched with experience taking
/// priority over education, about, and finally help.
fn reply_for(input: &str) -> &'static str {
    let text = input.trim().to_lowercase();
    match text.as_str() {
        "/help" => return HELP_REPLY,
        "/experience" => return EXPERIENCE_REPLY,
        "/education" => return EDUCATION_REPLY,
        "/about" => return ABOUT_REPLY,
        _ => {}
    }
    let contains_any = |needles: &[&str]| needles.iter().any(|n| text.contains(n));
    if contains_any(&["experience", "work", "job", "career"]) {
        EXPERIENCE_REPLY
    } else if contains_any(&["education", "study", "university", "nus", "school", "degree"]) {
        EDUCATION_REPLY
    } else if contains_any(&["about", "who", "tell me", "background", "intro"]) {
        ABOUT_REPLY
    } else if contains_any(&["help", "command", "what can"]) {
        HELP_REPLY
    } else {
        FALLBACK_REPLY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    Visitor,
    Bot,
}

#[derive(Debug)]
struct Message {
    speaker: Speaker,
    text: String,
}

#[derive(Debug)]
pub struct ChatbotPanel {
    log: Vec<Message>,
    input: String,
}

impl Default for ChatbotPanel {
    fn default() -> Self {
        Self {
            log: vec![Message {
                speaker: Speaker::Bot,
                text: GREETING.to_string(),
            }],
            input: String::new(),
        }
    }
}

impl ChatbotPanel {
    pub fn input(&self) -> &str {
        &self.input
    }

    fn submit(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        let reply = reply_for(&text);
        self.log.push(Message {
            speaker: Speaker::Visitor,
            text,
        });
        self.log.push(Message {
            speaker: Speaker::Bot,
            text: reply.trim_end().to_string(),
        });
        self.input.clear();
    }

    #[cfg(test)]
    fn last_bot_reply(&self) -> Option<&str> {
        self.log
            .iter()
            .rev()
            .find(|m| m.speaker == Speaker::Bot)
            .map(|m| m.text.as_str())
    }
}

impl PanelView for ChatbotPanel {
    fn title(&self) -> String {
        "chat with me".to_string()
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PanelContext<'_>) {
        let palette = ctx.palette;
        let mut lines: Vec<Line> = Vec::new();
        for message in &self.log {
            let (label, label_style) = match message.speaker {
                Speaker::Visitor => (
                    "you",
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Speaker::Bot => (
                    content::OWNER_NAME,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            lines.push(Line::from(Span::styled(format!("{label}:"), label_style)));
            for text_line in message.text.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {text_line}"),
                    Style::default().fg(palette.text),
                )));
            }
        }

        // Pin the tail of the log above the input line.
        let log_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let total = lines.len() as u16;
        let scroll = total.saturating_sub(log_area.height);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0)),
            log_area,
        );

        let prompt = format!("> {}_", self.input);
        let bounds = frame.area();
        safe_set_string(
            frame.buffer_mut(),
            bounds,
            area.x,
            area.y + area.height.saturating_sub(1),
            &prompt,
            Style::default().fg(palette.accent),
        );
    }

    fn handle_event(
        &mut self,
        event: &Event,
        _area: Rect,
        _ctx: &PanelContext<'_>,
    ) -> Option<PanelRequest> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char(c) => self.input.push(c),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            }
        }
        None
    }
}
