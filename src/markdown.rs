//! Markdown-to-`Line` conversion for panel body text.
//!
//! Case-study bodies and the help overlay are authored as markdown; this
//! flattens them into styled ratatui lines. Only the inline subset the
//! content actually uses is supported: headings, emphasis, bullet and
//! numbered lists, paragraphs and inline code.

use pulldown_cmark::{Event as MdEvent, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Palette;

pub fn lines(raw: &str, palette: &Palette) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(raw, Options::empty());

    let base = Style::default().fg(palette.text);
    let heading = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut out: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut bold = 0u8;
    let mut italic = 0u8;
    let mut in_heading = false;
    let mut list_index: Vec<Option<u64>> = Vec::new();

    let mut flush = |current: &mut Vec<Span<'static>>, out: &mut Vec<Line<'static>>| {
        if !current.is_empty() {
            out.push(Line::from(std::mem::take(current)));
        }
    };

    for event in parser {
        match event {
            MdEvent::Start(tag) => match tag {
                Tag::Strong => bold += 1,
                Tag::Emphasis => italic += 1,
                Tag::Heading { .. } => {
                    flush(&mut current, &mut out);
                    if !out.is_empty() {
                        out.push(Line::default());
                    }
                    in_heading = true;
                }
                Tag::List(start) => list_index.push(start),
                Tag::Item => {
                    flush(&mut current, &mut out);
                    let depth = list_index.len().saturating_sub(1);
                    let indent = "  ".repeat(depth);
                    let marker = match list_index.last_mut() {
                        Some(Some(n)) => {
                            let label = format!("{indent}{n}. ");
                            *n += 1;
                            label
                        }
                        _ => format!("{indent}• "),
                    };
                    current.push(Span::styled(marker, Style::default().fg(palette.accent)));
                }
                Tag::Paragraph => flush(&mut current, &mut out),
                _ => {}
            },
            MdEvent::End(tag) => match tag {
                TagEnd::Strong => bold = bold.saturating_sub(1),
                TagEnd::Emphasis => italic = italic.saturating_sub(1),
                TagEnd::Heading(_) => {
                    flush(&mut current, &mut out);
                    in_heading = false;
                }
                TagEnd::List(_) => {
                    list_index.pop();
                }
                TagEnd::Item => flush(&mut current, &mut out),
                TagEnd::Paragraph => {
                    flush(&mut current, &mut out);
                    out.push(Line::default());
                }
                _ => {}
            },
            MdEvent::Text(text) | MdEvent::Code(text) => {
                let mut style = if in_heading { heading } else { base };
                if bold > 0 {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if italic > 0 {
                    style = style.add_modifier(Modifier::ITALIC);
                }
                current.push(Span::styled(text.into_string(), style));
            }
            MdEvent::SoftBreak | MdEvent::HardBreak => {
                current.push(Span::raw(" "));
            }
            _ => {}
        }
    }
    flush(&mut current, &mut out);
    while out.last().is_some_and(|line| line.spans.is_empty()) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use indoc::indoc;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        let palette = Theme::Dark.palette();
        let out = lines("first paragraph\n\nsecond paragraph", &palette);
        let texts: Vec<String> = out.iter().map(text_of).collect();
        assert_eq!(texts[0], "first paragraph");
        assert!(texts[1].is_empty());
        assert_eq!(texts[2], "second paragraph");
    }

    #[test]
    fn bullets_get_markers() {
        let palette = Theme::Dark.palette();
        let raw = indoc! {"
            - one
            - two
        "};
        let out = lines(raw, &palette);
        assert!(text_of(&out[0]).starts_with("• "));
        assert!(text_of(&out[1]).ends_with("two"));
    }

    #[test]
    fn headings_render_accented_and_bold() {
        let palette = Theme::Dark.palette();
        let out = lines("# Keys\n\nbody", &palette);
        let head = &out[0].spans[0];
        assert!(head.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(head.content.as_ref(), "Keys");
    }

    #[test]
    fn ordered_lists_count_up() {
        let palette = Theme::Light.palette();
        let out = lines("1. alpha\n2. beta\n", &palette);
        assert!(text_of(&out[0]).starts_with("1. "));
        assert!(text_of(&out[1]).starts_with("2. "));
    }
}
