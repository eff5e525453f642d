//! Bordered text input with a block cursor

use leadagent_app::text_input::TextField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const CURSOR: &str = "█";

pub struct TextArea<'a> {
    field: &'a TextField,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextArea<'a> {
    pub fn new(field: &'a TextField, title: &'a str) -> Self {
        Self {
            field,
            title,
            placeholder: "",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn text(&self) -> Text<'a> {
        if self.field.as_str().is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent_bold()));
            }
            spans.push(Span::styled(
                self.placeholder,
                styles::text_muted().add_modifier(Modifier::ITALIC),
            ));
            return Text::from(Line::from(spans));
        }

        let mut lines: Vec<Line<'a>> = self
            .field
            .as_str()
            .split('\n')
            .map(|line| Line::styled(line, styles::text_primary()))
            .collect();

        if self.focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled(CURSOR, styles::accent_bold()));
            }
        }
        Text::from(lines)
    }
}

impl Widget for TextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(format!(" {} ", self.title));
        let text = self.text();

        // Keep the cursor line visible once the text outgrows the box
        let inner_height = block.inner(area).height as usize;
        let scroll = text.lines.len().saturating_sub(inner_height.max(1)) as u16;

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(area, buf);
    }
}
