//! Sequences view: subject, body template and recipient list

use leadagent_app::sequence::{SequenceFlow, SequenceFocus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::{button, truncate, TextArea};
use crate::theme::styles;

pub struct SequenceComposer<'a> {
    flow: &'a SequenceFlow,
}

impl<'a> SequenceComposer<'a> {
    pub fn new(flow: &'a SequenceFlow) -> Self {
        Self { flow }
    }

    fn render_recipients(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.flow.focus == SequenceFocus::Recipients;
        let recipients = self.flow.recipients();
        let block = styles::glass_block(focused)
            .title(format!(" Recipients ({}) ", recipients.len()));

        if recipients.is_empty() {
            Paragraph::new(Line::styled(
                "No recipients. Select leads on the Leads view (F2).",
                styles::text_muted(),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let width = block.inner(area).width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = recipients
            .iter()
            .map(|lead| {
                ListItem::new(vec![
                    Line::styled(truncate(&lead.name, width), styles::text_primary()),
                    Line::styled(
                        truncate(&format!("{} · {}", lead.company, lead.email), width),
                        styles::text_muted(),
                    ),
                ])
            })
            .collect();

        let mut list = List::new(items).block(block);
        if focused {
            list = list
                .highlight_style(styles::focused_selected())
                .highlight_symbol("▶ ");
        }

        let mut state = ListState::default().with_selected(Some(self.flow.recipient_cursor()));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

impl Widget for SequenceComposer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [editor_area, recipients_area] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(area);

        let [subject_area, body_area, button_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(editor_area);

        TextArea::new(&self.flow.subject, "Subject")
            .placeholder("Email subject line")
            .focused(self.flow.focus == SequenceFocus::Subject)
            .render(subject_area, buf);

        TextArea::new(&self.flow.body, "Email Template")
            .placeholder("Hi {name}, ...")
            .focused(self.flow.focus == SequenceFocus::Body)
            .render(body_area, buf);

        let trigger = &self.flow.trigger;
        Paragraph::new(Line::from(vec![
            button(trigger.label(), trigger.is_enabled()),
            Span::styled("  Ctrl+S", styles::keybinding()),
            Span::styled("  Preview ", styles::text_muted()),
            Span::styled("Ctrl+P", styles::keybinding()),
        ]))
        .render(button_area, buf);

        self.render_recipients(recipients_area, buf);
    }
}
