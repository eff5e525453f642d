//! Stacked notification toasts, newest on top

use leadagent_app::NotificationCenter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::truncate;
use crate::theme::styles;

pub struct NotificationStack<'a> {
    center: &'a NotificationCenter,
}

impl<'a> NotificationStack<'a> {
    pub fn new(center: &'a NotificationCenter) -> Self {
        Self { center }
    }
}

impl Widget for NotificationStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_width = area.width.saturating_sub(4) as usize;
        let mut y = area.y;

        for notification in self.center.iter().rev() {
            if y + 3 > area.y + area.height {
                break;
            }
            let toast = Rect::new(area.x, y, area.width, 3);
            Clear.render(toast, buf);

            let severity = notification.severity;
            Paragraph::new(Line::from(vec![Span::styled(
                truncate(&notification.message, text_width),
                styles::severity(severity),
            )]))
            .block(styles::notification_block(severity).title(format!(" {} ", severity.label())))
            .render(toast, buf);

            y += 3;
        }
    }
}
