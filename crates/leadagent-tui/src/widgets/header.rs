//! Main header: application title and the view tab bar

use leadagent_app::views::ViewController;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use crate::theme::styles;

pub const APP_TITLE: &str = "Lead Agent";

/// Title on the left, one tab per view on the right; exactly one tab is
/// highlighted.
pub struct MainHeader<'a> {
    views: &'a ViewController,
}

impl<'a> MainHeader<'a> {
    pub fn new(views: &'a ViewController) -> Self {
        Self { views }
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        self.views
            .tabs()
            .map(|(view, _)| {
                Line::from(vec![
                    Span::styled(format!("F{}", view.index() + 1), styles::keybinding()),
                    Span::raw(format!(" {}", view.title())),
                ])
            })
            .collect()
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, tabs_area] =
            Layout::horizontal([Constraint::Length(14), Constraint::Min(0)]).areas(inner);

        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
        ]))
        .render(title_area, buf);

        Tabs::new(self.tab_titles())
            .select(self.views.active().index())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(tabs_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use leadagent_core::View;

    #[test]
    fn test_header_renders_title_and_tabs() {
        let mut term = TestTerminal::with_size(80, 3);
        let views = ViewController::new();

        term.render_widget(MainHeader::new(&views), term.area());

        assert!(term.buffer_contains("Lead Agent"));
        assert!(term.buffer_contains("F1 Product"));
        assert!(term.buffer_contains("F2 Leads"));
        assert!(term.buffer_contains("F3 Sequences"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut term = TestTerminal::with_size(80, 3);
        let mut views = ViewController::new();
        views.activate(View::Leads);

        term.render_widget(MainHeader::new(&views), term.area());

        let buffer = term.buffer();
        let highlighted: String = buffer
            .content
            .iter()
            .filter(|cell| cell.bg == crate::theme::palette::ACCENT)
            .map(|cell| cell.symbol())
            .collect();
        assert!(highlighted.contains("Leads"));
        assert!(!highlighted.contains("Product"));
    }
}
