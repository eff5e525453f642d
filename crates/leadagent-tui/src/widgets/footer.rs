//! One-line key help for the active view

use leadagent_app::analysis::AnalysisStage;
use leadagent_app::sequence::SequenceFocus;
use leadagent_app::AppState;
use leadagent_core::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// `(key, description)` pairs for the current view and focus
pub fn key_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut hints = match state.views.active() {
        View::Product => match state.analysis.stage {
            AnalysisStage::Form => vec![("Ctrl+S", "analyze"), ("Tab", "next view")],
            AnalysisStage::Results => vec![
                ("g", "generate leads"),
                ("b", "edit description"),
                ("q", "quit"),
            ],
        },
        View::Leads => vec![
            ("↑↓", "move"),
            ("Space", "toggle"),
            ("a", "all"),
            ("v/e", "view/email"),
            ("Enter", "create sequence"),
        ],
        View::Sequences => match state.sequence.focus {
            SequenceFocus::Recipients => vec![
                ("↑↓", "move"),
                ("x", "remove"),
                ("p", "preview"),
                ("Enter", "send"),
            ],
            _ => vec![("Tab", "next field"), ("Ctrl+S", "send"), ("Ctrl+P", "preview")],
        },
    };
    hints.push(("Ctrl+X", "dismiss"));
    hints.push(("Ctrl+Q", "quit"));
    hints
}

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, description) in key_hints(self.state) {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", description), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_focus_hints() {
        let mut state = AppState::new();
        state.views.activate(View::Sequences);
        state.sequence.focus = SequenceFocus::Recipients;

        let hints = key_hints(&state);
        assert!(hints.contains(&("x", "remove")));
        assert_eq!(hints.last(), Some(&("Ctrl+Q", "quit")));
    }

    #[test]
    fn test_form_hints_mention_submit() {
        let state = AppState::new();
        assert_eq!(key_hints(&state)[0], ("Ctrl+S", "analyze"));
    }
}
