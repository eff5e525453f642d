//! Leads view: selectable lead table and the create-sequence trigger

use leadagent_app::leads::{LeadSelection, SelectAllState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use super::{button, truncate};
use crate::theme::styles;

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Header checkbox glyph for the tri-state "select all" control
pub fn select_all_glyph(state: SelectAllState) -> &'static str {
    match state {
        SelectAllState::Unchecked => "[ ]",
        SelectAllState::Indeterminate => "[-]",
        SelectAllState::Checked => "[x]",
    }
}

const WIDTHS: [Constraint; 5] = [
    Constraint::Length(4),
    Constraint::Percentage(22),
    Constraint::Percentage(22),
    Constraint::Percentage(22),
    Constraint::Fill(1),
];

pub struct LeadsTable<'a> {
    selection: &'a LeadSelection,
}

impl<'a> LeadsTable<'a> {
    pub fn new(selection: &'a LeadSelection) -> Self {
        Self { selection }
    }

    fn rows(&self, column_width: usize) -> Vec<Row<'a>> {
        self.selection
            .rows()
            .iter()
            .map(|row| {
                let style = if row.selected {
                    styles::accent_bold()
                } else {
                    styles::text_primary()
                };
                Row::new(vec![
                    Cell::from(checkbox(row.selected)),
                    Cell::from(truncate(&row.lead.name, column_width)),
                    Cell::from(truncate(&row.lead.company, column_width)),
                    Cell::from(truncate(&row.lead.title, column_width)),
                    Cell::from(row.lead.email.clone()),
                ])
                .style(style)
            })
            .collect()
    }
}

impl Widget for LeadsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [table_area, button_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

        let block = styles::glass_block(true).title(format!(
            " Leads ({} of {} selected) ",
            self.selection.selected_count(),
            self.selection.len()
        ));
        let column_width = (block.inner(table_area).width as usize * 22 / 100).max(4);

        let header = Row::new(vec![
            Cell::from(select_all_glyph(self.selection.select_all_state())),
            Cell::from("Name"),
            Cell::from("Company"),
            Cell::from("Title"),
            Cell::from("Email"),
        ])
        .style(styles::label());

        let table = Table::new(self.rows(column_width), WIDTHS)
            .header(header)
            .block(block)
            .row_highlight_style(styles::focused_selected())
            .highlight_symbol("▶ ");

        let mut state = TableState::default();
        if !self.selection.is_empty() {
            state.select(Some(self.selection.cursor()));
        }
        StatefulWidget::render(table, table_area, buf, &mut state);

        Paragraph::new(Line::from(vec![
            button(
                &self.selection.create_sequence_label(),
                self.selection.create_sequence_enabled(),
            ),
            Span::styled("  Enter", styles::keybinding()),
        ]))
        .render(button_area, buf);
    }
}
