//! Lead selection flow: checkbox state over the lead table

use leadagent_core::prelude::*;
use leadagent_core::{Lead, LeadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRow {
    pub lead: Lead,
    pub selected: bool,
}

/// Tri-state of the "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl SelectAllState {
    /// Derived purely from the checked count versus the row total
    pub fn from_counts(selected: usize, total: usize) -> Self {
        match selected {
            0 => SelectAllState::Unchecked,
            n if n == total => SelectAllState::Checked,
            _ => SelectAllState::Indeterminate,
        }
    }
}

/// Cursor movements within the lead table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    First,
    Last,
}

#[derive(Debug, Clone, Default)]
pub struct LeadSelection {
    rows: Vec<LeadRow>,
    cursor: usize,
}

impl LeadSelection {
    pub fn new(leads: Vec<Lead>) -> Self {
        let mut selection = Self::default();
        selection.replace_rows(leads);
        selection
    }

    /// Replace every row with a fresh, unselected set of leads
    pub fn replace_rows(&mut self, leads: Vec<Lead>) {
        self.rows = leads
            .into_iter()
            .map(|lead| LeadRow {
                lead,
                selected: false,
            })
            .collect();
        self.cursor = 0;
    }

    /// Set every row's flag to `checked`
    pub fn toggle_all(&mut self, checked: bool) {
        for row in &mut self.rows {
            row.selected = checked;
        }
        trace!(
            "Select all -> {} ({} of {})",
            checked,
            self.selected_count(),
            self.rows.len()
        );
    }

    /// Flip one row. Returns false when no row has that id.
    pub fn toggle_row(&mut self, id: LeadId) -> bool {
        match self.rows.iter_mut().find(|r| r.lead.id == id) {
            Some(row) => {
                row.selected = !row.selected;
                true
            }
            None => {
                debug!("Toggle for unknown lead {}", id);
                false
            }
        }
    }

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|r| r.selected).count()
    }

    pub fn select_all_state(&self) -> SelectAllState {
        SelectAllState::from_counts(self.selected_count(), self.rows.len())
    }

    /// Checked leads in table order
    pub fn selected_leads(&self) -> Vec<Lead> {
        self.rows
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.lead.clone())
            .collect()
    }

    pub fn create_sequence_enabled(&self) -> bool {
        self.selected_count() > 0
    }

    pub fn create_sequence_label(&self) -> String {
        match self.selected_count() {
            0 => "Create Sequence".to_string(),
            n => format!("Create Sequence ({})", n),
        }
    }

    pub fn get(&self, id: LeadId) -> Option<&LeadRow> {
        self.rows.iter().find(|r| r.lead.id == id)
    }

    pub fn rows(&self) -> &[LeadRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Row under the cursor
    pub fn current(&self) -> Option<&LeadRow> {
        self.rows.get(self.cursor)
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let last = self.rows.len().saturating_sub(1);
        self.cursor = match movement {
            CursorMove::Up => self.cursor.saturating_sub(1),
            CursorMove::Down => (self.cursor + 1).min(last),
            CursorMove::First => 0,
            CursorMove::Last => last,
        };
    }
}
