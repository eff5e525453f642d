//! Lead table handlers

use leadagent_core::{LeadId, Severity, View};

use crate::leads::SelectAllState;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_set_all(state: &mut AppState, checked: bool) -> UpdateResult {
    state.leads.toggle_all(checked);
    UpdateResult::none()
}

/// Activating the "select all" checkbox checks every row unless every row
/// is already checked.
pub fn handle_toggle_all(state: &mut AppState) -> UpdateResult {
    let checked = state.leads.select_all_state() != SelectAllState::Checked;
    handle_set_all(state, checked)
}

pub fn handle_toggle_lead(state: &mut AppState, id: LeadId) -> UpdateResult {
    state.leads.toggle_row(id);
    UpdateResult::none()
}

pub fn handle_view_lead(state: &mut AppState, id: LeadId) -> UpdateResult {
    if let Some(name) = state.leads.get(id).map(|row| row.lead.name.clone()) {
        state.notify(format!("Viewing details for {}", name), Severity::Info);
    }
    UpdateResult::none()
}

pub fn handle_email_lead(state: &mut AppState, id: LeadId) -> UpdateResult {
    if let Some(name) = state.leads.get(id).map(|row| row.lead.name.clone()) {
        state.notify(format!("Creating email for {}", name), Severity::Info);
    }
    UpdateResult::none()
}

/// Seed the sequence with the checked rows and move to Sequences.
pub fn handle_request_sequence(state: &mut AppState) -> UpdateResult {
    if state.sequence.is_locked() {
        state.notify(
            "Please wait for the current sequence to finish sending",
            Severity::Warning,
        );
        return UpdateResult::none();
    }

    let selected = state.leads.selected_leads();
    if selected.is_empty() {
        state.notify(
            "Please select at least one lead to create a sequence",
            Severity::Warning,
        );
        return UpdateResult::none();
    }

    let count = selected.len();
    state.sequence.seed_recipients(selected);
    state.views.activate(View::Sequences);
    state.notify(
        format!("Creating sequence for {} selected leads...", count),
        Severity::Info,
    );
    UpdateResult::none()
}
