//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use leadagent_core::prelude::*;

use crate::message::{FieldId, Message};
use crate::state::{AppPhase, AppState};
use crate::text_input::TextField;

use super::{analysis, keys::handle_key, leads, sequence, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            // Ticks only arrive on idle polls, so expire here too
            state.notifications.expire(Instant::now());
            match handle_key(state, key) {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            }
        }

        Message::Tick => {
            state.notifications.expire(Instant::now());
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View Messages
        // ─────────────────────────────────────────────────────────
        Message::ActivateView(view) => {
            state.views.activate(view);
            UpdateResult::none()
        }

        Message::NextView => {
            let next = state.views.active().next();
            state.views.activate(next);
            UpdateResult::none()
        }

        Message::PreviousView => {
            let previous = state.views.active().previous();
            state.views.activate(previous);
            UpdateResult::none()
        }

        Message::Edit { field, edit } => {
            if matches!(field, FieldId::Subject | FieldId::Body) && state.sequence.is_locked() {
                debug!("Draft locked while sending; ignoring edit to {:?}", field);
                return UpdateResult::none();
            }
            field_mut(state, field).apply(edit);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis Messages
        // ─────────────────────────────────────────────────────────
        Message::SubmitAnalysis => analysis::handle_submit(state),
        Message::AnalysisCompleted { result } => analysis::handle_completed(state, result),
        Message::AnalysisFailed { error } => analysis::handle_failed(state, error),
        Message::ShowAnalysisForm => {
            state.analysis.show_form();
            UpdateResult::none()
        }
        Message::GenerateLeads => analysis::handle_generate_leads(state),
        Message::LeadsGenerated { batch } => analysis::handle_leads_generated(state, batch),
        Message::LeadGenerationFailed { error } => {
            analysis::handle_lead_generation_failed(state, error)
        }

        // ─────────────────────────────────────────────────────────
        // Lead Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SetAllLeads(checked) => leads::handle_set_all(state, checked),
        Message::ToggleAllLeads => leads::handle_toggle_all(state),
        Message::ToggleLead(id) => leads::handle_toggle_lead(state, id),
        Message::MoveLeadCursor(movement) => {
            state.leads.move_cursor(movement);
            UpdateResult::none()
        }
        Message::ViewLead(id) => leads::handle_view_lead(state, id),
        Message::EmailLead(id) => leads::handle_email_lead(state, id),
        Message::RequestSequence => leads::handle_request_sequence(state),

        // ─────────────────────────────────────────────────────────
        // Sequence Messages
        // ─────────────────────────────────────────────────────────
        Message::CycleSequenceFocus { forward } => {
            let focus = state.sequence.focus;
            state.sequence.focus = if forward {
                focus.next()
            } else {
                focus.previous()
            };
            UpdateResult::none()
        }
        Message::MoveRecipientCursor { down } => {
            state.sequence.move_recipient_cursor(down);
            UpdateResult::none()
        }
        Message::RemoveRecipient(id) => sequence::handle_remove_recipient(state, id),
        Message::PreviewDraft => sequence::handle_preview(state),
        Message::SendDraft => sequence::handle_send(state),
        Message::DraftSent { receipt } => sequence::handle_sent(state, receipt),
        Message::DraftSendFailed { error } => sequence::handle_send_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Notification Messages
        // ─────────────────────────────────────────────────────────
        Message::Notify { message, severity } => {
            state.notify(message, severity);
            UpdateResult::none()
        }

        Message::DismissNotification(id) => {
            state.notifications.dismiss(id);
            UpdateResult::none()
        }

        Message::DismissLatestNotification => {
            state.notifications.dismiss_latest();
            UpdateResult::none()
        }
    }
}

fn field_mut(state: &mut AppState, field: FieldId) -> &mut TextField {
    match field {
        FieldId::Description => &mut state.analysis.description,
        FieldId::Subject => &mut state.sequence.subject,
        FieldId::Body => &mut state.sequence.body,
    }
}
