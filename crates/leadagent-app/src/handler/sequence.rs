//! Sequence composer handlers

use leadagent_core::prelude::*;
use leadagent_core::{LeadId, Severity};

use crate::services::SendReceipt;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_remove_recipient(state: &mut AppState, id: LeadId) -> UpdateResult {
    if state.sequence.is_locked() {
        debug!("Draft locked while sending; keeping recipient {}", id);
        return UpdateResult::none();
    }

    if state.sequence.remove_recipient(id) {
        state.notify("Lead removed from sequence", Severity::Info);
    } else {
        debug!("Recipient {} not in sequence", id);
    }
    UpdateResult::none()
}

pub fn handle_preview(state: &mut AppState) -> UpdateResult {
    state.notify("Opening email preview...", Severity::Info);
    UpdateResult::none()
}

/// Validate the draft and start the Send Service call
pub fn handle_send(state: &mut AppState) -> UpdateResult {
    if state.sequence.trigger.is_busy() {
        debug!("Send already in flight; ignoring submit");
        return UpdateResult::none();
    }

    if !state.sequence.is_complete() {
        state.notify(
            "Please fill in both subject and email template",
            Severity::Warning,
        );
        return UpdateResult::none();
    }

    state.sequence.trigger.try_acquire();
    let draft = state.sequence.draft();
    info!(
        "Sending '{}' to {} recipients",
        draft.subject,
        draft.recipients.len()
    );
    UpdateResult::action(UpdateAction::SendSequence { draft })
}

/// Success resets the draft.
pub fn handle_sent(state: &mut AppState, receipt: SendReceipt) -> UpdateResult {
    state.sequence.trigger.release();
    info!("Sequence sent: {} emails", receipt.sent);
    state.sequence.reset();
    state.notify(receipt.message, Severity::Success);
    UpdateResult::none()
}

/// Failure keeps the draft for a retry.
pub fn handle_send_failed(state: &mut AppState, error: ServiceError) -> UpdateResult {
    state.sequence.trigger.release();
    warn!("Send failed: {}", error);
    state.notify(
        format!("Send failed: {}", error.user_message("Send failed")),
        Severity::Error,
    );
    UpdateResult::none()
}
