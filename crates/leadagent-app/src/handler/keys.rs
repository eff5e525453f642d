//! Key event handlers for each view

use leadagent_core::View;

use crate::analysis::AnalysisStage;
use crate::input_key::InputKey;
use crate::leads::CursorMove;
use crate::message::{FieldId, Message};
use crate::sequence::SequenceFocus;
use crate::state::AppState;
use crate::text_input::TextEdit;

/// Convert key events to messages based on the active view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.views.active() {
        View::Product => match state.analysis.stage {
            AnalysisStage::Form => handle_key_product_form(key),
            AnalysisStage::Results => handle_key_product_results(key),
        },
        View::Leads => handle_key_leads(state, key),
        View::Sequences => handle_key_sequences(state, key),
    }
}

/// Keys that work the same everywhere, including inside text fields
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        // Force quit - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('x') => Some(Message::DismissLatestNotification),

        InputKey::F(1) => Some(Message::ActivateView(View::Product)),
        InputKey::F(2) => Some(Message::ActivateView(View::Leads)),
        InputKey::F(3) => Some(Message::ActivateView(View::Sequences)),

        _ => None,
    }
}

/// Typing into a focused text field
fn handle_key_text(field: FieldId, key: InputKey) -> Option<Message> {
    let edit = match key {
        InputKey::Enter => TextEdit::Newline,
        InputKey::Backspace => TextEdit::Backspace,
        InputKey::CharCtrl('u') => TextEdit::Clear,
        other => TextEdit::Insert(other.printable()?),
    };
    Some(Message::Edit { field, edit })
}

fn handle_key_product_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('s') => Some(Message::SubmitAnalysis),
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PreviousView),
        _ => handle_key_text(FieldId::Description, key),
    }
}

fn handle_key_product_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Char('b') | InputKey::Esc => Some(Message::ShowAnalysisForm),
        InputKey::Char('g') => Some(Message::GenerateLeads),
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PreviousView),
        _ => None,
    }
}

fn handle_key_leads(state: &AppState, key: InputKey) -> Option<Message> {
    let current = state.leads.current().map(|row| row.lead.id);

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PreviousView),

        InputKey::Up | InputKey::Char('k') => Some(Message::MoveLeadCursor(CursorMove::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveLeadCursor(CursorMove::Down)),
        InputKey::Home | InputKey::Char('g') => Some(Message::MoveLeadCursor(CursorMove::First)),
        InputKey::End | InputKey::Char('G') => Some(Message::MoveLeadCursor(CursorMove::Last)),

        InputKey::Char(' ') => current.map(Message::ToggleLead),
        InputKey::Char('a') => Some(Message::ToggleAllLeads),
        InputKey::Char('v') => current.map(Message::ViewLead),
        InputKey::Char('e') => current.map(Message::EmailLead),
        InputKey::Enter | InputKey::Char('c') => Some(Message::RequestSequence),

        _ => None,
    }
}

fn handle_key_sequences(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => return Some(Message::CycleSequenceFocus { forward: true }),
        InputKey::BackTab => return Some(Message::CycleSequenceFocus { forward: false }),
        InputKey::CharCtrl('s') => return Some(Message::SendDraft),
        InputKey::CharCtrl('p') => return Some(Message::PreviewDraft),
        _ => {}
    }

    match state.sequence.focus {
        SequenceFocus::Subject => match key {
            // Single-line: Enter moves on to the body
            InputKey::Enter => Some(Message::CycleSequenceFocus { forward: true }),
            _ => handle_key_text(FieldId::Subject, key),
        },
        SequenceFocus::Body => handle_key_text(FieldId::Body, key),
        SequenceFocus::Recipients => {
            let current = state.sequence.current_recipient().map(|lead| lead.id);
            match key {
                InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
                InputKey::Up | InputKey::Char('k') => {
                    Some(Message::MoveRecipientCursor { down: false })
                }
                InputKey::Down | InputKey::Char('j') => {
                    Some(Message::MoveRecipientCursor { down: true })
                }
                InputKey::Delete | InputKey::Backspace | InputKey::Char('x') => {
                    current.map(Message::RemoveRecipient)
                }
                InputKey::Char('p') => Some(Message::PreviewDraft),
                InputKey::Enter | InputKey::Char('s') => Some(Message::SendDraft),
                _ => None,
            }
        }
    }
}
