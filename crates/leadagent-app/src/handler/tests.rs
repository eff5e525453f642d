//! Tests for handler module

use super::*;
use crate::analysis::{AnalysisStage, ResultSlot};
use crate::input_key::InputKey;
use crate::leads::{CursorMove, SelectAllState};
use crate::message::{FieldId, Message};
use crate::sequence::SequenceFocus;
use crate::services::SendReceipt;
use crate::state::AppState;
use crate::text_input::TextEdit;
use leadagent_core::{
    AnalysisResult, LeadBatch, LeadId, ServiceError, Severity, TargetAudience, TargetCountry, View,
};

fn latest_message(state: &AppState) -> Option<(&str, Severity)> {
    state
        .notifications
        .latest()
        .map(|n| (n.message.as_str(), n.severity))
}

fn type_into(state: &mut AppState, field: FieldId, text: &str) {
    for c in text.chars() {
        update(
            state,
            Message::Edit {
                field,
                edit: TextEdit::Insert(c),
            },
        );
    }
}

/// Run a key through `update` and any follow-up messages it produces
fn press(state: &mut AppState, key: InputKey) {
    let mut msg = Some(Message::Key(key));
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn healthcare_result() -> AnalysisResult {
    AnalysisResult {
        target_audience: Some(TargetAudience {
            industry: Some("Healthcare".into()),
            ..Default::default()
        }),
        additional_target_audiences: vec![],
        target_countries: vec![TargetCountry {
            rank: Some(1),
            country: "United States".into(),
            market_size_insight: None,
        }],
    }
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_q_types_into_description_instead_of_quitting() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(
        result,
        Some(Message::Edit {
            field: FieldId::Description,
            edit: TextEdit::Insert('q')
        })
    ));
}

#[test]
fn test_q_requests_quit_on_leads_view() {
    let mut state = AppState::new();
    update(&mut state, Message::ActivateView(View::Leads));
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::RequestQuit)));
}

#[test]
fn test_request_quit_while_analyzing_is_refused() {
    let mut state = AppState::new();
    type_into(&mut state, FieldId::Description, "CRM");
    update(&mut state, Message::SubmitAnalysis);

    update(&mut state, Message::RequestQuit);
    assert!(!state.should_quit());
    assert_eq!(latest_message(&state).map(|(_, s)| s), Some(Severity::Warning));
}

// ─────────────────────────────────────────────────────────
// View Controller
// ─────────────────────────────────────────────────────────

#[test]
fn test_function_keys_activate_views() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::F(2)),
        Some(Message::ActivateView(View::Leads))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::F(3)),
        Some(Message::ActivateView(View::Sequences))
    ));
}

#[test]
fn test_exactly_one_view_active_after_any_activation_sequence() {
    let mut state = AppState::new();
    let sequence = [
        Message::ActivateView(View::Leads),
        Message::NextView,
        Message::NextView,
        Message::PreviousView,
        Message::ActivateView(View::Leads),
        Message::ActivateView(View::Sequences),
    ];
    for msg in sequence {
        update(&mut state, msg);
        let active: Vec<_> = state.views.tabs().filter(|(_, a)| *a).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].0, state.views.active());
    }
    assert_eq!(state.views.active(), View::Sequences);
}

#[test]
fn test_tab_cycles_views_outside_text_fields() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.views.active(), View::Leads);
    press(&mut state, InputKey::Tab);
    assert_eq!(state.views.active(), View::Sequences);

    // Sequences keeps Tab for field focus
    press(&mut state, InputKey::Tab);
    assert_eq!(state.views.active(), View::Sequences);
    assert_eq!(state.sequence.focus, SequenceFocus::Body);

    press(&mut state, InputKey::F(2));
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.views.active(), View::Product);
}

// ─────────────────────────────────────────────────────────
// Analysis Flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_whitespace_description_warns_without_request() {
    let mut state = AppState::new();
    type_into(&mut state, FieldId::Description, "   \t ");

    let result = update(&mut state, Message::SubmitAnalysis);

    assert!(result.action.is_none());
    assert!(state.analysis.trigger.is_enabled());
    assert_eq!(
        latest_message(&state),
        Some(("Please enter a product description", Severity::Warning))
    );
}

#[test]
fn test_submit_trims_and_marks_busy() {
    let mut state = AppState::new();
    type_into(&mut state, FieldId::Description, "  Clinic scheduling  ");

    let result = update(&mut state, Message::SubmitAnalysis);

    assert_eq!(
        result.action,
        Some(UpdateAction::Analyze {
            description: "Clinic scheduling".into()
        })
    );
    assert_eq!(state.analysis.trigger.label(), "Analyzing with AI...");
    assert!(!state.analysis.trigger.is_enabled());
}

#[test]
fn test_second_submit_while_busy_is_ignored() {
    let mut state = AppState::new();
    type_into(&mut state, FieldId::Description, "CRM");
    update(&mut state, Message::SubmitAnalysis);

    let second = update(&mut state, Message::SubmitAnalysis);
    assert!(second.action.is_none());
    assert!(state.notifications.is_empty());
}

#[test]
fn test_analysis_success_shows_results() {
    let mut state = AppState::new();
    type_into(&mut state, FieldId::Description, "CRM");
    update(&mut state, Message::SubmitAnalysis);

    update(
        &mut state,
        Message::AnalysisCompleted {
            result: healthcare_result(),
        },
    );

    assert!(state.analysis.trigger.is_enabled());
    assert_eq!(state.analysis.trigger.label(), "Analyze Product");
    assert_eq!(state.analysis.stage, AnalysisStage::Results);

    let view = state.analysis.view.as_ref().unwrap();
    assert_eq!(view.slot(ResultSlot::Industry), "Healthcare");
    assert_eq!(view.slot(ResultSlot::CompanySize), "50-500 employees");
    assert_eq!(view.countries[0].flag, "🇺🇸");
    assert_eq!(view.countries[0].badge, 1);
    assert_eq!(
        latest_message(&state),
        Some(("Analysis completed successfully!", Severity::Success))
    );
}

#[test]
fn test_analysis_failure_keeps_form_and_reports_server_message() {
    let mut state = AppState::new();
    type_into(&mut state, FieldId::Description, "CRM");
    update(&mut state, Message::SubmitAnalysis);

    update(
        &mut state,
        Message::AnalysisFailed {
            error: ServiceError::rejected(Some(500), Some("Model overloaded".into())),
        },
    );

    assert!(state.analysis.trigger.is_enabled());
    assert_eq!(state.analysis.stage, AnalysisStage::Form);
    assert_eq!(state.analysis.description.as_str(), "CRM");
    assert_eq!(
        latest_message(&state),
        Some(("Analysis failed: Model overloaded", Severity::Error))
    );
}

#[test]
fn test_analysis_failure_without_message_uses_fallback() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::AnalysisFailed {
            error: ServiceError::rejected(Some(502), None),
        },
    );
    assert_eq!(
        latest_message(&state),
        Some(("Analysis failed: Analysis failed", Severity::Error))
    );
}

#[test]
fn test_results_keys() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::AnalysisCompleted {
            result: AnalysisResult::default(),
        },
    );
    assert!(matches!(
        handle_key(&state, InputKey::Char('g')),
        Some(Message::GenerateLeads)
    ));

    press(&mut state, InputKey::Char('b'));
    assert_eq!(state.analysis.stage, AnalysisStage::Form);
}

#[test]
fn test_generate_leads_switches_view_and_requests_rows() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::AnalysisCompleted {
            result: healthcare_result(),
        },
    );

    let result = update(&mut state, Message::GenerateLeads);

    assert_eq!(state.views.active(), View::Leads);
    assert_eq!(
        latest_message(&state),
        Some(("Generating leads based on your analysis...", Severity::Info))
    );
    match result.action {
        Some(UpdateAction::GenerateLeads { criteria }) => {
            assert_eq!(criteria.limit, 50);
            assert_eq!(
                criteria.target_audience.and_then(|a| a.industry).as_deref(),
                Some("Healthcare")
            );
        }
        other => panic!("unexpected action: {:?}", other),
    }
}

#[test]
fn test_leads_generated_replaces_rows_and_clears_selection() {
    let mut state = AppState::new();
    update(&mut state, Message::SetAllLeads(true));
    update(&mut state, Message::GenerateLeads);

    let lead = leadagent_core::Lead::new(42, "Ada Park", "Clinicly", "COO", "ada@clinicly.io");
    update(
        &mut state,
        Message::LeadsGenerated {
            batch: LeadBatch {
                leads: vec![lead],
                total: Some(1),
                generated_at: None,
            },
        },
    );

    assert!(state.analysis.lead_trigger.is_enabled());
    assert_eq!(state.leads.len(), 1);
    assert_eq!(state.leads.selected_count(), 0);
    assert_eq!(state.leads.rows()[0].lead.id, LeadId(42));
}

#[test]
fn test_lead_generation_failure_keeps_rows() {
    let mut state = AppState::new();
    update(&mut state, Message::GenerateLeads);
    update(
        &mut state,
        Message::LeadGenerationFailed {
            error: ServiceError::transport("connection refused"),
        },
    );

    assert!(state.analysis.lead_trigger.is_enabled());
    assert_eq!(state.leads.len(), 3);
    assert_eq!(
        latest_message(&state),
        Some(("Lead generation failed: connection refused", Severity::Error))
    );
}

// ─────────────────────────────────────────────────────────
// Lead Selection Flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_all_true_then_false() {
    let mut state = AppState::new();

    update(&mut state, Message::SetAllLeads(true));
    assert_eq!(state.leads.selected_count(), 3);
    assert_eq!(state.leads.create_sequence_label(), "Create Sequence (3)");

    update(&mut state, Message::SetAllLeads(false));
    assert_eq!(state.leads.selected_count(), 0);
    assert_eq!(state.leads.create_sequence_label(), "Create Sequence");
    assert!(!state.leads.create_sequence_enabled());
}

#[test]
fn test_select_all_checkbox_from_indeterminate_checks_all() {
    let mut state = AppState::new();
    update(&mut state, Message::ToggleLead(LeadId(1)));
    assert_eq!(state.leads.select_all_state(), SelectAllState::Indeterminate);

    update(&mut state, Message::ToggleAllLeads);
    assert_eq!(state.leads.select_all_state(), SelectAllState::Checked);

    update(&mut state, Message::ToggleAllLeads);
    assert_eq!(state.leads.select_all_state(), SelectAllState::Unchecked);
}

#[test]
fn test_request_sequence_with_nothing_selected() {
    let mut state = AppState::new();
    update(&mut state, Message::ActivateView(View::Leads));

    update(&mut state, Message::RequestSequence);

    assert_eq!(state.views.active(), View::Leads);
    assert!(state.sequence.recipients().is_empty());
    assert_eq!(
        latest_message(&state),
        Some((
            "Please select at least one lead to create a sequence",
            Severity::Warning
        ))
    );
}

#[test]
fn test_request_sequence_seeds_recipients() {
    let mut state = AppState::new();
    update(&mut state, Message::ActivateView(View::Leads));
    update(&mut state, Message::ToggleLead(LeadId(1)));
    update(&mut state, Message::ToggleLead(LeadId(3)));

    update(&mut state, Message::RequestSequence);

    assert_eq!(state.views.active(), View::Sequences);
    let ids: Vec<_> = state.sequence.recipients().iter().map(|l| l.id).collect();
    assert_eq!(ids, [LeadId(1), LeadId(3)]);
    assert_eq!(
        latest_message(&state),
        Some(("Creating sequence for 2 selected leads...", Severity::Info))
    );
}

#[test]
fn test_row_actions_are_informational() {
    let mut state = AppState::new();
    update(&mut state, Message::ActivateView(View::Leads));

    update(&mut state, Message::ViewLead(LeadId(2)));
    assert_eq!(
        latest_message(&state),
        Some(("Viewing details for Michael Chen", Severity::Info))
    );

    update(&mut state, Message::EmailLead(LeadId(3)));
    assert_eq!(
        latest_message(&state),
        Some(("Creating email for Emily Rodriguez", Severity::Info))
    );
    assert_eq!(state.views.active(), View::Leads);
    assert_eq!(state.leads.selected_count(), 0);
}

#[test]
fn test_leads_keys_act_on_cursor_row() {
    let mut state = AppState::new();
    update(&mut state, Message::ActivateView(View::Leads));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char(' '));

    assert_eq!(state.leads.selected_leads()[0].id, LeadId(2));
    assert!(matches!(
        handle_key(&state, InputKey::Char('v')),
        Some(Message::ViewLead(LeadId(2)))
    ));

    update(&mut state, Message::MoveLeadCursor(CursorMove::Last));
    assert_eq!(state.leads.cursor(), 2);
}

// ─────────────────────────────────────────────────────────
// Sequence Flow
// ─────────────────────────────────────────────────────────

fn state_with_recipients() -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::SetAllLeads(true));
    update(&mut state, Message::RequestSequence);
    state
}

#[test]
fn test_remove_recipient_notifies() {
    let mut state = state_with_recipients();
    update(&mut state, Message::RemoveRecipient(LeadId(2)));

    assert_eq!(state.sequence.recipients().len(), 2);
    assert_eq!(
        latest_message(&state),
        Some(("Lead removed from sequence", Severity::Info))
    );
}

#[test]
fn test_remove_unknown_recipient_is_silent() {
    let mut state = state_with_recipients();
    let before = state.notifications.len();
    update(&mut state, Message::RemoveRecipient(LeadId(99)));
    assert_eq!(state.notifications.len(), before);
    assert_eq!(state.sequence.recipients().len(), 3);
}

#[test]
fn test_remove_every_recipient_leaves_empty_set() {
    let mut state = state_with_recipients();
    for id in [1, 2, 3] {
        update(&mut state, Message::RemoveRecipient(LeadId(id)));
    }
    assert!(state.sequence.recipients().is_empty());
}

#[test]
fn test_preview_only_notifies() {
    let mut state = state_with_recipients();
    let result = update(&mut state, Message::PreviewDraft);
    assert!(result.action.is_none());
    assert_eq!(
        latest_message(&state),
        Some(("Opening email preview...", Severity::Info))
    );
}

#[test]
fn test_send_with_subject_but_blank_body_warns() {
    let mut state = state_with_recipients();
    type_into(&mut state, FieldId::Subject, "Quick question");
    type_into(&mut state, FieldId::Body, "   ");

    let result = update(&mut state, Message::SendDraft);

    assert!(result.action.is_none());
    assert!(state.sequence.trigger.is_enabled());
    assert_eq!(
        latest_message(&state),
        Some((
            "Please fill in both subject and email template",
            Severity::Warning
        ))
    );
}

#[test]
fn test_send_valid_draft_marks_busy() {
    let mut state = state_with_recipients();
    type_into(&mut state, FieldId::Subject, "Quick question");
    type_into(&mut state, FieldId::Body, "Hi there");

    let result = update(&mut state, Message::SendDraft);

    match result.action {
        Some(UpdateAction::SendSequence { draft }) => {
            assert_eq!(draft.subject, "Quick question");
            assert_eq!(draft.body, "Hi there");
            assert_eq!(draft.recipients.len(), 3);
        }
        other => panic!("unexpected action: {:?}", other),
    }
    assert_eq!(state.sequence.trigger.label(), "Sending...");

    let again = update(&mut state, Message::SendDraft);
    assert!(again.action.is_none());
}

#[test]
fn test_send_success_resets_draft() {
    let mut state = state_with_recipients();
    type_into(&mut state, FieldId::Subject, "Hello");
    type_into(&mut state, FieldId::Body, "Body");
    update(&mut state, Message::SendDraft);

    update(
        &mut state,
        Message::DraftSent {
            receipt: SendReceipt::sent(3),
        },
    );

    assert_eq!(state.sequence.trigger.label(), "Send Sequence");
    assert!(state.sequence.subject.is_blank());
    assert!(state.sequence.recipients().is_empty());
    assert_eq!(
        latest_message(&state),
        Some(("Sequence sent successfully!", Severity::Success))
    );
}

#[test]
fn test_draft_is_frozen_while_sending() {
    let mut state = state_with_recipients();
    type_into(&mut state, FieldId::Subject, "Hello");
    type_into(&mut state, FieldId::Body, "Body");
    update(&mut state, Message::SendDraft);

    // Edits, re-seeding and removal all arrive during the in-flight send
    type_into(&mut state, FieldId::Subject, " again");
    update(&mut state, Message::SetAllLeads(false));
    update(&mut state, Message::ToggleLead(LeadId(2)));
    update(&mut state, Message::RequestSequence);
    assert_eq!(
        latest_message(&state),
        Some((
            "Please wait for the current sequence to finish sending",
            Severity::Warning
        ))
    );
    update(&mut state, Message::RemoveRecipient(LeadId(1)));

    assert_eq!(state.sequence.subject.as_str(), "Hello");
    assert_eq!(state.sequence.recipients().len(), 3);

    update(
        &mut state,
        Message::DraftSent {
            receipt: SendReceipt::sent(3),
        },
    );
    assert!(state.sequence.subject.is_blank());
    assert!(state.sequence.recipients().is_empty());

    // Unlocked again once the send completes
    type_into(&mut state, FieldId::Subject, "Next");
    update(&mut state, Message::RequestSequence);
    assert_eq!(state.sequence.subject.as_str(), "Next");
    let ids: Vec<_> = state.sequence.recipients().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![LeadId(2)]);
}

#[test]
fn test_description_edits_are_not_locked_by_send() {
    let mut state = state_with_recipients();
    type_into(&mut state, FieldId::Subject, "Hello");
    type_into(&mut state, FieldId::Body, "Body");
    update(&mut state, Message::SendDraft);

    type_into(&mut state, FieldId::Description, "CRM");
    assert_eq!(state.analysis.description.as_str(), "CRM");
}

#[test]
fn test_send_failure_keeps_draft() {
    let mut state = state_with_recipients();
    type_into(&mut state, FieldId::Subject, "Hello");
    type_into(&mut state, FieldId::Body, "Body");
    update(&mut state, Message::SendDraft);

    update(
        &mut state,
        Message::DraftSendFailed {
            error: ServiceError::rejected(Some(503), Some("SMTP unavailable".into())),
        },
    );

    assert!(state.sequence.trigger.is_enabled());
    assert_eq!(state.sequence.subject.as_str(), "Hello");
    assert_eq!(state.sequence.recipients().len(), 3);
    assert_eq!(
        latest_message(&state),
        Some(("Send failed: SMTP unavailable", Severity::Error))
    );
}

#[test]
fn test_sequence_keys_follow_focus() {
    let mut state = state_with_recipients();
    assert_eq!(state.sequence.focus, SequenceFocus::Subject);

    press(&mut state, InputKey::Char('H'));
    press(&mut state, InputKey::Enter);
    assert_eq!(state.sequence.focus, SequenceFocus::Body);

    press(&mut state, InputKey::Char('x'));
    press(&mut state, InputKey::Enter);
    assert_eq!(state.sequence.body.as_str(), "x\n");

    press(&mut state, InputKey::Tab);
    assert_eq!(state.sequence.focus, SequenceFocus::Recipients);
    press(&mut state, InputKey::Char('x'));
    assert_eq!(state.sequence.recipients().len(), 2);
    assert_eq!(state.sequence.subject.as_str(), "H");
}

// ─────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_x_dismisses_newest_notification() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::Notify {
            message: "first".into(),
            severity: Severity::Info,
        },
    );
    update(
        &mut state,
        Message::Notify {
            message: "second".into(),
            severity: Severity::Error,
        },
    );

    press(&mut state, InputKey::CharCtrl('x'));

    assert_eq!(state.notifications.len(), 1);
    assert_eq!(latest_message(&state), Some(("first", Severity::Info)));
}

#[test]
fn test_dismiss_twice_is_noop() {
    let mut state = AppState::new();
    let id = state.notify("hello", Severity::Info);
    update(&mut state, Message::DismissNotification(id));
    update(&mut state, Message::DismissNotification(id));
    assert!(state.notifications.is_empty());
}

#[test]
fn test_tick_keeps_fresh_notifications() {
    let mut state = AppState::new();
    state.notify("fresh", Severity::Info);
    update(&mut state, Message::Tick);
    assert_eq!(state.notifications.len(), 1);
}
