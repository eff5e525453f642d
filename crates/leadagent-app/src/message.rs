//! Message types for the application (TEA pattern)

use leadagent_core::{AnalysisResult, LeadBatch, LeadId, ServiceError, Severity, View};

use crate::input_key::InputKey;
use crate::leads::CursorMove;
use crate::notifications::NotificationId;
use crate::services::SendReceipt;
use crate::text_input::TextEdit;

/// Editable text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    /// Product description on the Product view
    Description,
    /// Sequence subject line
    Subject,
    /// Sequence body template
    Body,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notification expiry)
    Tick,

    /// Request to quit (refused while a request is in flight)
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Messages
    // ─────────────────────────────────────────────────────────
    ActivateView(View),
    NextView,
    PreviousView,

    /// Apply an edit to a text field
    Edit { field: FieldId, edit: TextEdit },

    // ─────────────────────────────────────────────────────────
    // Analysis Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the product description for analysis
    SubmitAnalysis,
    /// Analysis Service returned a result
    AnalysisCompleted { result: AnalysisResult },
    /// Analysis Service call failed
    AnalysisFailed { error: ServiceError },
    /// Back from the result view to the input form
    ShowAnalysisForm,
    /// Ask the Lead Service for rows matching the current analysis
    GenerateLeads,
    LeadsGenerated { batch: LeadBatch },
    LeadGenerationFailed { error: ServiceError },

    // ─────────────────────────────────────────────────────────
    // Lead Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Set every row's selected flag
    SetAllLeads(bool),
    /// "Select all" checkbox activation: checks all unless all are checked
    ToggleAllLeads,
    ToggleLead(LeadId),
    MoveLeadCursor(CursorMove),
    ViewLead(LeadId),
    EmailLead(LeadId),
    /// Advance the checked rows to the Sequences view
    RequestSequence,

    // ─────────────────────────────────────────────────────────
    // Sequence Messages
    // ─────────────────────────────────────────────────────────
    CycleSequenceFocus { forward: bool },
    MoveRecipientCursor { down: bool },
    RemoveRecipient(LeadId),
    PreviewDraft,
    SendDraft,
    /// Send Service accepted the draft
    DraftSent { receipt: SendReceipt },
    DraftSendFailed { error: ServiceError },

    // ─────────────────────────────────────────────────────────
    // Notification Messages
    // ─────────────────────────────────────────────────────────
    Notify { message: String, severity: Severity },
    DismissNotification(NotificationId),
    DismissLatestNotification,
}
