//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `analysis`: Product analysis and lead generation
//! - `leads`: Lead table selection
//! - `sequence`: Sequence composer and send

pub(crate) mod analysis;
pub(crate) mod keys;
pub(crate) mod leads;
pub(crate) mod sequence;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::sequence::SequenceDraft;
use crate::services::LeadCriteria;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Call the Analysis Service with a trimmed, non-empty description.
    /// Answered by `AnalysisCompleted` or `AnalysisFailed`.
    Analyze { description: String },

    /// Call the Lead Service.
    /// Answered by `LeadsGenerated` or `LeadGenerationFailed`.
    GenerateLeads { criteria: LeadCriteria },

    /// Call the Send Service with a validated draft.
    /// Answered by `DraftSent` or `DraftSendFailed`.
    SendSequence { draft: SequenceDraft },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
