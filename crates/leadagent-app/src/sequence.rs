//! Sequence flow: recipient list and the subject/body draft

use leadagent_core::prelude::*;
use leadagent_core::{Lead, LeadId};

use crate::busy::BusyTrigger;
use crate::text_input::{TextEdit, TextField};

/// Which part of the composer receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceFocus {
    #[default]
    Subject,
    Body,
    Recipients,
}

impl SequenceFocus {
    pub fn next(self) -> Self {
        match self {
            SequenceFocus::Subject => SequenceFocus::Body,
            SequenceFocus::Body => SequenceFocus::Recipients,
            SequenceFocus::Recipients => SequenceFocus::Subject,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SequenceFocus::Subject => SequenceFocus::Recipients,
            SequenceFocus::Body => SequenceFocus::Subject,
            SequenceFocus::Recipients => SequenceFocus::Body,
        }
    }
}

/// Snapshot of a draft handed to the Send Service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDraft {
    pub recipients: Vec<Lead>,
    pub subject: String,
    pub body: String,
}

impl SequenceDraft {
    pub fn recipient_ids(&self) -> Vec<LeadId> {
        self.recipients.iter().map(|l| l.id).collect()
    }
}

#[derive(Debug, Clone)]
pub struct SequenceFlow {
    pub subject: TextField,
    pub body: TextField,
    pub focus: SequenceFocus,
    pub trigger: BusyTrigger,
    recipients: Vec<Lead>,
    recipient_cursor: usize,
}

impl Default for SequenceFlow {
    fn default() -> Self {
        Self {
            subject: TextField::single_line(),
            body: TextField::multi_line(),
            focus: SequenceFocus::default(),
            trigger: BusyTrigger::new("Send Sequence", "Sending..."),
            recipients: Vec::new(),
            recipient_cursor: 0,
        }
    }
}

impl SequenceFlow {
    /// The draft is frozen while a send is in flight, so the reset on
    /// success only ever clears the draft that was sent.
    pub fn is_locked(&self) -> bool {
        self.trigger.is_busy()
    }

    /// Replace the recipient set with the given leads (the checked rows)
    pub fn seed_recipients(&mut self, leads: Vec<Lead>) {
        debug!("Seeding sequence with {} recipients", leads.len());
        self.recipients = leads;
        self.recipient_cursor = 0;
    }

    /// Remove one recipient. Unknown ids are ignored.
    pub fn remove_recipient(&mut self, id: LeadId) -> bool {
        let Some(index) = self.recipients.iter().position(|l| l.id == id) else {
            return false;
        };
        self.recipients.remove(index);
        if self.recipient_cursor >= self.recipients.len() {
            self.recipient_cursor = self.recipients.len().saturating_sub(1);
        }
        true
    }

    pub fn recipients(&self) -> &[Lead] {
        &self.recipients
    }

    pub fn recipient_cursor(&self) -> usize {
        self.recipient_cursor
    }

    pub fn current_recipient(&self) -> Option<&Lead> {
        self.recipients.get(self.recipient_cursor)
    }

    pub fn move_recipient_cursor(&mut self, down: bool) {
        let last = self.recipients.len().saturating_sub(1);
        self.recipient_cursor = if down {
            (self.recipient_cursor + 1).min(last)
        } else {
            self.recipient_cursor.saturating_sub(1)
        };
    }

    /// Field that edits go to, if the focus is on a text field
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            SequenceFocus::Subject => Some(&mut self.subject),
            SequenceFocus::Body => Some(&mut self.body),
            SequenceFocus::Recipients => None,
        }
    }

    /// Both subject and body are non-empty after trimming
    pub fn is_complete(&self) -> bool {
        !self.subject.is_blank() && !self.body.is_blank()
    }

    pub fn draft(&self) -> SequenceDraft {
        SequenceDraft {
            recipients: self.recipients.clone(),
            subject: self.subject.as_str().trim().to_string(),
            body: self.body.as_str().to_string(),
        }
    }

    /// Clear the draft after a successful send. The trigger is left alone.
    pub fn reset(&mut self) {
        self.subject.apply(TextEdit::Clear);
        self.body.apply(TextEdit::Clear);
        self.recipients.clear();
        self.recipient_cursor = 0;
        self.focus = SequenceFocus::Subject;
    }
}
