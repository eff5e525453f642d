//! Application state (Model in TEA pattern)

use leadagent_core::{placeholder_leads, Severity};

use crate::analysis::AnalysisFlow;
use crate::config::Settings;
use crate::leads::LeadSelection;
use crate::notifications::{NotificationCenter, NotificationId};
use crate::sequence::SequenceFlow;
use crate::views::ViewController;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Settings loaded at startup
    pub settings: Settings,

    pub views: ViewController,
    pub analysis: AnalysisFlow,
    pub leads: LeadSelection,
    pub sequence: SequenceFlow,

    /// Notification area, owned for the life of the process
    pub notifications: NotificationCenter,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            settings,
            views: ViewController::new(),
            analysis: AnalysisFlow::default(),
            leads: LeadSelection::new(placeholder_leads()),
            sequence: SequenceFlow::default(),
            notifications: NotificationCenter::new(),
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notifications.notify(message, severity)
    }

    /// True while any service call started from the UI is outstanding
    pub fn any_busy(&self) -> bool {
        self.analysis.trigger.is_busy()
            || self.analysis.lead_trigger.is_busy()
            || self.sequence.trigger.is_busy()
    }

    /// Quit unless a request is in flight; returns whether quitting began.
    pub fn request_quit(&mut self) -> bool {
        if self.any_busy() {
            self.notify(
                "A request is still in flight; press Ctrl+C to quit anyway",
                Severity::Warning,
            );
            return false;
        }
        self.phase = AppPhase::Quitting;
        true
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadagent_core::View;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.views.active(), View::Product);
        assert_eq!(state.leads.len(), 3);
        assert_eq!(state.leads.selected_count(), 0);
        assert!(state.notifications.is_empty());
        assert!(!state.any_busy());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_request_quit_refused_while_busy() {
        let mut state = AppState::new();
        state.sequence.trigger.try_acquire();
        assert!(!state.request_quit());
        assert!(!state.should_quit());
        assert_eq!(state.notifications.len(), 1);

        state.sequence.trigger.release();
        assert!(state.request_quit());
        assert!(state.should_quit());
    }
}
