//! View controller: which top-level view is visible

use leadagent_core::prelude::*;
use leadagent_core::View;

/// Owns the active view. Exactly one view is visible and exactly one tab
/// is marked active at any time; both are derived from the single
/// `active` field so they cannot disagree.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    active: View,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Show `view`, hiding every other view. Returns true if the active
    /// view changed.
    pub fn activate(&mut self, view: View) -> bool {
        if self.active == view {
            return false;
        }
        debug!("Activating view {} (was {})", view.name(), self.active.name());
        self.active = view;
        true
    }

    /// Activate a view by its string identifier. Unknown names are logged
    /// and leave the active view unchanged.
    pub fn activate_named(&mut self, name: &str) -> Option<View> {
        match View::from_name(name) {
            Some(view) => {
                self.activate(view);
                Some(view)
            }
            None => {
                warn!("Ignoring activation of unknown view '{}'", name);
                None
            }
        }
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.active == view
    }

    /// Tab-bar marking: `(view, active)` for every view in order
    pub fn tabs(&self) -> impl Iterator<Item = (View, bool)> + '_ {
        View::ALL.into_iter().map(move |v| (v, v == self.active))
    }
}
