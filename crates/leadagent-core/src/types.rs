//! Core domain types shared by the app and TUI layers

use serde::{Deserialize, Serialize};

/// One of the three mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Product description entry and analysis results
    #[default]
    Product,
    /// Lead table with selection
    Leads,
    /// Outreach sequence composition
    Sequences,
}

impl View {
    /// All views in tab-bar order
    pub const ALL: [View; 3] = [View::Product, View::Leads, View::Sequences];

    /// Stable identifier used at string boundaries (config, CLI, logs)
    pub fn name(&self) -> &'static str {
        match self {
            View::Product => "product",
            View::Leads => "leads",
            View::Sequences => "sequences",
        }
    }

    /// Human-readable tab title
    pub fn title(&self) -> &'static str {
        match self {
            View::Product => "Product",
            View::Leads => "Leads",
            View::Sequences => "Sequences",
        }
    }

    /// Parse a view identifier; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<View> {
        View::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Position in the tab bar (0-based)
    pub fn index(&self) -> usize {
        match self {
            View::Product => 0,
            View::Leads => 1,
            View::Sequences => 2,
        }
    }

    pub fn next(&self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn previous(&self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Notification severity; each maps to a fixed visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}
