//! Analysis flow: description input, analyze trigger, result view

pub mod projection;

pub use projection::{project, AnalysisView, RankedCountry, RankedSegment, ResultSlot, FIELD_MAP};

use leadagent_core::AnalysisResult;

use crate::busy::BusyTrigger;
use crate::text_input::TextField;

/// Which half of the Product view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisStage {
    /// Description input form
    #[default]
    Form,
    /// Projected analysis result
    Results,
}

#[derive(Debug, Clone)]
pub struct AnalysisFlow {
    pub description: TextField,
    pub trigger: BusyTrigger,
    /// "Generate leads" control on the result view
    pub lead_trigger: BusyTrigger,
    pub stage: AnalysisStage,
    /// Raw result of the last successful analysis (feeds lead generation)
    pub result: Option<AnalysisResult>,
    /// Projection of `result`, rebuilt whenever `result` changes
    pub view: Option<AnalysisView>,
}

impl Default for AnalysisFlow {
    fn default() -> Self {
        Self {
            description: TextField::multi_line(),
            trigger: BusyTrigger::new("Analyze Product", "Analyzing with AI..."),
            lead_trigger: BusyTrigger::new("Generate Leads", "Generating leads..."),
            stage: AnalysisStage::Form,
            result: None,
            view: None,
        }
    }
}

impl AnalysisFlow {
    /// Store a fresh result and switch to the result view. Any previous
    /// result is discarded.
    pub fn show_result(&mut self, result: AnalysisResult) {
        self.view = Some(project(&result));
        self.result = Some(result);
        self.stage = AnalysisStage::Results;
    }

    /// Return to the input form, keeping the description
    pub fn show_form(&mut self) {
        self.stage = AnalysisStage::Form;
    }

    pub fn is_editing(&self) -> bool {
        self.stage == AnalysisStage::Form
    }
}
