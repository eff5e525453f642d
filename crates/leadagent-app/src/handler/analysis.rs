//! Product analysis and lead generation handlers

use leadagent_core::prelude::*;
use leadagent_core::{AnalysisResult, LeadBatch, Severity, View};

use crate::services::LeadCriteria;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Validate the description and start the Analysis Service call
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.analysis.trigger.is_busy() {
        debug!("Analysis already in flight; ignoring submit");
        return UpdateResult::none();
    }

    let description = state.analysis.description.as_str().trim().to_string();
    if description.is_empty() {
        state.notify("Please enter a product description", Severity::Warning);
        return UpdateResult::none();
    }

    state.analysis.trigger.try_acquire();
    info!("Submitting {} chars for analysis", description.len());
    UpdateResult::action(UpdateAction::Analyze { description })
}

pub fn handle_completed(state: &mut AppState, result: AnalysisResult) -> UpdateResult {
    state.analysis.trigger.release();
    state.analysis.show_result(result);
    state.notify("Analysis completed successfully!", Severity::Success);
    UpdateResult::none()
}

/// The input form stays visible so the user can retry.
pub fn handle_failed(state: &mut AppState, error: ServiceError) -> UpdateResult {
    state.analysis.trigger.release();
    warn!("Analysis failed: {}", error);
    state.notify(
        format!("Analysis failed: {}", error.user_message("Analysis failed")),
        Severity::Error,
    );
    UpdateResult::none()
}

/// Switch to Leads and ask the Lead Service for rows matching the
/// current analysis.
pub fn handle_generate_leads(state: &mut AppState) -> UpdateResult {
    if state.analysis.lead_trigger.is_busy() {
        debug!("Lead generation already in flight; ignoring request");
        return UpdateResult::none();
    }

    state.views.activate(View::Leads);
    state.notify(
        "Generating leads based on your analysis...",
        Severity::Info,
    );
    state.analysis.lead_trigger.try_acquire();

    let criteria = LeadCriteria {
        target_audience: state
            .analysis
            .result
            .as_ref()
            .and_then(|r| r.target_audience.clone()),
        limit: state.settings.leads.limit,
    };
    UpdateResult::action(UpdateAction::GenerateLeads { criteria })
}

/// An empty batch keeps the current rows.
pub fn handle_leads_generated(state: &mut AppState, batch: LeadBatch) -> UpdateResult {
    state.analysis.lead_trigger.release();

    if batch.leads.is_empty() {
        state.notify("No leads matched this analysis", Severity::Warning);
        return UpdateResult::none();
    }

    let count = batch.leads.len();
    info!(
        "Received {} leads (total reported: {:?})",
        count, batch.total
    );
    state.leads.replace_rows(batch.leads);
    state.notify(format!("Generated {} leads", count), Severity::Success);
    UpdateResult::none()
}

pub fn handle_lead_generation_failed(state: &mut AppState, error: ServiceError) -> UpdateResult {
    state.analysis.lead_trigger.release();
    warn!("Lead generation failed: {}", error);
    state.notify(
        format!(
            "Lead generation failed: {}",
            error.user_message("Lead generation failed")
        ),
        Severity::Error,
    );
    UpdateResult::none()
}
