//! Local stand-ins for the backend services

use std::time::Duration;

use leadagent_core::prelude::*;
use leadagent_core::{
    placeholder_leads, AnalysisResult, AudienceSegment, DecisionMaker, LeadBatch, TargetAudience,
    TargetCountry,
};

use super::{AnalysisService, LeadCriteria, LeadService, SendReceipt, SendService};
use crate::sequence::SequenceDraft;

/// Returns a fixed analysis regardless of the description
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAnalysis;

impl AnalysisService for StubAnalysis {
    async fn analyze(&self, description: &str) -> std::result::Result<AnalysisResult, ServiceError> {
        debug!("Stub analysis for {} chars of description", description.len());
        Ok(sample_analysis())
    }
}

fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        target_audience: Some(TargetAudience {
            primary: Some("Growing agencies and remote-first teams".into()),
            industry: Some("Professional Services".into()),
            company_size: Some("20-200 employees".into()),
            characteristics: Some("scattered client communication, manual reporting".into()),
            revenue: Some("$2M-$50M".into()),
            decision_maker: Some(DecisionMaker {
                title: Some("Director of Operations".into()),
                department: Some("Operations".into()),
            }),
            ..Default::default()
        }),
        additional_target_audiences: vec![
            AudienceSegment {
                rank: Some(1),
                company_type: Some("Marketing agencies".into()),
                rationale: Some("Run many parallel client campaigns".into()),
            },
            AudienceSegment {
                rank: Some(2),
                company_type: Some("Software consultancies".into()),
                rationale: Some("Distributed teams with client-facing deadlines".into()),
            },
        ],
        target_countries: vec![
            TargetCountry {
                rank: Some(1),
                country: "United States".into(),
                market_size_insight: Some("Largest agency market".into()),
            },
            TargetCountry {
                rank: Some(2),
                country: "United Kingdom".into(),
                market_size_insight: Some("Dense agency hub around London".into()),
            },
        ],
    }
}

/// Returns the placeholder leads
#[derive(Debug, Clone, Copy, Default)]
pub struct StubLeads;

impl LeadService for StubLeads {
    async fn generate(
        &self,
        criteria: &LeadCriteria,
    ) -> std::result::Result<LeadBatch, ServiceError> {
        let limit = match criteria.limit {
            0 => usize::MAX,
            n => n as usize,
        };
        let leads: Vec<_> = placeholder_leads().into_iter().take(limit).collect();
        Ok(LeadBatch {
            total: Some(leads.len()),
            leads,
            generated_at: None,
        })
    }
}

/// Simulated sender: waits, then reports every recipient as sent
#[derive(Debug, Clone)]
pub struct StubSend {
    delay: Duration,
}

impl StubSend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SendService for StubSend {
    async fn send(&self, draft: &SequenceDraft) -> std::result::Result<SendReceipt, ServiceError> {
        debug!(
            "Stub send of '{}' to {} recipients after {:?}",
            draft.subject,
            draft.recipients.len(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(SendReceipt::sent(draft.recipients.len()))
    }
}
