//! Service layer for Lead Agent
//!
//! The three backend collaborators are async traits. Each has an HTTP
//! implementation talking to the lead-generation API and a stub that
//! fabricates data locally. Which one runs is chosen per service in
//! `config.toml`.
//!
//! ```text
//! update() ──UpdateAction──▶ actions::handle_action ──tokio::spawn──▶ ServiceSet
//!     ▲                                                                  │
//!     └──────────────── completion Message (mpsc) ◀──────────────────────┘
//! ```
//!
//! Completion is always reported back as exactly one message, so the busy
//! trigger that started the call is released on every path.

mod http;
mod stub;

use std::sync::Arc;

use serde::Serialize;

use leadagent_core::prelude::*;
use leadagent_core::{AnalysisResult, LeadBatch, TargetAudience};

use crate::config::{Backend, Settings};
use crate::sequence::SequenceDraft;

pub use http::{HttpAnalysis, HttpClient, HttpLeads, HttpSend};
pub use stub::{StubAnalysis, StubLeads, StubSend};

/// Product analysis
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Analyze a free-text product description
    async fn analyze(&self, description: &str) -> std::result::Result<AnalysisResult, ServiceError>;
}

/// Lead generation for an analyzed product
#[trait_variant::make(LeadService: Send)]
pub trait LocalLeadService {
    async fn generate(&self, criteria: &LeadCriteria)
        -> std::result::Result<LeadBatch, ServiceError>;
}

/// Outreach sequence delivery
#[trait_variant::make(SendService: Send)]
pub trait LocalSendService {
    async fn send(&self, draft: &SequenceDraft) -> std::result::Result<SendReceipt, ServiceError>;
}

/// What the Lead Service is asked for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<TargetAudience>,
    pub limit: u32,
}

/// Outcome of a send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub success: bool,
    /// Number of emails accepted for delivery
    pub sent: usize,
    pub message: String,
}

impl SendReceipt {
    pub const DEFAULT_MESSAGE: &'static str = "Sequence sent successfully!";

    pub fn sent(sent: usize) -> Self {
        Self {
            success: true,
            sent,
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend selection
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum AnalysisBackend {
    Stub(StubAnalysis),
    Http(HttpAnalysis),
}

impl AnalysisService for AnalysisBackend {
    async fn analyze(&self, description: &str) -> std::result::Result<AnalysisResult, ServiceError> {
        match self {
            AnalysisBackend::Stub(s) => AnalysisService::analyze(s, description).await,
            AnalysisBackend::Http(s) => AnalysisService::analyze(s, description).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum LeadBackend {
    Stub(StubLeads),
    Http(HttpLeads),
}

impl LeadService for LeadBackend {
    async fn generate(
        &self,
        criteria: &LeadCriteria,
    ) -> std::result::Result<LeadBatch, ServiceError> {
        match self {
            LeadBackend::Stub(s) => LeadService::generate(s, criteria).await,
            LeadBackend::Http(s) => LeadService::generate(s, criteria).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SendBackend {
    Stub(StubSend),
    Http(HttpSend),
}

impl SendService for SendBackend {
    async fn send(&self, draft: &SequenceDraft) -> std::result::Result<SendReceipt, ServiceError> {
        match self {
            SendBackend::Stub(s) => SendService::send(s, draft).await,
            SendBackend::Http(s) => SendService::send(s, draft).await,
        }
    }
}

/// Shared handles to the three services, cloned into every spawned call
pub struct ServiceSet<A, L, S> {
    pub analysis: Arc<A>,
    pub leads: Arc<L>,
    pub send: Arc<S>,
}

impl<A, L, S> Clone for ServiceSet<A, L, S> {
    fn clone(&self) -> Self {
        Self {
            analysis: Arc::clone(&self.analysis),
            leads: Arc::clone(&self.leads),
            send: Arc::clone(&self.send),
        }
    }
}

impl<A, L, S> ServiceSet<A, L, S> {
    pub fn new(analysis: A, leads: L, send: S) -> Self {
        Self {
            analysis: Arc::new(analysis),
            leads: Arc::new(leads),
            send: Arc::new(send),
        }
    }
}

/// Services as selected by configuration
pub type ConfiguredServices = ServiceSet<AnalysisBackend, LeadBackend, SendBackend>;

impl ConfiguredServices {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = HttpClient::new(&settings.service)?;

        let analysis = match settings.analysis.backend {
            Backend::Stub => AnalysisBackend::Stub(StubAnalysis),
            Backend::Http => AnalysisBackend::Http(HttpAnalysis::new(client.clone())),
        };
        let leads = match settings.leads.backend {
            Backend::Stub => LeadBackend::Stub(StubLeads),
            Backend::Http => LeadBackend::Http(HttpLeads::new(client.clone())),
        };
        let send = match settings.send.backend {
            Backend::Stub => SendBackend::Stub(StubSend::new(settings.send.stub_delay())),
            Backend::Http => SendBackend::Http(HttpSend::new(client)),
        };

        info!(
            "Services: analysis={} leads={} send={} base_url={}",
            settings.analysis.backend,
            settings.leads.backend,
            settings.send.backend,
            settings.service.base_url
        );

        Ok(Self::new(analysis, leads, send))
    }
}
