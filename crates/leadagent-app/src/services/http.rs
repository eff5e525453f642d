//! HTTP implementations of the service traits

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use leadagent_core::prelude::*;
use leadagent_core::{AnalysisResult, LeadBatch, LeadId, ServiceEnvelope};

use super::{AnalysisService, LeadCriteria, LeadService, SendReceipt, SendService};
use crate::config::ServiceSettings;
use crate::sequence::SequenceDraft;

const ANALYZE_PATH: &str = "api/analyze-product";
const GENERATE_LEADS_PATH: &str = "api/generate-leads";
const SEND_SEQUENCE_PATH: &str = "api/send-sequence";

/// JSON-over-HTTP client for the lead-generation API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self> {
        let mut base_url = Url::parse(&settings.base_url).map_err(|e| {
            Error::config_invalid(format!(
                "service.base_url '{}' is not a valid URL: {}",
                settings.base_url, e
            ))
        })?;

        // Endpoint paths are joined relative to the base path
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| ServiceError::transport(format!("bad endpoint {}: {}", path, e)))
    }

    /// POST `body` as JSON and unwrap the response envelope.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> std::result::Result<T, ServiceError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!("POST {} failed: {}", url, e);
                ServiceError::transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::transport(e.to_string()))?;

        let envelope: ServiceEnvelope<T> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if !(200..300).contains(&status) => {
                // Non-JSON error page: status is all we have
                warn!("POST {} -> {} with non-JSON body", url, status);
                return Err(ServiceError::rejected(Some(status), None));
            }
            Err(e) => return Err(ServiceError::decode(e.to_string())),
        };

        let result = envelope.into_result(status);
        if let Err(ref e) = result {
            warn!("POST {} -> {}: {}", url, status, e);
        }
        result
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    description: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpAnalysis {
    client: HttpClient,
}

impl HttpAnalysis {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl AnalysisService for HttpAnalysis {
    async fn analyze(&self, description: &str) -> std::result::Result<AnalysisResult, ServiceError> {
        self.client
            .post_json(ANALYZE_PATH, &AnalyzeRequest { description })
            .await
    }
}

#[derive(Debug, Clone)]
pub struct HttpLeads {
    client: HttpClient,
}

impl HttpLeads {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl LeadService for HttpLeads {
    async fn generate(
        &self,
        criteria: &LeadCriteria,
    ) -> std::result::Result<LeadBatch, ServiceError> {
        self.client.post_json(GENERATE_LEADS_PATH, criteria).await
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    leads: Vec<LeadId>,
    subject: &'a str,
    template: &'a str,
    schedule: &'static str,
}

#[derive(Debug, Deserialize)]
struct SendData {
    #[serde(default)]
    emails_sent: Option<usize>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpSend {
    client: HttpClient,
}

impl HttpSend {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl SendService for HttpSend {
    async fn send(&self, draft: &SequenceDraft) -> std::result::Result<SendReceipt, ServiceError> {
        let request = SendRequest {
            leads: draft.recipient_ids(),
            subject: &draft.subject,
            template: &draft.body,
            schedule: "immediate",
        };

        let data: SendData = self.client.post_json(SEND_SEQUENCE_PATH, &request).await?;

        Ok(SendReceipt {
            success: true,
            sent: data.emails_sent.unwrap_or(draft.recipients.len()),
            message: data
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| SendReceipt::DEFAULT_MESSAGE.to_string()),
        })
    }
}
