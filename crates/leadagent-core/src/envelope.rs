//! Success/failure envelope shared by the backend's JSON endpoints
//!
//! Success: `{"success": true, "data": {...}}`
//! Structured failure: `{"success": false, "error": "...", "detail": "..."}`
//! HTTP-level failure (non-2xx): `{"detail": "..."}`

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl<T> ServiceEnvelope<T> {
    /// Best human-readable failure message carried by the envelope.
    pub fn failure_message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .or(self.error.as_ref())
            .filter(|m| !m.trim().is_empty())
            .cloned()
    }

    /// Collapse the envelope into the payload, given the HTTP status it
    /// arrived with. Non-2xx wins over the body's `success` flag.
    pub fn into_result(self, status: u16) -> Result<T, ServiceError> {
        if !(200..300).contains(&status) {
            return Err(ServiceError::rejected(Some(status), self.failure_message()));
        }
        if !self.success {
            return Err(ServiceError::rejected(Some(status), self.failure_message()));
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(ServiceError::decode("success response without data")),
        }
    }
}
