//! Configuration types

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which implementation backs a service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Canned local data, no network
    #[default]
    Stub,
    /// HTTP calls against `service.base_url`
    Http,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Stub => write!(f, "stub"),
            Backend::Http => write!(f, "http"),
        }
    }
}

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub analysis: AnalysisSettings,

    #[serde(default)]
    pub leads: LeadSettings,

    #[serde(default)]
    pub send: SendSettings,
}

/// Backend location shared by every HTTP service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_http_backend")]
    pub backend: Backend,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            backend: Backend::Http,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeadSettings {
    #[serde(default)]
    pub backend: Backend,

    /// Maximum rows requested from the Lead Service
    #[serde(default = "default_lead_limit")]
    pub limit: u32,
}

impl Default for LeadSettings {
    fn default() -> Self {
        Self {
            backend: Backend::Stub,
            limit: default_lead_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SendSettings {
    #[serde(default)]
    pub backend: Backend,

    /// Simulated latency of the stub sender
    #[serde(default = "default_stub_delay_ms")]
    pub stub_delay_ms: u64,
}

impl Default for SendSettings {
    fn default() -> Self {
        Self {
            backend: Backend::Stub,
            stub_delay_ms: default_stub_delay_ms(),
        }
    }
}

impl SendSettings {
    pub fn stub_delay(&self) -> Duration {
        Duration::from_millis(self.stub_delay_ms)
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_http_backend() -> Backend {
    Backend::Http
}

fn default_lead_limit() -> u32 {
    50
}

fn default_stub_delay_ms() -> u64 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.service.base_url, "http://localhost:8000");
        assert_eq!(settings.service.timeout(), Duration::from_secs(60));
        assert_eq!(settings.analysis.backend, Backend::Http);
        assert_eq!(settings.leads.backend, Backend::Stub);
        assert_eq!(settings.leads.limit, 50);
        assert_eq!(settings.send.backend, Backend::Stub);
        assert_eq!(settings.send.stub_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let settings: Settings = toml::from_str("[send]\nbackend = \"http\"\n").unwrap();
        assert_eq!(settings.send.backend, Backend::Http);
        assert_eq!(settings.send.stub_delay_ms, 3000);
        assert_eq!(settings.analysis.backend, Backend::Http);
    }

    #[test]
    fn test_backend_display() {
        assert_eq!(Backend::Stub.to_string(), "stub");
        assert_eq!(Backend::Http.to_string(), "http");
    }
}
