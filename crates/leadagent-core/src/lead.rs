//! Lead contacts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of a lead row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub u64);

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One candidate outreach contact, as returned by the lead service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
}

impl Lead {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        company: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: LeadId(id),
            name: name.into(),
            company: company.into(),
            title: title.into(),
            email: email.into(),
            linkedin: None,
            company_size: None,
            industry: None,
            location: None,
            insight: None,
        }
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = Some(insight.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A batch of generated leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadBatch {
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Placeholder rows shown before any lead generation has run.
pub fn placeholder_leads() -> Vec<Lead> {
    vec![
        Lead::new(
            1,
            "Sarah Johnson",
            "TechFlow Solutions",
            "Project Manager",
            "sarah.j@techflow.io",
        )
        .with_location("San Francisco, CA")
        .with_insight("Recently expanded remote team to 50+ developers"),
        Lead::new(
            2,
            "Michael Chen",
            "Nova Digital",
            "Director of Operations",
            "m.chen@novadigital.com",
        )
        .with_location("Austin, TX")
        .with_insight("Managing 15+ client campaigns simultaneously"),
        Lead::new(
            3,
            "Emily Rodriguez",
            "Spark Creative",
            "Marketing Team Lead",
            "e.rodriguez@sparkcreative.co",
        )
        .with_location("New York, NY")
        .with_insight("Looking to streamline client collaboration workflows"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_leads_have_unique_ids() {
        let leads = placeholder_leads();
        assert_eq!(leads.len(), 3);
        let mut ids: Vec<_> = leads.iter().map(|l| l.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_lead_parses_backend_shape() {
        let json = r#"{
            "id": 2,
            "name": "Michael Chen",
            "company": "Nova Digital",
            "title": "Director of Operations",
            "email": "m.chen@novadigital.com",
            "linkedin": "https://linkedin.com/in/michaelchen",
            "company_size": "85 employees",
            "industry": "Marketing Agency",
            "location": "Austin, TX",
            "insight": "Managing 15+ client campaigns simultaneously"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.id, LeadId(2));
        assert_eq!(lead.company_size.as_deref(), Some("85 employees"));
    }

    #[test]
    fn test_lead_batch_tolerates_missing_fields() {
        let batch: LeadBatch =
            serde_json::from_str(r#"{"leads": [{"id": 9, "name": "Ada"}]}"#).unwrap();
        assert_eq!(batch.leads.len(), 1);
        assert_eq!(batch.leads[0].company, "");
        assert!(batch.generated_at.is_none());
    }

    #[test]
    fn test_lead_batch_parses_timestamp() {
        let batch: LeadBatch = serde_json::from_str(
            r#"{"leads": [], "total": 0, "generated_at": "2025-01-15T10:30:00Z"}"#,
        )
        .unwrap();
        assert!(batch.generated_at.is_some());
    }
}
