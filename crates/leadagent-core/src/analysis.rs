//! Analysis service payload types
//!
//! Every field is optional on the wire: the analysis backend is an LLM
//! producing JSON, so partial answers are normal. Defaults are applied at
//! projection time, not here.
//!
//! The older prompt shape (`recommended_markets`, `target_regions`,
//! `roles`, `pain_points`) is accepted through aliases and the two
//! fallback fields on [`TargetAudience`].

use serde::{Deserialize, Deserializer, Serialize};

/// Structured analysis of a product description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub target_audience: Option<TargetAudience>,

    /// Secondary audience segments, in display order
    #[serde(default, alias = "recommended_markets")]
    pub additional_target_audiences: Vec<AudienceSegment>,

    /// Target countries, in display order
    #[serde(default, alias = "target_regions")]
    pub target_countries: Vec<TargetCountry>,
}

/// Primary target audience descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAudience {
    /// Primary company type, e.g. "Mid-sized healthcare clinics"
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub characteristics: Option<String>,
    #[serde(default)]
    pub revenue: Option<String>,
    #[serde(default)]
    pub decision_maker: Option<DecisionMaker>,

    /// Buyer roles; the first stands in for a missing decision-maker title
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// Stands in for missing `characteristics`
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub pain_points: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionMaker {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// A ranked secondary audience segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceSegment {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default, alias = "label", alias = "market")]
    pub company_type: Option<String>,
    #[serde(default, alias = "description")]
    pub rationale: Option<String>,
}

/// A ranked target country
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCountry {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default, alias = "region")]
    pub country: String,
    #[serde(default, alias = "reasoning")]
    pub market_size_insight: Option<String>,
}

/// Accept either `"a, b"` or `["a", "b"]` for free-text list fields.
fn string_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(
        match Option::<StringOrList>::deserialize(deserializer)? {
            None => None,
            Some(StringOrList::One(s)) => Some(s),
            Some(StringOrList::Many(items)) if items.is_empty() => None,
            Some(StringOrList::Many(items)) => Some(items.join(", ")),
        },
    )
}
