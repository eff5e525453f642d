//! Projection of an [`AnalysisResult`] into keyed result slots
//!
//! The result view is addressed by [`ResultSlot`] rather than by position,
//! and a single table ([`FIELD_MAP`]) says which payload field feeds which
//! slot and what it falls back to.

use std::collections::BTreeMap;

use leadagent_core::{flag_for, AnalysisResult, TargetAudience};

/// Stable identifiers for every scalar field of the result view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultSlot {
    Headline,
    Industry,
    CompanySize,
    Characteristics,
    Revenue,
    DecisionMakerTitle,
    DecisionMakerDepartment,
    /// Sentence composed from the resolved slots above
    Summary,
}

impl ResultSlot {
    pub fn label(&self) -> &'static str {
        match self {
            ResultSlot::Headline => "Primary Audience",
            ResultSlot::Industry => "Industry",
            ResultSlot::CompanySize => "Company Size",
            ResultSlot::Characteristics => "Characteristics",
            ResultSlot::Revenue => "Revenue",
            ResultSlot::DecisionMakerTitle => "Decision Maker",
            ResultSlot::DecisionMakerDepartment => "Department",
            ResultSlot::Summary => "Summary",
        }
    }
}

type FieldGetter = fn(&TargetAudience) -> Option<&str>;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn primary(a: &TargetAudience) -> Option<&str> {
    a.primary.as_deref()
}

fn industry(a: &TargetAudience) -> Option<&str> {
    a.industry.as_deref()
}

fn company_size(a: &TargetAudience) -> Option<&str> {
    a.company_size.as_deref()
}

fn characteristics(a: &TargetAudience) -> Option<&str> {
    non_blank(a.characteristics.as_deref()).or(a.pain_points.as_deref())
}

fn revenue(a: &TargetAudience) -> Option<&str> {
    a.revenue.as_deref()
}

fn decision_maker_title(a: &TargetAudience) -> Option<&str> {
    non_blank(a.decision_maker.as_ref().and_then(|d| d.title.as_deref()))
        .or_else(|| a.roles.first().map(String::as_str))
}

fn decision_maker_department(a: &TargetAudience) -> Option<&str> {
    a.decision_maker.as_ref().and_then(|d| d.department.as_deref())
}

/// Slot ← payload field, with the default used when the field is missing
/// or blank.
pub const FIELD_MAP: &[(ResultSlot, FieldGetter, &str)] = &[
    (ResultSlot::Headline, primary, "Target Audience"),
    (ResultSlot::Industry, industry, "Technology"),
    (ResultSlot::CompanySize, company_size, "50-500 employees"),
    (
        ResultSlot::Characteristics,
        characteristics,
        "various operational challenges",
    ),
    (ResultSlot::Revenue, revenue, "Not specified"),
    (
        ResultSlot::DecisionMakerTitle,
        decision_maker_title,
        "Decision Makers",
    ),
    (
        ResultSlot::DecisionMakerDepartment,
        decision_maker_department,
        "Leadership",
    ),
];

/// One entry of a ranked list, tagged with its rank badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSegment {
    pub badge: u32,
    pub title: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCountry {
    pub badge: u32,
    pub flag: &'static str,
    pub country: String,
    pub insight: String,
}

/// Everything the result view displays, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    slots: BTreeMap<ResultSlot, String>,
    pub segments: Vec<RankedSegment>,
    pub countries: Vec<RankedCountry>,
}

impl AnalysisView {
    pub fn slot(&self, slot: ResultSlot) -> &str {
        self.slots.get(&slot).map(String::as_str).unwrap_or_default()
    }
}

/// Project a service result into the result view.
///
/// Ranked lists keep the service's order. The badge is the item's own
/// `rank` when present, otherwise its 1-based position.
pub fn project(result: &AnalysisResult) -> AnalysisView {
    let empty = TargetAudience::default();
    let audience = result.target_audience.as_ref().unwrap_or(&empty);

    let mut slots: BTreeMap<ResultSlot, String> = FIELD_MAP
        .iter()
        .map(|(slot, getter, default)| {
            let value = getter(audience)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(*default);
            (*slot, value.to_string())
        })
        .collect();

    let summary = format!(
        "Companies in the {} industry, typically {}, facing {}.",
        slots[&ResultSlot::Industry],
        slots[&ResultSlot::CompanySize],
        slots[&ResultSlot::Characteristics],
    );
    slots.insert(ResultSlot::Summary, summary);

    let segments = result
        .additional_target_audiences
        .iter()
        .enumerate()
        .map(|(i, seg)| RankedSegment {
            badge: seg.rank.unwrap_or(i as u32 + 1),
            title: seg
                .company_type
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Additional segment".to_string()),
            rationale: seg.rationale.clone().unwrap_or_default(),
        })
        .collect();

    let countries = result
        .target_countries
        .iter()
        .enumerate()
        .map(|(i, c)| RankedCountry {
            badge: c.rank.unwrap_or(i as u32 + 1),
            flag: flag_for(&c.country),
            country: c.country.clone(),
            insight: c.market_size_insight.clone().unwrap_or_default(),
        })
        .collect();

    AnalysisView {
        slots,
        segments,
        countries,
    }
}
