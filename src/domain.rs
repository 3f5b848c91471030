//! Assessment input types consumed by the content generators.
//!
//! These are plain value objects: the scoring, risk-classification, and ROI
//! algorithms that produce them live upstream and are consumed only through
//! their output shapes. The generators never recompute a score, reclassify
//! a risk, or touch a clock; even the report date arrives as data, which
//! is what keeps generation deterministic.
//!
//! [`load_assessment`] reads the JSON form at the CLI stage boundary; the
//! library API takes the deserialized values directly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a report is generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentData {
    pub meta: AssessmentMeta,
    pub score: FeasibilityScore,
    #[serde(default)]
    pub risks: Vec<RiskClassification>,
    #[serde(default)]
    pub roi: Option<RoiResult>,
    #[serde(default)]
    pub timeline: Vec<TimelinePhase>,
    /// Remediation roadmap steps, in execution order.
    #[serde(default)]
    pub roadmap: Vec<String>,
}

/// Report provenance: who it is for, who wrote it, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentMeta {
    pub organization: String,
    pub author: String,
    /// Caller-supplied display date, e.g. `"August 2026"`.
    pub date: String,
    /// Empty string suppresses all confidentiality markers.
    #[serde(default)]
    pub confidentiality: String,
}

/// Overall feasibility score with per-domain breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityScore {
    /// 0–100.
    pub overall: f64,
    pub rating: Rating,
    pub domains: Vec<DomainScore>,
}

impl FeasibilityScore {
    /// Number of domains meeting their threshold.
    pub fn passed_count(&self) -> usize {
        self.domains.iter().filter(|d| d.passed).count()
    }
}

/// One capability domain's sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    pub name: String,
    /// 0–100 percentage.
    pub score: f64,
    /// Pass threshold on the same scale.
    pub threshold: f64,
    pub passed: bool,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub remediation: Vec<String>,
}

/// Readiness rating tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    High,
    Moderate,
    Conditional,
    NotReady,
}

impl Rating {
    /// Raw token as it appears on the wire.
    pub fn token(self) -> &'static str {
        match self {
            Rating::High => "high",
            Rating::Moderate => "moderate",
            Rating::Conditional => "conditional",
            Rating::NotReady => "not_ready",
        }
    }

    /// Human label used on slides.
    pub fn label(self) -> &'static str {
        match self {
            Rating::High => "HIGH READINESS",
            Rating::Moderate => "MODERATE READINESS",
            Rating::Conditional => "CONDITIONAL",
            Rating::NotReady => "NOT READY",
        }
    }
}

/// A classified risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskClassification {
    pub category: String,
    pub tier: RiskTier,
    pub likelihood: String,
    pub impact: String,
    pub mitigation: String,
    pub description: String,
}

/// Severity tier, ordered `critical > high > medium > low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskTier {
    pub fn token(self) -> &'static str {
        match self {
            RiskTier::Critical => "critical",
            RiskTier::High => "high",
            RiskTier::Medium => "medium",
            RiskTier::Low => "low",
        }
    }
}

/// ROI analysis result bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub annual_savings: f64,
    pub total_cost: f64,
    pub net_benefit: f64,
    pub payback_months: f64,
    pub three_year_npv: f64,
    pub roi_percent: f64,
}

/// One implementation phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub phase: String,
    /// Display label, e.g. `"Weeks 1-4"`. The renderer never does date math.
    pub weeks: String,
    pub status: String,
}

/// Load assessment JSON from disk.
pub fn load_assessment(path: &Path) -> Result<AssessmentData, InputError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
