//! Structured blocks: the typed payloads embedded in section content.
//!
//! A section body is a plain string, but some sections carry a serialized
//! JSON object instead of prose. In process, that payload is the [`Block`]
//! sum type; it is serialized exactly once, when a generator places it
//! into a [`crate::types::ContentSection`], and re-parsed by whichever
//! renderer consumes the tree.
//!
//! ## Discriminators
//!
//! Every block carries a `type` tag. Slide blocks additionally carry a
//! `layout` tag selecting one of the five fixed slide compositions:
//!
//! ```text
//! {"type": "score_display", "overall": 74, ...}
//! {"type": "slide", "layout": "score_hero", "score": 74, ...}
//! {"type": "slide", "layout": "risk_heatmap", "risks": [...], ...}
//! ```
//!
//! ## Defensive parsing
//!
//! The tree travels as JSON and may have been hand-built or corrupted
//! upstream, so [`Block::parse`] never assumes fields exist: anything that
//! does not deserialize cleanly is `None`, and each renderer decides its
//! own degradation (text fallback for the flowing document, slide drop for
//! the deck).

use serde::{Deserialize, Serialize};

/// A discriminator-tagged payload embedded in section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Large score readout with per-domain bars; flowing-document layout.
    ScoreDisplay(ScoreDisplay),
    /// One fixed slide; the inner tag picks the composition.
    Slide(SlideLayout),
}

impl Block {
    /// Parse a section body as a structured block.
    ///
    /// Returns `None` unless the string starts with `{` and deserializes
    /// into a recognized block shape. Never panics on malformed input.
    pub fn parse(content: &str) -> Option<Block> {
        if !content.starts_with('{') {
            return None;
        }
        serde_json::from_str(content).ok()
    }

    /// Serialize for embedding in a [`crate::types::ContentSection`] body.
    pub fn to_content(&self) -> String {
        // Plain value types; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Short discriminator label for progress output, e.g. `slide/score_hero`.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::ScoreDisplay(_) => "score_display",
            Block::Slide(SlideLayout::ScoreHero(_)) => "slide/score_hero",
            Block::Slide(SlideLayout::DomainBars(_)) => "slide/domain_bars",
            Block::Slide(SlideLayout::RiskHeatmap(_)) => "slide/risk_heatmap",
            Block::Slide(SlideLayout::TimelineRoi(_)) => "slide/timeline_roi",
            Block::Slide(SlideLayout::Recommendation(_)) => "slide/recommendation",
        }
    }
}

/// Slide composition, tagged by the `layout` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum SlideLayout {
    ScoreHero(ScoreHero),
    DomainBars(DomainBars),
    RiskHeatmap(RiskHeatmap),
    TimelineRoi(TimelineRoi),
    Recommendation(Recommendation),
}

impl SlideLayout {
    /// The points every layout renders in its closing callout.
    pub fn talking_points(&self) -> &[String] {
        match self {
            SlideLayout::ScoreHero(s) => &s.talking_points,
            SlideLayout::DomainBars(s) => &s.talking_points,
            SlideLayout::RiskHeatmap(s) => &s.talking_points,
            SlideLayout::TimelineRoi(s) => &s.talking_points,
            SlideLayout::Recommendation(s) => &s.talking_points,
        }
    }
}

/// `type: score_display`: overall score plus one bar per domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDisplay {
    pub overall: f64,
    pub rating: String,
    pub domains: Vec<DomainBar>,
}

/// One domain row in a bar chart.
///
/// `top_gap` is only populated for slide bars (the domain's first
/// recommendation, or a fixed fallback string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainBar {
    pub name: String,
    pub score: f64,
    pub threshold: f64,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_gap: Option<String>,
}

/// `layout: score_hero`: headline score ring with stat boxes.
///
/// `rating` holds the pre-mapped human label (`"HIGH READINESS"`), not the
/// raw rating token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreHero {
    pub score: f64,
    pub rating: String,
    pub passed_domains: usize,
    pub total_domains: usize,
    pub talking_points: Vec<String>,
}

/// `layout: domain_bars`: per-domain bars plus top-gap callouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainBars {
    pub domains: Vec<DomainBar>,
    pub talking_points: Vec<String>,
}

/// `layout: risk_heatmap`: tier counters plus tier-colored risk rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskHeatmap {
    pub risks: Vec<RiskEntry>,
    pub summary: RiskSummary,
    pub talking_points: Vec<String>,
}

/// One row in the risk heat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    pub category: String,
    pub tier: String,
    pub likelihood: String,
    pub impact: String,
    pub description: String,
    pub mitigation: String,
}

/// Tier-filtered counts shown as headline counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub critical: usize,
    pub high: usize,
    pub total: usize,
}

/// `layout: timeline_roi`: phase timeline beside an ROI card grid.
///
/// `roi` is `None` when no ROI analysis is available; the renderer shows a
/// "pending" card instead of figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRoi {
    pub timeline: Vec<TimelineEntry>,
    pub roi: Option<RoiFigures>,
    pub talking_points: Vec<String>,
}

/// One phase row of the implementation timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub phase: String,
    pub weeks: String,
    pub status: String,
}

/// ROI figures for the investment card grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiFigures {
    pub annual_savings: f64,
    pub total_cost: f64,
    pub net_benefit: f64,
    pub payback_months: f64,
    pub three_year_npv: f64,
    pub roi_percent: f64,
}

/// `layout: recommendation`: Go/Conditional banner with conditions and
/// next steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommendation: String,
    pub conditions: Vec<String>,
    pub next_steps: Vec<String>,
    pub talking_points: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> DomainBar {
        DomainBar {
            name: "Data Quality".to_string(),
            score: 72.0,
            threshold: 70.0,
            passed: true,
            top_gap: None,
        }
    }

    #[test]
    fn score_display_wire_format() {
        let block = Block::ScoreDisplay(ScoreDisplay {
            overall: 74.0,
            rating: "moderate".to_string(),
            domains: vec![sample_bar()],
        });
        let json = block.to_content();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"type\":\"score_display\""));
        assert!(json.contains("\"overall\":74.0"));
        assert_eq!(Block::parse(&json), Some(block));
    }

    #[test]
    fn slide_carries_both_discriminators() {
        let block = Block::Slide(SlideLayout::ScoreHero(ScoreHero {
            score: 74.0,
            rating: "MODERATE READINESS".to_string(),
            passed_domains: 3,
            total_domains: 5,
            talking_points: vec!["point".to_string()],
        }));
        let json = block.to_content();
        assert!(json.contains("\"type\":\"slide\""));
        assert!(json.contains("\"layout\":\"score_hero\""));
        assert!(json.contains("\"passedDomains\":3"));
        assert_eq!(Block::parse(&json), Some(block));
    }

    #[test]
    fn parse_rejects_non_object_content() {
        assert_eq!(Block::parse("Plain prose paragraph."), None);
        assert_eq!(Block::parse("1. Do X\n2. Do Y"), None);
        assert_eq!(Block::parse(""), None);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert_eq!(Block::parse("{not valid json"), None);
        assert_eq!(Block::parse("{\"type\":"), None);
    }

    #[test]
    fn parse_rejects_unknown_discriminators() {
        assert_eq!(Block::parse("{\"type\":\"pie_chart\"}"), None);
        assert_eq!(
            Block::parse("{\"type\":\"slide\",\"layout\":\"word_cloud\"}"),
            None
        );
    }

    #[test]
    fn parse_rejects_missing_fields() {
        // Right discriminators, wrong shape
        assert_eq!(
            Block::parse("{\"type\":\"slide\",\"layout\":\"score_hero\"}"),
            None
        );
    }

    #[test]
    fn top_gap_omitted_when_absent() {
        let json = serde_json::to_string(&sample_bar()).unwrap();
        assert!(!json.contains("topGap"));

        let with_gap = DomainBar {
            top_gap: Some("No lineage tracking".to_string()),
            ..sample_bar()
        };
        let json = serde_json::to_string(&with_gap).unwrap();
        assert!(json.contains("\"topGap\":\"No lineage tracking\""));
    }

    #[test]
    fn roi_null_round_trips() {
        let block = Block::Slide(SlideLayout::TimelineRoi(TimelineRoi {
            timeline: vec![],
            roi: None,
            talking_points: vec!["ROI analysis pending".to_string()],
        }));
        let json = block.to_content();
        assert!(json.contains("\"roi\":null"));
        assert_eq!(Block::parse(&json), Some(block));
    }

    #[test]
    fn kind_labels() {
        let block = Block::Slide(SlideLayout::Recommendation(Recommendation {
            recommendation: "GO".to_string(),
            conditions: vec![],
            next_steps: vec![],
            talking_points: vec![],
        }));
        assert_eq!(block.kind(), "slide/recommendation");
    }
}
