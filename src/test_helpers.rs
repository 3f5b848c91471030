//! Shared fixtures for unit tests.
//!
//! One representative mid-size assessment (a moderate rating with one
//! failing domain) plus a structurally-empty one for degradation tests.

use crate::domain::{
    AssessmentData, AssessmentMeta, DomainScore, FeasibilityScore, Rating, RiskClassification,
    RiskTier, RoiResult, TimelinePhase,
};

/// A three-domain, moderate-rated assessment with risks, ROI, and timeline.
pub(crate) fn sample_assessment() -> AssessmentData {
    AssessmentData {
        meta: AssessmentMeta {
            organization: "Meridian Logistics".to_string(),
            author: "Northfield Advisory".to_string(),
            date: "August 2026".to_string(),
            confidentiality: "CONFIDENTIAL".to_string(),
        },
        score: FeasibilityScore {
            overall: 68.0,
            rating: Rating::Moderate,
            domains: vec![
                DomainScore {
                    name: "Data Quality".to_string(),
                    score: 72.0,
                    threshold: 70.0,
                    passed: true,
                    recommendations: vec!["Document data lineage for core pipelines".to_string()],
                    remediation: vec![],
                },
                DomainScore {
                    name: "Infrastructure".to_string(),
                    score: 84.0,
                    threshold: 70.0,
                    passed: true,
                    recommendations: vec![],
                    remediation: vec![],
                },
                DomainScore {
                    name: "Talent".to_string(),
                    score: 48.0,
                    threshold: 70.0,
                    passed: false,
                    recommendations: vec![
                        "Hire a data engineering lead".to_string(),
                        "Train analysts on model monitoring".to_string(),
                    ],
                    remediation: vec!["Contract interim ML engineering support".to_string()],
                },
            ],
        },
        risks: vec![
            RiskClassification {
                category: "Data Privacy".to_string(),
                tier: RiskTier::Critical,
                likelihood: "medium".to_string(),
                impact: "high".to_string(),
                mitigation: "Complete a privacy impact assessment".to_string(),
                description: "Customer records feed model training without consent review"
                    .to_string(),
            },
            RiskClassification {
                category: "Vendor Lock-in".to_string(),
                tier: RiskTier::High,
                likelihood: "high".to_string(),
                impact: "medium".to_string(),
                mitigation: "Negotiate portability clauses".to_string(),
                description: "Single-cloud deployment with proprietary services".to_string(),
            },
            RiskClassification {
                category: "Model Drift".to_string(),
                tier: RiskTier::High,
                likelihood: "medium".to_string(),
                impact: "medium".to_string(),
                mitigation: "Stand up drift monitoring".to_string(),
                description: "Seasonal demand shifts degrade forecast accuracy".to_string(),
            },
            RiskClassification {
                category: "Change Fatigue".to_string(),
                tier: RiskTier::Medium,
                likelihood: "medium".to_string(),
                impact: "low".to_string(),
                mitigation: "Stagger rollout by region".to_string(),
                description: "Third major tooling change in two years".to_string(),
            },
        ],
        roi: Some(RoiResult {
            annual_savings: 840_000.0,
            total_cost: 1_100_000.0,
            net_benefit: 1_420_000.0,
            payback_months: 14.0,
            three_year_npv: 980_000.0,
            roi_percent: 129.0,
        }),
        timeline: vec![
            TimelinePhase {
                phase: "Foundation".to_string(),
                weeks: "Weeks 1-6".to_string(),
                status: "complete".to_string(),
            },
            TimelinePhase {
                phase: "Pilot".to_string(),
                weeks: "Weeks 7-14".to_string(),
                status: "in_progress".to_string(),
            },
            TimelinePhase {
                phase: "Rollout".to_string(),
                weeks: "Weeks 15-26".to_string(),
                status: "planned".to_string(),
            },
        ],
        roadmap: vec![
            "Close the talent gap with two senior hires".to_string(),
            "Stand up a model governance board".to_string(),
            "Migrate reporting marts to the lakehouse".to_string(),
        ],
    }
}

/// The smallest structurally-valid assessment: no domains, risks, ROI,
/// timeline, or roadmap.
pub(crate) fn minimal_assessment() -> AssessmentData {
    AssessmentData {
        meta: AssessmentMeta {
            organization: "Solo Ventures".to_string(),
            author: "Self Assessment".to_string(),
            date: "August 2026".to_string(),
            confidentiality: String::new(),
        },
        score: FeasibilityScore {
            overall: 35.0,
            rating: Rating::Conditional,
            domains: vec![],
        },
        risks: vec![],
        roi: None,
        timeline: vec![],
        roadmap: vec![],
    }
}
