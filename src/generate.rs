//! Report content generation.
//!
//! Stage 1 of the pipeline. Takes an [`AssessmentData`] value and produces
//! the content tree a renderer consumes. Two report kinds exist:
//!
//! - [`readiness_report`]: the long-form assessment document with six fixed
//!   sections, mostly prose, with one `score_display` block.
//! - [`executive_briefing`]: exactly five sections, one slide each, every
//!   body a serialized `slide` block with a `layout` discriminator.
//!
//! ## Contract
//!
//! Both generators are deterministic, total, and side-effect free: for any
//! well-formed input they return a structurally valid tree, even when that
//! tree is visually empty (no domains, no risks, no ROI). Nothing here
//! returns a `Result`; degradation happens in content ("ROI analysis
//! pending"), never as an error.
//!
//! Typed [`Block`] values are built first and serialized exactly once, at
//! the point they enter a section body. Renderers re-parse them on the far
//! side of the manifest boundary.

use crate::block::{
    Block, DomainBar, DomainBars, Recommendation, RiskEntry, RiskHeatmap, RiskSummary,
    RoiFigures, ScoreDisplay, ScoreHero, SlideLayout, TimelineEntry, TimelineRoi,
};
use crate::domain::{AssessmentData, DomainScore, Rating};
use crate::types::{ContentSection, ReportContent, ReportMetadata};
use crate::visual::{format_currency, rank_best, rank_worst, truncate};

/// Cap on the derived "Top Recommendations" list.
const TOP_RECOMMENDATION_LIMIT: usize = 5;

/// How many risks the risk slide shows, in caller-provided order.
const RISK_SLIDE_LIMIT: usize = 10;

/// Characters of risk description quoted in the risk talking point.
const RISK_POINT_DESC_LEN: usize = 100;

// ============================================================================
// Readiness report
// ============================================================================

/// Generate the long-form readiness assessment document.
pub fn readiness_report(data: &AssessmentData) -> ReportContent {
    ReportContent {
        title: "AI Readiness Assessment".to_string(),
        subtitle: data.meta.organization.clone(),
        metadata: report_metadata(data),
        sections: vec![
            executive_summary(data),
            overall_score_section(data),
            domain_analysis(data),
            top_recommendations_section(data),
            remediation_roadmap(data),
            next_steps(data),
        ],
    }
}

fn report_metadata(data: &AssessmentData) -> ReportMetadata {
    ReportMetadata {
        prepared_for: data.meta.organization.clone(),
        prepared_by: data.meta.author.clone(),
        date: data.meta.date.clone(),
        confidentiality: data.meta.confidentiality.clone(),
    }
}

fn executive_summary(data: &AssessmentData) -> ContentSection {
    let score = &data.score;
    let passed = score.passed_count();
    let total = score.domains.len();
    let opening = format!(
        "{} scores {:.0} out of 100 for AI readiness and is rated {}. \
         {} of {} capability domains currently meet their readiness thresholds.",
        data.meta.organization,
        score.overall,
        score.rating.label(),
        passed,
        total,
    );
    let closing = match score.rating {
        Rating::High => {
            "The organization is well positioned to proceed. Remaining gaps are minor \
             and can be closed in parallel with early delivery work."
        }
        Rating::Moderate => {
            "The organization can proceed while closing a small number of capability \
             gaps. The gaps identified below are addressable within a normal program \
             ramp-up."
        }
        Rating::Conditional => {
            "Material gaps must be addressed before committing to full delivery. A \
             conditional start limited to foundation work is viable."
        }
        Rating::NotReady => {
            "Foundational gaps across multiple domains must be closed before an \
             initiative of this scope can start. A remediation program should run \
             first."
        }
    };
    ContentSection::text("Executive Summary", format!("{opening}\n\n{closing}"))
}

fn overall_score_section(data: &AssessmentData) -> ContentSection {
    let score = &data.score;
    let block = Block::ScoreDisplay(ScoreDisplay {
        overall: score.overall,
        rating: score.rating.token().to_string(),
        domains: score.domains.iter().map(|d| domain_bar(d, false)).collect(),
    });
    ContentSection::text("Overall Score", block.to_content())
}

fn domain_analysis(data: &AssessmentData) -> ContentSection {
    let subsections = data
        .score
        .domains
        .iter()
        .map(domain_subsection)
        .collect();
    ContentSection::parent("Domain Analysis", subsections)
}

fn domain_subsection(domain: &DomainScore) -> ContentSection {
    let status = if domain.passed {
        format!(
            "Status: PASSED. Scored {:.0} against a threshold of {:.0}.",
            domain.score, domain.threshold
        )
    } else {
        format!(
            "Status: BELOW THRESHOLD. Scored {:.0} against a threshold of {:.0}.",
            domain.score, domain.threshold
        )
    };
    // Headers sit in their own paragraphs so the numbered items form a
    // paragraph of pure "N. " lines, which renders as a list.
    let mut parts = vec![status];
    if !domain.recommendations.is_empty() {
        parts.push("Recommendations:".to_string());
        parts.push(numbered(&domain.recommendations));
    }
    if !domain.remediation.is_empty() {
        parts.push("Remediation:".to_string());
        parts.push(numbered(&domain.remediation));
    }
    ContentSection::text(domain.name.clone(), parts.join("\n\n"))
}

fn top_recommendations_section(data: &AssessmentData) -> ContentSection {
    let recs = derive_top_recommendations(data);
    let content = if recs.is_empty() {
        "No outstanding recommendations.".to_string()
    } else {
        numbered(&recs)
    };
    ContentSection::text("Top Recommendations", content)
}

/// Failing-domain recommendations first, then passing-domain ones,
/// deduplicated in encounter order, capped at [`TOP_RECOMMENDATION_LIMIT`].
fn derive_top_recommendations(data: &AssessmentData) -> Vec<String> {
    let domains = &data.score.domains;
    let failing = domains.iter().filter(|d| !d.passed);
    let passing = domains.iter().filter(|d| d.passed);
    let mut out: Vec<String> = Vec::new();
    for domain in failing.chain(passing) {
        for rec in &domain.recommendations {
            if !out.contains(rec) {
                out.push(rec.clone());
            }
        }
    }
    out.truncate(TOP_RECOMMENDATION_LIMIT);
    out
}

fn remediation_roadmap(data: &AssessmentData) -> ContentSection {
    let content = if data.roadmap.is_empty() {
        "No remediation items identified.".to_string()
    } else {
        numbered(&data.roadmap)
    };
    ContentSection::text("Remediation Roadmap", content)
}

fn next_steps(data: &AssessmentData) -> ContentSection {
    let org = &data.meta.organization;
    let content = match data.score.rating {
        Rating::High => format!(
            "{org} should move directly into delivery. Confirm the executive sponsor, \
             stand up the delivery team, and begin phase one while keeping the domain \
             scores under quarterly review."
        ),
        Rating::Moderate => format!(
            "{org} should begin delivery preparation while closing the remaining gaps. \
             Sequence the remediation items above ahead of any production commitment \
             and re-score the affected domains within 30 days."
        ),
        Rating::Conditional => format!(
            "{org} should limit near-term work to foundation building. Execute the \
             remediation roadmap, then re-run the readiness assessment before \
             requesting delivery approval."
        ),
        Rating::NotReady => format!(
            "{org} should pause initiative planning and fund a remediation program. \
             Revisit this assessment once the roadmap items are complete; no delivery \
             work should start before then."
        ),
    };
    ContentSection::text("Next Steps", content)
}

// ============================================================================
// Executive briefing
// ============================================================================

/// Generate the five-slide executive briefing.
pub fn executive_briefing(data: &AssessmentData) -> ReportContent {
    ReportContent {
        title: "Executive Briefing".to_string(),
        subtitle: "AI Readiness Assessment".to_string(),
        metadata: report_metadata(data),
        sections: vec![
            slide_overall(data),
            slide_domains(data),
            slide_risks(data),
            slide_timeline_roi(data),
            slide_recommendation(data),
        ],
    }
}

fn slide_section(title: &str, layout: SlideLayout) -> ContentSection {
    ContentSection::text(title, Block::Slide(layout).to_content())
}

fn slide_overall(data: &AssessmentData) -> ContentSection {
    let score = &data.score;
    let passed = score.passed_count();
    let total = score.domains.len();
    let mut points = vec![
        format!(
            "Overall readiness score of {:.0} out of 100, rated {}",
            score.overall,
            score.rating.label()
        ),
        format!("{passed} of {total} capability domains meet their thresholds"),
        match score.rating {
            Rating::High => "Assessment supports proceeding with the initiative".to_string(),
            Rating::Moderate => {
                "Assessment supports proceeding while closing known gaps".to_string()
            }
            Rating::Conditional => "Assessment supports a conditional start only".to_string(),
            Rating::NotReady => "Assessment does not support starting delivery yet".to_string(),
        },
    ];
    points.retain(|p| !p.is_empty());
    slide_section(
        "Overall Readiness",
        SlideLayout::ScoreHero(ScoreHero {
            score: score.overall,
            rating: score.rating.label().to_string(),
            passed_domains: passed,
            total_domains: total,
            talking_points: points,
        }),
    )
}

fn slide_domains(data: &AssessmentData) -> ContentSection {
    let domains = &data.score.domains;
    let bars: Vec<DomainBar> = domains.iter().map(|d| domain_bar(d, true)).collect();

    let mut points = Vec::new();
    if let Some(best) = rank_best(domains, |d| d.score) {
        points.push(format!(
            "Strongest domain: {} at {:.0}%",
            best.name, best.score
        ));
    }
    if let Some(worst) = rank_worst(domains, |d| d.score) {
        points.push(format!(
            "Weakest domain: {} at {:.0}%",
            worst.name, worst.score
        ));
    }
    let rec_count: usize = domains.iter().map(|d| d.recommendations.len()).sum();
    points.push(format!(
        "{rec_count} recommendations identified across all domains"
    ));
    points.retain(|p| !p.is_empty());

    slide_section(
        "Domain Readiness",
        SlideLayout::DomainBars(DomainBars {
            domains: bars,
            talking_points: points,
        }),
    )
}

fn slide_risks(data: &AssessmentData) -> ContentSection {
    use crate::domain::RiskTier;

    let entries: Vec<RiskEntry> = data
        .risks
        .iter()
        .take(RISK_SLIDE_LIMIT)
        .map(|r| RiskEntry {
            category: r.category.clone(),
            tier: r.tier.token().to_string(),
            likelihood: r.likelihood.clone(),
            impact: r.impact.clone(),
            description: r.description.clone(),
            mitigation: r.mitigation.clone(),
        })
        .collect();

    let critical = data
        .risks
        .iter()
        .filter(|r| r.tier == RiskTier::Critical)
        .count();
    let high = data
        .risks
        .iter()
        .filter(|r| r.tier == RiskTier::High)
        .count();
    let summary = RiskSummary {
        critical,
        high,
        total: data.risks.len(),
    };

    let mut points = vec![
        format!("{critical} critical and {high} high severity risks require mitigation"),
        match data.risks.first() {
            Some(first) => format!(
                "Top risk: {} - {}",
                first.category,
                truncate(&first.description, RISK_POINT_DESC_LEN)
            ),
            None => "No critical risks identified".to_string(),
        },
    ];
    points.retain(|p| !p.is_empty());

    slide_section(
        "Risk Landscape",
        SlideLayout::RiskHeatmap(RiskHeatmap {
            risks: entries,
            summary,
            talking_points: points,
        }),
    )
}

fn slide_timeline_roi(data: &AssessmentData) -> ContentSection {
    let timeline: Vec<TimelineEntry> = data
        .timeline
        .iter()
        .map(|p| TimelineEntry {
            phase: p.phase.clone(),
            weeks: p.weeks.clone(),
            status: p.status.clone(),
        })
        .collect();

    let roi = data.roi.as_ref().map(|r| RoiFigures {
        annual_savings: r.annual_savings,
        total_cost: r.total_cost,
        net_benefit: r.net_benefit,
        payback_months: r.payback_months,
        three_year_npv: r.three_year_npv,
        roi_percent: r.roi_percent,
    });

    let mut points = vec![
        match &data.roi {
            Some(r) => format!(
                "Projected annual savings of {}",
                format_currency(r.annual_savings)
            ),
            None => "ROI analysis pending".to_string(),
        },
        data.roi
            .as_ref()
            .map(|r| {
                format!(
                    "Payback in {:.0} months with a three year NPV of {}",
                    r.payback_months,
                    format_currency(r.three_year_npv)
                )
            })
            .unwrap_or_default(),
        if data.timeline.is_empty() {
            String::new()
        } else {
            format!("{} phase implementation timeline", data.timeline.len())
        },
    ];
    points.retain(|p| !p.is_empty());

    slide_section(
        "Timeline and Investment",
        SlideLayout::TimelineRoi(TimelineRoi {
            timeline,
            roi,
            talking_points: points,
        }),
    )
}

fn slide_recommendation(data: &AssessmentData) -> ContentSection {
    let rating = data.score.rating;
    let go = matches!(rating, Rating::High | Rating::Moderate);
    let recommendation = if go { "GO" } else { "CONDITIONAL" };

    let conditions: Vec<String> = data
        .score
        .domains
        .iter()
        .filter(|d| !d.passed)
        .map(|d| {
            format!(
                "{} domain must reach {:.0}% threshold",
                d.name, d.threshold
            )
        })
        .collect();

    let mut next_steps = vec![
        if rating == Rating::High {
            "Proceed immediately with phase one implementation".to_string()
        } else {
            "Address capability gaps within 30 days".to_string()
        },
        "Confirm executive sponsorship and delivery ownership".to_string(),
        "Schedule a follow-up readiness review in 90 days".to_string(),
    ];
    if data.roi.is_some() {
        next_steps.push("Validate ROI assumptions against first quarter actuals".to_string());
    }

    let mut points = vec![
        format!("Recommendation: {recommendation}"),
        if conditions.is_empty() {
            String::new()
        } else {
            format!(
                "{} conditions must be met before full commitment",
                conditions.len()
            )
        },
        data.roi
            .as_ref()
            .map(|r| format!("Projected net benefit of {}", format_currency(r.net_benefit)))
            .unwrap_or_default(),
    ];
    points.retain(|p| !p.is_empty());

    slide_section(
        "Go / No-Go Recommendation",
        SlideLayout::Recommendation(Recommendation {
            recommendation: recommendation.to_string(),
            conditions,
            next_steps,
            talking_points: points,
        }),
    )
}

// ============================================================================
// Shared helpers
// ============================================================================

fn domain_bar(domain: &DomainScore, with_gap: bool) -> DomainBar {
    let top_gap = with_gap.then(|| {
        domain
            .recommendations
            .first()
            .cloned()
            .unwrap_or_else(|| "No gaps identified".to_string())
    });
    DomainBar {
        name: domain.name.clone(),
        score: domain.score,
        threshold: domain.threshold,
        passed: domain.passed,
        top_gap,
    }
}

/// Format items as `1. ...` lines, one per item.
fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskTier, RoiResult};
    use crate::test_helpers::{minimal_assessment, sample_assessment};

    fn parse_slide(section: &ContentSection) -> SlideLayout {
        match Block::parse(section.content.as_deref().unwrap()) {
            Some(Block::Slide(layout)) => layout,
            other => panic!("expected slide block, got {other:?}"),
        }
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    #[test]
    fn generators_are_deterministic() {
        let data = sample_assessment();
        assert_eq!(readiness_report(&data), readiness_report(&data));
        assert_eq!(executive_briefing(&data), executive_briefing(&data));
    }

    #[test]
    fn serialized_blocks_are_byte_identical_across_calls() {
        let data = sample_assessment();
        let a = readiness_report(&data).sections[1].content.clone();
        let b = readiness_report(&data).sections[1].content.clone();
        assert_eq!(a, b);
    }

    // =========================================================================
    // Readiness report
    // =========================================================================

    #[test]
    fn report_has_six_sections_in_order() {
        let tree = readiness_report(&sample_assessment());
        let titles: Vec<&str> = tree.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Executive Summary",
                "Overall Score",
                "Domain Analysis",
                "Top Recommendations",
                "Remediation Roadmap",
                "Next Steps",
            ]
        );
    }

    #[test]
    fn report_metadata_comes_from_input() {
        let tree = readiness_report(&sample_assessment());
        assert_eq!(tree.metadata.prepared_for, "Meridian Logistics");
        assert_eq!(tree.metadata.confidentiality, "CONFIDENTIAL");
    }

    #[test]
    fn executive_summary_reports_counts() {
        let tree = readiness_report(&sample_assessment());
        let body = tree.sections[0].content.as_deref().unwrap();
        assert!(body.contains("scores 68 out of 100"));
        assert!(body.contains("MODERATE READINESS"));
        assert!(body.contains("2 of 3 capability domains"));
    }

    #[test]
    fn overall_score_is_a_score_display_block() {
        let tree = readiness_report(&sample_assessment());
        let body = tree.sections[1].content.as_deref().unwrap();
        match Block::parse(body) {
            Some(Block::ScoreDisplay(sd)) => {
                assert_eq!(sd.overall, 68.0);
                assert_eq!(sd.rating, "moderate");
                assert_eq!(sd.domains.len(), 3);
                assert!(sd.domains.iter().all(|d| d.top_gap.is_none()));
            }
            other => panic!("expected score_display, got {other:?}"),
        }
    }

    #[test]
    fn domain_analysis_has_one_subsection_per_domain() {
        let tree = readiness_report(&sample_assessment());
        let analysis = &tree.sections[2];
        assert!(analysis.content.is_none());
        assert_eq!(analysis.subsections.len(), 3);
        // Depth stops at two levels
        assert!(analysis.subsections.iter().all(|s| s.subsections.is_empty()));
    }

    #[test]
    fn domain_subsection_status_lines() {
        let tree = readiness_report(&sample_assessment());
        let subs = &tree.sections[2].subsections;
        let passing = subs[0].content.as_deref().unwrap();
        assert!(passing.contains("Status: PASSED."));
        let failing = subs[2].content.as_deref().unwrap();
        assert!(failing.contains("Status: BELOW THRESHOLD."));
        assert!(failing.contains("Recommendations:"));
        assert!(failing.contains("1. Hire a data engineering lead"));
    }

    #[test]
    fn top_recommendations_prefers_failing_domains() {
        let tree = readiness_report(&sample_assessment());
        let body = tree.sections[3].content.as_deref().unwrap();
        // The failing Talent domain's first recommendation leads the list
        assert!(body.starts_with("1. Hire a data engineering lead"));
    }

    #[test]
    fn top_recommendations_deduplicates_and_caps_at_five() {
        let mut data = sample_assessment();
        for domain in &mut data.score.domains {
            domain.recommendations = vec![
                "Shared recommendation".to_string(),
                format!("{} specific step A", domain.name),
                format!("{} specific step B", domain.name),
            ];
        }
        let tree = readiness_report(&data);
        let body = tree.sections[3].content.as_deref().unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines
                .iter()
                .filter(|l| l.contains("Shared recommendation"))
                .count(),
            1
        );
    }

    #[test]
    fn roadmap_falls_back_when_empty() {
        let mut data = sample_assessment();
        data.roadmap.clear();
        let tree = readiness_report(&data);
        let body = tree.sections[4].content.as_deref().unwrap();
        assert_eq!(body, "No remediation items identified.");
    }

    #[test]
    fn next_steps_switch_on_rating() {
        for (rating, needle) in [
            (Rating::High, "move directly into delivery"),
            (Rating::Moderate, "begin delivery preparation"),
            (Rating::Conditional, "foundation building"),
            (Rating::NotReady, "pause initiative planning"),
        ] {
            let mut data = sample_assessment();
            data.score.rating = rating;
            let tree = readiness_report(&data);
            let body = tree.sections[5].content.as_deref().unwrap();
            assert!(body.contains(needle), "rating {rating:?}: {body}");
        }
    }

    #[test]
    fn report_survives_empty_domains() {
        let tree = readiness_report(&minimal_assessment());
        assert_eq!(tree.sections.len(), 6);
        assert!(tree.sections[2].subsections.is_empty());
        assert_eq!(
            tree.sections[3].content.as_deref().unwrap(),
            "No outstanding recommendations."
        );
    }

    // =========================================================================
    // Executive briefing
    // =========================================================================

    #[test]
    fn briefing_has_five_slides_in_order() {
        let tree = executive_briefing(&sample_assessment());
        assert_eq!(tree.sections.len(), 5);
        let kinds: Vec<&str> = tree
            .sections
            .iter()
            .map(|s| {
                Block::parse(s.content.as_deref().unwrap())
                    .unwrap()
                    .kind()
            })
            .collect();
        assert_eq!(
            kinds,
            [
                "slide/score_hero",
                "slide/domain_bars",
                "slide/risk_heatmap",
                "slide/timeline_roi",
                "slide/recommendation",
            ]
        );
    }

    #[test]
    fn score_hero_uses_human_label() {
        let tree = executive_briefing(&sample_assessment());
        match parse_slide(&tree.sections[0]) {
            SlideLayout::ScoreHero(hero) => {
                assert_eq!(hero.rating, "MODERATE READINESS");
                assert_eq!(hero.passed_domains, 2);
                assert_eq!(hero.total_domains, 3);
                assert!(!hero.talking_points.is_empty());
            }
            other => panic!("expected score_hero, got {other:?}"),
        }
    }

    #[test]
    fn domain_bars_carry_top_gap_with_fallback() {
        let tree = executive_briefing(&sample_assessment());
        match parse_slide(&tree.sections[1]) {
            SlideLayout::DomainBars(bars) => {
                // Failing domain exposes its first recommendation
                let talent = bars.domains.iter().find(|d| d.name == "Talent").unwrap();
                assert_eq!(
                    talent.top_gap.as_deref(),
                    Some("Hire a data engineering lead")
                );
                // Domain with no recommendations gets the fixed fallback
                let infra = bars
                    .domains
                    .iter()
                    .find(|d| d.name == "Infrastructure")
                    .unwrap();
                assert_eq!(infra.top_gap.as_deref(), Some("No gaps identified"));
            }
            other => panic!("expected domain_bars, got {other:?}"),
        }
    }

    #[test]
    fn domain_talking_points_name_best_and_worst() {
        let tree = executive_briefing(&sample_assessment());
        let points = parse_slide(&tree.sections[1]).talking_points().to_vec();
        assert!(points[0].contains("Strongest domain: Infrastructure at 84%"));
        assert!(points[1].contains("Weakest domain: Talent at 48%"));
        assert!(points[2].contains("recommendations identified"));
    }

    #[test]
    fn risk_slide_caps_at_ten_and_counts_tiers() {
        let mut data = sample_assessment();
        let template = data.risks[0].clone();
        for i in 0..12 {
            let mut risk = template.clone();
            risk.category = format!("Extra risk {i}");
            risk.tier = RiskTier::Medium;
            data.risks.push(risk);
        }
        let tree = executive_briefing(&data);
        match parse_slide(&tree.sections[2]) {
            SlideLayout::RiskHeatmap(map) => {
                assert_eq!(map.risks.len(), 10);
                assert_eq!(map.summary.critical, 1);
                assert_eq!(map.summary.high, 2);
                assert_eq!(map.summary.total, 16);
            }
            other => panic!("expected risk_heatmap, got {other:?}"),
        }
    }

    #[test]
    fn risk_talking_points_lead_with_counts_then_top_risk() {
        let tree = executive_briefing(&sample_assessment());
        let points = parse_slide(&tree.sections[2]).talking_points().to_vec();
        assert_eq!(
            points[0],
            "1 critical and 2 high severity risks require mitigation"
        );
        assert!(points[1].starts_with("Top risk: Data Privacy - "));
    }

    #[test]
    fn risk_talking_point_truncates_long_description() {
        let mut data = sample_assessment();
        data.risks[0].description = "x".repeat(150);
        let tree = executive_briefing(&data);
        let points = parse_slide(&tree.sections[2]).talking_points().to_vec();
        assert!(points[1].ends_with("..."));
        assert!(points[1].contains(&"x".repeat(100)));
        assert!(!points[1].contains(&"x".repeat(101)));
    }

    #[test]
    fn empty_risk_list_uses_fallback_point() {
        let mut data = sample_assessment();
        data.risks.clear();
        let tree = executive_briefing(&data);
        match parse_slide(&tree.sections[2]) {
            SlideLayout::RiskHeatmap(map) => {
                assert!(map.risks.is_empty());
                assert_eq!(map.summary.total, 0);
                assert_eq!(map.talking_points[1], "No critical risks identified");
            }
            other => panic!("expected risk_heatmap, got {other:?}"),
        }
    }

    #[test]
    fn timeline_roi_degrades_without_roi() {
        let mut data = sample_assessment();
        data.roi = None;
        let tree = executive_briefing(&data);
        match parse_slide(&tree.sections[3]) {
            SlideLayout::TimelineRoi(slide) => {
                assert!(slide.roi.is_none());
                assert_eq!(slide.talking_points[0], "ROI analysis pending");
                assert!(slide.talking_points.iter().all(|p| !p.is_empty()));
            }
            other => panic!("expected timeline_roi, got {other:?}"),
        }
    }

    #[test]
    fn timeline_roi_reports_figures_when_present() {
        let tree = executive_briefing(&sample_assessment());
        let points = parse_slide(&tree.sections[3]).talking_points().to_vec();
        assert_eq!(points[0], "Projected annual savings of $840K");
        assert!(points[1].contains("Payback in 14 months"));
        assert!(points[2].contains("3 phase implementation timeline"));
    }

    #[test]
    fn recommendation_is_go_for_moderate() {
        let tree = executive_briefing(&sample_assessment());
        match parse_slide(&tree.sections[4]) {
            SlideLayout::Recommendation(rec) => {
                assert_eq!(rec.recommendation, "GO");
                // Moderate is GO but not high: gaps still come first
                assert_eq!(rec.next_steps[0], "Address capability gaps within 30 days");
                // ROI present: validation step is appended
                assert!(rec.next_steps.last().unwrap().contains("ROI assumptions"));
            }
            other => panic!("expected recommendation, got {other:?}"),
        }
    }

    #[test]
    fn recommendation_is_conditional_with_one_condition_per_failing_domain() {
        let mut data = sample_assessment();
        data.score.rating = Rating::Conditional;
        let tree = executive_briefing(&data);
        match parse_slide(&tree.sections[4]) {
            SlideLayout::Recommendation(rec) => {
                assert_eq!(rec.recommendation, "CONDITIONAL");
                assert_eq!(rec.conditions.len(), 1);
                assert_eq!(
                    rec.conditions[0],
                    "Talent domain must reach 70% threshold"
                );
            }
            other => panic!("expected recommendation, got {other:?}"),
        }
    }

    #[test]
    fn recommendation_first_step_rewards_high_rating() {
        let mut data = sample_assessment();
        data.score.rating = Rating::High;
        let tree = executive_briefing(&data);
        match parse_slide(&tree.sections[4]) {
            SlideLayout::Recommendation(rec) => {
                assert_eq!(
                    rec.next_steps[0],
                    "Proceed immediately with phase one implementation"
                );
            }
            other => panic!("expected recommendation, got {other:?}"),
        }
    }

    #[test]
    fn recommendation_omits_roi_step_without_roi() {
        let mut data = sample_assessment();
        data.roi = None;
        let tree = executive_briefing(&data);
        match parse_slide(&tree.sections[4]) {
            SlideLayout::Recommendation(rec) => {
                assert_eq!(rec.next_steps.len(), 3);
                assert!(!rec.next_steps.iter().any(|s| s.contains("ROI")));
            }
            other => panic!("expected recommendation, got {other:?}"),
        }
    }

    #[test]
    fn briefing_survives_minimal_input() {
        let tree = executive_briefing(&minimal_assessment());
        assert_eq!(tree.sections.len(), 5);
        for section in &tree.sections {
            let points = parse_slide(section).talking_points().to_vec();
            assert!(points.iter().all(|p| !p.is_empty()));
        }
    }

    #[test]
    fn roi_figures_pass_through_unchanged() {
        let mut data = sample_assessment();
        data.roi = Some(RoiResult {
            annual_savings: 1.0,
            total_cost: 2.0,
            net_benefit: -1.0,
            payback_months: 3.0,
            three_year_npv: 4.0,
            roi_percent: 5.0,
        });
        let tree = executive_briefing(&data);
        match parse_slide(&tree.sections[3]) {
            SlideLayout::TimelineRoi(slide) => {
                let roi = slide.roi.unwrap();
                assert_eq!(roi.net_benefit, -1.0);
                assert_eq!(roi.roi_percent, 5.0);
            }
            other => panic!("expected timeline_roi, got {other:?}"),
        }
    }
}
