//! The slide-deck renderer.
//!
//! Produces a title slide followed by one fixed-layout slide per top-level
//! section. Every content slide shares the same chrome (brand mark and
//! `N / total` counter pinned to the top, confidentiality tag and
//! document-type label pinned to the bottom) at layout constants that
//! never move for content.
//!
//! ## Strictness
//!
//! A slide's body must parse as a `slide` block with a recognized
//! `layout`. Anything else, whether malformed JSON, a missing body, or a
//! valid block of the wrong kind, drops the slide from the output entirely: a
//! fixed layout has no meaningful way to show raw fallback text. The
//! `N / total` counters are computed after dropping, so they always
//! describe the deck that actually ships.

use crate::block::{
    Block, DomainBar, DomainBars, Recommendation, RiskHeatmap, RoiFigures, ScoreHero,
    SlideLayout, TimelineRoi,
};
use crate::render::RenderStrategy;
use crate::render::page::{FontWeight, Page, PageSequence, SLIDE_WIDTH};
use crate::theme::Theme;
use crate::types::{ContentSection, ReportContent};
use crate::visual::{
    self, bar_width_fraction, rating_color, threshold_offset_fraction, tier_style, truncate,
    wrap_text,
};
use log::debug;

/// Baseline of the top chrome row.
const CHROME_TOP_Y: f64 = 36.0;
/// Baseline of the bottom chrome row.
const CHROME_BOTTOM_Y: f64 = 584.0;
/// Baseline of the slide heading (the section's human label).
const HEADING_Y: f64 = 96.0;
/// Top edge of the talking-points panel.
const PANEL_Y: f64 = 462.0;
const PANEL_H: f64 = 104.0;
/// Risk rows shown before the remainder collapses to a count.
const RISK_ROW_LIMIT: usize = 7;

/// Renders a content tree as a fixed-layout slide deck.
pub struct DeckRenderer {
    theme: Theme,
}

impl DeckRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, tree: &ReportContent) -> PageSequence {
        let slides = self.recognize_slides(tree);
        let total = slides.len();

        let mut pages = vec![self.title_slide(tree)];
        for (i, (section, layout)) in slides.iter().enumerate() {
            let mut page = Page::slide();
            self.chrome(&mut page, i + 1, total, &tree.metadata.confidentiality);
            page.bold(
                self.margin(),
                HEADING_Y,
                20.0,
                self.theme.colors.ink(),
                section.title.as_str(),
            );
            match layout {
                SlideLayout::ScoreHero(hero) => self.score_hero(&mut page, hero),
                SlideLayout::DomainBars(bars) => self.domain_bars(&mut page, bars),
                SlideLayout::RiskHeatmap(map) => self.risk_heatmap(&mut page, map),
                SlideLayout::TimelineRoi(slide) => self.timeline_roi(&mut page, slide),
                SlideLayout::Recommendation(rec) => self.recommendation(&mut page, rec),
            }
            self.talking_points(&mut page, layout.talking_points());
            pages.push(page);
        }
        pages
    }

    /// Sections whose bodies parse as slide blocks, in order. Everything
    /// else is dropped here so chrome counters see the final count.
    fn recognize_slides<'a>(
        &self,
        tree: &'a ReportContent,
    ) -> Vec<(&'a ContentSection, SlideLayout)> {
        tree.sections
            .iter()
            .filter_map(|section| {
                let Some(content) = section.content.as_deref() else {
                    debug!("slide '{}' has no content; dropped", section.title);
                    return None;
                };
                match Block::parse(content) {
                    Some(Block::Slide(layout)) => Some((section, layout)),
                    Some(other) => {
                        debug!(
                            "slide '{}' carries a {} block; dropped",
                            section.title,
                            other.kind()
                        );
                        None
                    }
                    None => {
                        debug!(
                            "slide '{}' failed to parse as a structured block; dropped",
                            section.title
                        );
                        None
                    }
                }
            })
            .collect()
    }

    fn margin(&self) -> f64 {
        self.theme.page.slide_margin
    }

    fn content_width(&self) -> f64 {
        SLIDE_WIDTH - 2.0 * self.margin()
    }

    // =========================================================================
    // Chrome and title slide
    // =========================================================================

    fn brand_mark(&self, page: &mut Page) {
        let colors = &self.theme.colors;
        let x = self.margin();
        page.rect(x, CHROME_TOP_Y - 9.0, 9.0, 9.0, colors.accent());
        page.bold(
            x + 16.0,
            CHROME_TOP_Y,
            10.0,
            colors.ink(),
            self.theme.brand.name.as_str(),
        );
    }

    fn chrome(&self, page: &mut Page, number: usize, total: usize, confidentiality: &str) {
        let colors = &self.theme.colors;
        self.brand_mark(page);
        page.right(
            SLIDE_WIDTH - self.margin(),
            CHROME_TOP_Y,
            9.5,
            FontWeight::Regular,
            colors.muted(),
            format!("{number} / {total}"),
        );
        if !confidentiality.is_empty() {
            page.text(
                self.margin(),
                CHROME_BOTTOM_Y,
                8.0,
                colors.muted(),
                confidentiality.to_uppercase(),
            );
        }
        page.right(
            SLIDE_WIDTH - self.margin(),
            CHROME_BOTTOM_Y,
            8.0,
            FontWeight::Regular,
            colors.muted(),
            self.theme.brand.deck_label.as_str(),
        );
    }

    fn title_slide(&self, tree: &ReportContent) -> Page {
        let colors = &self.theme.colors;
        let mut page = Page::slide();
        self.brand_mark(&mut page);

        page.centered(
            252.0,
            32.0,
            FontWeight::Bold,
            colors.ink(),
            tree.title.as_str(),
        );
        if !tree.subtitle.is_empty() {
            page.centered(
                282.0,
                15.0,
                FontWeight::Regular,
                colors.muted(),
                tree.subtitle.as_str(),
            );
        }
        page.rect(SLIDE_WIDTH / 2.0 - 40.0, 302.0, 80.0, 3.0, colors.accent());

        let meta = &tree.metadata;
        page.centered(
            344.0,
            11.0,
            FontWeight::Regular,
            colors.muted(),
            format!("Prepared for {}", meta.prepared_for),
        );
        if !meta.date.is_empty() {
            page.centered(
                362.0,
                11.0,
                FontWeight::Regular,
                colors.muted(),
                meta.date.as_str(),
            );
        }
        if !meta.confidentiality.is_empty() {
            page.chip(SLIDE_WIDTH / 2.0 - 80.0, 508.0, 160.0, 20.0, visual::RED_TINT, 4.0);
            page.centered(
                522.0,
                9.0,
                FontWeight::Bold,
                visual::RED,
                meta.confidentiality.to_uppercase(),
            );
        }
        page
    }

    // =========================================================================
    // Layout: score_hero
    // =========================================================================

    fn score_hero(&self, page: &mut Page, hero: &ScoreHero) {
        let colors = &self.theme.colors;
        let score_color = rating_color(&hero.rating);

        let cx = 210.0;
        let cy = 270.0;
        page.ring(cx, cy, 85.0, score_color, 12.0);
        page.centered_at(
            cx,
            cy + 16.0,
            48.0,
            FontWeight::Bold,
            colors.ink(),
            format!("{:.0}", hero.score),
        );
        page.centered_at(
            cx,
            cy + 44.0,
            10.0,
            FontWeight::Regular,
            colors.muted(),
            "out of 100",
        );
        page.centered_at(
            cx,
            cy + 122.0,
            14.0,
            FontWeight::Bold,
            score_color,
            hero.rating.as_str(),
        );

        let stats = [
            (
                format!("{} / {}", hero.passed_domains, hero.total_domains),
                "Domains passed",
            ),
            (format!("{:.0}", hero.score), "Overall score"),
        ];
        let box_w = 160.0;
        let box_h = 110.0;
        let mut x = 400.0;
        for (value, caption) in stats {
            page.frame(x, 210.0, box_w, box_h, colors.border());
            page.centered_at(
                x + box_w / 2.0,
                268.0,
                30.0,
                FontWeight::Bold,
                colors.ink(),
                value,
            );
            page.centered_at(
                x + box_w / 2.0,
                296.0,
                9.5,
                FontWeight::Regular,
                colors.muted(),
                caption,
            );
            x += box_w + 24.0;
        }
    }

    // =========================================================================
    // Layout: domain_bars
    // =========================================================================

    fn domain_bars(&self, page: &mut Page, bars: &DomainBars) {
        const LIST_W: f64 = 430.0;
        const NAME_W: f64 = 135.0;
        const BAR_H: f64 = 11.0;

        let colors = &self.theme.colors;
        let margin = self.margin();
        let rows_top = 128.0;
        let row_h = if bars.domains.is_empty() {
            0.0
        } else {
            (320.0 / bars.domains.len() as f64).min(44.0)
        };

        for (i, domain) in bars.domains.iter().enumerate() {
            let y = rows_top + row_h * i as f64 + row_h * 0.65;
            page.bold(margin, y, 10.0, colors.ink(), domain.name.as_str());

            let bar_x = margin + NAME_W;
            let bar_w = LIST_W - NAME_W - 45.0;
            let track_y = y - BAR_H + 1.0;
            page.chip(bar_x, track_y, bar_w, BAR_H, colors.border(), 2.0);
            let fill_w = bar_w * bar_width_fraction(domain.score);
            if fill_w > 0.0 {
                let fill = if domain.passed {
                    visual::GREEN
                } else {
                    visual::ORANGE
                };
                page.chip(bar_x, track_y, fill_w, BAR_H, fill, 2.0);
            }
            let marker_x = bar_x + bar_w * threshold_offset_fraction(domain.threshold);
            page.line(marker_x, track_y - 3.0, marker_x, y + 3.0, colors.ink(), 1.0);
            page.text(
                bar_x + bar_w + 6.0,
                y,
                9.0,
                colors.muted(),
                format!("{:.0}%", domain.score),
            );
        }

        self.top_gaps_callout(page, &bars.domains);
    }

    /// "Top Gaps" callout listing failing domains only. Nothing renders
    /// when every domain passes.
    fn top_gaps_callout(&self, page: &mut Page, domains: &[DomainBar]) {
        const LIST_W: f64 = 430.0;

        let failing: Vec<&DomainBar> = domains.iter().filter(|d| !d.passed).collect();
        if failing.is_empty() {
            return;
        }
        let colors = &self.theme.colors;
        let x = self.margin() + LIST_W + 30.0;
        let w = SLIDE_WIDTH - self.margin() - x;
        let text_w = w - 28.0;

        let mut height = 36.0;
        let mut entries = Vec::new();
        for domain in failing {
            let gap = domain.top_gap.as_deref().unwrap_or("No gaps identified");
            let lines = wrap_text(gap, text_w, 9.0);
            height += 15.0 + 12.0 * lines.len() as f64 + 6.0;
            entries.push((domain.name.clone(), lines));
        }
        let height = height.min(PANEL_Y - 140.0);

        page.chip(x, 128.0, w, height, visual::ORANGE_TINT, 6.0);
        page.bold(x + 14.0, 148.0, 11.0, visual::ORANGE, "Top Gaps");
        let mut y = 166.0;
        let bottom = 128.0 + height - 6.0;
        for (name, lines) in entries {
            if y + 15.0 > bottom {
                break;
            }
            page.bold(x + 14.0, y, 9.5, colors.ink(), name);
            y += 13.0;
            for line in lines {
                if y + 12.0 > bottom {
                    break;
                }
                page.text(x + 14.0, y, 9.0, colors.muted(), line);
                y += 12.0;
            }
            y += 6.0;
        }
    }

    // =========================================================================
    // Layout: risk_heatmap
    // =========================================================================

    fn risk_heatmap(&self, page: &mut Page, map: &RiskHeatmap) {
        let colors = &self.theme.colors;
        let margin = self.margin();

        let tiles = [
            (map.summary.critical, "Critical", visual::RED, visual::RED_TINT),
            (map.summary.high, "High", visual::ORANGE, visual::ORANGE_TINT),
            (
                map.summary.total,
                "Total risks",
                colors.ink(),
                visual::NEUTRAL_TINT,
            ),
        ];
        let tile_w = 150.0;
        let mut x = margin;
        for (count, label, fg, bg) in tiles {
            page.chip(x, 118.0, tile_w, 54.0, bg, 6.0);
            page.bold(x + 16.0, 150.0, 22.0, fg, format!("{count}"));
            page.text(x + 60.0, 150.0, 9.0, colors.muted(), label);
            x += tile_w + 16.0;
        }

        let rows_top = 198.0;
        let row_h = 32.0;
        for (i, risk) in map.risks.iter().take(RISK_ROW_LIMIT).enumerate() {
            let y = rows_top + row_h * i as f64 + 18.0;
            let style = tier_style(&risk.tier);
            page.chip(margin, y - 11.0, 62.0, 15.0, style.bg, 3.0);
            page.centered_at(
                margin + 31.0,
                y,
                8.0,
                FontWeight::Bold,
                style.fg,
                risk.tier.to_uppercase(),
            );
            page.bold(margin + 76.0, y, 10.0, colors.ink(), truncate(&risk.category, 28));
            page.text(
                margin + 280.0,
                y,
                8.5,
                colors.muted(),
                format!("L {} / I {}", risk.likelihood, risk.impact),
            );
            page.text(
                margin + 410.0,
                y,
                9.0,
                colors.muted(),
                truncate(&risk.description, 52),
            );
        }
        if map.risks.len() > RISK_ROW_LIMIT {
            let y = rows_top + row_h * RISK_ROW_LIMIT as f64 + 14.0;
            page.text(
                margin,
                y,
                8.5,
                colors.muted(),
                format!("+ {} more risks tracked", map.risks.len() - RISK_ROW_LIMIT),
            );
        }
    }

    // =========================================================================
    // Layout: timeline_roi
    // =========================================================================

    fn timeline_roi(&self, page: &mut Page, slide: &TimelineRoi) {
        const LEFT_W: f64 = 330.0;

        let colors = &self.theme.colors;
        let margin = self.margin();

        page.bold(margin, 130.0, 12.0, colors.ink(), "Timeline");
        let mut y = 156.0;
        for entry in &slide.timeline {
            if y > PANEL_Y - 20.0 {
                break;
            }
            page.bold(margin, y, 10.5, colors.ink(), entry.phase.as_str());
            page.right(
                margin + LEFT_W,
                y,
                9.0,
                FontWeight::Regular,
                colors.muted(),
                entry.weeks.as_str(),
            );
            page.text(
                margin,
                y + 12.0,
                7.5,
                status_color(&entry.status),
                entry.status.to_uppercase(),
            );
            page.line(
                margin,
                y + 20.0,
                margin + LEFT_W,
                y + 20.0,
                colors.border(),
                0.5,
            );
            y += 36.0;
        }

        let right_x = margin + LEFT_W + 48.0;
        let right_w = SLIDE_WIDTH - margin - right_x;
        page.bold(right_x, 130.0, 12.0, colors.ink(), "Investment");
        match &slide.roi {
            Some(roi) => self.roi_cards(page, roi, right_x, right_w),
            None => {
                page.chip(right_x, 150.0, right_w, 80.0, visual::NEUTRAL_TINT, 6.0);
                page.centered_at(
                    right_x + right_w / 2.0,
                    195.0,
                    11.0,
                    FontWeight::Regular,
                    colors.muted(),
                    "ROI analysis pending",
                );
            }
        }
    }

    fn roi_cards(&self, page: &mut Page, roi: &RoiFigures, x: f64, w: f64) {
        let colors = &self.theme.colors;
        let cards = [
            ("Annual savings", visual::format_currency(roi.annual_savings)),
            ("Total cost", visual::format_currency(roi.total_cost)),
            ("Net benefit", visual::format_currency(roi.net_benefit)),
            ("Payback", format!("{:.0} mo", roi.payback_months)),
            ("3-year NPV", visual::format_currency(roi.three_year_npv)),
            ("ROI", format!("{:.0}%", roi.roi_percent)),
        ];
        let card_w = (w - 12.0) / 2.0;
        let card_h = 62.0;
        for (i, (caption, value)) in cards.into_iter().enumerate() {
            let cx = x + (i % 2) as f64 * (card_w + 12.0);
            let cy = 150.0 + (i / 2) as f64 * (card_h + 12.0);
            page.frame(cx, cy, card_w, card_h, colors.border());
            page.bold(cx + 12.0, cy + 30.0, 15.0, colors.ink(), value);
            page.text(cx + 12.0, cy + 48.0, 8.5, colors.muted(), caption);
        }
    }

    // =========================================================================
    // Layout: recommendation
    // =========================================================================

    fn recommendation(&self, page: &mut Page, rec: &Recommendation) {
        const COLUMN_W: f64 = 320.0;

        let colors = &self.theme.colors;
        let margin = self.margin();
        let banner_color = if rec.recommendation == "GO" {
            visual::GREEN
        } else {
            visual::ORANGE
        };

        page.chip(margin, 118.0, self.content_width(), 62.0, banner_color, 6.0);
        page.centered(
            158.0,
            28.0,
            FontWeight::Bold,
            visual::PAPER,
            rec.recommendation.as_str(),
        );

        let mut y = 218.0;
        if !rec.conditions.is_empty() {
            page.bold(margin, y, 12.0, colors.ink(), "Conditions");
            y += 20.0;
            for condition in &rec.conditions {
                for line in wrap_text(condition, COLUMN_W - 14.0, 9.5) {
                    if y > PANEL_Y - 14.0 {
                        break;
                    }
                    page.text(margin, y, 9.5, colors.ink(), format!("- {line}"));
                    y += 14.0;
                }
            }
        }

        let right_x = margin + COLUMN_W + 56.0;
        let mut y = 218.0;
        page.bold(right_x, y, 12.0, colors.ink(), "Next Steps");
        y += 20.0;
        for (i, step) in rec.next_steps.iter().enumerate() {
            for (j, line) in wrap_text(step, COLUMN_W - 18.0, 9.5).into_iter().enumerate() {
                if y > PANEL_Y - 14.0 {
                    break;
                }
                if j == 0 {
                    page.bold(right_x, y, 9.5, colors.accent(), format!("{}.", i + 1));
                }
                page.text(right_x + 18.0, y, 9.5, colors.ink(), line);
                y += 14.0;
            }
        }
    }

    // =========================================================================
    // Shared callout
    // =========================================================================

    /// The "Key Talking Points" panel every layout ends with. Omitted
    /// entirely when there is nothing to say.
    fn talking_points(&self, page: &mut Page, points: &[String]) {
        if points.is_empty() {
            return;
        }
        let colors = &self.theme.colors;
        let margin = self.margin();
        let w = self.content_width();
        page.chip(margin, PANEL_Y, w, PANEL_H, colors.accent_tint(), 6.0);
        page.bold(
            margin + 16.0,
            PANEL_Y + 20.0,
            10.5,
            colors.accent(),
            "Key Talking Points",
        );
        let mut y = PANEL_Y + 38.0;
        for point in points {
            if y > PANEL_Y + PANEL_H - 8.0 {
                break;
            }
            page.text(
                margin + 16.0,
                y,
                9.5,
                colors.ink(),
                format!("- {}", truncate(point, 130)),
            );
            y += 16.0;
        }
    }
}

impl RenderStrategy for DeckRenderer {
    fn render(&self, tree: &ReportContent) -> PageSequence {
        DeckRenderer::render(self, tree)
    }
}

/// Timeline status coloring: done is green, underway is amber, anything
/// else (planned, unknown) stays muted.
fn status_color(status: &str) -> crate::visual::Color {
    match status.to_ascii_lowercase().as_str() {
        "complete" | "completed" | "done" => visual::GREEN,
        "in_progress" | "active" | "underway" => visual::YELLOW,
        _ => visual::MUTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::executive_briefing;
    use crate::test_helpers::{minimal_assessment, sample_assessment};

    fn render(tree: &ReportContent) -> PageSequence {
        DeckRenderer::new(Theme::default()).render(tree)
    }

    #[test]
    fn full_briefing_renders_title_plus_five_slides() {
        let tree = executive_briefing(&sample_assessment());
        let pages = render(&tree);
        assert_eq!(pages.len(), 6);
        assert!(pages[0].text_content().contains("Executive Briefing"));
        for (i, page) in pages[1..].iter().enumerate() {
            let chrome = format!("{} / 5", i + 1);
            assert!(
                page.text_content().contains(&chrome),
                "slide {} missing counter {chrome}",
                i + 1
            );
        }
    }

    #[test]
    fn corrupt_slide_is_dropped_and_counters_renumber() {
        let mut tree = executive_briefing(&sample_assessment());
        tree.sections[2].content = Some("{not valid json".to_string());
        let pages = render(&tree);
        assert_eq!(pages.len(), 5);
        let all_text: Vec<String> = pages[1..].iter().map(Page::text_content).collect();
        assert!(all_text[0].contains("1 / 4"));
        assert!(all_text[3].contains("4 / 4"));
        assert!(all_text.iter().all(|t| !t.contains("/ 5")));
        // The dropped risk slide's heading is gone
        assert!(all_text.iter().all(|t| !t.contains("Risk Landscape")));
    }

    #[test]
    fn non_slide_block_is_dropped_like_a_corrupt_one() {
        let mut tree = executive_briefing(&sample_assessment());
        // Valid block, wrong kind for a deck
        tree.sections[1].content = Some(
            r#"{"type":"score_display","overall":50.0,"rating":"moderate","domains":[]}"#
                .to_string(),
        );
        let pages = render(&tree);
        assert_eq!(pages.len(), 5);
        assert!(pages[1].text_content().contains("1 / 4"));
    }

    #[test]
    fn unknown_layout_is_dropped_silently() {
        let mut tree = executive_briefing(&sample_assessment());
        tree.sections[4].content =
            Some(r#"{"type":"slide","layout":"word_cloud","words":[]}"#.to_string());
        let pages = render(&tree);
        assert_eq!(pages.len(), 5);
    }

    #[test]
    fn slide_heading_is_the_section_title() {
        let tree = executive_briefing(&sample_assessment());
        let pages = render(&tree);
        assert!(pages[1].text_content().contains("Overall Readiness"));
        assert!(pages[3].text_content().contains("Risk Landscape"));
    }

    #[test]
    fn chrome_carries_brand_and_labels() {
        let tree = executive_briefing(&sample_assessment());
        let pages = render(&tree);
        let text = pages[1].text_content();
        assert!(text.contains("readydeck"));
        assert!(text.contains("Executive Briefing"));
        assert!(text.contains("CONFIDENTIAL"));
    }

    #[test]
    fn empty_confidentiality_renders_no_tag() {
        let mut tree = executive_briefing(&sample_assessment());
        tree.metadata.confidentiality = String::new();
        let pages = render(&tree);
        assert!(!pages[1].text_content().contains("CONFIDENTIAL"));
    }

    #[test]
    fn talking_points_panel_present_on_every_slide() {
        let tree = executive_briefing(&sample_assessment());
        let pages = render(&tree);
        for page in &pages[1..] {
            assert!(page.text_content().contains("Key Talking Points"));
        }
    }

    #[test]
    fn empty_talking_points_omit_the_panel() {
        let mut tree = executive_briefing(&sample_assessment());
        tree.sections = vec![crate::types::ContentSection::text(
            "Quiet slide",
            r#"{"type":"slide","layout":"domain_bars","domains":[],"talkingPoints":[]}"#,
        )];
        let pages = render(&tree);
        assert_eq!(pages.len(), 2);
        assert!(!pages[1].text_content().contains("Key Talking Points"));
    }

    #[test]
    fn roi_pending_card_when_roi_missing() {
        let mut data = sample_assessment();
        data.roi = None;
        let pages = render(&executive_briefing(&data));
        assert!(pages[4].text_content().contains("ROI analysis pending"));
    }

    #[test]
    fn roi_cards_show_formatted_figures() {
        let pages = render(&executive_briefing(&sample_assessment()));
        let text = pages[4].text_content();
        assert!(text.contains("$840K"));
        assert!(text.contains("14 mo"));
        assert!(text.contains("129%"));
    }

    #[test]
    fn recommendation_banner_shows_decision() {
        let pages = render(&executive_briefing(&sample_assessment()));
        let text = pages[5].text_content();
        assert!(text.contains("GO"));
        assert!(text.contains("Next Steps"));
        assert!(text.contains("Conditions"));
        assert!(text.contains("Talent domain must reach 70% threshold"));
    }

    #[test]
    fn top_gaps_callout_lists_failing_domains_only() {
        let pages = render(&executive_briefing(&sample_assessment()));
        let text = pages[2].text_content();
        assert!(text.contains("Top Gaps"));
        assert!(text.contains("Hire a data engineering lead"));
        // Passing domains stay out of the callout: their gap text never
        // renders even though the block carries it
        assert!(!text.contains("Document data lineage"));
    }

    #[test]
    fn deck_survives_minimal_input() {
        let pages = render(&executive_briefing(&minimal_assessment()));
        assert_eq!(pages.len(), 6);
    }

    #[test]
    fn status_color_buckets() {
        assert_eq!(status_color("complete"), visual::GREEN);
        assert_eq!(status_color("IN_PROGRESS"), visual::YELLOW);
        assert_eq!(status_color("planned"), visual::MUTED);
        assert_eq!(status_color("???"), visual::MUTED);
    }
}
