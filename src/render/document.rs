//! The flowing-document renderer.
//!
//! Produces one title page followed by a single continuous flow: every
//! top-level section in order, each as a heading plus body, then its
//! subsections one heading level smaller. The flow breaks onto new
//! physical pages automatically whenever a line would cross the bottom
//! margin. Pagination is a renderer concern; generators never see it.
//!
//! ## Body dispatch
//!
//! A body starting with `{` is parsed as a structured block. Only the
//! `score_display` block has a flowing layout; anything else, including a
//! body that fails to parse at all, falls back to rendering the raw
//! string as prose. Prose splits into paragraphs on blank lines, and a
//! paragraph whose every non-empty line looks like `N. text` renders as a
//! numbered list.

use crate::block::{Block, DomainBar, ScoreDisplay};
use crate::render::RenderStrategy;
use crate::render::page::{DOC_HEIGHT, DOC_WIDTH, FontWeight, Page, PageSequence};
use crate::theme::Theme;
use crate::types::ReportContent;
use crate::visual::{
    self, bar_width_fraction, rating_color, threshold_offset_fraction, wrap_text,
};
use log::debug;

const TITLE_SIZE: f64 = 28.0;
const SUBTITLE_SIZE: f64 = 15.0;
const META_SIZE: f64 = 10.5;
const H1_SIZE: f64 = 16.0;
const H2_SIZE: f64 = 12.5;
const BODY_SIZE: f64 = 10.5;
/// Line height as a multiple of font size.
const LEADING: f64 = 1.45;
/// Hanging indent for numbered list items.
const LIST_INDENT: f64 = 18.0;

/// Renders a content tree as a continuously-flowing document.
pub struct DocumentRenderer {
    theme: Theme,
}

impl DocumentRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, tree: &ReportContent) -> PageSequence {
        let mut pages = vec![self.title_page(tree)];
        let mut flow = Flow::new(self.theme.page.margin);
        for section in &tree.sections {
            self.heading(&mut flow, &section.title, H1_SIZE, true);
            if let Some(content) = &section.content {
                self.body(&mut flow, content);
            }
            for sub in &section.subsections {
                self.heading(&mut flow, &sub.title, H2_SIZE, false);
                if let Some(content) = &sub.content {
                    self.body(&mut flow, content);
                }
            }
        }
        pages.extend(flow.pages);
        pages
    }

    // =========================================================================
    // Title page
    // =========================================================================

    fn title_page(&self, tree: &ReportContent) -> Page {
        let colors = &self.theme.colors;
        let mut page = Page::document();

        let title_y = DOC_HEIGHT * 0.38;
        page.centered(
            title_y,
            TITLE_SIZE,
            FontWeight::Bold,
            colors.ink(),
            tree.title.as_str(),
        );
        if !tree.subtitle.is_empty() {
            page.centered(
                title_y + 26.0,
                SUBTITLE_SIZE,
                FontWeight::Regular,
                colors.muted(),
                tree.subtitle.as_str(),
            );
        }
        page.rect(DOC_WIDTH / 2.0 - 36.0, title_y + 44.0, 72.0, 3.0, colors.accent());

        let meta = &tree.metadata;
        let mut y = DOC_HEIGHT * 0.62;
        let lines = [
            format!("Prepared for {}", meta.prepared_for),
            format!("Prepared by {}", meta.prepared_by),
            meta.date.clone(),
        ];
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            page.centered(y, META_SIZE, FontWeight::Regular, colors.muted(), line);
            y += 16.0;
        }

        if !meta.confidentiality.is_empty() {
            let badge_y = DOC_HEIGHT - 96.0;
            page.chip(DOC_WIDTH / 2.0 - 80.0, badge_y, 160.0, 20.0, visual::RED_TINT, 4.0);
            page.centered(
                badge_y + 14.0,
                9.0,
                FontWeight::Bold,
                visual::RED,
                meta.confidentiality.to_uppercase(),
            );
        }
        page
    }

    // =========================================================================
    // Flow composition
    // =========================================================================

    fn heading(&self, flow: &mut Flow, title: &str, size: f64, rule: bool) {
        flow.ensure(size * 3.0);
        flow.advance(size * 1.7);
        let x = flow.margin;
        let y = flow.y;
        flow.page().bold(x, y, size, self.theme.colors.ink(), title);
        if rule {
            let rule_y = flow.y + 6.0;
            let x2 = flow.margin + flow.content_width();
            flow.page()
                .line(x, rule_y, x2, rule_y, self.theme.colors.border(), 0.75);
            flow.advance(8.0);
        }
        flow.advance(4.0);
    }

    fn body(&self, flow: &mut Flow, content: &str) {
        if content.starts_with('{') {
            match Block::parse(content) {
                Some(Block::ScoreDisplay(display)) => {
                    self.score_display(flow, &display);
                    return;
                }
                Some(other) => {
                    debug!(
                        "{} block has no flowing layout; rendering raw text",
                        other.kind()
                    );
                }
                None => debug!("unparseable structured block; rendering raw text"),
            }
        }
        self.prose(flow, content);
    }

    fn prose(&self, flow: &mut Flow, content: &str) {
        for paragraph in content.split("\n\n") {
            let lines: Vec<&str> = paragraph
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            if lines.is_empty() {
                continue;
            }
            if lines.iter().all(|l| is_numbered_item(l)) {
                self.numbered_list(flow, &lines);
            } else {
                self.paragraph(flow, &lines.join(" "));
            }
        }
    }

    fn paragraph(&self, flow: &mut Flow, text: &str) {
        let line_h = BODY_SIZE * LEADING;
        let ink = self.theme.colors.ink();
        for line in wrap_text(text, flow.content_width(), BODY_SIZE) {
            flow.ensure(line_h);
            flow.advance(line_h);
            let x = flow.margin;
            let y = flow.y;
            flow.page().text(x, y, BODY_SIZE, ink, line);
        }
        flow.advance(6.0);
    }

    fn numbered_list(&self, flow: &mut Flow, items: &[&str]) {
        let line_h = BODY_SIZE * LEADING;
        let ink = self.theme.colors.ink();
        let text_w = flow.content_width() - LIST_INDENT;
        for (i, item) in items.iter().enumerate() {
            let text = strip_item_number(item);
            for (j, line) in wrap_text(text, text_w, BODY_SIZE).into_iter().enumerate() {
                flow.ensure(line_h);
                flow.advance(line_h);
                let x = flow.margin;
                let y = flow.y;
                if j == 0 {
                    flow.page().text(x, y, BODY_SIZE, ink, format!("{}.", i + 1));
                }
                flow.page().text(x + LIST_INDENT, y, BODY_SIZE, ink, line);
            }
            flow.advance(3.0);
        }
        flow.advance(3.0);
    }

    // =========================================================================
    // score_display block
    // =========================================================================

    fn score_display(&self, flow: &mut Flow, display: &ScoreDisplay) {
        let colors = &self.theme.colors;
        flow.ensure(110.0);
        flow.advance(52.0);
        let score_color = rating_color(&display.rating);
        let y = flow.y;
        flow.page().centered(
            y,
            42.0,
            FontWeight::Bold,
            score_color,
            format!("{:.0}", display.overall),
        );
        flow.advance(20.0);
        let y = flow.y;
        flow.page().centered(
            y,
            12.0,
            FontWeight::Bold,
            colors.ink(),
            display_rating(&display.rating),
        );
        flow.advance(14.0);
        for domain in &display.domains {
            self.domain_bar(flow, domain);
        }
        flow.advance(6.0);
    }

    fn domain_bar(&self, flow: &mut Flow, domain: &DomainBar) {
        const BAR_H: f64 = 10.0;
        const NAME_W: f64 = 150.0;
        const BADGE_W: f64 = 64.0;

        let colors = &self.theme.colors;
        flow.ensure(24.0);
        flow.advance(19.0);
        let y = flow.y;
        let x = flow.margin;
        let content_w = flow.content_width();
        let bar_x = x + NAME_W;
        let bar_w = content_w - NAME_W - BADGE_W;
        let page = flow.page();

        page.text(x, y, 9.5, colors.ink(), domain.name.as_str());

        let track_y = y - BAR_H + 1.0;
        page.chip(bar_x, track_y, bar_w, BAR_H, colors.border(), 2.0);
        let fill_w = bar_w * bar_width_fraction(domain.score);
        if fill_w > 0.0 {
            page.chip(bar_x, track_y, fill_w, BAR_H, colors.accent(), 2.0);
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
        let (badge, badge_color) = if domain.passed {
            ("PASS", visual::GREEN)
        } else {
            ("FAIL", visual::RED)
        };
        page.right(x + content_w, y, 9.0, FontWeight::Bold, badge_color, badge);
    }
}

impl RenderStrategy for DocumentRenderer {
    fn render(&self, tree: &ReportContent) -> PageSequence {
        DocumentRenderer::render(self, tree)
    }
}

// ============================================================================
// Flow cursor
// ============================================================================

/// Cursor over a growing page list: content is appended top to bottom and a
/// new page starts whenever the next element would cross the bottom margin.
struct Flow {
    pages: Vec<Page>,
    y: f64,
    margin: f64,
}

impl Flow {
    fn new(margin: f64) -> Self {
        Self {
            pages: vec![Page::document()],
            y: margin,
            margin,
        }
    }

    fn content_width(&self) -> f64 {
        DOC_WIDTH - 2.0 * self.margin
    }

    /// Start a new page unless `needed` points still fit on this one.
    fn ensure(&mut self, needed: f64) {
        if self.y + needed > DOC_HEIGHT - self.margin {
            self.pages.push(Page::document());
            self.y = self.margin;
        }
    }

    fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    fn page(&mut self) -> &mut Page {
        // Constructed with one page; never empty.
        self.pages.last_mut().unwrap()
    }
}

// ============================================================================
// Numbered-list detection
// ============================================================================

/// Display form of a rating string: `not_ready` → `NOT READY`. Labels that
/// arrive pre-translated pass through unchanged.
fn display_rating(rating: &str) -> String {
    rating.replace('_', " ").to_uppercase()
}

/// Does the line match `^\d+\.\s`?
fn is_numbered_item(line: &str) -> bool {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return false;
    }
    let mut chars = rest.chars();
    chars.next() == Some('.') && chars.next().is_some_and(char::is_whitespace)
}

/// Strip the leading `N. ` from a list item line.
fn strip_item_number(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.strip_prefix('.').map(str::trim_start).unwrap_or(line)
}
