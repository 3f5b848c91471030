//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **content-centric, not file-centric**. The primary display
//! for every section is its semantic identity (positional index and
//! title), with the body kind (prose or structured block) shown as
//! secondary context on an indented line. This makes the output readable
//! as a report outline while still showing what each section carries.
//!
//! # Output Format
//!
//! ## Content
//!
//! ```text
//! AI Readiness Assessment - Meridian Logistics
//! 001 Executive Summary
//!     Prose: 2 paragraphs
//! 002 Overall Score
//!     Block: score_display
//! 003 Domain Analysis (3 subsections)
//!     001 Data Quality
//!         Prose: 3 paragraphs
//!
//! 6 sections, 1 structured block
//! ```
//!
//! ## Render
//!
//! ```text
//! Slide deck
//! 001 page (14 primitives)
//! 002 page (61 primitives)
//!
//! Rendered 6 pages (792x612)
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::block::Block;
use crate::render::page::Page;
use crate::types::{ContentSection, ReportContent};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// One-line description of a section body.
fn body_line(content: &str) -> String {
    match Block::parse(content) {
        Some(block) => format!("Block: {}", block.kind()),
        None => {
            let paragraphs = content.split("\n\n").filter(|p| !p.trim().is_empty()).count();
            let word = if paragraphs == 1 { "paragraph" } else { "paragraphs" };
            format!("Prose: {paragraphs} {word}")
        }
    }
}

fn section_lines(section: &ContentSection, index: usize, depth: usize, out: &mut Vec<String>) {
    let header = if section.subsections.is_empty() {
        format!("{}{} {}", indent(depth), format_index(index), section.title)
    } else {
        format!(
            "{}{} {} ({} subsections)",
            indent(depth),
            format_index(index),
            section.title,
            section.subsections.len()
        )
    };
    out.push(header);
    if let Some(content) = &section.content {
        out.push(format!("{}{}", indent(depth + 1), body_line(content)));
    }
    for (i, sub) in section.subsections.iter().enumerate() {
        section_lines(sub, i + 1, depth + 1, out);
    }
}

/// Format the content-generation stage output.
pub fn format_content_output(tree: &ReportContent) -> Vec<String> {
    let mut lines = vec![format!("{} - {}", tree.title, tree.subtitle)];
    for (i, section) in tree.sections.iter().enumerate() {
        section_lines(section, i + 1, 0, &mut lines);
    }
    let blocks = count_blocks(tree);
    lines.push(String::new());
    lines.push(format!(
        "{} sections, {} structured {}",
        tree.sections.len(),
        blocks,
        if blocks == 1 { "block" } else { "blocks" }
    ));
    lines
}

fn count_blocks(tree: &ReportContent) -> usize {
    tree.sections
        .iter()
        .flat_map(|s| std::iter::once(s).chain(s.subsections.iter()))
        .filter_map(|s| s.content.as_deref())
        .filter(|c| Block::parse(c).is_some())
        .count()
}

pub fn print_content_output(tree: &ReportContent) {
    for line in format_content_output(tree) {
        println!("{line}");
    }
}

/// Format the render stage output.
pub fn format_render_output(kind: &str, pages: &[Page]) -> Vec<String> {
    let mut lines = vec![kind.to_string()];
    for (i, page) in pages.iter().enumerate() {
        lines.push(format!(
            "{} page ({} primitives)",
            format_index(i + 1),
            page.primitives.len()
        ));
    }
    lines.push(String::new());
    let dims = pages
        .first()
        .map(|p| format!(" ({:.0}x{:.0})", p.width, p.height))
        .unwrap_or_default();
    lines.push(format!("Rendered {} pages{}", pages.len(), dims));
    lines
}

pub fn print_render_output(kind: &str, pages: &[Page]) {
    for line in format_render_output(kind, pages) {
        println!("{line}");
    }
}
