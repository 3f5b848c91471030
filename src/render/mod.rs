//! Report rendering.
//!
//! Stage 2 of the pipeline. Consumes a [`ReportContent`] tree and produces
//! a [`PageSequence`]: fixed-size pages of positioned text and shape
//! primitives. The output is sink-agnostic: PDF, SVG, or anything else is
//! a separate concern layered on top (see [`crate::html`] for one).
//!
//! Two independent strategies share the one tree shape:
//!
//! - [`DocumentRenderer`]: a continuously-flowing multi-section document.
//!   Structured blocks it cannot draw degrade to plain text.
//! - [`DeckRenderer`]: a fixed, numbered slide deck. Slides it cannot
//!   draw are dropped and the remaining slides renumber.
//!
//! The asymmetry is deliberate: flowing prose can always absorb a raw
//! string, a fixed slide cannot. Adding a third presentation means adding
//! a third [`RenderStrategy`] impl, not touching the generators.

pub mod deck;
pub mod document;
pub mod page;

pub use deck::DeckRenderer;
pub use document::DocumentRenderer;
pub use page::{Page, PageSequence, Primitive};

use crate::theme::Theme;
use crate::types::ReportContent;

/// A presentation strategy over the shared content tree.
pub trait RenderStrategy {
    fn render(&self, tree: &ReportContent) -> PageSequence;
}

/// Render the tree as a flowing document with the stock theme.
pub fn flowing_document(tree: &ReportContent) -> PageSequence {
    DocumentRenderer::new(Theme::default()).render(tree)
}

/// Render the tree as a slide deck with the stock theme.
pub fn slide_deck(tree: &ReportContent) -> PageSequence {
    DeckRenderer::new(Theme::default()).render(tree)
}
