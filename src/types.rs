//! Shared content-tree types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (generate → render)
//! and must be identical for every renderer that consumes them. The wire
//! format uses camelCase keys; it predates this implementation and is kept
//! stable so trees produced elsewhere still parse.

use serde::{Deserialize, Serialize};

/// Root of a generated report: the manifest handed from a generator to a
/// renderer.
///
/// Built fresh per generation call, consumed once, never mutated. Section
/// order is rendering order; no reordering happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContent {
    pub title: String,
    pub subtitle: String,
    pub metadata: ReportMetadata,
    pub sections: Vec<ContentSection>,
}

/// Document metadata rendered on the title page / title slide.
///
/// An empty `confidentiality` string means no confidentiality marker is
/// rendered anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub prepared_for: String,
    pub prepared_by: String,
    pub date: String,
    #[serde(default)]
    pub confidentiality: String,
}

/// A node in the content tree.
///
/// `content` is either plain prose (possibly multi-paragraph, blank-line
/// separated) or a serialized structured block, a JSON object whose first
/// character is `{`. Subsections nest exactly one level: a subsection never
/// carries subsections of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<ContentSection>,
}

impl ContentSection {
    /// A leaf section with a body (prose or serialized block).
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some(content.into()),
            subsections: Vec::new(),
        }
    }

    /// A parent section whose body lives in its subsections.
    pub fn parent(title: impl Into<String>, subsections: Vec<ContentSection>) -> Self {
        Self {
            title: title.into(),
            content: None,
            subsections,
        }
    }
}
