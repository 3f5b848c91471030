//! The renderer-agnostic page model.
//!
//! A rendered report is a sequence of fixed-size pages, each holding
//! positioned text and shape primitives. Coordinates are in points with
//! the origin at the top-left; text `y` is the baseline. Nothing here
//! knows about PDF, HTML, or any other sink; a sink walks the primitives
//! and draws them however it likes.

use crate::visual::Color;
use serde::{Deserialize, Serialize};

/// US Letter portrait, points.
pub const DOC_WIDTH: f64 = 612.0;
pub const DOC_HEIGHT: f64 = 792.0;

/// US Letter landscape, points.
pub const SLIDE_WIDTH: f64 = 792.0;
pub const SLIDE_HEIGHT: f64 = 612.0;

/// An ordered sequence of rendered pages.
pub type PageSequence = Vec<Page>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One positioned drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Text {
        /// Anchor point; meaning depends on `align`.
        x: f64,
        /// Baseline.
        y: f64,
        text: String,
        size: f64,
        weight: FontWeight,
        color: Color,
        align: TextAlign,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Color>,
        /// Corner radius; 0 for square corners.
        #[serde(default)]
        radius: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Color>,
        #[serde(default)]
        stroke_width: f64,
    },
}

/// A fixed-size canvas of primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Page {
    /// A blank portrait document page.
    pub fn document() -> Self {
        Self {
            width: DOC_WIDTH,
            height: DOC_HEIGHT,
            primitives: Vec::new(),
        }
    }

    /// A blank landscape slide.
    pub fn slide() -> Self {
        Self {
            width: SLIDE_WIDTH,
            height: SLIDE_HEIGHT,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Left-aligned regular text.
    pub fn text(&mut self, x: f64, y: f64, size: f64, color: Color, text: impl Into<String>) {
        self.push(Primitive::Text {
            x,
            y,
            text: text.into(),
            size,
            weight: FontWeight::Regular,
            color,
            align: TextAlign::Left,
        });
    }

    /// Left-aligned bold text.
    pub fn bold(&mut self, x: f64, y: f64, size: f64, color: Color, text: impl Into<String>) {
        self.push(Primitive::Text {
            x,
            y,
            text: text.into(),
            size,
            weight: FontWeight::Bold,
            color,
            align: TextAlign::Left,
        });
    }

    /// Text centered on the page's horizontal midline.
    pub fn centered(
        &mut self,
        y: f64,
        size: f64,
        weight: FontWeight,
        color: Color,
        text: impl Into<String>,
    ) {
        let x = self.width / 2.0;
        self.centered_at(x, y, size, weight, color, text);
    }

    /// Text centered on an arbitrary x anchor.
    pub fn centered_at(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        weight: FontWeight,
        color: Color,
        text: impl Into<String>,
    ) {
        self.push(Primitive::Text {
            x,
            y,
            text: text.into(),
            size,
            weight,
            color,
            align: TextAlign::Center,
        });
    }

    /// Text right-aligned against an x anchor.
    pub fn right(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        weight: FontWeight,
        color: Color,
        text: impl Into<String>,
    ) {
        self.push(Primitive::Text {
            x,
            y,
            text: text.into(),
            size,
            weight,
            color,
            align: TextAlign::Right,
        });
    }

    /// Filled rectangle with square corners.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Color) {
        self.push(Primitive::Rect {
            x,
            y,
            w,
            h,
            fill: Some(fill),
            stroke: None,
            radius: 0.0,
        });
    }

    /// Filled rectangle with rounded corners.
    pub fn chip(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Color, radius: f64) {
        self.push(Primitive::Rect {
            x,
            y,
            w,
            h,
            fill: Some(fill),
            stroke: None,
            radius,
        });
    }

    /// Outlined, unfilled rectangle.
    pub fn frame(&mut self, x: f64, y: f64, w: f64, h: f64, stroke: Color) {
        self.push(Primitive::Rect {
            x,
            y,
            w,
            h,
            fill: None,
            stroke: Some(stroke),
            radius: 0.0,
        });
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
        self.push(Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        });
    }

    /// Unfilled ring.
    pub fn ring(&mut self, cx: f64, cy: f64, r: f64, stroke: Color, stroke_width: f64) {
        self.push(Primitive::Circle {
            cx,
            cy,
            r,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
        });
    }

    /// Concatenated text of every text primitive, for assertions and
    /// progress output.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for primitive in &self.primitives {
            if let Primitive::Text { text, .. } = primitive {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
            }
        }
        out
    }
}
