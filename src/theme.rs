//! Presentation theme module.
//!
//! Handles loading and validating `theme.toml`. The theme covers the parts
//! of presentation that are legitimately a caller's choice: brand text,
//! neutral colors, page margins. The severity-tier and rating color tables
//! are product semantics and stay fixed in [`crate::visual`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [brand]
//! name = "readydeck"                # Brand mark on slide chrome
//! deck_label = "Executive Briefing" # Document-type label, bottom right
//!
//! [colors]
//! ink = "#111827"        # Body text
//! muted = "#6b7280"      # Captions, chrome, metadata
//! border = "#e5e7eb"     # Hairlines, empty bar tracks
//! accent = "#2563eb"     # Headings, brand mark
//! accent_tint = "#dbeafe" # Callout panel wash
//!
//! [page]
//! margin = 54.0          # Document page margin, points
//! slide_margin = 48.0    # Slide margin, points
//! ```
//!
//! ## Partial Configuration
//!
//! Theme files are sparse: override just the values you want.
//!
//! ```toml
//! # Only override the accent color
//! [colors]
//! accent = "#0f766e"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::visual::{self, Color};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Theme validation error: {0}")]
    Validation(String),
}

/// Presentation theme loaded from `theme.toml`.
///
/// All fields have sensible defaults. User theme files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Brand text rendered on slide chrome.
    pub brand: BrandConfig,
    /// Neutral presentation colors as `#rrggbb` strings.
    pub colors: ColorsConfig,
    /// Page geometry settings.
    pub page: PageConfig,
}

impl Theme {
    /// Load and validate a theme file.
    pub fn load(path: &Path) -> Result<Theme, ThemeError> {
        let raw = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&raw)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Validate color syntax and margin ranges.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (key, value) in [
            ("colors.ink", &self.colors.ink),
            ("colors.muted", &self.colors.muted),
            ("colors.border", &self.colors.border),
            ("colors.accent", &self.colors.accent),
            ("colors.accent_tint", &self.colors.accent_tint),
        ] {
            if Color::parse_hex(value).is_none() {
                return Err(ThemeError::Validation(format!(
                    "{key} must be a #rrggbb hex color, got {value:?}"
                )));
            }
        }
        for (key, value) in [
            ("page.margin", self.page.margin),
            ("page.slide_margin", self.page.slide_margin),
        ] {
            if !(18.0..=144.0).contains(&value) {
                return Err(ThemeError::Validation(format!(
                    "{key} must be between 18 and 144 points"
                )));
            }
        }
        Ok(())
    }
}

/// Brand text settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    /// Brand mark text on slide chrome.
    pub name: String,
    /// Document-type label on the bottom-right of every slide.
    pub deck_label: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "readydeck".to_string(),
            deck_label: "Executive Briefing".to_string(),
        }
    }
}

/// Neutral color settings as hex strings.
///
/// Resolved accessors fall back to the stock palette if a string fails to
/// parse; [`Theme::validate`] catches that at load time, so the fallback
/// only matters for hand-built `Theme` values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsConfig {
    pub ink: String,
    pub muted: String,
    pub border: String,
    pub accent: String,
    pub accent_tint: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            ink: visual::INK.to_hex(),
            muted: visual::MUTED.to_hex(),
            border: visual::BORDER.to_hex(),
            accent: visual::ACCENT.to_hex(),
            accent_tint: visual::ACCENT_TINT.to_hex(),
        }
    }
}

impl ColorsConfig {
    pub fn ink(&self) -> Color {
        Color::parse_hex(&self.ink).unwrap_or(visual::INK)
    }

    pub fn muted(&self) -> Color {
        Color::parse_hex(&self.muted).unwrap_or(visual::MUTED)
    }

    pub fn border(&self) -> Color {
        Color::parse_hex(&self.border).unwrap_or(visual::BORDER)
    }

    pub fn accent(&self) -> Color {
        Color::parse_hex(&self.accent).unwrap_or(visual::ACCENT)
    }

    pub fn accent_tint(&self) -> Color {
        Color::parse_hex(&self.accent_tint).unwrap_or(visual::ACCENT_TINT)
    }
}

/// Page geometry settings, in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Document page margin.
    pub margin: f64,
    /// Slide margin.
    pub slide_margin: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            margin: 54.0,
            slide_margin: 48.0,
        }
    }
}

/// A stock `theme.toml` with every option documented, for `gen-theme`.
pub fn stock_theme_toml() -> String {
    format!(
        r##"# readydeck theme
# All options are optional - the values below are the defaults.

[brand]
# Brand mark on slide chrome
name = "readydeck"
# Document-type label, bottom right of every slide
deck_label = "Executive Briefing"

[colors]
# Body text
ink = "{ink}"
# Captions, chrome, metadata
muted = "{muted}"
# Hairlines, empty bar tracks
border = "{border}"
# Headings, brand mark
accent = "{accent}"
# Callout panel wash
accent_tint = "{accent_tint}"

[page]
# Document page margin, points
margin = 54.0
# Slide margin, points
slide_margin = 48.0
"##,
        ink = visual::INK.to_hex(),
        muted = visual::MUTED.to_hex(),
        border = visual::BORDER.to_hex(),
        accent = visual::ACCENT.to_hex(),
        accent_tint = visual::ACCENT_TINT.to_hex(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_validates() {
        assert!(Theme::default().validate().is_ok());
    }

    #[test]
    fn stock_toml_parses_to_defaults() {
        let theme: Theme = toml::from_str(&stock_theme_toml()).unwrap();
        assert!(theme.validate().is_ok());
        assert_eq!(theme.brand.name, "readydeck");
        assert_eq!(theme.colors.accent(), visual::ACCENT);
        assert_eq!(theme.page.margin, 54.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let theme: Theme = toml::from_str("[colors]\naccent = \"#0f766e\"\n").unwrap();
        assert_eq!(theme.colors.accent(), Color::rgb(0x0f, 0x76, 0x6e));
        assert_eq!(theme.colors.ink(), visual::INK);
        assert_eq!(theme.brand.name, "readydeck");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Theme, _> = toml::from_str("[colors]\naccentt = \"#000000\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn bad_hex_fails_validation() {
        let theme: Theme = toml::from_str("[colors]\naccent = \"blue\"\n").unwrap();
        let err = theme.validate().unwrap_err();
        assert!(matches!(err, ThemeError::Validation(_)));
    }

    #[test]
    fn out_of_range_margin_fails_validation() {
        let theme: Theme = toml::from_str("[page]\nmargin = 400.0\n").unwrap();
        assert!(theme.validate().is_err());
    }
}
