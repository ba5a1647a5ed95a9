//! Lightness-based derivations: lighter, darker, and contrasting font and
//! border colors.
//!
//! All of these go through HSL and back through the truncating float-to-byte
//! path, so `lighter(0.0)` / `darker(1.0)` are the identity only up to that
//! truncation (a channel can drop by one).

use crate::basics::{byte_from_unit, clamp_unit};
use crate::color::Color;
use crate::hsl::hsl_to_rgb;

/// Lightness below this reads as a dark background.
pub const DEFAULT_FONT_THRESHOLD: f64 = 0.5;

/// Lightness at or above this gets a darkened border.
pub const DEFAULT_BORDER_THRESHOLD: f64 = 0.9;

/// Borders of near-white fills keep this share of their lightness.
pub const BORDER_DARKEN_FACTOR: f64 = 0.7;

/// Lightness thresholds for [`Color::font_border_colors`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontBorderThresholds {
    /// Below this, the font is white; at or above, black.
    pub font: f64,
    /// Below this, the border is the fill color; at or above, a darker shade.
    pub border: f64,
}

impl Default for FontBorderThresholds {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT_THRESHOLD,
            border: DEFAULT_BORDER_THRESHOLD,
        }
    }
}

impl Color {
    /// Replace HSL lightness with `f(lightness)`, keeping hue, saturation and
    /// alpha.
    fn map_lightness(self, f: impl FnOnce(f64) -> f64) -> Color {
        let [h, s, l] = self.to_hsl();
        let rgb = hsl_to_rgb([h, s, clamp_unit(f(l))]);
        Color::from_parts(rgb.map(byte_from_unit), self.alpha())
    }

    /// Move lightness toward 1 by `ratio` of the remaining distance.
    ///
    /// `ratio` is clamped to `[0, 1]`; `1.0` always gives white.
    pub fn lighter(self, ratio: f64) -> Color {
        let ratio = clamp_unit(ratio);
        self.map_lightness(|l| l + (1.0 - l) * ratio)
    }

    /// Scale lightness by `ratio`.
    ///
    /// `ratio` is clamped to `[0, 1]`; `0.0` always gives black.
    pub fn darker(self, ratio: f64) -> Color {
        let ratio = clamp_unit(ratio);
        self.map_lightness(|l| l * ratio)
    }

    /// White for fills darker than `threshold`, black otherwise.
    pub fn font_color(self, threshold: f64) -> Color {
        if self.lightness() < threshold {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }

    /// Font color plus a border color that stays visible on near-white fills.
    pub fn font_border_colors(self, thresholds: FontBorderThresholds) -> (Color, Color) {
        let border = if self.lightness() < thresholds.border {
            self
        } else {
            self.darker(BORDER_DARKEN_FACTOR)
        };
        (self.font_color(thresholds.font), border)
    }
}

// ============================================================================
// Tests
// ============================================================================
