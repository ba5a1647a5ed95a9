//! Alpha compositing of a translucent color over an opaque background.
//!
//! Straight (non-premultiplied) "over" with an opaque destination reduces to a
//! per-channel linear blend weighted by the foreground alpha:
//!
//! ```text
//! out = (1 - a) * background + a * foreground
//! ```
//!
//! computed on unit floats and truncated back to bytes.

use crate::basics::{byte_from_unit, unit_from_byte};
use crate::color::Color;
use crate::error::{ColorError, Result};

impl Color {
    /// Flatten `foreground` (which must carry alpha) onto an opaque
    /// `background`. The result is opaque.
    ///
    /// Fails with [`ColorError::InvalidAlphaContext`] if `background` has
    /// alpha, and with [`ColorError::MissingAlpha`] if `foreground` has none.
    pub fn from_background_and_foreground(background: Color, foreground: Color) -> Result<Color> {
        if background.has_alpha() {
            tracing::debug!(%background, "compositing background carries alpha");
            return Err(ColorError::InvalidAlphaContext);
        }
        let Some(a) = foreground.alpha() else {
            tracing::debug!(%foreground, "compositing foreground has no alpha");
            return Err(ColorError::MissingAlpha);
        };

        let bg = background.to_rgb_int();
        let fg = foreground.to_rgb_int();
        let blend = |b: u8, f: u8| -> u8 {
            byte_from_unit((1.0 - a) * unit_from_byte(b) + a * unit_from_byte(f))
        };
        Ok(Color::from_parts(
            [blend(bg[0], fg[0]), blend(bg[1], fg[1]), blend(bg[2], fg[2])],
            None,
        ))
    }

    /// `self` composited over `background`; see
    /// [`Color::from_background_and_foreground`].
    pub fn over(self, background: Color) -> Result<Color> {
        Color::from_background_and_foreground(background, self)
    }
}

// ============================================================================
// Tests
// ============================================================================
