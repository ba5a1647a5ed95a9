//! Piecewise-linear gradients over evenly spaced color stops.
//!
//! Stop `i` of `n` sits at `i / (n - 1)`. A query position is scaled onto the
//! stop index axis, split into a segment index and a local factor, and each
//! channel is blended in byte space between the two bracketing stops.

use crate::basics::clamp_unit;
use crate::color::Color;
use crate::error::{ColorError, Result};

/// Scaled positions this close to an integer snap onto that stop, so exact
/// stop positions reproduce the stop color despite float error in `t * (n-1)`.
const STOP_SNAP_EPSILON: f64 = 1e-9;

/// An ordered list of at least two color stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    /// Build a gradient from two or more stops, in order.
    pub fn new(stops: impl IntoIterator<Item = Color>) -> Result<Self> {
        let stops: Vec<Color> = stops.into_iter().collect();
        if stops.len() < 2 {
            tracing::debug!(count = stops.len(), "gradient rejected");
            return Err(ColorError::TooFewStops(stops.len()));
        }
        Ok(Self { stops })
    }

    /// The stops, in order.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Number of stops (always at least 2).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; a gradient holds at least two stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color at position `t`.
    ///
    /// `t` is clamped to `[0, 1]` (NaN reads as `0`). Channels are truncated to
    /// bytes after blending.
    pub fn evaluate(&self, t: f64) -> Color {
        let clamped = clamp_unit(t);
        if clamped != t {
            tracing::trace!(t, clamped, "gradient position clamped");
        }

        let last_segment = self.stops.len() - 2;
        let mut x = clamped * (self.stops.len() - 1) as f64;
        let nearest = x.round();
        if (x - nearest).abs() < STOP_SNAP_EPSILON {
            x = nearest;
        }

        let i = (x.floor() as usize).min(last_segment);
        let f = x - i as f64;
        lerp_color(self.stops[i], self.stops[i + 1], f)
    }

    /// `count` colors evenly spaced over `[0, 1]`, both ends included.
    ///
    /// `count == 1` yields the first stop; `count == 0` yields nothing.
    pub fn samples(&self, count: usize) -> impl Iterator<Item = Color> + '_ {
        let denom = count.saturating_sub(1).max(1) as f64;
        (0..count).map(move |i| self.evaluate(i as f64 / denom))
    }
}

/// Blend two stops with factor `f` in `[0, 1]`.
///
/// Channels blend as bytes; alpha blends as a float, a missing alpha counting
/// as opaque unless both stops lack it.
fn lerp_color(a: Color, b: Color, f: f64) -> Color {
    let ca = a.to_rgb_int();
    let cb = b.to_rgb_int();
    // a + (b - a) * f keeps the result between the stops; a shared channel
    // stays exact.
    let channel = |i: usize| {
        let (x, y) = (ca[i] as f64, cb[i] as f64);
        (x + (y - x) * f) as u8
    };

    let alpha = match (a.alpha(), b.alpha()) {
        (None, None) => None,
        (x, y) => {
            let (x, y) = (x.unwrap_or(1.0), y.unwrap_or(1.0));
            Some(clamp_unit(x + (y - x) * f))
        }
    };

    Color::from_parts([channel(0), channel(1), channel(2)], alpha)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Gradient {
        let stops = [0x845EC2, 0xD65DB1, 0xFF6F91, 0xFF9671, 0xFFC75F, 0xF9F871];
        Gradient::new(stops.map(|c| Color::new(c).unwrap())).unwrap()
    }

    #[test]
    fn test_reference_positions() {
        let g = reference();
        assert_eq!(g.evaluate(0.0).to_packed(), 0x845EC2);
        assert_eq!(g.evaluate(0.2).to_packed(), 0xD65DB1);
        assert_eq!(g.evaluate(1.0).to_packed(), 0xF9F871);
        assert_eq!(g.evaluate(0.9).to_packed(), 0xFCDF68);
    }

    #[test]
    fn test_every_stop_is_exact() {
        let g = reference();
        let n = g.len();
        for (i, stop) in g.stops().iter().enumerate() {
            let t = i as f64 / (n - 1) as f64;
            assert_eq!(g.evaluate(t), *stop, "stop {i} at t={t}");
        }
    }

    #[test]
    fn test_out_of_range_clamps() {
        let g = reference();
        assert_eq!(g.evaluate(-0.5), g.evaluate(0.0));
        assert_eq!(g.evaluate(1.5), g.evaluate(1.0));
        assert_eq!(g.evaluate(f64::NAN), g.evaluate(0.0));
    }

    #[test]
    fn test_two_stop_midpoint() {
        let g = Gradient::new([Color::BLACK, Color::WHITE]).unwrap();
        // 127.5 truncates
        assert_eq!(g.evaluate(0.5).to_rgb_int(), [127, 127, 127]);
        assert_eq!(g.evaluate(0.25).to_rgb_int(), [63, 63, 63]);
        assert_eq!(g.evaluate(0.5).alpha(), None);
    }

    #[test]
    fn test_shared_channel_stays_fixed() {
        let flat = Gradient::new([Color::WHITE, Color::WHITE]).unwrap();
        // 0xFF6F91 -> 0xFF9671, red is 0xFF at both ends
        let g = reference();
        for k in 0..=1000 {
            let t = k as f64 / 1000.0;
            assert_eq!(flat.evaluate(t), Color::WHITE, "t={t}");
            let local = 0.4 + 0.2 * t;
            assert_eq!(g.evaluate(local).to_rgb_int()[0], 0xFF, "t={local}");
        }
    }

    #[test]
    fn test_channels_stay_between_stops() {
        let grad = Gradient::new([
            Color::new(0xFF0000).unwrap(),
            Color::new(0x00FF80).unwrap(),
        ])
        .unwrap();
        for k in 0..=1000 {
            let t = k as f64 / 1000.0;
            let [r, g, b] = grad.evaluate(t).to_rgb_int();
            assert!(r as f64 >= 255.0 * (1.0 - t) - 1.0, "red {r} at t={t}");
            assert!(g as f64 <= 255.0 * t + 1e-9, "green {g} at t={t}");
            assert!(b <= 0x80, "blue {b} at t={t}");
        }
        assert_eq!(grad.evaluate(0.0).to_packed(), 0xFF0000);
        assert_eq!(grad.evaluate(1.0).to_packed(), 0x00FF80);
    }

    #[test]
    fn test_too_few_stops() {
        assert_eq!(Gradient::new([]), Err(ColorError::TooFewStops(0)));
        assert_eq!(
            Gradient::new([Color::BLACK]),
            Err(ColorError::TooFewStops(1))
        );
    }

    #[test]
    fn test_alpha_interpolation() {
        let g = Gradient::new([
            Color::with_alpha(0x000000, 0.0).unwrap(),
            Color::BLACK,
        ])
        .unwrap();
        assert_eq!(g.evaluate(0.5).alpha(), Some(0.5));
        assert_eq!(g.evaluate(1.0).alpha(), Some(1.0));
    }

    #[test]
    fn test_samples() {
        let g = reference();
        let samples: Vec<Color> = g.samples(6).collect();
        assert_eq!(samples, g.stops());
        assert_eq!(g.samples(1).collect::<Vec<_>>(), vec![g.stops()[0]]);
        assert_eq!(g.samples(0).count(), 0);
    }
}
