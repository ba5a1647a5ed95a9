//! RGB <-> HSL transforms on unit floats.
//!
//! Hue, saturation and lightness are all normalized to `[0, 1]` (hue is a
//! fraction of a full turn, not degrees). Component order is always
//! `[hue, saturation, lightness]`.
//!
//! HSL goes through division and the hue sextant split, so a round trip is only
//! good to roughly 12 significant digits; compare with a tolerance.

/// Convert unit RGB to `[hue, saturation, lightness]`.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let l = sum / 2.0;

    // Achromatic: hue and saturation are undefined, report zero.
    if min == max {
        return [0.0, 0.0, l];
    }

    let s = if l <= 0.5 {
        range / sum
    } else {
        // 2 - max - min, not 2 - sum: keeps the last bit when sum is near 2.
        range / (2.0 - max - min)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(h / 6.0).rem_euclid(1.0), s, l]
}

/// Convert `[hue, saturation, lightness]` to unit RGB.
///
/// Uses the chroma-offset form `l - a * clamp(k - 3, 9 - k, 1)` rather than the
/// `m1`/`m2` sextant form. At `l == 1` the chroma term `a` is exactly zero, so
/// maximum lightness always lands on exact white (and `l == 0` on black)
/// whatever the hue and saturation.
///
/// Output channels are clamped to `[0, 1]` to absorb float noise.
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + h * 12.0).rem_euclid(12.0);
        let t = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (l - a * t).clamp(0.0, 1.0)
    };
    [channel(0.0), channel(8.0), channel(4.0)]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        assert_eq!(rgb_to_hsl([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_hsl([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert!(close(rgb_to_hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]));
        assert!(close(rgb_to_hsl([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 0.5]));
        assert!(close(rgb_to_hsl([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 0.5]));
    }

    #[test]
    fn test_rgb_to_hsl_reference_vector() {
        let rgb = [15.0 / 255.0, 172.0 / 255.0, 237.0 / 255.0];
        let hsl = rgb_to_hsl(rgb);
        assert!(close(
            hsl,
            [0.5487987987987988, 0.8809523809523809, 0.49411764705882355]
        ));
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert!(close(hsl_to_rgb([0.0, 1.0, 0.5]), [1.0, 0.0, 0.0]));
        assert!(close(hsl_to_rgb([1.0 / 3.0, 1.0, 0.5]), [0.0, 1.0, 0.0]));
        assert!(close(hsl_to_rgb([2.0 / 3.0, 1.0, 0.5]), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsl_to_rgb_lightness_extremes_are_exact() {
        for h in [0.0, 0.1, 0.33, 0.5, 0.9] {
            for s in [0.0, 0.3, 0.95, 1.0] {
                assert_eq!(hsl_to_rgb([h, s, 1.0]), [1.0, 1.0, 1.0]);
                assert_eq!(hsl_to_rgb([h, s, 0.0]), [0.0, 0.0, 0.0]);
            }
        }
    }

    #[test]
    fn test_hsl_roundtrip_within_tolerance() {
        let samples = [
            [0.2, 0.4, 0.6],
            [0.9, 0.1, 0.3],
            [0.0588, 0.6745, 0.9294],
            [0.7294, 0.8549, 0.3333],
        ];
        for rgb in samples {
            assert!(close(hsl_to_rgb(rgb_to_hsl(rgb)), rgb), "rgb={rgb:?}");
        }
    }
}
