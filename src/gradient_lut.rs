//! Gradient color lookup table.
//!
//! Pre-samples a [`Gradient`] into a fixed number of evenly spaced entries so
//! repeated lookups (e.g. coloring many cells from a normalized value) become
//! an index instead of an interpolation.

use crate::basics::clamp_unit;
use crate::color::Color;
use crate::gradient::Gradient;

// ============================================================================
// ColorFunction trait
// ============================================================================

/// Indexed access to a color palette of known size.
pub trait ColorFunction {
    fn size(&self) -> usize;
    fn get(&self, index: usize) -> Color;
}

// ============================================================================
// GradientLut
// ============================================================================

/// A gradient sampled at `size` evenly spaced positions, ends included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientLut {
    colors: Vec<Color>,
}

impl GradientLut {
    pub const DEFAULT_SIZE: usize = 256;

    /// Sample `gradient` into `size` entries (at least 2).
    pub fn new(gradient: &Gradient, size: usize) -> Self {
        Self {
            colors: gradient.samples(size.max(2)).collect(),
        }
    }

    /// 256-entry table.
    pub fn new_default(gradient: &Gradient) -> Self {
        Self::new(gradient, Self::DEFAULT_SIZE)
    }

    /// Entry nearest to position `t` in `[0, 1]` (clamped).
    pub fn lookup(&self, t: f64) -> Color {
        let last = self.colors.len() - 1;
        let t = clamp_unit(t);
        self.get((t * last as f64).round() as usize)
    }
}

impl ColorFunction for GradientLut {
    fn size(&self) -> usize {
        self.colors.len()
    }

    /// Out-of-range indices read the last entry.
    fn get(&self, index: usize) -> Color {
        self.colors[index.min(self.colors.len() - 1)]
    }
}

// ============================================================================
// Tests
// ============================================================================
