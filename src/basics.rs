//! Foundation helpers shared by every conversion.
//!
//! Byte <-> unit-float scaling, packed-integer bit layout, and the range
//! checks that guard each constructor. Float to byte conversion truncates
//! (`floor(c * 255)`), it never rounds.

// ============================================================================
// Packed integer layout
// ============================================================================

/// Largest value a packed `0xRRGGBB` color may hold.
pub const PACKED_MAX: u32 = 0xFF_FFFF;

/// Largest value of a single 8-bit channel, as a float scale factor.
pub const BYTE_SCALE: f64 = 255.0;

/// Pack three bytes into `0xRRGGBB`.
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split `0xRRGGBB` into its red, green and blue bytes.
#[inline]
pub const fn unpack_rgb(rgb: u32) -> [u8; 3] {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

// ============================================================================
// Scaling
// ============================================================================

/// Linearly rescale `value` from `[old_min, old_max]` to `[new_min, new_max]`.
#[inline]
pub fn minmax_scale(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    (value - old_min) * (new_max - new_min) / (old_max - old_min) + new_min
}

/// Map a byte to `[0, 1]`.
#[inline]
pub fn unit_from_byte(v: u8) -> f64 {
    minmax_scale(v as f64, 0.0, BYTE_SCALE, 0.0, 1.0)
}

/// Map a unit float to a byte by truncation. `v` must already lie in `[0, 1]`.
#[inline]
pub fn byte_from_unit(v: f64) -> u8 {
    (v * BYTE_SCALE) as u8
}

/// Clamp to `[0, 1]`, sending NaN to `0`.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Range checks
// ============================================================================

/// `true` when `v` is a finite value in `[0, 1]`.
#[inline]
pub fn is_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

/// `true` when `v` fits in a byte.
#[inline]
pub fn is_byte(v: u32) -> bool {
    v <= u8::MAX as u32
}

// ============================================================================
// Tests
// ============================================================================
