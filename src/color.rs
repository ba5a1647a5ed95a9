//! The `Color` value type and its format conversions.
//!
//! A `Color` is a packed `0xRRGGBB` integer plus an optional alpha in `[0, 1]`.
//! Every representation (hex string, integer and float channel tuples, CSS
//! functions, HSL) is derived on demand from those two fields; nothing is
//! cached.
//!
//! Alpha is *optional*, not defaulted: a color without alpha is distinct from
//! one with `alpha == 1.0`, and every RGBA-shaped accessor fails with
//! [`ColorError::MissingAlpha`] when it is absent.
//!
//! Float channels map to bytes by truncation, `floor(c * 255)`.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::basics::{
    byte_from_unit, is_byte, is_unit, pack_rgb, unit_from_byte, unpack_rgb, PACKED_MAX,
};
use crate::error::{ColorError, Result};
use crate::hsl::{hsl_to_rgb, rgb_to_hsl};

// ============================================================================
// Channels: explicit RGB vs RGBA shape
// ============================================================================

/// Channel tuple whose shape depends on whether the color carries alpha.
///
/// Returned by the "automatic" accessors ([`Color::to_int_channels`],
/// [`Color::to_float_channels`]) so callers handle both shapes explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channels<C, A = C> {
    Rgb([C; 3]),
    Rgba([C; 3], A),
}

impl<C: Copy, A: Copy> Channels<C, A> {
    /// The color channels, ignoring alpha.
    pub fn rgb(&self) -> [C; 3] {
        match *self {
            Channels::Rgb(rgb) | Channels::Rgba(rgb, _) => rgb,
        }
    }

    pub fn alpha(&self) -> Option<A> {
        match *self {
            Channels::Rgb(_) => None,
            Channels::Rgba(_, a) => Some(a),
        }
    }

    pub fn is_rgba(&self) -> bool {
        matches!(self, Channels::Rgba(..))
    }
}

// ============================================================================
// Color
// ============================================================================

/// An immutable RGB color with optional alpha.
///
/// Equality and hashing are exact over `(rgb, alpha)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgb: u32,
    alpha: Option<f64>,
}

// Alpha is validated into [0, 1] on every path, so NaN never gets in.
impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
        self.alpha.map(f64::to_bits).hash(state);
    }
}

impl Color {
    pub const WHITE: Color = Color::opaque(0xFF_FFFF);
    pub const BLACK: Color = Color::opaque(0x00_0000);

    /// Compile-time constructor for known-good palette values.
    pub(crate) const fn opaque(rgb: u32) -> Self {
        assert!(rgb <= PACKED_MAX, "packed color out of range");
        Self { rgb, alpha: None }
    }

    /// Build from already-validated parts.
    pub(crate) fn from_parts(rgb: [u8; 3], alpha: Option<f64>) -> Self {
        Self {
            rgb: pack_rgb(rgb[0], rgb[1], rgb[2]),
            // -0.0 + 0.0 == +0.0, so equal alphas share a bit pattern.
            alpha: alpha.map(|a| a + 0.0),
        }
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Opaque color from a packed `0xRRGGBB` integer.
    pub fn new(rgb: u32) -> Result<Self> {
        check_packed(rgb)?;
        Ok(Self { rgb, alpha: None })
    }

    /// Color from a packed `0xRRGGBB` integer and an alpha in `[0, 1]`.
    pub fn with_alpha(rgb: u32, alpha: f64) -> Result<Self> {
        check_packed(rgb)?;
        let alpha = check_alpha(alpha)?;
        Ok(Self::from_parts(unpack_rgb(rgb), Some(alpha)))
    }

    /// Opaque color from integer channels, each in `[0, 255]`.
    pub fn from_rgb_int(rgb: [u32; 3]) -> Result<Self> {
        Ok(Self::from_parts(check_bytes(rgb)?, None))
    }

    /// Color from integer channels where the fourth is alpha in `[0, 255]`,
    /// stored as `byte / 255`.
    pub fn from_rgba_int(rgba: [u32; 4]) -> Result<Self> {
        let [r, g, b, a] = rgba;
        let rgb = check_bytes([r, g, b])?;
        let [a] = check_bytes([a])?;
        Ok(Self::from_parts(rgb, Some(unit_from_byte(a))))
    }

    /// Color from integer channels plus a float alpha in `[0, 1]`.
    pub fn from_rgba_int_float(rgb: [u32; 3], alpha: f64) -> Result<Self> {
        let rgb = check_bytes(rgb)?;
        let alpha = check_alpha(alpha)?;
        Ok(Self::from_parts(rgb, Some(alpha)))
    }

    /// Opaque color from float channels in `[0, 1]`, truncated to bytes.
    pub fn from_rgb_float(rgb: [f64; 3]) -> Result<Self> {
        Ok(Self::from_parts(check_units(rgb)?, None))
    }

    /// Color from float channels and alpha, all in `[0, 1]`.
    pub fn from_rgba_float(rgba: [f64; 4]) -> Result<Self> {
        let [r, g, b, a] = rgba;
        let rgb = check_units([r, g, b])?;
        let alpha = check_alpha(a)?;
        Ok(Self::from_parts(rgb, Some(alpha)))
    }

    /// Opaque color from `[hue, saturation, lightness]`, each in `[0, 1]`.
    pub fn from_hsl(hsl: [f64; 3]) -> Result<Self> {
        if let Some(v) = hsl.iter().find(|v| !is_unit(**v)) {
            return Err(ColorError::invalid(format!(
                "hsl component {v} outside [0, 1]"
            )));
        }
        Self::from_rgb_float(hsl_to_rgb(hsl))
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Packed `0xRRGGBB` value.
    pub fn to_packed(self) -> u32 {
        self.rgb
    }

    /// Alpha in `[0, 1]`, if any.
    pub fn alpha(self) -> Option<f64> {
        self.alpha
    }

    /// `true` when the color carries alpha.
    pub fn has_alpha(self) -> bool {
        self.alpha.is_some()
    }

    fn require_alpha(self) -> Result<f64> {
        self.alpha.ok_or(ColorError::MissingAlpha)
    }

    /// Alpha as a byte, truncated like every other float-to-byte step.
    fn alpha_byte(self) -> Result<u8> {
        self.require_alpha().map(byte_from_unit)
    }

    /// `#RRGGBB`, uppercase, ignoring alpha.
    pub fn to_css_hex_rgb(self) -> String {
        format!("#{:06X}", self.rgb)
    }

    /// `#RRGGBBAA`, uppercase.
    pub fn to_css_hex_rgba(self) -> Result<String> {
        let a = self.alpha_byte()?;
        Ok(format!("#{:06X}{:02X}", self.rgb, a))
    }

    /// `#RRGGBBAA` when alpha is present, `#RRGGBB` otherwise.
    pub fn to_css_hex(self) -> String {
        self.to_css_hex_rgba()
            .unwrap_or_else(|_| self.to_css_hex_rgb())
    }

    /// `[r, g, b]` bytes.
    pub fn to_rgb_int(self) -> [u8; 3] {
        unpack_rgb(self.rgb)
    }

    /// `[r, g, b, a]` bytes, alpha truncated to a byte.
    pub fn to_rgba_int(self) -> Result<[u8; 4]> {
        let [r, g, b] = self.to_rgb_int();
        Ok([r, g, b, self.alpha_byte()?])
    }

    /// Byte channels, RGBA when alpha is present.
    pub fn to_int_channels(self) -> Channels<u8> {
        match self.alpha_byte() {
            Ok(a) => Channels::Rgba(self.to_rgb_int(), a),
            Err(_) => Channels::Rgb(self.to_rgb_int()),
        }
    }

    /// Integer channels with alpha kept as a float.
    pub fn to_rgba_int_float(self) -> Result<([u8; 3], f64)> {
        Ok((self.to_rgb_int(), self.require_alpha()?))
    }

    /// `[r, g, b]` in `[0, 1]`, each `byte / 255`.
    pub fn to_rgb_float(self) -> [f64; 3] {
        self.to_rgb_int().map(unit_from_byte)
    }

    /// `[r, g, b, a]` in `[0, 1]`.
    pub fn to_rgba_float(self) -> Result<[f64; 4]> {
        let [r, g, b] = self.to_rgb_float();
        Ok([r, g, b, self.require_alpha()?])
    }

    /// Float channels, RGBA when alpha is present.
    pub fn to_float_channels(self) -> Channels<f64> {
        match self.alpha {
            Some(a) => Channels::Rgba(self.to_rgb_float(), a),
            None => Channels::Rgb(self.to_rgb_float()),
        }
    }

    /// `rgb(r, g, b)`, ignoring alpha.
    pub fn to_css_rgb(self) -> String {
        let [r, g, b] = self.to_rgb_int();
        format!("rgb({r}, {g}, {b})")
    }

    /// `rgba(r, g, b, a)` with `a` as a plain decimal fraction.
    pub fn to_css_rgba(self) -> Result<String> {
        let [r, g, b] = self.to_rgb_int();
        let a = format_alpha(self.require_alpha()?);
        Ok(format!("rgba({r}, {g}, {b}, {a})"))
    }

    /// `rgba(...)` when alpha is present, `rgb(...)` otherwise.
    pub fn to_css(self) -> String {
        self.to_css_rgba().unwrap_or_else(|_| self.to_css_rgb())
    }

    /// `[hue, saturation, lightness]`, each in `[0, 1]`.
    pub fn to_hsl(self) -> [f64; 3] {
        rgb_to_hsl(self.to_rgb_float())
    }

    /// HSL lightness alone.
    pub fn lightness(self) -> f64 {
        self.to_hsl()[2]
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

fn check_packed(rgb: u32) -> Result<()> {
    if rgb > PACKED_MAX {
        return Err(ColorError::invalid(format!(
            "packed value {rgb:#X} outside [0, 0xFFFFFF]"
        )));
    }
    Ok(())
}

fn check_alpha(alpha: f64) -> Result<f64> {
    if !is_unit(alpha) {
        return Err(ColorError::invalid(format!("alpha {alpha} outside [0, 1]")));
    }
    Ok(alpha)
}

fn check_bytes<const N: usize>(channels: [u32; N]) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    for (dst, v) in out.iter_mut().zip(channels) {
        if !is_byte(v) {
            return Err(ColorError::invalid(format!(
                "channel {v} outside [0, 255]"
            )));
        }
        *dst = v as u8;
    }
    Ok(out)
}

fn check_units(channels: [f64; 3]) -> Result<[u8; 3]> {
    if let Some(v) = channels.iter().find(|v| !is_unit(**v)) {
        return Err(ColorError::invalid(format!(
            "float channel {v} outside [0, 1]"
        )));
    }
    Ok(channels.map(byte_from_unit))
}

/// Shortest round-trip decimal, always with a fractional part (`1.0`, `0.5`).
pub(crate) fn format_alpha(alpha: f64) -> String {
    let s = alpha.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl fmt::Display for Color {
    /// `0xRRGGBB`, or `0xRRGGBBAA` when alpha is present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha_byte() {
            Ok(a) => write!(f, "0x{:06X}{:02X}", self.rgb, a),
            Err(_) => write!(f, "0x{:06X}", self.rgb),
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_parts(rgb, None)
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Self::from_parts([r, g, b], Some(unit_from_byte(a)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_css_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
