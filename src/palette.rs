//! Named colors and random color generation.

use crate::color::Color;

pub const WHITE_BRIGHT: Color = Color::WHITE;
pub const BLACK_BRIGHT: Color = Color::BLACK;
pub const MAGENTA: Color = Color::opaque(0x4457E5);
pub const RED: Color = Color::opaque(0xFF0000);
pub const GREEN: Color = Color::opaque(0x00FF00);
pub const BLUE: Color = Color::opaque(0x4F88EA);
pub const RED_PALE: Color = Color::opaque(0xE2C5C5);
pub const GREEN_PALE: Color = Color::opaque(0x8CCC96);
pub const WHITE_PALE: Color = Color::opaque(0xAAAAAA);
pub const BLACK_PALE: Color = Color::opaque(0x505050);
pub const YELLOW: Color = Color::opaque(0xE2ED1A);

/// Every named color, in declaration order.
pub const ALL: [(&str, Color); 11] = [
    ("WHITE_BRIGHT", WHITE_BRIGHT),
    ("BLACK_BRIGHT", BLACK_BRIGHT),
    ("MAGENTA", MAGENTA),
    ("RED", RED),
    ("GREEN", GREEN),
    ("BLUE", BLUE),
    ("RED_PALE", RED_PALE),
    ("GREEN_PALE", GREEN_PALE),
    ("WHITE_PALE", WHITE_PALE),
    ("BLACK_PALE", BLACK_PALE),
    ("YELLOW", YELLOW),
];

/// Look up a named color, case-insensitively.
pub fn by_name(name: &str) -> Option<Color> {
    ALL.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}

/// Uniformly random opaque color.
#[cfg(feature = "rand")]
pub fn random_color<R: rand::Rng + ?Sized>(rng: &mut R) -> Color {
    Color::opaque(rng.gen_range(0..=crate::basics::PACKED_MAX))
}

/// Uniformly random color with a uniformly random alpha in `[0, 1]`.
#[cfg(feature = "rand")]
pub fn random_color_with_alpha<R: rand::Rng + ?Sized>(rng: &mut R) -> Color {
    let rgb = crate::basics::unpack_rgb(rng.gen_range(0..=crate::basics::PACKED_MAX));
    Color::from_parts(rgb, Some(rng.gen_range(0.0..=1.0)))
}
