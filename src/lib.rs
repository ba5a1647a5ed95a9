//! # colortool
//!
//! A single color value (RGB plus optional alpha) and lossless conversions
//! between the encodings UI and design tooling pass around:
//!
//! - packed `0xRRGGBB` integers
//! - `#RRGGBB` / `#RRGGBBAA` hex strings
//! - integer and float RGB/RGBA channel tuples
//! - CSS `rgb(r, g, b)` / `rgba(r, g, b, a)` strings
//! - HSL triples, normalized to `[0, 1]`
//!
//! On top of that: lighten/darken by a ratio, a contrasting font color,
//! compositing a translucent color over an opaque background, and linear
//! gradients across evenly spaced stops.
//!
//! ```
//! use colortool::{Color, Gradient};
//!
//! let c = Color::from_css_hex("#0FACED").unwrap();
//! assert_eq!(c.to_rgb_int(), [15, 172, 237]);
//! assert_eq!(c.to_css_rgb(), "rgb(15, 172, 237)");
//!
//! let g = Gradient::new([Color::BLACK, Color::WHITE]).unwrap();
//! assert_eq!(g.evaluate(0.0), Color::BLACK);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Color` (de)serializes as its hex string;
//!   `FontBorderThresholds` derives both traits.
//! - `rand`: [`palette::random_color`] and
//!   [`palette::random_color_with_alpha`].

pub mod basics;
pub mod color;
pub mod comp_op;
pub mod error;
pub mod gradient;
pub mod gradient_lut;
pub mod hsl;
pub mod palette;
pub mod parse;
pub mod shade;

pub use color::{Channels, Color};
pub use error::{ColorError, Result};
pub use gradient::Gradient;
pub use gradient_lut::{ColorFunction, GradientLut};
pub use parse::is_css_hex_color;
pub use shade::{FontBorderThresholds, DEFAULT_FONT_THRESHOLD};
