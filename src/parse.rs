//! String grammars: `#RRGGBB[AA]`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
//!
//! Parsing is strict about shape (prefix, digit count, argument count) and
//! lenient only about whitespace around CSS arguments and the case of the
//! function name.

use core::str::FromStr;

use crate::basics::{unit_from_byte, unpack_rgb};
use crate::color::Color;
use crate::error::{ColorError, Result};

/// `true` for `#` followed by exactly six hex digits (either case).
pub fn is_css_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && is_hex_digits(digits))
}

fn is_hex_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns the text between the parentheses of `name(...)`, if `s` has that
/// shape. The name is matched case-insensitively.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let s = s.trim();
    let open = s.find('(')?;
    if !s[..open].trim_end().eq_ignore_ascii_case(name) {
        return None;
    }
    s[open + 1..].strip_suffix(')')
}

/// Split a CSS argument list into exactly `N` trimmed items.
fn split_args<const N: usize>(args: &str) -> Result<[&str; N]> {
    let mut out = [""; N];
    let mut count = 0;
    for item in args.split(',') {
        if count == N {
            return Err(ColorError::invalid(format!(
                "expected {N} arguments in `{args}`"
            )));
        }
        out[count] = item.trim();
        count += 1;
    }
    if count != N {
        return Err(ColorError::invalid(format!(
            "expected {N} arguments in `{args}`"
        )));
    }
    Ok(out)
}

fn parse_int(item: &str) -> Result<u32> {
    item.parse()
        .map_err(|_| ColorError::invalid(format!("`{item}` is not an integer channel")))
}

fn parse_float(item: &str) -> Result<f64> {
    item.parse()
        .map_err(|_| ColorError::invalid(format!("`{item}` is not a number")))
}

impl Color {
    /// Parse `#RRGGBB` (opaque) or `#RRGGBBAA` (alpha is `AA / 255`).
    pub fn from_css_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::invalid(format!("`{s}` does not start with `#`")))?;
        if !is_hex_digits(digits) {
            return Err(ColorError::invalid(format!("`{s}` has non-hex digits")));
        }
        match digits.len() {
            6 => {
                let rgb = u32::from_str_radix(digits, 16)
                    .map_err(|e| ColorError::invalid(e.to_string()))?;
                Color::new(rgb)
            }
            8 => {
                let rgba = u32::from_str_radix(digits, 16)
                    .map_err(|e| ColorError::invalid(e.to_string()))?;
                let alpha = unit_from_byte(rgba as u8);
                Ok(Color::from_parts(unpack_rgb(rgba >> 8), Some(alpha)))
            }
            n => Err(ColorError::invalid(format!(
                "`{s}` has {n} hex digits, expected 6 or 8"
            ))),
        }
    }

    /// Parse `rgb(r, g, b)` with integer channels.
    pub fn from_css_rgb(s: &str) -> Result<Self> {
        let args = function_args(s, "rgb")
            .ok_or_else(|| ColorError::invalid(format!("`{s}` is not rgb(...)")))?;
        let [r, g, b] = split_args::<3>(args)?;
        Color::from_rgb_int([parse_int(r)?, parse_int(g)?, parse_int(b)?])
    }

    /// Parse `rgba(r, g, b, a)` with integer channels and a float alpha.
    pub fn from_css_rgba(s: &str) -> Result<Self> {
        let args = function_args(s, "rgba")
            .ok_or_else(|| ColorError::invalid(format!("`{s}` is not rgba(...)")))?;
        let [r, g, b, a] = split_args::<4>(args)?;
        Color::from_rgba_int_float(
            [parse_int(r)?, parse_int(g)?, parse_int(b)?],
            parse_float(a)?,
        )
    }
}

/// Accepts any of the hex or CSS function forms.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Color::from_css_hex(s);
        }
        if function_args(s, "rgb").is_some() {
            return Color::from_css_rgb(s);
        }
        if function_args(s, "rgba").is_some() {
            return Color::from_css_rgba(s);
        }
        Err(ColorError::invalid(format!("unrecognized color `{s}`")))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_hex_validation() {
        let cases = [
            ("#FACADE", true),
            ("#000000", true),
            ("#facade", true),
            ("#00000", false),
            ("FACADEC", false),
            ("#RACADE", false),
            ("#+ACADE", false),
            ("", false),
        ];
        for (s, valid) in cases {
            assert_eq!(is_css_hex_color(s), valid, "{s}");
            assert_eq!(Color::from_css_hex(s).is_ok(), valid, "{s}");
        }
    }

    #[test]
    fn test_css_hex_bytes() {
        let c = Color::from_css_hex("#0FACED").unwrap();
        assert_eq!(c.to_rgb_int(), [15, 172, 237]);
        assert_eq!(c.to_css_rgb(), "rgb(15, 172, 237)");
        assert_eq!(c.alpha(), None);
        assert_eq!(Color::from_css_hex("#0faced").unwrap(), c);
    }

    #[test]
    fn test_css_hex_with_alpha() {
        let c = Color::from_css_hex("#00FF007F").unwrap();
        assert_eq!(c.to_packed(), 0x00FF00);
        assert_eq!(c.alpha(), Some(127.0 / 255.0));
        assert_eq!(c.to_css_hex(), "#00FF007F");
        assert!(Color::from_css_hex("#00FF007").is_err());
    }

    #[test]
    fn test_css_rgb() {
        let c = Color::from_css_rgb("rgb(186, 218, 85)").unwrap();
        assert_eq!(c.to_packed(), 0xBADA55);
        assert_eq!(Color::from_css_rgb("RGB( 186,218 , 85 )").unwrap(), c);

        assert!(Color::from_css_rgb("rgb(256, 0, 0)").is_err());
        assert!(Color::from_css_rgb("rgb(1, 2)").is_err());
        assert!(Color::from_css_rgb("rgb(1, 2, 3, 4)").is_err());
        assert!(Color::from_css_rgb("rgb(1, 2, x)").is_err());
        assert!(Color::from_css_rgb("rgb(1, 2, 3").is_err());
        assert!(Color::from_css_rgb("rgba(1, 2, 3)").is_err());
    }

    #[test]
    fn test_css_rgba() {
        let c = Color::from_css_rgba("rgba(0, 255, 0, 0.5)").unwrap();
        assert_eq!(c, Color::with_alpha(0x00FF00, 0.5).unwrap());
        assert!(Color::from_css_rgba("rgba(0, 0, 0, 1.1)").is_err());
        assert!(Color::from_css_rgba("rgba(0, 0, 0, -0.1)").is_err());
        assert!(Color::from_css_rgba("rgba(0, 0, 0, NaN)").is_err());
        assert!(Color::from_css_rgba("rgba(0, 0, 0)").is_err());
    }

    #[test]
    fn test_from_str_dispatch() {
        let hex: Color = "#BADA55".parse().unwrap();
        let rgb: Color = "rgb(186, 218, 85)".parse().unwrap();
        assert_eq!(hex, rgb);

        let rgba: Color = " rgba(0, 255, 0, 0.5) ".parse().unwrap();
        assert_eq!(rgba.alpha(), Some(0.5));

        assert!("hsl(0, 0, 0)".parse::<Color>().is_err());
        assert!("BADA55".parse::<Color>().is_err());
        assert!(Color::try_from("#BADA55").is_ok());
    }
}
