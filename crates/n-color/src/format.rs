// SPDX-License-Identifier: MIT
//
// Color string formatting.

use std::fmt;

use crate::convert::rgb_to_hsl;
use crate::hex::rgb_to_hex;

/// The textual forms a color can be rendered in.
///
/// Built from a name with [`From<&str>`]: `"rgba"`, `"rgb"`, `"hex"` and
/// `"hsl"` (any case). Anything else falls back to [`Rgba`](Self::Rgba).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// `rgba(r,g,b,a)`
    #[default]
    Rgba,
    /// `rgb(r,g,b)`
    Rgb,
    /// `#RRGGBB` (alpha is dropped)
    Hex,
    /// `hsl(Hdeg,S%,L%)` (alpha is dropped)
    Hsl,
}

impl ColorFormat {
    pub const ALL: [Self; 4] = [Self::Rgba, Self::Rgb, Self::Hex, Self::Hsl];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgba => "rgba",
            Self::Rgb => "rgb",
            Self::Hex => "hex",
            Self::Hsl => "hsl",
        }
    }
}

impl From<&str> for ColorFormat {
    fn from(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a color in the requested textual form.
///
/// ```
/// use n_color::{ColorFormat, format_color};
///
/// assert_eq!(format_color(10, 20, 30, 0.5, ColorFormat::Rgba), "rgba(10,20,30,0.5)");
/// assert_eq!(format_color(10, 20, 30, 0.5, ColorFormat::Hex), "#0A141E");
/// assert_eq!(format_color(10, 20, 30, 1.0, ColorFormat::Hsl), "hsl(210deg,50%,8%)");
/// assert_eq!(format_color(10, 20, 30, 1.0, "bogus".into()), "rgba(10,20,30,1)");
/// ```
#[must_use]
pub fn format_color(r: u8, g: u8, b: u8, a: f64, format: ColorFormat) -> String {
    match format {
        ColorFormat::Rgba => format!("rgba({r},{g},{b},{a})"),
        ColorFormat::Rgb => format!("rgb({r},{g},{b})"),
        ColorFormat::Hex => rgb_to_hex(f64::from(r), f64::from(g), f64::from(b)),
        ColorFormat::Hsl => {
            let hsl = rgb_to_hsl(r, g, b);
            format!("hsl({}deg,{}%,{}%)", hsl.h, hsl.s, hsl.l)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(ColorFormat::from("hex"), ColorFormat::Hex);
        assert_eq!(ColorFormat::from("HSL"), ColorFormat::Hsl);
        assert_eq!(ColorFormat::from("Rgb"), ColorFormat::Rgb);
        assert_eq!(ColorFormat::from("rgba"), ColorFormat::Rgba);
    }

    #[test]
    fn unknown_names_fall_back_to_rgba() {
        assert_eq!(ColorFormat::from(""), ColorFormat::Rgba);
        assert_eq!(ColorFormat::from("cmyk"), ColorFormat::Rgba);
        assert_eq!(
            format_color(1, 2, 3, 0.5, ColorFormat::from("cmyk")),
            format_color(1, 2, 3, 0.5, ColorFormat::Rgba)
        );
    }

    #[test]
    fn display_matches_name() {
        for format in ColorFormat::ALL {
            assert_eq!(format.to_string(), format.name());
            assert_eq!(ColorFormat::from(format.name()), format);
        }
    }

    #[test]
    fn every_form() {
        assert_eq!(format_color(255, 128, 0, 0.75, ColorFormat::Rgba), "rgba(255,128,0,0.75)");
        assert_eq!(format_color(255, 128, 0, 0.75, ColorFormat::Rgb), "rgb(255,128,0)");
        assert_eq!(format_color(255, 128, 0, 0.75, ColorFormat::Hex), "#FF8000");
        assert_eq!(format_color(255, 0, 0, 0.75, ColorFormat::Hsl), "hsl(0deg,100%,50%)");
    }

    #[test]
    fn hsl_form_has_integer_fields() {
        let shape = Regex::new(r"^hsl\(\d+deg,\d+%,\d+%\)$").unwrap();
        let out = format_color(10, 20, 30, 1.0, ColorFormat::Hsl);
        assert!(shape.is_match(&out), "{out}");
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (17, 200, 99), (250, 3, 180)] {
            let out = format_color(r, g, b, 1.0, ColorFormat::Hsl);
            assert!(shape.is_match(&out), "{out}");
        }
    }
}
