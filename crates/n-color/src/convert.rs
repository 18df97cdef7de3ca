// SPDX-License-Identifier: MIT
//
// Color model types and RGB ↔ HSV / HSL conversion.
//
// Conversion pipeline:
//
//   Rgb (0–255) ─▶ normalized (0.0–1.0) ─▶ HSV / HSL
//   HSV / HSL (normalized) ─▶ Rgb (rounded, clamped to 0–255)
//
// HSV and HSL values carry two views of the same color: the conventional
// one a UI shows (degrees and percents) and the normalized one a picker
// composes with. Going back to RGB always takes the normalized view, so a
// round trip loses at most the final rounding to whole channels.

use std::fmt;

use crate::format::{ColorFormat, format_color};
use crate::hex::rgb_to_hex;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// Renders as the canonical CSS form `rgb(r,g,b)`.
///
/// ```
/// use n_color::Rgb;
///
/// let orange = Rgb::new(255, 128, 0);
/// assert_eq!(orange.to_string(), "rgb(255,128,0)");
/// assert_eq!(orange.to_hex(), "#FF8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The canonical `rgb(r,g,b)` string.
    #[must_use]
    pub fn color(self) -> String {
        self.to_string()
    }

    /// `#RRGGBB` with uppercase digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Attach an alpha value (clamped to 0.0–1.0).
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_color(self.r, self.g, self.b, 1.0, ColorFormat::Rgb))
    }
}

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color with alpha in 0.0–1.0.
///
/// This is what [`parse_color_string`](crate::parse_color_string) produces
/// for every input syntax. Renders as `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Create a color; alpha is clamped to 0.0–1.0 (NaN becomes opaque).
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) };
        Self { r, g, b, a }
    }

    /// Drop the alpha channel.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// The canonical `rgba(r,g,b,a)` string.
    #[must_use]
    pub fn color(self) -> String {
        self.to_string()
    }

    /// Render in any supported textual form.
    #[must_use]
    pub fn format(self, format: ColorFormat) -> String {
        format_color(self.r, self.g, self.b, self.a, format)
    }
}

impl Default for Rgba {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0, 0, 0, 1.0)
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(1.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ColorFormat::Rgba))
    }
}

// ─── Hsv / Hsl ───────────────────────────────────────────────────────────────

/// Hue / saturation / value.
///
/// `h` is in degrees (0–360), `s` and `v` in percent (0–100). The `*1`
/// fields hold the same color normalized to 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub h1: f64,
    pub s1: f64,
    pub v1: f64,
}

/// Hue / saturation / lightness.
///
/// `h` is whole degrees, `s` and `l` whole percents, rounded for display.
/// The `*1` fields are the unrounded values normalized to 0.0–1.0; use
/// those to convert back with [`hsl_to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
    pub h1: f64,
    pub s1: f64,
    pub l1: f64,
}

// ─── RGB → HSV / HSL ─────────────────────────────────────────────────────────

/// Convert 8-bit RGB to HSV.
///
/// Achromatic colors (all channels equal) get hue 0.
#[must_use]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (r, g, b) = normalize(r, g, b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max > 0.0 { d / max } else { 0.0 };
    let h = if d > 0.0 { hue(r, g, b, max, d) } else { 0.0 };

    Hsv {
        h: h * 360.0,
        s: s * 100.0,
        v: max * 100.0,
        h1: h,
        s1: s,
        v1: max,
    }
}

/// Convert 8-bit RGB to HSL.
///
/// Saturation divides by `2 - max - min` above 50% lightness and by
/// `max + min` otherwise, so neither denominator approaches zero.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (r, g, b) = normalize(r, g, b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let l = (max + min) / 2.0;

    let (h, s) = if d > 0.0 {
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        (hue(r, g, b, max, d), s)
    } else {
        (0.0, 0.0)
    };

    Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
        h1: h,
        s1: s,
        l1: l,
    }
}

/// Normalized hue (0.0–1.0) from whichever channel is the maximum.
///
/// `d` must be non-zero. When red is the maximum and blue exceeds green the
/// raw sector is negative; adding six turns wraps it back into range.
#[allow(clippy::float_cmp)] // `max` is one of the channels, exact match intended
fn hue(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    sector / 6.0
}

fn normalize(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    (
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    )
}

// ─── HSV / HSL → RGB ─────────────────────────────────────────────────────────

/// Convert normalized HSL (all 0.0–1.0) to 8-bit RGB.
///
/// With zero saturation every channel is `round(l * 255)`. Otherwise the
/// three channels sample the hue ramp at `h + 1/3`, `h` and `h - 1/3`.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s <= 0.0 {
        let v = unit_to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l >= 0.5 {
        l.mul_add(-s, l + s)
    } else {
        l * (1.0 + s)
    };
    let p = 2.0f64.mul_add(l, -q);

    Rgb::new(
        unit_to_channel(hue_ramp(p, q, h + 1.0 / 3.0)),
        unit_to_channel(hue_ramp(p, q, h)),
        unit_to_channel(hue_ramp(p, q, h - 1.0 / 3.0)),
    )
}

/// Six-piece interpolation between `p` and `q` along the hue circle.
fn hue_ramp(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

/// Convert normalized HSV (all 0.0–1.0) to 8-bit RGB.
///
/// Inverse of [`rgb_to_hsv`] on its normalized fields. A hue of exactly 1.0
/// wraps to red.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * f.mul_add(-s, 1.0);
    let t = v * (1.0 - f).mul_add(-s, 1.0);

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
}

/// Scale 0.0–1.0 to a rounded, clamped 0–255 channel.
#[inline]
pub(crate) fn unit_to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
