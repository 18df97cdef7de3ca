// SPDX-License-Identifier: MIT
//
// n-color — Color math for n-picker.
//
// Everything a color picker needs to move a color between the shapes a
// user sees and the shapes a picker computes with:
//
//   "#RRGGBB" ─┐                         ┌─ HSV (saturation/value panel)
//   "rgb(..)" ─┼─ parse ─▶ Rgba ─▶ Rgb ──┤
//   "rgba(..)"─┤                         └─ HSL (hue/lightness sliders)
//   "hsl(..)" ─┘          │
//                         └─ format ─▶ rgba / rgb / hex / hsl strings
//
// All functions are pure. Parsing never panics: unusable input comes back
// as `None` (or an empty string from `rgb_to_hex`), and the `FromStr` impl
// on `Rgba` carries the reason when a caller wants it.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Channel math rounds and clamps before every float → u8 cast.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod convert;
pub mod format;
pub mod hex;
pub mod parse;

pub use convert::{Hsl, Hsv, Rgb, Rgba, hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use format::{ColorFormat, format_color};
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use parse::{ParseColorError, parse_color_string};
