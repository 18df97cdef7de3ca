// SPDX-License-Identifier: MIT
//
// `#RRGGBB` encoding and decoding.
//
// Digits go out through a fixed uppercase table and come back through a
// byte match, so neither direction allocates beyond the output string.

use crate::convert::Rgb;

/// Hex digits by value. Values 10–15 render as uppercase letters.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode three channels as `#RRGGBB` (uppercase).
///
/// Each channel is rounded to the nearest integer and clamped to 0–255
/// before encoding. Returns an empty string if any channel is NaN.
///
/// ```
/// use n_color::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(255.0, 128.4, 0.0), "#FF8000");
/// assert_eq!(rgb_to_hex(f64::NAN, 0.0, 0.0), "");
/// ```
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    if r.is_nan() || g.is_nan() || b.is_nan() {
        return String::new();
    }

    let mut out = String::with_capacity(7);
    out.push('#');
    for channel in [r, g, b] {
        let value = channel.round().clamp(0.0, 255.0) as u8;
        out.push(char::from(HEX_DIGITS[usize::from(value >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(value & 0x0f)]));
    }
    out
}

/// Decode a `#RRGGBB` string (digits are case-insensitive).
///
/// Returns `None` for any other length, a missing `#`, or a non-hex digit.
/// Shorthand forms are expanded by [`parse_color_string`](crate::parse_color_string),
/// not here.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?.as_bytes();
    if digits.len() != 6 {
        return None;
    }

    Some(Rgb::new(
        parse_hex_byte(digits[0], digits[1])?,
        parse_hex_byte(digits[2], digits[3])?,
        parse_hex_byte(digits[4], digits[5])?,
    ))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(parse_hex_digit(hi)? << 4 | parse_hex_digit(lo)?)
}
