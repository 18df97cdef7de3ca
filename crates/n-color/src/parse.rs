// SPDX-License-Identifier: MIT
//
// CSS-style color string parsing.
//
// Accepted forms (no leading whitespace, exact lowercase function names):
//
//   hsl(H, S%, L%)     numeric prefixes, so `210deg` and `50%` both work
//   rgba(R, G, B, A)   four plain numbers, floats allowed
//   rgb(R, G, B)       three integers, fractional tails are truncated
//   #RRGGBB            full hex
//   #RGB               each digit doubled → #RRGGBB
//   #XY                each digit tripled → #XXXYYY
//
// Whitespace inside the parentheses is ignored. Every form normalizes to
// `Rgba`, whose string form is always `rgba(r,g,b,a)`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::convert::{Rgba, hsl_to_rgb};
use crate::hex::hex_to_rgb;

/// Leading float, the way `parseFloat` reads one: `12`, `-3.5`, `.5`, `1e2`.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("pattern is a literal")
});

/// Leading integer: `12` out of `12.9` or `12px`.
static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("pattern is a literal"));

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,

    #[error("unrecognized color syntax: {0:?}")]
    Unrecognized(String),

    #[error("hex color must be 7, 4 or 3 characters long, got {0}")]
    HexLength(usize),

    #[error("invalid color component: {0:?}")]
    InvalidComponent(String),

    #[error("expected {expected} color components, found {found}")]
    ComponentCount { expected: usize, found: usize },
}

/// Parse any supported color string.
///
/// Returns `None` for empty or unrecognized input. Use
/// [`str::parse::<Rgba>`](Rgba) to get the reason instead.
///
/// ```
/// use n_color::parse_color_string;
///
/// let c = parse_color_string("#abc").unwrap();
/// assert_eq!(c.color(), "rgba(170,187,204,1)");
/// assert!(parse_color_string("").is_none());
/// ```
#[must_use]
pub fn parse_color_string(s: &str) -> Option<Rgba> {
    s.parse().ok()
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }

        if let Some(body) = s.strip_prefix("hsl(") {
            parse_hsl(&arguments(s, body)?)
        } else if let Some(body) = s.strip_prefix("rgba(") {
            parse_rgba(&arguments(s, body)?)
        } else if let Some(body) = s.strip_prefix("rgb(") {
            parse_rgb(&arguments(s, body)?)
        } else if s.starts_with('#') {
            parse_hex(s)
        } else {
            Err(ParseColorError::Unrecognized(s.to_owned()))
        }
    }
}

// ─── Functional Forms ────────────────────────────────────────────────────────

/// Strip the closing paren and all whitespace, then split on commas.
fn arguments(whole: &str, body: &str) -> Result<Vec<String>, ParseColorError> {
    let inner = body
        .strip_suffix(')')
        .ok_or_else(|| ParseColorError::Unrecognized(whole.to_owned()))?;
    let compact: String = inner.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(compact.split(',').map(str::to_owned).collect())
}

fn expect_count(args: &[String], expected: usize) -> Result<(), ParseColorError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseColorError::ComponentCount {
            expected,
            found: args.len(),
        })
    }
}

fn parse_hsl(args: &[String]) -> Result<Rgba, ParseColorError> {
    expect_count(args, 3)?;
    let h = numeric_prefix(&FLOAT_PREFIX, &args[0])?;
    let s = numeric_prefix(&FLOAT_PREFIX, &args[1])?;
    let l = numeric_prefix(&FLOAT_PREFIX, &args[2])?;

    let rgb = hsl_to_rgb(
        h.rem_euclid(360.0) / 360.0,
        (s / 100.0).clamp(0.0, 1.0),
        (l / 100.0).clamp(0.0, 1.0),
    );
    Ok(rgb.with_alpha(1.0))
}

fn parse_rgba(args: &[String]) -> Result<Rgba, ParseColorError> {
    expect_count(args, 4)?;
    let mut values = [0.0; 4];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = arg
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseColorError::InvalidComponent(arg.clone()))?;
    }

    let [r, g, b, a] = values;
    Ok(Rgba::new(channel(r), channel(g), channel(b), a))
}

fn parse_rgb(args: &[String]) -> Result<Rgba, ParseColorError> {
    expect_count(args, 3)?;
    let r = numeric_prefix(&INT_PREFIX, &args[0])?;
    let g = numeric_prefix(&INT_PREFIX, &args[1])?;
    let b = numeric_prefix(&INT_PREFIX, &args[2])?;
    Ok(Rgba::new(channel(r), channel(g), channel(b), 1.0))
}

/// Read the numeric prefix of `arg`, ignoring any unit suffix.
fn numeric_prefix(pattern: &Regex, arg: &str) -> Result<f64, ParseColorError> {
    pattern
        .find(arg)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseColorError::InvalidComponent(arg.to_owned()))
}

/// Round and clamp a channel into 0–255.
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Hex Forms ───────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Rgba, ParseColorError> {
    let invalid = || ParseColorError::InvalidComponent(s.to_owned());
    if !s.is_ascii() {
        return Err(invalid());
    }

    let d: Vec<char> = s.chars().skip(1).collect();
    let full = match s.len() {
        7 => s.to_owned(),
        4 => ['#', d[0], d[0], d[1], d[1], d[2], d[2]].iter().collect(),
        3 => ['#', d[0], d[0], d[0], d[1], d[1], d[1]].iter().collect(),
        n => return Err(ParseColorError::HexLength(n)),
    };

    hex_to_rgb(&full)
        .map(|rgb| rgb.with_alpha(1.0))
        .ok_or_else(invalid)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
