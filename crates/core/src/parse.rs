//! Parsing of typed-in color values.
//!
//! Accepted forms:
//! * hex: `#RGB`, `#RRGGBB`, with or without `#`, any case, surrounding space
//! * `rgb(r, g, b)` with channels clamped to [0, 255]
//! * `hsl(h, s%, l%)` with the hue wrapped and percentages clamped
//! * `hsv(h, s%, v%)` likewise
//!
//! Function names are case-insensitive, `%` signs are optional and
//! components may be separated by commas, whitespace or both.

use crate::color::{hsl_to_rgb, hsv_to_rgb, Hsl, Hsv, Rgb};
use crate::error::ColorError;
use crate::hex::{hex_to_rgb, normalize_hex};

/// Parses any supported color expression into RGB.
pub fn parse_color(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::InvalidColor("empty color string".into()));
    }

    let Some((func, args)) = split_function(trimmed) else {
        let hex = normalize_hex(trimmed).ok_or_else(|| ColorError::InvalidHex(input.to_string()))?;
        return hex_to_rgb(&hex);
    };

    let [a, b, c] = components(args).ok_or_else(|| {
        ColorError::InvalidColor(format!("expected three numeric components in '{input}'"))
    })?;

    match func.to_ascii_lowercase().as_str() {
        "rgb" => Ok(Rgb::clamped(
            a.round() as i64,
            b.round() as i64,
            c.round() as i64,
        )),
        "hsl" => Ok(hsl_to_rgb(Hsl::new(
            a.round() as i32,
            b.round() as i32,
            c.round() as i32,
        ))),
        "hsv" => Ok(hsv_to_rgb(Hsv::new(a, b / 100.0, c / 100.0))),
        other => Err(ColorError::InvalidColor(format!(
            "unknown color function '{other}'"
        ))),
    }
}

/// Splits `name(args)` into its name and argument text.
fn split_function(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let args = s[open + 1..].strip_suffix(')')?;
    Some((s[..open].trim(), args))
}

/// Parses exactly three finite numbers, ignoring `%` suffixes.
fn components(args: &str) -> Option<[f64; 3]> {
    let mut values = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.trim_end_matches('%').parse::<f64>().ok().filter(|v| v.is_finite()));

    let parsed = [values.next()??, values.next()??, values.next()??];
    values.next().is_none().then_some(parsed)
}
