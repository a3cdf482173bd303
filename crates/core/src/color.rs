//! Color types and conversion functions for ChromaVault.
//!
//! Provides the value types (`Rgb`, `Hsv`, `Hsl`, `Lab`, `Lch`) and pure
//! conversion functions between them. Every converter is total: inputs outside
//! their nominal range are clamped (channels, saturation, value, lightness) or
//! wrapped modulo 360 (hue) before use, and NaN is treated as 0.
//!
//! Integer outputs are rounded half away from zero, which `f64::round` does.

use crate::error::ColorError;
use crate::hex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit sRGB color.
///
/// Serializes as a hex string `"#RRGGBB"`; deserializes from any valid
/// 3- or 6-digit hex string with or without the leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue in whole degrees [0, 360), saturation and lightness in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

/// CIE L*a*b* relative to D65, rounded to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    pub l: i32,
    pub a: i32,
    pub b: i32,
}

/// Cylindrical form of [`Lab`]: lightness, chroma (>= 0) and hue in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lch {
    pub l: i32,
    pub c: i32,
    pub h: i32,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from arbitrary integers, clamping each channel to [0, 255].
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let channel = |c: i64| c.clamp(0, 255) as u8;
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Parses `"#RGB"`, `"#RRGGBB"`, `"RGB"` or `"RRGGBB"` (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        hex::hex_to_rgb(hex)
    }

    /// Formats as `"#RRGGBB"` with uppercase digits.
    pub fn to_hex(self) -> String {
        hex::rgb_to_hex(self)
    }

    /// Rec. 601 luma normalized to [0, 1].
    pub fn luma(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// True when a dark foreground reads better on this color than a light one.
    pub fn is_light(self) -> bool {
        self.luma() > 0.5
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsv {
    /// Creates an HSV color with the hue wrapped into [0, 360) and
    /// saturation/value clamped to [0, 1].
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: unit(s),
            v: unit(v),
        }
    }
}

impl Hsl {
    /// Creates an HSL color with the hue wrapped into [0, 360) and
    /// saturation/lightness clamped to [0, 100].
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: h.rem_euclid(360),
            s: s.clamp(0, 100),
            l: l.clamp(0, 100),
        }
    }
}

/// Wraps a hue angle into [0, 360). Non-finite input maps to 0.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamps to [0, 1] with NaN mapped to 0.
fn unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Scales a [0, 1] component to an 8-bit channel.
fn to_channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Rounds a hue in degrees to an integer in [0, 360).
fn round_hue(h: f64) -> i32 {
    (h.round() as i32).rem_euclid(360)
}

/// One of the six 60-degree slices of the hue circle, named by its
/// starting primary or secondary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sector {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl Sector {
    const ALL: [Sector; 6] = [
        Sector::Red,
        Sector::Yellow,
        Sector::Green,
        Sector::Cyan,
        Sector::Blue,
        Sector::Magenta,
    ];

    /// Splits a hue given as a fraction of a full turn into its sector and
    /// the fractional position within that sector.
    fn locate(turns: f64) -> (Sector, f64) {
        let scaled = turns * 6.0;
        let index = scaled.floor();
        let frac = scaled - index;
        (Self::ALL[(index as i64).rem_euclid(6) as usize], frac)
    }
}

/// Hue in degrees from normalized channels, shared by HSV and HSL.
///
/// Callers guarantee `delta > 0`.
fn chromatic_hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sextant = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    wrap_hue(sextant * 60.0)
}

fn normalized(c: Rgb) -> (f64, f64, f64) {
    (c.r as f64 / 255.0, c.g as f64 / 255.0, c.b as f64 / 255.0)
}

/// Converts HSV to 8-bit RGB with the six-sector algorithm.
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let s = unit(c.s);
    let v = unit(c.v);
    let (sector, f) = Sector::locate(wrap_hue(c.h) / 360.0);

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector {
        Sector::Red => (v, t, p),
        Sector::Yellow => (q, v, p),
        Sector::Green => (p, v, t),
        Sector::Cyan => (p, q, v),
        Sector::Blue => (t, p, v),
        Sector::Magenta => (v, p, q),
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Converts 8-bit RGB to HSV. Achromatic colors get hue 0; black gets
/// saturation 0.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let (r, g, b) = normalized(c);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else {
        chromatic_hue(r, g, b, max, delta)
    };

    Hsv { h, s, v: max }
}

/// Converts 8-bit RGB to HSL rounded to whole degrees and percent.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let (r, g, b) = normalized(c);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as i32,
        };
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let h = chromatic_hue(r, g, b, max, delta);

    Hsl {
        h: round_hue(h),
        s: (s * 100.0).round() as i32,
        l: (l * 100.0).round() as i32,
    }
}

/// Converts HSL (degrees, percent) to 8-bit RGB.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = c.h.rem_euclid(360) as f64 / 360.0;
    let s = c.s.clamp(0, 100) as f64 / 100.0;
    let l = c.l.clamp(0, 100) as f64 / 100.0;

    if s == 0.0 {
        let gray = to_channel(l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: to_channel(hue_to_channel(p, q, h)),
        b: to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

/// Evaluates one RGB component of an HSL color at hue offset `t` (in turns).
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// D65 reference white.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// Applies inverse sRGB gamma to a single 8-bit channel.
fn srgb_channel_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// CIE Lab companding of a white-relative XYZ component.
fn lab_compand(t: f64) -> f64 {
    if t > 0.008856 {
        t.powf(1.0 / 3.0)
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Converts 8-bit sRGB to CIE Lab (D65) via linear RGB and XYZ.
pub fn rgb_to_lab(c: Rgb) -> Lab {
    let r = srgb_channel_to_linear(c.r);
    let g = srgb_channel_to_linear(c.g);
    let b = srgb_channel_to_linear(c.b);

    let x = (r * 0.4124 + g * 0.3576 + b * 0.1805) / WHITE_X;
    let y = (r * 0.2126 + g * 0.7152 + b * 0.0722) / WHITE_Y;
    let z = (r * 0.0193 + g * 0.1192 + b * 0.9505) / WHITE_Z;

    let fx = lab_compand(x);
    let fy = lab_compand(y);
    let fz = lab_compand(z);

    Lab {
        l: (116.0 * fy - 16.0).round() as i32,
        a: (500.0 * (fx - fy)).round() as i32,
        b: (200.0 * (fy - fz)).round() as i32,
    }
}

/// Converts Lab to LCH. Zero chroma yields hue 0.
pub fn lab_to_lch(c: Lab) -> Lch {
    let a = c.a as f64;
    let b = c.b as f64;
    let chroma = (a * a + b * b).sqrt();
    let h = if chroma == 0.0 {
        0.0
    } else {
        b.atan2(a).to_degrees()
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    Lch {
        l: c.l,
        c: chroma.round() as i32,
        h: round_hue(h),
    }
}

/// Convenience: sRGB straight to LCH.
pub fn rgb_to_lch(c: Rgb) -> Lch {
    lab_to_lch(rgb_to_lab(c))
}
