//! Human-readable string forms of a color.
//!
//! [`formats`] composes the converters into the strings shown in a detail
//! view or copied to the clipboard: `#RRGGBB`, `rgb(r, g, b)`,
//! `hsl(h, s%, l%)`, `lab(L% a b)` and `lch(L% c h)`.

use crate::color::{lab_to_lch, rgb_to_hsl, rgb_to_lab, Hsl, Lab, Lch, Rgb};
use crate::error::ColorError;
use crate::names::color_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A textual color notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Hex,
    Rgb,
    Hsl,
    Lab,
    Lch,
}

impl Format {
    /// Every notation, in display order.
    pub const ALL: [Format; 5] = [
        Format::Hex,
        Format::Rgb,
        Format::Hsl,
        Format::Lab,
        Format::Lch,
    ];

    /// The notations shown when advanced formats are hidden.
    pub const BASIC: [Format; 3] = [Format::Hex, Format::Rgb, Format::Hsl];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
            Format::Lab => "lab",
            Format::Lch => "lch",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| ColorError::InvalidColor(format!("unknown format '{s}'")))
    }
}

/// All string forms of one color, plus its table name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formats {
    pub name: String,
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub lab: String,
    pub lch: String,
}

impl Formats {
    /// Returns the string for one notation.
    pub fn get(&self, format: Format) -> &str {
        match format {
            Format::Hex => &self.hex,
            Format::Rgb => &self.rgb,
            Format::Hsl => &self.hsl,
            Format::Lab => &self.lab,
            Format::Lch => &self.lch,
        }
    }
}

pub fn rgb_string(c: Rgb) -> String {
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}

pub fn hsl_string(c: Hsl) -> String {
    format!("hsl({}, {}%, {}%)", c.h, c.s, c.l)
}

pub fn lab_string(c: Lab) -> String {
    format!("lab({}% {} {})", c.l, c.a, c.b)
}

pub fn lch_string(c: Lch) -> String {
    format!("lch({}% {} {})", c.l, c.c, c.h)
}

/// Renders a single notation without computing the others.
pub fn format_color(c: Rgb, format: Format) -> String {
    match format {
        Format::Hex => c.to_hex(),
        Format::Rgb => rgb_string(c),
        Format::Hsl => hsl_string(rgb_to_hsl(c)),
        Format::Lab => lab_string(rgb_to_lab(c)),
        Format::Lch => lch_string(lab_to_lch(rgb_to_lab(c))),
    }
}

/// Computes every string form of `c`.
pub fn formats(c: Rgb) -> Formats {
    let hex = c.to_hex();
    let lab = rgb_to_lab(c);

    Formats {
        name: color_name(&hex).to_string(),
        rgb: rgb_string(c),
        hsl: hsl_string(rgb_to_hsl(c)),
        lab: lab_string(lab),
        lch: lch_string(lab_to_lch(lab)),
        hex,
    }
}
