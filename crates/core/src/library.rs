//! In-memory collection of saved colors with JSON export and import.
//!
//! Nothing is persisted automatically: the only way to keep a library is to
//! export it to a file and import that file later. The file is a JSON array
//! of [`SavedColor`] records:
//!
//! ```json
//! [{"id": "lp0x1c2k9f3q", "hex": "#FF0000", "r": 255, "g": 0, "b": 0,
//!   "a": 1.0, "name": "Red", "createdAt": 1700000000000}]
//! ```
//!
//! Hex values are unique within a library: saving a color that is already
//! present fails, and importing one skips it.

use crate::color::Rgb;
use crate::error::ColorError;
use crate::formats::{format_color, Format};
use crate::hex::normalize_hex;
use crate::names::color_name;
use crate::prng::{to_base36, Xorshift64};
use serde::{Deserialize, Serialize};

/// Number of random base-36 digits appended to the timestamp in an id.
const ID_SUFFIX_LEN: usize = 11;

/// One saved color as it appears in an export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedColor {
    pub id: String,
    pub hex: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f64,
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

fn opaque() -> f64 {
    1.0
}

impl SavedColor {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Display preferences for the library view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Show each swatch's name under it.
    pub show_names: bool,
    /// Include Lab and LCH in the detail view.
    pub show_advanced: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_names: true,
            show_advanced: true,
        }
    }
}

/// Saved colors, newest first, plus view settings.
#[derive(Debug, Clone)]
pub struct Library {
    colors: Vec<SavedColor>,
    pub settings: Settings,
    rng: Xorshift64,
}

impl Library {
    /// Creates an empty library. `seed` drives the random part of entry ids.
    pub fn new(seed: u64) -> Self {
        Self {
            colors: Vec::new(),
            settings: Settings::default(),
            rng: Xorshift64::new(seed),
        }
    }

    pub fn colors(&self) -> &[SavedColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SavedColor> {
        self.colors.iter().find(|c| c.id == id)
    }

    pub fn contains_hex(&self, hex: &str) -> bool {
        self.colors.iter().any(|c| c.hex.eq_ignore_ascii_case(hex))
    }

    /// Saves `rgb` at the front of the library.
    ///
    /// A blank or missing `name` falls back to the color's table name.
    /// Returns `ColorError::DuplicateColor` if the hex is already saved.
    pub fn save(
        &mut self,
        rgb: Rgb,
        name: Option<&str>,
        now_ms: u64,
    ) -> Result<&SavedColor, ColorError> {
        let hex = rgb.to_hex();
        if self.contains_hex(&hex) {
            return Err(ColorError::DuplicateColor(hex));
        }

        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => color_name(&hex).to_string(),
        };
        let id = format!("{}{}", to_base36(now_ms), self.rng.next_base36(ID_SUFFIX_LEN));

        tracing::debug!(%hex, %name, %id, "saving color");
        self.colors.insert(
            0,
            SavedColor {
                id,
                hex,
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
                a: 1.0,
                name,
                created_at: now_ms,
            },
        );
        Ok(&self.colors[0])
    }

    /// Removes the color with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.colors.len();
        self.colors.retain(|c| c.id != id);
        let removed = self.colors.len() != before;
        tracing::debug!(id, removed, "delete color");
        removed
    }

    pub fn clear(&mut self) {
        tracing::debug!(count = self.colors.len(), "clearing library");
        self.colors.clear();
    }

    /// Colors whose hex or name contains `query`, ignoring case. An empty
    /// query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&SavedColor> {
        let q = query.trim().to_lowercase();
        self.colors
            .iter()
            .filter(|c| {
                q.is_empty()
                    || c.hex.to_lowercase().contains(&q)
                    || c.name.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Formatted values for the detail view, honoring `show_advanced`.
    pub fn detail(&self, color: &SavedColor) -> Vec<(Format, String)> {
        let formats: &[Format] = if self.settings.show_advanced {
            &Format::ALL
        } else {
            &Format::BASIC
        };
        formats
            .iter()
            .map(|&f| (f, format_color(color.rgb(), f)))
            .collect()
    }

    /// Serializes the library as a pretty-printed JSON array.
    ///
    /// Returns `ColorError::EmptyLibrary` when there is nothing to export.
    pub fn export_json(&self) -> Result<String, ColorError> {
        if self.colors.is_empty() {
            return Err(ColorError::EmptyLibrary);
        }
        tracing::debug!(count = self.colors.len(), "exporting library");
        serde_json::to_string_pretty(&self.colors).map_err(|e| ColorError::Io(e.to_string()))
    }

    /// Merges an exported JSON array into the library, appending every
    /// record whose hex is not already present. Returns the number added.
    ///
    /// Hex values are stored in canonical `#RRGGBB` form and compared in
    /// that form. Malformed JSON, a non-array document, malformed records,
    /// and records whose hex is invalid or disagrees with their channels
    /// are rejected as a whole with `ColorError::InvalidLibrary`.
    pub fn import_json(&mut self, json: &str) -> Result<usize, ColorError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ColorError::InvalidLibrary(e.to_string()))?;
        if !value.is_array() {
            return Err(ColorError::InvalidLibrary(
                "expected a JSON array of colors".into(),
            ));
        }
        let records: Vec<SavedColor> =
            serde_json::from_value(value).map_err(|e| ColorError::InvalidLibrary(e.to_string()))?;
        let records = records
            .into_iter()
            .map(canonical_record)
            .collect::<Result<Vec<_>, _>>()?;

        let total = records.len();
        let mut added = 0;
        for record in records {
            if !self.contains_hex(&record.hex) {
                self.colors.push(record);
                added += 1;
            }
        }
        tracing::debug!(total, added, "imported library");
        Ok(added)
    }
}

/// Rewrites a record's hex to `#RRGGBB`, rejecting hex values that do not
/// parse or that disagree with the record's channels.
fn canonical_record(mut record: SavedColor) -> Result<SavedColor, ColorError> {
    let hex = normalize_hex(&record.hex).ok_or_else(|| {
        ColorError::InvalidLibrary(format!("invalid hex '{}' in record '{}'", record.hex, record.id))
    })?;
    let channels = record.rgb().to_hex();
    if hex != channels {
        return Err(ColorError::InvalidLibrary(format!(
            "record '{}' has hex {hex} but channels {channels}",
            record.id
        )));
    }
    record.hex = hex;
    Ok(record)
}

/// Default export file name for a given time, `chromavault-YYYY-MM-DD.json`
/// (UTC).
pub fn export_file_name(now_ms: u64) -> String {
    let (y, m, d) = civil_date(now_ms / 86_400_000);
    format!("chromavault-{y:04}-{m:02}-{d:02}.json")
}

/// Converts days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_date(days: u64) -> (i64, u32, u32) {
    let z = days as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}
