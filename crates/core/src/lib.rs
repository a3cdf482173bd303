#![deny(unsafe_code)]
//! Core color types and conversions for the ChromaVault color picker.
//!
//! Provides the `Rgb`/`Hsv`/`Hsl`/`Lab`/`Lch` value types and the pure
//! converters between them, hex validation and canonicalization, the fixed
//! color-name table, formatted string forms, a color-expression parser, the
//! picker's working state and the saved-color `Library` with JSON
//! export/import.

pub mod color;
pub mod error;
pub mod formats;
pub mod hex;
pub mod library;
pub mod names;
pub mod parse;
pub mod picker;
pub mod prng;

pub use color::{
    hsl_to_rgb, hsv_to_rgb, lab_to_lch, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_lch, Hsl, Hsv,
    Lab, Lch, Rgb,
};
pub use error::ColorError;
pub use formats::{format_color, formats, Format, Formats};
pub use hex::{hex_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex};
pub use library::{export_file_name, Library, SavedColor, Settings};
pub use names::color_name;
pub use parse::parse_color;
pub use picker::Picker;
pub use prng::Xorshift64;
