//! Names for a fixed set of well-known web colors.
//!
//! This is an exact lookup, not a nearest-color search: anything outside the
//! table is "Custom".

use std::collections::HashMap;
use std::sync::LazyLock;

/// Name returned for any hex value not in the table.
pub const CUSTOM: &str = "Custom";

const NAMED_COLORS: [(&str, &str); 20] = [
    ("#000000", "Black"),
    ("#FFFFFF", "White"),
    ("#FF0000", "Red"),
    ("#00FF00", "Lime"),
    ("#0000FF", "Blue"),
    ("#FFFF00", "Yellow"),
    ("#00FFFF", "Cyan"),
    ("#FF00FF", "Magenta"),
    ("#C0C0C0", "Silver"),
    ("#808080", "Gray"),
    ("#800000", "Maroon"),
    ("#808000", "Olive"),
    ("#008000", "Green"),
    ("#800080", "Purple"),
    ("#008080", "Teal"),
    ("#000080", "Navy"),
    ("#FFA500", "Orange"),
    ("#FFC0CB", "Pink"),
    ("#A52A2A", "Brown"),
    ("#DC2626", "Rose"),
];

static NAMES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NAMED_COLORS.into_iter().collect());

/// Looks up the name of a `#RRGGBB` color, ignoring case.
///
/// The input must include the `#`; it is not normalized.
pub fn color_name(hex: &str) -> &'static str {
    NAMES
        .get(hex.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(CUSTOM)
}

/// Iterates over every `(hex, name)` pair in table order.
pub fn named_colors() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAMED_COLORS.into_iter()
}
