//! Hex color strings: validation, canonicalization and RGB conversion.
//!
//! The canonical form is `#RRGGBB` with uppercase digits. Validation accepts
//! an optional leading `#` followed by exactly 3 or exactly 6 hex digits.

use crate::color::Rgb;
use crate::error::ColorError;

/// Returns true if `s` is `#?` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Canonicalizes a user-entered hex color to `#RRGGBB`.
///
/// Trims surrounding whitespace, uppercases, adds a missing `#` and expands
/// the 3-digit shorthand. Returns `None` for empty input or anything that is
/// still not a valid color afterwards. Idempotent on its own output.
pub fn normalize_hex(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_ascii_uppercase();
    let digits = upper.strip_prefix('#').unwrap_or(&upper);

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let canonical = format!("#{expanded}");
    (canonical.len() == 7 && is_valid_hex(&canonical)).then_some(canonical)
}

/// Formats a color as `#RRGGBB` with uppercase digits.
pub fn rgb_to_hex(c: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

/// Parses a 3- or 6-digit hex color, with or without the leading `#`.
///
/// Returns `ColorError::InvalidHex` for anything [`is_valid_hex`] rejects.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|e| ColorError::InvalidHex(format!("{hex}: {e}")))
    };

    if digits.len() == 3 {
        let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
        return hex_to_rgb(&doubled);
    }

    Ok(Rgb {
        r: channel(&digits[0..2])?,
        g: channel(&digits[2..4])?,
        b: channel(&digits[4..6])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Validation --

    #[test]
    fn accepts_three_and_six_digits_with_or_without_hash() {
        assert!(is_valid_hex("#FFF"));
        assert!(is_valid_hex("FFFFFF"));
        assert!(is_valid_hex("#a1B2c3"));
        assert!(is_valid_hex("abc"));
    }

    #[test]
    fn rejects_other_digit_counts() {
        for bad in ["", "#", "#1", "#12", "#1234", "#12345", "#1234567", "12345678"] {
            assert!(!is_valid_hex(bad), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(!is_valid_hex("#GGGGGG"));
        assert!(!is_valid_hex("##FFF"));
        assert!(!is_valid_hex(" #FFF"));
        assert!(!is_valid_hex("#ÿÿÿ"));
    }

    // -- Normalization --

    #[test]
    fn normalize_expands_shorthand() {
        assert_eq!(normalize_hex("abc").as_deref(), Some("#AABBCC"));
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_hex(" #fff ").as_deref(), Some("#FFFFFF"));
        assert_eq!(normalize_hex("\t00ff7f\n").as_deref(), Some("#00FF7F"));
    }

    #[test]
    fn normalize_rejects_invalid() {
        assert_eq!(normalize_hex("12345"), None);
        assert_eq!(normalize_hex(""), None);
        assert_eq!(normalize_hex("   "), None);
        assert_eq!(normalize_hex("#GGG"), None);
        assert_eq!(normalize_hex("##FFF"), None);
    }

    #[test]
    fn normalize_is_idempotent_on_output() {
        let once = normalize_hex("c0f").unwrap();
        assert_eq!(normalize_hex(&once).as_deref(), Some(once.as_str()));
    }

    // -- Conversion --

    #[test]
    fn rgb_to_hex_red() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 0, 0)), "#FF0000");
    }

    #[test]
    fn rgb_to_hex_pads_small_channels() {
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 10)), "#01020A");
    }

    #[test]
    fn hex_to_rgb_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#804020").unwrap(), Rgb::new(0x80, 0x40, 0x20));
        assert_eq!(hex_to_rgb("804020").unwrap(), Rgb::new(0x80, 0x40, 0x20));
    }

    #[test]
    fn hex_to_rgb_expands_shorthand() {
        assert_eq!(hex_to_rgb("#f0a").unwrap(), Rgb::new(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn hex_to_rgb_rejects_invalid() {
        assert!(hex_to_rgb("#gggggg").is_err());
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("#ff00ff00").is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_hex_round_trip(r: u8, g: u8, b: u8) {
                let rgb = Rgb::new(r, g, b);
                prop_assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
            }

            #[test]
            fn normalize_is_idempotent(s in "\\PC{0,10}") {
                if let Some(once) = normalize_hex(&s) {
                    prop_assert_eq!(normalize_hex(&once), Some(once.clone()));
                    prop_assert!(is_valid_hex(&once));
                    prop_assert_eq!(once.len(), 7);
                }
            }

            #[test]
            fn normalize_accepts_any_six_digit_hex(s in "#?[0-9a-fA-F]{6}") {
                let normalized = normalize_hex(&s).unwrap();
                prop_assert_eq!(normalized.trim_start_matches('#'), s.trim_start_matches('#').to_ascii_uppercase());
            }

            #[test]
            fn valid_hex_always_parses(s in "#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})") {
                prop_assert!(is_valid_hex(&s));
                prop_assert!(hex_to_rgb(&s).is_ok());
            }
        }
    }
}
