//! Working state of the interactive color picker.
//!
//! The picker keeps the selected color as an HSV triple, which is what the
//! saturation/value plane and hue strip manipulate directly. RGB, hex and HSL
//! are derived on demand. Pointer handling is reduced to positions relative
//! to the surface being dragged; everything DOM-related stays with the caller.

use crate::color::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsv, Hsl, Hsv, Rgb};
use crate::error::ColorError;
use crate::formats::{format_color, Format};
use crate::hex::{hex_to_rgb, normalize_hex};
use crate::parse::parse_color;
use serde::{Deserialize, Serialize};

/// Picker state: hue in [0, 360], saturation and value in [0, 1], and the
/// notation used for the editable value field.
///
/// The hue strip can reach exactly 360; conversions treat it as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Picker {
    h: f64,
    s: f64,
    v: f64,
    format: Format,
}

impl Default for Picker {
    /// Fully saturated red, shown as hex.
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 1.0,
            v: 1.0,
            format: Format::Hex,
        }
    }
}

fn fraction(pos: f64, extent: f64) -> Option<f64> {
    (extent > 0.0 && pos.is_finite() && extent.is_finite()).then(|| (pos / extent).clamp(0.0, 1.0))
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hsv(&self) -> Hsv {
        Hsv {
            h: self.h,
            s: self.s,
            v: self.v,
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    /// The currently selected color.
    pub fn rgb(&self) -> Rgb {
        hsv_to_rgb(self.hsv())
    }

    pub fn hex(&self) -> String {
        self.rgb().to_hex()
    }

    /// The fully saturated, full-value color for the current hue; the
    /// right-hand edge of the saturation/value plane.
    pub fn hue_rgb(&self) -> Rgb {
        hsv_to_rgb(Hsv {
            h: self.h,
            s: 1.0,
            v: 1.0,
        })
    }

    /// Cursor position on the saturation/value plane as `(x, y)` fractions,
    /// with y growing downwards.
    pub fn cursor_position(&self) -> (f64, f64) {
        (self.s, 1.0 - self.v)
    }

    /// Hue cursor position along the strip as a fraction.
    pub fn hue_position(&self) -> f64 {
        self.h / 360.0
    }

    /// Sets the hue from a pointer `x` offset within a strip `width` wide.
    /// Non-positive widths are ignored.
    pub fn set_hue_from_pointer(&mut self, x: f64, width: f64) {
        if let Some(t) = fraction(x, width) {
            self.h = t * 360.0;
            tracing::trace!(h = self.h, "hue changed");
        }
    }

    /// Sets saturation and value from a pointer position within the plane.
    /// Non-positive sizes are ignored.
    pub fn set_sv_from_pointer(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let (Some(s), Some(down)) = (fraction(x, width), fraction(y, height)) {
            self.s = s;
            self.v = 1.0 - down;
            tracing::trace!(s = self.s, v = self.v, "saturation/value changed");
        }
    }

    pub fn set_from_hsv(&mut self, hsv: Hsv) {
        let hsv = Hsv::new(hsv.h, hsv.s, hsv.v);
        self.h = hsv.h;
        self.s = hsv.s;
        self.v = hsv.v;
    }

    pub fn set_from_rgb(&mut self, rgb: Rgb) {
        self.set_from_hsv(rgb_to_hsv(rgb));
    }

    pub fn set_from_hsl(&mut self, hsl: Hsl) {
        self.set_from_rgb(hsl_to_rgb(hsl));
    }

    /// Sets the color from a hex string after normalizing it. On failure the
    /// state is left unchanged.
    pub fn set_from_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        let canonical = normalize_hex(hex).ok_or_else(|| ColorError::InvalidHex(hex.to_string()))?;
        self.set_from_rgb(hex_to_rgb(&canonical)?);
        Ok(())
    }

    /// Applies a typed-in value. In hex mode the input must be a hex color;
    /// otherwise any expression [`parse_color`] accepts is taken. On failure
    /// the state is left unchanged.
    pub fn apply_input(&mut self, input: &str) -> Result<(), ColorError> {
        match self.format {
            Format::Hex => self.set_from_hex(input),
            _ => {
                let rgb = parse_color(input)?;
                self.set_from_rgb(rgb);
                Ok(())
            }
        }
    }

    /// The current color in the current notation, as copied to the clipboard.
    pub fn formatted_value(&self) -> String {
        format_color(self.rgb(), self.format)
    }

    /// Whether the plane cursor should be drawn dark to stay visible.
    pub fn wants_dark_cursor(&self) -> bool {
        self.rgb().is_light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn default_is_red_hex() {
        let picker = Picker::new();
        assert_eq!(picker.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(picker.format(), Format::Hex);
        assert_eq!(picker.formatted_value(), "#FF0000");
    }

    #[test]
    fn hue_pointer_maps_width_to_full_circle() {
        let mut picker = Picker::new();
        picker.set_hue_from_pointer(50.0, 200.0);
        assert!(approx_eq(picker.hsv().h, 90.0));
        assert!(approx_eq(picker.hue_position(), 0.25));
    }

    #[test]
    fn hue_pointer_clamps_outside_strip() {
        let mut picker = Picker::new();
        picker.set_hue_from_pointer(-20.0, 200.0);
        assert_eq!(picker.hsv().h, 0.0);
        picker.set_hue_from_pointer(500.0, 200.0);
        assert_eq!(picker.hsv().h, 360.0);
        // 360 renders the same as 0
        assert_eq!(picker.rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn zero_width_pointer_is_ignored() {
        let mut picker = Picker::new();
        picker.set_hue_from_pointer(10.0, 0.0);
        picker.set_sv_from_pointer(10.0, 10.0, 0.0, 100.0);
        assert_eq!(picker, Picker::new());
    }

    #[test]
    fn sv_pointer_sets_saturation_and_value() {
        let mut picker = Picker::new();
        picker.set_sv_from_pointer(25.0, 75.0, 100.0, 100.0);
        let hsv = picker.hsv();
        assert!(approx_eq(hsv.s, 0.25));
        assert!(approx_eq(hsv.v, 0.25));
        let (x, y) = picker.cursor_position();
        assert!(approx_eq(x, 0.25));
        assert!(approx_eq(y, 0.75));
    }

    #[test]
    fn sv_pointer_clamps() {
        let mut picker = Picker::new();
        picker.set_sv_from_pointer(-5.0, 500.0, 100.0, 100.0);
        assert_eq!(picker.hsv().s, 0.0);
        assert_eq!(picker.hsv().v, 0.0);
        assert_eq!(picker.rgb(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn hue_rgb_ignores_saturation_and_value() {
        let mut picker = Picker::new();
        picker.set_hue_from_pointer(120.0, 360.0);
        picker.set_sv_from_pointer(0.0, 100.0, 100.0, 100.0);
        assert_eq!(picker.hue_rgb(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn set_from_rgb_round_trips() {
        let mut picker = Picker::new();
        picker.set_from_rgb(Rgb::new(12, 34, 56));
        assert_eq!(picker.rgb(), Rgb::new(12, 34, 56));
        assert_eq!(picker.hex(), "#0C2238");
    }

    #[test]
    fn set_from_hex_normalizes() {
        let mut picker = Picker::new();
        picker.set_from_hex(" 0f0 ").unwrap();
        assert_eq!(picker.rgb(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn invalid_hex_leaves_state_unchanged() {
        let mut picker = Picker::new();
        picker.set_from_rgb(Rgb::new(1, 2, 3));
        let before = picker;
        assert!(picker.set_from_hex("12345").is_err());
        assert_eq!(picker, before);
    }

    #[test]
    fn apply_input_in_rgb_mode() {
        let mut picker = Picker::new();
        picker.set_format(Format::Rgb);
        picker.apply_input("rgb(300, 128, -4)").unwrap();
        assert_eq!(picker.rgb(), Rgb::new(255, 128, 0));
        assert_eq!(picker.formatted_value(), "rgb(255, 128, 0)");
    }

    #[test]
    fn apply_input_in_hsl_mode() {
        let mut picker = Picker::new();
        picker.set_format(Format::Hsl);
        picker.apply_input("hsl(240, 100%, 50%)").unwrap();
        assert_eq!(picker.rgb(), Rgb::new(0, 0, 255));
        assert_eq!(picker.formatted_value(), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn apply_input_in_hex_mode_rejects_functions() {
        let mut picker = Picker::new();
        assert!(picker.apply_input("rgb(1, 2, 3)").is_err());
        assert_eq!(picker, Picker::new());
    }

    #[test]
    fn set_from_hsl_matches_converter() {
        let mut picker = Picker::new();
        let hsl = Hsl { h: 30, s: 80, l: 60 };
        picker.set_from_hsl(hsl);
        assert_eq!(picker.rgb(), hsl_to_rgb(hsl));
    }

    #[test]
    fn dark_cursor_on_light_colors() {
        let mut picker = Picker::new();
        picker.set_from_rgb(Rgb::new(255, 255, 200));
        assert!(picker.wants_dark_cursor());
        picker.set_from_rgb(Rgb::new(20, 20, 60));
        assert!(!picker.wants_dark_cursor());
    }

    #[test]
    fn serde_round_trip() {
        let mut picker = Picker::new();
        picker.set_from_rgb(Rgb::new(100, 150, 200));
        picker.set_format(Format::Lch);
        let json = serde_json::to_string(&picker).unwrap();
        let restored: Picker = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, picker);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn set_from_rgb_reproduces_color(r: u8, g: u8, b: u8) {
                let mut picker = Picker::new();
                picker.set_from_rgb(Rgb::new(r, g, b));
                prop_assert_eq!(picker.rgb(), Rgb::new(r, g, b));
            }

            #[test]
            fn pointer_state_stays_in_range(
                x in -1000.0_f64..1000.0,
                y in -1000.0_f64..1000.0,
                w in 1.0_f64..1000.0,
                h in 1.0_f64..1000.0,
            ) {
                let mut picker = Picker::new();
                picker.set_hue_from_pointer(x, w);
                picker.set_sv_from_pointer(x, y, w, h);
                let hsv = picker.hsv();
                prop_assert!((0.0..=360.0).contains(&hsv.h));
                prop_assert!((0.0..=1.0).contains(&hsv.s));
                prop_assert!((0.0..=1.0).contains(&hsv.v));
            }
        }
    }
}
