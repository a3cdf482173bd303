#![deny(unsafe_code)]
//! Browser bindings for ChromaVault.
//!
//! Colors cross the boundary as plain arrays (`[r, g, b]`, `[h, s, v]`, ...),
//! strings, or JSON strings for structured values. Timestamps are
//! milliseconds as JS numbers (`Date.now()`).

use chromavault_core::{self as cv, Format, Hsl, Hsv, Lab, Library, Picker, Rgb};
use chromavault_render::{hue_strip, saturation_plane};
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::ImageData;

fn channels(c: Rgb) -> Vec<u8> {
    vec![c.r, c.g, c.b]
}

#[wasm_bindgen(js_name = hsvToRgb)]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Vec<u8> {
    channels(cv::hsv_to_rgb(Hsv { h, s, v }))
}

#[wasm_bindgen(js_name = rgbToHsv)]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Vec<f64> {
    let c = cv::rgb_to_hsv(Rgb::new(r, g, b));
    vec![c.h, c.s, c.v]
}

#[wasm_bindgen(js_name = rgbToHsl)]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Vec<i32> {
    let c = cv::rgb_to_hsl(Rgb::new(r, g, b));
    vec![c.h, c.s, c.l]
}

#[wasm_bindgen(js_name = hslToRgb)]
pub fn hsl_to_rgb(h: i32, s: i32, l: i32) -> Vec<u8> {
    channels(cv::hsl_to_rgb(Hsl { h, s, l }))
}

#[wasm_bindgen(js_name = rgbToHex)]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    cv::rgb_to_hex(Rgb::new(r, g, b))
}

#[wasm_bindgen(js_name = hexToRgb)]
pub fn hex_to_rgb(hex: &str) -> Result<Vec<u8>, JsError> {
    Ok(channels(cv::hex_to_rgb(hex)?))
}

#[wasm_bindgen(js_name = rgbToLab)]
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Vec<i32> {
    let c = cv::rgb_to_lab(Rgb::new(r, g, b));
    vec![c.l, c.a, c.b]
}

#[wasm_bindgen(js_name = labToLch)]
pub fn lab_to_lch(l: i32, a: i32, b: i32) -> Vec<i32> {
    let c = cv::lab_to_lch(Lab { l, a, b });
    vec![c.l, c.c, c.h]
}

#[wasm_bindgen(js_name = isValidHex)]
pub fn is_valid_hex(s: &str) -> bool {
    cv::is_valid_hex(s)
}

/// Canonical `#RRGGBB`, or `undefined` when the input is not a hex color.
#[wasm_bindgen(js_name = normalizeHex)]
pub fn normalize_hex(s: &str) -> Option<String> {
    cv::normalize_hex(s)
}

#[wasm_bindgen(js_name = colorName)]
pub fn color_name(hex: &str) -> String {
    cv::color_name(hex).to_string()
}

/// JSON object `{name, hex, rgb, hsl, lab, lch}` for a color expression.
#[wasm_bindgen]
pub fn formats(color: &str) -> Result<String, JsError> {
    let rgb = cv::parse_color(color)?;
    Ok(serde_json::to_string(&cv::formats(rgb))?)
}

#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name(now_ms: f64) -> String {
    cv::export_file_name(now_ms as u64)
}

fn image_data(rgba: Vec<u8>, width: u32, height: u32) -> Result<ImageData, JsValue> {
    ImageData::new_with_u8_clamped_array_and_sh(Clamped(&rgba[..]), width, height)
}

/// The saturation/value plane for `hue`, ready for `putImageData`.
#[wasm_bindgen(js_name = saturationImage)]
pub fn saturation_image(hue: f64, width: u32, height: u32) -> Result<ImageData, JsValue> {
    let rgba = saturation_plane(hue, width as usize, height as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    image_data(rgba, width, height)
}

#[wasm_bindgen(js_name = hueImage)]
pub fn hue_image(width: u32, height: u32) -> Result<ImageData, JsValue> {
    let rgba =
        hue_strip(width as usize, height as usize).map_err(|e| JsValue::from_str(&e.to_string()))?;
    image_data(rgba, width, height)
}

/// Interactive picker state.
#[wasm_bindgen]
pub struct WasmPicker {
    inner: Picker,
}

#[wasm_bindgen]
impl WasmPicker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmPicker {
        WasmPicker {
            inner: Picker::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn hue(&self) -> f64 {
        self.inner.hsv().h
    }

    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f64 {
        self.inner.hsv().s
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.inner.hsv().v
    }

    pub fn rgb(&self) -> Vec<u8> {
        channels(self.inner.rgb())
    }

    pub fn hex(&self) -> String {
        self.inner.hex()
    }

    #[wasm_bindgen(js_name = hueRgb)]
    pub fn hue_rgb(&self) -> Vec<u8> {
        channels(self.inner.hue_rgb())
    }

    /// `[x, y]` fractions of the plane cursor.
    #[wasm_bindgen(js_name = cursorPosition)]
    pub fn cursor_position(&self) -> Vec<f64> {
        let (x, y) = self.inner.cursor_position();
        vec![x, y]
    }

    #[wasm_bindgen(js_name = huePosition)]
    pub fn hue_position(&self) -> f64 {
        self.inner.hue_position()
    }

    #[wasm_bindgen(js_name = setHueFromPointer)]
    pub fn set_hue_from_pointer(&mut self, x: f64, width: f64) {
        self.inner.set_hue_from_pointer(x, width);
    }

    #[wasm_bindgen(js_name = setSvFromPointer)]
    pub fn set_sv_from_pointer(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.inner.set_sv_from_pointer(x, y, width, height);
    }

    #[wasm_bindgen(js_name = setFromRgb)]
    pub fn set_from_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.inner.set_from_rgb(Rgb::new(r, g, b));
    }

    #[wasm_bindgen(js_name = setFromHex)]
    pub fn set_from_hex(&mut self, hex: &str) -> Result<(), JsError> {
        Ok(self.inner.set_from_hex(hex)?)
    }

    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.inner.format().to_string()
    }

    #[wasm_bindgen(js_name = setFormat)]
    pub fn set_format(&mut self, format: &str) -> Result<(), JsError> {
        let format: Format = format.parse()?;
        self.inner.set_format(format);
        Ok(())
    }

    #[wasm_bindgen(js_name = applyInput)]
    pub fn apply_input(&mut self, input: &str) -> Result<(), JsError> {
        Ok(self.inner.apply_input(input)?)
    }

    #[wasm_bindgen(js_name = formattedValue)]
    pub fn formatted_value(&self) -> String {
        self.inner.formatted_value()
    }

    #[wasm_bindgen(js_name = wantsDarkCursor)]
    pub fn wants_dark_cursor(&self) -> bool {
        self.inner.wants_dark_cursor()
    }
}

impl Default for WasmPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Saved colors. Record lists come back as JSON arrays of
/// `{id, hex, r, g, b, a, name, createdAt}`.
#[wasm_bindgen]
pub struct WasmLibrary {
    inner: Library,
}

#[wasm_bindgen]
impl WasmLibrary {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WasmLibrary {
        WasmLibrary {
            inner: Library::new(seed as u64),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Saves a color expression and returns the new record as JSON.
    pub fn save(&mut self, color: &str, name: Option<String>, now_ms: f64) -> Result<String, JsError> {
        let rgb = cv::parse_color(color)?;
        let saved = self.inner.save(rgb, name.as_deref(), now_ms as u64)?;
        Ok(serde_json::to_string(saved)?)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.inner.delete(id)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn colors(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.inner.colors())?)
    }

    pub fn filter(&self, query: &str) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.filter(query))?)
    }

    /// `[[format, value], ...]` for the detail view of one saved color.
    pub fn detail(&self, id: &str) -> Result<String, JsError> {
        let color = self
            .inner
            .get(id)
            .ok_or_else(|| JsError::new(&format!("no saved color with id '{id}'")))?;
        Ok(serde_json::to_string(&self.inner.detail(color))?)
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsError> {
        Ok(self.inner.export_json()?)
    }

    /// Merges an export file's contents; returns how many colors were added.
    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&mut self, json: &str) -> Result<usize, JsError> {
        Ok(self.inner.import_json(json)?)
    }

    #[wasm_bindgen(getter, js_name = showNames)]
    pub fn show_names(&self) -> bool {
        self.inner.settings.show_names
    }

    #[wasm_bindgen(setter, js_name = showNames)]
    pub fn set_show_names(&mut self, on: bool) {
        self.inner.settings.show_names = on;
    }

    #[wasm_bindgen(getter, js_name = showAdvanced)]
    pub fn show_advanced(&self) -> bool {
        self.inner.settings.show_advanced
    }

    #[wasm_bindgen(setter, js_name = showAdvanced)]
    pub fn set_show_advanced(&mut self, on: bool) {
        self.inner.settings.show_advanced = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_use_plain_arrays() {
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), vec![0, 255, 0]);
        assert_eq!(rgb_to_hsl(255, 0, 0), vec![0, 100, 50]);
        assert_eq!(rgb_to_lab(255, 0, 0), vec![53, 80, 67]);
        assert_eq!(lab_to_lch(53, 80, 67), vec![53, 104, 40]);
        assert_eq!(rgb_to_hex(12, 34, 56), "#0C2238");
        assert_eq!(normalize_hex("abc").as_deref(), Some("#AABBCC"));
        assert_eq!(color_name("#DC2626"), "Rose");
    }

    #[test]
    fn formats_is_json() {
        let json = formats("#FF0000").unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["name"], "Red");
        assert_eq!(v["rgb"], "rgb(255, 0, 0)");
    }

    #[test]
    fn picker_tracks_pointer() {
        let mut picker = WasmPicker::new();
        picker.set_hue_from_pointer(120.0, 360.0);
        assert_eq!(picker.rgb(), vec![0, 255, 0]);
        assert_eq!(picker.hex(), "#00FF00");
    }

    #[test]
    fn library_save_and_export() {
        let mut lib = WasmLibrary::new(42.0);
        let saved = lib.save("#ff0000", None, 1_700_000_000_000.0).unwrap();
        assert!(saved.contains("\"createdAt\":1700000000000"));
        assert_eq!(lib.length(), 1);

        let mut other = WasmLibrary::new(7.0);
        assert_eq!(other.import_json(&lib.export_json().unwrap()).unwrap(), 1);
        other.set_show_advanced(false);
        assert!(!other.show_advanced());
    }
}
