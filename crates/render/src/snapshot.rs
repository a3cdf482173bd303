//! PNG output of rendered RGBA8 buffers.
//!
//! Feature-gated behind `png` (default on) so WASM builds can depend on this
//! crate without pulling in `image`.

use chromavault_core::ColorError;
use std::path::Path;

/// Writes an RGBA8 buffer as a PNG image.
///
/// Returns `ColorError::InvalidDimensions` if a dimension overflows `u32`,
/// or `ColorError::Io` if the buffer length does not match or writing fails.
pub fn write_png(rgba: Vec<u8>, width: usize, height: usize, path: &Path) -> Result<(), ColorError> {
    let w = u32::try_from(width).map_err(|_| ColorError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| ColorError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| ColorError::Io("RGBA buffer size mismatch".into()))?;
    tracing::debug!(path = %path.display(), width, height, "writing png");
    img.save(path).map_err(|e| ColorError::Io(e.to_string()))
}
