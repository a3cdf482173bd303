//! Pure-computation RGBA8 buffers for the picker surfaces.
//!
//! Every buffer is row-major, `width * height * 4` bytes, alpha always 255.

use chromavault_core::{hsv_to_rgb, ColorError, Hsv, Rgb};

/// Byte length of a `width x height` RGBA8 buffer, rejecting zero sizes
/// and overflow.
fn buffer_len(width: usize, height: usize) -> Result<usize, ColorError> {
    if width == 0 || height == 0 {
        return Err(ColorError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(ColorError::InvalidDimensions)
}

/// Position of `i` along an axis of `n` pixels as a fraction in [0, 1],
/// with the first pixel at 0 and the last at 1.
fn axis_fraction(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

fn fill<F>(width: usize, height: usize, mut color_at: F) -> Result<Vec<u8>, ColorError>
where
    F: FnMut(usize, usize) -> Rgb,
{
    let mut buf = Vec::with_capacity(buffer_len(width, height)?);
    for y in 0..height {
        for x in 0..width {
            let c = color_at(x, y);
            buf.extend_from_slice(&[c.r, c.g, c.b, 255]);
        }
    }
    Ok(buf)
}

/// The saturation/value plane for `hue`: saturation grows left to right,
/// value falls top to bottom. The top-left pixel is white, the top-right
/// the pure hue, the bottom row black.
pub fn saturation_plane(hue: f64, width: usize, height: usize) -> Result<Vec<u8>, ColorError> {
    tracing::trace!(hue, width, height, "rendering saturation plane");
    fill(width, height, |x, y| {
        hsv_to_rgb(Hsv {
            h: hue,
            s: axis_fraction(x, width),
            v: 1.0 - axis_fraction(y, height),
        })
    })
}

/// A horizontal strip sweeping the full hue circle at full saturation and
/// value. Column `x` has hue `360 * x / width`.
pub fn hue_strip(width: usize, height: usize) -> Result<Vec<u8>, ColorError> {
    tracing::trace!(width, height, "rendering hue strip");
    fill(width, height, |x, _| {
        hsv_to_rgb(Hsv {
            h: 360.0 * x as f64 / width as f64,
            s: 1.0,
            v: 1.0,
        })
    })
}

/// A solid block of one color.
pub fn swatch(color: Rgb, width: usize, height: usize) -> Result<Vec<u8>, ColorError> {
    fill(width, height, |_, _| color)
}
