#![deny(unsafe_code)]
//! CPU rendering of the picker surfaces for ChromaVault.
//!
//! The browser page and the CLI both need the same pixels: the
//! saturation/value plane for the current hue, the hue strip, and solid
//! swatches. [`pixel`] produces RGBA8 buffers (always available, used by the
//! WASM `ImageData` path); [`snapshot`] writes them as PNG files behind the
//! `png` feature.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{hue_strip, saturation_plane, swatch};
