//! Error types for the ChromaVault core.

use thiserror::Error;

/// Errors produced by parsing, library and rendering operations.
///
/// The pure converters never fail; hex validation reports failure through
/// `bool`/`Option` instead. This type covers everything that can.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex color string was malformed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A color expression (`rgb(...)`, `hsl(...)`, ...) could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Width or height was zero, or the pixel buffer size overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The library already holds a color with this hex value.
    #[error("color already saved: {0}")]
    DuplicateColor(String),

    /// Export was requested for a library with no colors.
    #[error("no colors to export")]
    EmptyLibrary,

    /// An imported library file was not a JSON array of color records.
    #[error("invalid library file: {0}")]
    InvalidLibrary(String),

    /// Writing or reading a file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
