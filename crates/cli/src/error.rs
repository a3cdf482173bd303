//! Errors surfaced by the `chromavault` binary.
//!
//! | exit code | meaning |
//! |---|---|
//! | 0  | success |
//! | 2  | bad arguments (reported by clap) |
//! | 10 | library or render failure: duplicate color, empty or malformed library, bad size |
//! | 11 | file could not be read or written |
//! | 12 | color or notation the user typed was not understood |
//! | 13 | JSON output could not be produced |

use chromavault_core::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Color(ColorError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("json output failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// I/O failures inside the core crates keep the I/O exit code, and parse
/// failures count as bad input.
impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Io(msg) => CliError::Io(msg),
            ColorError::InvalidHex(_) | ColorError::InvalidColor(_) => CliError::Input(e.to_string()),
            other => CliError::Color(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
