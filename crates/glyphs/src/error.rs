//! Error types for glyph loading.

use std::{io, path::PathBuf, result};

use read_fonts::ReadError;

/// Errors that can occur while opening a glyph source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("failed to parse codepoints: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid codepoint {codepoint:#x} for glyph '{name}'")]
    InvalidCodepoint { name: String, codepoint: i64 },
}

pub type Result<T> = result::Result<T, Error>;
