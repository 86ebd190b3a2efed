//! Error types for WOFF container encoding.

use std::{io, result};

use read_fonts::{ReadError, types::Tag};

/// Errors that can occur while wrapping a font into a WOFF container.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("font has no tables")]
    NoTables,

    #[error("table directory references missing table {0}")]
    MissingTable(Tag),

    #[error("compression failed: {0}")]
    Compress(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
