//! Error types for icon font generation.

use std::result;

use write_fonts::BuilderError;

use crate::FontFormat;

/// Errors that can occur while compiling icons into a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing fontName argument")]
    EmptyFontName,

    #[error("invalid or empty icons argument")]
    NoIcons,

    #[error("failed to parse SVG for `{name}`: {source}")]
    Svg { name: String, source: usvg::Error },

    #[error("codepoint U+{0:X} is not a valid character")]
    InvalidCodepoint(u32),

    #[error("failed to build outline for `{name}`: {detail}")]
    Outline { name: String, detail: String },

    #[error("failed to build cmap: {0}")]
    Cmap(String),

    #[error("failed to assemble font: {0}")]
    Build(#[from] BuilderError),

    #[error("failed to encode {format}: {source}")]
    Container { format: FontFormat, source: collecticons_font_woff::Error },
}

pub type Result<T> = result::Result<T, Error>;
