//! Text artifact renderers: stylesheets, the preview page, the catalog.
//!
//! Each renderer takes a context built per compile call and returns the
//! finished document. Missing required fields are integration errors and
//! surface as [`Error::MissingField`](crate::error::Error::MissingField).

mod catalog;
mod preview;
mod styles;

pub use catalog::{CatalogContext, render_catalog};
pub use preview::{PreviewContext, render_preview};
pub use styles::{render_css, render_sass};

use collecticons_font_builder::FontFormat;

use crate::{
    error::{Error, Result},
    icons::Icon,
};

/// One font a stylesheet should reference: raw bytes for embedding plus
/// the url to use when the font lives in its own file.
#[derive(Debug, Clone)]
pub struct StyleFont {
    pub format: FontFormat,
    pub contents: Vec<u8>,
    /// Relative url from the stylesheet to the font file. Unused when
    /// embedding.
    pub url: String,
}

/// Everything the stylesheet renderers need.
#[derive(Debug)]
pub struct StyleContext<'a> {
    pub font_name: &'a str,
    pub class_name: &'a str,
    /// Inline the font binaries as base64 data urls instead of referencing
    /// font files.
    pub embed: bool,
    /// Fonts to list as `src` entries, in order.
    pub fonts: &'a [StyleFont],
    pub author_name: &'a str,
    pub author_url: &'a str,
    pub icons: &'a [Icon],
    pub sass_placeholder: bool,
    pub css_class: bool,
    /// Human-formatted generation date for the header comment.
    pub date_formatted: &'a str,
}

fn require(present: bool, field: &'static str) -> Result<()> {
    if present { Ok(()) } else { Err(Error::MissingField(field)) }
}
