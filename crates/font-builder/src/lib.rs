//! # Collecticons Font Builder
//!
//! Compile a set of SVG icons into an icon font. Every icon becomes one
//! glyph, mapped at its assigned codepoint; the result is a TrueType font
//! plus the containers derived from it (WOFF, WOFF2) and an SVG font as
//! the vector intermediate.
//!
//! ## Example
//!
//! ```no_run
//! use collecticons_font_builder::{FontFormat, IconSource, generate_fonts};
//!
//! let icons = vec![IconSource {
//!     name: "book".to_string(),
//!     codepoint: 0xF101,
//!     svg: std::fs::read_to_string("icons/book.svg").unwrap(),
//! }];
//! let fonts = generate_fonts("collecticons", &icons, &[FontFormat::Woff2], false).unwrap();
//! std::fs::write("collecticons.woff2", &fonts[&FontFormat::Woff2]).unwrap();
//! ```

use std::{collections::BTreeMap, fmt};

use rayon::prelude::*;

mod error;
mod glyph;
mod outline;
mod svgfont;
mod ttf;

pub use error::{Error, Result};

/// Design units per em for generated fonts.
pub const UNITS_PER_EM: u16 = 1024;

/// Output formats the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontFormat {
    Svg,
    Ttf,
    Woff,
    Woff2,
}

impl FontFormat {
    /// File extension, which doubles as the conventional format name.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Ttf => "ttf",
            Self::Woff => "woff",
            Self::Woff2 => "woff2",
        }
    }

    /// MIME type for data URLs and `@font-face` sources.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Ttf => "font/ttf",
            Self::Woff => "font/woff",
            Self::Woff2 => "font/woff2",
        }
    }

    /// Parses a format name as it appears in user-facing options.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "svg" => Some(Self::Svg),
            "ttf" => Some(Self::Ttf),
            "woff" => Some(Self::Woff),
            "woff2" => Some(Self::Woff2),
            _ => None,
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One icon to compile: display name, assigned codepoint, SVG text.
#[derive(Debug, Clone)]
pub struct IconSource {
    pub name: String,
    pub codepoint: u32,
    pub svg: String,
}

/// Generated font binaries keyed by format.
///
/// [`FontFormat::Svg`] and [`FontFormat::Ttf`] are always present; the web
/// containers appear when requested.
pub type FontSet = BTreeMap<FontFormat, Vec<u8>>;

/// Compiles `icons` into a font named `font_name`.
///
/// All formats derive from one glyph set, so the codepoint-to-glyph mapping
/// is identical across every returned format. With `rescale` each icon is
/// scaled to the full em height on its own; without it the set shares one
/// scale so relative icon sizes survive.
pub fn generate_fonts(
    font_name: &str,
    icons: &[IconSource],
    formats: &[FontFormat],
    rescale: bool,
) -> Result<FontSet> {
    if font_name.is_empty() {
        return Err(Error::EmptyFontName);
    }
    if icons.is_empty() {
        return Err(Error::NoIcons);
    }

    let outlines = icons
        .par_iter()
        .map(|icon| {
            outline::parse_outline(&icon.svg)
                .map_err(|source| Error::Svg { name: icon.name.clone(), source })
        })
        .collect::<Result<Vec<_>>>()?;

    let glyphs = glyph::normalize(icons, outlines, rescale);
    let ttf = ttf::build_ttf(font_name, &glyphs)?;

    let mut fonts = FontSet::new();
    if formats.contains(&FontFormat::Woff) {
        let woff = collecticons_font_woff::encode_woff(&ttf)
            .map_err(|source| Error::Container { format: FontFormat::Woff, source })?;
        fonts.insert(FontFormat::Woff, woff);
    }
    if formats.contains(&FontFormat::Woff2) {
        let woff2 = collecticons_font_woff::encode_woff2(&ttf)
            .map_err(|source| Error::Container { format: FontFormat::Woff2, source })?;
        fonts.insert(FontFormat::Woff2, woff2);
    }
    fonts.insert(FontFormat::Svg, svgfont::render_svg_font(font_name, &glyphs).into_bytes());
    fonts.insert(FontFormat::Ttf, ttf);
    Ok(fonts)
}
