//! The compile option surface, the defaults merge, and option validation.

use std::path::PathBuf;

use collecticons_font_builder::FontFormat;
use log::{debug, warn};

use crate::error::{Error, ErrorCode, Result, UserError};

/// Font types a user may request. TrueType and the SVG font exist only as
/// internal intermediates and never leave the generator.
const VALID_FONT_TYPES: [FontFormat; 2] = [FontFormat::Woff, FontFormat::Woff2];

/// Stylesheet formats the renderers can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFormat {
    Css,
    Sass,
}

impl StyleFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "css" => Some(Self::Css),
            "sass" => Some(Self::Sass),
            _ => None,
        }
    }
}

/// User-supplied compile options. Every unset field falls back to its
/// default during [`merge_defaults`]; format lists stay strings here so
/// unsupported values surface as user errors, not parse failures.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub dir_path: PathBuf,
    pub font_name: Option<String>,
    pub font_types: Option<Vec<String>>,
    /// Unset means fonts are embedded into the stylesheets and no
    /// standalone font file is written.
    pub font_dest: Option<PathBuf>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub class_name: Option<String>,
    pub style_name: Option<String>,
    pub style_formats: Option<Vec<String>>,
    pub style_dest: Option<PathBuf>,
    pub sass_placeholder: Option<bool>,
    pub css_class: Option<bool>,
    pub preview: Option<bool>,
    pub preview_dest: Option<PathBuf>,
    /// Unset means no catalog is generated.
    pub catalog_dest: Option<PathBuf>,
    pub rescale: Option<bool>,
    /// Experimental: include base64 font binaries in the catalog.
    pub font_on_catalog: Option<bool>,
    /// In-memory mode: return virtual files instead of writing them.
    pub no_file_output: Option<bool>,
}

impl CompileOptions {
    pub fn new(dir_path: impl Into<PathBuf>) -> Self {
        Self { dir_path: dir_path.into(), ..Self::default() }
    }
}

/// Fully-resolved, immutable options the pipeline runs on.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub dir_path: PathBuf,
    pub font_name: String,
    pub font_types: Vec<String>,
    pub font_dest: Option<PathBuf>,
    pub author_name: String,
    pub author_url: String,
    pub class_name: String,
    pub style_name: String,
    pub style_formats: Vec<String>,
    pub style_dest: PathBuf,
    pub sass_placeholder: bool,
    pub css_class: bool,
    pub preview: bool,
    pub preview_dest: PathBuf,
    pub catalog_dest: Option<PathBuf>,
    pub rescale: bool,
    pub font_on_catalog: bool,
    pub no_file_output: bool,
}

/// Fills every unset field with its default. User values always win; this
/// is a pure function and the only place defaults live.
pub fn merge_defaults(options: CompileOptions) -> ResolvedOptions {
    ResolvedOptions {
        dir_path: options.dir_path,
        font_name: options.font_name.unwrap_or_else(|| "collecticons".to_string()),
        font_types: options.font_types.unwrap_or_else(|| vec!["woff2".to_string()]),
        font_dest: options.font_dest,
        author_name: options.author_name.unwrap_or_else(|| "Development Seed".to_string()),
        author_url: options
            .author_url
            .unwrap_or_else(|| "https://developmentseed.org/".to_string()),
        class_name: options.class_name.unwrap_or_else(|| "collecticons".to_string()),
        style_name: options.style_name.unwrap_or_else(|| "icons".to_string()),
        style_formats: options.style_formats.unwrap_or_else(|| vec!["sass".to_string()]),
        style_dest: options.style_dest.unwrap_or_else(|| PathBuf::from("collecticons/styles/")),
        sass_placeholder: options.sass_placeholder.unwrap_or(true),
        css_class: options.css_class.unwrap_or(true),
        preview: options.preview.unwrap_or(true),
        preview_dest: options.preview_dest.unwrap_or_else(|| PathBuf::from("collecticons/")),
        catalog_dest: options.catalog_dest,
        rescale: options.rescale.unwrap_or(false),
        font_on_catalog: options.font_on_catalog.unwrap_or(false),
        no_file_output: options.no_file_output.unwrap_or(false),
    }
}

/// Checks option compatibility and parses the format enumerations. Runs
/// before anything is read or written.
pub fn validate_options(opts: &ResolvedOptions) -> Result<(Vec<FontFormat>, Vec<StyleFormat>)> {
    if !opts.sass_placeholder && !opts.css_class {
        return Err(user_error(
            ErrorCode::PlaceholderClassConflict,
            "Error: sassPlaceholder and/or cssClass are required",
        ));
    }

    debug!("font types: {:?}", opts.font_types);
    let font_types = opts
        .font_types
        .iter()
        .map(|name| FontFormat::from_name(name).filter(|f| VALID_FONT_TYPES.contains(f)))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| user_error(ErrorCode::InvalidFontType, "Error: invalid font type value"))?;

    debug!("style formats: {:?}", opts.style_formats);
    let style_formats = opts
        .style_formats
        .iter()
        .map(|name| StyleFormat::from_name(name))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            user_error(ErrorCode::InvalidStyleFormat, "Error: invalid style format value")
        })?;

    if !opts.css_class {
        if style_formats == [StyleFormat::Css] {
            return Err(user_error(
                ErrorCode::ClassCssFormatConflict,
                "Error: cssClass can not be false when styleFormats is only css",
            ));
        }
        if style_formats.contains(&StyleFormat::Css) {
            warn!("cssClass is disabled but css cannot express placeholders; ignored for the css style format");
        }
    }

    Ok((font_types, style_formats))
}

fn user_error(code: ErrorCode, detail: &str) -> Error {
    Error::User(UserError::new(code, [detail]))
}
