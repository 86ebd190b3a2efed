//! The compile pipeline: options in, virtual files (or files on disk) out.
//!
//! One straight-line sequence: merge defaults, validate the directory and
//! the options, discover icons, assign codepoints, generate the fonts,
//! render the text artifacts, then emit. The first failing step aborts the
//! rest.

use std::{fs, path::PathBuf};

use chrono::Local;
use collecticons_font_builder::{FontFormat, FontSet, IconSource, generate_fonts};
use log::{debug, warn};
use rayon::prelude::*;

use crate::{
    error::Result,
    icons::discover_icons,
    options::{CompileOptions, ResolvedOptions, StyleFormat, merge_defaults, validate_options},
    render::{
        CatalogContext, PreviewContext, StyleContext, StyleFont, render_catalog, render_css,
        render_preview, render_sass,
    },
    validate::validate_dir_path,
    vfs::{VirtualFile, relative_url, write_files},
};

/// Outcome of a compile run.
#[derive(Debug)]
pub enum Compiled {
    /// The source directory held no icons; nothing was generated. This is
    /// a designed non-error.
    Empty,
    /// In-memory mode: the generated artifacts, not persisted.
    InMemory(Vec<VirtualFile>),
    /// The paths written to disk, in emission order.
    Written(Vec<PathBuf>),
}

/// Compiles a directory of SVG icons into an icon font plus its text
/// artifacts, per `options`.
pub fn compile(options: CompileOptions) -> Result<Compiled> {
    let opts = merge_defaults(options);
    validate_dir_path(&opts.dir_path)?;
    let (font_types, style_formats) = validate_options(&opts)?;

    let icons = discover_icons(&opts.dir_path)?;
    debug!("found {} icons in {}", icons.len(), opts.dir_path.display());
    if icons.is_empty() {
        warn!("no icons found in {}", opts.dir_path.display());
        return Ok(Compiled::Empty);
    }

    let sources = icons
        .par_iter()
        .map(|icon| -> Result<IconSource> {
            Ok(IconSource {
                name: icon.name.clone(),
                codepoint: icon.codepoint,
                svg: fs::read_to_string(&icon.file)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // The preview always embeds the woff2, even when it was not requested.
    let mut formats = font_types.clone();
    if opts.preview && !formats.contains(&FontFormat::Woff2) {
        formats.push(FontFormat::Woff2);
    }
    let fonts = generate_fonts(&opts.font_name, &sources, &formats, opts.rescale)?;

    let style_fonts = style_fonts(&opts, &font_types, &fonts);
    let date_formatted = Local::now().format("%B %-d, %Y").to_string();
    let mut files = Vec::new();

    // Standalone font files exist only when a destination was given;
    // otherwise the binaries live inside the stylesheets.
    if let Some(font_dest) = &opts.font_dest {
        for format in &font_types {
            files.push(VirtualFile {
                path: font_dest.join(format!("{}.{}", opts.font_name, format.extension())),
                contents: fonts[format].clone(),
            });
        }
    }

    let ctx = StyleContext {
        font_name: &opts.font_name,
        class_name: &opts.class_name,
        embed: opts.font_dest.is_none(),
        fonts: &style_fonts,
        author_name: &opts.author_name,
        author_url: &opts.author_url,
        icons: &icons,
        sass_placeholder: opts.sass_placeholder,
        css_class: opts.css_class,
        date_formatted: &date_formatted,
    };
    for format in &style_formats {
        let (file_name, rendered) = match format {
            StyleFormat::Sass => (format!("{}.scss", opts.style_name), render_sass(&ctx)?),
            StyleFormat::Css => (format!("{}.css", opts.style_name), render_css(&ctx)?),
        };
        files.push(VirtualFile {
            path: opts.style_dest.join(file_name),
            contents: rendered.into_bytes(),
        });
    }

    if opts.preview {
        let preview = render_preview(&PreviewContext {
            font_name: &opts.font_name,
            class_name: &opts.class_name,
            icons: &icons,
            woff2: &fonts[&FontFormat::Woff2],
        })?;
        files.push(VirtualFile {
            path: opts.preview_dest.join("preview.html"),
            contents: preview.into_bytes(),
        });
    }

    if let Some(catalog_dest) = &opts.catalog_dest {
        let catalog = render_catalog(&CatalogContext {
            font_name: &opts.font_name,
            class_name: &opts.class_name,
            fonts: opts.font_on_catalog.then_some(style_fonts.as_slice()),
            icons: &icons,
        })?;
        files.push(VirtualFile {
            path: catalog_dest.join("catalog.json"),
            contents: catalog.into_bytes(),
        });
    }

    if opts.no_file_output {
        Ok(Compiled::InMemory(files))
    } else {
        Ok(Compiled::Written(write_files(&files)?))
    }
}

/// The fonts a stylesheet references: the requested types in `src` order
/// (woff2 first), with bytes for embedding and a relative url otherwise.
fn style_fonts(
    opts: &ResolvedOptions,
    font_types: &[FontFormat],
    fonts: &FontSet,
) -> Vec<StyleFont> {
    [FontFormat::Woff2, FontFormat::Woff]
        .into_iter()
        .filter(|format| font_types.contains(format))
        .map(|format| {
            let file_name = format!("{}.{}", opts.font_name, format.extension());
            let url = match &opts.font_dest {
                Some(dest) => {
                    let route = relative_url(&opts.style_dest, dest);
                    if route.is_empty() { file_name } else { format!("{route}/{file_name}") }
                }
                None => String::new(),
            };
            StyleFont { format, contents: fonts[&format].clone(), url }
        })
        .collect()
}
