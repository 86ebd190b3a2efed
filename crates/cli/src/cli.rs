//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::commands::{bundle, compile};

#[derive(Parser)]
#[command(name = "collecticons")]
#[command(about = "Compile a folder of SVG icons into an icon font")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Directory holding the source SVG icons.
    pub dir_path: PathBuf,

    /// Name of the font and of the generated font files.
    #[arg(long)]
    pub font_name: Option<String>,
    /// Font formats to generate (woff, woff2).
    #[arg(long, value_delimiter = ',')]
    pub font_types: Option<Vec<String>>,
    /// Write standalone font files here instead of embedding them.
    #[arg(long)]
    pub font_dest: Option<PathBuf>,
    /// Author name for the stylesheet header.
    #[arg(long)]
    pub author_name: Option<String>,
    /// Author url for the stylesheet header.
    #[arg(long)]
    pub author_url: Option<String>,
    /// Class name / sass placeholder prefix.
    #[arg(long)]
    pub class_name: Option<String>,
    /// Base name of the generated stylesheets.
    #[arg(long)]
    pub style_name: Option<String>,
    /// Stylesheet formats to generate (css, sass).
    #[arg(long, value_delimiter = ',')]
    pub style_formats: Option<Vec<String>>,
    /// Destination directory for the stylesheets.
    #[arg(long)]
    pub style_dest: Option<PathBuf>,
    /// Skip the sass placeholder selectors.
    #[arg(long)]
    pub no_sass_placeholder: bool,
    /// Skip the css class selectors.
    #[arg(long)]
    pub no_css_class: bool,
    /// Destination directory for the preview page.
    #[arg(long)]
    pub preview_dest: Option<PathBuf>,
    /// Skip the preview page.
    #[arg(long)]
    pub no_preview: bool,
    /// Write a catalog.json to this directory.
    #[arg(long)]
    pub catalog_dest: Option<PathBuf>,
    /// Scale every icon to the full em height on its own.
    #[arg(long)]
    pub rescale: bool,
    /// Include base64 font binaries in the catalog.
    #[arg(long)]
    pub experimental_font_on_catalog: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile SVG icons into an icon font plus stylesheets.
    Compile {
        #[command(flatten)]
        args: CompileArgs,
    },
    /// Compile with a fixed profile and zip everything up.
    Bundle {
        /// Directory holding the source SVG icons.
        dir_path: PathBuf,
        /// Destination of the zip file.
        dest_file: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Compile { args } => compile::run(args),
            Commands::Bundle { dir_path, dest_file } => bundle::run(&dir_path, &dest_file),
        }
    }
}
