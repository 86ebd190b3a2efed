//! The `collecticons compile` command.

use std::time::Instant;

use anyhow::Result;
use collecticons_core::{Compiled, CompileOptions, compile};
use log::debug;

use crate::{cli::CompileArgs, errors::reword_for_cli, validate::validate_dir_path_cli};

pub fn run(args: CompileArgs) -> Result<()> {
    validate_dir_path_cli(&args.dir_path)?;
    debug!("compiling {} with {args:?}", args.dir_path.display());

    let start = Instant::now();
    let options = CompileOptions {
        font_name: args.font_name,
        font_types: args.font_types,
        font_dest: args.font_dest,
        author_name: args.author_name,
        author_url: args.author_url,
        class_name: args.class_name,
        style_name: args.style_name,
        style_formats: args.style_formats,
        style_dest: args.style_dest,
        sass_placeholder: args.no_sass_placeholder.then_some(false),
        css_class: args.no_css_class.then_some(false),
        preview: args.no_preview.then_some(false),
        preview_dest: args.preview_dest,
        catalog_dest: args.catalog_dest,
        rescale: args.rescale.then_some(true),
        font_on_catalog: args.experimental_font_on_catalog.then_some(true),
        ..CompileOptions::new(args.dir_path)
    };

    match compile(options).map_err(reword_for_cli)? {
        Compiled::Empty => println!("Nothing to do."),
        Compiled::Written(paths) => {
            for path in &paths {
                println!("  {}", path.display());
            }
            println!("✓ {} files written ({:.2}s)", paths.len(), start.elapsed().as_secs_f64());
        }
        // The CLI never asks for in-memory output.
        Compiled::InMemory(_) => {}
    }
    Ok(())
}
