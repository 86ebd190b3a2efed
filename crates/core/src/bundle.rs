//! Bundling: compile in memory, then zip the artifacts with the sources.

use std::{
    fs::{File, create_dir_all, read},
    io::Write,
    path::{Component, Path, PathBuf},
};

use rayon::prelude::*;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{
    compile::{Compiled, compile},
    error::Result,
    icons::discover_icons,
    options::CompileOptions,
    validate::validate_dir_path,
    vfs::VirtualFile,
};

/// Source directory and destination archive for a bundle run.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    pub dir_path: PathBuf,
    pub dest_file: PathBuf,
}

/// Compiles the icon set with the fixed bundle profile (css stylesheet,
/// woff and woff2 fonts at the archive root, preview page, per-icon
/// rescaling) and writes a deflate-compressed zip holding the generated
/// files plus every source SVG under `icons/`. Returns the archive path,
/// or `None` when the directory holds no icons and nothing was written.
pub fn bundle(options: BundleOptions) -> Result<Option<PathBuf>> {
    validate_dir_path(&options.dir_path)?;

    let compiled = compile(CompileOptions {
        font_types: Some(vec!["woff".to_string(), "woff2".to_string()]),
        font_dest: Some(PathBuf::from(".")),
        style_formats: Some(vec!["css".to_string()]),
        style_dest: Some(PathBuf::from("styles")),
        preview_dest: Some(PathBuf::from(".")),
        rescale: Some(true),
        no_file_output: Some(true),
        ..CompileOptions::new(&options.dir_path)
    })?;

    let files = match compiled {
        Compiled::Empty => return Ok(None),
        Compiled::InMemory(files) => files,
        Compiled::Written(_) => unreachable!("the bundle profile compiles in memory"),
    };

    let sources = discover_icons(&options.dir_path)?
        .par_iter()
        .map(|icon| -> Result<VirtualFile> {
            Ok(VirtualFile {
                path: PathBuf::from("icons").join(icon.file.file_name().unwrap_or_default()),
                contents: read(&icon.file)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(parent) = options.dest_file.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }

    let mut zip = ZipWriter::new(File::create(&options.dest_file)?);
    let zip_options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for file in files.iter().chain(&sources) {
        zip.start_file(entry_name(&file.path), zip_options)?;
        zip.write_all(&file.contents)?;
    }
    zip.finish()?;
    Ok(Some(options.dest_file))
}

/// Zip entry name for an output path: forward slashes, no `.` segments.
fn entry_name(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
