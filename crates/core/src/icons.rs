//! Icon discovery and codepoint assignment.

use std::{
    io,
    path::{Path, PathBuf},
};

use crate::error::Result;

/// First assigned codepoint, at the start of the Unicode Private Use Area.
pub const CODEPOINT_START: u32 = 0xF101;

/// One discovered icon. Immutable for the rest of the compile call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub file: PathBuf,
    /// File name without the `.svg` extension.
    pub name: String,
    pub codepoint: u32,
}

/// Lists the `.svg` files directly under `dir` and assigns sequential
/// codepoints from [`CODEPOINT_START`]. Files are sorted by name first, so
/// the assignment does not depend on the directory-listing order of the
/// underlying filesystem. Subdirectories and non-svg entries are ignored.
pub fn discover_icons(dir: &Path) -> Result<Vec<Icon>> {
    let mut files = glob_svgs(dir)?;
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files
        .into_iter()
        .enumerate()
        .map(|(index, file)| {
            let name = file.file_stem().unwrap_or_default().to_string_lossy().into_owned();
            Icon { file, name, codepoint: CODEPOINT_START + index as u32 }
        })
        .collect())
}

fn glob_svgs(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = dir.to_str().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "source path is not valid UTF-8")
    })?;
    let pattern = format!("{}/*.svg", glob::Pattern::escape(dir));

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.msg))?
    {
        let path = entry.map_err(glob::GlobError::into_error)?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
