//! Virtual files: in-memory output artifacts and the disk writer.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use crate::error::Result;

/// A generated artifact that has not been persisted yet. Every output of
/// the pipeline (font binary, stylesheet, preview, catalog) takes this
/// shape before it is written to disk or zipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// Writes every file, creating parent directories as needed, and returns
/// the written paths in order.
pub fn write_files(files: &[VirtualFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        if let Some(parent) = file.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file.path, &file.contents)?;
        written.push(file.path.clone());
    }
    Ok(written)
}

/// Relative route from one output directory to another, with forward
/// slashes, suitable for a stylesheet url. Both sides are compared as
/// written in the options; `.` segments are dropped.
pub(crate) fn relative_url(from: &Path, to: &Path) -> String {
    let keep = |c: &Component<'_>| !matches!(c, Component::CurDir);
    let from: Vec<_> = from.components().filter(keep).collect();
    let to: Vec<_> = to.components().filter(keep).collect();

    let common = from.iter().zip(&to).take_while(|(a, b)| *a == *b).count();
    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(to[common..].iter().map(|c| c.as_os_str().to_string_lossy().into_owned()));
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let files = [VirtualFile {
            path: dir.path().join("a/b/icons.css"),
            contents: b"body {}".to_vec(),
        }];

        let written = write_files(&files).unwrap();
        assert_eq!(written, vec![dir.path().join("a/b/icons.css")]);
        assert_eq!(fs::read(&written[0]).unwrap(), b"body {}");
    }

    #[test]
    fn test_relative_url_to_sibling() {
        assert_eq!(relative_url(Path::new("out/styles"), Path::new("out/fonts")), "../fonts");
    }

    #[test]
    fn test_relative_url_to_parent() {
        assert_eq!(relative_url(Path::new("styles"), Path::new(".")), "..");
    }

    #[test]
    fn test_relative_url_same_directory() {
        assert_eq!(relative_url(Path::new("out"), Path::new("out")), "");
    }

    #[test]
    fn test_relative_url_into_child() {
        assert_eq!(relative_url(Path::new("."), Path::new("fonts")), "fonts");
    }
}
