//! Source directory validation.

use std::{io, path::Path};

use crate::error::{Error, ErrorCode, Result, UserError};

/// Fails when `path` is missing or is not a directory. The two cases carry
/// different codes because their user-facing messages differ downstream.
/// Other stat failures (permissions and the like) propagate unmodified.
pub fn validate_dir_path(path: &Path) -> Result<()> {
    match path.symlink_metadata() {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::User(UserError::new(
            ErrorCode::SrcNotDir,
            ["Source path must be a directory".to_string(), String::new()],
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::User(UserError::new(
            ErrorCode::SrcNotFound,
            [format!("No files or directories found at {}", path.display()), String::new()],
        ))),
        Err(err) => Err(Error::Io(err)),
    }
}
