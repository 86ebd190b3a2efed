//! Directory validation with a command line suggestion.

use std::{env, path::Path};

use collecticons_core::{Error, ErrorCode, UserError, validate_dir_path};

/// Like [`validate_dir_path`], but when the path turns out to be a file
/// the message suggests rerunning with its parent directory instead,
/// reconstructing the rest of the invocation as typed.
pub fn validate_dir_path_cli(dir_path: &Path) -> Result<(), Error> {
    match validate_dir_path(dir_path) {
        Err(Error::User(user)) if user.code == ErrorCode::SrcNotDir => {
            Err(Error::User(suggest_parent(user.code, dir_path, env::args().skip(1))))
        }
        other => other,
    }
}

fn suggest_parent(
    code: ErrorCode,
    dir_path: &Path,
    args: impl Iterator<Item = String>,
) -> UserError {
    let parent = match dir_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
        _ => ".".to_string(),
    };
    let rebuilt: Vec<String> = args
        .map(|arg| if Path::new(&arg) == dir_path { parent.clone() } else { arg })
        .collect();

    UserError::new(
        code,
        [
            "Source path must be a directory. Try running with the following instead:".to_string(),
            String::new(),
            format!("  collecticons {}", rebuilt.join(" ")),
            String::new(),
        ],
    )
}
