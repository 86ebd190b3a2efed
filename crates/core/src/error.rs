//! Error taxonomy for the compile and bundle pipelines.
//!
//! User mistakes carry a stable code plus printable message lines; renderer
//! contract violations are programming errors; filesystem and archive
//! failures propagate unmodified.

use std::fmt;

/// Result type for compile and bundle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable machine-readable codes carried by [`UserError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Source path does not exist.
    SrcNotFound,
    /// Source path exists but is not a directory.
    SrcNotDir,
    /// Both the sass placeholder and the css class output are disabled.
    PlaceholderClassConflict,
    /// A requested font type is outside the supported set.
    InvalidFontType,
    /// A requested style format is outside the supported set.
    InvalidStyleFormat,
    /// css is the only style format but css classes are disabled.
    ClassCssFormatConflict,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SrcNotFound => "SRC_NOT_FOUND",
            Self::SrcNotDir => "SRC_NOT_DIR",
            Self::PlaceholderClassConflict => "PLC_CLASS_EXC",
            Self::InvalidFontType => "FONT_TYPE",
            Self::InvalidStyleFormat => "STYLE_TYPE",
            Self::ClassCssFormatConflict => "CLASS_CSS_FORMAT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A terminal, user-facing failure: a stable code plus the message lines a
/// command line front end should print. Never rendered as a backtrace.
#[derive(Debug)]
pub struct UserError {
    pub code: ErrorCode,
    pub details: Vec<String>,
}

impl UserError {
    pub fn new(code: ErrorCode, details: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { code, details: details.into_iter().map(Into::into).collect() }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.details.join(" ").trim_end())
    }
}

impl std::error::Error for UserError {}

/// Errors that can occur while compiling or bundling an icon set.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    User(#[from] UserError),

    /// A renderer was called without a required context field. This is an
    /// integration error, not something a user can cause.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    FontBuild(#[from] collecticons_font_builder::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}
