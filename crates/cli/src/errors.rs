//! Rewording of core user errors into their command line spelling.

use collecticons_core::{Error, ErrorCode};

/// Replaces the detail lines of option errors with flag-oriented wording;
/// everything else passes through unchanged.
pub fn reword_for_cli(err: Error) -> anyhow::Error {
    let err = match err {
        Error::User(mut user) => {
            let detail = match user.code {
                ErrorCode::PlaceholderClassConflict => {
                    Some("Error: --no-sass-placeholder and --no-css-class are mutually exclusive")
                }
                ErrorCode::InvalidFontType => {
                    Some("Error: invalid font type value passed to --font-types")
                }
                ErrorCode::InvalidStyleFormat => {
                    Some("Error: invalid style format value passed to --style-format")
                }
                ErrorCode::ClassCssFormatConflict => {
                    Some(r#"Error: "--no-css-class" and "--style-formats css" are not compatible"#)
                }
                _ => None,
            };
            if let Some(detail) = detail {
                user.details = vec![detail.to_string()];
            }
            Error::User(user)
        }
        other => other,
    };
    err.into()
}
