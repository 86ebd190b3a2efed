//! # Collecticons Core
//!
//! The icon-font compile pipeline: validate a source directory, discover
//! `.svg` icons, assign Private Use Area codepoints, drive font generation,
//! render stylesheet, preview and catalog artifacts, and either return them
//! in memory or write them to disk. The bundler runs the same pipeline in
//! memory and zips the result together with the source icons.
//!
//! ## Example
//!
//! ```no_run
//! use collecticons_core::{CompileOptions, compile};
//!
//! let outcome = compile(CompileOptions {
//!     style_formats: Some(vec!["css".to_string()]),
//!     ..CompileOptions::new("icons/")
//! })?;
//! # Ok::<(), collecticons_core::Error>(())
//! ```

pub mod bundle;
pub mod compile;
pub mod error;
pub mod icons;
pub mod options;
pub mod render;
pub mod validate;
pub mod vfs;

pub use bundle::{BundleOptions, bundle};
pub use compile::{Compiled, compile};
pub use error::{Error, ErrorCode, Result, UserError};
pub use icons::{CODEPOINT_START, Icon, discover_icons};
pub use options::{CompileOptions, ResolvedOptions, StyleFormat, merge_defaults, validate_options};
pub use validate::validate_dir_path;
pub use vfs::{VirtualFile, write_files};
