//! WOFF and WOFF2 container encoders.
//!
//! Wraps a compiled TrueType font into the WOFF 1.0 (per-table zlib) and
//! WOFF 2.0 (single Brotli stream) web font containers. Tables are stored
//! without preprocessing transforms, so any conforming decoder reconstructs
//! the original tables unchanged.
//!
//! # Example
//!
//! ```no_run
//! use collecticons_font_woff::{encode_woff, encode_woff2};
//!
//! let ttf = std::fs::read("icons.ttf").unwrap();
//! let woff = encode_woff(&ttf).unwrap();
//! let woff2 = encode_woff2(&ttf).unwrap();
//! ```

mod error;
mod sfnt;
mod woff;
mod woff2;

pub use error::{Error, Result};
pub use woff::encode_woff;
pub use woff2::encode_woff2;
