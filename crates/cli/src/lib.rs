//! CLI internals for the `collecticons` binary.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod validate;
