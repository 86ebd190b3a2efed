//! The `collecticons bundle` command.

use std::{path::Path, time::Instant};

use anyhow::Result;
use collecticons_core::{BundleOptions, bundle};
use log::debug;

use crate::validate::validate_dir_path_cli;

pub fn run(dir_path: &Path, dest_file: &Path) -> Result<()> {
    validate_dir_path_cli(dir_path)?;
    debug!("bundling {} into {}", dir_path.display(), dest_file.display());

    let start = Instant::now();
    let written = bundle(BundleOptions {
        dir_path: dir_path.to_path_buf(),
        dest_file: dest_file.to_path_buf(),
    })?;

    match written {
        Some(path) => println!(
            "✓ bundle created at {} ({:.2}s)",
            path.display(),
            start.elapsed().as_secs_f64()
        ),
        None => println!("Nothing to do."),
    }
    Ok(())
}
