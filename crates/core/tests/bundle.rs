//! Bundle checks: archive creation and the exact entry set.

use std::{collections::BTreeSet, fs, fs::File, io::Read};

use collecticons_core::{BundleOptions, bundle};
use tempfile::TempDir;
use zip::ZipArchive;

fn svg(size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}"><path d="M0 0H{size}V{size}H0Z"/></svg>"#
    )
}

fn icon_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        fs::write(dir.path().join(format!("{name}.svg")), svg(16)).unwrap();
    }
    dir
}

#[test]
fn test_no_icons_means_no_archive() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("readme.md"), "not an icon").unwrap();
    let out = TempDir::new().unwrap();
    let dest = out.path().join("bundle/collecticons.zip");

    let written =
        bundle(BundleOptions { dir_path: dir.path().to_path_buf(), dest_file: dest.clone() })
            .unwrap();

    assert_eq!(written, None);
    assert!(!dest.exists());
}

#[test]
fn test_stale_destination_is_not_reported_as_written() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let dest = out.path().join("collecticons.zip");
    fs::write(&dest, b"left over from an earlier run").unwrap();

    let written =
        bundle(BundleOptions { dir_path: dir.path().to_path_buf(), dest_file: dest.clone() })
            .unwrap();

    assert_eq!(written, None);
    assert_eq!(fs::read(&dest).unwrap(), b"left over from an earlier run");
}

#[test]
fn test_archive_entry_set_is_exact() {
    let dir = icon_dir(&["book", "chevron-left"]);
    let out = TempDir::new().unwrap();
    let dest = out.path().join("bundle/collecticons.zip");

    let written =
        bundle(BundleOptions { dir_path: dir.path().to_path_buf(), dest_file: dest.clone() })
            .unwrap();
    assert_eq!(written, Some(dest.clone()));

    let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
    let names: BTreeSet<String> = archive.file_names().map(str::to_string).collect();
    let expected: BTreeSet<String> = [
        "collecticons.woff",
        "collecticons.woff2",
        "styles/icons.css",
        "preview.html",
        "icons/book.svg",
        "icons/chevron-left.svg",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    assert_eq!(names, expected);

    // Source icons are archived unmodified.
    let mut entry = archive.by_name("icons/book.svg").unwrap();
    let mut contents = String::new();
    entry.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, svg(16));
}

#[test]
fn test_bundled_stylesheet_references_the_archived_fonts() {
    let dir = icon_dir(&["book"]);
    let out = TempDir::new().unwrap();
    let dest = out.path().join("collecticons.zip");

    bundle(BundleOptions { dir_path: dir.path().to_path_buf(), dest_file: dest.clone() }).unwrap();

    let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
    let mut css = String::new();
    archive.by_name("styles/icons.css").unwrap().read_to_string(&mut css).unwrap();

    // Fonts sit at the archive root, one level above the stylesheet.
    assert!(css.contains("url(\"../collecticons.woff2\") format(\"woff2\")"));
    assert!(css.contains("url(\"../collecticons.woff\") format(\"woff\")"));
    assert!(!css.contains("base64"));
}

#[test]
fn test_missing_source_directory_fails() {
    let dir = TempDir::new().unwrap();
    let result = bundle(BundleOptions {
        dir_path: dir.path().join("missing"),
        dest_file: dir.path().join("collecticons.zip"),
    });

    assert!(matches!(result, Err(collecticons_core::Error::User(_))));
}
