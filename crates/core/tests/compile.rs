//! Compile pipeline checks over temporary icon directories.

use std::{fs, path::Path};

use collecticons_core::{Compiled, CompileOptions, Error, ErrorCode, compile};
use tempfile::TempDir;

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

fn user_code(result: collecticons_core::Result<Compiled>) -> ErrorCode {
    match result {
        Err(Error::User(user)) => user.code,
        other => panic!("expected user error, got {other:?}"),
    }
}

fn in_memory(result: collecticons_core::Result<Compiled>) -> Vec<collecticons_core::VirtualFile> {
    match result {
        Ok(Compiled::InMemory(files)) => files,
        other => panic!("expected in-memory files, got {other:?}"),
    }
}

#[test]
fn test_placeholder_class_conflict_fails_for_any_directory() {
    let dir = icon_dir(&["book"]);
    let code = user_code(compile(CompileOptions {
        sass_placeholder: Some(false),
        css_class: Some(false),
        ..CompileOptions::new(dir.path())
    }));
    assert_eq!(code, ErrorCode::PlaceholderClassConflict);
}

#[test]
fn test_css_only_without_classes_fails() {
    let dir = icon_dir(&["book"]);
    let code = user_code(compile(CompileOptions {
        css_class: Some(false),
        style_formats: Some(vec!["css".to_string()]),
        ..CompileOptions::new(dir.path())
    }));
    assert_eq!(code, ErrorCode::ClassCssFormatConflict);
}

#[test]
fn test_unsupported_enumerations_fail_before_output() {
    let dir = icon_dir(&["book"]);
    let out = TempDir::new().unwrap();
    let dest = out.path().join("styles");

    let code = user_code(compile(CompileOptions {
        font_types: Some(vec!["eot".to_string()]),
        style_dest: Some(dest.clone()),
        ..CompileOptions::new(dir.path())
    }));
    assert_eq!(code, ErrorCode::InvalidFontType);

    let code = user_code(compile(CompileOptions {
        style_formats: Some(vec!["less".to_string()]),
        style_dest: Some(dest.clone()),
        ..CompileOptions::new(dir.path())
    }));
    assert_eq!(code, ErrorCode::InvalidStyleFormat);

    assert!(!dest.exists());
}

#[test]
fn test_missing_directory_fails_with_not_found() {
    let dir = TempDir::new().unwrap();
    let code = user_code(compile(CompileOptions::new(dir.path().join("missing"))));
    assert_eq!(code, ErrorCode::SrcNotFound);
}

#[test]
fn test_directory_without_icons_is_empty_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("readme.md"), "not an icon").unwrap();
    let out = TempDir::new().unwrap();
    let dest = out.path().join("no-output");

    let outcome = compile(CompileOptions {
        style_dest: Some(dest.clone()),
        preview_dest: Some(dest.clone()),
        ..CompileOptions::new(dir.path())
    })
    .unwrap();

    assert!(matches!(outcome, Compiled::Empty));
    assert!(!dest.exists());
}

#[test]
fn test_default_profile_emits_stylesheet_and_preview_only() {
    let dir = icon_dir(&["book", "chevron-left"]);

    let files = in_memory(compile(CompileOptions {
        no_file_output: Some(true),
        ..CompileOptions::new(dir.path())
    }));

    let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            Path::new("collecticons/styles/icons.scss").to_path_buf(),
            Path::new("collecticons/preview.html").to_path_buf(),
        ]
    );

    // No font destination means the font is embedded in the stylesheet.
    let scss = String::from_utf8(files[0].contents.clone()).unwrap();
    assert!(scss.contains("data:font/woff2;base64,"));
}

#[test]
fn test_written_outputs_follow_their_destinations() {
    let dir = icon_dir(&["book", "chevron-left"]);
    let out = TempDir::new().unwrap();

    let outcome = compile(CompileOptions {
        font_types: Some(vec!["woff".to_string(), "woff2".to_string()]),
        font_dest: Some(out.path().join("fonts")),
        style_formats: Some(vec!["sass".to_string(), "css".to_string()]),
        style_dest: Some(out.path().join("styles")),
        preview_dest: Some(out.path().join("preview")),
        catalog_dest: Some(out.path().join("catalog")),
        ..CompileOptions::new(dir.path())
    })
    .unwrap();

    let written = match outcome {
        Compiled::Written(paths) => paths,
        other => panic!("expected written paths, got {other:?}"),
    };
    assert_eq!(written.len(), 5);

    for relative in [
        "fonts/collecticons.woff",
        "fonts/collecticons.woff2",
        "styles/icons.scss",
        "styles/icons.css",
        "preview/preview.html",
        "catalog/catalog.json",
    ] {
        assert!(out.path().join(relative).exists(), "missing {relative}");
    }

    // Standalone fonts mean the stylesheet references them by relative path.
    let css = fs::read_to_string(out.path().join("styles/icons.css")).unwrap();
    assert!(css.contains("url(\"../fonts/collecticons.woff2\")"));
    assert!(!css.contains("base64"));
}

#[test]
fn test_written_font_files_carry_container_signatures() {
    let dir = icon_dir(&["book"]);
    let out = TempDir::new().unwrap();

    compile(CompileOptions {
        font_types: Some(vec!["woff".to_string(), "woff2".to_string()]),
        font_dest: Some(out.path().to_path_buf()),
        ..CompileOptions::new(dir.path())
    })
    .unwrap();

    let woff = fs::read(out.path().join("collecticons.woff")).unwrap();
    let woff2 = fs::read(out.path().join("collecticons.woff2")).unwrap();
    assert_eq!(&woff[0..4], b"wOFF");
    assert_eq!(&woff2[0..4], b"wOF2");
}

#[test]
fn test_custom_names_rename_every_artifact() {
    let dir = icon_dir(&["book"]);
    let out = TempDir::new().unwrap();

    compile(CompileOptions {
        font_name: Some("custom".to_string()),
        font_types: Some(vec!["woff2".to_string()]),
        font_dest: Some(out.path().to_path_buf()),
        style_name: Some("custom".to_string()),
        style_formats: Some(vec!["sass".to_string(), "css".to_string()]),
        style_dest: Some(out.path().to_path_buf()),
        preview_dest: Some(out.path().to_path_buf()),
        ..CompileOptions::new(dir.path())
    })
    .unwrap();

    for name in ["custom.woff2", "custom.scss", "custom.css", "preview.html"] {
        assert!(out.path().join(name).exists(), "missing {name}");
    }
}

#[test]
fn test_catalog_reflects_sorted_codepoint_assignment() {
    // Written out of order; discovery sorts by file name.
    let dir = icon_dir(&["pencil", "book", "chevron-left"]);

    let files = in_memory(compile(CompileOptions {
        preview: Some(false),
        catalog_dest: Some("catalog".into()),
        no_file_output: Some(true),
        ..CompileOptions::new(dir.path())
    }));

    let catalog = files.iter().find(|f| f.path.ends_with("catalog.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&catalog.contents).unwrap();

    let icons = doc["icons"].as_array().unwrap();
    assert_eq!(icons.len(), 3);
    assert_eq!(icons[0]["icon"], "collecticons-book");
    assert_eq!(icons[0]["charCode"], "\\F101");
    assert_eq!(icons[1]["icon"], "collecticons-chevron-left");
    assert_eq!(icons[1]["charCode"], "\\F102");
    assert_eq!(icons[2]["icon"], "collecticons-pencil");
    assert_eq!(icons[2]["charCode"], "\\F103");
    assert!(doc.get("fonts").is_none());
}

#[test]
fn test_font_on_catalog_includes_base64_fonts() {
    let dir = icon_dir(&["book"]);

    let files = in_memory(compile(CompileOptions {
        preview: Some(false),
        catalog_dest: Some("catalog".into()),
        font_on_catalog: Some(true),
        no_file_output: Some(true),
        ..CompileOptions::new(dir.path())
    }));

    let catalog = files.iter().find(|f| f.path.ends_with("catalog.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&catalog.contents).unwrap();
    assert!(doc["fonts"]["woff2"].as_str().unwrap().len() > 16);
}

#[test]
fn test_repeat_compiles_are_identical_outside_font_containers() {
    let dir = icon_dir(&["book", "chevron-left"]);

    let run = || {
        in_memory(compile(CompileOptions {
            font_dest: Some("fonts".into()),
            catalog_dest: Some("catalog".into()),
            no_file_output: Some(true),
            ..CompileOptions::new(dir.path())
        }))
    };
    let first = run();
    let second = run();

    let paths = |files: &[collecticons_core::VirtualFile]| {
        files.iter().map(|f| f.path.clone()).collect::<Vec<_>>()
    };
    assert_eq!(paths(&first), paths(&second));

    // Font containers carry a build timestamp; every text artifact that
    // does not embed them must be byte-identical.
    for (a, b) in first.iter().zip(&second) {
        let text = matches!(
            a.path.extension().and_then(|e| e.to_str()),
            Some("scss") | Some("json")
        );
        if text {
            assert_eq!(a.contents, b.contents, "differs: {}", a.path.display());
        }
    }
}
