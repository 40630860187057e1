use super::*;

use std::fs;

use tempfile::TempDir;

fn touch(dir: &TempDir, relative: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, "content\n").expect("write fixture");
}

fn default_extensions() -> Vec<String> {
    vec![".rst".to_string(), ".txt".to_string()]
}

fn no_filter() -> IgnoreFilter {
    IgnoreFilter::new(&[]).expect("empty filter")
}

#[test]
fn finds_matching_extensions_only() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a.rst");
    touch(&dir, "b.txt");
    touch(&dir, "c.md");

    let found = find_files(
        &[dir.path().to_path_buf()],
        &default_extensions(),
        &no_filter(),
    )
    .unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.rst", "b.txt"]);
}

#[test]
fn recurses_into_subdirectories() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "top.rst");
    touch(&dir, "sub/inner.rst");
    touch(&dir, "sub/deeper/leaf.txt");

    let found = find_files(
        &[dir.path().to_path_buf()],
        &default_extensions(),
        &no_filter(),
    )
    .unwrap();
    assert_eq!(found.len(), 3);
}

#[test]
fn discovery_order_is_deterministic() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "b.rst");
    touch(&dir, "a.rst");
    touch(&dir, "c.rst");

    let found = find_files(
        &[dir.path().to_path_buf()],
        &default_extensions(),
        &no_filter(),
    )
    .unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.rst", "b.rst", "c.rst"]);
}

#[test]
fn direct_file_path_is_accepted() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "single.rst");

    let found = find_files(
        &[dir.path().join("single.rst")],
        &default_extensions(),
        &no_filter(),
    )
    .unwrap();
    assert_eq!(found.len(), 1);
    assert!(!found[0].1);
}

#[test]
fn direct_file_with_unmatched_extension_is_skipped() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "notes.md");

    let found = find_files(
        &[dir.path().join("notes.md")],
        &default_extensions(),
        &no_filter(),
    )
    .unwrap();
    assert!(found.is_empty());
}

#[test]
fn nonexistent_path_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = find_files(
        &[dir.path().join("missing")],
        &default_extensions(),
        &no_filter(),
    );
    assert!(matches!(result, Err(DocstyleError::InvalidPath(_))));
}

#[test]
fn ignored_files_are_flagged_not_dropped() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "keep.rst");
    touch(&dir, "skip.rst");

    let pattern = dir.path().join("skip.rst").to_string_lossy().into_owned();
    let filter = IgnoreFilter::new(&[pattern]).unwrap();
    let found = find_files(&[dir.path().to_path_buf()], &default_extensions(), &filter).unwrap();

    assert_eq!(found.len(), 2);
    let skip = found
        .iter()
        .find(|(p, _)| p.file_name().unwrap() == "skip.rst")
        .unwrap();
    assert!(skip.1);
    let keep = found
        .iter()
        .find(|(p, _)| p.file_name().unwrap() == "keep.rst")
        .unwrap();
    assert!(!keep.1);
}
