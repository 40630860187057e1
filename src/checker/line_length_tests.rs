use super::*;

use std::fs;

use tempfile::TempDir;

fn doc(dir: &TempDir, name: &str, content: &str) -> Document {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    Document::load(path, None, "").expect("load document")
}

fn long_words() -> String {
    "word ".repeat(18).trim_end().to_string() + " tail"
}

#[test]
fn long_paragraph_line_fires() {
    let dir = TempDir::new().unwrap();
    let line = long_words();
    assert!(line.chars().count() > 79);
    let mut document = doc(&dir, "a.rst", &format!("{line}\n"));
    let check = CheckMaxLineLength::new(&Config::default());
    let found = check.report(&mut document).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "D001");
    assert_eq!(found[0].line, Some(1));
}

#[test]
fn literal_block_line_is_exempt() {
    let dir = TempDir::new().unwrap();
    let long = long_words();
    let content = format!("Example::\n\n    {long}\n");
    let mut document = doc(&dir, "a.rst", &content);
    let check = CheckMaxLineLength::new(&Config::default());
    assert!(check.report(&mut document).unwrap().is_empty());
}

#[test]
fn directive_region_line_is_exempt() {
    let dir = TempDir::new().unwrap();
    let long = long_words();
    let content = format!(".. note::\n\n   {long}\n");
    let mut document = doc(&dir, "a.rst", &content);
    let check = CheckMaxLineLength::new(&Config::default());
    assert!(check.report(&mut document).unwrap().is_empty());
}

#[test]
fn unsplittable_token_is_exempt() {
    let dir = TempDir::new().unwrap();
    let token = "x".repeat(90);
    let mut document = doc(&dir, "a.rst", &format!("{token}\n"));
    let check = CheckMaxLineLength::new(&Config::default());
    assert!(check.report(&mut document).unwrap().is_empty());
}

#[test]
fn url_line_is_exempt_in_rst() {
    let dir = TempDir::new().unwrap();
    let line = format!("see https://example.com/{} for details", "x".repeat(60));
    let mut document = doc(&dir, "a.rst", &format!("{line}\n"));
    let check = CheckMaxLineLength::new(&Config::default());
    assert!(check.report(&mut document).unwrap().is_empty());
}

#[test]
fn long_title_fires_unless_allowed() {
    let dir = TempDir::new().unwrap();
    let title = "t ".repeat(45).trim_end().to_string();
    let underline = "=".repeat(90);
    let content = format!("{title}\n{underline}\n\nBody.\n");

    let mut document = doc(&dir, "a.rst", &content);
    let strict = CheckMaxLineLength::new(&Config::default());
    assert_eq!(strict.report(&mut document).unwrap().len(), 1);

    let mut document = doc(&dir, "b.rst", &content);
    let lenient = CheckMaxLineLength::new(&Config {
        allow_long_titles: true,
        ..Config::default()
    });
    assert!(lenient.report(&mut document).unwrap().is_empty());
}

#[test]
fn custom_limit_respected() {
    let dir = TempDir::new().unwrap();
    let mut document = doc(&dir, "a.rst", "a line of modest length\n");
    let check = CheckMaxLineLength::new(&Config {
        max_line_length: 10,
        ..Config::default()
    });
    assert_eq!(check.report(&mut document).unwrap().len(), 1);
}

#[test]
fn txt_long_line_fires() {
    let dir = TempDir::new().unwrap();
    let line = long_words();
    let mut document = doc(&dir, "a.txt", &format!("{line}\n"));
    let check = CheckMaxLineLength::new(&Config::default());
    let found = check.report(&mut document).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, Some(1));
}

#[test]
fn txt_url_line_is_exempt() {
    let dir = TempDir::new().unwrap();
    let line = format!("http://example.com/{}", "y".repeat(80));
    let mut document = doc(&dir, "a.txt", &format!("{line}\n"));
    let check = CheckMaxLineLength::new(&Config::default());
    assert!(check.report(&mut document).unwrap().is_empty());
}

#[test]
fn lines_at_the_limit_pass() {
    let dir = TempDir::new().unwrap();
    let line = "z".repeat(79);
    let mut document = doc(&dir, "a.txt", &format!("{line}\n"));
    let check = CheckMaxLineLength::new(&Config::default());
    assert!(check.report(&mut document).unwrap().is_empty());
}
