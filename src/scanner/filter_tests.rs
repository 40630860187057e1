use super::*;

#[test]
fn empty_filter_ignores_nothing() {
    let filter = IgnoreFilter::new(&[]).unwrap();
    assert!(!filter.is_ignored(Path::new("docs/a.rst")));
}

#[test]
fn exact_file_pattern() {
    let filter = IgnoreFilter::new(&["docs/skip.rst".to_string()]).unwrap();
    assert!(filter.is_ignored(Path::new("docs/skip.rst")));
    assert!(!filter.is_ignored(Path::new("docs/keep.rst")));
}

#[test]
fn directory_pattern_covers_descendants() {
    let filter = IgnoreFilter::new(&["docs/build".to_string()]).unwrap();
    assert!(filter.is_ignored(Path::new("docs/build/out.rst")));
    assert!(filter.is_ignored(Path::new("docs/build/deep/nested.rst")));
    assert!(!filter.is_ignored(Path::new("docs/source/index.rst")));
}

#[test]
fn glob_patterns_match() {
    let filter = IgnoreFilter::new(&["**/generated_*.rst".to_string()]).unwrap();
    assert!(filter.is_ignored(Path::new("docs/generated_api.rst")));
    assert!(!filter.is_ignored(Path::new("docs/manual.rst")));
}

#[test]
fn malformed_pattern_is_rejected() {
    let result = IgnoreFilter::new(&["bad[glob".to_string()]);
    assert!(matches!(result, Err(DocstyleError::InvalidPattern { .. })));
}
