#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the docstyle binary.
#[macro_export]
macro_rules! docstyle {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("docstyle"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a docstyle config file in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file("docstyle.toml", content);
    }

    /// Creates an rst file that passes every built-in check.
    pub fn create_clean_rst(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "Heading\n=======\n\nA short, tidy paragraph.\n",
        );
    }

    /// Creates a file with one trailing-whitespace violation.
    pub fn create_trailing_whitespace(&self, relative_path: &str) {
        self.create_file(relative_path, "trailing  \n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
