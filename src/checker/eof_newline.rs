use crate::config::Config;
use crate::document::Document;
use crate::error::Result;

use super::{Diagnostic, DocumentCheck};

/// D005: the final raw line does not end with a newline byte.
pub struct CheckNewlineEndOfFile;

impl CheckNewlineEndOfFile {
    #[must_use]
    pub const fn new(_config: &Config) -> Self {
        Self
    }
}

impl DocumentCheck for CheckNewlineEndOfFile {
    fn name(&self) -> &'static str {
        "newline-end-of-file"
    }

    fn reports(&self) -> Option<&'static [&'static str]> {
        Some(&["D005"])
    }

    fn report(&self, document: &mut Document) -> Result<Vec<Diagnostic>> {
        let lines = document.raw_lines()?;
        let mut diagnostics = Vec::new();
        if let Some(last) = lines.last()
            && !last.ends_with(b"\n")
        {
            diagnostics.push(Diagnostic::new(
                Some(lines.len()),
                "D005",
                "No newline at end of file",
            ));
        }
        Ok(diagnostics)
    }
}

#[cfg(test)]
#[path = "eof_newline_tests.rs"]
mod tests;
