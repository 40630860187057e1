use regex::Regex;

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::parser::Severity;

use super::{Diagnostic, DocumentCheck};

/// D000: structural parse problems at warning severity or above.
pub struct CheckValidity {
    sphinx_mode: bool,
    sphinx_ignores: Vec<Regex>,
}

/// Message prefixes produced for constructs a sphinx build would resolve;
/// suppressed in sphinx mode as known-benign.
const SPHINX_IGNORE_PREFIXES: &[&str] = &[
    r"^Unknown interpreted text",
    r"^Unknown directive type",
    r"^Undefined substitution",
    r"^Substitution definition contains illegal element",
];

impl CheckValidity {
    /// # Panics
    /// Never; the prefix patterns are fixed and known-valid.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            sphinx_mode: config.sphinx,
            sphinx_ignores: SPHINX_IGNORE_PREFIXES
                .iter()
                .map(|p| Regex::new(p).expect("Invalid regex"))
                .collect(),
        }
    }
}

impl DocumentCheck for CheckValidity {
    fn name(&self) -> &'static str {
        "validity"
    }

    fn reports(&self) -> Option<&'static [&'static str]> {
        Some(&["D000"])
    }

    fn applies_to_extension(&self, extension: &str) -> bool {
        extension.eq_ignore_ascii_case(".rst")
    }

    fn report(&self, document: &mut Document) -> Result<Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        for issue in document.structural_issues()? {
            if issue.severity < Severity::Warning {
                continue;
            }
            if self.sphinx_mode
                && self.sphinx_ignores.iter().any(|re| re.is_match(&issue.message))
            {
                continue;
            }
            diagnostics.push(Diagnostic::new(issue.line, "D000", issue.message.clone()));
        }
        Ok(diagnostics)
    }
}

#[cfg(test)]
#[path = "validity_tests.rs"]
mod tests;
