mod directives;
mod eof_newline;
mod line_length;
mod registry;
mod trivia;
mod validity;

pub use directives::CheckKnownDirectives;
pub use eof_newline::CheckNewlineEndOfFile;
pub use line_length::CheckMaxLineLength;
pub use registry::{CheckFactory, CheckRegistry};
pub use trivia::{CheckCarriageReturn, CheckIndentationNoTab, CheckTrailingWhitespace};
pub use validity::CheckValidity;

use crate::document::Document;
use crate::error::Result;

/// One style violation. `line` is `None` when the producer could not
/// attribute a location; rendering shows `?` in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub code: String,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(line: Option<usize>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A check that consumes a whole document.
///
/// Checks are configured once at construction and stateless afterwards;
/// the same instance runs against every selected file in turn.
pub trait DocumentCheck {
    /// Identifier used in the summary tallies.
    fn name(&self) -> &'static str;

    /// Diagnostic codes this check can produce, when statically known.
    /// `None` disables the skip-when-all-ignored optimization; such a
    /// check still has its individual diagnostics filtered.
    fn reports(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Whether the check understands files with the given extension
    /// (leading dot included). Checks without a filter self-select inside
    /// [`DocumentCheck::report`].
    fn applies_to_extension(&self, _extension: &str) -> bool {
        true
    }

    /// Run the check against one document.
    ///
    /// # Errors
    /// Read or decode failures halt the whole run; style findings are
    /// diagnostics, never errors.
    fn report(&self, document: &mut Document) -> Result<Vec<Diagnostic>>;
}

/// A check that consumes one decoded line at a time; the orchestration
/// loop supplies the line numbers.
pub trait LineCheck {
    /// Identifier used in the summary tallies.
    fn name(&self) -> &'static str;

    /// Diagnostic codes this check can produce, when statically known.
    fn reports(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Violations on `line`, as `(code, message)` pairs.
    fn report(&self, line: &str) -> Vec<(String, String)>;
}

/// Closed sum of the two check kinds. The orchestration loop matches on
/// the variant, so a check conforming to neither contract cannot exist.
pub enum Check {
    Document(Box<dyn DocumentCheck>),
    Line(Box<dyn LineCheck>),
}

impl Check {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document(check) => check.name(),
            Self::Line(check) => check.name(),
        }
    }

    #[must_use]
    pub fn reports(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Document(check) => check.reports(),
            Self::Line(check) => check.reports(),
        }
    }

    /// Line checks carry no extension filter; they run on every file.
    #[must_use]
    pub fn applies_to_extension(&self, extension: &str) -> bool {
        match self {
            Self::Document(check) => check.applies_to_extension(extension),
            Self::Line(_) => true,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
