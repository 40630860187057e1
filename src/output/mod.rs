use std::fmt::Write;
use std::path::Path;

use indexmap::IndexMap;

use crate::checker::Diagnostic;

/// Render one violation line: `<path>:<line> <code> <message>`, with `?`
/// standing in for an unattributable line.
#[must_use]
pub fn format_violation(path: &Path, diagnostic: &Diagnostic) -> String {
    format!(
        "{}:{} {} {}",
        path.display(),
        line_display(diagnostic.line),
        diagnostic.code,
        diagnostic.message
    )
}

fn line_display(line: Option<usize>) -> String {
    line.map_or_else(|| "?".to_string(), |l| l.to_string())
}

/// Aggregate run totals, rendered after all files are validated.
#[derive(Debug, Default)]
pub struct Summary {
    pub files_selected: usize,
    pub files_ignored: usize,
    pub error_counts: IndexMap<String, usize>,
}

impl Summary {
    #[must_use]
    pub fn total_errors(&self) -> usize {
        self.error_counts.values().sum()
    }

    /// The fixed divider, totals, then per-check counts sorted by check
    /// identifier.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("========\n");
        let _ = writeln!(out, "Total files scanned = {}", self.files_selected);
        let _ = writeln!(out, "Total files ignored = {}", self.files_ignored);
        let _ = writeln!(out, "Total accumulated errors = {}", self.total_errors());
        if !self.error_counts.is_empty() {
            out.push_str("Detailed error counts:\n");
            let mut names: Vec<&String> = self.error_counts.keys().collect();
            names.sort();
            for name in names {
                let count = self.error_counts.get(name).copied().unwrap_or(0);
                let _ = writeln!(out, "    - {name} = {count}");
            }
        }
        out.truncate(out.trim_end().len());
        out
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
