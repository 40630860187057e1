use std::collections::VecDeque;
use std::io;
use std::path::Path;

use indexmap::IndexMap;

use crate::checker::{Check, Diagnostic};
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::ignore::IgnoreResolver;
use crate::output::format_violation;

/// The orchestration loop: files in discovery order, checks in
/// registration order, with extension filtering and ignore resolution in
/// front of every run. Violations print incrementally as they are found.
pub struct Validator<'a> {
    config: &'a Config,
    checks: &'a [Check],
    resolver: IgnoreResolver,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub fn new(config: &'a Config, checks: &'a [Check]) -> Self {
        Self {
            config,
            checks,
            resolver: IgnoreResolver::new(config),
        }
    }

    /// Run every applicable check against every queued document and
    /// return the per-check tallies of non-suppressed diagnostics. Every
    /// registered check appears in the result, including those that never
    /// ran.
    ///
    /// # Errors
    /// Read, decode, and write failures abort the run; style findings
    /// never do.
    pub fn validate<W: io::Write>(
        &self,
        files: &mut VecDeque<Document>,
        out: &mut W,
    ) -> Result<IndexMap<String, usize>> {
        let mut error_counts: IndexMap<String, usize> = self
            .checks
            .iter()
            .map(|c| (c.name().to_string(), 0))
            .collect();

        while let Some(mut doc) = files.pop_front() {
            if self.config.verbose {
                let encoding = doc.encoding()?;
                let chars = doc.text()?.chars().count();
                let line_count = doc.raw_lines()?.len();
                writeln!(
                    out,
                    "Validating {} ({}, {} chars, {} lines)",
                    doc.path().display(),
                    encoding.label(),
                    chars,
                    line_count
                )?;
            }
            let effective = self.resolver.effective(doc.path());

            for check in self.checks {
                let name = check.name();
                if !check.applies_to_extension(doc.extension()) {
                    if self.config.verbose {
                        writeln!(
                            out,
                            "  Skipping check '{name}' since it does not understand \
                             parsing a file with extension '{}'",
                            doc.extension()
                        )?;
                    }
                    continue;
                }
                if let Some(reports) = check.reports()
                    && IgnoreResolver::check_skippable(reports, &effective)
                {
                    if self.config.verbose {
                        writeln!(
                            out,
                            "  Skipping check '{name}', determined to only check \
                             ignoreable codes"
                        )?;
                    }
                    continue;
                }
                if self.config.verbose {
                    writeln!(out, "  Running check '{name}'")?;
                }

                match check {
                    Check::Document(document_check) => {
                        for diag in document_check.report(&mut doc)? {
                            if effective.contains(&diag.code) {
                                continue;
                            }
                            self.print_violation(out, doc.path(), &diag)?;
                            bump(&mut error_counts, name);
                        }
                    }
                    Check::Line(line_check) => {
                        let lines = doc.lines(true)?;
                        for (idx, line) in lines.iter().enumerate() {
                            for (code, message) in line_check.report(line) {
                                if effective.contains(&code) {
                                    continue;
                                }
                                let diag = Diagnostic::new(Some(idx + 1), code, message);
                                self.print_violation(out, doc.path(), &diag)?;
                                bump(&mut error_counts, name);
                            }
                        }
                    }
                }
            }
        }
        Ok(error_counts)
    }

    fn print_violation<W: io::Write>(
        &self,
        out: &mut W,
        path: &Path,
        diag: &Diagnostic,
    ) -> Result<()> {
        if self.config.verbose {
            writeln!(out, "    - {}", format_violation(path, diag))?;
        } else {
            writeln!(out, "{}", format_violation(path, diag))?;
        }
        Ok(())
    }
}

fn bump(counts: &mut IndexMap<String, usize>, name: &str) {
    *counts.entry(name.to_string()).or_insert(0) += 1;
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
