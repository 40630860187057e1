use crate::classify::{self, extract_directive_regions, extract_node_spans, is_in_region};
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::parser::{Node, NodeKind};

use super::{Diagnostic, DocumentCheck};

/// Node kinds whose content is always exempt from the length limit.
const SKIP_KINDS: &[NodeKind] = &[NodeKind::Target, NodeKind::LiteralBlock];

/// Node kinds exempted when long titles are allowed.
const TITLE_KINDS: &[NodeKind] = &[NodeKind::Title, NodeKind::Subtitle, NodeKind::Section];

/// D001: line longer than the configured maximum.
pub struct CheckMaxLineLength {
    max_line_length: usize,
    allow_long_titles: bool,
}

impl CheckMaxLineLength {
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self {
            max_line_length: config.max_line_length,
            allow_long_titles: config.allow_long_titles,
        }
    }

    /// Plain text files: anything over the limit is flagged unless the
    /// line carries a URL.
    fn check_txt(&self, lines: &[String]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() > self.max_line_length && !classify::contains_url(line) {
                diagnostics.push(Diagnostic::new(Some(i + 1), "D001", "Line too long"));
            }
        }
        diagnostics
    }

    /// Structural files get the full exemption chain: directive regions,
    /// unsplittable tokens, URLs, always-exempt node kinds, and titles
    /// when configured.
    fn check_rst(&self, lines: &[String], tree: &Node) -> Vec<Diagnostic> {
        let spans = extract_node_spans(tree);
        let (regions, _names) = extract_directive_regions(lines);

        let mut diagnostics = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() <= self.max_line_length {
                continue;
            }
            if is_in_region(&regions, i) {
                continue;
            }
            let stripped = line.trim_start();
            if !stripped.contains(' ') {
                // No room to split even if we could.
                continue;
            }
            if classify::contains_url(stripped) {
                continue;
            }
            let nodes = spans.containing_nodes(i + 1);
            if any_kind(&nodes, SKIP_KINDS) {
                continue;
            }
            if self.allow_long_titles && any_kind(&nodes, TITLE_KINDS) {
                continue;
            }
            diagnostics.push(Diagnostic::new(Some(i + 1), "D001", "Line too long"));
        }
        diagnostics
    }
}

fn any_kind(nodes: &[&Node], kinds: &[NodeKind]) -> bool {
    nodes.iter().any(|n| kinds.contains(&n.kind()))
}

impl DocumentCheck for CheckMaxLineLength {
    fn name(&self) -> &'static str {
        "max-line-length"
    }

    fn reports(&self) -> Option<&'static [&'static str]> {
        Some(&["D001"])
    }

    fn report(&self, document: &mut Document) -> Result<Vec<Diagnostic>> {
        let lines = document.lines(true)?;
        if document.is_structural() {
            let tree = document.structural_tree()?;
            Ok(self.check_rst(&lines, tree))
        } else {
            Ok(self.check_txt(&lines))
        }
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
