use std::collections::BTreeSet;

use crate::classify::extract_directive_regions;
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::parser::{Node, NodeKind};

use super::{Diagnostic, DocumentCheck};

/// Directive names the reference parser maps to dedicated node types.
const TYPED_DIRECTIVES: &[&str] = &[
    "admonition",
    "attention",
    "caution",
    "compound",
    "container",
    "danger",
    "error",
    "figure",
    "footer",
    "header",
    "hint",
    "image",
    "important",
    "inline",
    "math",
    "note",
    "raw",
    "rubric",
    "sidebar",
    "table",
    "tip",
    "topic",
    "warning",
];

/// Built-in directives not mapped to types.
const EXTRA_DIRECTIVES: &[&str] = &[
    "code-block",
    "code",
    "contents",
    "csv-table",
    "epigraph",
    "glossary",
    "highlights",
    "include",
    "line-block",
    "meta",
    "parsed-literal",
    "section-numbering",
    "sectnum",
    "target-notes",
];

/// Common sphinx directive additions.
const SPHINX_DIRECTIVES: &[&str] = &[
    "centered",
    "deprecated",
    "function",
    "hlist",
    "productionlist",
    "seealso",
    "toctree",
    "versionadded",
    "versionchanged",
    "py:attribute",
    "py:class",
    "py:classmethod",
    "py:currentmodule",
    "py:data",
    "py:decorator",
    "py:decoratormethod",
    "py:exception",
    "py:function",
    "py:method",
    "py:module",
    "c:function",
    "c:member",
    "c:macro",
    "c:type",
    "c:var",
    "cpp:class",
    "cpp:function",
    "cpp:member",
    "cpp:var",
    "cpp:type",
    "cpp:enum",
    "cpp:enum-struct",
    "cpp:enum-class",
    "cpp:enumerator",
    "cpp:namespace",
    "option",
    "envvar",
    "program",
    "describe",
    "object",
    "js:function",
    "js:class",
    "js:data",
    "js:attribute",
    "rst:role",
    "rst:directive",
    "codeauthor",
    "index",
    "only",
    "sectionauthor",
    "tabularcolumns",
];

/// Node kinds a directive name can resolve to; a name backed by such a
/// node was understood by the parser and is never reported.
const RESOLVED_KINDS: &[NodeKind] = &[NodeKind::Admonition, NodeKind::Image, NodeKind::Table];

/// D006: a directive region whose name is neither in the known set nor
/// resolved by the structural parser into a typed node.
pub struct CheckKnownDirectives {
    sphinx_mode: bool,
}

impl CheckKnownDirectives {
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self {
            sphinx_mode: config.sphinx,
        }
    }

    fn known_directives(&self) -> BTreeSet<&'static str> {
        let mut known: BTreeSet<&'static str> = TYPED_DIRECTIVES.iter().copied().collect();
        known.extend(EXTRA_DIRECTIVES);
        if self.sphinx_mode {
            known.extend(SPHINX_DIRECTIVES);
        }
        known
    }
}

fn collect_resolved_names(node: &Node, resolved: &mut BTreeSet<String>) {
    if RESOLVED_KINDS.contains(&node.kind())
        && let Some(name) = node.name()
    {
        resolved.insert(name.to_string());
    }
    for child in node.children() {
        collect_resolved_names(child, resolved);
    }
}

impl DocumentCheck for CheckKnownDirectives {
    fn name(&self) -> &'static str {
        "known-directives"
    }

    fn reports(&self) -> Option<&'static [&'static str]> {
        Some(&["D006"])
    }

    fn report(&self, document: &mut Document) -> Result<Vec<Diagnostic>> {
        if !document.is_structural() {
            return Ok(Vec::new());
        }
        let lines = document.lines(true)?;
        let (regions, _names) = extract_directive_regions(&lines);

        let mut resolved = BTreeSet::new();
        collect_resolved_names(document.structural_tree()?, &mut resolved);

        let known = self.known_directives();
        let mut diagnostics = Vec::new();
        for region in &regions {
            let Some(name) = &region.name else {
                continue;
            };
            if known.contains(name.as_str()) || resolved.contains(name) {
                continue;
            }
            diagnostics.push(Diagnostic::new(
                Some(region.start + 1),
                "D006",
                format!("Unknown directive '{name}'"),
            ));
        }
        Ok(diagnostics)
    }
}

#[cfg(test)]
#[path = "directives_tests.rs"]
mod tests;
