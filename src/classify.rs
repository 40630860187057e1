use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::parser::{Node, NodeKind};

/// Line span attributed to one structural node, 1-based and inclusive.
#[derive(Debug)]
pub struct NodeSpan<'a> {
    pub node: &'a Node,
    pub min_line: usize,
    pub max_line: usize,
}

/// Every node span in a tree plus the first attributed line, which is used
/// to hand preamble lines to the first real node.
#[derive(Debug)]
pub struct NodeSpans<'a> {
    spans: Vec<NodeSpan<'a>>,
    first_line: Option<usize>,
}

impl<'a> NodeSpans<'a> {
    #[must_use]
    pub fn spans(&self) -> &[NodeSpan<'a>] {
        &self.spans
    }

    #[must_use]
    pub const fn first_line(&self) -> Option<usize> {
        self.first_line
    }

    /// Nodes whose span contains `line_num`, narrowed to the smallest span
    /// width; ties keep every node of that width. Lines before the first
    /// attributed line fall back to the first node.
    #[must_use]
    pub fn containing_nodes(&self, line_num: usize) -> Vec<&'a Node> {
        if let Some(first) = self.first_line
            && line_num < first
        {
            return self.spans.first().map(|s| vec![s.node]).unwrap_or_default();
        }
        let contained: Vec<&NodeSpan<'a>> = self
            .spans
            .iter()
            .filter(|s| line_num >= s.min_line && line_num <= s.max_line)
            .collect();
        let Some(smallest) = contained.iter().map(|s| s.max_line - s.min_line).min() else {
            return Vec::new();
        };
        contained
            .into_iter()
            .filter(|s| s.max_line - s.min_line == smallest)
            .map(|s| s.node)
            .collect()
    }
}

/// Compute the line span of every node in `tree`.
///
/// A node's anchor line is its own, or the nearest ancestor's. The span
/// collects the anchors of the whole subtree, with two special cases: a
/// title's span extends backward over its raw lines (text above the
/// underline) and a literal block's span extends forward over its raw
/// lines. Subtrees rooted at parser-error nodes are skipped.
#[must_use]
pub fn extract_node_spans(tree: &Node) -> NodeSpans<'_> {
    let mut spans = Vec::new();
    walk(tree, None, &mut spans);
    let mut first_line = None;
    collect_anchor_min(tree, None, &mut first_line);
    NodeSpans { spans, first_line }
}

fn walk<'a>(node: &'a Node, inherited: Option<usize>, spans: &mut Vec<NodeSpan<'a>>) {
    if node.kind() == NodeKind::SystemMessage {
        return;
    }
    let anchor = node.line().or(inherited);
    if let Some(anchor_line) = anchor {
        let mut lines = Vec::new();
        gather_lines(node, anchor_line, &mut lines);
        if let (Some(&min_line), Some(&max_line)) = (lines.iter().min(), lines.iter().max()) {
            spans.push(NodeSpan {
                node,
                min_line,
                max_line,
            });
        }
    }
    for child in node.children() {
        walk(child, anchor, spans);
    }
}

fn gather_lines(node: &Node, anchor: usize, out: &mut Vec<usize>) {
    out.push(anchor);
    match node.kind() {
        NodeKind::Title | NodeKind::Subtitle => {
            let start = anchor.saturating_sub(node.raw_line_count());
            if start >= 1 {
                out.push(start);
            }
        }
        NodeKind::LiteralBlock if node.raw_line_count() > 0 => {
            out.push(anchor + node.raw_line_count() - 1);
        }
        _ => {}
    }
    for child in node.children() {
        let child_anchor = child.line().unwrap_or(anchor);
        gather_lines(child, child_anchor, out);
    }
}

fn collect_anchor_min(node: &Node, inherited: Option<usize>, min: &mut Option<usize>) {
    if node.kind() == NodeKind::SystemMessage {
        return;
    }
    let anchor = node.line().or(inherited);
    if let Some(line) = anchor {
        *min = Some(min.map_or(line, |m: usize| m.min(line)));
    }
    for child in node.children() {
        collect_anchor_min(child, anchor, min);
    }
}

/// Raw line range a directive's body occupies, 0-based and inclusive;
/// computed from indentation heuristics, independent of how (or whether)
/// the structural parser modeled the directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveRegion {
    pub name: Option<String>,
    pub start: usize,
    pub end: usize,
}

fn directive_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\.\.\s+(.*?)::").expect("Invalid regex"))
}

fn literal_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^::\s*$").expect("Invalid regex"))
}

/// Scan raw lines for directive openings (`.. name::` or a bare `::`) and
/// extend each region while the following lines are blank or indented.
/// Returns the regions plus every named directive encountered.
#[must_use]
pub fn extract_directive_regions(lines: &[String]) -> (Vec<DirectiveRegion>, BTreeSet<String>) {
    let mut regions = Vec::new();
    let mut names = BTreeSet::new();
    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = directive_marker().captures(line) {
            let name = &caps[1];
            let name = if name.is_empty() {
                None
            } else {
                names.insert(name.to_string());
                Some(name.to_string())
            };
            regions.push(DirectiveRegion {
                name,
                start: i,
                end: find_region_end(lines, i),
            });
        } else if literal_marker().is_match(line) {
            regions.push(DirectiveRegion {
                name: None,
                start: i,
                end: find_region_end(lines, i),
            });
        }
    }
    (regions, names)
}

/// The region absorbs following lines while they are blank or carry at
/// least one leading whitespace character.
fn find_region_end(lines: &[String], start: usize) -> usize {
    let mut end = start;
    for line in &lines[start + 1..] {
        if line.trim().is_empty() || starting_whitespace(line) >= 1 {
            end += 1;
        } else {
            break;
        }
    }
    end
}

fn starting_whitespace(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Whether the 0-based `line_index` falls inside any region.
#[must_use]
pub fn is_in_region(regions: &[DirectiveRegion], line_index: usize) -> bool {
    regions
        .iter()
        .any(|r| line_index >= r.start && line_index <= r.end)
}

/// Lines carrying a URL are exempt from length limits.
#[must_use]
pub fn contains_url(line: &str) -> bool {
    line.contains("http://") || line.contains("https://")
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
