use regex::Regex;

use super::{Node, NodeKind, ParseIssue, Severity, StructuralParser};

/// Directives resolved to admonition nodes.
const ADMONITION_DIRECTIVES: &[&str] = &[
    "admonition",
    "attention",
    "caution",
    "danger",
    "error",
    "hint",
    "important",
    "note",
    "tip",
    "warning",
];

/// Directives resolved to image nodes.
const IMAGE_DIRECTIVES: &[&str] = &["image", "figure"];

/// Directives resolved to table nodes.
const TABLE_DIRECTIVES: &[&str] = &["csv-table", "list-table", "table"];

/// Remaining built-in directives the parser accepts without mapping them to
/// a dedicated node type.
const GENERIC_DIRECTIVES: &[&str] = &[
    "class",
    "code",
    "compound",
    "container",
    "contents",
    "date",
    "default-role",
    "epigraph",
    "footer",
    "glossary",
    "header",
    "highlights",
    "include",
    "line-block",
    "math",
    "meta",
    "parsed-literal",
    "pull-quote",
    "raw",
    "replace",
    "role",
    "rubric",
    "sectnum",
    "section-numbering",
    "sidebar",
    "target-notes",
    "title",
    "topic",
    "unicode",
];

/// Characters usable as section title adornment.
const ADORNMENT_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Conservative block-level reStructuredText parser.
///
/// This is not a markup renderer. It recognizes just enough block structure
/// (sections, titles, literal blocks, directives, targets, comments, lists)
/// to attribute source lines to typed nodes, and reports the structural
/// problems it can determine with the same messages the reference docutils
/// parser would use.
pub struct BlockParser {
    directive: Regex,
    target: Regex,
    comment: Regex,
    list_marker: Regex,
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser {
    /// # Panics
    /// Never; the patterns are fixed and known-valid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directive: Regex::new(r"^\s*\.\.[ \t]+([\w:.+-]+)::(?:[ \t].*)?$")
                .expect("Invalid regex"),
            target: Regex::new(r"^\s*\.\.[ \t]+_").expect("Invalid regex"),
            comment: Regex::new(r"^\s*\.\.(\s|$)").expect("Invalid regex"),
            list_marker: Regex::new(r"^([ \t]*)(?:[-*+]|\d+[.)])[ \t]+\S")
                .expect("Invalid regex"),
        }
    }
}

impl StructuralParser for BlockParser {
    fn parse(&self, text: &str) -> (Node, Vec<ParseIssue>) {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut builder = TreeBuilder {
            root: Node::new(NodeKind::Document, None, 0),
            stack: Vec::new(),
            styles: Vec::new(),
        };
        let mut issues = Vec::new();
        let mut pending_literal = false;
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            let ln = i + 1;

            if is_blank(line) {
                i += 1;
                continue;
            }

            // Explicit markup: targets, directives, comments.
            if self.comment.is_match(line) {
                let end = trim_trailing_blanks(&lines, i, block_extent(&lines, i));
                let count = end - i + 1;
                if self.target.is_match(line) {
                    builder.attach(Node::new(NodeKind::Target, Some(ln), count));
                } else if let Some(caps) = self.directive.captures(line) {
                    let name = &caps[1];
                    let node = match classify_directive(name) {
                        Some(kind) => Node::new(kind, Some(ln), count).with_name(name),
                        None => {
                            issues.push(ParseIssue::new(
                                Severity::Error,
                                Some(ln),
                                format!("Unknown directive type \"{name}\"."),
                            ));
                            Node::new(NodeKind::SystemMessage, Some(ln), count)
                        }
                    };
                    builder.attach(node);
                } else {
                    builder.attach(Node::new(NodeKind::Comment, Some(ln), count));
                }
                pending_literal = false;
                i = end + 1;
                continue;
            }

            if is_adornment(line) {
                // Overline title form: adornment / text / adornment.
                if i + 2 < lines.len()
                    && !is_blank(lines[i + 1])
                    && !is_adornment(lines[i + 1])
                    && is_adornment(lines[i + 2])
                    && first_char(lines[i + 2]) == first_char(line)
                {
                    let text_line = lines[i + 1];
                    if width(line) < width(text_line) {
                        issues.push(ParseIssue::new(
                            Severity::Warning,
                            Some(ln),
                            "Title overline too short.",
                        ));
                    }
                    builder.open_section(text_line, lines[i + 2], i + 2, i + 3, 2, &mut issues);
                    pending_literal = false;
                    i += 3;
                    continue;
                }
                if width(line) >= 4 {
                    builder.attach(Node::new(NodeKind::Transition, Some(ln), 1));
                    pending_literal = false;
                    i += 1;
                    continue;
                }
                // A short stray adornment line reads as paragraph text.
            }

            // Underline title form: text / adornment.
            if !is_indented(line)
                && i + 1 < lines.len()
                && underline_starts_title(line, lines[i + 1])
            {
                builder.open_section(line, lines[i + 1], i + 1, i + 2, 1, &mut issues);
                pending_literal = false;
                i += 2;
                continue;
            }

            // Bullet and enumerated lists.
            if let Some(caps) = self.list_marker.captures(line) {
                let marker_indent = caps[1].len();
                let mut list = Node::new(NodeKind::BulletList, Some(ln), 0);
                let mut j = i;
                while j < lines.len()
                    && self
                        .list_marker
                        .captures(lines[j])
                        .is_some_and(|c| c[1].len() == marker_indent)
                {
                    let mut k = j + 1;
                    while k < lines.len()
                        && (is_blank(lines[k]) || indent_of(lines[k]) > marker_indent)
                    {
                        k += 1;
                    }
                    let item_end = trim_trailing_blanks(&lines, j, k - 1);
                    list.push_child(Node::new(
                        NodeKind::ListItem,
                        Some(j + 1),
                        item_end - j + 1,
                    ));
                    j = k;
                }
                builder.attach(list);
                pending_literal = false;
                i = j;
                continue;
            }

            // Indented block: literal block when announced by a trailing
            // "::", otherwise a block quote.
            if is_indented(line) {
                let end = trim_trailing_blanks(&lines, i, block_extent(&lines, i));
                let kind = if pending_literal {
                    NodeKind::LiteralBlock
                } else {
                    NodeKind::BlockQuote
                };
                builder.attach(Node::new(kind, Some(ln), end - i + 1));
                pending_literal = false;
                i = end + 1;
                continue;
            }

            // Plain paragraph.
            let mut j = i;
            while j < lines.len() && !is_blank(lines[j]) && !is_indented(lines[j]) {
                if j > i && is_adornment(lines[j]) {
                    break;
                }
                if j + 1 < lines.len() && underline_starts_title(lines[j], lines[j + 1]) {
                    break;
                }
                j += 1;
            }
            let j = j.max(i + 1);
            let last = lines[j - 1].trim_end();
            pending_literal = last.ends_with("::");
            // A bare "::" only announces the literal block; it is not a
            // paragraph of its own.
            if !(j - i == 1 && last == "::") {
                builder.attach(Node::new(NodeKind::Paragraph, Some(ln), j - i));
            }
            i = j;
        }

        builder.close_to(0);
        (builder.root, issues)
    }
}

struct TreeBuilder {
    root: Node,
    stack: Vec<(char, Node)>,
    styles: Vec<char>,
}

impl TreeBuilder {
    fn current(&mut self) -> &mut Node {
        match self.stack.last_mut() {
            Some((_, node)) => node,
            None => &mut self.root,
        }
    }

    fn attach(&mut self, node: Node) {
        self.current().push_child(node);
    }

    fn close_to(&mut self, level: usize) {
        while self.stack.len() > level {
            if let Some((_, node)) = self.stack.pop() {
                self.current().push_child(node);
            }
        }
    }

    fn open_section(
        &mut self,
        text_line: &str,
        underline_line: &str,
        text_ln: usize,
        underline_ln: usize,
        raw_lines: usize,
        issues: &mut Vec<ParseIssue>,
    ) {
        if width(underline_line) < width(text_line) {
            issues.push(ParseIssue::new(
                Severity::Warning,
                Some(underline_ln),
                "Title underline too short.",
            ));
        }
        // The adornment character determines the nesting level: first use
        // of a character opens the next deeper level, reuse returns to it.
        let ch = first_char(underline_line).unwrap_or('=');
        let level = match self.styles.iter().position(|&c| c == ch) {
            Some(pos) => pos,
            None => {
                self.styles.push(ch);
                self.styles.len() - 1
            }
        };
        self.close_to(level);
        let mut section = Node::new(NodeKind::Section, Some(text_ln), 0);
        section.push_child(Node::new(NodeKind::Title, Some(underline_ln), raw_lines));
        self.stack.push((ch, section));
    }
}

fn classify_directive(name: &str) -> Option<NodeKind> {
    if ADMONITION_DIRECTIVES.contains(&name) {
        Some(NodeKind::Admonition)
    } else if IMAGE_DIRECTIVES.contains(&name) {
        Some(NodeKind::Image)
    } else if TABLE_DIRECTIVES.contains(&name) {
        Some(NodeKind::Table)
    } else if GENERIC_DIRECTIVES.contains(&name) {
        Some(NodeKind::Directive)
    } else {
        None
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn width(line: &str) -> usize {
    line.trim_end().chars().count()
}

fn first_char(line: &str) -> Option<char> {
    line.trim_end().chars().next()
}

/// An adornment line repeats one punctuation character, at least twice.
fn is_adornment(line: &str) -> bool {
    let trimmed = line.trim_end();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !ADORNMENT_CHARS.contains(first) {
        return false;
    }
    trimmed.chars().count() >= 2 && chars.all(|c| c == first)
}

/// An adornment directly below unindented text opens a title unless it is
/// both shorter than the text and under four characters, in which case the
/// reference parser reads it as paragraph text.
fn underline_starts_title(text: &str, underline: &str) -> bool {
    if is_blank(text) || is_adornment(text) || !is_adornment(underline) {
        return false;
    }
    let under = width(underline);
    under >= width(text) || under >= 4
}

/// Last line index absorbed by a block starting at `start`: subsequent lines
/// are absorbed while blank or indented, matching directive-region extent.
fn block_extent(lines: &[&str], start: usize) -> usize {
    let mut end = start;
    for (offset, line) in lines.iter().enumerate().skip(start + 1) {
        if is_blank(line) || indent_of(line) >= 1 {
            end = offset;
        } else {
            break;
        }
    }
    end
}

fn trim_trailing_blanks(lines: &[&str], start: usize, mut end: usize) -> usize {
    while end > start && is_blank(lines[end]) {
        end -= 1;
    }
    end
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
