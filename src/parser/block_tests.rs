use super::*;

fn parse(text: &str) -> (Node, Vec<ParseIssue>) {
    BlockParser::new().parse(text)
}

fn collect_kinds(node: &Node, out: &mut Vec<NodeKind>) {
    out.push(node.kind());
    for child in node.children() {
        collect_kinds(child, out);
    }
}

fn kinds(root: &Node) -> Vec<NodeKind> {
    let mut out = Vec::new();
    collect_kinds(root, &mut out);
    out
}

fn find<'a>(node: &'a Node, kind: NodeKind) -> Option<&'a Node> {
    if node.kind() == kind {
        return Some(node);
    }
    node.children().iter().find_map(|c| find(c, kind))
}

#[test]
fn empty_document() {
    let (root, issues) = parse("");
    assert_eq!(root.kind(), NodeKind::Document);
    assert!(root.children().is_empty());
    assert!(issues.is_empty());
}

#[test]
fn single_paragraph() {
    let (root, issues) = parse("Just some text.\n");
    assert!(issues.is_empty());
    let para = find(&root, NodeKind::Paragraph).expect("paragraph node");
    assert_eq!(para.line(), Some(1));
    assert_eq!(para.raw_line_count(), 1);
}

#[test]
fn multi_line_paragraph_counts_raw_lines() {
    let (root, _) = parse("first line\nsecond line\n\nother\n");
    let para = find(&root, NodeKind::Paragraph).expect("paragraph node");
    assert_eq!(para.raw_line_count(), 2);
}

#[test]
fn underline_title_opens_section() {
    let (root, issues) = parse("Heading\n=======\n\nBody text.\n");
    assert!(issues.is_empty());
    let section = find(&root, NodeKind::Section).expect("section node");
    assert_eq!(section.line(), Some(1));
    let title = find(section, NodeKind::Title).expect("title node");
    assert_eq!(title.line(), Some(2));
    assert_eq!(title.raw_line_count(), 1);
    assert!(find(section, NodeKind::Paragraph).is_some());
}

#[test]
fn short_underline_reports_warning() {
    let (_, issues) = parse("A long heading\n====\n");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].message, "Title underline too short.");
    assert_eq!(issues[0].line, Some(2));
}

#[test]
fn overline_title_form() {
    let (root, issues) = parse("=======\nHeading\n=======\n\nBody.\n");
    assert!(issues.is_empty());
    let title = find(&root, NodeKind::Title).expect("title node");
    assert_eq!(title.line(), Some(3));
    assert_eq!(title.raw_line_count(), 2);
}

#[test]
fn nested_sections_by_adornment_char() {
    let text = "Top\n===\n\nSub\n---\n\nText.\n";
    let (root, _) = parse(text);
    let top = find(&root, NodeKind::Section).expect("top section");
    let sub = top
        .children()
        .iter()
        .find(|c| c.kind() == NodeKind::Section)
        .expect("nested section");
    assert_eq!(sub.line(), Some(4));
}

#[test]
fn reused_adornment_returns_to_level() {
    let text = "One\n===\n\nSub\n---\n\nTwo\n===\n\nText.\n";
    let (root, _) = parse(text);
    let sections: Vec<&Node> = root
        .children()
        .iter()
        .filter(|c| c.kind() == NodeKind::Section)
        .collect();
    assert_eq!(sections.len(), 2);
}

#[test]
fn announced_literal_block() {
    let (root, _) = parse("Example::\n\n    code here\n    more code\n\nAfter.\n");
    let literal = find(&root, NodeKind::LiteralBlock).expect("literal block");
    assert_eq!(literal.line(), Some(3));
    assert_eq!(literal.raw_line_count(), 2);
}

#[test]
fn bare_literal_marker_is_not_a_paragraph() {
    let (root, _) = parse("::\n\n    code\n");
    assert!(find(&root, NodeKind::LiteralBlock).is_some());
    assert!(find(&root, NodeKind::Paragraph).is_none());
}

#[test]
fn indented_block_without_marker_is_quote() {
    let (root, _) = parse("Text.\n\n    quoted stuff\n");
    assert!(find(&root, NodeKind::BlockQuote).is_some());
    assert!(find(&root, NodeKind::LiteralBlock).is_none());
}

#[test]
fn known_directive_becomes_typed_node() {
    let (root, issues) = parse(".. note::\n\n   Be careful.\n");
    assert!(issues.is_empty());
    let node = find(&root, NodeKind::Admonition).expect("admonition node");
    assert_eq!(node.name(), Some("note"));
    assert_eq!(node.line(), Some(1));
}

#[test]
fn image_and_table_directives() {
    let (root, _) = parse(".. image:: pic.png\n\n.. list-table::\n\n   * - cell\n");
    assert_eq!(
        find(&root, NodeKind::Image).and_then(Node::name),
        Some("image")
    );
    assert_eq!(
        find(&root, NodeKind::Table).and_then(Node::name),
        Some("list-table")
    );
}

#[test]
fn unknown_directive_reports_error() {
    let (root, issues) = parse(".. bogus::\n\n   content\n");
    assert!(find(&root, NodeKind::SystemMessage).is_some());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[0].message, "Unknown directive type \"bogus\".");
    assert_eq!(issues[0].line, Some(1));
}

#[test]
fn target_node() {
    let (root, _) = parse(".. _label: https://example.com\n");
    let target = find(&root, NodeKind::Target).expect("target node");
    assert_eq!(target.line(), Some(1));
}

#[test]
fn comment_node() {
    let (root, issues) = parse(".. just a comment\n   continued\n");
    assert!(issues.is_empty());
    let comment = find(&root, NodeKind::Comment).expect("comment node");
    assert_eq!(comment.raw_line_count(), 2);
}

#[test]
fn bullet_list_items() {
    let (root, _) = parse("- first\n- second\n  wrapped\n- third\n");
    let list = find(&root, NodeKind::BulletList).expect("list node");
    let items: Vec<&Node> = list
        .children()
        .iter()
        .filter(|c| c.kind() == NodeKind::ListItem)
        .collect();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].raw_line_count(), 2);
}

#[test]
fn transition_line() {
    let (root, _) = parse("Before.\n\n----\n\nAfter.\n");
    assert!(find(&root, NodeKind::Transition).is_some());
}

#[test]
fn parse_is_idempotent() {
    let text = "Heading\n=======\n\nSome text::\n\n    literal\n\n.. note::\n\n   body\n";
    let parser = BlockParser::new();
    let (first_tree, first_issues) = parser.parse(text);
    let (second_tree, second_issues) = parser.parse(text);
    assert_eq!(format!("{first_tree:?}"), format!("{second_tree:?}"));
    assert_eq!(format!("{first_issues:?}"), format!("{second_issues:?}"));
}
