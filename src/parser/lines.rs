//! Line-oriented parsing of the flowchart DSL
//!
//! The DSL is two blocks separated by the first blank line: node
//! declarations, then edge declarations. Each line is matched on its own
//! and lines that do not match are skipped without failing the parse.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::records::{EdgeRecord, NodeKind, NodeRecord, Records, Section, SkippedLine, Span};

const NODE_PATTERN: &str = r"^(\w+)=>(\w+)\s*:\s*(.+)$";
const EDGE_PATTERN: &str = r"^(\w+)(?:\(([^)]*)\))?->(\w+)$";
const SECTION_BREAKS: [&str; 2] = ["\n\n", "\n\r\n"];

fn node_regex() -> &'static Regex {
    static NODE: OnceLock<Regex> = OnceLock::new();
    NODE.get_or_init(|| Regex::new(NODE_PATTERN).expect("node pattern is a valid regex"))
}

fn edge_regex() -> &'static Regex {
    static EDGE: OnceLock<Regex> = OnceLock::new();
    EDGE.get_or_init(|| Regex::new(EDGE_PATTERN).expect("edge pattern is a valid regex"))
}

/// A single source line together with its byte range in the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl<'a> Line<'a> {
    pub fn span(&self) -> Span {
        self.start..self.start + self.text.len()
    }
}

/// The node and edge blocks of a DSL document
#[derive(Debug, Clone, Copy)]
pub struct Sections<'a> {
    nodes: &'a str,
    nodes_start: usize,
    edges: Option<(&'a str, usize)>,
}

impl<'a> Sections<'a> {
    /// Node declaration lines, lazily
    pub fn node_lines(&self) -> impl Iterator<Item = Line<'a>> + 'a {
        lines_from(self.nodes, self.nodes_start)
    }

    /// Edge declaration lines, lazily. Empty when the text has no blank line.
    pub fn edge_lines(&self) -> impl Iterator<Item = Line<'a>> + 'a {
        let (text, start) = self.edges.unwrap_or(("", 0));
        lines_from(text, start)
    }

    pub fn has_edges(&self) -> bool {
        self.edges.is_some()
    }
}

/// Split DSL text at the first blank line.
///
/// Surrounding whitespace is trimmed first, so leading blank lines never
/// produce an empty node block. A blank line may end in `\r\n`.
pub fn split_sections(source: &str) -> Sections<'_> {
    let leading = source.len() - source.trim_start().len();
    let body = source.trim();

    match find_break(body) {
        Some((at, len)) => Sections {
            nodes: &body[..at],
            nodes_start: leading,
            edges: Some((&body[at + len..], leading + at + len)),
        },
        None => Sections {
            nodes: body,
            nodes_start: leading,
            edges: None,
        },
    }
}

/// Byte offset and length of the first blank-line separator
fn find_break(body: &str) -> Option<(usize, usize)> {
    SECTION_BREAKS
        .iter()
        .filter_map(|sep| body.find(sep).map(|at| (at, sep.len())))
        .min_by_key(|&(at, _)| at)
}

/// Iterate lines like `str::lines`, keeping track of byte offsets
fn lines_from(text: &str, base: usize) -> impl Iterator<Item = Line<'_>> + '_ {
    let mut offset = base;
    text.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Line { text: line, start }
    })
}

/// Match a node declaration line, `None` if it does not fit the pattern
pub fn parse_node_line(line: &str) -> Option<NodeRecord> {
    let caps = node_regex().captures(line)?;
    Some(NodeRecord::new(
        &caps[1],
        NodeKind::from_token(&caps[2]),
        caps[3].trim(),
    ))
}

/// Match an edge declaration line, `None` if it does not fit the pattern.
///
/// An empty condition `a()->b` leaves the edge unlabeled.
pub fn parse_edge_line(line: &str) -> Option<EdgeRecord> {
    let caps = edge_regex().captures(line)?;
    let edge = EdgeRecord::new(&caps[1], &caps[3]);
    match caps.get(2).map(|m| m.as_str()) {
        Some(condition) if !condition.is_empty() => Some(edge.with_condition(condition.trim())),
        _ => Some(edge),
    }
}

/// Lazily parse the node block, skipping lines that do not match
pub fn node_records(source: &str) -> impl Iterator<Item = NodeRecord> + '_ {
    split_sections(source)
        .node_lines()
        .filter_map(|line| parse_node_line(line.text))
}

/// Lazily parse the edge block, skipping lines that do not match
pub fn edge_records(source: &str) -> impl Iterator<Item = EdgeRecord> + '_ {
    split_sections(source)
        .edge_lines()
        .filter_map(|line| parse_edge_line(line.text))
}

/// Parse a complete DSL document.
///
/// Never fails: lines that do not match are collected in
/// [`Records::skipped`] for callers that want to report them.
pub fn parse(source: &str) -> Records {
    let sections = split_sections(source);
    let mut records = Records::default();

    for line in sections.node_lines() {
        match parse_node_line(line.text) {
            Some(node) => records.nodes.push(node),
            None => skip(&mut records, Section::Nodes, line),
        }
    }

    for line in sections.edge_lines() {
        match parse_edge_line(line.text) {
            Some(edge) => records.edges.push(edge),
            None => skip(&mut records, Section::Edges, line),
        }
    }

    records
}

fn skip(records: &mut Records, section: Section, line: Line<'_>) {
    trace!(section = %section, line = line.text, "skipping unmatched line");
    records.skipped.push(SkippedLine {
        section,
        span: line.span(),
        text: line.text.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_node_line() {
        let node = parse_node_line("n1=>start: Begin").unwrap();
        assert_eq!(node, NodeRecord::new("n1", NodeKind::Start, "Begin"));
    }

    #[test]
    fn test_node_line_whitespace_around_colon() {
        let node = parse_node_line("op2=>operation   :   x = x + 1  ").unwrap();
        assert_eq!(node.kind, NodeKind::Operation);
        assert_eq!(node.label, "x = x + 1");
    }

    #[test]
    fn test_node_label_may_contain_colons() {
        let node = parse_node_line("io3=>inputoutput: input: name").unwrap();
        assert_eq!(node.label, "input: name");
    }

    #[test]
    fn test_node_line_rejects_space_before_arrow() {
        assert_eq!(parse_node_line("n1 =>start: Begin"), None);
        assert_eq!(parse_node_line("n1=> start: Begin"), None);
    }

    #[test]
    fn test_node_line_requires_label() {
        assert_eq!(parse_node_line("n1=>start:"), None);
        // trailing whitespace satisfies the pattern and trims to nothing
        assert_eq!(parse_node_line("n1=>start:   ").unwrap().label, "");
    }

    #[test]
    fn test_node_line_unicode_identifiers() {
        let node = parse_node_line("größe=>operation: ändern").unwrap();
        assert_eq!(node.id, "größe");
    }

    #[test]
    fn test_edge_line_plain() {
        assert_eq!(parse_edge_line("n1->n2"), Some(EdgeRecord::new("n1", "n2")));
    }

    #[test]
    fn test_edge_line_condition() {
        let edge = parse_edge_line("cond3(yes)->op4").unwrap();
        assert_eq!(edge.condition.as_deref(), Some("yes"));
    }

    #[test]
    fn test_edge_line_condition_trimmed() {
        let edge = parse_edge_line("c( no, right )->e").unwrap();
        assert_eq!(edge.condition.as_deref(), Some("no, right"));
    }

    #[test]
    fn test_edge_line_empty_condition_unlabeled() {
        assert_eq!(parse_edge_line("a()->b"), Some(EdgeRecord::new("a", "b")));
    }

    #[test]
    fn test_edge_line_rejects_trailing_text() {
        assert_eq!(parse_edge_line("a->b c"), None);
        assert_eq!(parse_edge_line("a -> b"), None);
    }

    #[test]
    fn test_split_without_blank_line_has_no_edges() {
        let sections = split_sections("a=>start: A\na->b");
        assert!(!sections.has_edges());
        assert_eq!(sections.node_lines().count(), 2);
        assert_eq!(sections.edge_lines().count(), 0);
    }

    #[test]
    fn test_split_only_at_first_blank_line() {
        let sections = split_sections("a=>start: A\n\na->b\n\nb->c");
        let edges: Vec<_> = sections.edge_lines().map(|l| l.text).collect();
        assert_eq!(edges, vec!["a->b", "", "b->c"]);
    }

    #[test]
    fn test_leading_blank_lines_are_trimmed() {
        let records = parse("\n\n\na=>start: A\n\na->a\n");
        assert_eq!(records.nodes.len(), 1);
        assert_eq!(records.edges.len(), 1);
    }

    #[test]
    fn test_line_spans_point_into_source() {
        let source = "  a=>start: A\n\nbad line\n";
        let records = parse(source);
        assert_eq!(records.skipped.len(), 1);
        let skipped = &records.skipped[0];
        assert_eq!(skipped.section, Section::Edges);
        assert_eq!(&source[skipped.span.clone()], "bad line");
    }

    #[test]
    fn test_crlf_line_endings() {
        let sections = split_sections("a=>start: A\r\nb=>end: B");
        let lines: Vec<_> = sections.node_lines().map(|l| l.text).collect();
        assert_eq!(lines, vec!["a=>start: A", "b=>end: B"]);
    }

    #[test]
    fn test_crlf_blank_line_splits_sections() {
        let source = "n1=>start: Begin\r\nn2=>end: Finish\r\n\r\nn1->n2\r\n";
        let records = parse(source);
        assert_eq!(records.nodes.len(), 2);
        assert_eq!(records.edges, vec![EdgeRecord::new("n1", "n2")]);
        assert!(records.skipped.is_empty());
    }

    #[test]
    fn test_crlf_edge_spans_point_into_source() {
        let source = "a=>start: A\r\n\r\nbad\r\n";
        let skipped = &parse(source).skipped[0];
        assert_eq!(&source[skipped.span.clone()], "bad");
    }

    #[test]
    fn test_lazy_record_iterators() {
        let source = "a=>start: A\nnoise\nb=>end: B\n\na->b\nnoise";
        assert_eq!(node_records(source).count(), 2);
        assert_eq!(edge_records(source).count(), 1);
    }
}
