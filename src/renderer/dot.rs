//! DOT language serialization of a [`Graph`]

use crate::graph::{Graph, GraphEdge, GraphNode};

const INDENT: &str = "    ";
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Serialize a graph as a `digraph` document for the rendering engine
pub fn to_dot(graph: &Graph) -> String {
    let mut out = String::from("digraph G {\n");
    let attrs = &graph.attributes;

    out.push_str(&format!("{INDENT}graph [rankdir={}]\n", attrs.rankdir));
    out.push_str(&format!(
        "{INDENT}node [fontname={} fontsize={} shape={}]\n",
        quote(&attrs.fontname),
        attrs.fontsize,
        attrs.node_shape
    ));

    // Declared nodes first, then edges, then the attribution node, matching
    // the order in which the graph was built.
    let (attribution, declared): (Vec<&GraphNode>, Vec<&GraphNode>) =
        graph.nodes.iter().partition(|n| n.is_attribution());

    for node in declared {
        write_node(&mut out, node);
    }
    for edge in &graph.edges {
        write_edge(&mut out, edge);
    }
    for node in attribution {
        write_node(&mut out, node);
    }

    out.push_str("}\n");
    out
}

fn write_node(out: &mut String, node: &GraphNode) {
    let mut attrs = vec![
        format!("label={}", quote(&node.label)),
        format!("shape={}", node.shape),
        format!("style={}", node.style.as_str()),
    ];
    if let Some(color) = node.color {
        attrs.push(format!("color={}", quote(color)));
    }
    if let Some(color) = node.font_color {
        attrs.push(format!("fontcolor={}", quote(color)));
    }
    out.push_str(&format!(
        "{INDENT}{} [{}]\n",
        quote(&node.id),
        attrs.join(" ")
    ));
}

fn write_edge(out: &mut String, edge: &GraphEdge) {
    out.push_str(&format!(
        "{INDENT}{} -> {}",
        quote(&edge.source),
        quote(&edge.target)
    ));
    if let Some(label) = &edge.label {
        out.push_str(&format!(" [label={}]", quote(label)));
    }
    out.push('\n');
}

/// Quote a DOT identifier when it is not a plain ID or numeral.
///
/// Backslashes are kept so engine escapes like `\l` still work; an unescaped
/// double quote gets a backslash, and a dangling trailing backslash is
/// doubled so it cannot swallow the closing quote.
pub fn quote(id: &str) -> String {
    if is_plain_id(id) || is_numeral(id) {
        return id.to_string();
    }

    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    let mut backslashes = 0usize;
    for c in id.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' if backslashes % 2 == 0 => {
                quoted.push('\\');
                backslashes = 0;
            }
            _ => backslashes = 0,
        }
        quoted.push(c);
    }
    if backslashes % 2 == 1 {
        quoted.push('\\');
    }
    quoted.push('"');
    quoted
}

fn is_plain_id(id: &str) -> bool {
    let mut chars = id.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id))
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    match frac {
        None => !int.is_empty() && all_digits(int),
        Some(frac) => (!int.is_empty() || !frac.is_empty()) && all_digits(int) && all_digits(frac),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ids_unquoted() {
        assert_eq!(quote("n1"), "n1");
        assert_eq!(quote("_tmp"), "_tmp");
        assert_eq!(quote("lightgreen"), "lightgreen");
    }

    #[test]
    fn test_numerals_unquoted() {
        assert_eq!(quote("42"), "42");
        assert_eq!(quote("-1.5"), "-1.5");
        assert_eq!(quote(".5"), ".5");
        assert_eq!(quote("."), "\".\"");
    }

    #[test]
    fn test_keywords_quoted() {
        assert_eq!(quote("node"), "\"node\"");
        assert_eq!(quote("Graph"), "\"Graph\"");
    }

    #[test]
    fn test_spaces_and_unicode_quoted() {
        assert_eq!(quote("Do thing"), "\"Do thing\"");
        assert_eq!(quote("größe"), "\"größe\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_inner_quotes_escaped() {
        assert_eq!(quote(r#"print("hi")"#), r#""print(\"hi\")""#);
        assert_eq!(quote(r#"already \" escaped"#), r#""already \" escaped""#);
    }

    #[test]
    fn test_backslashes_kept() {
        assert_eq!(quote(r"a\lb"), r#""a\lb""#);
        assert_eq!(quote(r"ends\"), r#""ends\\""#);
        assert_eq!(quote(r"ends\\"), r#""ends\\""#);
    }
}
