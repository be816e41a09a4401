//! Record types produced by the DSL line parser

use std::fmt;

/// Kind of a flowchart node as written after `=>` in a declaration line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Start,
    End,
    Operation,
    Condition,
    InputOutput,
    Subroutine,
    /// Any token outside the known vocabulary. Accepted, styled with the default.
    Other(String),
}

impl NodeKind {
    /// Classify a type token. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Self {
        match token {
            "start" => NodeKind::Start,
            "end" => NodeKind::End,
            "operation" => NodeKind::Operation,
            "condition" => NodeKind::Condition,
            "inputoutput" => NodeKind::InputOutput,
            "subroutine" => NodeKind::Subroutine,
            other => NodeKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Start => "start",
            NodeKind::End => "end",
            NodeKind::Operation => "operation",
            NodeKind::Condition => "condition",
            NodeKind::InputOutput => "inputoutput",
            NodeKind::Subroutine => "subroutine",
            NodeKind::Other(token) => token.as_str(),
        }
    }

    /// True for the six kinds with a dedicated style
    pub fn is_known(&self) -> bool {
        !matches!(self, NodeKind::Other(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node declaration: `<id>=><kind>: <label>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
        }
    }
}

/// An edge declaration: `<source>(<condition>)-><target>`, condition optional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub condition: Option<String>,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Which half of the DSL text a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Nodes,
    Edges,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Nodes => write!(f, "node"),
            Section::Edges => write!(f, "edge"),
        }
    }
}

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A line that did not match its section's pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub section: Section,
    /// Byte range of the line within the original (untrimmed) source
    pub span: Span,
    pub text: String,
}

/// Everything one parse pass produced, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Records {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub skipped: Vec<SkippedLine>,
}
