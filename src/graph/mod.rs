//! Directed graph model built from parsed DSL records
//!
//! The graph is a plain ordered list of nodes and edges plus a few global
//! attributes. Layout is left entirely to the rendering engine.

pub mod style;

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::parser::{EdgeRecord, NodeRecord, Records};

pub use style::{NodeStyle, Shape};

/// Id of the attribution node appended to every graph
pub const ATTRIBUTION_ID: &str = "watermark";
/// Text of the attribution node
pub const ATTRIBUTION_LABEL: &str = "Made by Mandeep Singh";

/// Direction in which ranks are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum RankDir {
    #[default]
    TB,
    LR,
    BT,
    RL,
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankDir::TB => "TB",
            RankDir::LR => "LR",
            RankDir::BT => "BT",
            RankDir::RL => "RL",
        };
        f.write_str(s)
    }
}

/// Graph-wide rendering attributes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphAttributes {
    pub rankdir: RankDir,
    /// Default node font
    pub fontname: String,
    /// Default node font size in points
    pub fontsize: u32,
    /// Default node shape
    pub node_shape: Shape,
}

impl Default for GraphAttributes {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            fontname: "Courier".to_string(),
            fontsize: 10,
            node_shape: Shape::Box,
        }
    }
}

impl GraphAttributes {
    pub fn with_rankdir(mut self, rankdir: RankDir) -> Self {
        self.rankdir = rankdir;
        self
    }

    pub fn with_font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.fontname = name.into();
        self.fontsize = size;
        self
    }
}

/// How a node's body is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStyle {
    Filled,
    Italic,
}

impl DrawStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            DrawStyle::Filled => "filled",
            DrawStyle::Italic => "italic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub shape: Shape,
    pub style: DrawStyle,
    /// Outline and fill color
    pub color: Option<&'static str>,
    pub font_color: Option<&'static str>,
}

impl GraphNode {
    /// A declared flowchart node styled for its kind
    pub fn styled(record: &NodeRecord) -> Self {
        let style = NodeStyle::for_kind(&record.kind);
        Self {
            id: record.id.clone(),
            label: record.label.clone(),
            shape: style.shape,
            style: DrawStyle::Filled,
            color: Some(style.fill),
            font_color: None,
        }
    }

    /// The fixed attribution marker
    pub fn attribution() -> Self {
        Self {
            id: ATTRIBUTION_ID.to_string(),
            label: ATTRIBUTION_LABEL.to_string(),
            shape: Shape::Plaintext,
            style: DrawStyle::Italic,
            color: None,
            font_color: Some("gray"),
        }
    }

    pub fn is_attribution(&self) -> bool {
        self.id == ATTRIBUTION_ID && self.shape == Shape::Plaintext
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub label: Option<String>,
}

impl From<&EdgeRecord> for GraphEdge {
    fn from(record: &EdgeRecord) -> Self {
        Self {
            source: record.source.clone(),
            target: record.target.clone(),
            label: record.condition.clone(),
        }
    }
}

/// A complete flowchart ready to hand to the rendering engine
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub attributes: GraphAttributes,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// Build a graph from parse output with the given global attributes
    pub fn from_records(records: &Records, attributes: GraphAttributes) -> Self {
        build_with(attributes, &records.nodes, &records.edges)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Nodes that came from the DSL, without the attribution node
    pub fn flowchart_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| !n.is_attribution())
    }
}

/// Build a graph with default attributes
pub fn build<'a, N, E>(nodes: N, edges: E) -> Graph
where
    N: IntoIterator<Item = &'a NodeRecord>,
    E: IntoIterator<Item = &'a EdgeRecord>,
{
    build_with(GraphAttributes::default(), nodes, edges)
}

/// Build a graph.
///
/// Edge endpoints are not checked against the declared nodes; a dangling
/// reference is passed through to the rendering engine as-is.
pub fn build_with<'a, N, E>(attributes: GraphAttributes, nodes: N, edges: E) -> Graph
where
    N: IntoIterator<Item = &'a NodeRecord>,
    E: IntoIterator<Item = &'a EdgeRecord>,
{
    let mut graph_nodes: Vec<GraphNode> = nodes.into_iter().map(GraphNode::styled).collect();
    let graph_edges: Vec<GraphEdge> = edges.into_iter().map(GraphEdge::from).collect();
    graph_nodes.push(GraphNode::attribution());

    debug!(
        nodes = graph_nodes.len(),
        edges = graph_edges.len(),
        "built flowchart graph"
    );

    Graph {
        attributes,
        nodes: graph_nodes,
        edges: graph_edges,
    }
}
