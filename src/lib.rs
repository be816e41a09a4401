//! flowdot - turn a line-oriented flowchart DSL into Graphviz diagrams
//!
//! This library parses the flowchart DSL into node and edge records, builds a
//! styled directed graph, and hands it to Graphviz for `png`, `svg`, `pdf` or
//! `html` output.
//!
//! # Example
//!
//! ```rust
//! use flowdot::convert;
//!
//! let graph = convert("n1=>start: Begin\nn2=>end: Finish\n\nn1->n2");
//! assert_eq!(graph.nodes.len(), 3); // two declared nodes plus attribution
//! assert_eq!(graph.edges.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod lint;
pub mod parser;
pub mod renderer;
pub mod session;

pub use config::{ConfigError, FlowchartConfig};
pub use error::RenderError;
pub use graph::{build, Graph, GraphAttributes};
pub use lint::LintWarning;
pub use parser::{parse, EdgeRecord, NodeKind, NodeRecord, Records};
pub use renderer::{render, to_dot, EngineError, Graphviz, OutputFormat, RenderEngine, Rendered};
pub use session::Session;

/// Convert DSL text to a graph with default attributes
///
/// Lines that match neither the node nor the edge pattern are ignored.
///
/// # Example
///
/// ```rust
/// use flowdot::convert;
///
/// let graph = convert(r#"
/// cond=>condition: x > 0
/// yes=>operation: print(x)
///
/// cond(yes)->yes
/// "#);
///
/// assert_eq!(graph.edges[0].label.as_deref(), Some("yes"));
/// ```
pub fn convert(source: &str) -> Graph {
    convert_with_config(source, &FlowchartConfig::default())
}

/// Convert DSL text to a graph using the configured graph attributes
pub fn convert_with_config(source: &str, config: &FlowchartConfig) -> Graph {
    let records = parse(source);
    Graph::from_records(&records, config.graph.clone())
}

/// Convert DSL text straight to DOT source
///
/// # Example
///
/// ```rust
/// let dot = flowdot::convert_to_dot("a=>operation: step");
/// assert!(dot.starts_with("digraph G {"));
/// assert!(dot.contains("a [label=step shape=box style=filled color=lightblue]"));
/// ```
pub fn convert_to_dot(source: &str) -> String {
    to_dot(&convert(source))
}
