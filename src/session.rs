//! A conversion session holding the current flowchart

use std::path::Path;

use tracing::debug;

use crate::config::FlowchartConfig;
use crate::error::RenderError;
use crate::graph::Graph;
use crate::parser;
use crate::renderer::{self, Graphviz, OutputFormat, RenderEngine, Rendered};

/// Owns the most recently converted graph and the engine used to save it.
///
/// Each [`Session::convert`] replaces the previous graph; nothing carries
/// over between conversions.
#[derive(Debug)]
pub struct Session<E = Graphviz> {
    config: FlowchartConfig,
    engine: E,
    graph: Option<Graph>,
}

impl Session<Graphviz> {
    /// A session rendering through Graphviz as configured
    pub fn new(config: FlowchartConfig) -> Self {
        let engine = Graphviz::new(config.engine.clone());
        Self::with_engine(config, engine)
    }
}

impl Default for Session<Graphviz> {
    fn default() -> Self {
        Self::new(FlowchartConfig::default())
    }
}

impl<E: RenderEngine> Session<E> {
    pub fn with_engine(config: FlowchartConfig, engine: E) -> Self {
        Self {
            config,
            engine,
            graph: None,
        }
    }

    /// Parse DSL text and make the result the current graph
    pub fn convert(&mut self, source: &str) -> &Graph {
        let records = parser::parse(source);
        debug!(
            nodes = records.nodes.len(),
            edges = records.edges.len(),
            skipped = records.skipped.len(),
            "parsed flowchart dsl"
        );
        self.graph
            .insert(Graph::from_records(&records, self.config.graph.clone()))
    }

    /// The current graph, if a conversion has happened
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Save the current graph.
    ///
    /// Fails with [`RenderError::NoGraph`] before touching the filesystem when
    /// nothing has been converted yet.
    pub fn save(&self, format: OutputFormat, destination: &Path) -> Result<Rendered, RenderError> {
        let graph = self.graph.as_ref().ok_or(RenderError::NoGraph)?;
        renderer::render(graph, format, destination, &self.engine)
    }
}
