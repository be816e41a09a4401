//! TOML configuration for graph attributes and the rendering engine

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::graph::GraphAttributes;
use crate::renderer::EngineConfig;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for one conversion session
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FlowchartConfig {
    /// Global attributes written into every graph
    pub graph: GraphAttributes,
    /// How the rendering engine is invoked
    pub engine: EngineConfig,
}

/// The built-in settings, spelled out
pub const DEFAULT_CONFIG: &str = r#"
[graph]
rankdir = "TB"
fontname = "Courier"
fontsize = 10
node_shape = "box"

[engine]
program = "dot"
cleanup = true
"#;

impl FlowchartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_graph(mut self, graph: GraphAttributes) -> Self {
        self.graph = graph;
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{RankDir, Shape};

    #[test]
    fn test_default_document_matches_default() {
        let parsed = FlowchartConfig::from_str(DEFAULT_CONFIG).expect("Should parse");
        assert_eq!(parsed, FlowchartConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = FlowchartConfig::from_str(
            r#"
[graph]
rankdir = "LR"
"#,
        )
        .expect("Should parse");
        assert_eq!(config.graph.rankdir, RankDir::LR);
        assert_eq!(config.graph.fontname, "Courier");
        assert_eq!(config.graph.node_shape, Shape::Box);
        assert_eq!(config.engine.program, "dot");
    }

    #[test]
    fn test_empty_config() {
        let config = FlowchartConfig::from_str("").expect("Should parse");
        assert_eq!(config, FlowchartConfig::default());
    }

    #[test]
    fn test_engine_section() {
        let config = FlowchartConfig::from_str(
            r#"
[engine]
program = "/opt/graphviz/bin/dot"
cleanup = false
"#,
        )
        .expect("Should parse");
        assert_eq!(config.engine.program, "/opt/graphviz/bin/dot");
        assert!(!config.engine.cleanup);
    }

    #[test]
    fn test_invalid_rankdir_error() {
        let result = FlowchartConfig::from_str("[graph]\nrankdir = \"diagonal\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = FlowchartConfig::from_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }
}
