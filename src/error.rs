//! Error types for saving flowcharts

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::renderer::EngineError;

/// Errors that can occur when saving a flowchart
#[derive(Debug, Error)]
pub enum RenderError {
    /// Save requested before any DSL was converted
    #[error("no flowchart to save, convert some DSL first")]
    NoGraph,

    /// The rendering engine failed; passed through unchanged
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Writing an output file of our own failed
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenderError {
    /// True for errors the user can fix by converting first
    pub fn is_no_graph(&self) -> bool {
        matches!(self, RenderError::NoGraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_graph_display() {
        let err = RenderError::NoGraph;
        assert!(err.is_no_graph());
        assert!(err.to_string().contains("convert"));
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let inner = EngineError::Failed {
            program: "dot".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "syntax error in line 3".to_string(),
        };
        let expected = inner.to_string();
        let err = RenderError::from(inner);
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_no_graph());
    }
}
