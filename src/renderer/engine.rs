//! External rendering engine boundary
//!
//! The adapter hands DOT text to a [`RenderEngine`] and asks for one image
//! file. [`Graphviz`] drives the `dot` executable; tests substitute their own
//! engine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::format::ImageFormat;

/// Errors reported by the rendering engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine executable could not be started
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The engine ran but rejected the graph or could not write its output
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Writing or removing the intermediate source file failed
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that turns DOT source into an image file
pub trait RenderEngine {
    /// Render `dot` to `output` in the given format
    fn render(&self, dot: &str, format: ImageFormat, output: &Path) -> Result<(), EngineError>;
}

/// Engine settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Executable to invoke
    pub program: String,
    /// Remove the intermediate DOT source file after a successful render
    pub cleanup: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            cleanup: true,
        }
    }
}

impl EngineConfig {
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }
}

/// The Graphviz `dot` command-line renderer
#[derive(Debug, Clone)]
pub struct Graphviz {
    config: EngineConfig,
}

impl Graphviz {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Where the DOT source is written next to `output`
    pub fn source_path(output: &Path) -> PathBuf {
        output.with_extension("gv")
    }
}

impl Default for Graphviz {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl RenderEngine for Graphviz {
    fn render(&self, dot: &str, format: ImageFormat, output: &Path) -> Result<(), EngineError> {
        let source = Self::source_path(output);
        fs::write(&source, dot).map_err(|e| EngineError::Io {
            path: source.clone(),
            source: e,
        })?;

        let program = &self.config.program;
        debug!(%program, %format, output = %output.display(), "running rendering engine");

        let result = Command::new(program)
            .arg(format!("-T{}", format.extension()))
            .arg("-o")
            .arg(output)
            .arg(&source)
            .output()
            .map_err(|e| EngineError::Spawn {
                program: program.clone(),
                source: e,
            })?;

        if !result.status.success() {
            return Err(EngineError::Failed {
                program: program.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        if self.config.cleanup {
            fs::remove_file(&source).map_err(|e| EngineError::Io {
                path: source.clone(),
                source: e,
            })?;
        }

        Ok(())
    }
}
