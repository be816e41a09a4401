//! Format adapter: hands a [`Graph`] to the rendering engine
//!
//! `png`, `svg` and `pdf` are rendered directly by the engine. `html` is a
//! PNG render plus a small page that embeds it by relative path.

pub mod dot;
pub mod engine;
pub mod format;
pub mod html;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::RenderError;
use crate::graph::Graph;

pub use dot::to_dot;
pub use engine::{EngineConfig, EngineError, Graphviz, RenderEngine};
pub use format::{ImageFormat, OutputFormat, UnknownFormat};

/// Files written by one render call, in the order they were produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub files: Vec<PathBuf>,
}

impl Rendered {
    /// The file a user asked for: the page for `html`, the image otherwise
    pub fn primary(&self) -> Option<&Path> {
        self.files.last().map(PathBuf::as_path)
    }
}

/// Strip the final extension from a user-chosen destination
pub fn output_base(destination: &Path) -> PathBuf {
    destination.with_extension("")
}

/// Append `.ext` to a base path without touching any dots already in it
pub fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Render `graph` as `format` next to `destination`.
///
/// The destination's extension is replaced by the format's. Engine errors are
/// returned unchanged and nothing is retried.
pub fn render(
    graph: &Graph,
    format: OutputFormat,
    destination: &Path,
    engine: &impl RenderEngine,
) -> Result<Rendered, RenderError> {
    let base = output_base(destination);
    let image_format = format.image_format();
    let image = with_suffix(&base, image_format.extension());

    engine.render(&to_dot(graph), image_format, &image)?;
    info!(path = %image.display(), "wrote {image_format} flowchart");
    let mut files = vec![image];

    if format == OutputFormat::Html {
        let page = with_suffix(&base, OutputFormat::Html.extension());
        let image_name = base
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let image_name = format!("{image_name}.{}", image_format.extension());

        html::write_wrapper(&page, &image_name).map_err(|e| RenderError::Write {
            path: page.clone(),
            source: e,
        })?;
        info!(path = %page.display(), "wrote html wrapper");
        files.push(page);
    }

    Ok(Rendered { files })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_base_strips_last_extension() {
        assert_eq!(output_base(Path::new("out/chart.svg")), PathBuf::from("out/chart"));
        assert_eq!(output_base(Path::new("chart")), PathBuf::from("chart"));
        assert_eq!(output_base(Path::new("a.tar.gz")), PathBuf::from("a.tar"));
    }

    #[test]
    fn test_with_suffix_keeps_inner_dots() {
        assert_eq!(with_suffix(Path::new("v1.2"), "png"), PathBuf::from("v1.2.png"));
    }
}
