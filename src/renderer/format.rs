//! Output formats

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Formats a flowchart can be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    Pdf,
    /// PNG image plus an HTML page that references it
    Html,
}

/// Formats the rendering engine produces directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
    Pdf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Png,
        OutputFormat::Svg,
        OutputFormat::Pdf,
        OutputFormat::Html,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Html => "html",
        }
    }

    /// The image the engine has to produce for this format
    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png | OutputFormat::Html => ImageFormat::Png,
            OutputFormat::Svg => ImageFormat::Svg,
            OutputFormat::Pdf => ImageFormat::Pdf,
        }
    }
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output format '{0}' (expected png, svg, pdf or html)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("png".parse::<OutputFormat>(), Ok(OutputFormat::Png));
        assert_eq!("SVG".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert_eq!(
            "jpeg".parse::<OutputFormat>(),
            Err(UnknownFormat("jpeg".to_string()))
        );
    }

    #[test]
    fn test_html_is_png_backed() {
        assert_eq!(OutputFormat::Html.image_format(), ImageFormat::Png);
        assert_eq!(OutputFormat::Pdf.image_format(), ImageFormat::Pdf);
    }
}
