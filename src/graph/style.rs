//! Fixed visual styling per node kind

use std::fmt;

use serde::Deserialize;

use crate::parser::NodeKind;

/// Node outline shapes understood by the rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Box,
    Oval,
    Diamond,
    Parallelogram,
    Rectangle,
    Plaintext,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Box => "box",
            Shape::Oval => "oval",
            Shape::Diamond => "diamond",
            Shape::Parallelogram => "parallelogram",
            Shape::Rectangle => "rectangle",
            Shape::Plaintext => "plaintext",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape and fill color for one node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub shape: Shape,
    pub fill: &'static str,
}

impl NodeStyle {
    /// Style for kinds outside the known vocabulary
    pub const DEFAULT: NodeStyle = NodeStyle::new(Shape::Box, "white");

    pub const fn new(shape: Shape, fill: &'static str) -> Self {
        Self { shape, fill }
    }

    /// Look up the style for a node kind
    pub fn for_kind(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::Start => NodeStyle::new(Shape::Oval, "lightgreen"),
            NodeKind::End => NodeStyle::new(Shape::Oval, "lightcoral"),
            NodeKind::Operation => NodeStyle::new(Shape::Box, "lightblue"),
            NodeKind::Condition => NodeStyle::new(Shape::Diamond, "lightyellow"),
            NodeKind::InputOutput => NodeStyle::new(Shape::Parallelogram, "lightpink"),
            NodeKind::Subroutine => NodeStyle::new(Shape::Rectangle, "lightgray"),
            NodeKind::Other(_) => NodeStyle::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        assert_eq!(
            NodeStyle::for_kind(&NodeKind::Start),
            NodeStyle::new(Shape::Oval, "lightgreen")
        );
        assert_eq!(
            NodeStyle::for_kind(&NodeKind::Condition),
            NodeStyle::new(Shape::Diamond, "lightyellow")
        );
        assert_eq!(
            NodeStyle::for_kind(&NodeKind::InputOutput).shape,
            Shape::Parallelogram
        );
    }

    #[test]
    fn test_unknown_kind_uses_default() {
        let style = NodeStyle::for_kind(&NodeKind::from_token("loop"));
        assert_eq!(style, NodeStyle::DEFAULT);
        assert_eq!(style.shape, Shape::Box);
        assert_eq!(style.fill, "white");
    }
}
