//! Parser for the line-oriented flowchart DSL

mod lines;
pub mod records;

pub use lines::{
    edge_records, node_records, parse, parse_edge_line, parse_node_line, split_sections, Line,
    Sections,
};
pub use records::*;
