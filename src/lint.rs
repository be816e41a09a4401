//! Optional validation pass over DSL text.
//!
//! Conversion never runs this: skipped lines and dangling edge references
//! are accepted silently and left to the rendering engine. Callers that want
//! feedback before rendering can run [`check`] and print the warnings.

use std::collections::HashSet;
use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::graph::ATTRIBUTION_ID;
use crate::parser::{parse_edge_line, parse_node_line, split_sections, Line, Section, Span};

/// A problem found in DSL text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
    pub span: Span,
}

/// Category of lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    /// A non-blank line that matched neither pattern of its section
    Skipped,
    /// An edge endpoint that no node line declares
    Dangling,
    /// A node id declared more than once
    Duplicate,
    /// A node id that clashes with the attribution node
    Reserved,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Skipped => write!(f, "skipped"),
            LintCategory::Dangling => write!(f, "dangling"),
            LintCategory::Duplicate => write!(f, "duplicate"),
            LintCategory::Reserved => write!(f, "reserved"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

impl LintWarning {
    fn new(category: LintCategory, message: String, line: &Line<'_>) -> Self {
        Self {
            category,
            message,
            span: line.span(),
        }
    }

    /// Format the warning with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, self.span.start)
            .with_message(&self.message)
            .with_label(
                Label::new((filename, self.span.clone()))
                    .with_message(self.category.to_string())
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Run every check on `source`, in source order
pub fn check(source: &str) -> Vec<LintWarning> {
    let sections = split_sections(source);
    let mut warnings = Vec::new();
    let mut declared: HashSet<String> = HashSet::new();

    for line in sections.node_lines() {
        let Some(node) = parse_node_line(line.text) else {
            check_skipped(Section::Nodes, &line, &mut warnings);
            continue;
        };
        if node.id == ATTRIBUTION_ID {
            warnings.push(LintWarning::new(
                LintCategory::Reserved,
                format!("node id '{}' is also used by the attribution node", node.id),
                &line,
            ));
        }
        if declared.contains(&node.id) {
            warnings.push(LintWarning::new(
                LintCategory::Duplicate,
                format!("node '{}' is declared more than once", node.id),
                &line,
            ));
        } else {
            declared.insert(node.id);
        }
    }

    for line in sections.edge_lines() {
        let Some(edge) = parse_edge_line(line.text) else {
            check_skipped(Section::Edges, &line, &mut warnings);
            continue;
        };
        for endpoint in [&edge.source, &edge.target] {
            if !declared.contains(endpoint) {
                warnings.push(LintWarning::new(
                    LintCategory::Dangling,
                    format!("edge refers to undeclared node '{endpoint}'"),
                    &line,
                ));
            }
        }
    }

    warnings
}

fn check_skipped(section: Section, line: &Line<'_>, warnings: &mut Vec<LintWarning>) {
    if line.text.trim().is_empty() {
        return;
    }
    warnings.push(LintWarning::new(
        LintCategory::Skipped,
        format!("line does not match the {section} pattern and will be ignored"),
        line,
    ));
}
