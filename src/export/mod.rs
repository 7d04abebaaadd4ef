//! Export functionality for graph summaries.
//!
//! This module provides exporters for printing the summary of a loaded
//! graph in various formats: plain text, JSON, and Markdown.

pub mod json;
pub mod markdown;
pub mod text;

use crate::graph::{AdjacencyGraph, EdgeId, EdgeRecord, GraphSummary};
use std::collections::HashSet;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text - the classic vertex/edge report
    #[default]
    Text,
    /// JSON format - machine-readable, full adjacency
    Json,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// One node and the edges linked from it, in parse order.
#[derive(Debug, Clone)]
pub struct NodeEdges {
    /// Node label
    pub label: String,
    /// (id, record) pairs from the node's adjacency list
    pub edges: Vec<(EdgeId, EdgeRecord)>,
}

/// Data container for export operations.
///
/// Holds everything an exporter may print about one loaded graph.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Where the graph was loaded from
    pub source: String,
    /// Summary counts and raw edge lines
    pub summary: GraphSummary,
    /// Distinct nodes in header order with their linked edges
    pub nodes: Vec<NodeEdges>,
}

impl ExportData {
    /// Create new export data from a loaded graph.
    pub fn new(source: impl Into<String>, graph: &AdjacencyGraph) -> Self {
        let mut seen = HashSet::new();
        let nodes = graph
            .nodes()
            .iter()
            .filter(|label| seen.insert(label.as_str()))
            .map(|label| NodeEdges {
                label: label.clone(),
                edges: graph
                    .adjacency(label)
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|&id| graph.edge(id).map(|record| (id, record.clone())))
                    .collect(),
            })
            .collect();

        Self {
            source: source.into(),
            summary: graph.summary(),
            nodes,
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(
            "markdown".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert_eq!(
            "md".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Text), "text");
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Markdown), "markdown");
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
    }

    #[test]
    fn test_export_data_nodes_follow_header_order() {
        let graph = parse_str("D\nc,a,b,a\n(a,b,5)\n(c,a)\n(a,c)").unwrap();
        let data = ExportData::new("graph.txt", &graph);

        let labels: Vec<_> = data.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);

        let a = &data.nodes[1];
        assert_eq!(a.edges.len(), 2);
        assert_eq!(a.edges[0], (EdgeId::new(0), EdgeRecord::weighted("b", "5")));
        assert_eq!(a.edges[1], (EdgeId::new(2), EdgeRecord::unweighted("c")));
        assert!(data.nodes[2].edges.is_empty());
    }

    #[test]
    fn test_export_to_string_text() {
        let graph = parse_str("D\na,b\n(a,b)").unwrap();
        let data = ExportData::new("graph.txt", &graph);

        let out = export_to_string(ExportFormat::Text, &data).unwrap();
        assert!(out.starts_with("# Vertices: 2\n"));
    }
}
