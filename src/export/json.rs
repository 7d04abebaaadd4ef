//! JSON export implementation.
//!
//! Exports the graph summary and full adjacency in JSON format for
//! machine-readable output.

use super::{ExportData, Exporter};
use crate::parser::types::GraphKind;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable edge record for JSON output.
#[derive(Serialize)]
struct JsonEdge {
    id: usize,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<String>,
}

/// Serializable node with its adjacency list.
#[derive(Serialize)]
struct JsonNode {
    label: String,
    edges: Vec<JsonEdge>,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    vertices: usize,
    /// Node label count, mirrors the "# Edges" line of the text report
    edges: usize,
    edge_records: usize,
    edge_lines: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    source: String,
    kind: GraphKind,
    summary: JsonSummary,
    nodes: Vec<JsonNode>,
    edge_list: Vec<String>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let summary = &data.summary;

        let nodes: Vec<JsonNode> = data
            .nodes
            .iter()
            .map(|n| JsonNode {
                label: n.label.clone(),
                edges: n
                    .edges
                    .iter()
                    .map(|(id, record)| JsonEdge {
                        id: id.index(),
                        target: record.target.clone(),
                        weight: record.weight.clone(),
                    })
                    .collect(),
            })
            .collect();

        let export = JsonExport {
            source: data.source.clone(),
            kind: summary.kind,
            summary: JsonSummary {
                vertices: summary.vertex_count,
                edges: summary.edge_count,
                edge_records: summary.edge_record_count,
                edge_lines: summary.edge_line_count(),
            },
            nodes,
            edge_list: summary.edge_lines.clone(),
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn export_json(content: &str) -> serde_json::Value {
        let graph = parse_str(content).unwrap();
        let data = ExportData::new("graph.txt", &graph);
        let mut output = Vec::new();

        JsonExporter.export(&data, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        serde_json::from_str(&json_str).unwrap()
    }

    #[test]
    fn test_json_export_summary() {
        let parsed = export_json("D\na,b,c\n(a,b,5)\n(b,c)");

        assert_eq!(parsed["source"], "graph.txt");
        assert_eq!(parsed["kind"], "directed");
        assert_eq!(parsed["summary"]["vertices"], 3);
        assert_eq!(parsed["summary"]["edges"], 3);
        assert_eq!(parsed["summary"]["edge_records"], 2);
        assert_eq!(parsed["summary"]["edge_lines"], 2);
    }

    #[test]
    fn test_json_export_adjacency() {
        let parsed = export_json("D\na,b,c\n(a,b,5)\n(b,c)");

        let nodes = parsed["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 3);

        assert_eq!(nodes[0]["label"], "a");
        assert_eq!(nodes[0]["edges"][0]["id"], 0);
        assert_eq!(nodes[0]["edges"][0]["target"], "b");
        assert_eq!(nodes[0]["edges"][0]["weight"], "5");

        // Unweighted edges omit the weight field
        assert!(nodes[1]["edges"][0].get("weight").is_none());
        assert!(nodes[2]["edges"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_export_undirected() {
        let parsed = export_json("G\na,b\n(a,b)");

        assert_eq!(parsed["kind"], "undirected");
        assert_eq!(parsed["summary"]["edge_records"], 2);
        assert_eq!(parsed["nodes"][1]["edges"][0]["target"], "a");
        assert_eq!(parsed["edge_list"][0], "(a,b)");
    }
}
