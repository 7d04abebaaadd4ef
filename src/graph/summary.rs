//! Summary statistics for a loaded graph.

use super::AdjacencyGraph;
use crate::parser::types::GraphKind;

/// Summary reported for a loaded graph.
///
/// `edge_count` is the figure printed under `# Edges`. It is the number
/// of labels on the node line, not the number of edges; use
/// `edge_line_count()` or `edge_record_count` for those.
///
/// # Example
///
/// ```rust
/// use graphsum::parser::parse_str;
///
/// let summary = parse_str("D\na,b,c\n(a,b,5)\n(b,c)").unwrap().summary();
///
/// assert_eq!(summary.vertex_count, 3);
/// assert_eq!(summary.edge_count, 3);
/// assert_eq!(summary.edge_lines, vec!["(a,b,5)", "(b,c)"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    /// Directed or undirected
    pub kind: GraphKind,
    /// Number of distinct nodes
    pub vertex_count: usize,
    /// Number of labels on the node line, reported as "# Edges"
    pub edge_count: usize,
    /// Number of stored edge records (two per undirected edge)
    pub edge_record_count: usize,
    /// Edge lines exactly as read
    pub edge_lines: Vec<String>,
}

impl GraphSummary {
    /// Collects the summary of a graph.
    pub fn from_graph(graph: &AdjacencyGraph) -> Self {
        Self {
            kind: graph.kind(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.nodes().len(),
            edge_record_count: graph.all_edges().len(),
            edge_lines: graph.edge_lines().to_vec(),
        }
    }

    /// Number of edge lines in the file.
    pub fn edge_line_count(&self) -> usize {
        self.edge_lines.len()
    }
}

impl AdjacencyGraph {
    /// Returns the summary report for this graph.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary::from_graph(self)
    }
}
