//! Reader and header dispatcher for graph files.
//!
//! A graph file is plain text:
//!
//! ```text
//! D              <- graph type marker, `G` (undirected) or `D` (directed)
//! a,b,c          <- comma-separated node labels
//! (a,b,5)        <- one edge per line, optionally weighted
//! (b,c)
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::GraphKind;
use crate::error::{GraphError, GraphResult};
use crate::graph::AdjacencyGraph;

/// 1-based line number of the first edge line in a graph file.
pub const FIRST_EDGE_LINE: usize = 3;

/// Reads a graph file and splits it into lines.
///
/// Interior empty lines are preserved. A `\r` before a line break is
/// dropped and the newline ending the last line does not start a new one.
///
/// # Arguments
///
/// * `path` - Path to the graph file
///
/// # Returns
///
/// The lines of the file in order, or `UnreadableResource` if the file
/// is missing or cannot be read.
pub fn read_lines(path: &Path) -> GraphResult<Vec<String>> {
    let content =
        fs::read_to_string(path).map_err(|source| GraphError::UnreadableResource {
            path: path.to_path_buf(),
            source,
        })?;

    let lines = split_lines(&content);
    debug!(path = %path.display(), lines = lines.len(), "read graph file");
    Ok(lines)
}

/// Splits already-loaded text the same way [`read_lines`] does.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Parses a graph file from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use graphsum::parser::parse_file;
///
/// let graph = parse_file(Path::new("graph.txt")).unwrap();
/// println!("{} vertices", graph.vertex_count());
/// ```
pub fn parse_file(path: &Path) -> GraphResult<AdjacencyGraph> {
    let lines = read_lines(path)?;
    parse_lines(&lines)
}

/// Parses a graph from a string.
///
/// # Example
///
/// ```
/// use graphsum::parser::parse_str;
///
/// let graph = parse_str("D\na,b,c\n(a,b,5)\n(b,c)").unwrap();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.all_edges().len(), 2);
/// ```
pub fn parse_str(content: &str) -> GraphResult<AdjacencyGraph> {
    parse_lines(&split_lines(content))
}

/// Interprets the header lines and builds the graph they describe.
///
/// Line 0 selects the builder, line 1 holds the node labels (taken
/// literally, no trimming) and every following line is an edge.
pub fn parse_lines(lines: &[String]) -> GraphResult<AdjacencyGraph> {
    let marker = lines
        .first()
        .ok_or(GraphError::MissingHeader("graph type marker"))?;
    let kind: GraphKind = marker.parse()?;

    let node_line = lines.get(1).ok_or(GraphError::MissingHeader("node list"))?;
    let nodes: Vec<String> = node_line.split(',').map(str::to_string).collect();
    let edge_lines = lines[2..].to_vec();

    debug!(
        %kind,
        nodes = nodes.len(),
        edges = edge_lines.len(),
        "parsed graph header"
    );

    match kind {
        GraphKind::Undirected => AdjacencyGraph::build_undirected(nodes, edge_lines),
        GraphKind::Directed => AdjacencyGraph::build_directed(nodes, edge_lines),
    }
}
