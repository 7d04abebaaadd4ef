//! Shared types for graph file parsing.
//!
//! This module defines the small typed values the parser hands to the
//! graph builders: the graph kind read from the header and the
//! tokenized form of a single edge line.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GraphError;

/// The kind of graph declared on the first line of a graph file.
///
/// # Example
///
/// ```
/// use graphsum::parser::types::GraphKind;
///
/// let kind: GraphKind = "D".parse().unwrap();
/// assert_eq!(kind, GraphKind::Directed);
/// assert!("X".parse::<GraphKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Marker `G`. Every edge is linked from both endpoints.
    Undirected,

    /// Marker `D`. Every edge is linked from its source only.
    Directed,
}

impl GraphKind {
    /// Returns the single-character marker used in graph files.
    pub fn marker(&self) -> &'static str {
        match self {
            GraphKind::Undirected => "G",
            GraphKind::Directed => "D",
        }
    }

    /// Returns true for directed graphs.
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}

impl FromStr for GraphKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(GraphKind::Undirected),
            "D" => Ok(GraphKind::Directed),
            other => Err(GraphError::UnknownGraphType(other.to_string())),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GraphKind::Undirected => "undirected",
            GraphKind::Directed => "directed",
        };
        write!(f, "{}", s)
    }
}

/// A single edge line after tokenizing.
///
/// Labels and weight are kept exactly as they appear between the commas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Token 0: the node the edge starts from.
    pub source: String,

    /// Token 1: the node the edge points at.
    pub target: String,

    /// Token 2, when present.
    pub weight: Option<String>,

    /// 1-based line number of the edge in the graph file.
    pub line: usize,
}

impl EdgeSpec {
    /// Returns true if the edge carries a weight token.
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.weight {
            Some(weight) => write!(f, "({},{},{})", self.source, self.target, weight),
            None => write!(f, "({},{})", self.source, self.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_kind_from_marker() {
        assert_eq!("G".parse::<GraphKind>().unwrap(), GraphKind::Undirected);
        assert_eq!("D".parse::<GraphKind>().unwrap(), GraphKind::Directed);
    }

    #[test]
    fn test_graph_kind_rejects_unknown_marker() {
        let err = "X".parse::<GraphKind>().unwrap_err();
        assert!(matches!(err, GraphError::UnknownGraphType(ref m) if m == "X"));

        // Markers are case sensitive and not trimmed
        assert!("d".parse::<GraphKind>().is_err());
        assert!(" D".parse::<GraphKind>().is_err());
        assert!("".parse::<GraphKind>().is_err());
    }

    #[test]
    fn test_graph_kind_marker_and_display() {
        assert_eq!(GraphKind::Undirected.marker(), "G");
        assert_eq!(GraphKind::Directed.marker(), "D");
        assert_eq!(format!("{}", GraphKind::Directed), "directed");
        assert!(GraphKind::Directed.is_directed());
        assert!(!GraphKind::Undirected.is_directed());
    }

    #[test]
    fn test_edge_spec_display() {
        let weighted = EdgeSpec {
            source: "a".to_string(),
            target: "b".to_string(),
            weight: Some("5".to_string()),
            line: 3,
        };
        assert_eq!(weighted.to_string(), "(a,b,5)");
        assert!(weighted.is_weighted());

        let plain = EdgeSpec {
            weight: None,
            ..weighted
        };
        assert_eq!(plain.to_string(), "(a,b)");
        assert!(!plain.is_weighted());
    }
}
