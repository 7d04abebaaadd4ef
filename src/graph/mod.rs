//! Graph module for the adjacency model.
//!
//! This module provides the [`AdjacencyGraph`] struct built from a graph
//! file, and the [`GraphSummary`] reported for it.
//!
//! # Example
//!
//! ```rust
//! use graphsum::graph::AdjacencyGraph;
//!
//! let graph = AdjacencyGraph::build_directed(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec!["(a,b)".to_string()],
//! )
//! .unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edges_of("a")[0].target, "b");
//! ```

mod adjacency_graph;
mod summary;

pub use adjacency_graph::{AdjacencyGraph, EdgeId, EdgeRecord};
pub use summary::GraphSummary;
