//! Parser module for graphsum.
//!
//! This module reads plain-text graph files and turns them into an
//! [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
//!
//! # Format
//!
//! - **Line 0** - graph type marker, `G` (undirected) or `D` (directed)
//! - **Line 1** - comma-separated node labels
//! - **Lines 2..** - one `(source,target[,weight])` edge per line
//!
//! # Example
//!
//! ```
//! use graphsum::parser::{parse_str, GraphKind};
//!
//! let graph = parse_str("G\na,b\n(a,b,2)").unwrap();
//!
//! assert_eq!(graph.kind(), GraphKind::Undirected);
//! // Undirected edges are stored once per direction
//! assert_eq!(graph.all_edges().len(), 2);
//! ```

pub mod edge_line;
pub mod graph_file;
pub mod types;

// Re-export commonly used items for convenience
pub use edge_line::{parse_edge_line, tokenize};
pub use graph_file::{parse_file, parse_lines, parse_str, read_lines, split_lines};

pub use types::{EdgeSpec, GraphKind};
