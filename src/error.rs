//! Error types shared by the reader, the builders and the CLI.

use std::path::PathBuf;

/// Errors that can occur while loading a graph file.
///
/// Every variant is fatal for the current load: the build stops at the
/// first failure and no partially-built graph is returned.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The graph file does not exist or could not be read.
    #[error("Failed to read graph file '{}': {source}", .path.display())]
    UnreadableResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first line is neither `G` nor `D`.
    #[error("Cannot determine graph type: expected 'G' or 'D', got '{0}'")]
    UnknownGraphType(String),

    /// An edge line did not split into 2 or 3 parameters.
    #[error(
        "Wrong number of parameters for edge on node '{node}' (line {line}): expected 2 or 3, got {count}"
    )]
    MalformedEdgeLine {
        node: String,
        count: usize,
        line: usize,
    },

    /// An edge refers to a label that is not on the node line.
    #[error("Edge on line {line} refers to unknown node '{label}'")]
    UnknownNode { label: String, line: usize },

    /// The input ended before the type marker or the node list.
    #[error("Graph file is missing its {0}")]
    MissingHeader(&'static str),

    /// No graph file was given on the command line.
    #[error("Graph file not specified. Please provide path to load graph from.")]
    MissingArgument,
}

/// Result type alias for graph loading operations.
pub type GraphResult<T> = Result<T, GraphError>;
