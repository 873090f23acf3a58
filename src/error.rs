//! Error types for the dg graph toolkit.

use crate::graph::VertexId;
use std::io;

/// Result type alias for dg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the dg graph toolkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An operation referenced a vertex that was never added to the graph.
    #[error("Vertex {0} does not exist in this graph")]
    UnknownVertex(VertexId),

    /// Ordinal vertex lookup past the end of the vertex set.
    #[error("Vertex index {index} out of range for {len} vertices")]
    VertexIndexOutOfRange { index: usize, len: usize },

    /// A topological order was requested for a cyclic graph.
    #[error("Graph has a cycle, no topological order exists")]
    NotADag,

    /// Malformed edge-list input.
    #[error("Bad edge list at line {line}: {reason}")]
    EdgeList { line: usize, reason: String },
}
