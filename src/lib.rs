//! # dg - Directed-Graph Toolkit
//!
//! A small adjacency-list directed graph with set-deduplicated edges, plus
//! DFS-based cycle detection and topological sorting. The algorithms are
//! generic over the [`Adjacency`] capability set, so any conforming graph
//! type can be analyzed. Ships as a library and a single-binary CLI over
//! edge-list files.

pub mod cli;
pub mod error;
pub mod graph;

// Re-export commonly used types
pub use error::{Error, Result};
pub use graph::{has_cycle, topological_sort, Adjacency, DiGraph, Edge, VertexId};
