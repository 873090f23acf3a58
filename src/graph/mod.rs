//! Graph container and the DFS algorithms over it.

pub mod cycle;
pub mod digraph;
pub mod topology;
pub mod traits;

pub use cycle::has_cycle;
pub use digraph::{DiGraph, Edge, VertexId};
pub use topology::{topological_sort, topological_sort_into, OrderSink};
pub use traits::Adjacency;
