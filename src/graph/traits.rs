//! The structural contract the graph algorithms compile against.

use crate::graph::VertexId;

/// Read-only adjacency capabilities of a directed graph.
///
/// [`has_cycle`] and [`topological_sort`] are written against this trait
/// rather than against [`DiGraph`] itself, so any structure that can
/// enumerate its vertices and their outgoing neighbors can be analyzed.
///
/// [`has_cycle`]: crate::graph::has_cycle
/// [`topological_sort`]: crate::graph::topological_sort
/// [`DiGraph`]: crate::graph::DiGraph
pub trait Adjacency {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of directed edges.
    fn edge_count(&self) -> usize;

    /// Every vertex descriptor exactly once, in a stable order.
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Outgoing neighbors of `v` in a stable order.
    ///
    /// `v` must be a descriptor yielded by [`Adjacency::vertices`].
    fn neighbors(&self, v: VertexId) -> &[VertexId];
}
