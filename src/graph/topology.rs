//! Topological ordering of directed acyclic graphs.

use crate::error::{Error, Result};
use crate::graph::cycle::has_cycle;
use crate::graph::{Adjacency, VertexId};
use std::collections::HashSet;

/// Write-only destination for an ordering, one vertex at a time.
///
/// Decouples [`topological_sort_into`] from the container the caller wants
/// the order in.
pub trait OrderSink {
    /// Accept the next vertex of the order.
    fn accept(&mut self, v: VertexId);
}

impl OrderSink for Vec<VertexId> {
    fn accept(&mut self, v: VertexId) {
        self.push(v);
    }
}

/// Topologically sort `graph`, delivering the order into `sink`.
///
/// Fails with [`Error::NotADag`] before anything reaches the sink if the
/// graph is cyclic. On success the sink receives every vertex exactly once,
/// with each edge's source delivered before its target.
///
/// Depth-first search in vertex iteration order; a vertex finishes only
/// after everything reachable from it, so the reversed finish order is a
/// valid topological order.
pub fn topological_sort_into<G, S>(graph: &G, sink: &mut S) -> Result<()>
where
    G: Adjacency,
    S: OrderSink,
{
    if has_cycle(graph) {
        return Err(Error::NotADag);
    }

    let mut visited: HashSet<VertexId> = HashSet::with_capacity(graph.vertex_count());
    let mut postorder: Vec<VertexId> = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if !visited.contains(&root) {
            dfs(graph, root, &mut visited, &mut postorder);
        }
    }

    for &v in postorder.iter().rev() {
        sink.accept(v);
    }
    Ok(())
}

/// Topologically sort `graph`, collecting the order into a `Vec`.
pub fn topological_sort<G: Adjacency>(graph: &G) -> Result<Vec<VertexId>> {
    let mut order = Vec::with_capacity(graph.vertex_count());
    topological_sort_into(graph, &mut order)?;
    Ok(order)
}

/// Post-order DFS from `v`; pushes `v` after all of its descendants.
fn dfs<G: Adjacency>(
    graph: &G,
    v: VertexId,
    visited: &mut HashSet<VertexId>,
    postorder: &mut Vec<VertexId>,
) {
    visited.insert(v);
    for &w in graph.neighbors(v) {
        if !visited.contains(&w) {
            dfs(graph, w, visited, postorder);
        }
    }
    postorder.push(v);
}
