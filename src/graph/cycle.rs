//! Cycle detection in directed graphs.

use crate::graph::{Adjacency, VertexId};
use std::collections::HashMap;

/// DFS vertex states. Grey marks vertices on the current DFS path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Grey,
    Black,
}

/// Report whether `graph` contains a directed cycle.
///
/// Three-color depth-first search: an edge into a grey vertex points back
/// into the path currently being explored, which is exactly a cycle. Every
/// vertex is tried as a DFS root, so disconnected components are covered.
///
/// Runs in O(V + E) time with O(V) auxiliary state per call.
pub fn has_cycle<G: Adjacency>(graph: &G) -> bool {
    let mut colors: HashMap<VertexId, Color> =
        graph.vertices().map(|v| (v, Color::White)).collect();

    for root in graph.vertices() {
        if colors[&root] == Color::White && dfs(graph, root, &mut colors) {
            return true;
        }
    }
    false
}

/// One DFS from `v`, reporting whether it ran into the grey path.
///
/// The color map is shared across the whole traversal; a subtree finished in
/// one root's search stays black for every later root.
fn dfs<G: Adjacency>(graph: &G, v: VertexId, colors: &mut HashMap<VertexId, Color>) -> bool {
    colors.insert(v, Color::Grey);
    for &w in graph.neighbors(v) {
        match colors[&w] {
            Color::White => {
                if dfs(graph, w, colors) {
                    return true;
                }
            }
            Color::Grey => return true,
            Color::Black => {}
        }
    }
    colors.insert(v, Color::Black);
    false
}
