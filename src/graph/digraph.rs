//! Adjacency-list directed graph with set-deduplicated edges.

use crate::error::{Error, Result};
use crate::graph::traits::Adjacency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Vertex descriptor: 0-based, dense, equal to the adjacency row index it
/// was assigned at insertion.
pub type VertexId = usize;

/// A directed edge as an ordered `(source, target)` pair.
///
/// Ordering is lexicographic by source then target, which fixes the
/// iteration order of [`DiGraph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
}

impl Edge {
    /// Create an edge from `source` to `target`.
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// The vertex this edge leaves.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The vertex this edge enters.
    pub fn target(&self) -> VertexId {
        self.target
    }
}

/// An in-memory directed graph.
///
/// Three containers back the structure: a vertex set, an edge set, and one
/// adjacency row per vertex holding its outgoing neighbors in edge-insertion
/// order. The edge set rejects duplicates, so adjacency rows never hold the
/// same target twice.
///
/// Vertices and edges can only be added, never removed.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    adjacency: Vec<Vec<VertexId>>,
    vertices: BTreeSet<VertexId>,
    edges: BTreeSet<Edge>,
}

impl DiGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its descriptor.
    ///
    /// Descriptors are assigned in increasing order starting at 0 and always
    /// equal the index of the vertex's adjacency row.
    pub fn add_vertex(&mut self) -> VertexId {
        let v = self.adjacency.len();
        self.vertices.insert(v);
        self.adjacency.push(Vec::new());
        debug_assert!(self.is_consistent());
        v
    }

    /// Add a directed edge from `source` to `target`.
    ///
    /// Returns the edge and `true` if it was inserted, or the edge and
    /// `false` if the same pair was already present (the graph is left
    /// untouched). Both endpoints must already be vertices of this graph;
    /// unknown endpoints fail with [`Error::UnknownVertex`] without
    /// mutating anything.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<(Edge, bool)> {
        if !self.vertices.contains(&source) {
            return Err(Error::UnknownVertex(source));
        }
        if !self.vertices.contains(&target) {
            return Err(Error::UnknownVertex(target));
        }

        let edge = Edge::new(source, target);
        if !self.edges.insert(edge) {
            return Ok((edge, false));
        }
        self.adjacency[source].push(target);
        debug_assert!(self.is_consistent());
        Ok((edge, true))
    }

    /// Look up the edge from `source` to `target`, if present.
    pub fn edge(&self, source: VertexId, target: VertexId) -> Option<Edge> {
        let probe = Edge::new(source, target);
        self.edges.get(&probe).copied()
    }

    /// All edges, ascending by `(source, target)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// All vertex descriptors, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// Outgoing neighbors of `v` in edge-insertion order.
    ///
    /// Unknown vertices fail with [`Error::UnknownVertex`] rather than
    /// reporting an empty neighborhood.
    pub fn adjacent_vertices(&self, v: VertexId) -> Result<&[VertexId]> {
        if !self.vertices.contains(&v) {
            return Err(Error::UnknownVertex(v));
        }
        Ok(&self.adjacency[v])
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The vertex at ordinal position `index` in ascending descriptor order.
    pub fn vertex_at(&self, index: usize) -> Result<VertexId> {
        self.vertices
            .iter()
            .nth(index)
            .copied()
            .ok_or(Error::VertexIndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    /// Structural invariants: one adjacency row per vertex, one row entry
    /// per stored edge, every edge present in its source's row.
    fn is_consistent(&self) -> bool {
        if self.vertices.len() != self.adjacency.len() {
            return false;
        }
        let row_entries: usize = self.adjacency.iter().map(Vec::len).sum();
        if row_entries != self.edges.len() {
            return false;
        }
        self.edges
            .iter()
            .all(|e| self.adjacency[e.source()].contains(&e.target()))
    }
}

impl Adjacency for DiGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }
}
