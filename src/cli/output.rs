//! Output formatting for the CLI.

use crate::error::Result;
use crate::graph::{DiGraph, Edge, VertexId};
use serde::Serialize;

/// Machine-readable `info` report.
#[derive(Debug, Serialize)]
struct InfoReport {
    vertices: usize,
    edges: usize,
    edge_list: Vec<Edge>,
}

/// Machine-readable `check` report.
#[derive(Debug, Serialize)]
struct CheckReport {
    cyclic: bool,
}

/// Machine-readable `sort` report.
#[derive(Debug, Serialize)]
struct SortReport<'a> {
    order: &'a [VertexId],
}

/// Print the `info` summary for a graph.
pub fn print_info(graph: &DiGraph, json: bool) -> Result<()> {
    let report = InfoReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        edge_list: graph.edges().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Vertices: {}", report.vertices);
    println!("Edges:    {}", report.edges);
    for edge in &report.edge_list {
        println!("  {} -> {}", edge.source(), edge.target());
    }
    Ok(())
}

/// Print the `check` verdict.
pub fn print_check(cyclic: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&CheckReport { cyclic })?);
        return Ok(());
    }

    if cyclic {
        println!("Cycle detected");
    } else {
        println!("No cycles");
    }
    Ok(())
}

/// Print a topological order, one vertex per line.
pub fn print_sort(order: &[VertexId], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&SortReport { order })?);
        return Ok(());
    }

    for v in order {
        println!("{v}");
    }
    Ok(())
}
