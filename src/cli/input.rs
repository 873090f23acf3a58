//! Edge-list input for the CLI.

use crate::error::{Error, Result};
use crate::graph::{DiGraph, VertexId};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the edge-list text from `path`, `-` meaning stdin.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Parse edge-list text into a graph.
///
/// One `SOURCE TARGET` descriptor pair per line. `#` starts a comment and
/// blank lines are skipped. Every vertex from 0 up to the largest descriptor
/// mentioned is added before the edges, so descriptors stay dense even when
/// low ones never appear in an edge. Repeated pairs collapse into one edge.
pub fn parse_edge_list(text: &str) -> Result<DiGraph> {
    let mut pairs: Vec<(VertexId, VertexId)> = Vec::new();
    let mut max_vertex: Option<VertexId> = None;

    for (number, raw) in text.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(head, _)| head).trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let source = parse_vertex(fields.next(), number)?;
        let target = parse_vertex(fields.next(), number)?;
        if let Some(extra) = fields.next() {
            return Err(Error::EdgeList {
                line: number + 1,
                reason: format!("trailing input after edge: {extra:?}"),
            });
        }

        let line_max = source.max(target);
        max_vertex = Some(max_vertex.map_or(line_max, |m| m.max(line_max)));
        pairs.push((source, target));
    }

    let mut graph = DiGraph::new();
    if let Some(max) = max_vertex {
        for _ in 0..=max {
            graph.add_vertex();
        }
    }
    for (source, target) in pairs {
        graph.add_edge(source, target)?;
    }
    Ok(graph)
}

fn parse_vertex(field: Option<&str>, number: usize) -> Result<VertexId> {
    let field = field.ok_or_else(|| Error::EdgeList {
        line: number + 1,
        reason: "expected two vertex descriptors".to_string(),
    })?;
    field.parse().map_err(|_| Error::EdgeList {
        line: number + 1,
        reason: format!("invalid vertex descriptor: {field:?}"),
    })
}
