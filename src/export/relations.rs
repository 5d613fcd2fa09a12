//! Flat fact relations.
//!
//! A graph tree flattens into two correlated relations:
//!
//! - vertices: `(id, kind, category, label)`
//! - edges: `(source id, target id, category, label)`
//!
//! Rows are produced depth-first, a graph's own vertices before its subgraphs,
//! and edges in the out-edge order of their source vertex. The relations are
//! written as headerless CSV so that they can be loaded directly as Datalog
//! facts.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;

use crate::{
    export::ExportConfig,
    ir::{EdgeCategory, GraphRef, Ir, VertexCategory, VertexKind, VertexRef},
    Error, Result,
};

/// One row of the vertex relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexRow {
    /// Vertex id
    pub id: usize,
    /// Kind tag
    pub kind: VertexKind,
    /// Category
    pub category: VertexCategory,
    /// Display label
    pub label: String,
}

/// One row of the edge relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRow {
    /// Id of the source vertex
    pub source: usize,
    /// Id of the target vertex
    pub target: usize,
    /// Edge category
    pub category: EdgeCategory,
    /// Edge label
    pub label: String,
}

fn id_of(ir: &Ir, vertex: VertexRef) -> Result<usize> {
    ir.vertex(vertex)
        .ok_or(Error::UnknownVertex(vertex))?
        .id()
        .ok_or(Error::UnnumberedVertex(vertex))
}

/// Flattens every vertex of `graph` and its nested scopes.
///
/// # Errors
///
/// Returns [`Error::UnknownGraph`] for a foreign graph handle.
pub fn vertex_rows(ir: &Ir, graph: GraphRef) -> Result<Vec<VertexRow>> {
    if ir.graph(graph).is_none() {
        return Err(Error::UnknownGraph(graph));
    }
    ir.vertices_recursive(graph)
        .into_iter()
        .map(|handle| {
            let vertex = &ir[handle];
            Ok(VertexRow {
                id: id_of(ir, handle)?,
                kind: vertex.kind(),
                category: vertex.category(),
                label: vertex.label(),
            })
        })
        .collect()
}

/// Flattens every out-edge of every vertex of `graph` and its nested scopes.
///
/// # Errors
///
/// - [`Error::UnnumberedVertex`] if an edge points at a vertex without an id
/// - [`Error::UnknownGraph`] for a foreign graph handle
pub fn edge_rows(ir: &Ir, graph: GraphRef) -> Result<Vec<EdgeRow>> {
    if ir.graph(graph).is_none() {
        return Err(Error::UnknownGraph(graph));
    }
    let mut rows = Vec::new();
    for handle in ir.vertices_recursive(graph) {
        let source = id_of(ir, handle)?;
        for edge_ref in ir[handle].out_edges() {
            let Some(edge) = ir.edge(edge_ref) else {
                continue;
            };
            rows.push(EdgeRow {
                source,
                target: id_of(ir, edge.target())?,
                category: edge.category(),
                label: ir.edge_label(edge_ref),
            });
        }
    }
    Ok(rows)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T], config: &ExportConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(config.delimiter)
        .from_writer(File::create(path)?);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the vertex and edge relations of `graph` into `dir`.
///
/// # Returns
///
/// The paths of the vertex file and the edge file, in that order.
///
/// # Errors
///
/// Any error of [`vertex_rows`] / [`edge_rows`], or [`Error::Io`] /
/// [`Error::Csv`] if a file cannot be written.
pub fn write_relations(
    ir: &Ir,
    graph: GraphRef,
    dir: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<(PathBuf, PathBuf)> {
    let vertices = vertex_rows(ir, graph)?;
    let edges = edge_rows(ir, graph)?;

    let vertices_path = dir.as_ref().join(&config.vertices_file);
    let edges_path = dir.as_ref().join(&config.edges_file);
    write_rows(&vertices_path, &vertices, config)?;
    write_rows(&edges_path, &edges, config)?;

    debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        dir = %dir.as_ref().display(),
        "wrote relations"
    );
    Ok((vertices_path, edges_path))
}
