//! Graphviz DOT rendering.
//!
//! Every vertex becomes a node named after its id and labelled `"{id} | {label}"`,
//! shaped by its category. Every out-edge becomes a DOT edge labelled with the
//! edge label, with an arrowhead chosen by edge category; association edges are
//! drawn dashed. Nested scopes become `cluster_N` subgraphs (N being the arena
//! index of the graph) unless clustering is disabled.

use std::{
    fmt::Write,
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    export::ExportConfig,
    ir::{EdgeCategory, GraphRef, Ir, VertexRef},
    Error, Result,
};

/// Escapes a string for safe use inside a quoted DOT attribute.
///
/// # Examples
///
/// ```rust
/// use vertex_ir::export::dot::escape_dot;
///
/// assert_eq!(escape_dot("a \"b\""), "a \\\"b\\\"");
/// assert_eq!(escape_dot("x < y"), "x \\< y");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '"' | '<' | '>' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

fn id_of(ir: &Ir, vertex: VertexRef) -> Result<usize> {
    ir.vertex(vertex)
        .ok_or(Error::UnknownVertex(vertex))?
        .id()
        .ok_or(Error::UnnumberedVertex(vertex))
}

fn write_scope(
    ir: &Ir,
    graph: GraphRef,
    config: &ExportConfig,
    dot: &mut String,
    depth: usize,
) -> Result<()> {
    let record = ir.graph(graph).ok_or(Error::UnknownGraph(graph))?;
    let indent = "    ".repeat(depth);

    for handle in record.vertices() {
        let vertex = &ir[*handle];
        let id = id_of(ir, *handle)?;
        let _ = writeln!(
            dot,
            "{indent}{id} [label=\"{id} | {}\", shape={}];",
            escape_dot(&vertex.label()),
            config.shape(vertex.category())
        );

        for edge_ref in vertex.out_edges() {
            let Some(edge) = ir.edge(edge_ref) else {
                continue;
            };
            let target = id_of(ir, edge.target())?;
            let style = if edge.category() == EdgeCategory::Association {
                ", style=dashed"
            } else {
                ""
            };
            let _ = writeln!(
                dot,
                "{indent}{id} -> {target} [label=\"{}\", arrowhead={}{style}];",
                escape_dot(&ir.edge_label(edge_ref)),
                config.arrowhead(edge.category())
            );
        }
    }

    for subgraph in record.subgraphs() {
        if config.clusters {
            let _ = writeln!(dot, "{indent}subgraph cluster_{} {{", subgraph.index());
            write_scope(ir, *subgraph, config, dot, depth + 1)?;
            let _ = writeln!(dot, "{indent}}}");
        } else {
            write_scope(ir, *subgraph, config, dot, depth)?;
        }
    }
    Ok(())
}

/// Renders `graph` and its nested scopes as a DOT digraph.
///
/// # Errors
///
/// - [`Error::UnnumberedVertex`] if an edge points at a vertex without an id
/// - [`Error::UnknownGraph`] for a foreign graph handle
///
/// # Examples
///
/// ```rust
/// use vertex_ir::{export::{dot::to_dot, ExportConfig}, Ir, Vertex};
///
/// let mut ir = Ir::new();
/// let root = ir.root();
/// let start = ir.create(Vertex::start());
/// let ret = ir.create(Vertex::ret());
/// ir.set_start_vertex(root, start)?;
/// ir.add_vertex(root, ret)?;
/// ir.set_next(start, Some(ret))?;
///
/// let dot = to_dot(&ir, root, &ExportConfig::default())?;
/// assert!(dot.starts_with("digraph IR {"));
/// assert!(dot.contains("0 [label=\"0 | Start\", shape=diamond];"));
/// assert!(dot.contains("0 -> 1 [label=\"next\", arrowhead=normal];"));
/// # Ok::<(), vertex_ir::Error>(())
/// ```
pub fn to_dot(ir: &Ir, graph: GraphRef, config: &ExportConfig) -> Result<String> {
    let mut dot = String::new();

    let _ = writeln!(dot, "digraph {} {{", escape_dot(&config.graph_name));
    if let Some(title) = &config.title {
        let _ = writeln!(dot, "    label=\"{}\";", escape_dot(title));
        dot.push_str("    labelloc=t;\n");
    }
    dot.push_str("    node [fontname=\"Courier\", fontsize=10];\n");
    dot.push_str("    edge [fontname=\"Courier\", fontsize=9];\n\n");

    write_scope(ir, graph, config, &mut dot, 1)?;

    dot.push_str("}\n");
    Ok(dot)
}

/// Renders `graph` and writes it to `config.dot_file` inside `dir`.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Any error of [`to_dot`], or [`Error::Io`] if the file cannot be written.
pub fn write_dot(
    ir: &Ir,
    graph: GraphRef,
    dir: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<PathBuf> {
    let path = dir.as_ref().join(&config.dot_file);
    fs::write(&path, to_dot(ir, graph, config)?)?;
    debug!(path = %path.display(), "wrote dot file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{BinaryOperator, Slot, Value, Vertex};

    #[test]
    fn test_escape_dot_operator_and_literal_labels() {
        let shift = Vertex::binary(BinaryOperator::LogicalRightShift);
        assert_eq!(escape_dot(&shift.label()), "\\>\\>\\>");
        assert_eq!(escape_dot("<="), "\\<=");
        assert_eq!(escape_dot("#count"), "#count");

        let quoted = Value::from("say \"hi\"\r\n\\done");
        assert_eq!(
            escape_dot(&quoted.to_string()),
            "say \\\"hi\\\"\\n\\\\done"
        );
    }

    #[test]
    fn test_association_edges_are_dashed() {
        let mut ir = Ir::new();
        let root = ir.root();
        let branch = ir.create(Vertex::branch());
        let merge = ir.create(Vertex::merge());
        ir.add_vertex(root, branch).unwrap();
        ir.add_vertex(root, merge).unwrap();
        ir.set_operand(merge, Slot::Branch, Some(branch)).unwrap();

        let dot = to_dot(&ir, root, &ExportConfig::default()).unwrap();
        assert!(dot.contains("1 -> 0 [label=\"branch\", arrowhead=vee, style=dashed];"));
        assert!(dot.contains("1 [label=\"1 | Merge\", shape=diamond];"));
    }

    #[test]
    fn test_subgraphs_render_as_clusters() {
        let mut ir = Ir::new();
        let root = ir.root();
        let inner = ir.new_graph();
        ir.add_subgraph(root, inner).unwrap();
        let lit = ir.create(Vertex::literal(Value::from("a\"b")));
        ir.add_vertex(inner, lit).unwrap();

        let dot = to_dot(&ir, root, &ExportConfig::default()).unwrap();
        assert!(dot.contains("    subgraph cluster_1 {\n"));
        assert!(dot.contains("        0 [label=\"0 | a\\\"b\", shape=rectangle];"));

        let flat = ExportConfig {
            clusters: false,
            ..ExportConfig::default()
        };
        let dot = to_dot(&ir, root, &flat).unwrap();
        assert!(!dot.contains("cluster"));
        assert!(dot.contains("    0 [label="));
    }

    #[test]
    fn test_unnumbered_target_is_an_error() {
        let mut ir = Ir::new();
        let root = ir.root();
        let ret = ir.create(Vertex::ret());
        let detached = ir.create(Vertex::literal(Value::Null));
        ir.add_vertex(root, ret).unwrap();
        ir.set_operand(ret, Slot::Value, Some(detached)).unwrap();

        assert!(matches!(
            to_dot(&ir, root, &ExportConfig::default()),
            Err(Error::UnnumberedVertex(v)) if v == detached
        ));
    }

    #[test]
    fn test_title() {
        let ir = Ir::new();
        let config = ExportConfig {
            title: Some("main".to_string()),
            ..ExportConfig::default()
        };
        let dot = to_dot(&ir, ir.root(), &config).unwrap();
        assert!(dot.contains("label=\"main\";"));
        assert!(dot.ends_with("}\n"));
    }
}
