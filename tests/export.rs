//! Exporter integration tests.
//!
//! Builds the canonical `Start -> Pass -> Return(5)` scope and checks the
//! exact fact relations and DOT output produced for it, both in memory and
//! on disk.

use std::fs;

use pretty_assertions::assert_eq;
use vertex_ir::{
    export::{
        dot::{to_dot, write_dot},
        relations::{edge_rows, vertex_rows, write_relations, EdgeRow, VertexRow},
        ExportConfig,
    },
    ir::{EdgeCategory, GraphRef, Slot, VertexCategory, VertexKind},
    types::Type,
    Ir, Result, Vertex,
};

fn scenario() -> Result<(Ir, GraphRef)> {
    let mut ir = Ir::new();
    let root = ir.root();
    let s = ir.create(Vertex::start());
    let p = ir.create(Vertex::pass());
    let five = ir.create(Vertex::literal(5).with_verified_type(Type::integer(32)));
    let r = ir.create(Vertex::ret());

    ir.set_next(s, Some(p))?;
    ir.set_next(p, Some(r))?;
    ir.set_operand(r, Slot::Value, Some(five))?;

    ir.add_vertex(root, s)?;
    ir.add_vertex(root, p)?;
    ir.add_vertex(root, five)?;
    ir.add_vertex(root, r)?;
    ir.set_start_vertex(root, s)?;
    Ok((ir, root))
}

fn vertex_row(id: usize, kind: VertexKind, category: VertexCategory, label: &str) -> VertexRow {
    VertexRow {
        id,
        kind,
        category,
        label: label.to_string(),
    }
}

fn edge_row(source: usize, target: usize, category: EdgeCategory, label: &str) -> EdgeRow {
    EdgeRow {
        source,
        target,
        category,
        label: label.to_string(),
    }
}

#[test]
fn test_scenario_relations() -> Result<()> {
    let (ir, root) = scenario()?;

    assert_eq!(
        vertex_rows(&ir, root)?,
        vec![
            vertex_row(0, VertexKind::Start, VertexCategory::Control, "Start"),
            vertex_row(1, VertexKind::Pass, VertexCategory::Control, "Pass"),
            vertex_row(2, VertexKind::Literal, VertexCategory::Data, "5"),
            vertex_row(3, VertexKind::Return, VertexCategory::Control, "Return"),
        ]
    );
    assert_eq!(
        edge_rows(&ir, root)?,
        vec![
            edge_row(0, 1, EdgeCategory::Control, "next"),
            edge_row(1, 3, EdgeCategory::Control, "next"),
            edge_row(3, 2, EdgeCategory::Data, "value"),
        ]
    );
    Ok(())
}

#[test]
fn test_write_relations_is_headerless_csv() -> Result<()> {
    let (ir, root) = scenario()?;
    let dir = tempfile::tempdir()?;

    let (vertices, edges) = write_relations(&ir, root, dir.path(), &ExportConfig::default())?;
    assert_eq!(vertices, dir.path().join("vertices.facts"));
    assert_eq!(
        fs::read_to_string(&vertices)?,
        "0,Start,Control,Start\n1,Pass,Control,Pass\n2,Literal,Data,5\n3,Return,Control,Return\n"
    );
    assert_eq!(
        fs::read_to_string(&edges)?,
        "0,1,Control,next\n1,3,Control,next\n3,2,Data,value\n"
    );
    Ok(())
}

#[test]
fn test_write_relations_custom_delimiter() -> Result<()> {
    let (ir, root) = scenario()?;
    let dir = tempfile::tempdir()?;
    let config = ExportConfig {
        delimiter: b'\t',
        vertices_file: "v.tsv".to_string(),
        edges_file: "e.tsv".to_string(),
        ..ExportConfig::default()
    };

    let (_, edges) = write_relations(&ir, root, dir.path(), &config)?;
    let content = fs::read_to_string(edges)?;
    assert_eq!(content.lines().next(), Some("0\t1\tControl\tnext"));
    Ok(())
}

#[test]
fn test_scenario_dot() -> Result<()> {
    let (ir, root) = scenario()?;
    let dot = to_dot(&ir, root, &ExportConfig::default())?;

    assert!(dot.starts_with("digraph IR {\n"));
    assert!(dot.contains("    0 [label=\"0 | Start\", shape=diamond];\n"));
    assert!(dot.contains("    2 [label=\"2 | 5\", shape=rectangle];\n"));
    assert!(dot.contains("    0 -> 1 [label=\"next\", arrowhead=normal];\n"));
    assert!(dot.contains("    3 -> 2 [label=\"value\", arrowhead=onormal];\n"));
    assert!(dot.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_write_dot_to_directory() -> Result<()> {
    let (ir, root) = scenario()?;
    let dir = tempfile::tempdir()?;

    let path = write_dot(&ir, root, dir.path(), &ExportConfig::default())?;
    assert_eq!(path, dir.path().join("graph.dot"));
    assert_eq!(
        fs::read_to_string(path)?,
        to_dot(&ir, root, &ExportConfig::default())?
    );
    Ok(())
}

#[test]
fn test_nested_scope_relations_follow_ids() -> Result<()> {
    let (mut ir, root) = scenario()?;
    let function = ir.new_graph();
    ir.add_subgraph(root, function)?;
    let inner = ir.create(Vertex::start());
    let sym = ir.create(Vertex::symbol("x"));
    ir.set_start_vertex(function, inner)?;
    ir.add_vertex(function, sym)?;
    ir.set_operand(sym, Slot::Start, Some(inner))?;

    let rows = vertex_rows(&ir, root)?;
    let ids: Vec<usize> = rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(rows[5].label, "#x");

    let edges = edge_rows(&ir, root)?;
    assert_eq!(
        edges.last(),
        Some(&edge_row(5, 4, EdgeCategory::Association, "start"))
    );
    Ok(())
}
