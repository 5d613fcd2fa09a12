//! The IR arena and its object model.
//!
//! This module provides the vertex/edge ownership model of the crate. A single
//! [`Ir`] value owns every vertex, edge and graph; callers hold copyable
//! handles ([`VertexRef`], [`EdgeRef`], [`GraphRef`]) and go through the arena
//! for every read and write.
//!
//! # Architecture
//!
//! - **Vertices**: [`Vertex`] records with a kind-specific [`Operation`] payload
//! - **Edges**: [`Edge`] records stored in a free-list arena, owned by the
//!   operand slot of their source vertex and listed in the in-edges of their target
//! - **Graphs**: [`Graph`] scopes holding vertex lists and nested subgraphs
//! - **Dispatch**: [`VertexVisitor`] for exhaustive per-kind behavior
//!
//! # Key Components
//!
//! - [`Ir`] - The arena and the public read/build interface
//! - [`slot`] - Operand slots and the shared wiring routine
//! - [`graph`] - Graph containers and id assignment
//!
//! # Usage Examples
//!
//! ```rust
//! use vertex_ir::{ir::{Slot, Value}, Ir, Vertex};
//!
//! let mut ir = Ir::new();
//! let root = ir.root();
//!
//! let start = ir.create(Vertex::start());
//! let ret = ir.create(Vertex::ret());
//! let five = ir.create(Vertex::literal(Value::Integer(5)));
//!
//! ir.set_next(start, Some(ret))?;
//! ir.set_operand(ret, Slot::Value, Some(five))?;
//!
//! ir.set_start_vertex(root, start)?;
//! ir.add_vertex(root, ret)?;
//! ir.add_vertex(root, five)?;
//!
//! assert_eq!(ir.previous(ret), Some(start));
//! assert!(vertex_ir::verifier::verify_graph(&ir, root));
//! # Ok::<(), vertex_ir::Error>(())
//! ```

mod edge;
pub mod graph;
mod handle;
mod operation;
mod operator;
pub mod slot;
mod vertex;
mod visitor;

use std::ops::Index;

pub use edge::{Edge, EdgeCategory, EdgeLabel};
pub use graph::Graph;
pub use handle::{EdgeRef, GraphRef, VertexRef};
pub use operation::{
    Allocation, BinaryOperation, Branch, Call, ControlStep, Exit, Literal, Load, Merge, Operation,
    Parameter, Phi, Store, Symbol, UnaryOperation,
};
pub use operator::{BinaryOperator, UnaryOperator, Value};
pub use slot::{ListSlot, PhiOperand, Slot};
pub use vertex::{DeclaredType, Vertex, VertexCategory, VertexKind};
pub use visitor::VertexVisitor;

use crate::{types::Type, Error, Result};

/// Arena owning every vertex, edge and graph of one program.
///
/// Vertices and graphs are never removed; edges are released when the slot
/// owning them is rewired and their storage is reused by later edges.
#[derive(Debug, Clone)]
pub struct Ir {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Option<Edge>>,
    pub(crate) free_edges: Vec<EdgeRef>,
    pub(crate) graphs: Vec<Graph>,
    pub(crate) next_id: usize,
}

impl Default for Ir {
    fn default() -> Self {
        Self::new()
    }
}

impl Ir {
    /// Creates an arena holding an empty root graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            free_edges: Vec::new(),
            graphs: vec![Graph::new(GraphRef(0))],
            next_id: 0,
        }
    }

    /// Moves a detached vertex into the arena.
    ///
    /// The vertex receives no id until it is attached with [`Ir::add_vertex`]
    /// or [`Ir::set_start_vertex`]. Any edges carried by `vertex` (for
    /// instance when it is a clone of an arena vertex) are dropped, so the new
    /// vertex starts with every slot unset.
    pub fn create(&mut self, mut vertex: Vertex) -> VertexRef {
        let handle = VertexRef(self.vertices.len());
        vertex.handle = handle;
        vertex.id = None;
        vertex.graph = None;
        vertex.in_edges.clear();
        vertex.operation.clear_edges();
        self.vertices.push(vertex);
        handle
    }

    /// Returns the vertex behind `vertex`, if the handle belongs to this arena.
    #[must_use]
    pub fn vertex(&self, vertex: VertexRef) -> Option<&Vertex> {
        self.vertices.get(vertex.0)
    }

    /// Returns every vertex in creation order, attached or not.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Returns the number of vertices created in this arena.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the kind of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] for a foreign handle.
    pub fn kind_of(&self, vertex: VertexRef) -> Result<VertexKind> {
        self.vertex(vertex)
            .map(Vertex::kind)
            .ok_or(Error::UnknownVertex(vertex))
    }

    /// Returns the live edge behind `edge`.
    ///
    /// Returns `None` once the owning slot was rewired.
    #[must_use]
    pub fn edge(&self, edge: EdgeRef) -> Option<&Edge> {
        self.edges.get(edge.0)?.as_ref()
    }

    /// Returns the number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len() - self.free_edges.len()
    }

    /// Returns the target vertex of a live edge.
    #[must_use]
    pub fn target(&self, edge: EdgeRef) -> Option<VertexRef> {
        self.edge(edge).map(Edge::target)
    }

    /// Returns the source vertex of a live edge.
    #[must_use]
    pub fn source(&self, edge: EdgeRef) -> Option<VertexRef> {
        self.edge(edge).map(Edge::source)
    }

    /// Renders the label of an edge.
    ///
    /// Slot edges use the slot name, list edges their position and phi operand
    /// edges the current id of their control predecessor (`?` while that
    /// predecessor is unnumbered). A released edge renders as an empty string.
    #[must_use]
    pub fn edge_label(&self, edge: EdgeRef) -> String {
        match self.edge(edge).map(Edge::label) {
            Some(EdgeLabel::Slot(slot)) => slot.label().to_string(),
            Some(EdgeLabel::Position(position)) => position.to_string(),
            Some(EdgeLabel::Predecessor(vertex)) => self
                .vertex(vertex)
                .and_then(Vertex::id)
                .map_or_else(|| "?".to_string(), |id| id.to_string()),
            None => String::new(),
        }
    }

    /// Replaces the declared type token of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] for a foreign handle.
    pub fn set_declared_type(
        &mut self,
        vertex: VertexRef,
        declared: Option<DeclaredType>,
    ) -> Result<()> {
        self.vertices
            .get_mut(vertex.0)
            .ok_or(Error::UnknownVertex(vertex))?
            .declared_type = declared;
        Ok(())
    }

    /// Replaces the verified type of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] for a foreign handle.
    pub fn set_verified_type(&mut self, vertex: VertexRef, verified: Option<Type>) -> Result<()> {
        self.vertices
            .get_mut(vertex.0)
            .ok_or(Error::UnknownVertex(vertex))?
            .verified_type = verified;
        Ok(())
    }

    /// Returns the `Merge` joining `branch`.
    ///
    /// Looked up from the association in-edges of the branch; if several
    /// merges point at it, the most recently wired one wins.
    #[must_use]
    pub fn merge_of(&self, branch: VertexRef) -> Option<VertexRef> {
        self.sources_via(branch, Slot::Branch).last().copied()
    }

    /// Returns the `Phi` vertices owned by `merge`.
    ///
    /// Looked up from the association in-edges of the merge.
    #[must_use]
    pub fn phi_vertices(&self, merge: VertexRef) -> Vec<VertexRef> {
        self.sources_via(merge, Slot::Merge)
    }

    fn sources_via(&self, target: VertexRef, slot: Slot) -> Vec<VertexRef> {
        let Some(vertex) = self.vertex(target) else {
            return Vec::new();
        };
        vertex
            .in_edges
            .iter()
            .filter_map(|handle| self.edge(*handle))
            .filter(|edge| edge.label == EdgeLabel::Slot(slot))
            .map(Edge::source)
            .collect()
    }
}

impl Index<VertexRef> for Ir {
    type Output = Vertex;

    fn index(&self, vertex: VertexRef) -> &Vertex {
        &self.vertices[vertex.0]
    }
}

impl Index<GraphRef> for Ir {
    type Output = Graph;

    fn index(&self, graph: GraphRef) -> &Graph {
        &self.graphs[graph.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_root() {
        let ir = Ir::new();
        let root = ir.root();
        assert!(ir[root].is_empty());
        assert_eq!(ir[root].parent(), None);
        assert_eq!(ir.vertex_count(), 0);
        assert_eq!(ir.edge_count(), 0);
    }

    #[test]
    fn test_create_is_detached() {
        let mut ir = Ir::new();
        let v = ir.create(Vertex::pass());
        assert_eq!(ir[v].handle(), v);
        assert_eq!(ir[v].id(), None);
        assert_eq!(ir.graph_of(v), None);
        assert_eq!(ir.kind_of(v).unwrap(), VertexKind::Pass);
        assert!(matches!(
            ir.kind_of(VertexRef::new(9)),
            Err(Error::UnknownVertex(_))
        ));
    }

    #[test]
    fn test_create_from_clone_starts_unwired() {
        let mut ir = Ir::new();
        let add = ir.create(Vertex::binary(BinaryOperator::Add));
        let a = ir.create(Vertex::literal(1));
        ir.set_operand(add, Slot::Left, Some(a)).unwrap();

        let copy = ir.create(ir[add].clone());
        assert!(ir[copy].out_edges().is_empty());
        assert_eq!(ir.operand(copy, Slot::Left), None);
        assert_eq!(ir.operand(add, Slot::Left), Some(a));
        assert_eq!(ir[a].in_edges().len(), 1);
        assert_eq!(ir.edge_count(), 1);
    }

    #[test]
    fn test_phi_edge_label_follows_predecessor_id() {
        let mut ir = Ir::new();
        let root = ir.root();
        let phi = ir.create(Vertex::phi());
        let value = ir.create(Vertex::literal(Value::Integer(1)));
        let end = ir.create(Vertex::block_end());
        ir.add_phi_operand(phi, value, end).unwrap();

        let edge = ir[value].in_edges()[0];
        assert_eq!(ir.edge_label(edge), "?");

        ir.add_vertex(root, phi).unwrap();
        ir.add_vertex(root, end).unwrap();
        assert_eq!(ir.edge_label(edge), "1");
    }

    #[test]
    fn test_merge_and_phi_lookups() {
        let mut ir = Ir::new();
        let branch = ir.create(Vertex::branch());
        let merge = ir.create(Vertex::merge());
        let phi = ir.create(Vertex::phi());
        ir.set_operand(merge, Slot::Branch, Some(branch)).unwrap();
        ir.set_operand(phi, Slot::Merge, Some(merge)).unwrap();

        assert_eq!(ir.merge_of(branch), Some(merge));
        assert_eq!(ir.phi_vertices(merge), vec![phi]);

        ir.set_operand(phi, Slot::Merge, None).unwrap();
        assert!(ir.phi_vertices(merge).is_empty());
    }

    #[test]
    fn test_set_types() {
        let mut ir = Ir::new();
        let v = ir.create(Vertex::literal(Value::Integer(5)));
        ir.set_declared_type(v, Some(DeclaredType::new("int"))).unwrap();
        ir.set_verified_type(v, Some(Type::integer(32))).unwrap();
        assert_eq!(ir[v].declared_type().map(DeclaredType::as_str), Some("int"));
        assert_eq!(ir[v].verified_type(), Some(&Type::integer(32)));
    }
}
