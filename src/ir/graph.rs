//! Graphs: ordered vertex lists with nested scopes.
//!
//! A [`Graph`] models one lexical scope. It holds its own vertices in insertion
//! order, an optional start vertex and an ordered list of child graphs. Graphs
//! live in the [`Ir`] arena next to the vertices so that edges may cross scope
//! boundaries (a `Symbol` inside a nested function pointing at the `Start` of
//! an enclosing scope, for instance).
//!
//! # Numbering
//!
//! [`Ir::add_vertex`] hands out the next free id from a single arena-wide
//! counter, so ids are unique across every graph from the moment a vertex is
//! attached. Attaching vertices to a parent graph after its subgraphs were
//! populated leaves the ids unique but not in depth-first order;
//! [`Ir::reenumerate`] restores the canonical numbering, where a graph's own
//! vertices come before the vertices of its subgraphs.
//!
//! # Scope Metadata
//!
//! A graph that models a function body may carry the same type annotations as
//! a vertex: the front end's [`DeclaredType`] token and the checked [`Type`].
//! Documentation tags (`@param`, `@returns`, ...) are kept as a sorted
//! name-to-text map. The IR stores all three and never interprets them.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    ir::{DeclaredType, GraphRef, Ir, VertexKind, VertexRef},
    types::Type,
    Error, Result,
};

/// One lexical scope of the IR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub(crate) handle: GraphRef,
    pub(crate) vertices: Vec<VertexRef>,
    pub(crate) start: Option<VertexRef>,
    pub(crate) subgraphs: Vec<GraphRef>,
    pub(crate) parent: Option<GraphRef>,
    pub(crate) declared_type: Option<DeclaredType>,
    pub(crate) verified_type: Option<Type>,
    pub(crate) doc_tags: BTreeMap<String, String>,
}

impl Graph {
    pub(crate) const fn new(handle: GraphRef) -> Self {
        Self {
            handle,
            vertices: Vec::new(),
            start: None,
            subgraphs: Vec::new(),
            parent: None,
            declared_type: None,
            verified_type: None,
            doc_tags: BTreeMap::new(),
        }
    }

    /// Returns the arena handle of this graph.
    #[must_use]
    pub const fn handle(&self) -> GraphRef {
        self.handle
    }

    /// Returns the vertices owned directly by this graph, in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexRef] {
        &self.vertices
    }

    /// Returns the designated start vertex, if one was set.
    #[must_use]
    pub const fn start(&self) -> Option<VertexRef> {
        self.start
    }

    /// Returns the nested scopes, in attachment order.
    #[must_use]
    pub fn subgraphs(&self) -> &[GraphRef] {
        &self.subgraphs
    }

    /// Returns the enclosing graph, or `None` for a top-level graph.
    #[must_use]
    pub const fn parent(&self) -> Option<GraphRef> {
        self.parent
    }

    /// Returns the front end's type token for this scope.
    #[must_use]
    pub const fn declared_type(&self) -> Option<&DeclaredType> {
        self.declared_type.as_ref()
    }

    /// Returns the checked type of this scope.
    #[must_use]
    pub const fn verified_type(&self) -> Option<&Type> {
        self.verified_type.as_ref()
    }

    /// Returns the documentation tags, sorted by name.
    #[must_use]
    pub const fn doc_tags(&self) -> &BTreeMap<String, String> {
        &self.doc_tags
    }

    /// Returns the text of one documentation tag.
    #[must_use]
    pub fn doc_tag(&self, name: &str) -> Option<&str> {
        self.doc_tags.get(name).map(String::as_str)
    }

    /// Returns the number of vertices owned directly by this graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if this graph owns no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Ir {
    /// Returns the root graph created together with the arena.
    #[must_use]
    pub const fn root(&self) -> GraphRef {
        GraphRef(0)
    }

    /// Creates a new, detached graph.
    ///
    /// The graph becomes a nested scope once passed to [`Ir::add_subgraph`].
    pub fn new_graph(&mut self) -> GraphRef {
        let handle = GraphRef(self.graphs.len());
        self.graphs.push(Graph::new(handle));
        handle
    }

    /// Returns the graph behind `graph`, if the handle belongs to this arena.
    #[must_use]
    pub fn graph(&self, graph: GraphRef) -> Option<&Graph> {
        self.graphs.get(graph.0)
    }

    /// Returns every graph in creation order.
    pub fn graphs(&self) -> impl Iterator<Item = &Graph> {
        self.graphs.iter()
    }

    /// Returns the graph `vertex` is attached to.
    #[must_use]
    pub fn graph_of(&self, vertex: VertexRef) -> Option<GraphRef> {
        self.vertex(vertex)?.graph
    }

    /// Returns the enclosing graph of `graph`.
    #[must_use]
    pub fn parent(&self, graph: GraphRef) -> Option<GraphRef> {
        self.graph(graph)?.parent
    }

    fn graph_mut(&mut self, graph: GraphRef) -> Result<&mut Graph> {
        self.graphs
            .get_mut(graph.0)
            .ok_or(Error::UnknownGraph(graph))
    }

    /// Replaces the declared type token of `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGraph`] for a foreign handle.
    pub fn set_graph_declared_type(
        &mut self,
        graph: GraphRef,
        declared: Option<DeclaredType>,
    ) -> Result<()> {
        self.graph_mut(graph)?.declared_type = declared;
        Ok(())
    }

    /// Replaces the verified type of `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGraph`] for a foreign handle.
    pub fn set_graph_verified_type(
        &mut self,
        graph: GraphRef,
        verified: Option<Type>,
    ) -> Result<()> {
        self.graph_mut(graph)?.verified_type = verified;
        Ok(())
    }

    /// Sets a documentation tag of `graph`, returning the text it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGraph`] for a foreign handle.
    pub fn set_graph_doc_tag(
        &mut self,
        graph: GraphRef,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Option<String>> {
        Ok(self
            .graph_mut(graph)?
            .doc_tags
            .insert(name.into(), text.into()))
    }

    /// Removes a documentation tag of `graph`, returning its text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGraph`] for a foreign handle.
    pub fn remove_graph_doc_tag(&mut self, graph: GraphRef, name: &str) -> Result<Option<String>> {
        Ok(self.graph_mut(graph)?.doc_tags.remove(name))
    }

    /// Attaches `vertex` to `graph` and assigns it the next free id.
    ///
    /// # Arguments
    ///
    /// * `graph` - The receiving graph
    /// * `vertex` - A detached vertex
    ///
    /// # Returns
    ///
    /// The id assigned to the vertex.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownGraph`] / [`Error::UnknownVertex`] for foreign handles
    /// - [`Error::AlreadyAttached`] if the vertex already belongs to a graph
    pub fn add_vertex(&mut self, graph: GraphRef, vertex: VertexRef) -> Result<usize> {
        if self.graph(graph).is_none() {
            return Err(Error::UnknownGraph(graph));
        }
        let record = self
            .vertices
            .get_mut(vertex.0)
            .ok_or(Error::UnknownVertex(vertex))?;
        if record.graph.is_some() {
            return Err(Error::AlreadyAttached(vertex));
        }

        let id = self.next_id;
        record.graph = Some(graph);
        record.id = Some(id);
        self.next_id += 1;
        self.graphs[graph.0].vertices.push(vertex);

        debug!(%graph, %vertex, id, kind = %record.kind(), "attached vertex");
        Ok(id)
    }

    /// Designates `vertex` as the entry of `graph`.
    ///
    /// A detached vertex is attached first, exactly as by [`Ir::add_vertex`]. A
    /// vertex already owned by `graph` is only designated. Designating a new
    /// start replaces the previous one, which stays in the graph as an ordinary
    /// vertex.
    ///
    /// # Errors
    ///
    /// - [`Error::KindMismatch`] if the vertex is not a `Start`
    /// - [`Error::AlreadyAttached`] if the vertex belongs to another graph
    /// - [`Error::UnknownGraph`] / [`Error::UnknownVertex`] for foreign handles
    pub fn set_start_vertex(&mut self, graph: GraphRef, vertex: VertexRef) -> Result<()> {
        if self.graph(graph).is_none() {
            return Err(Error::UnknownGraph(graph));
        }
        let found = self.kind_of(vertex)?;
        if found != VertexKind::Start {
            return Err(Error::KindMismatch {
                expected: VertexKind::Start,
                found,
            });
        }
        match self.graph_of(vertex) {
            Some(owner) if owner == graph => {}
            Some(_) => return Err(Error::AlreadyAttached(vertex)),
            None => {
                self.add_vertex(graph, vertex)?;
            }
        }
        self.graphs[graph.0].start = Some(vertex);
        Ok(())
    }

    /// Returns the start vertex of `graph`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingStartVertex`] if no start vertex was ever designated
    /// - [`Error::UnknownGraph`] for a foreign handle
    pub fn start_vertex(&self, graph: GraphRef) -> Result<VertexRef> {
        self.graph(graph)
            .ok_or(Error::UnknownGraph(graph))?
            .start
            .ok_or(Error::MissingStartVertex(graph))
    }

    /// Attaches `child` as the last nested scope of `parent`.
    ///
    /// # Errors
    ///
    /// - [`Error::SubgraphAlreadyAttached`] if `child` already has a parent
    /// - [`Error::SubgraphCycle`] if `child` is `parent` or one of its ancestors
    /// - [`Error::UnknownGraph`] for foreign handles
    pub fn add_subgraph(&mut self, parent: GraphRef, child: GraphRef) -> Result<()> {
        if self.graph(parent).is_none() {
            return Err(Error::UnknownGraph(parent));
        }
        let record = self.graph(child).ok_or(Error::UnknownGraph(child))?;
        if record.parent.is_some() {
            return Err(Error::SubgraphAlreadyAttached(child));
        }

        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                return Err(Error::SubgraphCycle { parent, child });
            }
            ancestor = self.graphs[current.0].parent;
        }

        self.graphs[child.0].parent = Some(parent);
        self.graphs[parent.0].subgraphs.push(child);
        debug!(%parent, %child, "attached subgraph");
        Ok(())
    }

    /// Returns every vertex of `graph` and its nested scopes, depth-first with
    /// a graph's own vertices before those of its subgraphs.
    #[must_use]
    pub fn vertices_recursive(&self, graph: GraphRef) -> Vec<VertexRef> {
        let mut out = Vec::new();
        let mut stack = vec![graph];
        while let Some(current) = stack.pop() {
            let Some(record) = self.graph(current) else {
                continue;
            };
            out.extend_from_slice(&record.vertices);
            stack.extend(record.subgraphs.iter().rev().copied());
        }
        out
    }

    /// Returns the number of vertices in `graph` and all of its nested scopes.
    #[must_use]
    pub fn vertex_count_recursive(&self, graph: GraphRef) -> usize {
        self.graph(graph).map_or(0, |record| {
            record.vertices.len()
                + record
                    .subgraphs
                    .iter()
                    .map(|sub| self.vertex_count_recursive(*sub))
                    .sum::<usize>()
        })
    }

    /// Renumbers every attached vertex depth-first.
    ///
    /// Top-level graphs are numbered in creation order, starting with the root.
    /// Within each tree a graph's own vertices are numbered before its
    /// subgraphs, so after this call the vertices reachable from the root carry
    /// exactly the ids `0..n`. Calling it again without structural changes
    /// assigns the same ids.
    pub fn reenumerate(&mut self) {
        let top_level: Vec<GraphRef> = self
            .graphs
            .iter()
            .filter(|graph| graph.parent.is_none())
            .map(|graph| graph.handle)
            .collect();

        let mut counter = 0;
        for graph in top_level {
            for vertex in self.vertices_recursive(graph) {
                self.vertices[vertex.0].id = Some(counter);
                counter += 1;
            }
        }
        self.next_id = counter;
        debug!(vertices = counter, "re-enumerated graphs");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Value, Vertex};

    #[test]
    fn test_graph_metadata() {
        let mut ir = Ir::new();
        let function = ir.new_graph();
        assert_eq!(ir[function].declared_type(), None);
        assert!(ir[function].doc_tags().is_empty());

        let declared = DeclaredType::new("(x: number) => number");
        ir.set_graph_declared_type(function, Some(declared)).unwrap();
        let signature = Type::function(Type::integer(32), vec![Type::integer(32)]);
        ir.set_graph_verified_type(function, Some(signature.clone())).unwrap();
        assert_eq!(
            ir[function].declared_type().map(DeclaredType::as_str),
            Some("(x: number) => number")
        );
        assert_eq!(ir[function].verified_type(), Some(&signature));

        assert_eq!(ir.set_graph_doc_tag(function, "returns", "x").unwrap(), None);
        assert_eq!(
            ir.set_graph_doc_tag(function, "returns", "x squared").unwrap(),
            Some("x".to_string())
        );
        ir.set_graph_doc_tag(function, "param", "x the input").unwrap();
        let names: Vec<&str> = ir[function].doc_tags().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["param", "returns"]);
        assert_eq!(ir[function].doc_tag("returns"), Some("x squared"));
        assert_eq!(
            ir.remove_graph_doc_tag(function, "param").unwrap(),
            Some("x the input".to_string())
        );

        ir.set_graph_verified_type(function, None).unwrap();
        assert_eq!(ir[function].verified_type(), None);
        assert!(matches!(
            ir.set_graph_doc_tag(GraphRef::new(7), "a", "b"),
            Err(Error::UnknownGraph(_))
        ));
    }

    #[test]
    fn test_add_vertex_assigns_sequential_ids() {
        let mut ir = Ir::new();
        let root = ir.root();
        let a = ir.create(Vertex::start());
        let b = ir.create(Vertex::pass());
        assert_eq!(ir.add_vertex(root, a).unwrap(), 0);
        assert_eq!(ir.add_vertex(root, b).unwrap(), 1);
        assert_eq!(ir[root].vertices(), &[a, b]);
        assert_eq!(ir.graph_of(b), Some(root));
    }

    #[test]
    fn test_add_vertex_twice_fails() {
        let mut ir = Ir::new();
        let root = ir.root();
        let a = ir.create(Vertex::pass());
        ir.add_vertex(root, a).unwrap();
        assert!(matches!(ir.add_vertex(root, a), Err(Error::AlreadyAttached(_))));
        assert_eq!(ir[root].len(), 1);
    }

    #[test]
    fn test_start_vertex_missing() {
        let ir = Ir::new();
        assert!(matches!(
            ir.start_vertex(ir.root()),
            Err(Error::MissingStartVertex(_))
        ));
    }

    #[test]
    fn test_set_start_vertex_appends_once() {
        let mut ir = Ir::new();
        let root = ir.root();
        let start = ir.create(Vertex::start());
        ir.set_start_vertex(root, start).unwrap();
        ir.set_start_vertex(root, start).unwrap();
        assert_eq!(ir.start_vertex(root).unwrap(), start);
        assert_eq!(ir[root].vertices(), &[start]);
    }

    #[test]
    fn test_set_start_vertex_requires_start_kind() {
        let mut ir = Ir::new();
        let root = ir.root();
        let lit = ir.create(Vertex::literal(Value::Null));
        let err = ir.set_start_vertex(root, lit).unwrap_err();
        assert!(matches!(
            err,
            Error::KindMismatch {
                expected: VertexKind::Start,
                found: VertexKind::Literal
            }
        ));
        assert!(ir[root].is_empty());
    }

    #[test]
    fn test_subgraph_cycle_detection() {
        let mut ir = Ir::new();
        let root = ir.root();
        let inner = ir.new_graph();
        let innermost = ir.new_graph();
        ir.add_subgraph(root, inner).unwrap();
        ir.add_subgraph(inner, innermost).unwrap();

        assert!(matches!(
            ir.add_subgraph(innermost, root),
            Err(Error::SubgraphCycle { .. })
        ));
        assert!(matches!(
            ir.add_subgraph(inner, inner),
            Err(Error::SubgraphAlreadyAttached(_))
        ));
        let lone = ir.new_graph();
        assert!(matches!(
            ir.add_subgraph(lone, lone),
            Err(Error::SubgraphCycle { .. })
        ));
        assert_eq!(ir.parent(innermost), Some(inner));
    }

    #[test]
    fn test_reenumerate_depth_first_and_idempotent() {
        let mut ir = Ir::new();
        let root = ir.root();
        let sub = ir.new_graph();
        ir.add_subgraph(root, sub).unwrap();

        let a = ir.create(Vertex::start());
        let b = ir.create(Vertex::start());
        let c = ir.create(Vertex::pass());
        ir.add_vertex(root, a).unwrap();
        ir.add_vertex(sub, b).unwrap();
        ir.add_vertex(root, c).unwrap();
        assert_eq!(ir[c].id(), Some(2));

        ir.reenumerate();
        assert_eq!(ir[a].id(), Some(0));
        assert_eq!(ir[c].id(), Some(1));
        assert_eq!(ir[b].id(), Some(2));

        ir.reenumerate();
        assert_eq!(ir[b].id(), Some(2));
        assert_eq!(ir.vertex_count_recursive(root), 3);
    }
}
