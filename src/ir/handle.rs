//! Arena handles for vertices, edges and graphs.
//!
//! Every item owned by an [`Ir`](crate::Ir) is addressed through a small
//! copyable handle. Handles are stable for the lifetime of the arena: vertices
//! and graphs are never removed, and an edge handle stays valid until the slot
//! that owns the edge is rewired.
//!
//! A handle is not the same thing as a vertex *id*. The id is the display
//! number assigned by graph enumeration (see [`Ir::reenumerate`](crate::Ir::reenumerate)),
//! while the handle is the arena position and never changes.

define_handle!(
    /// Handle of a vertex inside an [`Ir`](crate::Ir) arena.
    ///
    /// Vertex handles are returned by [`Ir::create`](crate::Ir::create) and are
    /// used for every wiring and lookup operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vertex_ir::{Ir, Vertex};
    ///
    /// let mut ir = Ir::new();
    /// let start = ir.create(Vertex::start());
    /// assert_eq!(start.to_string(), "v0");
    /// ```
    VertexRef,
    "v"
);

define_handle!(
    /// Handle of an edge inside an [`Ir`](crate::Ir) arena.
    ///
    /// Edge handles are owned by the operand slot of their source vertex and
    /// referenced from the in-edge list of their target vertex. Rewiring the
    /// slot releases the handle, after which it no longer resolves (the index
    /// may later be reused by a new edge).
    EdgeRef,
    "e"
);

define_handle!(
    /// Handle of a graph (a lexical scope) inside an [`Ir`](crate::Ir) arena.
    GraphRef,
    "g"
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_handle_index_roundtrip() {
        let vertex = VertexRef::new(42);
        assert_eq!(vertex.index(), 42);
        let raw: usize = vertex.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_handle_display_prefixes() {
        assert_eq!(VertexRef::new(1).to_string(), "v1");
        assert_eq!(EdgeRef::new(2).to_string(), "e2");
        assert_eq!(GraphRef::new(3).to_string(), "g3");
    }

    #[test]
    fn test_handle_debug_format() {
        assert_eq!(format!("{:?}", VertexRef::new(7)), "VertexRef(7)");
        assert_eq!(format!("{:?}", EdgeRef::new(7)), "EdgeRef(7)");
    }

    #[test]
    fn test_handle_hash_and_order() {
        let mut set = HashSet::new();
        set.insert(GraphRef::new(1));
        set.insert(GraphRef::new(1));
        set.insert(GraphRef::new(0));
        assert_eq!(set.len(), 2);

        let mut handles = vec![EdgeRef::new(3), EdgeRef::new(1), EdgeRef::new(2)];
        handles.sort();
        assert_eq!(handles, vec![EdgeRef::new(1), EdgeRef::new(2), EdgeRef::new(3)]);
    }
}
