use thiserror::Error;

use crate::ir::{GraphRef, ListSlot, Slot, VertexKind, VertexRef};

/// The generic Error type, which covers every failure the IR core can report.
///
/// Only precondition violations are errors. Structurally invalid IR (unset
/// operands, a `Phi` with a single operand, a graph without a start vertex) is
/// never reported through this type; it surfaces as a `false` result from
/// [`crate::verifier::verify_graph`] instead.
///
/// # Error Categories
///
/// ## Wiring Errors
/// - [`Error::IndexOutOfBounds`] - Positional slot index outside the current list
/// - [`Error::InvalidSlot`] - The vertex kind has no such operand slot
/// - [`Error::InvalidTarget`] - The slot cannot point at a vertex of that kind
/// - [`Error::InvalidListSlot`] / [`Error::InvalidListTarget`] - Same, for ordered lists
///
/// ## Graph Errors
/// - [`Error::MissingStartVertex`] - The graph never had a start vertex set
/// - [`Error::AlreadyAttached`] - The vertex already belongs to a graph
/// - [`Error::KindMismatch`] - A vertex of a specific kind was required
/// - [`Error::InvalidPredecessor`] - A phi operand was tagged with a data vertex
/// - [`Error::SubgraphCycle`] - Attaching the subgraph would form a cycle
/// - [`Error::SubgraphAlreadyAttached`] - The subgraph already has a parent
/// - [`Error::UnknownVertex`] / [`Error::UnknownGraph`] - Stale or foreign handle
///
/// ## Export Errors
/// - [`Error::UnnumberedVertex`] - A referenced vertex was never added to a graph
/// - [`Error::Io`] / [`Error::Csv`] - Failures while writing fact files
///
/// # Examples
///
/// ```rust
/// use vertex_ir::{Error, Ir};
///
/// let ir = Ir::new();
/// match ir.start_vertex(ir.root()) {
///     Err(Error::MissingStartVertex(graph)) => println!("{graph} has no entry"),
///     Err(e) => println!("Error: {e}"),
///     Ok(start) => println!("entry is {start}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A positional slot was indexed outside of its current bounds.
    ///
    /// Raised by argument and phi-operand accessors. Indices are never clamped.
    #[error("Index out of bounds - index {index}, length {len}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The length of the list at the time of the request
        len: usize,
    },

    /// The vertex kind does not carry the requested operand slot.
    #[error("{kind} has no '{slot}' slot")]
    InvalidSlot {
        /// Kind of the vertex that was being wired
        kind: VertexKind,
        /// The slot that was requested
        slot: Slot,
    },

    /// The slot exists but cannot point at a vertex of the given kind.
    ///
    /// For example `Branch.true` must target a `BlockBegin`, and every data
    /// slot must target a vertex that produces a value.
    #[error("'{slot}' slot of {source_kind} cannot target {found}")]
    InvalidTarget {
        /// Kind of the vertex owning the slot
        source_kind: VertexKind,
        /// The slot that was being wired
        slot: Slot,
        /// Kind of the rejected target
        found: VertexKind,
    },

    /// The vertex kind does not carry the requested ordered operand list.
    #[error("{kind} has no {list} list")]
    InvalidListSlot {
        /// Kind of the vertex that was being wired
        kind: VertexKind,
        /// The list that was requested
        list: ListSlot,
    },

    /// An element of an ordered operand list cannot point at a vertex of the given kind.
    #[error("{list} of {source_kind} cannot target {found}")]
    InvalidListTarget {
        /// Kind of the vertex owning the list
        source_kind: VertexKind,
        /// The list that was being wired
        list: ListSlot,
        /// Kind of the rejected target
        found: VertexKind,
    },

    /// A vertex of a specific kind was required.
    #[error("Expected a {expected} vertex, found {found}")]
    KindMismatch {
        /// The kind that was required
        expected: VertexKind,
        /// The kind that was supplied
        found: VertexKind,
    },

    /// A phi operand's predecessor is not a control or compound vertex.
    #[error("{0} cannot be the control predecessor of a phi operand")]
    InvalidPredecessor(VertexKind),

    /// The graph never had a start vertex designated.
    #[error("{0} has no start vertex")]
    MissingStartVertex(GraphRef),

    /// The vertex is already owned by a graph.
    ///
    /// A vertex belongs to exactly one graph for its whole lifetime.
    #[error("{0} is already attached to a graph")]
    AlreadyAttached(VertexRef),

    /// Attaching the subgraph would make a graph its own ancestor.
    #[error("Attaching {child} below {parent} would create a cycle")]
    SubgraphCycle {
        /// The graph that would receive the subgraph
        parent: GraphRef,
        /// The graph that was being attached
        child: GraphRef,
    },

    /// The subgraph already has a parent graph.
    #[error("{0} is already a subgraph")]
    SubgraphAlreadyAttached(GraphRef),

    /// The vertex handle does not belong to this arena.
    #[error("Unknown vertex {0}")]
    UnknownVertex(VertexRef),

    /// The graph handle does not belong to this arena.
    #[error("Unknown graph {0}")]
    UnknownGraph(GraphRef),

    /// A vertex that was never added to a graph has no id to export.
    #[error("{0} has no assigned id")]
    UnnumberedVertex(VertexRef),

    /// Float types only exist with a width of 32 or 64 bits.
    #[error("Invalid float width {0}, expected 32 or 64")]
    InvalidFloatWidth(u32),

    /// File I/O error while writing exported artifacts.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Error from the csv writer used by the relations exporter.
    #[error("{0}")]
    Csv(#[from] csv::Error),
}
