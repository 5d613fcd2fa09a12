//! Structural verification of graphs.
//!
//! [`VertexVerifier`] encodes, per vertex kind, the structural precondition for
//! that vertex to be well-formed: required operand slots are set, control
//! links point at vertices of the right kind, phis have enough operands.
//! [`verify_graph`] applies it to every vertex of a graph and its nested scopes.
//!
//! Verification is a pass/fail gate. It never repairs anything and never
//! reports more than the first failure; the rejected vertex is logged at
//! `debug` level.
//!
//! # Per-kind Rules
//!
//! | Kind | Requirement |
//! |------|-------------|
//! | `Literal`, `Parameter`, `Return` | always well-formed |
//! | `Symbol` | non-empty name, `start` resolves to a `Start` |
//! | unary / binary operations | every operand set |
//! | `Phi` | `merge` set and at least two operands |
//! | `Start`, `Pass` | `next` set |
//! | `Throw` | `value` set |
//! | `Branch` | `condition`, `true` and `false` set |
//! | `Merge` | `next` and `branch` set |
//! | `BlockBegin` | `next` set, predecessor is a `Branch` |
//! | `BlockEnd` | `next` is a `Merge`, predecessor set |
//! | `Allocation`, `Call` | `callee` and `next` set |
//! | `Load` | `object`, `property` and `next` set |
//! | `Store` | `object`, `property`, `value` and `next` set |

use tracing::debug;

use crate::ir::{
    Allocation, BinaryOperation, Branch, Call, ControlStep, Exit, GraphRef, Ir, Literal, Load,
    Merge, Parameter, Phi, Slot, Store, Symbol, UnaryOperation, Vertex, VertexKind, VertexVisitor,
};

/// Minimum number of operands a well-formed `Phi` carries.
pub const MIN_PHI_OPERANDS: usize = 2;

/// Stateless per-vertex structural checker.
#[derive(Debug, Clone, Copy, Default)]
pub struct VertexVerifier;

impl VertexVerifier {
    /// Checks a single vertex.
    #[must_use]
    pub fn verify(ir: &Ir, vertex: &Vertex) -> bool {
        vertex.accept(ir, &mut VertexVerifier)
    }

    fn target_is(ir: &Ir, vertex: &Vertex, slot: Slot, kind: VertexKind) -> bool {
        ir.operand(vertex.handle(), slot)
            .and_then(|target| ir.kind_of(target).ok())
            == Some(kind)
    }
}

impl VertexVisitor<bool> for VertexVerifier {
    fn visit_literal(&mut self, _: &Ir, _: &Vertex, _: &Literal) -> bool {
        true
    }

    fn visit_symbol(&mut self, ir: &Ir, vertex: &Vertex, op: &Symbol) -> bool {
        !op.name().is_empty() && Self::target_is(ir, vertex, Slot::Start, VertexKind::Start)
    }

    fn visit_parameter(&mut self, _: &Ir, _: &Vertex, _: &Parameter) -> bool {
        true
    }

    fn visit_prefix_unary_operation(&mut self, _: &Ir, _: &Vertex, op: &UnaryOperation) -> bool {
        op.operand_edge().is_some()
    }

    fn visit_postfix_unary_operation(
        &mut self,
        _: &Ir,
        _: &Vertex,
        op: &UnaryOperation,
    ) -> bool {
        op.operand_edge().is_some()
    }

    fn visit_binary_operation(&mut self, _: &Ir, _: &Vertex, op: &BinaryOperation) -> bool {
        op.left_edge().is_some() && op.right_edge().is_some()
    }

    fn visit_phi(&mut self, _: &Ir, _: &Vertex, op: &Phi) -> bool {
        op.merge_edge().is_some() && op.operand_edges().len() >= MIN_PHI_OPERANDS
    }

    fn visit_start(&mut self, _: &Ir, _: &Vertex, op: &ControlStep) -> bool {
        op.next_edge().is_some()
    }

    fn visit_pass(&mut self, _: &Ir, _: &Vertex, op: &ControlStep) -> bool {
        op.next_edge().is_some()
    }

    fn visit_return(&mut self, _: &Ir, _: &Vertex, _: &Exit) -> bool {
        true
    }

    fn visit_branch(&mut self, _: &Ir, _: &Vertex, op: &Branch) -> bool {
        op.condition_edge().is_some() && op.true_edge().is_some() && op.false_edge().is_some()
    }

    fn visit_merge(&mut self, _: &Ir, _: &Vertex, op: &Merge) -> bool {
        op.branch_edge().is_some() && op.next_edge().is_some()
    }

    fn visit_block_begin(&mut self, ir: &Ir, vertex: &Vertex, op: &ControlStep) -> bool {
        op.next_edge().is_some()
            && ir
                .previous(vertex.handle())
                .and_then(|previous| ir.kind_of(previous).ok())
                == Some(VertexKind::Branch)
    }

    fn visit_block_end(&mut self, ir: &Ir, vertex: &Vertex, _: &ControlStep) -> bool {
        Self::target_is(ir, vertex, Slot::Next, VertexKind::Merge)
            && ir.previous(vertex.handle()).is_some()
    }

    fn visit_throw(&mut self, _: &Ir, _: &Vertex, op: &Exit) -> bool {
        op.value_edge().is_some()
    }

    fn visit_allocation(&mut self, _: &Ir, _: &Vertex, op: &Allocation) -> bool {
        op.callee_edge().is_some() && op.next_edge().is_some()
    }

    fn visit_store(&mut self, _: &Ir, _: &Vertex, op: &Store) -> bool {
        op.object_edge().is_some()
            && op.property_edge().is_some()
            && op.value_edge().is_some()
            && op.next_edge().is_some()
    }

    fn visit_load(&mut self, _: &Ir, _: &Vertex, op: &Load) -> bool {
        op.object_edge().is_some() && op.property_edge().is_some() && op.next_edge().is_some()
    }

    fn visit_call(&mut self, _: &Ir, _: &Vertex, op: &Call) -> bool {
        op.callee_edge().is_some() && op.next_edge().is_some()
    }
}

/// Verifies `graph` and, recursively, all of its subgraphs.
///
/// Returns `false` if the graph has no start vertex, if any of its own
/// vertices is malformed, or if any subgraph fails verification. Stops at the
/// first failure.
///
/// # Panics
///
/// Panics if a vertex listed by the graph has no id. Attaching a vertex always
/// assigns one, so this indicates a corrupted arena rather than malformed IR.
///
/// # Examples
///
/// ```rust
/// use vertex_ir::{ir::{Slot, Value}, verifier::verify_graph, Ir, Vertex};
///
/// let mut ir = Ir::new();
/// let root = ir.root();
/// assert!(!verify_graph(&ir, root));
///
/// let start = ir.create(Vertex::start());
/// let ret = ir.create(Vertex::ret());
/// ir.set_start_vertex(root, start)?;
/// ir.add_vertex(root, ret)?;
/// assert!(!verify_graph(&ir, root));
///
/// ir.set_next(start, Some(ret))?;
/// assert!(verify_graph(&ir, root));
/// # Ok::<(), vertex_ir::Error>(())
/// ```
#[must_use]
pub fn verify_graph(ir: &Ir, graph: GraphRef) -> bool {
    let Some(record) = ir.graph(graph) else {
        return false;
    };
    if record.start().is_none() {
        debug!(%graph, "graph has no start vertex");
        return false;
    }

    for handle in record.vertices() {
        let vertex = &ir[*handle];
        assert!(
            vertex.id().is_some(),
            "{handle} is listed by {graph} without an id"
        );
        if !VertexVerifier::verify(ir, vertex) {
            debug!(
                %graph,
                vertex = %handle,
                id = vertex.id(),
                kind = %vertex.kind(),
                "vertex failed verification"
            );
            return false;
        }
    }

    record
        .subgraphs()
        .iter()
        .all(|subgraph| verify_graph(ir, *subgraph))
}
