//! Closed dispatch over vertex kinds.
//!
//! [`VertexVisitor`] has one required method per [`VertexKind`](crate::ir::VertexKind).
//! [`Vertex::accept`](crate::ir::Vertex::accept) selects the method with an
//! exhaustive match, so every visitor sees each vertex with its concrete payload
//! type and a new kind cannot be added without updating every implementation.
//!
//! # Examples
//!
//! ```rust
//! use vertex_ir::ir::{
//!     Allocation, BinaryOperation, Branch, Call, ControlStep, Exit, Literal, Load, Merge,
//!     Parameter, Phi, Store, Symbol, UnaryOperation, VertexVisitor,
//! };
//! use vertex_ir::{Ir, Vertex};
//!
//! /// Counts the operand slots a vertex kind declares.
//! struct Arity;
//!
//! impl VertexVisitor<usize> for Arity {
//!     fn visit_literal(&mut self, _: &Ir, _: &Vertex, _: &Literal) -> usize { 0 }
//!     fn visit_symbol(&mut self, _: &Ir, _: &Vertex, _: &Symbol) -> usize { 1 }
//!     fn visit_parameter(&mut self, _: &Ir, _: &Vertex, _: &Parameter) -> usize { 0 }
//!     fn visit_prefix_unary_operation(&mut self, _: &Ir, _: &Vertex, _: &UnaryOperation) -> usize { 1 }
//!     fn visit_postfix_unary_operation(&mut self, _: &Ir, _: &Vertex, _: &UnaryOperation) -> usize { 1 }
//!     fn visit_binary_operation(&mut self, _: &Ir, _: &Vertex, _: &BinaryOperation) -> usize { 2 }
//!     fn visit_phi(&mut self, _: &Ir, _: &Vertex, _: &Phi) -> usize { 1 }
//!     fn visit_start(&mut self, _: &Ir, _: &Vertex, _: &ControlStep) -> usize { 1 }
//!     fn visit_pass(&mut self, _: &Ir, _: &Vertex, _: &ControlStep) -> usize { 1 }
//!     fn visit_return(&mut self, _: &Ir, _: &Vertex, _: &Exit) -> usize { 1 }
//!     fn visit_branch(&mut self, _: &Ir, _: &Vertex, _: &Branch) -> usize { 3 }
//!     fn visit_merge(&mut self, _: &Ir, _: &Vertex, _: &Merge) -> usize { 2 }
//!     fn visit_block_begin(&mut self, _: &Ir, _: &Vertex, _: &ControlStep) -> usize { 1 }
//!     fn visit_block_end(&mut self, _: &Ir, _: &Vertex, _: &ControlStep) -> usize { 1 }
//!     fn visit_throw(&mut self, _: &Ir, _: &Vertex, _: &Exit) -> usize { 1 }
//!     fn visit_allocation(&mut self, _: &Ir, _: &Vertex, _: &Allocation) -> usize { 2 }
//!     fn visit_store(&mut self, _: &Ir, _: &Vertex, _: &Store) -> usize { 4 }
//!     fn visit_load(&mut self, _: &Ir, _: &Vertex, _: &Load) -> usize { 3 }
//!     fn visit_call(&mut self, _: &Ir, _: &Vertex, _: &Call) -> usize { 3 }
//! }
//!
//! let mut ir = Ir::new();
//! let branch = ir.create(Vertex::branch());
//! assert_eq!(ir[branch].accept(&ir, &mut Arity), 3);
//! ```

use crate::ir::{
    Allocation, BinaryOperation, Branch, Call, ControlStep, Exit, Ir, Literal, Load, Merge,
    Parameter, Phi, Store, Symbol, UnaryOperation, Vertex,
};

/// Visitor over every concrete vertex kind.
///
/// Each method receives the owning [`Ir`] (to resolve edges), the vertex record
/// (for id, kind and in-edges) and the kind-specific payload.
pub trait VertexVisitor<T> {
    /// Visits a `Literal`.
    fn visit_literal(&mut self, ir: &Ir, vertex: &Vertex, op: &Literal) -> T;
    /// Visits a `Symbol`.
    fn visit_symbol(&mut self, ir: &Ir, vertex: &Vertex, op: &Symbol) -> T;
    /// Visits a `Parameter`.
    fn visit_parameter(&mut self, ir: &Ir, vertex: &Vertex, op: &Parameter) -> T;
    /// Visits a `PrefixUnaryOperation`.
    fn visit_prefix_unary_operation(&mut self, ir: &Ir, vertex: &Vertex, op: &UnaryOperation)
        -> T;
    /// Visits a `PostfixUnaryOperation`.
    fn visit_postfix_unary_operation(
        &mut self,
        ir: &Ir,
        vertex: &Vertex,
        op: &UnaryOperation,
    ) -> T;
    /// Visits a `BinaryOperation`.
    fn visit_binary_operation(&mut self, ir: &Ir, vertex: &Vertex, op: &BinaryOperation) -> T;
    /// Visits a `Phi`.
    fn visit_phi(&mut self, ir: &Ir, vertex: &Vertex, op: &Phi) -> T;
    /// Visits a `Start`.
    fn visit_start(&mut self, ir: &Ir, vertex: &Vertex, op: &ControlStep) -> T;
    /// Visits a `Pass`.
    fn visit_pass(&mut self, ir: &Ir, vertex: &Vertex, op: &ControlStep) -> T;
    /// Visits a `Return`.
    fn visit_return(&mut self, ir: &Ir, vertex: &Vertex, op: &Exit) -> T;
    /// Visits a `Branch`.
    fn visit_branch(&mut self, ir: &Ir, vertex: &Vertex, op: &Branch) -> T;
    /// Visits a `Merge`.
    fn visit_merge(&mut self, ir: &Ir, vertex: &Vertex, op: &Merge) -> T;
    /// Visits a `BlockBegin`.
    fn visit_block_begin(&mut self, ir: &Ir, vertex: &Vertex, op: &ControlStep) -> T;
    /// Visits a `BlockEnd`.
    fn visit_block_end(&mut self, ir: &Ir, vertex: &Vertex, op: &ControlStep) -> T;
    /// Visits a `Throw`.
    fn visit_throw(&mut self, ir: &Ir, vertex: &Vertex, op: &Exit) -> T;
    /// Visits an `Allocation`.
    fn visit_allocation(&mut self, ir: &Ir, vertex: &Vertex, op: &Allocation) -> T;
    /// Visits a `Store`.
    fn visit_store(&mut self, ir: &Ir, vertex: &Vertex, op: &Store) -> T;
    /// Visits a `Load`.
    fn visit_load(&mut self, ir: &Ir, vertex: &Vertex, op: &Load) -> T;
    /// Visits a `Call`.
    fn visit_call(&mut self, ir: &Ir, vertex: &Vertex, op: &Call) -> T;
}
