//! Operand slots and the shared edge wiring routine.
//!
//! Every operand of a vertex is a named, nullable slot holding at most one
//! owned [`Edge`](crate::ir::Edge). Assigning a slot goes through
//! [`Ir::set_operand`], which performs the whole rewiring transaction:
//!
//! 1. If the slot holds an edge, that edge is removed from the old target's
//!    in-edge list and released from the edge arena.
//! 2. If a new target is given, a fresh edge with the slot's fixed label and
//!    category is allocated, registered in the new target's in-edge list and
//!    stored in the slot.
//!
//! Ordered lists (call arguments, phi operands, symbol parameters) follow the
//! same protocol per element and renumber trailing positional labels whenever
//! an element is inserted or removed. No other code path creates or destroys
//! edges, so the out-edges of a vertex and the in-edges of its targets can
//! never disagree.

use strum::{Display, EnumIter, IntoStaticStr};
use tracing::trace;

use crate::{
    ir::{Edge, EdgeCategory, EdgeLabel, EdgeRef, Ir, VertexKind, VertexRef},
    Error, Result,
};

/// A named single-edge operand slot.
///
/// The display text of a slot is the label of every edge stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Slot {
    /// `Symbol` to the `Start` of its defining scope.
    #[strum(to_string = "start")]
    Start,
    /// Single operand of a unary operation.
    #[strum(to_string = "operand")]
    Operand,
    /// Left operand of a binary operation.
    #[strum(to_string = "left")]
    Left,
    /// Right operand of a binary operation.
    #[strum(to_string = "right")]
    Right,
    /// `Phi` to its owning `Merge`.
    #[strum(to_string = "merge")]
    Merge,
    /// Control successor.
    #[strum(to_string = "next")]
    Next,
    /// Returned, thrown or stored value.
    #[strum(to_string = "value")]
    Value,
    /// Branch condition.
    #[strum(to_string = "condition")]
    Condition,
    /// Successor taken when the branch condition holds.
    #[strum(to_string = "true")]
    True,
    /// Successor taken when the branch condition does not hold.
    #[strum(to_string = "false")]
    False,
    /// `Merge` back to the `Branch` it joins.
    #[strum(to_string = "branch")]
    Branch,
    /// Callee of a call, or constructor of an allocation.
    #[strum(to_string = "callee")]
    Callee,
    /// Object accessed by a load or store.
    #[strum(to_string = "object")]
    Object,
    /// Property accessed by a load or store.
    #[strum(to_string = "property")]
    Property,
    /// Receiver object of a method call.
    #[strum(to_string = "callerObject")]
    CallerObject,
}

impl Slot {
    /// Returns the fixed label of edges stored in this slot.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Returns the category of edges stored in this slot.
    #[must_use]
    pub const fn category(self) -> EdgeCategory {
        match self {
            Slot::Start | Slot::Merge | Slot::Branch => EdgeCategory::Association,
            Slot::Next | Slot::True | Slot::False => EdgeCategory::Control,
            Slot::Operand
            | Slot::Left
            | Slot::Right
            | Slot::Value
            | Slot::Condition
            | Slot::Callee
            | Slot::Object
            | Slot::Property
            | Slot::CallerObject => EdgeCategory::Data,
        }
    }

    /// Returns `true` if a vertex of kind `source` may point this slot at a
    /// vertex of kind `target`.
    #[must_use]
    pub const fn accepts(self, source: VertexKind, target: VertexKind) -> bool {
        match self {
            Slot::Start => matches!(target, VertexKind::Start),
            Slot::Merge => matches!(target, VertexKind::Merge),
            Slot::Branch => matches!(target, VertexKind::Branch),
            Slot::True | Slot::False => matches!(target, VertexKind::BlockBegin),
            Slot::Next => match source {
                VertexKind::BlockEnd => matches!(target, VertexKind::Merge),
                _ => target.has_previous() || matches!(target, VertexKind::Merge),
            },
            Slot::Operand
            | Slot::Left
            | Slot::Right
            | Slot::Value
            | Slot::Condition
            | Slot::Callee
            | Slot::Object
            | Slot::Property
            | Slot::CallerObject => target.produces_value(),
        }
    }
}

/// An ordered multi-edge operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ListSlot {
    /// Positional arguments of a `Call` or `Allocation`.
    Arguments,
    /// Operands of a `Phi`, each tagged with its control predecessor.
    PhiOperands,
    /// Formal parameters enumerated by a `Symbol`.
    Parameters,
}

impl ListSlot {
    /// Returns the category of edges stored in this list.
    #[must_use]
    pub const fn category(self) -> EdgeCategory {
        match self {
            ListSlot::Arguments | ListSlot::PhiOperands => EdgeCategory::Data,
            ListSlot::Parameters => EdgeCategory::Association,
        }
    }

    /// Returns `true` if elements of this list may point at a vertex of kind `target`.
    #[must_use]
    pub const fn accepts(self, target: VertexKind) -> bool {
        match self {
            ListSlot::Arguments | ListSlot::PhiOperands => target.produces_value(),
            ListSlot::Parameters => matches!(target, VertexKind::Parameter),
        }
    }
}

/// One operand of a `Phi` vertex: the incoming value and the control
/// predecessor it flows in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhiOperand {
    /// The vertex providing the value.
    pub value: VertexRef,
    /// The control predecessor the value is selected for.
    pub src_branch: VertexRef,
}

impl PhiOperand {
    /// Creates a new phi operand.
    #[must_use]
    pub const fn new(value: VertexRef, src_branch: VertexRef) -> Self {
        Self { value, src_branch }
    }
}

impl Ir {
    /// Allocates an edge and registers it with its target.
    fn install_edge(
        &mut self,
        source: VertexRef,
        target: VertexRef,
        label: EdgeLabel,
        category: EdgeCategory,
    ) -> EdgeRef {
        let edge = Edge::new(source, target, label, category);
        let handle = match self.free_edges.pop() {
            Some(handle) => {
                self.edges[handle.0] = Some(edge);
                handle
            }
            None => {
                self.edges.push(Some(edge));
                EdgeRef(self.edges.len() - 1)
            }
        };
        self.vertices[target.0].in_edges.push(handle);
        trace!(%source, %target, ?label, %category, edge = %handle, "installed edge");
        handle
    }

    /// Unregisters an edge from its target and returns it to the arena.
    fn release_edge(&mut self, handle: EdgeRef) {
        if let Some(edge) = self.edges.get_mut(handle.0).and_then(Option::take) {
            let in_edges = &mut self.vertices[edge.target.0].in_edges;
            if let Some(pos) = in_edges.iter().position(|e| *e == handle) {
                in_edges.remove(pos);
            }
            self.free_edges.push(handle);
            trace!(source = %edge.source, target = %edge.target, edge = %handle, "released edge");
        }
    }

    fn check_target(
        &self,
        source_kind: VertexKind,
        slot: Slot,
        target: VertexRef,
    ) -> Result<()> {
        let found = self.kind_of(target)?;
        if slot.accepts(source_kind, found) {
            Ok(())
        } else {
            Err(Error::InvalidTarget {
                source_kind,
                slot,
                found,
            })
        }
    }

    fn check_list_target(&self, source: VertexRef, list: ListSlot, target: VertexRef) -> Result<()> {
        let found = self.kind_of(target)?;
        if list.accepts(found) {
            Ok(())
        } else {
            Err(Error::InvalidListTarget {
                source_kind: self.kind_of(source)?,
                list,
                found,
            })
        }
    }

    fn list_len(&self, vertex: VertexRef, list: ListSlot) -> Result<usize> {
        let v = self.vertex(vertex).ok_or(Error::UnknownVertex(vertex))?;
        v.operation
            .list(list)
            .map(Vec::len)
            .ok_or(Error::InvalidListSlot {
                kind: v.kind(),
                list,
            })
    }

    /// Rewrites positional labels so that they match list positions again.
    fn renumber_positions(&mut self, vertex: VertexRef, list: ListSlot) {
        let handles = self.vertices[vertex.0]
            .operation
            .list(list)
            .cloned()
            .unwrap_or_default();
        for (position, handle) in handles.into_iter().enumerate() {
            if let Some(Some(edge)) = self.edges.get_mut(handle.0) {
                if let EdgeLabel::Position(_) = edge.label {
                    edge.label = EdgeLabel::Position(position);
                }
            }
        }
    }

    /// Assigns a named operand slot of `vertex`.
    ///
    /// Passing `None` clears the slot. Assigning a slot always releases the
    /// previous edge before installing the new one, so re-assigning the same
    /// target leaves exactly one edge in the slot and one matching in-edge on
    /// the target.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex owning the slot
    /// * `slot` - The slot to assign
    /// * `target` - The new target, or `None` to clear the slot
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownVertex`] if either handle does not resolve
    /// - [`Error::InvalidSlot`] if the vertex kind has no such slot
    /// - [`Error::InvalidTarget`] if the slot cannot point at the target's kind
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vertex_ir::{ir::{BinaryOperator, Slot, Value}, Ir, Vertex};
    ///
    /// let mut ir = Ir::new();
    /// let add = ir.create(Vertex::binary(BinaryOperator::Add));
    /// let one = ir.create(Vertex::literal(Value::Integer(1)));
    ///
    /// ir.set_operand(add, Slot::Left, Some(one))?;
    /// assert_eq!(ir.operand(add, Slot::Left), Some(one));
    /// assert_eq!(ir[one].in_edges().len(), 1);
    ///
    /// ir.set_operand(add, Slot::Left, None)?;
    /// assert!(ir[one].in_edges().is_empty());
    /// # Ok::<(), vertex_ir::Error>(())
    /// ```
    pub fn set_operand(
        &mut self,
        vertex: VertexRef,
        slot: Slot,
        target: Option<VertexRef>,
    ) -> Result<()> {
        let kind = self.kind_of(vertex)?;
        if self.vertices[vertex.0].operation.slot(slot).is_none() {
            return Err(Error::InvalidSlot { kind, slot });
        }
        if let Some(target) = target {
            self.check_target(kind, slot, target)?;
        }

        let previous = self.vertices[vertex.0]
            .operation
            .slot_mut(slot)
            .and_then(Option::take);
        if let Some(previous) = previous {
            self.release_edge(previous);
        }

        if let Some(target) = target {
            let handle =
                self.install_edge(vertex, target, EdgeLabel::Slot(slot), slot.category());
            if let Some(stored) = self.vertices[vertex.0].operation.slot_mut(slot) {
                *stored = Some(handle);
            }
        }
        Ok(())
    }

    /// Returns the current target of a named operand slot.
    ///
    /// Returns `None` if the slot is unset, if the vertex kind has no such slot
    /// or if the handle does not resolve.
    #[must_use]
    pub fn operand(&self, vertex: VertexRef, slot: Slot) -> Option<VertexRef> {
        let edge = self.vertex(vertex)?.operation.slot(slot)??;
        self.target(edge)
    }

    /// Sets the control successor of `vertex` (its `next` slot).
    ///
    /// # Errors
    ///
    /// See [`Ir::set_operand`].
    pub fn set_next(&mut self, vertex: VertexRef, next: Option<VertexRef>) -> Result<()> {
        self.set_operand(vertex, Slot::Next, next)
    }

    /// Returns the control successor of `vertex`.
    #[must_use]
    pub fn next(&self, vertex: VertexRef) -> Option<VertexRef> {
        self.operand(vertex, Slot::Next)
    }

    /// Returns the control predecessor of a non-initial control vertex.
    ///
    /// The predecessor is not stored; it is looked up from the in-edges of the
    /// vertex, picking the most recently installed `next`, `true` or `false`
    /// edge. `Start` and `Merge` (which joins several predecessors) never
    /// report one.
    #[must_use]
    pub fn previous(&self, vertex: VertexRef) -> Option<VertexRef> {
        let v = self.vertex(vertex)?;
        if !v.kind().has_previous() {
            return None;
        }
        v.in_edges()
            .iter()
            .rev()
            .filter_map(|handle| self.edge(*handle))
            .find(|edge| edge.category == EdgeCategory::Control)
            .map(Edge::source)
    }

    /// Appends an argument to a `Call` or `Allocation`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidListSlot`] if the vertex has no argument list
    /// - [`Error::InvalidListTarget`] if the argument does not produce a value
    pub fn push_arg(&mut self, vertex: VertexRef, arg: VertexRef) -> Result<()> {
        let len = self.list_len(vertex, ListSlot::Arguments)?;
        self.insert_arg(vertex, len, arg)
    }

    /// Prepends an argument, shifting every existing argument one position up.
    ///
    /// # Errors
    ///
    /// See [`Ir::push_arg`].
    pub fn unshift_arg(&mut self, vertex: VertexRef, arg: VertexRef) -> Result<()> {
        self.insert_arg(vertex, 0, arg)
    }

    /// Inserts an argument at `index`, renumbering the trailing argument labels.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index` is greater than the argument count
    /// - [`Error::InvalidListSlot`] / [`Error::InvalidListTarget`] as for [`Ir::push_arg`]
    pub fn insert_arg(&mut self, vertex: VertexRef, index: usize, arg: VertexRef) -> Result<()> {
        let len = self.list_len(vertex, ListSlot::Arguments)?;
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.check_list_target(vertex, ListSlot::Arguments, arg)?;

        let handle = self.install_edge(
            vertex,
            arg,
            EdgeLabel::Position(index),
            ListSlot::Arguments.category(),
        );
        if let Some(list) = self.vertices[vertex.0]
            .operation
            .list_mut(ListSlot::Arguments)
        {
            list.insert(index, handle);
        }
        self.renumber_positions(vertex, ListSlot::Arguments);
        Ok(())
    }

    /// Replaces the argument at `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index` does not address an existing argument
    /// - [`Error::InvalidListSlot`] / [`Error::InvalidListTarget`] as for [`Ir::push_arg`]
    pub fn set_arg(&mut self, vertex: VertexRef, index: usize, arg: VertexRef) -> Result<()> {
        let len = self.list_len(vertex, ListSlot::Arguments)?;
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.check_list_target(vertex, ListSlot::Arguments, arg)?;

        let old = self.vertices[vertex.0]
            .operation
            .list(ListSlot::Arguments)
            .and_then(|list| list.get(index).copied());
        if let Some(old) = old {
            self.release_edge(old);
        }
        let handle = self.install_edge(
            vertex,
            arg,
            EdgeLabel::Position(index),
            ListSlot::Arguments.category(),
        );
        if let Some(list) = self.vertices[vertex.0]
            .operation
            .list_mut(ListSlot::Arguments)
        {
            list[index] = handle;
        }
        Ok(())
    }

    /// Removes the argument at `index`, renumbering the trailing argument labels.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index` does not address an existing argument
    /// - [`Error::InvalidListSlot`] if the vertex has no argument list
    pub fn remove_arg(&mut self, vertex: VertexRef, index: usize) -> Result<VertexRef> {
        let len = self.list_len(vertex, ListSlot::Arguments)?;
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        let handle = match self.vertices[vertex.0]
            .operation
            .list_mut(ListSlot::Arguments)
        {
            Some(list) => list.remove(index),
            None => return Err(Error::IndexOutOfBounds { index, len }),
        };
        let removed = self.target(handle).ok_or(Error::UnknownVertex(vertex))?;
        self.release_edge(handle);
        self.renumber_positions(vertex, ListSlot::Arguments);
        Ok(removed)
    }

    /// Returns the argument at `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index` does not address an existing argument
    /// - [`Error::InvalidListSlot`] if the vertex has no argument list
    pub fn arg(&self, vertex: VertexRef, index: usize) -> Result<VertexRef> {
        let len = self.list_len(vertex, ListSlot::Arguments)?;
        self.list_targets(vertex, ListSlot::Arguments)
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Returns the arguments of a `Call` or `Allocation` in positional order.
    ///
    /// Vertices without an argument list report no arguments.
    #[must_use]
    pub fn args(&self, vertex: VertexRef) -> Vec<VertexRef> {
        self.list_targets(vertex, ListSlot::Arguments)
    }

    /// Appends an operand to a `Phi`.
    ///
    /// # Arguments
    ///
    /// * `phi` - The phi vertex
    /// * `value` - The vertex providing the value
    /// * `src_branch` - The control predecessor the value is selected for
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidListSlot`] if `phi` is not a `Phi`
    /// - [`Error::InvalidListTarget`] if `value` does not produce a value
    /// - [`Error::InvalidPredecessor`] if `src_branch` is neither a control nor a compound vertex
    pub fn add_phi_operand(
        &mut self,
        phi: VertexRef,
        value: VertexRef,
        src_branch: VertexRef,
    ) -> Result<()> {
        let len = self.list_len(phi, ListSlot::PhiOperands)?;
        self.insert_phi_operand(phi, len, PhiOperand::new(value, src_branch))
    }

    /// Inserts a phi operand at `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index` is greater than the operand count
    /// - Otherwise as for [`Ir::add_phi_operand`]
    pub fn insert_phi_operand(
        &mut self,
        phi: VertexRef,
        index: usize,
        operand: PhiOperand,
    ) -> Result<()> {
        let len = self.list_len(phi, ListSlot::PhiOperands)?;
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.check_list_target(phi, ListSlot::PhiOperands, operand.value)?;
        let branch_kind = self.kind_of(operand.src_branch)?;
        if !branch_kind.is_control() {
            return Err(Error::InvalidPredecessor(branch_kind));
        }

        let handle = self.install_edge(
            phi,
            operand.value,
            EdgeLabel::Predecessor(operand.src_branch),
            ListSlot::PhiOperands.category(),
        );
        if let Some(list) = self.vertices[phi.0]
            .operation
            .list_mut(ListSlot::PhiOperands)
        {
            list.insert(index, handle);
        }
        Ok(())
    }

    /// Removes the phi operand at `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index` does not address an existing operand
    /// - [`Error::InvalidListSlot`] if `phi` is not a `Phi`
    pub fn remove_phi_operand(&mut self, phi: VertexRef, index: usize) -> Result<PhiOperand> {
        let operands = self.phi_operands(phi);
        let len = self.list_len(phi, ListSlot::PhiOperands)?;
        let operand = operands
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        let handle = match self.vertices[phi.0]
            .operation
            .list_mut(ListSlot::PhiOperands)
        {
            Some(list) => list.remove(index),
            None => return Err(Error::IndexOutOfBounds { index, len }),
        };
        self.release_edge(handle);
        Ok(operand)
    }

    /// Returns the operands of a `Phi` in insertion order.
    #[must_use]
    pub fn phi_operands(&self, phi: VertexRef) -> Vec<PhiOperand> {
        let Some(list) = self
            .vertex(phi)
            .and_then(|v| v.operation.list(ListSlot::PhiOperands))
        else {
            return Vec::new();
        };
        list.iter()
            .filter_map(|handle| self.edge(*handle))
            .filter_map(|edge| {
                edge.src_branch()
                    .map(|src_branch| PhiOperand::new(edge.target, src_branch))
            })
            .collect()
    }

    /// Appends a formal parameter to a `Symbol`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidListSlot`] if `symbol` is not a `Symbol`
    /// - [`Error::InvalidListTarget`] if `parameter` is not a `Parameter`
    pub fn push_symbol_parameter(&mut self, symbol: VertexRef, parameter: VertexRef) -> Result<()> {
        let len = self.list_len(symbol, ListSlot::Parameters)?;
        self.check_list_target(symbol, ListSlot::Parameters, parameter)?;
        let handle = self.install_edge(
            symbol,
            parameter,
            EdgeLabel::Position(len),
            ListSlot::Parameters.category(),
        );
        if let Some(list) = self.vertices[symbol.0]
            .operation
            .list_mut(ListSlot::Parameters)
        {
            list.push(handle);
        }
        Ok(())
    }

    /// Returns the formal parameters enumerated by a `Symbol`.
    #[must_use]
    pub fn symbol_parameters(&self, symbol: VertexRef) -> Vec<VertexRef> {
        self.list_targets(symbol, ListSlot::Parameters)
    }

    fn list_targets(&self, vertex: VertexRef, list: ListSlot) -> Vec<VertexRef> {
        self.vertex(vertex)
            .and_then(|v| v.operation.list(list))
            .map(|edges| edges.iter().filter_map(|e| self.target(*e)).collect())
            .unwrap_or_default()
    }
}
