//! Per-kind vertex payloads.
//!
//! Each concrete vertex kind carries one payload struct holding its
//! construction-time fields (operator, literal value, name, ...) and its
//! operand slots. Slots store [`EdgeRef`] handles only; they are written
//! exclusively by the wiring routine in [`crate::ir::slot`], so the getters here
//! are read-only. Use [`Ir::operand`](crate::Ir::operand) and friends to
//! resolve a slot to its target vertex.

use strum::IntoEnumIterator;

use crate::ir::{BinaryOperator, EdgeRef, ListSlot, Slot, UnaryOperator, Value, VertexKind};

/// Payload of a `Literal` vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub(crate) value: Value,
}

impl Literal {
    /// Returns the literal value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// Payload of a `Symbol` vertex: a named reference to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbol {
    pub(crate) name: String,
    pub(crate) start: Option<EdgeRef>,
    pub(crate) parameters: Vec<EdgeRef>,
}

impl Symbol {
    /// Returns the referenced name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the edge to the `Start` of the defining scope.
    #[must_use]
    pub const fn start_edge(&self) -> Option<EdgeRef> {
        self.start
    }

    /// Returns the edges to the formal parameters, in declaration order.
    #[must_use]
    pub fn parameter_edges(&self) -> &[EdgeRef] {
        &self.parameters
    }
}

/// Payload of a `Parameter` vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub(crate) position: usize,
}

impl Parameter {
    /// Returns the 0-based position of the parameter.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Payload shared by `PrefixUnaryOperation` and `PostfixUnaryOperation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnaryOperation {
    pub(crate) operator: UnaryOperator,
    pub(crate) operand: Option<EdgeRef>,
}

impl UnaryOperation {
    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> UnaryOperator {
        self.operator
    }

    /// Returns the `operand` edge.
    #[must_use]
    pub const fn operand_edge(&self) -> Option<EdgeRef> {
        self.operand
    }
}

/// Payload of a `BinaryOperation` vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryOperation {
    pub(crate) operator: BinaryOperator,
    pub(crate) left: Option<EdgeRef>,
    pub(crate) right: Option<EdgeRef>,
}

impl BinaryOperation {
    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> BinaryOperator {
        self.operator
    }

    /// Returns the `left` edge.
    #[must_use]
    pub const fn left_edge(&self) -> Option<EdgeRef> {
        self.left
    }

    /// Returns the `right` edge.
    #[must_use]
    pub const fn right_edge(&self) -> Option<EdgeRef> {
        self.right
    }
}

/// Payload of a `Phi` vertex.
///
/// Operand edges are tagged with the control predecessor they flow in from;
/// see [`Ir::phi_operands`](crate::Ir::phi_operands).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phi {
    pub(crate) merge: Option<EdgeRef>,
    pub(crate) operands: Vec<EdgeRef>,
}

impl Phi {
    /// Returns the association edge to the owning `Merge`.
    #[must_use]
    pub const fn merge_edge(&self) -> Option<EdgeRef> {
        self.merge
    }

    /// Returns the operand edges in insertion order.
    #[must_use]
    pub fn operand_edges(&self) -> &[EdgeRef] {
        &self.operands
    }
}

/// Payload of the plain control steps `Start`, `Pass`, `BlockBegin` and `BlockEnd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlStep {
    pub(crate) next: Option<EdgeRef>,
}

impl ControlStep {
    /// Returns the `next` edge.
    #[must_use]
    pub const fn next_edge(&self) -> Option<EdgeRef> {
        self.next
    }
}

/// Payload of the terminal control steps `Return` and `Throw`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exit {
    pub(crate) value: Option<EdgeRef>,
}

impl Exit {
    /// Returns the `value` edge.
    #[must_use]
    pub const fn value_edge(&self) -> Option<EdgeRef> {
        self.value
    }
}

/// Payload of a `Branch` vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Branch {
    pub(crate) condition: Option<EdgeRef>,
    pub(crate) on_true: Option<EdgeRef>,
    pub(crate) on_false: Option<EdgeRef>,
}

impl Branch {
    /// Returns the `condition` edge.
    #[must_use]
    pub const fn condition_edge(&self) -> Option<EdgeRef> {
        self.condition
    }

    /// Returns the `true` edge.
    #[must_use]
    pub const fn true_edge(&self) -> Option<EdgeRef> {
        self.on_true
    }

    /// Returns the `false` edge.
    #[must_use]
    pub const fn false_edge(&self) -> Option<EdgeRef> {
        self.on_false
    }
}

/// Payload of a `Merge` vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Merge {
    pub(crate) next: Option<EdgeRef>,
    pub(crate) branch: Option<EdgeRef>,
}

impl Merge {
    /// Returns the `next` edge.
    #[must_use]
    pub const fn next_edge(&self) -> Option<EdgeRef> {
        self.next
    }

    /// Returns the association edge to the joined `Branch`.
    #[must_use]
    pub const fn branch_edge(&self) -> Option<EdgeRef> {
        self.branch
    }
}

/// Payload of an `Allocation` vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    pub(crate) next: Option<EdgeRef>,
    pub(crate) callee: Option<EdgeRef>,
    pub(crate) args: Vec<EdgeRef>,
}

impl Allocation {
    /// Returns the `next` edge.
    #[must_use]
    pub const fn next_edge(&self) -> Option<EdgeRef> {
        self.next
    }

    /// Returns the constructor edge.
    #[must_use]
    pub const fn callee_edge(&self) -> Option<EdgeRef> {
        self.callee
    }

    /// Returns the argument edges in positional order.
    #[must_use]
    pub fn arg_edges(&self) -> &[EdgeRef] {
        &self.args
    }
}

/// Payload of a `Store` vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Store {
    pub(crate) next: Option<EdgeRef>,
    pub(crate) object: Option<EdgeRef>,
    pub(crate) property: Option<EdgeRef>,
    pub(crate) value: Option<EdgeRef>,
}

impl Store {
    /// Returns the `next` edge.
    #[must_use]
    pub const fn next_edge(&self) -> Option<EdgeRef> {
        self.next
    }

    /// Returns the `object` edge.
    #[must_use]
    pub const fn object_edge(&self) -> Option<EdgeRef> {
        self.object
    }

    /// Returns the `property` edge.
    #[must_use]
    pub const fn property_edge(&self) -> Option<EdgeRef> {
        self.property
    }

    /// Returns the `value` edge.
    #[must_use]
    pub const fn value_edge(&self) -> Option<EdgeRef> {
        self.value
    }
}

/// Payload of a `Load` vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Load {
    pub(crate) next: Option<EdgeRef>,
    pub(crate) object: Option<EdgeRef>,
    pub(crate) property: Option<EdgeRef>,
}

impl Load {
    /// Returns the `next` edge.
    #[must_use]
    pub const fn next_edge(&self) -> Option<EdgeRef> {
        self.next
    }

    /// Returns the `object` edge.
    #[must_use]
    pub const fn object_edge(&self) -> Option<EdgeRef> {
        self.object
    }

    /// Returns the `property` edge.
    #[must_use]
    pub const fn property_edge(&self) -> Option<EdgeRef> {
        self.property
    }
}

/// Payload of a `Call` vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Call {
    pub(crate) next: Option<EdgeRef>,
    pub(crate) callee: Option<EdgeRef>,
    pub(crate) caller_object: Option<EdgeRef>,
    pub(crate) args: Vec<EdgeRef>,
}

impl Call {
    /// Returns the `next` edge.
    #[must_use]
    pub const fn next_edge(&self) -> Option<EdgeRef> {
        self.next
    }

    /// Returns the `callee` edge.
    #[must_use]
    pub const fn callee_edge(&self) -> Option<EdgeRef> {
        self.callee
    }

    /// Returns the receiver object edge of a method call.
    #[must_use]
    pub const fn caller_object_edge(&self) -> Option<EdgeRef> {
        self.caller_object
    }

    /// Returns the argument edges in positional order.
    #[must_use]
    pub fn arg_edges(&self) -> &[EdgeRef] {
        &self.args
    }
}

/// The kind-specific part of a vertex.
///
/// There is exactly one variant per [`VertexKind`]. Code that must behave
/// differently per kind matches on this enum (directly or through a
/// [`VertexVisitor`](crate::ir::VertexVisitor)), so adding a kind fails to
/// compile until every consumer handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Literal value.
    Literal(Literal),
    /// Named reference.
    Symbol(Symbol),
    /// Formal parameter.
    Parameter(Parameter),
    /// Prefix unary operation (`-x`, `++x`).
    PrefixUnaryOperation(UnaryOperation),
    /// Postfix unary operation (`x++`).
    PostfixUnaryOperation(UnaryOperation),
    /// Binary operation.
    BinaryOperation(BinaryOperation),
    /// SSA merge value.
    Phi(Phi),
    /// Scope entry.
    Start(ControlStep),
    /// Plain control step.
    Pass(ControlStep),
    /// Return from the scope.
    Return(Exit),
    /// Two-way conditional.
    Branch(Branch),
    /// Join point of a branch.
    Merge(Merge),
    /// Entry marker of a branch arm.
    BlockBegin(ControlStep),
    /// Exit marker of a branch arm.
    BlockEnd(ControlStep),
    /// Raise an exception.
    Throw(Exit),
    /// Object construction.
    Allocation(Allocation),
    /// Property write.
    Store(Store),
    /// Property read.
    Load(Load),
    /// Function or method call.
    Call(Call),
}

impl Operation {
    /// Returns the kind tag of this operation.
    #[must_use]
    pub const fn kind(&self) -> VertexKind {
        match self {
            Operation::Literal(_) => VertexKind::Literal,
            Operation::Symbol(_) => VertexKind::Symbol,
            Operation::Parameter(_) => VertexKind::Parameter,
            Operation::PrefixUnaryOperation(_) => VertexKind::PrefixUnaryOperation,
            Operation::PostfixUnaryOperation(_) => VertexKind::PostfixUnaryOperation,
            Operation::BinaryOperation(_) => VertexKind::BinaryOperation,
            Operation::Phi(_) => VertexKind::Phi,
            Operation::Start(_) => VertexKind::Start,
            Operation::Pass(_) => VertexKind::Pass,
            Operation::Return(_) => VertexKind::Return,
            Operation::Branch(_) => VertexKind::Branch,
            Operation::Merge(_) => VertexKind::Merge,
            Operation::BlockBegin(_) => VertexKind::BlockBegin,
            Operation::BlockEnd(_) => VertexKind::BlockEnd,
            Operation::Throw(_) => VertexKind::Throw,
            Operation::Allocation(_) => VertexKind::Allocation,
            Operation::Store(_) => VertexKind::Store,
            Operation::Load(_) => VertexKind::Load,
            Operation::Call(_) => VertexKind::Call,
        }
    }

    /// Returns the display label of this operation.
    ///
    /// Literals show their value, symbols `#name`, parameters `Parameter #n`,
    /// unary operations their operator and fixity, binary operations their
    /// operator, and every other kind its kind name.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Operation::Literal(op) => op.value.to_string(),
            Operation::Symbol(op) => format!("#{}", op.name),
            Operation::Parameter(op) => format!("Parameter #{}", op.position),
            Operation::PrefixUnaryOperation(op) => format!("{} (Prefix)", op.operator),
            Operation::PostfixUnaryOperation(op) => format!("{} (Postfix)", op.operator),
            Operation::BinaryOperation(op) => op.operator.to_string(),
            _ => self.kind().to_string(),
        }
    }

    /// Returns the stored edge of a named slot.
    ///
    /// The outer `Option` is `None` if this kind has no such slot, the inner
    /// one if the slot is unset.
    #[must_use]
    pub fn slot(&self, slot: Slot) -> Option<Option<EdgeRef>> {
        let stored = match (self, slot) {
            (Operation::Symbol(op), Slot::Start) => op.start,
            (
                Operation::PrefixUnaryOperation(op) | Operation::PostfixUnaryOperation(op),
                Slot::Operand,
            ) => op.operand,
            (Operation::BinaryOperation(op), Slot::Left) => op.left,
            (Operation::BinaryOperation(op), Slot::Right) => op.right,
            (Operation::Phi(op), Slot::Merge) => op.merge,
            (
                Operation::Start(op)
                | Operation::Pass(op)
                | Operation::BlockBegin(op)
                | Operation::BlockEnd(op),
                Slot::Next,
            ) => op.next,
            (Operation::Return(op) | Operation::Throw(op), Slot::Value) => op.value,
            (Operation::Branch(op), Slot::Condition) => op.condition,
            (Operation::Branch(op), Slot::True) => op.on_true,
            (Operation::Branch(op), Slot::False) => op.on_false,
            (Operation::Merge(op), Slot::Next) => op.next,
            (Operation::Merge(op), Slot::Branch) => op.branch,
            (Operation::Allocation(op), Slot::Next) => op.next,
            (Operation::Allocation(op), Slot::Callee) => op.callee,
            (Operation::Store(op), Slot::Next) => op.next,
            (Operation::Store(op), Slot::Object) => op.object,
            (Operation::Store(op), Slot::Property) => op.property,
            (Operation::Store(op), Slot::Value) => op.value,
            (Operation::Load(op), Slot::Next) => op.next,
            (Operation::Load(op), Slot::Object) => op.object,
            (Operation::Load(op), Slot::Property) => op.property,
            (Operation::Call(op), Slot::Next) => op.next,
            (Operation::Call(op), Slot::Callee) => op.callee,
            (Operation::Call(op), Slot::CallerObject) => op.caller_object,
            _ => return None,
        };
        Some(stored)
    }

    pub(crate) fn slot_mut(&mut self, slot: Slot) -> Option<&mut Option<EdgeRef>> {
        match (self, slot) {
            (Operation::Symbol(op), Slot::Start) => Some(&mut op.start),
            (
                Operation::PrefixUnaryOperation(op) | Operation::PostfixUnaryOperation(op),
                Slot::Operand,
            ) => Some(&mut op.operand),
            (Operation::BinaryOperation(op), Slot::Left) => Some(&mut op.left),
            (Operation::BinaryOperation(op), Slot::Right) => Some(&mut op.right),
            (Operation::Phi(op), Slot::Merge) => Some(&mut op.merge),
            (
                Operation::Start(op)
                | Operation::Pass(op)
                | Operation::BlockBegin(op)
                | Operation::BlockEnd(op),
                Slot::Next,
            ) => Some(&mut op.next),
            (Operation::Return(op) | Operation::Throw(op), Slot::Value) => Some(&mut op.value),
            (Operation::Branch(op), Slot::Condition) => Some(&mut op.condition),
            (Operation::Branch(op), Slot::True) => Some(&mut op.on_true),
            (Operation::Branch(op), Slot::False) => Some(&mut op.on_false),
            (Operation::Merge(op), Slot::Next) => Some(&mut op.next),
            (Operation::Merge(op), Slot::Branch) => Some(&mut op.branch),
            (Operation::Allocation(op), Slot::Next) => Some(&mut op.next),
            (Operation::Allocation(op), Slot::Callee) => Some(&mut op.callee),
            (Operation::Store(op), Slot::Next) => Some(&mut op.next),
            (Operation::Store(op), Slot::Object) => Some(&mut op.object),
            (Operation::Store(op), Slot::Property) => Some(&mut op.property),
            (Operation::Store(op), Slot::Value) => Some(&mut op.value),
            (Operation::Load(op), Slot::Next) => Some(&mut op.next),
            (Operation::Load(op), Slot::Object) => Some(&mut op.object),
            (Operation::Load(op), Slot::Property) => Some(&mut op.property),
            (Operation::Call(op), Slot::Next) => Some(&mut op.next),
            (Operation::Call(op), Slot::Callee) => Some(&mut op.callee),
            (Operation::Call(op), Slot::CallerObject) => Some(&mut op.caller_object),
            _ => None,
        }
    }

    /// Returns the edges of an ordered list slot, or `None` if this kind has no such list.
    #[must_use]
    pub fn list(&self, list: ListSlot) -> Option<&Vec<EdgeRef>> {
        match (self, list) {
            (Operation::Allocation(op), ListSlot::Arguments) => Some(&op.args),
            (Operation::Call(op), ListSlot::Arguments) => Some(&op.args),
            (Operation::Phi(op), ListSlot::PhiOperands) => Some(&op.operands),
            (Operation::Symbol(op), ListSlot::Parameters) => Some(&op.parameters),
            _ => None,
        }
    }

    pub(crate) fn list_mut(&mut self, list: ListSlot) -> Option<&mut Vec<EdgeRef>> {
        match (self, list) {
            (Operation::Allocation(op), ListSlot::Arguments) => Some(&mut op.args),
            (Operation::Call(op), ListSlot::Arguments) => Some(&mut op.args),
            (Operation::Phi(op), ListSlot::PhiOperands) => Some(&mut op.operands),
            (Operation::Symbol(op), ListSlot::Parameters) => Some(&mut op.parameters),
            _ => None,
        }
    }

    /// Forgets every stored edge without releasing it.
    ///
    /// Only valid on a payload whose edges are owned elsewhere, such as a
    /// clone of an arena vertex that is about to be moved in as a new vertex.
    pub(crate) fn clear_edges(&mut self) {
        for slot in Slot::iter() {
            if let Some(stored) = self.slot_mut(slot) {
                *stored = None;
            }
        }
        for list in ListSlot::iter() {
            if let Some(stored) = self.list_mut(list) {
                stored.clear();
            }
        }
    }

    /// Returns every outgoing edge, computed from the slots.
    ///
    /// The order is stable: the control successor first, then the
    /// kind-specific operands in declaration order, then list elements.
    #[must_use]
    pub fn out_edges(&self) -> Vec<EdgeRef> {
        let mut edges = Vec::new();
        match self {
            Operation::Literal(_) | Operation::Parameter(_) => {}
            Operation::Symbol(op) => {
                edges.extend(op.start);
                edges.extend(op.parameters.iter().copied());
            }
            Operation::PrefixUnaryOperation(op) | Operation::PostfixUnaryOperation(op) => {
                edges.extend(op.operand);
            }
            Operation::BinaryOperation(op) => {
                edges.extend(op.left);
                edges.extend(op.right);
            }
            Operation::Phi(op) => {
                edges.extend(op.operands.iter().copied());
                edges.extend(op.merge);
            }
            Operation::Start(op)
            | Operation::Pass(op)
            | Operation::BlockBegin(op)
            | Operation::BlockEnd(op) => edges.extend(op.next),
            Operation::Return(op) | Operation::Throw(op) => edges.extend(op.value),
            Operation::Branch(op) => {
                edges.extend(op.condition);
                edges.extend(op.on_true);
                edges.extend(op.on_false);
            }
            Operation::Merge(op) => {
                edges.extend(op.next);
                edges.extend(op.branch);
            }
            Operation::Allocation(op) => {
                edges.extend(op.next);
                edges.extend(op.callee);
                edges.extend(op.args.iter().copied());
            }
            Operation::Store(op) => {
                edges.extend(op.next);
                edges.extend(op.object);
                edges.extend(op.property);
                edges.extend(op.value);
            }
            Operation::Load(op) => {
                edges.extend(op.next);
                edges.extend(op.object);
                edges.extend(op.property);
            }
            Operation::Call(op) => {
                edges.extend(op.next);
                edges.extend(op.callee);
                edges.extend(op.caller_object);
                edges.extend(op.args.iter().copied());
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: VertexKind) -> Operation {
        match kind {
            VertexKind::Literal => Operation::Literal(Literal { value: Value::Null }),
            VertexKind::Symbol => Operation::Symbol(Symbol::default()),
            VertexKind::Parameter => Operation::Parameter(Parameter { position: 0 }),
            VertexKind::PrefixUnaryOperation => {
                Operation::PrefixUnaryOperation(UnaryOperation {
                    operator: UnaryOperator::Minus,
                    operand: None,
                })
            }
            VertexKind::PostfixUnaryOperation => {
                Operation::PostfixUnaryOperation(UnaryOperation {
                    operator: UnaryOperator::Increment,
                    operand: None,
                })
            }
            VertexKind::BinaryOperation => Operation::BinaryOperation(BinaryOperation {
                operator: BinaryOperator::Add,
                left: None,
                right: None,
            }),
            VertexKind::Phi => Operation::Phi(Phi::default()),
            VertexKind::Start => Operation::Start(ControlStep::default()),
            VertexKind::Pass => Operation::Pass(ControlStep::default()),
            VertexKind::Return => Operation::Return(Exit::default()),
            VertexKind::Branch => Operation::Branch(Branch::default()),
            VertexKind::Merge => Operation::Merge(Merge::default()),
            VertexKind::BlockBegin => Operation::BlockBegin(ControlStep::default()),
            VertexKind::BlockEnd => Operation::BlockEnd(ControlStep::default()),
            VertexKind::Throw => Operation::Throw(Exit::default()),
            VertexKind::Allocation => Operation::Allocation(Allocation::default()),
            VertexKind::Store => Operation::Store(Store::default()),
            VertexKind::Load => Operation::Load(Load::default()),
            VertexKind::Call => Operation::Call(Call::default()),
        }
    }

    #[test]
    fn test_kind_matches_variant() {
        for kind in VertexKind::iter() {
            assert_eq!(sample(kind).kind(), kind);
        }
    }

    #[test]
    fn test_slot_and_slot_mut_agree() {
        for kind in VertexKind::iter() {
            let mut op = sample(kind);
            for slot in Slot::iter() {
                assert_eq!(
                    op.slot(slot).is_some(),
                    op.slot_mut(slot).is_some(),
                    "{kind} {slot}"
                );
            }
        }
    }

    #[test]
    fn test_non_terminal_control_kinds_have_next() {
        for kind in VertexKind::iter() {
            let has_next = sample(kind).slot(Slot::Next).is_some();
            let expected = kind.is_control()
                && !matches!(kind, VertexKind::Return | VertexKind::Throw | VertexKind::Branch);
            assert_eq!(has_next, expected, "{kind}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(sample(VertexKind::PrefixUnaryOperation).label(), "- (Prefix)");
        assert_eq!(sample(VertexKind::PostfixUnaryOperation).label(), "++ (Postfix)");
        assert_eq!(sample(VertexKind::BinaryOperation).label(), "+");
        assert_eq!(sample(VertexKind::Parameter).label(), "Parameter #0");
        assert_eq!(sample(VertexKind::Merge).label(), "Merge");
        assert_eq!(sample(VertexKind::Literal).label(), "null");
    }

    #[test]
    fn test_clear_edges_empties_slots_and_lists() {
        let mut op = Operation::Call(Call {
            next: Some(EdgeRef::new(0)),
            callee: Some(EdgeRef::new(1)),
            caller_object: Some(EdgeRef::new(2)),
            args: vec![EdgeRef::new(3)],
        });
        op.clear_edges();
        assert!(op.out_edges().is_empty());

        let mut phi = Operation::Phi(Phi {
            merge: Some(EdgeRef::new(4)),
            operands: vec![EdgeRef::new(5), EdgeRef::new(6)],
        });
        phi.clear_edges();
        assert_eq!(phi, sample(VertexKind::Phi));
    }

    #[test]
    fn test_out_edges_order() {
        let op = Operation::Call(Call {
            next: Some(EdgeRef::new(0)),
            callee: Some(EdgeRef::new(1)),
            caller_object: None,
            args: vec![EdgeRef::new(2), EdgeRef::new(3)],
        });
        assert_eq!(
            op.out_edges(),
            vec![EdgeRef::new(0), EdgeRef::new(1), EdgeRef::new(2), EdgeRef::new(3)]
        );
    }
}
