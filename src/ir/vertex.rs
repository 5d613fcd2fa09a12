//! The vertex record, its kind tags and its builder constructors.
//!
//! A [`Vertex`] is created detached through one of the constructors below (for
//! example [`Vertex::binary`]), handed to [`Ir::create`](crate::Ir::create),
//! wired through the operand slot API and finally attached to a graph, which
//! assigns its id.
//!
//! # Categories
//!
//! | Category   | Kinds |
//! |------------|-------|
//! | `Data`     | Literal, Symbol, Parameter, Prefix/PostfixUnaryOperation, BinaryOperation, Phi |
//! | `Control`  | Start, Pass, Return, Branch, Merge, BlockBegin, BlockEnd, Throw, Store |
//! | `Compound` | Allocation, Load, Call |
//!
//! `Store` sequences execution like a compound step but yields no value of its
//! own, so it is categorized as `Control`.

use serde::Serialize;
use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::{
    ir::{
        Allocation, BinaryOperation, BinaryOperator, Branch, Call, ControlStep, EdgeRef, Exit,
        GraphRef, Ir, Literal, Load, Merge, Operation, Parameter, Phi, Store, Symbol,
        UnaryOperation, UnaryOperator, Value, VertexRef, VertexVisitor,
    },
    types::Type,
};

/// Fine-grained kind tag of a vertex.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    Serialize,
)]
pub enum VertexKind {
    /// Literal value
    Literal,
    /// Named reference to a declaration
    Symbol,
    /// Formal parameter
    Parameter,
    /// Unary operation with the operator in front
    PrefixUnaryOperation,
    /// Unary operation with the operator behind
    PostfixUnaryOperation,
    /// Binary operation
    BinaryOperation,
    /// SSA merge value
    Phi,
    /// Scope entry
    Start,
    /// Plain control step
    Pass,
    /// Return from the scope
    Return,
    /// Two-way conditional
    Branch,
    /// Join point of a branch
    Merge,
    /// Entry marker of a branch arm
    BlockBegin,
    /// Exit marker of a branch arm
    BlockEnd,
    /// Raise an exception
    Throw,
    /// Object construction
    Allocation,
    /// Property write
    Store,
    /// Property read
    Load,
    /// Function or method call
    Call,
}

impl VertexKind {
    /// Returns the category this kind belongs to.
    #[must_use]
    pub const fn category(self) -> VertexCategory {
        match self {
            VertexKind::Literal
            | VertexKind::Symbol
            | VertexKind::Parameter
            | VertexKind::PrefixUnaryOperation
            | VertexKind::PostfixUnaryOperation
            | VertexKind::BinaryOperation
            | VertexKind::Phi => VertexCategory::Data,
            VertexKind::Start
            | VertexKind::Pass
            | VertexKind::Return
            | VertexKind::Branch
            | VertexKind::Merge
            | VertexKind::BlockBegin
            | VertexKind::BlockEnd
            | VertexKind::Throw
            | VertexKind::Store => VertexCategory::Control,
            VertexKind::Allocation | VertexKind::Load | VertexKind::Call => {
                VertexCategory::Compound
            }
        }
    }

    /// Returns `true` if vertices of this kind yield a value usable as a data operand.
    #[must_use]
    pub const fn produces_value(self) -> bool {
        matches!(
            self.category(),
            VertexCategory::Data | VertexCategory::Compound
        )
    }

    /// Returns `true` if vertices of this kind take part in the control chain.
    #[must_use]
    pub const fn is_control(self) -> bool {
        matches!(
            self.category(),
            VertexCategory::Control | VertexCategory::Compound
        )
    }

    /// Returns `true` if vertices of this kind have exactly one control predecessor.
    ///
    /// `Start` is the scope entry and has none; `Merge` joins several.
    #[must_use]
    pub const fn has_previous(self) -> bool {
        matches!(
            self,
            VertexKind::Pass
                | VertexKind::Return
                | VertexKind::Branch
                | VertexKind::BlockBegin
                | VertexKind::BlockEnd
                | VertexKind::Throw
                | VertexKind::Allocation
                | VertexKind::Store
                | VertexKind::Load
                | VertexKind::Call
        )
    }

    /// Returns `true` if vertices of this kind end the control chain.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, VertexKind::Return | VertexKind::Throw)
    }
}

/// Coarse category of a vertex.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize,
)]
pub enum VertexCategory {
    /// Produces a value.
    Data,
    /// Sequences execution.
    Control,
    /// A control step that also produces a value.
    Compound,
}

/// Declared type token supplied by an external type source.
///
/// The IR stores the token and hands it back unchanged; it never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclaredType(String);

impl DeclaredType {
    /// Wraps an opaque type token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A vertex of the IR.
///
/// Outside of an [`Ir`] a `Vertex` is only a builder value; once passed to
/// [`Ir::create`] it becomes the arena record addressed by a [`VertexRef`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub(crate) handle: VertexRef,
    pub(crate) id: Option<usize>,
    pub(crate) graph: Option<GraphRef>,
    pub(crate) operation: Operation,
    pub(crate) in_edges: Vec<EdgeRef>,
    pub(crate) declared_type: Option<DeclaredType>,
    pub(crate) verified_type: Option<Type>,
}

impl Vertex {
    /// Creates a detached vertex around a payload.
    #[must_use]
    pub const fn new(operation: Operation) -> Self {
        Self {
            handle: VertexRef::new(0),
            id: None,
            graph: None,
            operation,
            in_edges: Vec::new(),
            declared_type: None,
            verified_type: None,
        }
    }

    /// Creates a `Literal` vertex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vertex_ir::{ir::Value, Vertex};
    ///
    /// assert_eq!(Vertex::literal(5).label(), "5");
    /// assert_eq!(Vertex::literal(Value::Undefined).label(), "undefined");
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::new(Operation::Literal(Literal {
            value: value.into(),
        }))
    }

    /// Creates a `Symbol` vertex referencing `name`.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(Operation::Symbol(Symbol {
            name: name.into(),
            start: None,
            parameters: Vec::new(),
        }))
    }

    /// Creates a `Parameter` vertex at `position`.
    #[must_use]
    pub const fn parameter(position: usize) -> Self {
        Self::new(Operation::Parameter(Parameter { position }))
    }

    /// Creates a `PrefixUnaryOperation` vertex.
    #[must_use]
    pub const fn prefix_unary(operator: UnaryOperator) -> Self {
        Self::new(Operation::PrefixUnaryOperation(UnaryOperation {
            operator,
            operand: None,
        }))
    }

    /// Creates a `PostfixUnaryOperation` vertex.
    #[must_use]
    pub const fn postfix_unary(operator: UnaryOperator) -> Self {
        Self::new(Operation::PostfixUnaryOperation(UnaryOperation {
            operator,
            operand: None,
        }))
    }

    /// Creates a `BinaryOperation` vertex.
    #[must_use]
    pub const fn binary(operator: BinaryOperator) -> Self {
        Self::new(Operation::BinaryOperation(BinaryOperation {
            operator,
            left: None,
            right: None,
        }))
    }

    /// Creates a `Phi` vertex.
    #[must_use]
    pub const fn phi() -> Self {
        Self::new(Operation::Phi(Phi {
            merge: None,
            operands: Vec::new(),
        }))
    }

    /// Creates a `Start` vertex.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(Operation::Start(ControlStep { next: None }))
    }

    /// Creates a `Pass` vertex.
    #[must_use]
    pub const fn pass() -> Self {
        Self::new(Operation::Pass(ControlStep { next: None }))
    }

    /// Creates a `Return` vertex.
    #[must_use]
    pub const fn ret() -> Self {
        Self::new(Operation::Return(Exit { value: None }))
    }

    /// Creates a `Throw` vertex.
    #[must_use]
    pub const fn throw() -> Self {
        Self::new(Operation::Throw(Exit { value: None }))
    }

    /// Creates a `Branch` vertex.
    #[must_use]
    pub const fn branch() -> Self {
        Self::new(Operation::Branch(Branch {
            condition: None,
            on_true: None,
            on_false: None,
        }))
    }

    /// Creates a `Merge` vertex.
    #[must_use]
    pub const fn merge() -> Self {
        Self::new(Operation::Merge(Merge {
            next: None,
            branch: None,
        }))
    }

    /// Creates a `BlockBegin` vertex.
    #[must_use]
    pub const fn block_begin() -> Self {
        Self::new(Operation::BlockBegin(ControlStep { next: None }))
    }

    /// Creates a `BlockEnd` vertex.
    #[must_use]
    pub const fn block_end() -> Self {
        Self::new(Operation::BlockEnd(ControlStep { next: None }))
    }

    /// Creates an `Allocation` vertex.
    #[must_use]
    pub const fn allocation() -> Self {
        Self::new(Operation::Allocation(Allocation {
            next: None,
            callee: None,
            args: Vec::new(),
        }))
    }

    /// Creates a `Store` vertex.
    #[must_use]
    pub const fn store() -> Self {
        Self::new(Operation::Store(Store {
            next: None,
            object: None,
            property: None,
            value: None,
        }))
    }

    /// Creates a `Load` vertex.
    #[must_use]
    pub const fn load() -> Self {
        Self::new(Operation::Load(Load {
            next: None,
            object: None,
            property: None,
        }))
    }

    /// Creates a `Call` vertex.
    #[must_use]
    pub const fn call() -> Self {
        Self::new(Operation::Call(Call {
            next: None,
            callee: None,
            caller_object: None,
            args: Vec::new(),
        }))
    }

    /// Sets the declared type token.
    #[must_use]
    pub fn with_declared_type(mut self, declared: DeclaredType) -> Self {
        self.declared_type = Some(declared);
        self
    }

    /// Sets the verified type.
    #[must_use]
    pub fn with_verified_type(mut self, verified: Type) -> Self {
        self.verified_type = Some(verified);
        self
    }

    /// Returns the arena handle of this vertex.
    ///
    /// Only meaningful for vertices obtained from an [`Ir`].
    #[must_use]
    pub const fn handle(&self) -> VertexRef {
        self.handle
    }

    /// Returns the display id, or `None` while the vertex is detached.
    #[must_use]
    pub const fn id(&self) -> Option<usize> {
        self.id
    }

    /// Returns the graph this vertex is attached to.
    #[must_use]
    pub const fn graph(&self) -> Option<GraphRef> {
        self.graph
    }

    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> VertexKind {
        self.operation.kind()
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> VertexCategory {
        self.kind().category()
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> String {
        self.operation.label()
    }

    /// Returns the kind-specific payload.
    #[must_use]
    pub const fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Returns every edge targeting this vertex, in installation order.
    #[must_use]
    pub fn in_edges(&self) -> &[EdgeRef] {
        &self.in_edges
    }

    /// Returns every edge owned by this vertex, computed from its slots.
    #[must_use]
    pub fn out_edges(&self) -> Vec<EdgeRef> {
        self.operation.out_edges()
    }

    /// Returns the declared type token, if any.
    #[must_use]
    pub const fn declared_type(&self) -> Option<&DeclaredType> {
        self.declared_type.as_ref()
    }

    /// Returns the verified type, if any.
    #[must_use]
    pub const fn verified_type(&self) -> Option<&Type> {
        self.verified_type.as_ref()
    }

    /// Dispatches to the visitor method named for this vertex's kind.
    ///
    /// # Arguments
    ///
    /// * `ir` - The arena owning this vertex, passed through to the visitor
    /// * `visitor` - The visitor to dispatch to
    ///
    /// # Returns
    ///
    /// Whatever the selected visitor method returns.
    pub fn accept<T, V>(&self, ir: &Ir, visitor: &mut V) -> T
    where
        V: VertexVisitor<T> + ?Sized,
    {
        match &self.operation {
            Operation::Literal(op) => visitor.visit_literal(ir, self, op),
            Operation::Symbol(op) => visitor.visit_symbol(ir, self, op),
            Operation::Parameter(op) => visitor.visit_parameter(ir, self, op),
            Operation::PrefixUnaryOperation(op) => {
                visitor.visit_prefix_unary_operation(ir, self, op)
            }
            Operation::PostfixUnaryOperation(op) => {
                visitor.visit_postfix_unary_operation(ir, self, op)
            }
            Operation::BinaryOperation(op) => visitor.visit_binary_operation(ir, self, op),
            Operation::Phi(op) => visitor.visit_phi(ir, self, op),
            Operation::Start(op) => visitor.visit_start(ir, self, op),
            Operation::Pass(op) => visitor.visit_pass(ir, self, op),
            Operation::Return(op) => visitor.visit_return(ir, self, op),
            Operation::Branch(op) => visitor.visit_branch(ir, self, op),
            Operation::Merge(op) => visitor.visit_merge(ir, self, op),
            Operation::BlockBegin(op) => visitor.visit_block_begin(ir, self, op),
            Operation::BlockEnd(op) => visitor.visit_block_end(ir, self, op),
            Operation::Throw(op) => visitor.visit_throw(ir, self, op),
            Operation::Allocation(op) => visitor.visit_allocation(ir, self, op),
            Operation::Store(op) => visitor.visit_store(ir, self, op),
            Operation::Load(op) => visitor.visit_load(ir, self, op),
            Operation::Call(op) => visitor.visit_call(ir, self, op),
        }
    }
}
