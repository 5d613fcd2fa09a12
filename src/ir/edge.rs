//! Edge records connecting vertices.
//!
//! An [`Edge`] is a directed, labeled, categorized relation between two
//! vertices. Edges live in the edge arena of the owning [`Ir`](crate::Ir); the
//! source vertex owns the edge through one of its operand slots and the target
//! vertex references it from its in-edge list.
//!
//! Edges never own vertices. Their shape (source, target, category) is fixed at
//! creation; only positional labels are renumbered when an ordered slot list
//! shifts.

use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::ir::{Slot, VertexRef};

/// The relation an edge expresses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize,
)]
pub enum EdgeCategory {
    /// Value flow from an operand to its user.
    Data,
    /// Execution order between control steps.
    Control,
    /// Structural link that carries neither value nor control (e.g. `Merge` to `Branch`).
    Association,
}

/// How an edge derives its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// Fixed semantic label of a named slot (`left`, `next`, ...).
    Slot(Slot),
    /// Position inside an ordered slot list (call arguments, symbol parameters).
    Position(usize),
    /// Phi operand label, derived live from the current id of the control
    /// predecessor the operand flows in from.
    Predecessor(VertexRef),
}

/// A directed, labeled, categorized relation between two vertices.
///
/// Use [`Ir::edge_label`](crate::Ir::edge_label) to render the label; a phi
/// operand label depends on the current id of another vertex and therefore
/// cannot be rendered from the edge alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub(crate) source: VertexRef,
    pub(crate) target: VertexRef,
    pub(crate) label: EdgeLabel,
    pub(crate) category: EdgeCategory,
}

impl Edge {
    pub(crate) const fn new(
        source: VertexRef,
        target: VertexRef,
        label: EdgeLabel,
        category: EdgeCategory,
    ) -> Self {
        Self {
            source,
            target,
            label,
            category,
        }
    }

    /// Returns the vertex that owns this edge.
    #[must_use]
    pub const fn source(&self) -> VertexRef {
        self.source
    }

    /// Returns the vertex this edge points at.
    #[must_use]
    pub const fn target(&self) -> VertexRef {
        self.target
    }

    /// Returns the label source of this edge.
    #[must_use]
    pub const fn label(&self) -> EdgeLabel {
        self.label
    }

    /// Returns the category of this edge.
    #[must_use]
    pub const fn category(&self) -> EdgeCategory {
        self.category
    }

    /// Returns the control predecessor a phi operand edge is tagged with.
    #[must_use]
    pub const fn src_branch(&self) -> Option<VertexRef> {
        match self.label {
            EdgeLabel::Predecessor(vertex) => Some(vertex),
            _ => None,
        }
    }

    /// Returns `true` if this is a phi operand edge.
    #[must_use]
    pub const fn is_phi_edge(&self) -> bool {
        matches!(self.label, EdgeLabel::Predecessor(_))
    }
}
