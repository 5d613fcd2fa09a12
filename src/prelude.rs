//! # vertex-ir Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and traits. Import it to build, verify and export graphs without spelling
//! out individual module paths.
//!
//! ```rust
//! use vertex_ir::prelude::*;
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all vertex-ir operations
pub use crate::Error;

/// The result type used throughout vertex-ir
pub use crate::Result;

// ================================================================================================
// Object Model
// ================================================================================================

/// Arena, vertex records and handles
pub use crate::ir::{EdgeRef, GraphRef, Ir, Vertex, VertexRef};

/// Edge records and their classification
pub use crate::ir::{Edge, EdgeCategory, EdgeLabel};

/// Vertex classification and externally supplied type tokens
pub use crate::ir::{DeclaredType, VertexCategory, VertexKind};

/// Operand slots
pub use crate::ir::{ListSlot, PhiOperand, Slot};

/// Operators and literal values
pub use crate::ir::{BinaryOperator, UnaryOperator, Value};

/// Graph scopes
pub use crate::ir::Graph;

// ================================================================================================
// Dispatch
// ================================================================================================

/// Visitor over vertex kinds
pub use crate::ir::VertexVisitor;

/// Visitor over types
pub use crate::types::TypeVisitor;

// ================================================================================================
// Types, Verification and Export
// ================================================================================================

/// Value types
pub use crate::types::{FloatWidth, Type};

/// Structural verification
pub use crate::verifier::{verify_graph, VertexVerifier};

/// Exporter configuration
pub use crate::export::ExportConfig;
