// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # vertex-ir
//!
//! A mutable, typed graph intermediate representation for program analysis
//! pipelines. Programs are modelled as **vertices** (values, control points,
//! or both) connected by **edges** (data, control and association relations),
//! organized into nested **graphs**, one per lexical scope.
//!
//! ## Features
//!
//! - **Consistent edges** - Out-edges and in-edges can never disagree; every
//!   rewiring goes through one transactional routine
//! - **Closed dispatch** - Exhaustive visitors over vertex kinds and types
//! - **Structural verifier** - Per-kind well-formedness checks over whole scope trees
//! - **Type hierarchy** - Immutable, hashable value types with a canonical printer
//! - **Exporters** - Graphviz DOT diagrams and headerless CSV fact relations
//!
//! ## Quick Start
//!
//! ```rust
//! use vertex_ir::prelude::*;
//!
//! let mut ir = Ir::new();
//! let root = ir.root();
//!
//! // Start -> Pass -> Return(5)
//! let start = ir.create(Vertex::start());
//! let pass = ir.create(Vertex::pass());
//! let five = ir.create(Vertex::literal(5).with_verified_type(Type::integer(32)));
//! let ret = ir.create(Vertex::ret());
//!
//! ir.set_next(start, Some(pass))?;
//! ir.set_next(pass, Some(ret))?;
//! ir.set_operand(ret, Slot::Value, Some(five))?;
//!
//! ir.set_start_vertex(root, start)?;
//! ir.add_vertex(root, pass)?;
//! ir.add_vertex(root, five)?;
//! ir.add_vertex(root, ret)?;
//!
//! assert!(verify_graph(&ir, root));
//! # Ok::<(), vertex_ir::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`ir`] - The [`Ir`] arena, vertices, edges, graphs and the wiring API
//! - [`types`] - The value type hierarchy
//! - [`verifier`] - Structural verification
//! - [`export`] - DOT and fact-relation exporters
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Precondition violations (wiring a slot the vertex does not have, indexing
//! past the end of an argument list, asking for the start vertex of a graph
//! that has none) are reported through [`Error`]. Structurally incomplete IR is
//! not an error; it makes [`verifier::verify_graph`] return `false`.
//!
//! ```rust
//! use vertex_ir::{Error, Ir, Vertex};
//!
//! let mut ir = Ir::new();
//! let call = ir.create(Vertex::call());
//! match ir.remove_arg(call, 0) {
//!     Err(Error::IndexOutOfBounds { index, len }) => println!("{index} >= {len}"),
//!     Err(e) => println!("Other error: {e}"),
//!     Ok(arg) => println!("removed {arg}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (edge installation and release at `trace`,
//! graph changes and verifier rejections at `debug`) and never installs a
//! subscriber.
#[macro_use]
pub(crate) mod macros;

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use vertex_ir::prelude::*;
///
/// let mut ir = Ir::new();
/// let start = ir.create(Vertex::start());
/// ir.set_start_vertex(ir.root(), start)?;
/// # Ok::<(), vertex_ir::Error>(())
/// ```
pub mod prelude;

/// The IR object model: arena, vertices, edges and graphs.
pub mod ir;

/// Value types carried by vertices.
pub mod types;

/// Structural verification of graphs and subgraphs.
pub mod verifier;

/// Exporters to Graphviz DOT and CSV fact relations.
pub mod export;

/// `vertex-ir` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `vertex-ir` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

/// The IR arena
pub use ir::Ir;

/// Vertex records and builders
pub use ir::Vertex;
