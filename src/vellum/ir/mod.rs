//! Intermediate Representation (IR) for lowered vellum documents.
//!
//! The IR is the contract between lowering and code generation: a tree whose
//! shape (Document → Namespace → Class → Method → statements) mirrors the
//! generated backing type rather than the template's surface syntax.
//!
//! # Design
//!
//! - **Arena-backed**: nodes live in a single `Vec` owned by [`DocumentIr`];
//!   a [`NodeId`] is an integer handle. The parent back-reference is a
//!   non-owning `Option<NodeId>`, so upward queries (finding the enclosing
//!   class) need no shared ownership or interior mutability.
//! - **Closed variant set**: [`IrKind`] is a fixed enum and consumers match
//!   exhaustively. Adding a variant is a breaking change to every consumer,
//!   on purpose.
//! - **Identity, not equality**: nodes are compared by handle; the tree is
//!   never structurally compared.
//!
//! # Modules
//!
//! - [`nodes`]: the node model and arena
//! - [`snapshot`]: normalized serializable tree snapshots
//! - [`treeviz`]: one-line-per-node debug rendering

pub mod nodes;
pub mod snapshot;
pub mod treeviz;

pub use nodes::{DocumentIr, IrKind, IrNode, NodeId};
pub use snapshot::{snapshot_from_ir, IrSnapshot};
