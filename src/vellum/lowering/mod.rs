//! Lowering: parsed-document events → IR tree.
//!
//! The traversal is a plain, synchronous walk over the event stream. A fresh
//! builder and visitor are constructed per run; nothing is shared between
//! runs. Structural violations (unbalanced scopes, attaching children to a
//! leaf) are defects in the event producer and panic rather than surfacing
//! as errors — the producer guarantees well-nested start/end pairs, and this
//! stage does not re-validate grammar.

pub mod builder;
pub mod visitor;

pub use builder::IrBuilder;
pub use visitor::LoweringVisitor;

use crate::vellum::ir::DocumentIr;
use crate::vellum::syntax::SyntaxTree;

/// Lower a parsed document to its IR tree.
pub fn lower(tree: SyntaxTree) -> DocumentIr {
    let mut visitor = LoweringVisitor::new();
    visitor.visit_all(tree.into_events());
    visitor.finish()
}
