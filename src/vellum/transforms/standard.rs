//! Standard transform definitions.
//!
//! Pre-built transforms for common use cases, defined as static references
//! using `once_cell::sync::Lazy`.

use crate::vellum::ir::DocumentIr;
use crate::vellum::syntax::CodeDocument;
use crate::vellum::transforms::stages::Lowering;
use crate::vellum::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for the lowering transform
pub type LoweringTransform = Transform<CodeDocument, DocumentIr>;

/// Lowering transform: CodeDocument → DocumentIr
///
/// Requires a parsed document; fails with a missing-dependency error when
/// the parser has not run.
///
/// # Example
///
/// ```rust,ignore
/// use vellum::vellum::syntax::{CodeDocument, SyntaxTree};
/// use vellum::vellum::transforms::standard::LOWERING;
///
/// let doc = CodeDocument::from_source("Hello").with_syntax_tree(tree);
/// let ir = LOWERING.run(doc)?;
/// ```
pub static LOWERING: Lazy<LoweringTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Lowering::new()));
