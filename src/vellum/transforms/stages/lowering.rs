//! Lowering stage: parsed `CodeDocument` → `DocumentIr`.
//!
//! Pure orchestration: checks that the parser has run, then hands the event
//! stream to a fresh visitor. A document without a syntax tree is a phase
//! ordering mistake by the caller, reported as a missing dependency; no
//! partial IR is ever produced.

use crate::vellum::ir::DocumentIr;
use crate::vellum::lowering::lower;
use crate::vellum::syntax::CodeDocument;
use crate::vellum::transforms::{Runnable, TransformError};

pub struct Lowering;

impl Lowering {
    pub fn new() -> Self {
        Lowering
    }
}

impl Default for Lowering {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<CodeDocument, DocumentIr> for Lowering {
    fn run(&self, input: CodeDocument) -> Result<DocumentIr, TransformError> {
        let tree = input
            .into_syntax_tree()
            .ok_or_else(|| TransformError::MissingDependency {
                stage: "Lowering".to_string(),
                dependency: "syntax tree".to_string(),
            })?;

        Ok(lower(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vellum::ir::IrKind;
    use crate::vellum::syntax::{SyntaxEvent, SyntaxTree};

    #[test]
    fn test_unparsed_document_is_missing_dependency() {
        let doc = CodeDocument::from_source("<p>Hello</p>");
        let result = Lowering::new().run(doc);

        assert_eq!(
            result.unwrap_err(),
            TransformError::MissingDependency {
                stage: "Lowering".to_string(),
                dependency: "syntax tree".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_tree_lowers_to_structural_skeleton() {
        let doc = CodeDocument::from_source("").with_syntax_tree(SyntaxTree::new(vec![]));
        let ir = Lowering::new().run(doc).unwrap();

        // Document → Namespace → Class → Method, nothing else
        assert_eq!(ir.len(), 4);
        assert!(matches!(ir.kind(ir.root()), IrKind::Document));
    }

    #[test]
    fn test_lowering_consumes_events() {
        let tree = SyntaxTree::new(vec![SyntaxEvent::Markup {
            content: "<p>".to_string(),
            location: Default::default(),
        }]);
        let doc = CodeDocument::from_source("<p>").with_syntax_tree(tree);
        let ir = Lowering::new().run(doc).unwrap();

        assert_eq!(ir.len(), 5);
    }
}
