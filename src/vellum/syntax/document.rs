//! Parsed document wrapper handed between compilation phases.
//!
//! Phases exchange data explicitly: the parser produces a `SyntaxTree`, the
//! lowering stage consumes it and returns the IR document. A `CodeDocument`
//! ties the source text to whatever the parser has produced so far; a
//! document without a syntax tree is a valid value (it simply cannot be
//! lowered yet), which is how the missing-dependency precondition of the
//! lowering phase is expressed.

use crate::vellum::syntax::events::SyntaxEvent;
use crate::vellum::syntax::location::LineIndex;

/// The parsed document, represented as its depth-first event stream.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    events: Vec<SyntaxEvent>,
}

impl SyntaxTree {
    pub fn new(events: Vec<SyntaxEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[SyntaxEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SyntaxEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One template source file moving through the compiler.
#[derive(Debug, Clone)]
pub struct CodeDocument {
    source: String,
    syntax_tree: Option<SyntaxTree>,
}

impl CodeDocument {
    /// Create a document that has not been parsed yet.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            syntax_tree: None,
        }
    }

    /// Attach the parser's output to this document.
    pub fn with_syntax_tree(mut self, tree: SyntaxTree) -> Self {
        self.syntax_tree = Some(tree);
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn syntax_tree(&self) -> Option<&SyntaxTree> {
        self.syntax_tree.as_ref()
    }

    pub fn into_syntax_tree(self) -> Option<SyntaxTree> {
        self.syntax_tree
    }

    /// Build a line index over this document's source.
    pub fn line_index(&self) -> LineIndex {
        LineIndex::new(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vellum::syntax::location::SourceLocation;

    #[test]
    fn test_unparsed_document_has_no_tree() {
        let doc = CodeDocument::from_source("<p>Hello</p>");
        assert!(doc.syntax_tree().is_none());
        assert_eq!(doc.source(), "<p>Hello</p>");
    }

    #[test]
    fn test_document_with_syntax_tree() {
        let tree = SyntaxTree::new(vec![SyntaxEvent::Markup {
            content: "<p>".to_string(),
            location: SourceLocation::new(0, 0, 0),
        }]);

        let doc = CodeDocument::from_source("<p>").with_syntax_tree(tree);
        assert_eq!(doc.syntax_tree().unwrap().events().len(), 1);
    }

    #[test]
    fn test_into_syntax_tree_consumes() {
        let doc = CodeDocument::from_source("").with_syntax_tree(SyntaxTree::new(vec![]));
        let tree = doc.into_syntax_tree().unwrap();
        assert!(tree.is_empty());
    }
}
