//! Test support: event stream fixtures and IR assertions.
//!
//! Lowering tests need well-nested event sequences with plausible locations.
//! Writing `SyntaxEvent` literals by hand buries the interesting structure
//! under location bookkeeping, so [`EventSeq`] builds sequences with a
//! running cursor: every content-carrying event is stamped at the current
//! offset and advances it by the content's length, which keeps locations
//! distinct and ordered the way a real parser would emit them.

use crate::vellum::ir::{DocumentIr, IrKind, NodeId};
use crate::vellum::syntax::events::SyntaxEvent;
use crate::vellum::syntax::location::SourceLocation;
use crate::vellum::syntax::SyntaxTree;

/// Chainable builder for well-nested event sequences.
pub struct EventSeq {
    events: Vec<SyntaxEvent>,
    cursor: usize,
}

impl EventSeq {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            cursor: 0,
        }
    }

    fn here(&self) -> SourceLocation {
        SourceLocation::new(self.cursor, 0, self.cursor)
    }

    fn advance(&mut self, text: &str) -> SourceLocation {
        let location = self.here();
        self.cursor += text.len();
        location
    }

    pub fn markup(mut self, content: &str) -> Self {
        let location = self.advance(content);
        self.events.push(SyntaxEvent::Markup {
            content: content.to_string(),
            location,
        });
        self
    }

    pub fn statement(mut self, content: &str) -> Self {
        let location = self.advance(content);
        self.events.push(SyntaxEvent::Statement {
            content: content.to_string(),
            location,
        });
        self
    }

    pub fn import(mut self, content: &str) -> Self {
        let location = self.advance(content);
        self.events.push(SyntaxEvent::Import {
            content: content.to_string(),
            location,
        });
        self
    }

    pub fn type_member(mut self, content: &str) -> Self {
        let location = self.advance(content);
        self.events.push(SyntaxEvent::TypeMember {
            content: content.to_string(),
            location,
        });
        self
    }

    pub fn start_attribute(mut self, name: &str, prefix: &str, suffix: &str) -> Self {
        let location = self.advance(prefix);
        self.events.push(SyntaxEvent::StartAttribute {
            name: name.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            location,
        });
        self
    }

    pub fn end_attribute(mut self) -> Self {
        self.events.push(SyntaxEvent::EndAttribute);
        self
    }

    pub fn start_dynamic_attribute(mut self, prefix: &str) -> Self {
        let location = self.advance(prefix);
        self.events.push(SyntaxEvent::StartDynamicAttribute {
            prefix: prefix.to_string(),
            location,
        });
        self
    }

    pub fn end_dynamic_attribute(mut self) -> Self {
        self.events.push(SyntaxEvent::EndDynamicAttribute);
        self
    }

    pub fn literal_value(mut self, prefix: &str, content: &str) -> Self {
        let location = self.advance(content);
        self.events.push(SyntaxEvent::LiteralAttributeValue {
            prefix: prefix.to_string(),
            content: content.to_string(),
            location,
        });
        self
    }

    pub fn start_template(mut self) -> Self {
        let location = self.here();
        self.events.push(SyntaxEvent::StartTemplate { location });
        self
    }

    pub fn end_template(mut self) -> Self {
        self.events.push(SyntaxEvent::EndTemplate);
        self
    }

    pub fn start_expression(mut self) -> Self {
        let location = self.here();
        self.events.push(SyntaxEvent::StartExpression { location });
        self
    }

    pub fn end_expression(mut self) -> Self {
        self.events.push(SyntaxEvent::EndExpression);
        self
    }

    pub fn token(mut self, content: &str) -> Self {
        let location = self.advance(content);
        self.events.push(SyntaxEvent::ExpressionToken {
            content: content.to_string(),
            location,
        });
        self
    }

    /// Skip `text` in the source without emitting anything, the way a
    /// silently-consumed comment does.
    pub fn skip(mut self, text: &str) -> Self {
        self.cursor += text.len();
        self
    }

    pub fn finish(self) -> SyntaxTree {
        SyntaxTree::new(self.events)
    }
}

impl Default for EventSeq {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// IR assertions
// ============================================================================

/// The single Namespace child of the Document root, panicking on any other shape.
pub fn expect_namespace(ir: &DocumentIr) -> NodeId {
    let children = ir.children(ir.root());
    assert_eq!(children.len(), 1, "Document must have exactly one child");
    expect_kind(ir, children[0], "Namespace")
}

/// The single Class child of the Namespace.
pub fn expect_class(ir: &DocumentIr) -> NodeId {
    let ns = expect_namespace(ir);
    let class = ir
        .children(ns)
        .iter()
        .copied()
        .find(|id| matches!(ir.kind(*id), IrKind::Class));
    match class {
        Some(id) => id,
        None => panic!("Namespace has no Class child"),
    }
}

/// The single Method child of the Class.
pub fn expect_method(ir: &DocumentIr) -> NodeId {
    let class = expect_class(ir);
    let method = ir
        .children(class)
        .iter()
        .copied()
        .find(|id| matches!(ir.kind(*id), IrKind::Method));
    match method {
        Some(id) => id,
        None => panic!("Class has no Method child"),
    }
}

/// Assert a node has the given kind name and return it for chaining.
pub fn expect_kind(ir: &DocumentIr, id: NodeId, kind: &str) -> NodeId {
    assert_eq!(
        ir.kind(id).name(),
        kind,
        "Expected {} at {}, got {}",
        kind,
        id,
        ir.kind(id).name()
    );
    id
}

/// Kind names of a node's children, in order.
pub fn child_kinds(ir: &DocumentIr, id: NodeId) -> Vec<&'static str> {
    ir.children(id)
        .iter()
        .map(|child| ir.kind(*child).name())
        .collect()
}
