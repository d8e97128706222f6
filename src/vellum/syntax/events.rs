//! Defines the flat event stream produced by the parser.
//!
//! The parser walks the parsed document depth-first and emits one event per
//! fragment: a start/end pair for each nested region and a single event for
//! each leaf. The producer guarantees that start/end pairs are well nested
//! and that every region start and leaf carries its start location; lowering
//! relies on both guarantees without re-checking them.

use crate::vellum::syntax::location::SourceLocation;
use serde::Serialize;

/// A single event in the parsed-document stream.
///
/// Each variant corresponds to one semantic role the parser can tag a
/// fragment with. The set is closed: lowering matches exhaustively, so a new
/// role cannot be added without updating every consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SyntaxEvent {
    /// A statically-delimited attribute region, e.g. `class="…"`.
    StartAttribute {
        name: String,
        prefix: String,
        suffix: String,
        location: SourceLocation,
    },
    EndAttribute,
    /// An attribute value region whose content is computed by code.
    StartDynamicAttribute {
        prefix: String,
        location: SourceLocation,
    },
    EndDynamicAttribute,
    /// A literal text fragment inside an attribute value.
    LiteralAttributeValue {
        prefix: String,
        content: String,
        location: SourceLocation,
    },
    /// A nested, reusable fragment of markup and code (a template-as-value).
    StartTemplate { location: SourceLocation },
    EndTemplate,
    /// An embedded expression region. Expressions are split into regions and
    /// token leaves because a comment may interrupt an expression mid-way.
    StartExpression { location: SourceLocation },
    EndExpression,
    /// An atomic code fragment inside an expression region.
    ExpressionToken {
        content: String,
        location: SourceLocation,
    },
    /// A block of member declarations written inline at class scope.
    TypeMember {
        content: String,
        location: SourceLocation,
    },
    /// A code statement block.
    Statement {
        content: String,
        location: SourceLocation,
    },
    /// Literal markup text.
    Markup {
        content: String,
        location: SourceLocation,
    },
    /// An import/using directive.
    Import {
        content: String,
        location: SourceLocation,
    },
}

impl SyntaxEvent {
    /// Whether this event opens a nested region.
    pub fn is_region_start(&self) -> bool {
        matches!(
            self,
            SyntaxEvent::StartAttribute { .. }
                | SyntaxEvent::StartDynamicAttribute { .. }
                | SyntaxEvent::StartTemplate { .. }
                | SyntaxEvent::StartExpression { .. }
        )
    }

    /// Whether this event closes a nested region.
    pub fn is_region_end(&self) -> bool {
        matches!(
            self,
            SyntaxEvent::EndAttribute
                | SyntaxEvent::EndDynamicAttribute
                | SyntaxEvent::EndTemplate
                | SyntaxEvent::EndExpression
        )
    }
}
