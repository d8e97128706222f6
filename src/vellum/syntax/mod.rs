//! Input contract between the parser and the lowering stage.
//!
//! The parser is an external collaborator; lowering only sees its output, a
//! depth-first event stream over the parsed document. This module defines
//! that boundary:
//!
//! - [`location`]: source positions and the byte-offset → line/column index
//! - [`events`]: the semantic-role-tagged event stream
//! - [`document`]: the parsed document wrapper handed between phases

pub mod document;
pub mod events;
pub mod location;

pub use document::{CodeDocument, SyntaxTree};
pub use events::SyntaxEvent;
pub use location::{LineIndex, SourceLocation};
