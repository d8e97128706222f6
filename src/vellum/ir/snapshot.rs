//! IR snapshot - a normalized, serializable view of the lowered tree.
//!
//! Serializers and debug tooling consume snapshots instead of walking the
//! arena themselves, so traversal (including the out-of-band value
//! containers of attributes and expressions) is implemented exactly once.

use crate::vellum::ir::nodes::{DocumentIr, IrKind, NodeId};
use crate::vellum::syntax::location::SourceLocation;
use serde::Serialize;

/// A snapshot of one IR node and its descendants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrSnapshot {
    /// Variant name, e.g. "HtmlContent"
    pub kind: String,
    /// Primary text of the node: content, attribute name, or empty
    pub label: String,
    /// Effective (possibly derived) source location
    pub location: Option<SourceLocation>,
    pub children: Vec<IrSnapshot>,
}

impl IrSnapshot {
    /// Serialize this snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build a snapshot of the whole lowered document.
pub fn snapshot_from_ir(ir: &DocumentIr) -> IrSnapshot {
    snapshot_node(ir, ir.root())
}

fn snapshot_node(ir: &DocumentIr, id: NodeId) -> IrSnapshot {
    let kind = ir.kind(id);

    let mut children: Vec<IrSnapshot> = ir
        .children(id)
        .iter()
        .map(|child| snapshot_node(ir, *child))
        .collect();

    // Value sub-trees are referenced out-of-band; surface them as children so
    // consumers see the complete tree.
    match kind {
        IrKind::HtmlAttribute { value, .. }
        | IrKind::CSharpAttributeValue { value, .. }
        | IrKind::CSharpExpression { expression: value } => {
            children.push(snapshot_node(ir, *value));
        }
        _ => {}
    }

    IrSnapshot {
        kind: kind.name().to_string(),
        label: node_label(kind),
        location: ir.source_location(id),
        children,
    }
}

fn node_label(kind: &IrKind) -> String {
    match kind {
        IrKind::HtmlContent { content }
        | IrKind::HtmlAttributeValue { content, .. }
        | IrKind::CSharpToken { content }
        | IrKind::CSharpStatement { content }
        | IrKind::UsingStatement { content } => content.clone(),
        IrKind::HtmlAttribute { name, .. } => name.clone(),
        IrKind::CSharpAttributeValue { prefix, .. } => prefix.clone(),
        _ => String::new(),
    }
}
