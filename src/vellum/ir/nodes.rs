//! IR node model and arena.
//!
//! Nodes are created detached (no parent, no children, no location) and
//! attached to the tree in a separate, explicit step. Attachment is the only
//! operation that sets the parent back-reference, and each node is attached
//! at most once; the whole tree is append-only and handed to code generation
//! unmodified.

use crate::vellum::syntax::location::SourceLocation;
use serde::Serialize;
use std::fmt;

/// Handle to a node inside a [`DocumentIr`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of IR node variants.
///
/// Variants that own a value sub-tree (`HtmlAttribute`, `CSharpAttributeValue`,
/// `CSharpExpression`) reference a synthetic `Container` node out-of-band
/// rather than through their `children` sequence, so the container's children
/// can accumulate under their own scope during lowering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IrKind {
    /// Tree root; exactly one per lowering run.
    Document,
    /// Wraps the using statements and the generated class.
    Namespace,
    /// The generated backing type.
    Class,
    /// The generated render method body.
    Method,
    /// Literal markup text. Leaf; adjacent runs are merged during lowering.
    HtmlContent { content: String },
    /// A statically-delimited attribute with its value container.
    HtmlAttribute {
        name: String,
        prefix: String,
        suffix: String,
        value: NodeId,
    },
    /// A literal text fragment of an attribute value. Leaf.
    HtmlAttributeValue { prefix: String, content: String },
    /// A code-computed attribute value fragment with its value container.
    CSharpAttributeValue { prefix: String, value: NodeId },
    /// An embedded expression; tokens accumulate in the referenced container.
    CSharpExpression { expression: NodeId },
    /// An atomic code fragment. Leaf.
    CSharpToken { content: String },
    /// A code statement block. Leaf; content is raw text.
    CSharpStatement { content: String },
    /// An import/using directive. Leaf.
    UsingStatement { content: String },
    /// A nested, reusable fragment of markup and code.
    Template,
    /// Synthetic grouping node holding a value sub-tree under construction.
    Container,
}

impl IrKind {
    /// Stable name of the variant, used by snapshots and debug rendering.
    pub fn name(&self) -> &'static str {
        match self {
            IrKind::Document => "Document",
            IrKind::Namespace => "Namespace",
            IrKind::Class => "Class",
            IrKind::Method => "Method",
            IrKind::HtmlContent { .. } => "HtmlContent",
            IrKind::HtmlAttribute { .. } => "HtmlAttribute",
            IrKind::HtmlAttributeValue { .. } => "HtmlAttributeValue",
            IrKind::CSharpAttributeValue { .. } => "CSharpAttributeValue",
            IrKind::CSharpExpression { .. } => "CSharpExpression",
            IrKind::CSharpToken { .. } => "CSharpToken",
            IrKind::CSharpStatement { .. } => "CSharpStatement",
            IrKind::UsingStatement { .. } => "UsingStatement",
            IrKind::Template => "Template",
            IrKind::Container => "Container",
        }
    }

    /// Whether nodes of this kind may carry children.
    ///
    /// Leaf kinds (content, tokens, statements, usings) forbid children; the
    /// arena enforces this at attachment time rather than in the type system.
    pub fn allows_children(&self) -> bool {
        !matches!(
            self,
            IrKind::HtmlContent { .. }
                | IrKind::HtmlAttributeValue { .. }
                | IrKind::CSharpToken { .. }
                | IrKind::CSharpStatement { .. }
                | IrKind::UsingStatement { .. }
        )
    }
}

/// A single node in the IR tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrNode {
    pub kind: IrKind,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Explicit start location; `None` for synthetic nodes, whose location is
    /// derived lazily via [`DocumentIr::source_location`].
    pub location: Option<SourceLocation>,
}

/// The lowered document: an arena of nodes plus the root handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentIr {
    nodes: Vec<IrNode>,
    root: NodeId,
}

impl DocumentIr {
    /// Create an arena holding only the Document root.
    pub fn new() -> Self {
        let root_node = IrNode {
            kind: IrKind::Document,
            children: Vec::new(),
            parent: None,
            location: None,
        };
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node: no parent, no children, no location.
    pub fn alloc(&mut self, kind: IrKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(IrNode {
            kind,
            children: Vec::new(),
            parent: None,
            location: None,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> &IrNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut IrNode {
        &mut self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> &IrKind {
        &self.nodes[id.0].kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Assign an explicit source location to a node.
    pub fn set_location(&mut self, id: NodeId, location: SourceLocation) {
        self.nodes[id.0].location = Some(location);
    }

    /// Append `child` to `parent`'s children and set the back-reference.
    ///
    /// Panics if `parent` is a leaf kind or if `child` is already attached;
    /// both indicate a defect in the calling traversal, not a recoverable
    /// condition.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.attach(parent, child);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `child` at `index` within `parent`'s children.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.attach(parent, child);
        self.nodes[parent.0].children.insert(index, child);
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.nodes[parent.0].kind.allows_children(),
            "{} nodes cannot have children",
            self.nodes[parent.0].kind.name()
        );
        assert!(
            self.nodes[child.0].parent.is_none(),
            "node {} is already attached",
            child
        );
        self.nodes[child.0].parent = Some(parent);
    }

    /// The effective source location of a node.
    ///
    /// Explicit location if one was assigned, else the derived location of
    /// the first child, else none. Computed on demand: children may be added
    /// after a synthetic container is created, so this is never cached.
    pub fn source_location(&self, id: NodeId) -> Option<SourceLocation> {
        let node = self.node(id);
        if node.location.is_some() {
            return node.location;
        }
        let first = *node.children.first()?;
        self.source_location(first)
    }

    /// Walk parent references upward to the nearest Class node.
    pub fn enclosing_class(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.node(id).parent;
        while let Some(ancestor) = current {
            if matches!(self.kind(ancestor), IrKind::Class) {
                return Some(ancestor);
            }
            current = self.node(ancestor).parent;
        }
        None
    }
}

impl Default for DocumentIr {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_alloc_yields_detached_node() {
        let mut ir = DocumentIr::new();
        let id = ir.alloc(IrKind::Namespace);

        let node = ir.node(id);
        assert!(node.children.is_empty());
        assert!(node.parent.is_none());
        assert!(node.location.is_none());
    }

    #[test]
    fn test_add_child_sets_parent() {
        let mut ir = DocumentIr::new();
        let ns = ir.alloc(IrKind::Namespace);
        ir.add_child(ir.root(), ns);

        assert_eq!(ir.node(ns).parent, Some(ir.root()));
        assert_eq!(ir.children(ir.root()), &[ns]);
    }

    #[test]
    fn test_insert_child_positions_before_existing() {
        let mut ir = DocumentIr::new();
        let ns = ir.alloc(IrKind::Namespace);
        ir.add_child(ir.root(), ns);

        let class = ir.alloc(IrKind::Class);
        ir.add_child(ns, class);
        let using = ir.alloc(IrKind::UsingStatement {
            content: "System".to_string(),
        });
        ir.insert_child(ns, 0, using);

        assert_eq!(ir.children(ns), &[using, class]);
        assert_eq!(ir.node(using).parent, Some(ns));
    }

    #[test]
    fn test_explicit_location_wins() {
        let mut ir = DocumentIr::new();
        let content = ir.alloc(IrKind::HtmlContent {
            content: "x".to_string(),
        });
        ir.set_location(content, SourceLocation::new(7, 1, 2));

        assert_eq!(
            ir.source_location(content),
            Some(SourceLocation::new(7, 1, 2))
        );
    }

    #[test]
    fn test_container_location_derived_from_first_child() {
        let mut ir = DocumentIr::new();
        let container = ir.alloc(IrKind::Container);
        assert_eq!(ir.source_location(container), None);

        let token = ir.alloc(IrKind::CSharpToken {
            content: "DateTime".to_string(),
        });
        ir.set_location(token, SourceLocation::new(3, 0, 3));
        ir.add_child(container, token);

        // Derived lazily, so children added after creation are visible
        assert_eq!(
            ir.source_location(container),
            Some(SourceLocation::new(3, 0, 3))
        );
    }

    #[test]
    fn test_location_derivation_recurses_through_containers() {
        let mut ir = DocumentIr::new();
        let outer = ir.alloc(IrKind::Container);
        let inner = ir.alloc(IrKind::Container);
        ir.add_child(outer, inner);

        let token = ir.alloc(IrKind::CSharpToken {
            content: "Now".to_string(),
        });
        ir.set_location(token, SourceLocation::new(11, 0, 11));
        ir.add_child(inner, token);

        assert_eq!(
            ir.source_location(outer),
            Some(SourceLocation::new(11, 0, 11))
        );
    }

    #[test]
    fn test_enclosing_class() {
        let mut ir = DocumentIr::new();
        let ns = ir.alloc(IrKind::Namespace);
        ir.add_child(ir.root(), ns);
        let class = ir.alloc(IrKind::Class);
        ir.add_child(ns, class);
        let method = ir.alloc(IrKind::Method);
        ir.add_child(class, method);
        let stmt = ir.alloc(IrKind::CSharpStatement {
            content: "var x = 1;".to_string(),
        });
        ir.add_child(method, stmt);

        assert_eq!(ir.enclosing_class(stmt), Some(class));
        assert_eq!(ir.enclosing_class(method), Some(class));
        assert_eq!(ir.enclosing_class(ns), None);
    }

    #[rstest]
    #[case(IrKind::HtmlContent { content: "x".to_string() })]
    #[case(IrKind::HtmlAttributeValue { prefix: String::new(), content: "x".to_string() })]
    #[case(IrKind::CSharpToken { content: "x".to_string() })]
    #[case(IrKind::CSharpStatement { content: "x".to_string() })]
    #[case(IrKind::UsingStatement { content: "System".to_string() })]
    #[should_panic(expected = "cannot have children")]
    fn test_leaf_kinds_forbid_children(#[case] leaf_kind: IrKind) {
        let mut ir = DocumentIr::new();
        let leaf = ir.alloc(leaf_kind);
        ir.add_child(ir.root(), leaf);

        let child = ir.alloc(IrKind::Container);
        ir.add_child(leaf, child);
    }

    #[test]
    #[should_panic(expected = "already attached")]
    fn test_double_attachment_is_fatal() {
        let mut ir = DocumentIr::new();
        let ns = ir.alloc(IrKind::Namespace);
        ir.add_child(ir.root(), ns);
        ir.add_child(ir.root(), ns);
    }
}
