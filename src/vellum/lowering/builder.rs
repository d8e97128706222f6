//! Scope builder stack.
//!
//! The builder owns the IR arena plus the stack of currently-open scopes;
//! the top of the stack is the node receiving new children. `push` makes a
//! node the active scope without attaching it — attachment happens through
//! `add` (or `open`, which does both), always against the scope that was
//! current at that moment.
//!
//! The stack is never empty mid-run: the Document root is pushed at
//! construction and popping past it means the caller's start/end events were
//! unbalanced. That is a programming error in the event producer, so the
//! builder panics instead of attempting recovery.

use crate::vellum::ir::{DocumentIr, IrKind, NodeId};
use crate::vellum::syntax::location::SourceLocation;

pub struct IrBuilder {
    ir: DocumentIr,
    scopes: Vec<NodeId>,
}

impl IrBuilder {
    /// Create a builder with the Document root as the open scope.
    pub fn new() -> Self {
        let ir = DocumentIr::new();
        let root = ir.root();
        Self {
            ir,
            scopes: vec![root],
        }
    }

    pub fn ir(&self) -> &DocumentIr {
        &self.ir
    }

    pub fn ir_mut(&mut self) -> &mut DocumentIr {
        &mut self.ir
    }

    /// The node currently receiving children.
    pub fn current(&self) -> NodeId {
        match self.scopes.last() {
            Some(id) => *id,
            None => panic!("scope stack is empty"),
        }
    }

    /// Number of open scopes, including the Document root.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Attach `child` to the current scope.
    pub fn add(&mut self, child: NodeId) {
        let parent = self.current();
        self.ir.add_child(parent, child);
    }

    /// Allocate a node, stamp its location, and attach it to the current scope.
    pub fn add_node(&mut self, kind: IrKind, location: SourceLocation) -> NodeId {
        let id = self.ir.alloc(kind);
        self.ir.set_location(id, location);
        self.add(id);
        id
    }

    /// Make `scope` the active scope without attaching it anywhere.
    pub fn push(&mut self, scope: NodeId) {
        self.scopes.push(scope);
    }

    /// Attach `scope` to the current scope, then descend into it.
    pub fn open(&mut self, scope: NodeId) {
        self.add(scope);
        self.push(scope);
    }

    /// Close the active scope, returning its node.
    pub fn pop(&mut self) -> NodeId {
        match self.scopes.pop() {
            Some(id) => id,
            None => panic!("scope stack underflow: pop without matching push"),
        }
    }

    /// Consume the builder and hand over the finished tree.
    pub fn build(self) -> DocumentIr {
        self.ir
    }
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}
