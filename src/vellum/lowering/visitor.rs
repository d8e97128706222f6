//! The lowering visitor.
//!
//! Consumes the depth-first event stream and drives the scope builder stack.
//! Construction pre-pushes the Namespace, Class and Method scopes so that
//! top-level content lands inside the generated render method by default;
//! these three scopes are never popped — they remain open when the stream
//! ends and the caller extracts the finished tree.

use crate::vellum::ir::{DocumentIr, IrKind, NodeId};
use crate::vellum::lowering::builder::IrBuilder;
use crate::vellum::syntax::events::SyntaxEvent;
use crate::vellum::syntax::location::SourceLocation;

pub struct LoweringVisitor {
    builder: IrBuilder,
    namespace: NodeId,
    class: NodeId,
    method: NodeId,
}

impl LoweringVisitor {
    pub fn new() -> Self {
        let mut builder = IrBuilder::new();

        let namespace = builder.ir_mut().alloc(IrKind::Namespace);
        builder.open(namespace);

        let class = builder.ir_mut().alloc(IrKind::Class);
        builder.open(class);

        let method = builder.ir_mut().alloc(IrKind::Method);
        builder.open(method);

        Self {
            builder,
            namespace,
            class,
            method,
        }
    }

    pub fn namespace(&self) -> NodeId {
        self.namespace
    }

    pub fn class(&self) -> NodeId {
        self.class
    }

    pub fn method(&self) -> NodeId {
        self.method
    }

    /// Open scopes, including the Document root and the three pre-pushed
    /// structural scopes.
    pub fn scope_depth(&self) -> usize {
        self.builder.depth()
    }

    pub fn visit_all(&mut self, events: impl IntoIterator<Item = SyntaxEvent>) {
        for event in events {
            self.visit(event);
        }
    }

    pub fn visit(&mut self, event: SyntaxEvent) {
        match event {
            SyntaxEvent::StartAttribute {
                name,
                prefix,
                suffix,
                location,
            } => {
                let value = self.builder.ir_mut().alloc(IrKind::Container);
                self.builder.add_node(
                    IrKind::HtmlAttribute {
                        name,
                        prefix,
                        suffix,
                        value,
                    },
                    location,
                );
                self.builder.push(value);
            }
            SyntaxEvent::EndAttribute => {
                self.builder.pop();
            }
            SyntaxEvent::StartDynamicAttribute { prefix, location } => {
                let value = self.builder.ir_mut().alloc(IrKind::Container);
                self.builder
                    .add_node(IrKind::CSharpAttributeValue { prefix, value }, location);
                self.builder.push(value);
            }
            SyntaxEvent::EndDynamicAttribute => {
                self.builder.pop();
            }
            SyntaxEvent::LiteralAttributeValue {
                prefix,
                content,
                location,
            } => {
                self.builder
                    .add_node(IrKind::HtmlAttributeValue { prefix, content }, location);
            }
            SyntaxEvent::StartTemplate { location } => {
                let template = self.builder.ir_mut().alloc(IrKind::Template);
                self.builder.ir_mut().set_location(template, location);
                self.builder.open(template);
            }
            SyntaxEvent::EndTemplate => {
                self.builder.pop();
            }
            // Expressions get their own token container because a comment may
            // interrupt an expression; each surviving piece keeps its own
            // source location for mapping.
            SyntaxEvent::StartExpression { location } => {
                let expression = self.builder.ir_mut().alloc(IrKind::Container);
                self.builder
                    .add_node(IrKind::CSharpExpression { expression }, location);
                self.builder.push(expression);
            }
            SyntaxEvent::EndExpression => {
                self.builder.pop();
            }
            SyntaxEvent::ExpressionToken { content, location } => {
                self.builder.add_node(IrKind::CSharpToken { content }, location);
            }
            // Type members attach to the class, not the lexical scope.
            SyntaxEvent::TypeMember { content, location } => {
                let ir = self.builder.ir_mut();
                let member = ir.alloc(IrKind::CSharpStatement { content });
                ir.set_location(member, location);
                ir.add_child(self.class, member);
            }
            SyntaxEvent::Statement { content, location } => {
                self.builder
                    .add_node(IrKind::CSharpStatement { content }, location);
            }
            SyntaxEvent::Markup { content, location } => {
                self.visit_markup(content, location);
            }
            SyntaxEvent::Import { content, location } => {
                self.visit_import(content, location);
            }
        }
    }

    /// Markup text is kept as maximal runs: if the previous sibling in the
    /// current scope is already markup, the new fragment merges into it.
    fn visit_markup(&mut self, content: String, location: SourceLocation) {
        let current = self.builder.current();
        let last = self.builder.ir().children(current).last().copied();

        let merge_target = last.filter(|id| {
            matches!(self.builder.ir().kind(*id), IrKind::HtmlContent { .. })
        });

        match merge_target {
            Some(id) => {
                if let IrKind::HtmlContent { content: existing } =
                    &mut self.builder.ir_mut().node_mut(id).kind
                {
                    existing.push_str(&content);
                }
            }
            None => {
                self.builder.add_node(IrKind::HtmlContent { content }, location);
            }
        }
    }

    /// Using directives float to namespace level and sit before the class
    /// declaration, whatever their lexical position in the template.
    fn visit_import(&mut self, content: String, location: SourceLocation) {
        let ir = self.builder.ir_mut();
        let using = ir.alloc(IrKind::UsingStatement { content });
        ir.set_location(using, location);

        let siblings = ir.children(self.namespace);
        let index = siblings
            .iter()
            .position(|id| matches!(ir.kind(*id), IrKind::Class))
            .unwrap_or(siblings.len());

        ir.insert_child(self.namespace, index, using);
    }

    /// Consume the visitor and extract the finished tree.
    pub fn finish(self) -> DocumentIr {
        self.builder.build()
    }
}

impl Default for LoweringVisitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vellum::syntax::location::SourceLocation;

    fn loc(offset: usize) -> SourceLocation {
        SourceLocation::new(offset, 0, offset)
    }

    #[test]
    fn test_initial_shape_is_namespace_class_method() {
        let visitor = LoweringVisitor::new();
        let ir = visitor.builder.ir();

        let root = ir.root();
        assert!(matches!(ir.kind(root), IrKind::Document));

        let ns_children = ir.children(root);
        assert_eq!(ns_children.len(), 1);
        assert!(matches!(ir.kind(ns_children[0]), IrKind::Namespace));

        let class_children = ir.children(ns_children[0]);
        assert_eq!(class_children.len(), 1);
        assert!(matches!(ir.kind(class_children[0]), IrKind::Class));

        let method_children = ir.children(class_children[0]);
        assert_eq!(method_children.len(), 1);
        assert!(matches!(ir.kind(method_children[0]), IrKind::Method));
    }

    #[test]
    fn test_statement_lands_in_method() {
        let mut visitor = LoweringVisitor::new();
        visitor.visit(SyntaxEvent::Statement {
            content: "var x = 1;".to_string(),
            location: loc(0),
        });

        let method = visitor.method();
        let ir = visitor.builder.ir();
        let children = ir.children(method);
        assert_eq!(children.len(), 1);
        assert!(matches!(
            ir.kind(children[0]),
            IrKind::CSharpStatement { content } if content == "var x = 1;"
        ));
    }

    #[test]
    fn test_expression_tokens_accumulate_in_container() {
        let mut visitor = LoweringVisitor::new();
        visitor.visit(SyntaxEvent::StartExpression { location: loc(1) });
        visitor.visit(SyntaxEvent::ExpressionToken {
            content: "DateTime.".to_string(),
            location: loc(1),
        });
        // A comment interrupted the expression here; it emits nothing.
        visitor.visit(SyntaxEvent::ExpressionToken {
            content: "Now".to_string(),
            location: loc(28),
        });
        visitor.visit(SyntaxEvent::EndExpression);

        let method = visitor.method();
        let ir = visitor.finish();
        let expr_id = ir.children(method)[0];
        let container = match ir.kind(expr_id) {
            IrKind::CSharpExpression { expression } => *expression,
            other => panic!("Expected CSharpExpression, got {}", other.name()),
        };

        let tokens = ir.children(container);
        assert_eq!(tokens.len(), 2);
        assert_eq!(ir.source_location(tokens[0]), Some(loc(1)));
        assert_eq!(ir.source_location(tokens[1]), Some(loc(28)));
    }

    #[test]
    fn test_template_scope_nests_content() {
        let mut visitor = LoweringVisitor::new();
        visitor.visit(SyntaxEvent::StartTemplate { location: loc(0) });
        visitor.visit(SyntaxEvent::Markup {
            content: "<li>".to_string(),
            location: loc(0),
        });
        visitor.visit(SyntaxEvent::EndTemplate);

        let method = visitor.method();
        let ir = visitor.finish();
        let template_id = ir.children(method)[0];
        assert!(matches!(ir.kind(template_id), IrKind::Template));

        let inner = ir.children(template_id);
        assert_eq!(inner.len(), 1);
        assert!(matches!(ir.kind(inner[0]), IrKind::HtmlContent { .. }));
    }

    #[test]
    fn test_dynamic_attribute_value_scope() {
        let mut visitor = LoweringVisitor::new();
        visitor.visit(SyntaxEvent::StartDynamicAttribute {
            prefix: " style=\"".to_string(),
            location: loc(4),
        });
        visitor.visit(SyntaxEvent::StartExpression { location: loc(12) });
        visitor.visit(SyntaxEvent::ExpressionToken {
            content: "color".to_string(),
            location: loc(12),
        });
        visitor.visit(SyntaxEvent::EndExpression);
        visitor.visit(SyntaxEvent::EndDynamicAttribute);

        let method = visitor.method();
        let ir = visitor.finish();
        let attr_id = ir.children(method)[0];
        let value = match ir.kind(attr_id) {
            IrKind::CSharpAttributeValue { value, .. } => *value,
            other => panic!("Expected CSharpAttributeValue, got {}", other.name()),
        };

        let entries = ir.children(value);
        assert_eq!(entries.len(), 1);
        assert!(matches!(ir.kind(entries[0]), IrKind::CSharpExpression { .. }));
    }

    #[test]
    fn test_scope_depth_counts_pre_pushed_scopes() {
        let visitor = LoweringVisitor::new();
        // Document root + Namespace + Class + Method
        assert_eq!(visitor.scope_depth(), 4);
    }
}
