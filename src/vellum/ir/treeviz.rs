//! Treeviz formatter for the lowered IR.
//!
//! One line per node, structure encoded as indentation (2 spaces per level):
//!
//!   <indentation> <icon> <kind> "<label, truncated to 30 chars>"
//!
//! Example:
//!
//!   ⧉ Document
//!     ⌂ Namespace
//!       ◇ Class
//!         § Method
//!           ¶ HtmlContent "Hello, "
//!           ƒ CSharpExpression
//!             ➔ Container
//!               • CSharpToken "name"
//!
//! Icons:
//!     Structure: Document ⧉, Namespace ⌂, Class ◇, Method §
//!     Markup: HtmlContent ¶, HtmlAttribute ≔, HtmlAttributeValue ◦
//!     Code: CSharpExpression ƒ, CSharpToken •, CSharpStatement ☰,
//!           CSharpAttributeValue ≈, UsingStatement ⊕
//!     Other: Template ⧫, Container ➔

use crate::vellum::ir::nodes::DocumentIr;
use crate::vellum::ir::snapshot::{snapshot_from_ir, IrSnapshot};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(kind: &str) -> &'static str {
    match kind {
        "Document" => "⧉",
        "Namespace" => "⌂",
        "Class" => "◇",
        "Method" => "§",
        "HtmlContent" => "¶",
        "HtmlAttribute" => "≔",
        "HtmlAttributeValue" => "◦",
        "CSharpAttributeValue" => "≈",
        "CSharpExpression" => "ƒ",
        "CSharpToken" => "•",
        "CSharpStatement" => "☰",
        "UsingStatement" => "⊕",
        "Template" => "⧫",
        "Container" => "➔",
        _ => "○",
    }
}

/// Render the whole lowered document as treeviz text.
pub fn render(ir: &DocumentIr) -> String {
    let snapshot = snapshot_from_ir(ir);
    let mut output = String::new();
    format_snapshot(&snapshot, 0, &mut output);
    output
}

fn format_snapshot(snapshot: &IrSnapshot, depth: usize, output: &mut String) {
    let indent = "  ".repeat(depth);
    let icon = get_icon(&snapshot.kind);

    output.push_str(&indent);
    output.push_str(icon);
    output.push(' ');
    output.push_str(&snapshot.kind);
    if !snapshot.label.is_empty() {
        output.push_str(&format!(" \"{}\"", truncate(&snapshot.label, 30)));
    }
    output.push('\n');

    for child in &snapshot.children {
        format_snapshot(child, depth + 1, output);
    }
}
