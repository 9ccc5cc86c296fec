//! Mermaid source for outline diagrams.
//!
//! Tree mode renders a `mindmap` whose nesting follows node depth; flow mode
//! renders a top-down `graph` with one class per node style. Colors are left
//! to the page's `classDef`s.

use std::fmt::Write;

use super::{DiagramSource, NodeStyle};
use crate::types::DiagramMode;

/// Render a diagram as Mermaid source.
pub fn render_mermaid(source: &DiagramSource) -> String {
    match source.mode {
        DiagramMode::Tree => render_mindmap(source),
        DiagramMode::Flow => render_flowchart(source),
    }
}

fn render_mindmap(source: &DiagramSource) -> String {
    let mut out = String::from("mindmap\n");
    for node in &source.nodes {
        let indent = "  ".repeat(usize::from(node.depth) + 1);
        match node.style {
            NodeStyle::Root => {
                let _ = writeln!(out, "{indent}root(({}))", node.label);
            }
            NodeStyle::Main | NodeStyle::Sub => {
                let _ = writeln!(out, "{indent}{}", node.label);
            }
        }
    }
    out
}

fn render_flowchart(source: &DiagramSource) -> String {
    let mut out = String::from("graph TD\n");

    for node in &source.nodes {
        let _ = match node.style {
            NodeStyle::Root => writeln!(out, "  {}[{}]", node.id, node.label),
            NodeStyle::Main => writeln!(out, "  {}[\"{}\"]", node.id, node.label),
            NodeStyle::Sub => writeln!(out, "  {}(\"{}\")", node.id, node.label),
        };
        if let Some(parent) = &node.parent {
            let _ = writeln!(out, "  {} --> {}", parent, node.id);
        }
    }

    for style in [NodeStyle::Root, NodeStyle::Main, NodeStyle::Sub] {
        let ids: Vec<&str> = source
            .nodes
            .iter()
            .filter(|n| n.style == style)
            .map(|n| n.id.as_str())
            .collect();
        if !ids.is_empty() {
            let _ = writeln!(out, "  class {} {}", ids.join(","), style.class_name());
        }
    }

    out
}
