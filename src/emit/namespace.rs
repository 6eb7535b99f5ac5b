use std::fmt::Write as _;

use super::{indent, property_key, write_samples_doc};
use crate::core::namespace::NamespaceNode;

/// Writes `export const <name> = { ... } as const;` for a namespace tree.
///
/// Leaves reference accessors without calling them. Every leaf and array
/// entry is preceded by a JSDoc block listing its per-locale values.
pub fn emit_namespace(out: &mut String, name: &str, root: &NamespaceNode) {
    let _ = write!(out, "export const {} = ", name);
    write_node(out, root, 0);
    let _ = writeln!(out, " as const;");
}

fn write_node(out: &mut String, node: &NamespaceNode, level: usize) {
    match node {
        NamespaceNode::Leaf { identifier, .. } => out.push_str(identifier),
        NamespaceNode::Branch { children } => {
            if children.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (key, child) in children {
                write_doc(out, child, level + 1);
                let _ = write!(out, "{}{}: ", indent(level + 1), property_key(key));
                write_node(out, child, level + 1);
                out.push_str(",\n");
            }
            let _ = write!(out, "{}}}", indent(level));
        }
        NamespaceNode::Array { items, .. } => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for item in items {
                write_doc(out, item, level + 1);
                out.push_str(&indent(level + 1));
                write_node(out, item, level + 1);
                out.push_str(",\n");
            }
            let _ = write!(out, "{}]", indent(level));
        }
    }
}

fn write_doc(out: &mut String, node: &NamespaceNode, level: usize) {
    match node {
        NamespaceNode::Leaf { samples, .. } | NamespaceNode::Array { samples, .. } => {
            write_samples_doc(out, level, None, samples)
        }
        NamespaceNode::Branch { .. } => {}
    }
}
