use std::fmt::Write as _;

use super::{
    accessor::{AccessorDecl, emit_accessor},
    namespace::emit_namespace,
};
use crate::core::namespace::NamespaceNode;

/// Import path of `_runtime.ts` from `messages/<rel_path>/messages.ts`.
pub fn runtime_import_path(rel_path: &str) -> String {
    let depth = rel_path.split('/').filter(|s| !s.is_empty()).count();
    format!("{}_runtime.js", "../".repeat(depth + 1))
}

/// Source of one group's `messages.ts`.
pub fn emit_module(
    rel_path: &str,
    accessors: &[AccessorDecl],
    namespace: Option<(&str, &NamespaceNode)>,
    default_locale: &str,
) -> String {
    let mut out = String::new();
    let source = if rel_path.is_empty() {
        "messages".to_string()
    } else {
        format!("messages/{}", rel_path)
    };
    let _ = writeln!(out, "// Generated by glider from {}. Do not edit.", source);

    if !accessors.is_empty() {
        let mut imports = vec![
            "type Locale",
            "type LocaleResolver",
            "defaultLocale",
            "getLocale",
        ];
        if accessors.iter().any(AccessorDecl::uses_has_placeholder) {
            imports.push("hasPlaceholder");
        }
        if accessors.iter().any(AccessorDecl::uses_interpolate) {
            imports.push("interpolate");
        }
        out.push('\n');
        let _ = writeln!(
            out,
            "import {{ {} }} from \"{}\";",
            imports.join(", "),
            runtime_import_path(rel_path)
        );
    }

    for decl in accessors {
        out.push('\n');
        emit_accessor(&mut out, decl, default_locale);
    }

    if let Some((name, root)) = namespace {
        out.push('\n');
        emit_namespace(&mut out, name, root);
    }

    out
}
