use std::fmt::Write as _;

use super::GENERATED_HEADER;

/// Names one group module contributes to `_index.ts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    /// Group display path, `(root)` for the root group.
    pub group: String,
    /// Import path relative to the output directory, without extension.
    pub module_path: String,
    /// Accessor functions in catalog order.
    pub accessors: Vec<String>,
    /// Params interfaces, exported as types.
    pub params_types: Vec<String>,
    /// Namespace constant, when namespaces are generated.
    pub namespace: Option<String>,
}

impl ExportEntry {
    /// Every exported value and type name, in output order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accessors
            .iter()
            .chain(&self.params_types)
            .chain(&self.namespace)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }
}

/// Import path of a group module: `./messages/messages` for the root group,
/// `./messages/<rel>/messages` otherwise.
pub fn module_import_path(rel_path: &str) -> String {
    if rel_path.is_empty() {
        "./messages/messages".to_string()
    } else {
        format!("./messages/{}/messages", rel_path)
    }
}

/// Source of `_index.ts`: re-exports the runtime API and every group's names.
pub fn emit_index(entries: &[ExportEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", GENERATED_HEADER);
    out.push('\n');
    out.push_str("export {\n");
    for name in [
        "type Locale",
        "type LocaleResolver",
        "locales",
        "defaultLocale",
        "setLocale",
        "getLocale",
    ] {
        let _ = writeln!(out, "  {},", name);
    }
    out.push_str("} from \"./_runtime.js\";\n");

    for entry in entries.iter().filter(|e| !e.is_empty()) {
        out.push('\n');
        let _ = writeln!(out, "// {}", entry.group);
        out.push_str("export {\n");
        for name in &entry.accessors {
            let _ = writeln!(out, "  {},", name);
        }
        for name in &entry.params_types {
            let _ = writeln!(out, "  type {},", name);
        }
        if let Some(namespace) = &entry.namespace {
            let _ = writeln!(out, "  {},", namespace);
        }
        let _ = writeln!(out, "}} from \"{}.js\";", entry.module_path);
    }

    out
}
