//! Accessor names derived from message paths.
//!
//! Both `.` and `[n]` fold into `_`, so two different paths can map to the
//! same name (`a.b` and `a_b`). [`IdentifierRegistry`] rejects such
//! collisions instead of letting one accessor silently replace another.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::error::{Error, Result};

static INDEX_SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap());

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Words that cannot name an exported function or constant in a TypeScript module.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Globals referenced by generated accessor bodies; an export with one of
/// these names would shadow it inside the module.
const SHADOWED_GLOBALS: &[&str] = &["Array", "undefined", "NaN", "Infinity"];

/// Generates the accessor name for `path` within a group.
///
/// ```
/// use glider::core::identifier::identifier_for;
///
/// assert_eq!(identifier_for("nav.home", ""), "nav_home");
/// assert_eq!(identifier_for("list[2].label", ""), "list_2_label");
/// assert_eq!(identifier_for("title", "dashboard/stats"), "dashboard_stats_title");
/// ```
pub fn identifier_for(path: &str, group_prefix: &str) -> String {
    let base = INDEX_SEGMENT_REGEX.replace_all(path, "_$1").replace('.', "_");
    let prefix = normalize_prefix(group_prefix);
    if prefix.is_empty() {
        base
    } else {
        format!("{}_{}", prefix, base)
    }
}

/// Folds group path separators into `_`.
pub fn normalize_prefix(group_prefix: &str) -> String {
    group_prefix.replace(['/', '\\', '-', '.'], "_")
}

/// Name of the params interface for an accessor: `nav_home` -> `Nav_homeParams`.
pub fn params_type_name(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => format!("{}{}Params", first.to_uppercase(), chars.as_str()),
        None => "Params".to_string(),
    }
}

/// Name of the namespace constant exported by a group module.
pub fn namespace_name(group_prefix: &str) -> String {
    let prefix = normalize_prefix(group_prefix);
    if prefix.is_empty() {
        "messages".to_string()
    } else {
        format!("{}_messages", prefix)
    }
}

pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
        && !RESERVED_WORDS.contains(&name)
        && !SHADOWED_GLOBALS.contains(&name)
}

/// Tracks every generated name together with the path that produced it.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    owners: HashMap<String, String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `identifier` as produced by `owner` (a message path or a
    /// descriptive label).
    ///
    /// Registering the same pair twice is a no-op.
    pub fn register(&mut self, identifier: &str, owner: &str, group: &str) -> Result<()> {
        if !is_valid_identifier(identifier) {
            return Err(Error::InvalidIdentifier {
                group: group.to_string(),
                path: owner.to_string(),
                identifier: identifier.to_string(),
            });
        }

        match self.owners.get(identifier) {
            Some(first) if first != owner => Err(Error::IdentifierCollision {
                group: group.to_string(),
                identifier: identifier.to_string(),
                first: first.clone(),
                second: owner.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.owners.insert(identifier.to_string(), owner.to_string());
                Ok(())
            }
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.owners.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
