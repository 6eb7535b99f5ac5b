//! TypeScript source generation.
//!
//! - `accessor`: one exported function (and params interface) per message
//! - `namespace`: nested object literal over the accessors
//! - `module`: a group's complete `messages.ts`
//! - `runtime`: the shared `_runtime.ts`
//! - `index`: the combined `_index.ts` entry point
//!
//! Emitters only build strings; writing files is the compiler's job.

use std::{fmt::Write as _, sync::LazyLock};

use regex::Regex;
use serde_json::Value;

pub mod accessor;
pub mod index;
pub mod module;
pub mod namespace;
pub mod runtime;

pub const GENERATED_HEADER: &str = "// Generated by glider. Do not edit.";

pub const RUNTIME_FILE_NAME: &str = "_runtime.ts";
pub const INDEX_FILE_NAME: &str = "_index.ts";
pub const MODULE_FILE_NAME: &str = "messages.ts";

/// Names exported by the runtime module.
pub const RUNTIME_EXPORTS: &[&str] = &[
    "Locale",
    "LocaleResolver",
    "locales",
    "defaultLocale",
    "setLocale",
    "getLocale",
    "interpolate",
    "hasPlaceholder",
];

static PROPERTY_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Renders a JSON value as a TypeScript literal.
pub fn literal(value: &Value) -> String {
    value.to_string()
}

/// Renders a string as a double-quoted TypeScript string literal.
pub fn string_literal(text: &str) -> String {
    Value::from(text).to_string()
}

/// Object key as written in a literal or interface: bare when it is an
/// identifier name, quoted otherwise.
pub fn property_key(key: &str) -> String {
    if PROPERTY_NAME_REGEX.is_match(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}

/// Makes text safe to place inside a `/** */` block.
pub fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}

pub(crate) fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Writes a JSDoc block with one `@locale value` line per sample.
pub(crate) fn write_samples_doc(
    out: &mut String,
    level: usize,
    title: Option<&str>,
    samples: &[(String, Value)],
) {
    let pad = indent(level);
    let _ = writeln!(out, "{}/**", pad);
    if let Some(title) = title {
        let _ = writeln!(out, "{} * `{}`", pad, escape_comment(title));
        if !samples.is_empty() {
            let _ = writeln!(out, "{} *", pad);
        }
    }
    for (locale, value) in samples {
        let _ = writeln!(
            out,
            "{} * @{} {}",
            pad,
            locale,
            escape_comment(&literal(value))
        );
    }
    let _ = writeln!(out, "{} */", pad);
}
