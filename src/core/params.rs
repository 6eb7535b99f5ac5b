//! `{name}` placeholder scanning and substitution.
//!
//! Placeholders are literal tokens: `{` + word characters + `}`. There is no
//! escaping, pluralization or formatting syntax.

use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};
use serde_json::Value;

static PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Parameter names referenced by a message value.
///
/// Only strings carry parameters. Names are case-sensitive, deduplicated and
/// returned in order of first occurrence.
///
/// ```
/// use glider::core::params::extract_params;
/// use serde_json::json;
///
/// assert_eq!(extract_params(&json!("Hi {name}, {name}! {count}")), vec!["name", "count"]);
/// assert!(extract_params(&json!(42)).is_empty());
/// ```
pub fn extract_params(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => extract_params_from_str(text),
        _ => Vec::new(),
    }
}

pub fn extract_params_from_str(text: &str) -> Vec<String> {
    let mut params: Vec<String> = Vec::new();
    for caps in PARAM_REGEX.captures_iter(text) {
        let name = &caps[1];
        if !params.iter().any(|p| p == name) {
            params.push(name.to_string());
        }
    }
    params
}

/// Appends every name of `extra` not yet present in `params`.
pub fn merge_params(params: &mut Vec<String>, extra: &[String]) {
    for name in extra {
        if !params.contains(name) {
            params.push(name.clone());
        }
    }
}

/// True when `text` contains a placeholder for one of `names`.
pub fn needs_interpolation(text: &str, names: &[String]) -> bool {
    PARAM_REGEX
        .captures_iter(text)
        .any(|caps| names.iter().any(|n| n == &caps[1]))
}

/// Replaces every `{name}` for each declared name that has a supplied value.
///
/// The template is scanned once, so placeholders appearing inside supplied
/// values are never expanded. Declared names without a value are left
/// untouched.
pub fn interpolate(template: &str, names: &[String], values: &HashMap<String, String>) -> String {
    PARAM_REGEX
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match values.get(name) {
                Some(value) if names.iter().any(|n| n == name) => value.clone(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}
