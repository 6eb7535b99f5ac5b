//! Accessor functions.
//!
//! Every message becomes one exported function with the positional calling
//! convention
//!
//! ```text
//! fn(lang?: Locale, params?: FnParams, resolveLocale: LocaleResolver = getLocale)
//! fn(lang?: Locale, resolveLocale: LocaleResolver = getLocale)
//! ```
//!
//! The body embeds the per-locale values and mirrors
//! [`Accessor::call`](crate::core::accessor::Accessor::call).

use std::fmt::Write as _;

use serde_json::Value;

use super::{indent, literal, property_key, string_literal, write_samples_doc};
use crate::core::{
    identifier::{identifier_for, params_type_name},
    message::MessageData,
};

/// One accessor to emit.
#[derive(Debug, Clone)]
pub struct AccessorDecl<'a> {
    pub identifier: String,
    /// Params interface name, present when the message declares parameters.
    pub params_type: Option<String>,
    pub path: &'a str,
    pub data: &'a MessageData,
}

impl<'a> AccessorDecl<'a> {
    pub fn new(path: &'a str, data: &'a MessageData, group_prefix: &str) -> Self {
        let identifier = identifier_for(path, group_prefix);
        let params_type = (!data.params.is_empty()).then(|| params_type_name(&identifier));
        Self {
            identifier,
            params_type,
            path,
            data,
        }
    }

    /// True when the body calls the runtime `interpolate`.
    pub fn uses_interpolate(&self) -> bool {
        self.params_type.is_some()
    }

    /// True when the body calls the runtime `hasPlaceholder`.
    pub fn uses_has_placeholder(&self) -> bool {
        self.params_type.is_some() && self.data.is_array_root
    }
}

/// TypeScript type covering every locale's value.
pub fn value_type<'v>(values: impl IntoIterator<Item = &'v Value>) -> String {
    let mut types: Vec<String> = Vec::new();
    for value in values {
        push_unique(&mut types, type_of(value));
    }
    if types.is_empty() {
        return "unknown".to_string();
    }
    types.join(" | ")
}

fn type_of(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Object(_) => "Record<string, unknown>".to_string(),
        Value::Array(items) => {
            let mut element_types: Vec<String> = Vec::new();
            for item in items {
                let element = match item {
                    Value::Array(_) => "readonly unknown[]".to_string(),
                    other => type_of(other),
                };
                push_unique(&mut element_types, element);
            }
            match element_types.len() {
                0 => "readonly unknown[]".to_string(),
                1 => format!("readonly {}[]", element_types[0]),
                _ => format!("readonly ({})[]", element_types.join(" | ")),
            }
        }
    }
}

fn push_unique(types: &mut Vec<String>, ty: String) {
    if !types.contains(&ty) {
        types.push(ty);
    }
}

pub fn emit_params_type(out: &mut String, name: &str, params: &[String]) {
    let _ = writeln!(out, "export interface {} {{", name);
    for param in params {
        let _ = writeln!(out, "  {}: string | number;", property_key(param));
    }
    let _ = writeln!(out, "}}");
}

/// Writes the params interface (if any) and the function for one message.
pub fn emit_accessor(out: &mut String, decl: &AccessorDecl, default_locale: &str) {
    let data = decl.data;

    if let Some(params_type) = &decl.params_type {
        emit_params_type(out, params_type, &data.params);
        out.push('\n');
    }

    let samples: Vec<(String, Value)> = data
        .values
        .iter()
        .map(|(locale, value)| (locale.clone(), value.clone()))
        .collect();
    write_samples_doc(out, 0, Some(decl.path), &samples);

    let ty = value_type(data.values.values());
    let has_default = data.has_locale(default_locale);
    let return_type = if has_default {
        ty.clone()
    } else {
        format!("{} | undefined", ty)
    };
    let fallback = if has_default {
        "values[defaultLocale]!"
    } else {
        "values[defaultLocale]"
    };

    let signature = match &decl.params_type {
        Some(params_type) => format!(
            "lang?: Locale, params?: {}, resolveLocale: LocaleResolver = getLocale",
            params_type
        ),
        None => "lang?: Locale, resolveLocale: LocaleResolver = getLocale".to_string(),
    };
    let _ = writeln!(
        out,
        "export function {}({}): {} {{",
        decl.identifier, signature, return_type
    );

    let _ = writeln!(
        out,
        "{}const values: Partial<Record<Locale, {}>> = {{",
        indent(1),
        ty
    );
    for (locale, value) in &data.values {
        let _ = writeln!(
            out,
            "{}{}: {},",
            indent(2),
            string_literal(locale),
            literal(value)
        );
    }
    let _ = writeln!(out, "{}}};", indent(1));

    let resolved = format!(
        "values[lang ?? resolveLocale() ?? defaultLocale] ?? {}",
        fallback
    );

    if decl.params_type.is_none() {
        let _ = writeln!(out, "{}return {};", indent(1), resolved);
        let _ = writeln!(out, "}}");
        return;
    }

    let names = format!(
        "[{}]",
        data.params
            .iter()
            .map(|p| string_literal(p))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let _ = writeln!(out, "{}const value = {};", indent(1), resolved);

    if data.is_array_root {
        let all_arrays = data.values.values().all(Value::is_array);
        if all_arrays && has_default {
            let _ = writeln!(out, "{}if (params === undefined) return value;", indent(1));
        } else {
            if data.values.values().any(Value::is_string) {
                let _ = writeln!(
                    out,
                    "{}if (params !== undefined && typeof value === \"string\") return interpolate(value, {}, params);",
                    indent(1),
                    names
                );
            }
            let _ = writeln!(
                out,
                "{}if (params === undefined || !Array.isArray(value)) return value;",
                indent(1)
            );
        }
        let _ = writeln!(out, "{}const names = {};", indent(1), names);
        let _ = writeln!(
            out,
            "{}if (!value.some((item) => typeof item === \"string\" && hasPlaceholder(item, names))) return value;",
            indent(1)
        );
        let _ = writeln!(
            out,
            "{}return value.map((item) => (typeof item === \"string\" ? interpolate(item, names, params) : item));",
            indent(1)
        );
    } else {
        let _ = writeln!(
            out,
            "{}if (params === undefined || typeof value !== \"string\") return value;",
            indent(1)
        );
        let _ = writeln!(
            out,
            "{}return interpolate(value, {}, params);",
            indent(1),
            names
        );
    }
    let _ = writeln!(out, "}}");
}
