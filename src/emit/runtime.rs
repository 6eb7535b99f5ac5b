use std::fmt::Write as _;

use super::{GENERATED_HEADER, string_literal};

/// Source of `_runtime.ts`, shared by every generated module.
///
/// Holds the locale list, the ambient locale used when an accessor gets no
/// `lang` argument, and the placeholder helpers the accessors call.
pub fn emit_runtime(locales: &[String], default_locale: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", GENERATED_HEADER);
    out.push('\n');

    let list = locales
        .iter()
        .map(|l| string_literal(l))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "export const locales = [{}] as const;", list);
    out.push('\n');
    out.push_str("export type Locale = (typeof locales)[number];\n");
    out.push('\n');
    let _ = writeln!(
        out,
        "export const defaultLocale: Locale = {};",
        string_literal(default_locale)
    );
    out.push_str(RUNTIME_BODY);
    out
}

const RUNTIME_BODY: &str = r#"
/** Supplies the locale used when an accessor is called without `lang`. */
export type LocaleResolver = () => Locale | undefined;

let currentLocale: Locale | undefined;

export function setLocale(locale: Locale | undefined): void {
  currentLocale = locale;
}

export function getLocale(): Locale | undefined {
  return currentLocale;
}

function paramValue(params: object, name: string): unknown {
  return (params as Record<string, unknown>)[name];
}

const PLACEHOLDER = /\{([\p{Alphabetic}\p{M}\p{Nd}\p{Pc}\p{Join_Control}]+)\}/gu;

/** Replaces every `{name}` of each declared name that has a defined value, in one pass. */
export function interpolate(template: string, names: readonly string[], params: object | undefined): string {
  if (params === undefined) return template;
  return template.replace(PLACEHOLDER, (token: string, name: string) => {
    if (!names.includes(name)) return token;
    const value = paramValue(params, name);
    return value === undefined ? token : String(value);
  });
}

/** True when `text` contains `{name}` for one of `names`. */
export function hasPlaceholder(text: string, names: readonly string[]): boolean {
  return names.some((name) => text.includes(`{${name}}`));
}
"#;
