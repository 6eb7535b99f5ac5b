//! Reference implementation of the behaviour baked into generated accessors.
//!
//! The emitter produces TypeScript with exactly these semantics; keeping them
//! here as plain Rust makes them testable and powers `glider lookup`.
//!
//! The "current locale" is not a hidden global: callers pass a
//! [`LocaleSource`] capability, mirroring the `resolveLocale` parameter of
//! the generated functions.

use std::collections::HashMap;

use serde_json::Value;

use super::{
    message::MessageData,
    params::{interpolate, needs_interpolation},
};

/// Supplies the ambient locale when a call does not name one.
pub trait LocaleSource {
    fn current_locale(&self) -> Option<&str>;
}

/// A locale source that never has a locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocale;

impl LocaleSource for NoLocale {
    fn current_locale(&self) -> Option<&str> {
        None
    }
}

/// A locale source pinned to one value.
#[derive(Debug, Clone)]
pub struct FixedLocale(pub String);

impl LocaleSource for FixedLocale {
    fn current_locale(&self) -> Option<&str> {
        Some(&self.0)
    }
}

impl<F> LocaleSource for F
where
    F: Fn() -> Option<&'static str>,
{
    fn current_locale(&self) -> Option<&str> {
        self()
    }
}

/// Parameter values supplied to an accessor call, already stringified.
pub type ParamValues = HashMap<String, String>;

/// Evaluates one message the way its generated accessor does.
#[derive(Debug, Clone, Copy)]
pub struct Accessor<'a> {
    data: &'a MessageData,
    default_locale: &'a str,
}

impl<'a> Accessor<'a> {
    pub fn new(data: &'a MessageData, default_locale: &'a str) -> Self {
        Self {
            data,
            default_locale,
        }
    }

    /// Active locale: explicit argument, then the source, then the default.
    pub fn active_locale<'s>(
        &'s self,
        lang: Option<&'s str>,
        source: &'s dyn LocaleSource,
    ) -> &'s str {
        lang.or_else(|| source.current_locale())
            .unwrap_or(self.default_locale)
    }

    /// Value for the active locale, falling back to the default locale.
    pub fn resolve(&self, lang: Option<&str>, source: &dyn LocaleSource) -> Option<&'a Value> {
        let active = self.active_locale(lang, source);
        self.data
            .value_for(active)
            .or_else(|| self.data.value_for(self.default_locale))
    }

    /// Full accessor call: resolve, then substitute parameters.
    ///
    /// Without `params` the resolved value is returned untouched. Array
    /// values substitute inside string elements only, and only when some
    /// element references a declared parameter.
    pub fn call(
        &self,
        lang: Option<&str>,
        params: Option<&ParamValues>,
        source: &dyn LocaleSource,
    ) -> Option<Value> {
        let value = self.resolve(lang, source)?;
        let declared = &self.data.params;

        let Some(params) = params.filter(|_| !declared.is_empty()) else {
            return Some(value.clone());
        };

        let substituted = match value {
            Value::String(text) => Value::String(interpolate(text, declared, params)),
            Value::Array(items) if self.data.is_array_root => {
                let any_needs = items.iter().any(|item| {
                    item.as_str()
                        .is_some_and(|text| needs_interpolation(text, declared))
                });
                if !any_needs {
                    return Some(value.clone());
                }
                let substitute = |item: &Value| match item {
                    Value::String(text) => Value::String(interpolate(text, declared, params)),
                    other => other.clone(),
                };
                Value::Array(items.iter().map(substitute).collect())
            }
            other => other.clone(),
        };
        Some(substituted)
    }
}
