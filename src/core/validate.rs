//! Cross-locale completeness checks for one message group.
//!
//! Runs in three phases:
//!
//! 1. **Locale files**: every configured locale contributed a document.
//!    Fails fast, the later phases would only report noise.
//! 2. **Messages**: every path exists in every configured locale. All gaps
//!    are collected and reported together, grouped by locale.
//! 3. **Value kinds**: a path is an array in every locale or in none.

use crate::error::{Error, KindMismatch, LocaleGap, Result};

use super::message::{MessageCatalog, value_kind};

pub fn validate(
    locales: &[String],
    default_locale: &str,
    catalog: &MessageCatalog,
    group: &str,
) -> Result<()> {
    check_locale_files(locales, catalog, group)?;
    check_messages(locales, catalog, group)?;
    check_value_kinds(locales, default_locale, catalog, group)
}

fn check_locale_files(locales: &[String], catalog: &MessageCatalog, group: &str) -> Result<()> {
    match locales.iter().find(|locale| !catalog.has_locale(locale)) {
        Some(missing) => Err(Error::MissingLocaleFile {
            group: group.to_string(),
            locale: missing.clone(),
            expected: locales.to_vec(),
            found: catalog.locales.clone(),
        }),
        None => Ok(()),
    }
}

fn check_messages(locales: &[String], catalog: &MessageCatalog, group: &str) -> Result<()> {
    let by_locale: Vec<LocaleGap> = locales
        .iter()
        .filter_map(|locale| {
            let paths: Vec<String> = catalog
                .iter()
                .filter(|(_, data)| !data.has_locale(locale))
                .map(|(path, _)| path.to_string())
                .collect();
            (!paths.is_empty()).then(|| LocaleGap {
                locale: locale.clone(),
                paths,
            })
        })
        .collect();

    if by_locale.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingTranslations {
            group: group.to_string(),
            by_locale,
        })
    }
}

fn check_value_kinds(
    locales: &[String],
    default_locale: &str,
    catalog: &MessageCatalog,
    group: &str,
) -> Result<()> {
    let mut mismatches = Vec::new();

    for (path, data) in catalog.iter() {
        let Some(expected) = data.value_for(default_locale) else {
            continue;
        };
        let expected_is_array = expected.is_array();

        for locale in locales.iter().filter(|l| l.as_str() != default_locale) {
            if let Some(value) = data.value_for(locale)
                && value.is_array() != expected_is_array
            {
                mismatches.push(KindMismatch {
                    path: path.to_string(),
                    locale: locale.clone(),
                    expected: value_kind(expected),
                    found: value_kind(value),
                });
            }
        }
    }

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(Error::ValueKindMismatch {
            group: group.to_string(),
            mismatches,
        })
    }
}
