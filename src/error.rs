//! Error types returned by the compiler pipeline.
//!
//! Every variant carries enough context (group, locale, message path, file)
//! to locate the offending input. The CLI decides which of them are
//! validation failures and which are hard errors.

use std::{fmt::Write as _, io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Missing message paths for one locale, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleGap {
    pub locale: String,
    pub paths: Vec<String>,
}

/// A path whose value kind differs from the default locale's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMismatch {
    pub path: String,
    pub locale: String,
    pub expected: &'static str,
    pub found: &'static str,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error(
        "{file_name} not found in {} or any parent directory\nHint: run `glider init` to create one.",
        .start.display()
    )]
    ConfigNotFound {
        file_name: &'static str,
        start: PathBuf,
    },

    #[error(
        "missing locale file \"{locale}.json\" in {group}\n   Expected locales: {}\n   Found locales: {}",
        .expected.join(", "),
        .found.join(", ")
    )]
    MissingLocaleFile {
        group: String,
        locale: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("missing translations in {group}:\n{}", format_gaps(.by_locale))]
    MissingTranslations {
        group: String,
        by_locale: Vec<LocaleGap>,
    },

    #[error("value kinds differ between locales in {group}:\n{}", format_mismatches(.mismatches))]
    ValueKindMismatch {
        group: String,
        mismatches: Vec<KindMismatch>,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: top-level value must be an object, found {found}", .path.display())]
    InvalidDocument { path: PathBuf, found: &'static str },

    #[error(
        "identifier `{identifier}` in {group} is generated by both \"{first}\" and \"{second}\"\nHint: rename one of the keys."
    )]
    IdentifierCollision {
        group: String,
        identifier: String,
        first: String,
        second: String,
    },

    #[error(
        "\"{path}\" in {group} produces `{identifier}`, which is not a usable TypeScript identifier"
    )]
    InvalidIdentifier {
        group: String,
        path: String,
        identifier: String,
    },

    #[error(
        "\"{path}\" appears more than once in {locale}.json of {group}\nHint: keys containing '.' or '[' clash with nested keys."
    )]
    AmbiguousPath {
        group: String,
        locale: String,
        path: String,
    },

    #[error("\"{path}\" in {group} is both a message and a namespace")]
    NamespaceConflict { group: String, path: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by translation content rather than by the
    /// environment (config, filesystem, malformed JSON).
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Error::MissingLocaleFile { .. }
                | Error::MissingTranslations { .. }
                | Error::ValueKindMismatch { .. }
        )
    }
}

fn format_gaps(by_locale: &[LocaleGap]) -> String {
    let mut out = String::new();
    for gap in by_locale {
        let _ = writeln!(
            out,
            "   Locale \"{}\" is missing {} translation(s):",
            gap.locale,
            gap.paths.len()
        );
        for path in &gap.paths {
            let _ = writeln!(out, "      - {}", path);
        }
    }
    out.push_str("Add the missing translations to the corresponding JSON file");
    out
}

fn format_mismatches(mismatches: &[KindMismatch]) -> String {
    mismatches
        .iter()
        .map(|m| {
            format!(
                "   - {} is {} in \"{}\" but {} in the default locale",
                m.path, m.found, m.locale, m.expected
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
