//! Locale file discovery and decoding.
//!
//! Every directory below the messages directory that holds `*.json` files is
//! one message group. The file stem is the locale (`es.json` -> `es`).

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use serde_json::Value;
use walkdir::WalkDir;

use crate::{
    core::value_kind,
    error::{Error, Result},
};

/// Display name of the group that lives directly in the messages directory.
pub const ROOT_GROUP_NAME: &str = "(root)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    pub locale: String,
    pub path: PathBuf,
}

/// One directory of locale files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageGroup {
    /// `/`-separated path relative to the messages directory, empty for the root.
    pub rel_path: String,
    /// Configured locales found in the directory, in configured order.
    pub files: Vec<LocaleFile>,
}

impl MessageGroup {
    pub fn display_name(&self) -> &str {
        if self.rel_path.is_empty() {
            ROOT_GROUP_NAME
        } else {
            &self.rel_path
        }
    }

    pub fn locales(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.locale.as_str()).collect()
    }
}

/// A locale file that was skipped during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub groups: Vec<MessageGroup>,
    pub warnings: Vec<ScanWarning>,
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "/path/to/messages/zh-CN.json" -> Some("zh-CN")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

fn is_json_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

fn rel_path_of(dir: &Path, messages_dir: &Path) -> String {
    dir.strip_prefix(messages_dir)
        .unwrap_or(dir)
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Finds every message group below `messages_dir`.
///
/// Groups are returned sorted by relative path. Files whose locale is not in
/// `locales` are left out of their group and reported as warnings.
pub fn scan_message_groups(messages_dir: &Path, locales: &[String]) -> Result<ScanMessagesResult> {
    if !messages_dir.exists() {
        return Err(Error::configuration(format!(
            "messages directory '{}' does not exist\nHint: check \"messagesDir\" in your glider.config.json.",
            messages_dir.display()
        )));
    }

    if !messages_dir.is_dir() {
        return Err(Error::configuration(format!(
            "'{}' is not a directory",
            messages_dir.display()
        )));
    }

    let mut result = ScanMessagesResult::default();

    for entry in WalkDir::new(messages_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(messages_dir).to_path_buf();
            Error::io(path, e.into())
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        let mut found: Vec<LocaleFile> = Vec::new();
        for file in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let path = file.map_err(|e| Error::io(dir, e))?.path();
            if !path.is_file() || !is_json_file(&path) {
                continue;
            }
            if let Some(locale) = extract_locale(&path) {
                found.push(LocaleFile { locale, path });
            }
        }

        if found.is_empty() {
            continue;
        }
        found.sort_by(|a, b| a.locale.cmp(&b.locale));

        let mut files = Vec::new();
        for locale in locales {
            if let Some(file) = found.iter().find(|f| &f.locale == locale) {
                files.push(file.clone());
            }
        }
        for file in found.iter().filter(|f| !locales.contains(&f.locale)) {
            result.warnings.push(ScanWarning {
                path: file.path.clone(),
                message: format!(
                    "ignoring {}: locale \"{}\" is not configured",
                    file.path.display(),
                    file.locale
                ),
            });
        }

        result.groups.push(MessageGroup {
            rel_path: rel_path_of(dir, messages_dir),
            files,
        });
    }

    Ok(result)
}

/// Decodes one locale document. The top level must be an object.
pub fn decode_document(content: &str, path: &Path) -> Result<Value> {
    let value: Value = serde_json::from_str(content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !value.is_object() {
        return Err(Error::InvalidDocument {
            path: path.to_path_buf(),
            found: value_kind(&value),
        });
    }

    Ok(value)
}

pub fn parse_json_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    decode_document(&content, path)
}
