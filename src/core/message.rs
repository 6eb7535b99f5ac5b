use std::{collections::HashMap, fmt};

use serde_json::{Map, Value};

/// One step of a [`MessagePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object property name.
    Key(String),
    /// Position inside an array.
    Index(usize),
}

/// Structured location of a value inside a translation document.
///
/// Displays as dot-separated keys with bracketed indices, e.g. `list[2].label`.
/// The displayed form is what the catalog is keyed by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MessagePath {
    segments: Vec<Segment>,
}

impl MessagePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn child_key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.into()));
        Self { segments }
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// Segments after the first `depth` ones.
    pub fn relative_to(&self, depth: usize) -> &[Segment] {
        &self.segments[depth.min(self.segments.len())..]
    }
}

impl fmt::Display for MessagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for MessagePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(|k| Segment::Key(k.into())).collect(),
        }
    }
}

/// Reference from a record to the array element that contains it.
///
/// Only the nearest enclosing array is recorded: a record inside
/// `list[0].tags[1]` points at `list[0].tags`, index 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayItemRef {
    /// Display form of the array root's path.
    pub array_path: String,
    pub index: usize,
}

/// One value found while flattening a single locale document.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    pub path: MessagePath,
    pub value: Value,
    /// Interpolation parameter names, deduplicated, first occurrence first.
    pub params: Vec<String>,
    /// True only for the record holding a whole array.
    pub is_array_root: bool,
    pub array_item: Option<ArrayItemRef>,
}

impl MessageRecord {
    pub fn key(&self) -> String {
        self.path.to_string()
    }
}

/// Locale-merged view of one message path.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageData {
    pub path: MessagePath,
    /// Union of the params seen in every locale.
    pub params: Vec<String>,
    pub is_array_root: bool,
    pub array_item: Option<ArrayItemRef>,
    /// Locale -> value, in aggregation order.
    pub values: Map<String, Value>,
}

impl MessageData {
    pub fn value_for(&self, locale: &str) -> Option<&Value> {
        self.values.get(locale)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.values.contains_key(locale)
    }
}

/// All messages of one group, keyed by path in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    /// Locales that contributed a document, in aggregation order.
    pub locales: Vec<String>,
    entries: Vec<(String, MessageData)>,
    index: HashMap<String, usize>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&MessageData> {
        self.index.get(path).map(|&i| &self.entries[i].1)
    }

    pub(crate) fn entry_mut(
        &mut self,
        path: String,
        init: impl FnOnce() -> MessageData,
    ) -> &mut MessageData {
        let i = match self.index.get(&path) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(path.clone(), i);
                self.entries.push((path, init()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageData)> {
        self.entries.iter().map(|(path, data)| (path.as_str(), data))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}

/// Short name of a JSON value's kind, used in diagnostics and type inference.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
