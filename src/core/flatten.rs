//! Flattening of nested translation documents into message records.
//!
//! Arrays produce two representations at once: one record holding the
//! whole array (used for runtime fallback of the complete list) and one
//! record per element, or per element sub-tree when the element is an
//! object. Element records carry an [`ArrayItemRef`] so later stages never
//! need to infer array membership from the shape of a path.

use std::collections::HashSet;

use serde_json::Value;

use super::{
    message::{ArrayItemRef, MessagePath, MessageRecord},
    params::{extract_params, merge_params},
};

/// Flattens `tree` into records in depth-first, source key order.
pub fn flatten(tree: &Value, prefix: &MessagePath) -> Vec<MessageRecord> {
    let mut records = Vec::new();
    flatten_into(tree, prefix, None, &mut records);
    records
}

/// Flattens a whole document (top level object, empty prefix).
pub fn flatten_document(document: &Value) -> Vec<MessageRecord> {
    flatten(document, &MessagePath::root())
}

/// First path that occurs twice in `records`.
///
/// Keys containing `.` or `[n]` can spell the same path as a nested
/// structure (`{"a.b": ..}` and `{"a": {"b": ..}}`); such documents cannot be
/// addressed unambiguously.
pub fn find_duplicate_path(records: &[MessageRecord]) -> Option<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(MessageRecord::key)
        .find(|key| !seen.insert(key.clone()))
}

fn flatten_into(
    value: &Value,
    path: &MessagePath,
    array_item: Option<&ArrayItemRef>,
    records: &mut Vec<MessageRecord>,
) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(child, &path.child_key(key.as_str()), array_item, records);
            }
        }
        Value::Array(items) => {
            let mut params = Vec::new();
            for item in items {
                if item.is_string() {
                    merge_params(&mut params, &extract_params(item));
                }
            }
            records.push(MessageRecord {
                path: path.clone(),
                value: value.clone(),
                params,
                is_array_root: true,
                array_item: array_item.cloned(),
            });

            let array_path = path.to_string();
            for (index, item) in items.iter().enumerate() {
                let item_ref = ArrayItemRef {
                    array_path: array_path.clone(),
                    index,
                };
                flatten_into(item, &path.child_index(index), Some(&item_ref), records);
            }
        }
        scalar => records.push(MessageRecord {
            path: path.clone(),
            value: scalar.clone(),
            params: extract_params(scalar),
            is_array_root: false,
            array_item: array_item.cloned(),
        }),
    }
}
