//! Rebuilds a nested namespace tree over the generated accessors.
//!
//! Records that live inside an array element are tagged with an
//! [`ArrayItemRef`](super::message::ArrayItemRef). The top level pass skips
//! them; array reconstruction later consumes each element's records exactly
//! once and places them at the element's position instead of as sibling
//! keys of the array.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{Error, Result};

use super::{
    identifier::identifier_for,
    message::{MessageCatalog, MessageData, Segment},
};

/// Per-locale values attached to a node for documentation.
pub type LocaleSamples = Vec<(String, Value)>;

#[derive(Debug, Clone, PartialEq)]
pub enum NamespaceNode {
    /// Reference to one generated accessor.
    Leaf {
        identifier: String,
        samples: LocaleSamples,
    },
    /// Nested grouping, children in first-seen order.
    Branch { children: Vec<(String, NamespaceNode)> },
    /// Reconstructed array; one item per default-locale element.
    Array {
        items: Vec<NamespaceNode>,
        samples: LocaleSamples,
    },
}

impl NamespaceNode {
    fn empty_branch() -> Self {
        NamespaceNode::Branch {
            children: Vec::new(),
        }
    }

    pub fn child(&self, name: &str) -> Option<&NamespaceNode> {
        match self {
            NamespaceNode::Branch { children } => children
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NamespaceNode::Branch { children } if children.is_empty())
    }
}

type ScopeEntries<'a> = Vec<(&'a str, &'a MessageData)>;

/// Builds the root [`NamespaceNode::Branch`] for one group.
pub fn build_namespace(
    catalog: &MessageCatalog,
    group_prefix: &str,
    default_locale: &str,
    group: &str,
) -> Result<NamespaceNode> {
    NamespaceBuilder::new(catalog, group_prefix, default_locale, group).build()
}

struct NamespaceBuilder<'a> {
    catalog: &'a MessageCatalog,
    /// Entries grouped by the array element that contains them.
    element_scopes: HashMap<(String, usize), ScopeEntries<'a>>,
    top_scope: ScopeEntries<'a>,
    group_prefix: &'a str,
    default_locale: &'a str,
    group: &'a str,
}

impl<'a> NamespaceBuilder<'a> {
    fn new(
        catalog: &'a MessageCatalog,
        group_prefix: &'a str,
        default_locale: &'a str,
        group: &'a str,
    ) -> Self {
        let mut element_scopes: HashMap<(String, usize), ScopeEntries> = HashMap::new();
        let mut top_scope = Vec::new();

        for (path, data) in catalog.iter() {
            match &data.array_item {
                Some(item) => element_scopes
                    .entry((item.array_path.clone(), item.index))
                    .or_default()
                    .push((path, data)),
                None => top_scope.push((path, data)),
            }
        }

        Self {
            catalog,
            element_scopes,
            top_scope,
            group_prefix,
            default_locale,
            group,
        }
    }

    fn build(&self) -> Result<NamespaceNode> {
        let children = self.build_scope(&self.top_scope, 0)?;
        Ok(NamespaceNode::Branch { children })
    }

    /// Children of a branch whose entries share their first `depth` segments.
    fn build_scope(
        &self,
        entries: &[(&'a str, &'a MessageData)],
        depth: usize,
    ) -> Result<Vec<(String, NamespaceNode)>> {
        let mut root = NamespaceNode::empty_branch();

        for &(path, data) in entries {
            // The array root of an array-in-array element has no keys of its
            // own inside the element; it is placed by `build_array`.
            let Some(keys) = key_segments(data.path.relative_to(depth)) else {
                continue;
            };

            let node = if data.is_array_root {
                self.build_array(path, data)?
            } else {
                self.leaf(path, data.values.iter())
            };
            self.insert(&mut root, &keys, node, path)?;
        }

        match root {
            NamespaceNode::Branch { children } => Ok(children),
            _ => unreachable!("scope root is always a branch"),
        }
    }

    fn insert(
        &self,
        root: &mut NamespaceNode,
        keys: &[&str],
        node: NamespaceNode,
        path: &str,
    ) -> Result<()> {
        let conflict = || Error::NamespaceConflict {
            group: self.group.to_string(),
            path: path.to_string(),
        };

        let Some((last, parents)) = keys.split_last() else {
            return Err(conflict());
        };

        let mut current = root;
        for key in parents {
            let NamespaceNode::Branch { children } = current else {
                return Err(conflict());
            };
            let position = match children.iter().position(|(name, _)| name == key) {
                Some(position) => position,
                None => {
                    children.push((key.to_string(), NamespaceNode::empty_branch()));
                    children.len() - 1
                }
            };
            current = &mut children[position].1;
        }

        let NamespaceNode::Branch { children } = current else {
            return Err(conflict());
        };
        if children.iter().any(|(name, _)| name == last) {
            return Err(conflict());
        }
        children.push((last.to_string(), node));
        Ok(())
    }

    fn build_array(&self, path: &str, data: &'a MessageData) -> Result<NamespaceNode> {
        let reference = data
            .value_for(self.default_locale)
            .and_then(Value::as_array)
            .or_else(|| data.values.values().find_map(Value::as_array));

        let mut items = Vec::new();
        for (index, element) in reference.into_iter().flatten().enumerate() {
            let item_path = format!("{}[{}]", path, index);
            let item = match element {
                Value::Object(_) => {
                    let scope = self
                        .element_scopes
                        .get(&(path.to_string(), index))
                        .map(Vec::as_slice)
                        .unwrap_or_default();
                    let children = self.build_scope(scope, data.path.len() + 1)?;
                    NamespaceNode::Branch { children }
                }
                Value::Array(_) => match self.catalog.get(&item_path) {
                    Some(nested) if nested.is_array_root => self.build_array(&item_path, nested)?,
                    _ => self.element_leaf(&item_path, data, index),
                },
                _ => self.element_leaf(&item_path, data, index),
            };
            items.push(item);
        }

        Ok(NamespaceNode::Array {
            items,
            samples: samples(data.values.iter()),
        })
    }

    fn element_leaf(&self, item_path: &str, array: &MessageData, index: usize) -> NamespaceNode {
        let values = array
            .values
            .iter()
            .filter_map(|(locale, value)| Some((locale, value.as_array()?.get(index)?)));
        self.leaf(item_path, values)
    }

    fn leaf<'v>(
        &self,
        path: &str,
        values: impl Iterator<Item = (&'v String, &'v Value)>,
    ) -> NamespaceNode {
        NamespaceNode::Leaf {
            identifier: identifier_for(path, self.group_prefix),
            samples: samples(values),
        }
    }
}

fn samples<'v>(values: impl Iterator<Item = (&'v String, &'v Value)>) -> LocaleSamples {
    values
        .map(|(locale, value)| (locale.clone(), value.clone()))
        .collect()
}

fn key_segments(segments: &[Segment]) -> Option<Vec<&str>> {
    if segments.is_empty() {
        return None;
    }
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Key(key) => Some(key.as_str()),
            Segment::Index(_) => None,
        })
        .collect()
}
