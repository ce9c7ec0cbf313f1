//! Resource tags and tag-set reconciliation.
//!
//! Tags are a set keyed by tag key; order carries no meaning. Models and the
//! Kendra wire format both use `{"Key": .., "Value": ..}` entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Key-unique tag collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeMap<String, String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an optional model list; later duplicates win
    pub fn from_tags(tags: Option<&[Tag]>) -> Self {
        Self(
            tags.unwrap_or_default()
                .iter()
                .map(|t| (t.key.clone(), t.value.clone()))
                .collect(),
        )
    }

    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self(map.clone())
    }

    /// Add tags that are not already present (stack tags never override model tags)
    pub fn merge_missing(mut self, other: &BTreeMap<String, String>) -> Self {
        for (key, value) in other {
            self.0
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Ordered list form, `None` when empty
    pub fn to_tags(&self) -> Option<Vec<Tag>> {
        if self.0.is_empty() {
            None
        } else {
            Some(
                self.0
                    .iter()
                    .map(|(k, v)| Tag::new(k.clone(), v.clone()))
                    .collect(),
            )
        }
    }

    /// Difference that turns `existing` into `self`
    pub fn diff(&self, existing: &TagSet) -> TagDiff {
        let to_add: Vec<Tag> = self
            .0
            .iter()
            .filter(|(k, v)| existing.0.get(*k) != Some(*v))
            .map(|(k, v)| Tag::new(k.clone(), v.clone()))
            .collect();

        // A key whose value changed is re-tagged, not untagged
        let to_remove: Vec<String> = existing
            .0
            .keys()
            .filter(|k| !self.0.contains_key(*k))
            .cloned()
            .collect();

        TagDiff { to_add, to_remove }
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().map(|t| (t.key, t.value)).collect())
    }
}

/// Tag calls needed to reconcile a resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    pub to_add: Vec<Tag>,
    pub to_remove: Vec<String>,
}

impl TagDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
