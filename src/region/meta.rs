//! Free-form metadata and visual attributes attached to regions.
//!
//! Neither map has a schema. Regions carry them verbatim through frame
//! conversion; only the rendering collaborator interprets visual keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arbitrary key/value metadata (e.g. "label", "tag", "include").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta(BTreeMap<String, Value>);

impl Meta {
    /// Creates an empty metadata map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated map.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Looks up an entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Meta {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Styling attributes (e.g. "color", "fontsize", "linewidth").
///
/// Also used for the explicit style options passed to
/// [`plot`](crate::region::Region::plot).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Visual(BTreeMap<String, Value>);

impl Visual {
    /// Creates an empty visual map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated map.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Looks up an entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns a copy of `self` with every key in `overrides` replaced.
    pub fn merged(&self, overrides: &Visual) -> Visual {
        let mut out = self.0.clone();
        out.extend(overrides.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Visual(out)
    }
}

impl FromIterator<(String, Value)> for Visual {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
