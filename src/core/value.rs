use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::FieldPath;

/// Scalar stored for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(value) if value.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `f64` display is the shortest string that parses back exactly
            // and prints integral values without a fraction.
            Self::Number(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Resolved settings for one chart document, keyed by canonical field id.
///
/// The tree is partial: a missing key resolves to the field's default.
/// Insertion order is preserved so persisted documents are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueTree {
    entries: IndexMap<String, FieldValue>,
}

impl ValueTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Stores a value under the canonical form of `id`, so dotted and
    /// bracketed spellings address the same entry.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<FieldValue>) {
        let id = id.into();
        let id = FieldPath::canonicalize(&id).unwrap_or(id);
        self.entries.insert(id, value.into());
    }

    pub fn remove(&mut self, id: &str) -> Option<FieldValue> {
        self.entries.shift_remove(id)
    }

    #[must_use]
    pub fn with(mut self, id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(id, value);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ValueTree {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = Self::new();
        for (id, value) in iter {
            tree.insert(id, value);
        }
        tree
    }
}
