//! Flat string-keyed annotation store attached to model elements.
//!
//! The host model only understands opaque scalar values per key. Structured
//! metadata lives entirely in the layer above (`crumpet-postgres`), which
//! packs multi-field records into single values.

use indexmap::IndexMap;

/// An opaque annotation value: a scalar or a list of strings.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    Str(String),
    List(Vec<String>),
    Bool(bool),
    Int(i64),
}

impl AnnotationValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<String>> for AnnotationValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AnnotationValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// A key-unique annotation map owned by exactly one model element.
///
/// Enumeration follows insertion order, but callers must not rely on it:
/// records that need a deterministic order (composite types) carry an
/// explicit ordering field instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    values: IndexMap<String, AnnotationValue>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&AnnotationValue> {
        self.values.get(key)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AnnotationValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes `key`, returning the value it held.
    pub fn remove(&mut self, key: &str) -> Option<AnnotationValue> {
        self.values.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over every annotation on this element.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over every annotation whose key starts with `prefix`.
    pub fn iter_prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a AnnotationValue)> {
        self.iter().filter(move |(key, _)| key.starts_with(prefix))
    }
}
