//! Composite values: ordered key→value mappings.
//!
//! A composite renders in one of two styles, decided once per composite:
//!
//! - **positional list** — keys are exactly `0..len` in order; entries
//!   render without a key prefix
//! - **keyed map** — any other key set; every entry renders `key => `

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::Value;

/// Key of a composite entry: an explicit integer or a text scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositeKey {
    /// Integer key.
    Int(i64),
    /// Text key.
    Text(String),
}

impl CompositeKey {
    /// Stringified form used to extend the diagnostic path.
    pub fn as_path_segment(&self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for CompositeKey {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<&str> for CompositeKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CompositeKey {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Insertion-ordered key→value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composite {
    entries: Vec<(CompositeKey, Value)>,
}

impl Composite {
    /// Create an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, preserving insertion order.
    pub fn push(&mut self, key: impl Into<CompositeKey>, value: impl Into<Value>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, key: impl Into<CompositeKey>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    /// Build a positional list from values, keyed `0..len`.
    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (CompositeKey::Int(i as i64), v))
            .collect();
        Self { entries }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(CompositeKey, Value)] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the composite has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the keys are exactly the integers `0..len` in order.
    ///
    /// Positional composites render without key prefixes; everything else
    /// renders as a keyed map. An empty composite is positional.
    pub fn is_positional(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (key, _))| matches!(key, CompositeKey::Int(k) if *k == i as i64))
    }
}

impl FromIterator<(CompositeKey, Value)> for Composite {
    fn from_iter<T: IntoIterator<Item = (CompositeKey, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_positional() {
        assert!(Composite::new().is_positional());
    }

    #[test]
    fn test_contiguous_int_keys_are_positional() {
        let c = Composite::list(vec![Value::Int(10), Value::Int(20), Value::Int(30)]);
        assert!(c.is_positional());
    }

    #[test]
    fn test_gap_in_int_keys_is_keyed() {
        let c = Composite::new().with(0i64, Value::Int(1)).with(2i64, Value::Int(2));
        assert!(!c.is_positional());
    }

    #[test]
    fn test_out_of_order_int_keys_is_keyed() {
        let c = Composite::new().with(1i64, Value::Int(1)).with(0i64, Value::Int(2));
        assert!(!c.is_positional());
    }

    #[test]
    fn test_text_keys_are_keyed() {
        let c = Composite::new().with("a", Value::Int(1)).with("b", Value::Int(2));
        assert!(!c.is_positional());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let c = Composite::new().with("b", Value::Int(1)).with("a", Value::Int(2));
        let keys: Vec<String> = c.entries().iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
