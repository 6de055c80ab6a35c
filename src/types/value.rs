//! The value model: everything the exporter can be asked to render.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::composite::Composite;
use super::reference::ReferenceValue;

/// A runtime value to export.
///
/// Scalars are compared and copied by content; [`ReferenceValue`]s carry
/// identity. `Resource` models non-serializable runtime handles (open
/// connections, file descriptors); exporting one fails deterministically.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text scalar.
    Text(String),
    /// Ordered key→value mapping.
    Composite(Composite),
    /// Identity-bearing entity, encoded via strategies.
    Reference(ReferenceValue),
    /// Non-serializable runtime handle; always rejected.
    Resource {
        /// Handle kind, e.g. `socket` or `file descriptor`.
        kind: String,
    },
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Composite(_) => ValueKind::Composite,
            Self::Reference(_) => ValueKind::Reference,
            Self::Resource { .. } => ValueKind::Resource,
        }
    }

    /// Shorthand for a resource handle of the given kind.
    pub fn resource(kind: impl Into<String>) -> Self {
        Self::Resource { kind: kind.into() }
    }
}

/// Fieldless kind tag, used in dispatch diagnostics and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Null.
    Null,
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Float.
    Float,
    /// Text.
    Text,
    /// Composite.
    Composite,
    /// Reference.
    Reference,
    /// Resource handle.
    Resource,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Composite => "composite",
            Self::Reference => "reference",
            Self::Resource => "resource",
        };
        write!(f, "{}", name)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Composite> for Value {
    fn from(c: Composite) -> Self {
        Self::Composite(c)
    }
}

impl From<ReferenceValue> for Value {
    fn from(r: ReferenceValue) -> Self {
        Self::Reference(r)
    }
}

/// Build an exportable value from parsed JSON.
///
/// Objects become keyed composites, arrays positional composites. Numbers
/// map to `Int` when representable as `i64`, otherwise `Float`.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Composite(Composite::list(items.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(map) => Self::Composite(
                map.into_iter()
                    .map(|(k, v)| (k.into(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_display() {
        assert_eq!(Value::Null.kind().to_string(), "null");
        assert_eq!(Value::resource("socket").kind().to_string(), "resource");
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from("hi"), Value::Text("hi".to_string()));
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(7)), Value::Int(7));
        assert_eq!(Value::from(json!(0.5)), Value::Float(0.5));
        assert_eq!(Value::from(json!("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn test_from_json_array_is_positional() {
        let v = Value::from(json!([1, 2, 3]));
        match v {
            Value::Composite(c) => {
                assert!(c.is_positional());
                assert_eq!(c.len(), 3);
            }
            other => panic!("expected composite, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_object_is_keyed() {
        let v = Value::from(json!({"a": 1}));
        match v {
            Value::Composite(c) => assert!(!c.is_positional()),
            other => panic!("expected composite, got {:?}", other),
        }
    }
}
