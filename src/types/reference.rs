//! Reference values: identity-bearing entities encoded via strategies.
//!
//! A reference is structurally opaque to the exporter core. Its internals
//! (class name, fields, reconstruction hooks) are only reachable through
//! an encoding strategy, which receives a pre-extracted
//! [`ReferenceDescriptor`] for shape matching.
//!
//! ## Identity
//!
//! References are `Rc`-backed: cloning a `ReferenceValue` clones the
//! handle, not the entity. Two clones compare equal and intern to the same
//! per-session identity, which is what the cycle/shared-reference detection
//! keys on. Fields sit behind a `RefCell` so self-referential graphs can be
//! tied after construction.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use super::value::Value;

/// A named field of a reference.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: Value,
    /// Whether the field is declared on the type (false for ad-hoc fields).
    pub declared: bool,
}

/// Reconstruction hook: a named factory function applied to a state value.
#[derive(Debug, Clone)]
pub struct Factory {
    /// Fully qualified callable name, e.g. `AppConfig::fromState`.
    pub function: String,
    /// State value passed to the factory.
    pub state: Value,
}

/// Pre-extracted shape of a reference, consumed by strategy predicates.
///
/// Strategies match on this descriptor instead of inspecting the reference
/// directly, keeping shape predicates narrow and explicit.
#[derive(Debug, Clone)]
pub struct ReferenceDescriptor {
    /// Class/kind name of the reference.
    pub class_name: String,
    /// Names of fields declared on the type, in insertion order.
    pub declared_fields: Vec<String>,
    /// Names of ad-hoc fields not declared on the type.
    pub dynamic_fields: Vec<String>,
    /// Factory function name, if a reconstruction hook is present.
    pub factory_function: Option<String>,
    /// Whether a save/restore snapshot payload is present.
    pub has_snapshot: bool,
    /// Whether an opaque constructor expression is present.
    pub has_opaque_repr: bool,
}

impl ReferenceDescriptor {
    /// True when the reference carries no fields and no hooks at all.
    pub fn is_plain_empty(&self) -> bool {
        self.declared_fields.is_empty()
            && self.dynamic_fields.is_empty()
            && self.factory_function.is_none()
            && !self.has_snapshot
            && !self.has_opaque_repr
    }
}

#[derive(Debug, Default)]
struct Body {
    fields: Vec<Field>,
    factory: Option<Factory>,
    snapshot: Option<Value>,
    opaque_repr: Option<String>,
}

struct Inner {
    class_name: String,
    body: RefCell<Body>,
}

/// An identity-bearing, structurally-opaque entity.
#[derive(Clone)]
pub struct ReferenceValue {
    inner: Rc<Inner>,
}

impl ReferenceValue {
    /// Create a reference of the given class with no fields or hooks.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                class_name: class_name.into(),
                body: RefCell::new(Body::default()),
            }),
        }
    }

    /// Append a declared field.
    pub fn with_field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inner.body.borrow_mut().fields.push(Field {
            name: name.into(),
            value: value.into(),
            declared: true,
        });
        self
    }

    /// Append an ad-hoc field not declared on the type.
    pub fn with_dynamic_field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inner.body.borrow_mut().fields.push(Field {
            name: name.into(),
            value: value.into(),
            declared: false,
        });
        self
    }

    /// Attach a reconstruction hook: `function(state)` rebuilds the value.
    pub fn with_factory(self, function: impl Into<String>, state: impl Into<Value>) -> Self {
        self.inner.body.borrow_mut().factory = Some(Factory {
            function: function.into(),
            state: state.into(),
        });
        self
    }

    /// Attach a save/restore snapshot payload.
    pub fn with_snapshot(self, payload: impl Into<Value>) -> Self {
        self.inner.body.borrow_mut().snapshot = Some(payload.into());
        self
    }

    /// Attach an opaque constructor expression for internal kinds.
    pub fn with_opaque_repr(self, expr: impl Into<String>) -> Self {
        self.inner.body.borrow_mut().opaque_repr = Some(expr.into());
        self
    }

    /// Append a declared field on an existing (possibly shared) reference.
    ///
    /// This is how self-referential graphs are tied: create the reference,
    /// then set a field holding a clone of it.
    pub fn set_field(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.inner.body.borrow_mut().fields.push(Field {
            name: name.into(),
            value: value.into(),
            declared: true,
        });
    }

    /// Class/kind name of the reference.
    pub fn class_name(&self) -> &str {
        &self.inner.class_name
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> Ref<'_, [Field]> {
        Ref::map(self.inner.body.borrow(), |b| b.fields.as_slice())
    }

    /// Reconstruction hook, if any.
    pub fn factory(&self) -> Option<Ref<'_, Factory>> {
        Ref::filter_map(self.inner.body.borrow(), |b| b.factory.as_ref()).ok()
    }

    /// Save/restore snapshot payload, if any.
    pub fn snapshot(&self) -> Option<Ref<'_, Value>> {
        Ref::filter_map(self.inner.body.borrow(), |b| b.snapshot.as_ref()).ok()
    }

    /// Opaque constructor expression, if any.
    pub fn opaque_repr(&self) -> Option<Ref<'_, String>> {
        Ref::filter_map(self.inner.body.borrow(), |b| b.opaque_repr.as_ref()).ok()
    }

    /// Extract the shape descriptor consumed by strategy predicates.
    pub fn descriptor(&self) -> ReferenceDescriptor {
        let body = self.inner.body.borrow();
        ReferenceDescriptor {
            class_name: self.inner.class_name.clone(),
            declared_fields: body
                .fields
                .iter()
                .filter(|f| f.declared)
                .map(|f| f.name.clone())
                .collect(),
            dynamic_fields: body
                .fields
                .iter()
                .filter(|f| !f.declared)
                .map(|f| f.name.clone())
                .collect(),
            factory_function: body.factory.as_ref().map(|f| f.function.clone()),
            has_snapshot: body.snapshot.is_some(),
            has_opaque_repr: body.opaque_repr.is_some(),
        }
    }

    /// Stable in-memory address, the raw input to per-session interning.
    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }
}

/// Identity equality: two handles are equal iff they point at the same
/// entity. Field contents are not compared.
impl PartialEq for ReferenceValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ReferenceValue {}

// Shallow on purpose: a derived Debug would recurse forever on cyclic
// graphs.
impl fmt::Debug for ReferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReferenceValue({}, {} fields)",
            self.inner.class_name,
            self.inner.body.borrow().fields.len()
        )
    }
}
