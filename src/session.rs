//! Per-export reference tracking.
//!
//! One [`ExportSession`] lives for exactly one top-level export call. It
//! interns reference addresses into stable [`ReferenceId`]s and records,
//! for every identity ever seen as an ancestor, which descendant
//! identities have appeared beneath it and where they were first seen.
//! That record is what turns a second encounter of an identity under any
//! enclosing ancestor into a structured failure instead of an infinite
//! loop or a silently duplicated instance.
//!
//! Sessions are single-use by construction: the type is crate-private,
//! created fresh inside each export, and has no reset operation. Reusing
//! one across unrelated exports would let stale child records falsely
//! reject unrelated graphs.

use std::collections::HashMap;
use std::fmt;

use crate::types::{ExportPath, ReferenceValue};

/// Stable per-session identity of a reference instance.
///
/// Assigned the first time an instance is seen within a session; two
/// handles to the same instance always intern to the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceId(u64);

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identities of all enclosing references, root-most first.
///
/// Grows by value on entry into a reference: [`extend`](Self::extend)
/// returns a new stack, so each recursive call owns its own view and the
/// stack conceptually shrinks on exit.
#[derive(Debug, Clone, Default)]
pub struct AncestorStack(Vec<ReferenceId>);

impl AncestorStack {
    /// The empty stack of the root value.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new stack with `id` appended as the innermost ancestor.
    pub fn extend(&self, id: ReferenceId) -> Self {
        let mut ids = self.0.clone();
        ids.push(id);
        Self(ids)
    }

    /// Ancestor identities, root-most first.
    pub fn iter(&self) -> impl Iterator<Item = ReferenceId> + '_ {
        self.0.iter().copied()
    }

    /// Number of enclosing references.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether the current value has no enclosing reference.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A detected circular or shared reference.
#[derive(Debug)]
pub(crate) struct Conflict {
    /// The ancestor under which the identity was already recorded.
    pub ancestor: ReferenceId,
    /// Where the identity first appeared under that ancestor.
    pub first_seen: ExportPath,
}

/// Identity interner plus child registry for one export call.
pub(crate) struct ExportSession {
    interner: HashMap<usize, ReferenceId>,
    next_id: u64,
    children: HashMap<ReferenceId, HashMap<ReferenceId, ExportPath>>,
}

impl ExportSession {
    /// Create a fresh session for one top-level export.
    pub(crate) fn new() -> Self {
        Self {
            interner: HashMap::new(),
            next_id: 0,
            children: HashMap::new(),
        }
    }

    /// Intern a reference instance, assigning an id on first sight.
    pub(crate) fn identify(&mut self, reference: &ReferenceValue) -> ReferenceId {
        let address = reference.address();
        if let Some(id) = self.interner.get(&address) {
            return *id;
        }
        let id = ReferenceId(self.next_id);
        self.next_id += 1;
        self.interner.insert(address, id);
        id
    }

    /// Scan the whole ancestor chain for a prior sighting of `id`.
    ///
    /// Returns the first conflicting ancestor (root-most wins) together
    /// with the path at which `id` was first recorded under it.
    pub(crate) fn find_conflict(
        &self,
        ancestors: &AncestorStack,
        id: ReferenceId,
    ) -> Option<Conflict> {
        for ancestor in ancestors.iter() {
            if let Some(first_seen) = self.children.get(&ancestor).and_then(|c| c.get(&id)) {
                return Some(Conflict {
                    ancestor,
                    first_seen: first_seen.clone(),
                });
            }
        }
        None
    }

    /// Record `id` as a child of every ancestor in the stack.
    ///
    /// First-seen only: an already-recorded path is never overwritten.
    pub(crate) fn record_child(
        &mut self,
        ancestors: &AncestorStack,
        id: ReferenceId,
        path: &ExportPath,
    ) {
        for ancestor in ancestors.iter() {
            self.children
                .entry(ancestor)
                .or_default()
                .entry(id)
                .or_insert_with(|| path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_is_stable_per_instance() {
        let mut session = ExportSession::new();
        let a = ReferenceValue::new("A");
        let b = ReferenceValue::new("B");

        let id_a = session.identify(&a);
        let id_b = session.identify(&b);
        assert_ne!(id_a, id_b);
        assert_eq!(session.identify(&a), id_a);
        assert_eq!(session.identify(&a.clone()), id_a);
    }

    #[test]
    fn test_conflict_detected_under_any_ancestor() {
        let mut session = ExportSession::new();
        let outer = session.identify(&ReferenceValue::new("Outer"));
        let inner = session.identify(&ReferenceValue::new("Inner"));
        let child = session.identify(&ReferenceValue::new("Child"));

        let stack = AncestorStack::new().extend(outer).extend(inner);
        let first = ExportPath::root().child("a");
        session.record_child(&stack, child, &first);

        // Seen again under the outer ancestor alone, far from `inner`.
        let other_stack = AncestorStack::new().extend(outer);
        let conflict = session.find_conflict(&other_stack, child).unwrap();
        assert_eq!(conflict.ancestor, outer);
        assert_eq!(conflict.first_seen, first);
    }

    #[test]
    fn test_no_conflict_without_record() {
        let mut session = ExportSession::new();
        let outer = session.identify(&ReferenceValue::new("Outer"));
        let child = session.identify(&ReferenceValue::new("Child"));
        let stack = AncestorStack::new().extend(outer);
        assert!(session.find_conflict(&stack, child).is_none());
    }

    #[test]
    fn test_first_seen_path_never_overwritten() {
        let mut session = ExportSession::new();
        let outer = session.identify(&ReferenceValue::new("Outer"));
        let child = session.identify(&ReferenceValue::new("Child"));
        let stack = AncestorStack::new().extend(outer);

        let first = ExportPath::root().child("first");
        let second = ExportPath::root().child("second");
        session.record_child(&stack, child, &first);
        session.record_child(&stack, child, &second);

        let conflict = session.find_conflict(&stack, child).unwrap();
        assert_eq!(conflict.first_seen, first);
    }

    #[test]
    fn test_root_most_ancestor_wins() {
        let mut session = ExportSession::new();
        let outer = session.identify(&ReferenceValue::new("Outer"));
        let inner = session.identify(&ReferenceValue::new("Inner"));
        let child = session.identify(&ReferenceValue::new("Child"));

        let stack = AncestorStack::new().extend(outer).extend(inner);
        session.record_child(&stack, child, &ExportPath::root().child("x"));

        let conflict = session.find_conflict(&stack, child).unwrap();
        assert_eq!(conflict.ancestor, outer);
    }
}
