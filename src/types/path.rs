//! Graph paths for diagnostics.
//!
//! A path locates a value within the exported graph (root → key "a" →
//! index "2"). Paths are carried through the recursion and surface in
//! error messages and cycle reports; they never influence what gets
//! rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered segments locating a value within the root graph.
///
/// The root value has the empty path, which displays as `(root)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPath(Vec<String>);

impl ExportPath {
    /// The empty path of the root value.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Extend the path by one segment, returning the child path.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// The path segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments (graph depth of the located value).
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ExportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.0.join("."))
        }
    }
}

impl From<Vec<String>> for ExportPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(ExportPath::root().to_string(), "(root)");
        assert!(ExportPath::root().is_root());
    }

    #[test]
    fn test_child_extends() {
        let path = ExportPath::root().child("a").child("2");
        assert_eq!(path.segments(), &["a", "2"]);
        assert_eq!(path.to_string(), "a.2");
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_child_leaves_parent_untouched() {
        let parent = ExportPath::root().child("a");
        let _child = parent.child("b");
        assert_eq!(parent.segments(), &["a"]);
    }
}
