//! The exporter core.
//!
//! Recursive dispatcher over [`Value`] kinds: scalars render directly,
//! composites go through the composite traversal, references run the
//! tracking + strategy pipeline. Strategies re-enter the core through the
//! [`NestedExporter`] capability.
//!
//! ## Algorithm (references)
//!
//! 1. Intern the instance into its per-session identity
//! 2. Scan every enclosing ancestor's child record for that identity;
//!    a hit is a circular or shared reference and aborts the export
//! 3. Record the identity under every ancestor (first-seen path wins)
//! 4. Dispatch to the first strategy accepting the reference's shape,
//!    with the ancestor stack extended by this identity
//!
//! Rejecting *any* repeated identity under an enclosing ancestor is
//! deliberate over-approximation: the output replays independent
//! constructor code, so a second occurrence could only ever reconstruct a
//! non-identical copy.

use crate::literal;
use crate::options::ExportOptions;
use crate::session::{AncestorStack, ExportSession};
use crate::strategy::{NestedExporter, StrategyRegistry};
use crate::text::{indent, wrap};
use crate::types::{Composite, ExportPath, ReferenceValue, Value};

/// Error type for export operations.
///
/// Every variant carries the graph path at the point of failure. Failures
/// are fail-fast: the export aborts and no partial output escapes.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Value's runtime kind has no rendering rule.
    #[error("unsupported runtime kind `{kind}` at {path}")]
    UnsupportedKind {
        /// The unrenderable kind, e.g. a handle kind like `socket`.
        kind: String,
        /// Where the value sits in the graph.
        path: ExportPath,
    },
    /// An identity already seen under an enclosing ancestor reappeared.
    #[error("circular or shared reference to `{class_name}` at {path}, first seen at {first_seen}")]
    CircularOrSharedReference {
        /// Class name of the revisited reference.
        class_name: String,
        /// Where the identity was first recorded under that ancestor.
        first_seen: ExportPath,
        /// Where it reappeared.
        path: ExportPath,
    },
    /// No enabled strategy accepts the reference's shape.
    #[error("no enabled strategy accepts `{class_name}` at {path}")]
    NoApplicableStrategy {
        /// Class name of the unhandled reference.
        class_name: String,
        /// Where the value sits in the graph.
        path: ExportPath,
    },
}

impl ExportError {
    /// The graph path at the point of failure.
    pub fn path(&self) -> &ExportPath {
        match self {
            Self::UnsupportedKind { path, .. } => path,
            Self::CircularOrSharedReference { path, .. } => path,
            Self::NoApplicableStrategy { path, .. } => path,
        }
    }
}

/// Value-to-source exporter.
///
/// Immutable after construction and shareable across threads; every
/// [`export`](Self::export) call runs on a fresh private session, so
/// concurrent exports never share cycle-tracking state.
pub struct Exporter {
    registry: StrategyRegistry,
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter with the default registry built from `options`.
    pub fn new(options: ExportOptions) -> Self {
        let registry = StrategyRegistry::from_options(&options);
        Self { registry, options }
    }

    /// Create an exporter over an explicit registry.
    ///
    /// Used for custom strategy sets and test doubles; `options` is kept
    /// for inspection but the registry is taken as-is.
    pub fn with_registry(registry: StrategyRegistry, options: ExportOptions) -> Self {
        Self { registry, options }
    }

    /// The configuration this exporter was built with.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// The strategy registry in dispatch order.
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Export a value as line-joined source text (no trailing separator).
    pub fn export(&self, value: &Value) -> Result<String, ExportError> {
        Ok(self.export_lines(value)?.join("\n"))
    }

    /// Export a value as an ordered sequence of source lines.
    pub fn export_lines(&self, value: &Value) -> Result<Vec<String>, ExportError> {
        let mut run = ExportRun {
            session: ExportSession::new(),
            registry: &self.registry,
        };
        run.export_node(value, &ExportPath::root(), &AncestorStack::new())
    }
}

/// Export a value with the given options.
///
/// Convenience for one-shot use; building an [`Exporter`] amortizes the
/// registry construction across calls.
pub fn export_value(value: &Value, options: &ExportOptions) -> Result<String, ExportError> {
    Exporter::new(options.clone()).export(value)
}

/// One in-flight export: fresh session plus the exporter's registry.
struct ExportRun<'a> {
    session: ExportSession,
    registry: &'a StrategyRegistry,
}

impl ExportRun<'_> {
    fn export_node(
        &mut self,
        value: &Value,
        path: &ExportPath,
        ancestors: &AncestorStack,
    ) -> Result<Vec<String>, ExportError> {
        tracing::trace!(path = %path, kind = %value.kind(), "exporting node");
        match value {
            Value::Null => Ok(vec![literal::null()]),
            Value::Bool(b) => Ok(vec![literal::bool(*b)]),
            Value::Int(i) => Ok(vec![literal::int(*i)]),
            Value::Float(f) => Ok(vec![literal::float(*f)]),
            Value::Text(s) => Ok(vec![literal::text(s)]),
            Value::Composite(c) => self.export_composite(c, path, ancestors),
            Value::Reference(r) => self.export_reference(r, path, ancestors),
            Value::Resource { kind } => Err(ExportError::UnsupportedKind {
                kind: kind.clone(),
                path: path.clone(),
            }),
        }
    }

    fn export_composite(
        &mut self,
        composite: &Composite,
        path: &ExportPath,
        ancestors: &AncestorStack,
    ) -> Result<Vec<String>, ExportError> {
        if composite.is_empty() {
            return Ok(vec!["[]".to_string()]);
        }

        // Key style is decided once for the whole composite.
        let keyed = !composite.is_positional();
        let count = composite.len();

        let mut out = vec!["[".to_string()];
        for (i, (key, value)) in composite.entries().iter().enumerate() {
            let child_path = path.child(key.as_path_segment());
            let lines = self.export_node(value, &child_path, ancestors)?;
            let prefix = if keyed {
                format!("{} => ", literal::key(key))
            } else {
                String::new()
            };
            let suffix = if i + 1 < count { "," } else { "" };
            out.extend(indent(wrap(lines, &prefix, suffix)));
        }
        out.push("]".to_string());
        Ok(out)
    }

    fn export_reference(
        &mut self,
        reference: &ReferenceValue,
        path: &ExportPath,
        ancestors: &AncestorStack,
    ) -> Result<Vec<String>, ExportError> {
        let id = self.session.identify(reference);

        if let Some(conflict) = self.session.find_conflict(ancestors, id) {
            tracing::warn!(
                class = reference.class_name(),
                ancestor = %conflict.ancestor,
                first_seen = %conflict.first_seen,
                path = %path,
                "circular or shared reference rejected"
            );
            return Err(ExportError::CircularOrSharedReference {
                class_name: reference.class_name().to_string(),
                first_seen: conflict.first_seen,
                path: path.clone(),
            });
        }
        self.session.record_child(ancestors, id, path);

        let descriptor = reference.descriptor();
        let registry = self.registry;
        let Some(strategy) = registry.select(&descriptor) else {
            return Err(ExportError::NoApplicableStrategy {
                class_name: descriptor.class_name,
                path: path.clone(),
            });
        };
        tracing::debug!(
            class = %descriptor.class_name,
            strategy = strategy.name(),
            path = %path,
            "strategy selected"
        );

        let extended = ancestors.extend(id);
        strategy.encode(reference, &descriptor, path, &extended, self)
    }
}

impl NestedExporter for ExportRun<'_> {
    fn export_nested(
        &mut self,
        value: &Value,
        path: &ExportPath,
        ancestors: &AncestorStack,
    ) -> Result<Vec<String>, ExportError> {
        self.export_node(value, path, ancestors)
    }
}
