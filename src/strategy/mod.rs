//! Encoding strategies for reference values.
//!
//! A strategy is a capability: given a pre-extracted shape descriptor it
//! reports whether it can encode a reference, and if selected it produces
//! the reference's textual lines. Strategies recurse into nested field
//! values through the [`NestedExporter`] capability and never see the
//! core's internals.
//!
//! ## Registry order
//!
//! The registry is built once per exporter and its order is significant;
//! the first strategy whose predicate accepts a shape wins:
//!
//! 1. empty reference → `new Class()`
//! 2. opaque constructor expression (internal kinds)
//! 3. factory reconstruction (optional)
//! 4. snapshot save/restore (optional)
//! 5. generic field map (optional catch-all)

pub mod empty;
pub mod factory;
pub mod generic;
pub mod opaque;
pub mod snapshot;

pub use empty::EmptyReferenceStrategy;
pub use factory::FactoryStrategy;
pub use generic::GenericFieldStrategy;
pub use opaque::OpaqueReprStrategy;
pub use snapshot::SnapshotStrategy;

use crate::exporter::ExportError;
use crate::options::ExportOptions;
use crate::session::AncestorStack;
use crate::types::{ExportPath, ReferenceDescriptor, ReferenceValue, Value};

/// The core's recursive export operation, handed to strategies.
///
/// Strategies call this for every nested value they encode; errors from
/// nested traversal must propagate unchanged.
pub trait NestedExporter {
    /// Export a nested value at the given path and ancestor stack.
    fn export_nested(
        &mut self,
        value: &Value,
        path: &ExportPath,
        ancestors: &AncestorStack,
    ) -> Result<Vec<String>, ExportError>;
}

/// A pluggable encoder for one category of reference value.
pub trait Strategy: Send + Sync {
    /// Short stable name, used in logs and precedence tests.
    fn name(&self) -> &'static str;

    /// Whether this strategy can encode a reference of the given shape.
    fn supports(&self, descriptor: &ReferenceDescriptor) -> bool;

    /// Produce the reference's textual lines.
    ///
    /// The ancestor stack already includes the reference's own identity.
    fn encode(
        &self,
        reference: &ReferenceValue,
        descriptor: &ReferenceDescriptor,
        path: &ExportPath,
        ancestors: &AncestorStack,
        core: &mut dyn NestedExporter,
    ) -> Result<Vec<String>, ExportError>;
}

/// Ordered strategy list with first-match dispatch.
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Build the default registry from configuration flags.
    pub fn from_options(options: &ExportOptions) -> Self {
        let mut strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(EmptyReferenceStrategy),
            Box::new(OpaqueReprStrategy),
        ];
        if !options.disable_factory_strategy {
            strategies.push(Box::new(FactoryStrategy));
        }
        if !options.disable_snapshot_strategy {
            strategies.push(Box::new(SnapshotStrategy));
        }
        if !options.disallow_generic_fallback {
            strategies.push(Box::new(GenericFieldStrategy::new(options)));
        }
        Self { strategies }
    }

    /// Build a registry from an explicit strategy list, in dispatch order.
    pub fn with_strategies(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    /// First strategy whose predicate accepts the shape, if any.
    pub fn select(&self, descriptor: &ReferenceDescriptor) -> Option<&dyn Strategy> {
        self.strategies
            .iter()
            .find(|s| s.supports(descriptor))
            .map(|s| s.as_ref())
    }

    /// Strategy names in dispatch order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
