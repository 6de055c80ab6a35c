//! # export-kernel
//!
//! Deterministic value-to-source export for possibly cyclic value graphs.
//!
//! The export kernel answers one question:
//!
//! > Given a runtime value, what source text reconstructs an equivalent
//! > value when evaluated?
//!
//! ## Core Contract
//!
//! 1. Export a [`Value`] graph as correctly indented, syntactically valid
//!    source lines (joined with `\n`, no trailing separator)
//! 2. Detect circular and shared references by identity across the
//!    **whole** ancestor chain, and reject them with a structured error
//! 3. Encode reference-typed values through an ordered, pluggable
//!    strategy registry with first-match dispatch
//!
//! ## Architecture
//!
//! ```text
//! Value → Exporter Core → Composite Exporter → Text Formatter
//!              ↓
//!       Reference Tracker → Strategy Registry → Strategy::encode
//!              ↑                                       │
//!              └────────── NestedExporter ◄────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - Same value + same options → identical output text
//! - A failure aborts the whole export; no partial output escapes
//! - A repeated reference under any enclosing ancestor is rejected, never
//!   silently duplicated
//! - Every export call runs on a fresh, single-use tracking session

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod exporter;
pub mod literal;
pub mod options;
pub mod session;
pub mod strategy;
pub mod text;
pub mod types;

// Re-exports
pub use exporter::{export_value, ExportError, Exporter};
pub use options::ExportOptions;
pub use session::{AncestorStack, ReferenceId};
pub use strategy::{
    EmptyReferenceStrategy, FactoryStrategy, GenericFieldStrategy, NestedExporter,
    OpaqueReprStrategy, SnapshotStrategy, Strategy, StrategyRegistry,
};
pub use text::{indent, wrap, INDENT_UNIT};
pub use types::{
    Composite, CompositeKey, ExportPath, Factory, Field, ReferenceDescriptor, ReferenceValue,
    Value, ValueKind,
};
