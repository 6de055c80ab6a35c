//! Core types for the export kernel.

pub mod composite;
pub mod path;
pub mod reference;
pub mod value;

pub use composite::{Composite, CompositeKey};
pub use path::ExportPath;
pub use reference::{Factory, Field, ReferenceDescriptor, ReferenceValue};
pub use value::{Value, ValueKind};
