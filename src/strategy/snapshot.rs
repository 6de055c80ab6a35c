//! Built-in strategy for the save/restore protocol.

use crate::exporter::ExportError;
use crate::session::AncestorStack;
use crate::strategy::{NestedExporter, Strategy};
use crate::text::wrap;
use crate::types::{ExportPath, ReferenceDescriptor, ReferenceValue};

/// Encodes references as `Class::restore(<payload>)`.
///
/// The payload is the value the reference saved through its snapshot
/// hook; it is exported through the core callback like any nested value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotStrategy;

impl Strategy for SnapshotStrategy {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn supports(&self, descriptor: &ReferenceDescriptor) -> bool {
        descriptor.has_snapshot
    }

    fn encode(
        &self,
        reference: &ReferenceValue,
        descriptor: &ReferenceDescriptor,
        path: &ExportPath,
        ancestors: &AncestorStack,
        core: &mut dyn NestedExporter,
    ) -> Result<Vec<String>, ExportError> {
        let payload = reference
            .snapshot()
            .expect("snapshot strategy selected for a reference without a snapshot");
        let lines = core.export_nested(&payload, path, ancestors)?;
        Ok(wrap(
            lines,
            &format!("{}::restore(", descriptor.class_name),
            ")",
        ))
    }
}
