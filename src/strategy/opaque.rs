//! Built-in strategy for internal kinds with a canned constructor form.
//!
//! Some reference kinds cannot be rebuilt field by field; the runtime
//! registers a ready-made constructor expression on them instead. This
//! strategy emits that expression verbatim as a single line.

use crate::exporter::ExportError;
use crate::session::AncestorStack;
use crate::strategy::{NestedExporter, Strategy};
use crate::types::{ExportPath, ReferenceDescriptor, ReferenceValue};

/// Encodes references via their opaque constructor expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueReprStrategy;

impl Strategy for OpaqueReprStrategy {
    fn name(&self) -> &'static str {
        "opaque"
    }

    fn supports(&self, descriptor: &ReferenceDescriptor) -> bool {
        descriptor.has_opaque_repr
    }

    fn encode(
        &self,
        reference: &ReferenceValue,
        _descriptor: &ReferenceDescriptor,
        _path: &ExportPath,
        _ancestors: &AncestorStack,
        _core: &mut dyn NestedExporter,
    ) -> Result<Vec<String>, ExportError> {
        let repr = reference
            .opaque_repr()
            .expect("opaque strategy selected for a reference without an opaque repr");
        Ok(vec![repr.clone()])
    }
}
