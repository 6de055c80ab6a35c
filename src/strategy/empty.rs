//! Built-in strategy for references with nothing to reconstruct.

use crate::exporter::ExportError;
use crate::session::AncestorStack;
use crate::strategy::{NestedExporter, Strategy};
use crate::types::{ExportPath, ReferenceDescriptor, ReferenceValue};

/// Encodes references carrying no fields and no hooks as `new Class()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyReferenceStrategy;

impl Strategy for EmptyReferenceStrategy {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn supports(&self, descriptor: &ReferenceDescriptor) -> bool {
        descriptor.is_plain_empty()
    }

    fn encode(
        &self,
        _reference: &ReferenceValue,
        descriptor: &ReferenceDescriptor,
        _path: &ExportPath,
        _ancestors: &AncestorStack,
        _core: &mut dyn NestedExporter,
    ) -> Result<Vec<String>, ExportError> {
        Ok(vec![format!("new {}()", descriptor.class_name)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::Exporter;
    use crate::options::ExportOptions;
    use crate::types::Value;

    #[test]
    fn test_empty_reference_renders_constructor() {
        let exporter = Exporter::new(ExportOptions::default());
        let value = Value::Reference(ReferenceValue::new("Marker"));
        assert_eq!(exporter.export(&value).unwrap(), "new Marker()");
    }

    #[test]
    fn test_reference_with_field_is_not_supported() {
        let descriptor = ReferenceValue::new("Config")
            .with_field("a", Value::Int(1))
            .descriptor();
        assert!(!EmptyReferenceStrategy.supports(&descriptor));
    }
}
