//! Built-in strategy for references reconstructed via a named factory.

use crate::exporter::ExportError;
use crate::session::AncestorStack;
use crate::strategy::{NestedExporter, Strategy};
use crate::text::wrap;
use crate::types::{ExportPath, ReferenceDescriptor, ReferenceValue};

/// Encodes references as `function(<state>)`.
///
/// The state value is exported through the core callback, so nested
/// references inside it run through the full tracking pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryStrategy;

impl Strategy for FactoryStrategy {
    fn name(&self) -> &'static str {
        "factory"
    }

    fn supports(&self, descriptor: &ReferenceDescriptor) -> bool {
        descriptor.factory_function.is_some()
    }

    fn encode(
        &self,
        reference: &ReferenceValue,
        _descriptor: &ReferenceDescriptor,
        path: &ExportPath,
        ancestors: &AncestorStack,
        core: &mut dyn NestedExporter,
    ) -> Result<Vec<String>, ExportError> {
        let factory = reference
            .factory()
            .expect("factory strategy selected for a reference without a factory");
        let state = core.export_nested(&factory.state, path, ancestors)?;
        Ok(wrap(state, &format!("{}(", factory.function), ")"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::Exporter;
    use crate::options::ExportOptions;
    use crate::types::{Composite, Value};

    #[test]
    fn test_factory_wraps_scalar_state() {
        let exporter = Exporter::new(ExportOptions::default());
        let value = Value::Reference(
            ReferenceValue::new("Port").with_factory("Port::fromNumber", Value::Int(8080)),
        );
        assert_eq!(exporter.export(&value).unwrap(), "Port::fromNumber(8080)");
    }

    #[test]
    fn test_factory_wraps_composite_state() {
        let exporter = Exporter::new(ExportOptions::default());
        let state = Composite::new().with("host", Value::Text("localhost".into()));
        let value = Value::Reference(
            ReferenceValue::new("Endpoint").with_factory("Endpoint::fromState", state),
        );
        let expected = "\
Endpoint::fromState([
    'host' => 'localhost'
])";
        assert_eq!(exporter.export(&value).unwrap(), expected);
    }

    #[test]
    fn test_factory_beats_snapshot_and_generic() {
        let exporter = Exporter::new(ExportOptions::default());
        let value = Value::Reference(
            ReferenceValue::new("Both")
                .with_factory("Both::make", Value::Null)
                .with_snapshot(Value::Int(1))
                .with_field("x", Value::Int(2)),
        );
        assert_eq!(exporter.export(&value).unwrap(), "Both::make(null)");
    }
}
