//! Catch-all strategy: export a reference as a keyed field map.
//!
//! The fallback when no richer reconstruction form exists. The class name
//! is lost in the bare form; `add_type_hints` recovers it by prepending an
//! `'@type'` entry.

use crate::exporter::ExportError;
use crate::options::ExportOptions;
use crate::session::AncestorStack;
use crate::strategy::{NestedExporter, Strategy};
use crate::text::{indent, wrap};
use crate::types::{ExportPath, ReferenceDescriptor, ReferenceValue};
use crate::literal;

/// Encodes any reference as `[ 'field' => value, … ]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericFieldStrategy {
    add_type_hints: bool,
    skip_dynamic_fields: bool,
}

impl GenericFieldStrategy {
    /// Create the strategy with the cross-cutting toggles baked in.
    pub fn new(options: &ExportOptions) -> Self {
        Self {
            add_type_hints: options.add_type_hints,
            skip_dynamic_fields: options.skip_dynamic_fields,
        }
    }
}

impl Strategy for GenericFieldStrategy {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn supports(&self, _descriptor: &ReferenceDescriptor) -> bool {
        true
    }

    fn encode(
        &self,
        reference: &ReferenceValue,
        descriptor: &ReferenceDescriptor,
        path: &ExportPath,
        ancestors: &AncestorStack,
        core: &mut dyn NestedExporter,
    ) -> Result<Vec<String>, ExportError> {
        let fields = reference.fields();

        let mut entries: Vec<Vec<String>> = Vec::new();
        if self.add_type_hints {
            entries.push(vec![format!(
                "{} => {}",
                literal::text("@type"),
                literal::text(&descriptor.class_name)
            )]);
        }
        for field in fields.iter() {
            if self.skip_dynamic_fields && !field.declared {
                continue;
            }
            let lines = core.export_nested(&field.value, &path.child(field.name.as_str()), ancestors)?;
            entries.push(wrap(lines, &format!("{} => ", literal::text(&field.name)), ""));
        }

        if entries.is_empty() {
            return Ok(vec!["[]".to_string()]);
        }

        let mut out = vec!["[".to_string()];
        let count = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let suffix = if i + 1 < count { "," } else { "" };
            out.extend(indent(wrap(entry, "", suffix)));
        }
        out.push("]".to_string());
        Ok(out)
    }
}
