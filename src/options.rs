//! Export configuration flags.
//!
//! Options are read twice: once when the strategy registry is built (the
//! three `disable_*`/`disallow_*` flags remove strategies from the
//! registry) and once when strategies themselves are constructed (the two
//! cross-cutting toggles `add_type_hints` and `skip_dynamic_fields`).

use serde::{Deserialize, Serialize};

/// Configuration bundle for one exporter.
///
/// The default has every flag off: all built-in strategies enabled, no
/// type hints, dynamic fields exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Let strategies annotate reconstructed references with explicit
    /// type information.
    pub add_type_hints: bool,
    /// Omit fields not declared as part of a reference's static
    /// structure.
    pub skip_dynamic_fields: bool,
    /// Remove the factory (reconstruct-via-named-function) strategy from
    /// the registry.
    pub disable_factory_strategy: bool,
    /// Remove the snapshot (save/restore protocol) strategy from the
    /// registry.
    pub disable_snapshot_strategy: bool,
    /// Remove the catch-all generic strategy; unsupported shapes then
    /// fail instead of falling back.
    pub disallow_generic_fallback: bool,
}

impl ExportOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable type hints on reconstructed references.
    pub fn with_type_hints(mut self) -> Self {
        self.add_type_hints = true;
        self
    }

    /// Skip fields not declared on the type.
    pub fn with_skip_dynamic_fields(mut self) -> Self {
        self.skip_dynamic_fields = true;
        self
    }

    /// Disable the factory strategy.
    pub fn without_factory_strategy(mut self) -> Self {
        self.disable_factory_strategy = true;
        self
    }

    /// Disable the snapshot strategy.
    pub fn without_snapshot_strategy(mut self) -> Self {
        self.disable_snapshot_strategy = true;
        self
    }

    /// Disable the catch-all generic strategy.
    pub fn without_generic_fallback(mut self) -> Self {
        self.disallow_generic_fallback = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let options = ExportOptions::default();
        assert!(!options.add_type_hints);
        assert!(!options.skip_dynamic_fields);
        assert!(!options.disable_factory_strategy);
        assert!(!options.disable_snapshot_strategy);
        assert!(!options.disallow_generic_fallback);
    }

    #[test]
    fn test_builders_compose() {
        let options = ExportOptions::new()
            .with_type_hints()
            .without_generic_fallback();
        assert!(options.add_type_hints);
        assert!(options.disallow_generic_fallback);
        assert!(!options.skip_dynamic_fields);
    }

    #[test]
    fn test_serde_round_trip() {
        let options = ExportOptions::new().with_skip_dynamic_fields();
        let json = serde_json::to_string(&options).unwrap();
        let back: ExportOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
