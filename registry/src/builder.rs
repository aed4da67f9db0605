//! RegistryBuilder for constructing an immutable MimeRegistry.

use crate::{BuiltinSource, MimeRegistry, MimeSource, RegistryConfig};
use mimedex_core::{MimeEntry, MimeMap, MimeResult};
use std::borrow::Cow;

/// The entries a registry starts from, before custom layers.
#[derive(Debug, Default)]
enum Base {
    /// The shared built-in database.
    #[default]
    Builtin,
    /// Entries taken from another source.
    Injected(MimeMap),
    /// No base entries.
    Empty,
}

/// Builder for constructing an immutable MimeRegistry.
///
/// Custom entries are kept as an ordered list of layers. At build time each
/// layer is laid over the base entries in the order it was added; a type name
/// that is already present is replaced by the new entry as a whole.
///
/// The built-in database is never copied: the registry borrows it and keeps
/// the custom entries in a separate overlay.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Query options.
    config: RegistryConfig,
    /// Base entries.
    base: Base,
    /// Custom entry layers, applied in order.
    layers: Vec<MimeMap>,
}

impl RegistryBuilder {
    /// Create a new builder over the built-in database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query options. The base entries are left as they are.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the built-in database with another base source.
    pub fn source(mut self, source: &impl MimeSource) -> Self {
        self.base = Base::Injected(source.entries().clone());
        self
    }

    /// Start from no base entries at all.
    pub fn without_builtin(mut self) -> Self {
        self.base = Base::Empty;
        self
    }

    /// Add a layer of custom entries.
    pub fn custom_entries(mut self, entries: MimeMap) -> Self {
        self.layers.push(entries);
        self
    }

    /// Add a layer holding a single custom entry.
    pub fn entry(self, type_name: impl Into<String>, entry: MimeEntry) -> Self {
        let mut layer = MimeMap::new();
        layer.insert(type_name.into(), entry);
        self.custom_entries(layer)
    }

    /// Add a layer of custom entries decoded from a JSON object keyed by
    /// type name.
    pub fn custom_json(self, json: &str) -> MimeResult<Self> {
        let layer: MimeMap = serde_json::from_str(json)?;
        Ok(self.custom_entries(layer))
    }

    /// Build the immutable MimeRegistry.
    pub fn build(self) -> MimeRegistry {
        let base: Cow<'static, MimeMap> = match self.base {
            Base::Builtin => Cow::Borrowed(BuiltinSource::shared()),
            Base::Injected(entries) => Cow::Owned(entries),
            Base::Empty => Cow::Owned(MimeMap::new()),
        };
        let layer_count = self.layers.len();

        // Later layers win; the whole entry is replaced, fields are not merged
        let mut overlay = MimeMap::new();
        let mut overridden = 0usize;
        for layer in self.layers {
            for (type_name, entry) in layer {
                if base.contains_key(&type_name) || overlay.contains_key(&type_name) {
                    overridden += 1;
                    tracing::trace!(type_name = %type_name, "custom entry replaces existing entry");
                }
                overlay.insert(type_name, entry);
            }
        }

        let registry = MimeRegistry::new(base, overlay, self.config);
        tracing::debug!(
            layers = layer_count,
            overridden,
            total = registry.len(),
            "built mime registry"
        );
        registry
    }
}
