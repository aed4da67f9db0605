//! Configuration for registry queries

/// Configuration for registry queries
///
/// Which base entries a registry starts from is chosen on the
/// [`RegistryBuilder`](crate::RegistryBuilder), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Let types sharing a subtype token resolve each other's extensions
    pub alias_shared_subtypes: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            alias_shared_subtypes: true,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aliasing(mut self, alias: bool) -> Self {
        self.alias_shared_subtypes = alias;
        self
    }

    /// Literal extension matches only.
    pub fn strict() -> Self {
        Self {
            alias_shared_subtypes: false,
        }
    }
}
