//! The MimeRegistry - immutable extension and type lookup.

use crate::{RegistryBuilder, RegistryConfig};
use mimedex_core::{
    dedup_by_value, extension_of, main_type_of, subtype_of, MimeEntry, MimeMap, MimeResult,
};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// The MimeRegistry provides lookup between file extensions and MIME types.
///
/// It is immutable after construction: every query takes `&self`, so a
/// registry can be shared across threads once built. Construction consumes a
/// [`RegistryBuilder`], so no reader can observe a half-built registry.
///
/// Queries that match nothing return `None`. A collection returned in `Some`
/// is never empty.
#[derive(Debug, Clone)]
pub struct MimeRegistry {
    /// Base entries by type name; borrowed when built on the built-in database.
    base: Cow<'static, MimeMap>,
    /// Custom entries by type name. These shadow base entries of the same name.
    overlay: MimeMap,
    /// Number of distinct type names across base and overlay.
    len: usize,
    /// Options the registry was built with.
    config: RegistryConfig,
}

impl MimeRegistry {
    pub(crate) fn new(
        base: Cow<'static, MimeMap>,
        overlay: MimeMap,
        config: RegistryConfig,
    ) -> Self {
        let added = overlay.keys().filter(|name| !base.contains_key(*name)).count();
        Self {
            len: base.len() + added,
            base,
            overlay,
            config,
        }
    }

    /// Create a registry over the built-in database.
    pub fn builtin() -> Self {
        RegistryBuilder::new().build()
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Create a registry over the built-in database with custom entry layers
    /// applied in order.
    pub fn with_custom(layers: impl IntoIterator<Item = MimeMap>) -> Self {
        layers
            .into_iter()
            .fold(RegistryBuilder::new(), RegistryBuilder::custom_entries)
            .build()
    }

    /// Get the options the registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ==================== Type Lookups ====================

    /// Get the entry for a type name.
    pub fn get_mime_entry(&self, type_name: &str) -> Option<&MimeEntry> {
        self.overlay.get(type_name).or_else(|| self.base.get(type_name))
    }

    /// Get the distinct extensions of a type.
    ///
    /// Returns `None` if the type is unknown or lists no extensions.
    pub fn get_all_extensions(&self, type_name: &str) -> Option<BTreeSet<&str>> {
        let extensions: BTreeSet<&str> = self
            .get_mime_entry(type_name)?
            .extensions
            .as_ref()?
            .iter()
            .map(String::as_str)
            .collect();
        (!extensions.is_empty()).then_some(extensions)
    }

    /// Get the first listed extension of a type.
    pub fn primary_extension(&self, type_name: &str) -> Option<&str> {
        self.get_mime_entry(type_name)?.primary_extension()
    }

    /// Get the compressible flag of a type, if the entry records one.
    pub fn is_compressible(&self, type_name: &str) -> Option<bool> {
        self.get_mime_entry(type_name)?.compressible
    }

    /// Check if a type name is registered.
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.overlay.contains_key(type_name) || self.base.contains_key(type_name)
    }

    /// Get all entries: base entries not shadowed by a custom entry, then the
    /// custom entries. Each group is ordered by type name.
    pub fn all_types(&self) -> impl Iterator<Item = (&str, &MimeEntry)> {
        self.base
            .iter()
            .filter(move |(name, _)| !self.overlay.contains_key(*name))
            .chain(self.overlay.iter())
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Get the number of types.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ==================== Extension Lookups ====================

    /// Get the types of an extension or of a path's extension.
    ///
    /// A type matches when its entry lists the extension. When aliasing is
    /// enabled, every type whose subtype token equals that of a match is
    /// added too, whatever its main type and whether or not it lists the
    /// extension itself: `js` gives both `application/javascript` and
    /// `text/javascript`.
    pub fn get_types_by_extension(&self, ext_or_path: &str) -> MimeResult<Option<BTreeSet<&str>>> {
        let ext = extension_of(ext_or_path)?;

        let mut types: BTreeSet<&str> = self
            .all_types()
            .filter(|(_, entry)| entry.has_extension(ext))
            .map(|(name, _)| name)
            .collect();

        if self.config.alias_shared_subtypes && !types.is_empty() {
            // Aliases share a token already in the set, so one pass is closed
            let subtypes: BTreeSet<&str> = types.iter().copied().filter_map(subtype_of).collect();
            types.extend(self.all_types().map(|(name, _)| name).filter(|name| {
                subtype_of(name).is_some_and(|sub| subtypes.contains(sub))
            }));
        }

        tracing::trace!(ext, matches = types.len(), "resolved types by extension");
        Ok((!types.is_empty()).then_some(types))
    }

    /// Get the entries of every type matching an extension, keyed by type name.
    ///
    /// Equal entries reached through different type names stay separate.
    pub fn get_mime_entries_by_ext(
        &self,
        ext_or_path: &str,
    ) -> MimeResult<Option<BTreeMap<&str, &MimeEntry>>> {
        let Some(types) = self.get_types_by_extension(ext_or_path)? else {
            return Ok(None);
        };
        let entries: BTreeMap<&str, &MimeEntry> = types
            .into_iter()
            .filter_map(|name| self.get_mime_entry(name).map(|entry| (name, entry)))
            .collect();
        Ok((!entries.is_empty()).then_some(entries))
    }

    /// Get the distinct entries matching an extension.
    ///
    /// Entries that compare equal field by field are kept once, in type name
    /// order of their first occurrence.
    pub fn get_unique_entries_by_ext(
        &self,
        ext_or_path: &str,
    ) -> MimeResult<Option<Vec<&MimeEntry>>> {
        let Some(types) = self.get_types_by_extension(ext_or_path)? else {
            return Ok(None);
        };
        let entries = dedup_by_value(types.into_iter().filter_map(|name| self.get_mime_entry(name)));
        Ok((!entries.is_empty()).then_some(entries))
    }

    /// Get the distinct main types (`text`, `image`, ...) matching an extension.
    pub fn get_main_type_by_ext(&self, ext_or_path: &str) -> MimeResult<Option<BTreeSet<&str>>> {
        let Some(types) = self.get_types_by_extension(ext_or_path)? else {
            return Ok(None);
        };
        let main_types: BTreeSet<&str> = types.into_iter().map(main_type_of).collect();
        Ok((!main_types.is_empty()).then_some(main_types))
    }
}

impl Default for MimeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
