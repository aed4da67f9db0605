//! MIME database entries.
//!
//! An entry is the metadata recorded for one type name. Every field is
//! optional; an entry without `extensions` can only be reached by looking
//! up its type name directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from type name (`main/sub`) to its entry.
pub type MimeMap = BTreeMap<String, MimeEntry>;

/// Metadata for a single MIME type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeEntry {
    /// Where the entry comes from (`iana`, `apache`, `nginx`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Whether content of this type benefits from compression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressible: Option<bool>,
    /// Default charset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    /// File extensions, lowercase and without a leading dot. The first one is
    /// the primary extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

impl MimeEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn compressible(mut self, compressible: bool) -> Self {
        self.compressible = Some(compressible);
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Check whether `ext` is listed. The match is exact and case-sensitive.
    pub fn has_extension(&self, ext: &str) -> bool {
        self.extensions
            .as_ref()
            .is_some_and(|exts| exts.iter().any(|e| e == ext))
    }

    /// Get the first listed extension.
    pub fn primary_extension(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|exts| exts.first())
            .map(String::as_str)
    }
}
