//! Base data sources.

use mimedex_core::MimeMap;
use std::sync::OnceLock;

/// A read-only mapping of type names to entries.
///
/// The registry reads its base entries through this trait only, so tests can
/// hand it a small `MimeMap` instead of the built-in database.
pub trait MimeSource {
    fn entries(&self) -> &MimeMap;
}

impl MimeSource for MimeMap {
    fn entries(&self) -> &MimeMap {
        self
    }
}

const BUILTIN_DB: &str = include_str!("../data/db.json");

static BUILTIN: OnceLock<MimeMap> = OnceLock::new();

/// The built-in database: every mime-db type, embedded at compile time.
///
/// Parsed on first use and shared for the rest of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    /// The parsed database, shared by every registry that starts from it.
    ///
    /// # Panics
    ///
    /// Panics if the embedded file does not decode, which can only follow a
    /// bad edit to `data/db.json`.
    pub fn shared() -> &'static MimeMap {
        BUILTIN.get_or_init(|| {
            let entries: MimeMap =
                serde_json::from_str(BUILTIN_DB).expect("embedded mime database is malformed");
            tracing::debug!(count = entries.len(), "loaded built-in mime database");
            entries
        })
    }
}

impl MimeSource for BuiltinSource {
    fn entries(&self) -> &MimeMap {
        Self::shared()
    }
}
