//! Helpers for type names and paths.
//!
//! A type name is an opaque `main/sub` key. Only two parts of it matter:
//! the main type and the subtype token, which drives extension aliasing.

use crate::{MimeError, MimeResult};

/// Get the main type of a type name (`text` for `text/plain`).
///
/// A name without `/` is its own main type.
pub fn main_type_of(type_name: &str) -> &str {
    type_name
        .split_once('/')
        .map_or(type_name, |(main, _)| main)
}

/// Get the subtype token of a type name (`plain` for `text/plain`).
///
/// Returns `None` when the name has no `/`.
pub fn subtype_of(type_name: &str) -> Option<&str> {
    type_name.split_once('/').map(|(_, sub)| sub)
}

/// Extract the extension from a path or a bare extension.
///
/// The extension is everything after the last `.`, so `archive.tar.gz`
/// gives `gz` and `txt` gives `txt`. Fails when that segment is empty.
pub fn extension_of(path: &str) -> MimeResult<&str> {
    match path.rsplit('.').next() {
        Some(ext) if !ext.is_empty() => Ok(ext),
        _ => Err(MimeError::InvalidPath(path.to_string())),
    }
}
