//! Mimedex Core Types
//!
//! This crate provides the foundational types used throughout mimedex:
//! - Database entries (MimeEntry, MimeMap)
//! - Type name and path helpers (main type, subtype token, extension)
//! - Duplicate suppression by value
//! - Common error types

mod dedup;
mod entry;
mod error;
mod name;

pub use dedup::*;
pub use entry::*;
pub use error::*;
pub use name::*;
