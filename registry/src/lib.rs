//! Mimedex Registry
//!
//! Extension and type lookup over the MIME database. Built-in entries come
//! from a [`MimeSource`], custom entries are layered on top by
//! [`RegistryBuilder`], and the resulting [`MimeRegistry`] is immutable.

mod builder;
mod config;
mod registry;
mod source;

pub use builder::RegistryBuilder;
pub use config::RegistryConfig;
pub use registry::MimeRegistry;
pub use source::{BuiltinSource, MimeSource};

pub use mimedex_core::{MimeEntry, MimeError, MimeMap, MimeResult};
