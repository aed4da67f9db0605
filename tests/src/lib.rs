//! Mimedex Integration Test Framework
//!
//! Provides a fluent API for writing scenario tests against a MimeRegistry.
//! A scenario describes how the registry is built (base entries and custom
//! layers) and a list of query steps, each with an assertion.
//!
//! # Example
//!
//! ```ignore
//! use mimedex_tests::prelude::*;
//!
//! pub fn scenario() -> Scenario {
//!     Scenario::new("rtf")
//!         .step(Query::types("rtf"), |a| a.exactly(&["application/rtf", "text/rtf"]))
//!         .step(Query::main_types("rtf"), |a| a.exactly(&["application", "text"]))
//! }
//!
//! #[test]
//! fn test() {
//!     scenario().run().unwrap();
//! }
//! ```

mod runner;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use logging::init_test_logging;
pub use query::{Outcome, Query};
pub use runner::Runner;
pub use scenario::{Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::query::{Outcome, Query};
    pub use crate::scenario::Scenario;
    pub use mimedex_core::{MimeEntry, MimeMap};
    pub use mimedex_registry::{MimeRegistry, RegistryConfig};
}
