//! Question catalog loading and management.
//!
//! The catalog is an explicit, constructed object: it is validated at load
//! time (duplicate ids and malformed questions are rejected before any
//! question is served) and supports reloading from disk. There is no
//! process-wide singleton.
//!
//! # Example
//!
//! ```
//! use payroll_config_engine::catalog::{ConfigModule, QuestionCatalog};
//!
//! let catalog = QuestionCatalog::builtin();
//! let first = catalog.first_question(ConfigModule::PayrollArea).unwrap();
//! assert_eq!(first.id, "q1_frequencies");
//! ```

mod defaults;
mod loader;

pub use loader::{ConfigModule, QuestionCatalog};
