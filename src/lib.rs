//! XSD conformance checker
//!
//! Checks whether an XML document conforms to an XML Schema Definition.
//!
//! This library provides:
//! - Invocation-path resolution with documented fallback defaults
//! - A preference-ordered list of schema validation backends
//! - Violation reporting with source locations where available

pub mod backend;
pub mod config;
pub mod validation;

// Re-exports for clean public API
pub use backend::{BackendError, SchemaBackend};
pub use config::Config;
pub use validation::{RunStatus, ValidationResult, Violation};
