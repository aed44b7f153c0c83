//! Schema validation backends.
//!
//! Each backend wraps one external validation library behind a shared
//! capability: check a document against a schema and collect every violation
//! the library reports. Backends are tried in preference order and the first
//! one that completes determines the outcome of the run; results from
//! different backends are never merged.

use std::path::Path;

use thiserror::Error;

use crate::validation::ValidationResult;

#[cfg(feature = "libxml2")]
pub mod libxml2;
#[cfg(feature = "xmlschema")]
pub mod xmlschema;

/// Failure inside a backend before it could produce a verdict
#[derive(Debug, Error)]
pub enum BackendError {
    /// The schema could not be parsed or compiled
    #[error("error while loading the XSD: {0}")]
    SchemaLoad(String),
    /// The document could not be parsed
    #[error("error while parsing the XML: {0}")]
    DocumentLoad(String),
    /// The library failed after validation had started
    #[error("error while checking the XML: {0}")]
    Validation(String),
}

/// One interchangeable validation strategy
pub trait SchemaBackend {
    /// Marker used to prefix every output line of this backend
    fn name(&self) -> &'static str;

    /// Check `xml` against `xsd`, collecting the violations the library reports
    fn validate(&self, xml: &Path, xsd: &Path) -> Result<ValidationResult, BackendError>;
}

/// Compiled-in backends, in preference order
pub fn backends() -> Vec<Box<dyn SchemaBackend>> {
    #[allow(unused_mut)]
    let mut list: Vec<Box<dyn SchemaBackend>> = Vec::new();
    #[cfg(feature = "xmlschema")]
    list.push(Box::new(xmlschema::XmlSchemaBackend));
    #[cfg(feature = "libxml2")]
    list.push(Box::new(libxml2::LibXml2Backend));
    list
}
