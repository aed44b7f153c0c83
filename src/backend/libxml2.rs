//! libxml2-backed validation, via the `libxml` bindings.
//!
//! Tree-based: the document is parsed first, then the schema is parsed and
//! compiled; either failure aborts this backend. On an invalid document the
//! library's structured error log supplies line and column numbers per entry.

use std::path::Path;

use libxml::error::StructuredError;
use libxml::parser::Parser;
use libxml::schemas::{SchemaParserContext, SchemaValidationContext};

use super::{BackendError, SchemaBackend};
use crate::validation::ValidationResult;

pub struct LibXml2Backend;

impl SchemaBackend for LibXml2Backend {
    fn name(&self) -> &'static str {
        "libxml2"
    }

    fn validate(&self, xml: &Path, xsd: &Path) -> Result<ValidationResult, BackendError> {
        let xml_path = xml.to_str().ok_or_else(|| {
            BackendError::DocumentLoad(format!("invalid XML path: {}", xml.display()))
        })?;
        let xsd_path = xsd.to_str().ok_or_else(|| {
            BackendError::SchemaLoad(format!("invalid XSD path: {}", xsd.display()))
        })?;

        let document = Parser::default()
            .parse_file(xml_path)
            .map_err(|e| BackendError::DocumentLoad(format!("{e:?}")))?;

        let mut parser_ctx = SchemaParserContext::from_file(xsd_path);
        let mut schema = SchemaValidationContext::from_parser(&mut parser_ctx)
            .map_err(|errors| BackendError::SchemaLoad(join_messages(&errors)))?;

        let mut result = ValidationResult::new();
        if let Err(errors) = schema.validate_document(&document) {
            for error in &errors {
                result.add_violation_at(
                    error.line.and_then(|line| u32::try_from(line).ok()),
                    error.col.and_then(|col| u32::try_from(col).ok()),
                    describe(error),
                );
            }
        }
        Ok(result)
    }
}

fn describe(error: &StructuredError) -> String {
    error
        .message
        .as_deref()
        .map(str::trim)
        .unwrap_or("unspecified libxml2 error")
        .to_string()
}

fn join_messages(errors: &[StructuredError]) -> String {
    errors
        .iter()
        .map(describe)
        .collect::<Vec<_>>()
        .join("; ")
}
