//! Result rendering for the CLI.
//!
//! Every line carries the reporting backend's marker so fallback output
//! stays attributable to the backend that produced it.

use super::ValidationResult;

/// Print the outcome of the chosen backend to stdout
pub fn print_report(backend: &str, result: &ValidationResult) {
    if result.is_valid() {
        println!("[{backend}] XML document is valid against the schema.");
        return;
    }

    println!("[{backend}] XML document is NOT valid. Violations:");
    for violation in &result.violations {
        match (violation.line, violation.column) {
            (Some(line), Some(column)) => {
                println!(
                    "[{backend}] - line {line}, column {column}: {}",
                    violation.message
                );
            }
            (Some(line), None) => {
                println!("[{backend}] - line {line}: {}", violation.message);
            }
            _ => println!("[{backend}] - {}", violation.message),
        }
    }
}
