//! Outcome model for a single run.

/// A single reported deviation between the document and the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub message: String,
    /// 1-based line number, when the backend supplies one
    pub line: Option<u32>,
    /// Column number, when the backend supplies one
    pub column: Option<u32>,
}

/// Result of checking one document against one schema
///
/// Violations keep the order in which the backend reported them. A document
/// is valid exactly when no violations were collected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn add_violation(&mut self, message: String) {
        self.violations.push(Violation {
            message,
            line: None,
            column: None,
        });
    }

    pub fn add_violation_at(&mut self, line: Option<u32>, column: Option<u32>, message: String) {
        self.violations.push(Violation {
            message,
            line,
            column,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Terminal status of a run, as reflected in the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The chosen backend reported the document valid
    Valid,
    /// The chosen backend reported violations
    Invalid,
    /// Missing input, missing file, or no usable backend
    EnvironmentError,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Valid => 0,
            RunStatus::EnvironmentError => 1,
            RunStatus::Invalid => 2,
        }
    }
}
