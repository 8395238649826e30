// txguard-core/src/domain/report.rs

use serde::{Deserialize, Serialize};

use crate::domain::severity::Severity;

/// A single finding, attached to the 1-based row that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub row: usize,
    pub column: String,
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
}

impl ValidationError {
    pub fn error(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Outcome of validating one file.
///
/// `errors_found` and `valid` are derived in [`ValidationReport::new`] and the
/// fields are private, so they cannot drift from `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    file: String,
    total_rows: usize,
    errors_found: usize,
    valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(file: impl Into<String>, total_rows: usize, errors: Vec<ValidationError>) -> Self {
        let errors_found = errors.len();
        Self {
            file: file.into(),
            total_rows,
            errors_found,
            // Warnings count too, the same as hard errors.
            valid: errors_found == 0,
            errors,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn errors_found(&self) -> usize {
        self.errors_found
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    /// Number of distinct rows with at least one finding.
    pub fn rows_with_findings(&self) -> usize {
        let mut rows: Vec<usize> = self.errors.iter().map(|e| e.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows.len()
    }
}
