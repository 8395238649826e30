pub mod error;
pub mod record;
pub mod report;
pub mod rules;
pub mod severity;

// Handy re-exports to keep imports short elsewhere
pub use error::DomainError;
pub use record::{FieldValue, RowRecord};
pub use report::{ValidationError, ValidationReport};
pub use rules::{DatasetRule, RowRule, RuleRegistry};
pub use severity::Severity;
