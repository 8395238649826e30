// txguard-core/src/domain/rules/mod.rs

// Two rule shapes, kept as two distinct traits so the registry cannot mix
// them up: row rules see one row at a time, dataset rules see the whole file.

pub mod account;
pub mod amount;
pub mod currency;
pub mod date;
pub mod duplicate;
pub mod registry;
pub mod required;

use regex::Regex;

use crate::domain::record::RowRecord;
use crate::domain::report::ValidationError;

pub use account::AccountNumberFormat;
pub use amount::AmountNumeric;
pub use currency::CurrencyCodeFormat;
pub use date::TransactionDateFormat;
pub use duplicate::DuplicateTransactionCheck;
pub use registry::RuleRegistry;
pub use required::RequiredFields;

// Column names shared by several rules
pub const ACCOUNT_NUMBER: &str = "account_number";
pub const TRANSACTION_DATE: &str = "transaction_date";
pub const AMOUNT: &str = "amount";
pub const CURRENCY: &str = "currency";

/// Checks a single row. `position` is the 1-based row number in the input.
pub trait RowRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, row: &RowRecord, position: usize) -> Vec<ValidationError>;
}

/// Checks the whole dataset at once. Findings carry the position of the row
/// that triggered them.
pub trait DatasetRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, rows: &[RowRecord]) -> Vec<ValidationError>;
}

/// Compiles a hardcoded pattern. An invalid literal falls back to a regex
/// that never matches instead of panicking.
pub(crate) fn compile_static(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| {
        // This should never happen as every caller passes a literal
        Regex::new("$^").unwrap_or_else(|_| unreachable!())
    })
}
