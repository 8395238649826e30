// txguard-core/src/domain/rules/duplicate.rs

use std::collections::HashMap;

use super::{ACCOUNT_NUMBER, AMOUNT, DatasetRule, TRANSACTION_DATE};
use crate::domain::record::RowRecord;
use crate::domain::report::ValidationError;

pub const DUPLICATE_COLUMN: &str = "duplicate_check";

/// Flags every repeat of an (account_number, transaction_date, amount)
/// triple. The first occurrence is never flagged, so N identical rows yield
/// N-1 warnings, each on its own row.
#[derive(Debug, Default, Clone, Copy)]
pub struct DuplicateTransactionCheck;

/// Trimmed key components; missing or blank cells become "".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TransactionKey<'a> {
    account_number: &'a str,
    transaction_date: &'a str,
    amount: &'a str,
}

impl<'a> TransactionKey<'a> {
    fn of(row: &'a RowRecord) -> Self {
        Self {
            account_number: row.trimmed_or_empty(ACCOUNT_NUMBER),
            transaction_date: row.trimmed_or_empty(TRANSACTION_DATE),
            amount: row.trimmed_or_empty(AMOUNT),
        }
    }

    fn render(&self) -> String {
        format!(
            "({}, {}, {})",
            quote(self.account_number),
            quote(self.transaction_date),
            quote(self.amount)
        )
    }
}

/// Quotes a key component as a string literal: `'...'` unless the value
/// holds a `'` and no `"`. Backslashes, the quote in use and control
/// characters are escaped.
fn quote(value: &str) -> String {
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

impl DatasetRule for DuplicateTransactionCheck {
    fn name(&self) -> &'static str {
        "duplicate_transaction_check"
    }

    fn check(&self, rows: &[RowRecord]) -> Vec<ValidationError> {
        let mut seen: HashMap<TransactionKey<'_>, usize> = HashMap::with_capacity(rows.len());
        let mut errors = Vec::new();

        for (idx, row) in rows.iter().enumerate() {
            let key = TransactionKey::of(row);
            let count = seen.entry(key.clone()).or_insert(0);
            *count += 1;
            if *count > 1 {
                errors.push(ValidationError::warning(
                    idx + 1,
                    DUPLICATE_COLUMN,
                    format!("Duplicate transaction detected: {}", key.render()),
                ));
            }
        }

        errors
    }
}
