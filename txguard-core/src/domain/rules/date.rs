// txguard-core/src/domain/rules/date.rs

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

use super::{RowRule, TRANSACTION_DATE, compile_static};
use crate::domain::record::RowRecord;
use crate::domain::report::ValidationError;

fn re_iso_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile_static(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$"))
}

/// Two-stage date check: the `YYYY-MM-DD` shape first, then whether the
/// calendar actually has that day. At most one finding per row.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionDateFormat;

fn is_calendar_date(value: &str) -> bool {
    // Year 0000 has no place in a transaction ledger
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok_and(|d| d.year() >= 1)
}

impl RowRule for TransactionDateFormat {
    fn name(&self) -> &'static str {
        "transaction_date_format"
    }

    fn check(&self, row: &RowRecord, position: usize) -> Vec<ValidationError> {
        let Some(value) = row.get(TRANSACTION_DATE).trimmed() else {
            return vec![];
        };

        if !re_iso_date().is_match(value) {
            return vec![ValidationError::error(
                position,
                TRANSACTION_DATE,
                format!("Invalid date format: '{}' (expected YYYY-MM-DD)", value),
            )];
        }

        if !is_calendar_date(value) {
            return vec![ValidationError::error(
                position,
                TRANSACTION_DATE,
                format!("Invalid date: '{}' is not a real calendar date", value),
            )];
        }

        vec![]
    }
}
