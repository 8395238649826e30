// txguard-core/src/domain/rules/currency.rs

use regex::Regex;
use std::sync::OnceLock;

use super::{CURRENCY, RowRule, compile_static};
use crate::domain::record::RowRecord;
use crate::domain::report::ValidationError;

fn re_currency() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile_static(r"^[A-Z]{3}$"))
}

/// Optional ISO-4217-shaped currency code. Only the shape is checked, not
/// membership in the ISO list. Reported as a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrencyCodeFormat;

impl RowRule for CurrencyCodeFormat {
    fn name(&self) -> &'static str {
        "currency_code_format"
    }

    fn check(&self, row: &RowRecord, position: usize) -> Vec<ValidationError> {
        let Some(value) = row.get(CURRENCY).trimmed() else {
            return vec![];
        };
        if re_currency().is_match(value) {
            return vec![];
        }
        vec![ValidationError::warning(
            position,
            CURRENCY,
            format!(
                "Invalid currency code: '{}' (expected 3-letter ISO like USD, EUR)",
                value
            ),
        )]
    }
}
