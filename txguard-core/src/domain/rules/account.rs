// txguard-core/src/domain/rules/account.rs

use regex::Regex;
use std::sync::OnceLock;

use super::{ACCOUNT_NUMBER, RowRule, compile_static};
use crate::domain::record::RowRecord;
use crate::domain::report::ValidationError;

fn re_account() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile_static(r"^[0-9]{8,12}$"))
}

/// Account numbers are 8 to 12 ASCII digits. Blank values are left to
/// `required_fields`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccountNumberFormat;

impl RowRule for AccountNumberFormat {
    fn name(&self) -> &'static str {
        "account_number_format"
    }

    fn check(&self, row: &RowRecord, position: usize) -> Vec<ValidationError> {
        let Some(value) = row.get(ACCOUNT_NUMBER).trimmed() else {
            return vec![];
        };
        if re_account().is_match(value) {
            return vec![];
        }
        vec![ValidationError::error(
            position,
            ACCOUNT_NUMBER,
            format!("Invalid format: '{}' (expected 8-12 digits)", value),
        )]
    }
}
