// txguard-core/src/domain/rules/amount.rs

use super::{AMOUNT, RowRule};
use crate::domain::record::RowRecord;
use crate::domain::report::ValidationError;

/// Amounts must parse as a decimal number once thousands separators are
/// stripped ("1,250.00" is fine). The spelled-out `inf`/`nan` tokens are not
/// amounts, but a decimal too large for `f64` still is.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmountNumeric;

fn parses_as_amount(value: &str) -> bool {
    let cleaned = value.replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => true,
        // Overflowing decimals saturate to +/-inf
        Ok(_) => !is_non_finite_token(&cleaned),
        Err(_) => false,
    }
}

fn is_non_finite_token(value: &str) -> bool {
    let lowered = value.to_ascii_lowercase();
    lowered.contains("inf") || lowered.contains("nan")
}

impl RowRule for AmountNumeric {
    fn name(&self) -> &'static str {
        "amount_numeric"
    }

    fn check(&self, row: &RowRecord, position: usize) -> Vec<ValidationError> {
        let Some(value) = row.get(AMOUNT).trimmed() else {
            return vec![];
        };
        if parses_as_amount(value) {
            return vec![];
        }
        vec![ValidationError::error(
            position,
            AMOUNT,
            format!("Not a valid number: '{}'", value),
        )]
    }
}
