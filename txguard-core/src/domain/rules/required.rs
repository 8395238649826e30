// txguard-core/src/domain/rules/required.rs

use super::{ACCOUNT_NUMBER, AMOUNT, RowRule, TRANSACTION_DATE};
use crate::domain::record::{FieldValue, RowRecord};
use crate::domain::report::ValidationError;

/// Columns every transaction must carry, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 3] = [ACCOUNT_NUMBER, TRANSACTION_DATE, AMOUNT];

/// Flags required columns that are missing from the header or blank.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequiredFields;

impl RowRule for RequiredFields {
    fn name(&self) -> &'static str {
        "required_fields"
    }

    fn check(&self, row: &RowRecord, position: usize) -> Vec<ValidationError> {
        REQUIRED_COLUMNS
            .iter()
            .filter_map(|&column| match row.get(column) {
                FieldValue::Missing => Some(ValidationError::error(
                    position,
                    column,
                    format!("Required field '{}' is missing", column),
                )),
                FieldValue::Empty => Some(ValidationError::error(
                    position,
                    column,
                    format!("Required field '{}' is empty", column),
                )),
                FieldValue::Present(_) => None,
            })
            .collect()
    }
}
