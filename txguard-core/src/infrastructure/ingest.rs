// txguard-core/src/infrastructure/ingest.rs

use tracing::{debug, instrument};

use crate::domain::record::RowRecord;
use crate::infrastructure::error::InfrastructureError;

const UTF8_BOM: char = '\u{feff}';

/// Turns decoded CSV text into row records.
///
/// The first line is the header. Header names are kept verbatim, values are
/// never trimmed or coerced. Records shorter than the header get `None` for
/// the missing trailing cells; cells beyond the header are dropped. An
/// unterminated quote is not an error: the cell runs to the end of input.
#[instrument(skip(text), fields(text.len = text.len()))]
pub fn parse_rows(text: &str) -> Result<Vec<RowRecord>, InfrastructureError> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RowRecord::with_capacity(headers.len());
        for (idx, column) in headers.iter().enumerate() {
            row.insert(column, record.get(idx).map(str::to_string));
        }
        rows.push(row);
    }

    debug!(columns = headers.len(), rows = rows.len(), "CSV parsed");
    Ok(rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::record::FieldValue;
    use anyhow::Result;

    #[test]
    fn test_header_and_rows() -> Result<()> {
        let rows = parse_rows(
            "account_number,transaction_date,amount,currency\n\
             12345678,2024-01-15,100.50,USD\n\
             87654321,2024-01-16,7,EUR\n",
        )?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("amount"), FieldValue::Present("100.50"));
        assert_eq!(rows[1].get("currency"), FieldValue::Present("EUR"));
        assert_eq!(
            rows[0].columns().collect::<Vec<_>>(),
            vec!["account_number", "transaction_date", "amount", "currency"]
        );
        Ok(())
    }

    #[test]
    fn test_header_only_yields_no_rows() -> Result<()> {
        assert!(parse_rows("account_number,transaction_date,amount\n")?.is_empty());
        assert!(parse_rows("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_short_record_pads_with_empty() -> Result<()> {
        let rows = parse_rows("account_number,transaction_date,amount\n12345678\n")?;

        assert_eq!(rows[0].get("account_number"), FieldValue::Present("12345678"));
        assert_eq!(rows[0].get("transaction_date"), FieldValue::Empty);
        assert_eq!(rows[0].get("amount"), FieldValue::Empty);
        assert!(rows[0].contains("amount"));
        Ok(())
    }

    #[test]
    fn test_extra_cells_are_dropped() -> Result<()> {
        let rows = parse_rows("a,b\n1,2,3,4\n")?;
        assert_eq!(rows[0].len(), 2);
        Ok(())
    }

    #[test]
    fn test_values_are_not_trimmed() -> Result<()> {
        let rows = parse_rows("amount,currency\n  12 ,\"U S D\"\n")?;
        assert_eq!(rows[0].get("amount"), FieldValue::Present("  12 "));
        assert_eq!(rows[0].get("currency"), FieldValue::Present("U S D"));
        Ok(())
    }

    #[test]
    fn test_quoted_commas_stay_in_one_cell() -> Result<()> {
        let rows = parse_rows("account_number,amount\n12345678,\"1,250.00\"\n")?;
        assert_eq!(rows[0].get("amount"), FieldValue::Present("1,250.00"));
        Ok(())
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_input() -> Result<()> {
        let rows = parse_rows("a,b\n\"x,1\n")?;

        assert_eq!(rows.len(), 1);
        assert!(rows[0].trimmed_or_empty("a").starts_with("x,1"));
        assert_eq!(rows[0].get("b"), FieldValue::Empty);
        Ok(())
    }

    #[test]
    fn test_leading_bom_is_stripped() -> Result<()> {
        let rows = parse_rows("\u{feff}account_number,amount\n12345678,5\n")?;
        assert!(rows[0].contains("account_number"));
        Ok(())
    }
}
