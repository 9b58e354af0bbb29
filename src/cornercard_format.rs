//! Cornercard credit card export.
//!
//! Comma-separated. Header, summary and footer lines are interleaved with the
//! bookings, which are the lines starting with a `DD/MM/YYYY` date. Amounts use
//! `,` as thousands separator and are quoted when they contain one.

use crate::conversion::{normalize_date, signed_amount};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::types::{SourceRow, TargetRow};

/// Map one Cornercard booking to a Homebank row.
pub fn transform(row: &SourceRow) -> Result<TargetRow> {
    let dialect = Dialect::Cornercard;
    let memo = row.get("beschreibung").trim().to_string();
    let date = normalize_date(row.get(dialect.date_field()), dialect.date_format())?;
    let amount = signed_amount(
        row.get("gutschrift"),
        row.get("belastung"),
        dialect.strips_thousands_separator(),
    )
    .ok_or_else(|| Error::MissingAmount { memo: memo.clone() })?;

    Ok(TargetRow::new(date, dialect.paymode(), memo, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PayMode;

    fn row(datum: &str, text: &str, belastung: &str, gutschrift: &str) -> SourceRow {
        SourceRow::new(
            Dialect::Cornercard.fields(),
            vec![datum, text, belastung, gutschrift, "5232 XXXX XXXX 1234", "Jane Doe"],
        )
    }

    #[test]
    fn test_transform_debit_strips_thousands() {
        let target = transform(&row("25/01/2018", "Swiss Airlines ", "9,999.00", "")).unwrap();
        assert_eq!(target.date, "25-01-2018");
        assert_eq!(target.paymode, PayMode::CreditCard);
        assert_eq!(target.memo, "Swiss Airlines");
        assert_eq!(target.amount, "-9999.00");
    }

    #[test]
    fn test_transform_credit_strips_thousands() {
        let target = transform(&row("28/01/2018", "Zahlung", "", "1,250.50")).unwrap();
        assert_eq!(target.amount, "1250.50");
    }

    #[test]
    fn test_invalid_datum() {
        let result = transform(&row("2018-01-25", "Coop", "1.00", ""));
        assert!(matches!(result, Err(Error::InvalidDate { .. })));
    }
}
