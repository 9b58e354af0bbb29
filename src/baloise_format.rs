//! Baloise Bank SoBa account export.
//!
//! Semicolon-separated, one header line followed by one line per booking:
//!
//! ```text
//! Datum;Valuta;Buchungstext;Belastung;Gutschrift;Saldo CHF;Kontonummer;Kontoinhaber
//! 01.01.2019;01.01.2019;Belastung Geldbezug Bancomat ...;100.00;;1234.56;CH00 ...;Jane Doe
//! ```
//!
//! Homebank receives the value date, the booking text as memo and the amount,
//! negated for debits.

use crate::conversion::{normalize_date, signed_amount};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::types::{SourceRow, TargetRow};

/// Map one Baloise booking to a Homebank row.
pub fn transform(row: &SourceRow) -> Result<TargetRow> {
    let dialect = Dialect::Baloise;
    let memo = row.get("buchungstext").trim().to_string();
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

    fn row(valuta: &str, text: &str, belastung: &str, gutschrift: &str) -> SourceRow {
        SourceRow::new(
            Dialect::Baloise.fields(),
            vec!["01.01.2019", valuta, text, belastung, gutschrift, "", "", ""],
        )
    }

    #[test]
    fn test_transform_credit() {
        let target = transform(&row("01.02.2019", "  Pocket Money ", "", "0.01")).unwrap();
        assert_eq!(target.date, "01-02-2019");
        assert_eq!(target.paymode, PayMode::ElectronicPayment);
        assert_eq!(target.memo, "Pocket Money");
        assert_eq!(target.amount, "0.01");
        assert!(target.info.is_empty() && target.payee.is_empty());
        assert!(target.category.is_empty() && target.tags.is_empty());
    }

    #[test]
    fn test_transform_debit() {
        let target = transform(&row("01.01.2019", "Bancomat", "100.00", "")).unwrap();
        assert_eq!(target.amount, "-100.00");
    }

    #[test]
    fn test_uses_valuta_not_datum() {
        let target = transform(&row("03.01.2019", "Bancomat", "1.00", "")).unwrap();
        assert_eq!(target.date, "03-01-2019");
    }

    #[test]
    fn test_invalid_valuta() {
        let result = transform(&row("2019-01-01", "Bancomat", "1.00", ""));
        assert!(matches!(result, Err(Error::InvalidDate { .. })));
    }

    #[test]
    fn test_missing_amount() {
        let result = transform(&row("01.01.2019", "Saldo", "", ""));
        assert!(matches!(result, Err(Error::MissingAmount { .. })));
    }
}
