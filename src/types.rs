//! Row types shared by the reader, the transformers and the writer.

use serde::{Serialize, Serializer};

/// Homebank payment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayMode {
    /// Credit card payment.
    CreditCard,
    /// Electronic payment (e-banking, standing orders, cash withdrawals).
    ElectronicPayment,
}

impl PayMode {
    /// Numeric code Homebank uses for this payment mode.
    pub fn code(&self) -> u8 {
        match self {
            PayMode::CreditCard => 1,
            PayMode::ElectronicPayment => 8,
        }
    }
}

impl Serialize for PayMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// One transaction line of a source file.
///
/// Values are kept as raw strings, paired positionally with the dialect's
/// field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    fields: Vec<(&'static str, String)>,
}

impl SourceRow {
    /// Pair `values` with `names` by position.
    ///
    /// Missing trailing values become empty strings, surplus values are dropped.
    pub fn new<I, S>(names: &'static [&'static str], values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values.into_iter();
        let fields = names
            .iter()
            .map(|name| (*name, values.next().map(Into::into).unwrap_or_default()))
            .collect();
        SourceRow { fields }
    }

    /// Raw value of a field, or `""` for names the row doesn't carry.
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Field names and values in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// A Homebank import record.
///
/// Field order is the Homebank column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRow {
    /// Date as `DD-MM-YYYY`.
    pub date: String,
    pub paymode: PayMode,
    pub info: String,
    pub payee: String,
    pub memo: String,
    /// Signed decimal, debits carry a leading `-`.
    pub amount: String,
    pub category: String,
    pub tags: String,
}

impl TargetRow {
    /// Create a row with only the populated Homebank columns set.
    pub fn new(date: String, paymode: PayMode, memo: String, amount: String) -> Self {
        Self {
            date,
            paymode,
            info: String::new(),
            payee: String::new(),
            memo,
            amount,
            category: String::new(),
            tags: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["datum", "beschreibung", "belastung"];

    #[test]
    fn test_source_row_pads_missing_values() {
        let row = SourceRow::new(NAMES, vec!["25/01/2018", "Coop"]);
        assert_eq!(row.get("datum"), "25/01/2018");
        assert_eq!(row.get("beschreibung"), "Coop");
        assert_eq!(row.get("belastung"), "");
    }

    #[test]
    fn test_source_row_drops_surplus_values() {
        let row = SourceRow::new(NAMES, vec!["a", "b", "c", "d"]);
        let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
        assert_eq!(names, NAMES);
        assert_eq!(row.get("unknown"), "");
    }

    #[test]
    fn test_paymode_codes() {
        assert_eq!(PayMode::CreditCard.code(), 1);
        assert_eq!(PayMode::ElectronicPayment.code(), 8);
    }
}
