//! Source dialects and first-line detection.

use crate::error::{Error, Result};
use crate::types::PayMode;
use log::debug;
use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

const BALOISE_SIGNATURE: &str = "Datum;Valuta;Buchungstext;Belastung;Gutschrift";
const CORNERCARD_SIGNATURE: &str = "Datum,Beschreibung,Belastung CHF,Gutschrift";

const BALOISE_FIELDS: &[&str] = &[
    "datum",
    "valuta",
    "buchungstext",
    "belastung",
    "gutschrift",
    "saldo_chf",
    "kontonummer",
    "kontoinhaber",
];

const CORNERCARD_FIELDS: &[&str] = &[
    "datum",
    "beschreibung",
    "belastung",
    "gutschrift",
    "kartennummer",
    "karteninhaber",
];

/// Lines starting with a `DD/MM/YYYY` date.
const CORNERCARD_ROW_PATTERN: &str = r"^\d{2}/\d{2}/\d{4}";

fn cornercard_row_regex() -> &'static Regex {
    static ROW_RE: OnceLock<Regex> = OnceLock::new();
    ROW_RE.get_or_init(|| Regex::new(CORNERCARD_ROW_PATTERN).expect("row pattern compiles"))
}

/// Supported bank export dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Baloise Bank SoBa account export.
    Baloise,
    /// Cornercard credit card export.
    Cornercard,
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "baloise" => Ok(Dialect::Baloise),
            "cornercard" => Ok(Dialect::Cornercard),
            _ => Err(Error::InvalidDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Baloise => f.write_str("Baloise Bank SoBa"),
            Dialect::Cornercard => f.write_str("Cornercard"),
        }
    }
}

impl Dialect {
    /// Field delimiter byte.
    pub fn delimiter(&self) -> u8 {
        match self {
            Dialect::Baloise => b';',
            Dialect::Cornercard => b',',
        }
    }

    /// Quote character byte.
    pub fn quote(&self) -> u8 {
        b'"'
    }

    /// Whether `""` inside a quoted field stands for a literal quote.
    pub fn double_quote(&self) -> bool {
        false
    }

    /// Line terminator the bank writes.
    pub fn line_terminator(&self) -> &'static str {
        "\r\n"
    }

    /// Column names in file order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Dialect::Baloise => BALOISE_FIELDS,
            Dialect::Cornercard => CORNERCARD_FIELDS,
        }
    }

    /// Substring identifying the dialect's header line.
    pub fn signature(&self) -> &'static str {
        match self {
            Dialect::Baloise => BALOISE_SIGNATURE,
            Dialect::Cornercard => CORNERCARD_SIGNATURE,
        }
    }

    /// Field holding the booking date used for Homebank.
    pub fn date_field(&self) -> &'static str {
        match self {
            Dialect::Baloise => "valuta",
            Dialect::Cornercard => "datum",
        }
    }

    /// `chrono` format of [`Dialect::date_field`].
    pub fn date_format(&self) -> &'static str {
        match self {
            Dialect::Baloise => "%d.%m.%Y",
            Dialect::Cornercard => "%d/%m/%Y",
        }
    }

    /// Homebank payment mode assigned to every row.
    pub fn paymode(&self) -> PayMode {
        match self {
            Dialect::Baloise => PayMode::ElectronicPayment,
            Dialect::Cornercard => PayMode::CreditCard,
        }
    }

    /// Whether amounts carry `,` thousands separators that must be removed.
    pub fn strips_thousands_separator(&self) -> bool {
        matches!(self, Dialect::Cornercard)
    }

    /// Select the transaction lines of a whole file.
    ///
    /// Baloise files carry one header line. Cornercard files mix headers,
    /// summaries and footers with the rows, so rows are picked by their
    /// leading date instead.
    pub fn transaction_lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Dialect::Baloise => text.lines().skip(1).collect(),
            Dialect::Cornercard => {
                let row_re = cornercard_row_regex();
                text.lines().filter(|line| row_re.is_match(line)).collect()
            }
        }
    }

    /// All known dialects, in detection order.
    pub fn all() -> [Dialect; 2] {
        [Dialect::Baloise, Dialect::Cornercard]
    }
}

/// Classify a header line.
pub fn detect_line(line: &str) -> Option<Dialect> {
    Dialect::all()
        .into_iter()
        .find(|dialect| line.contains(dialect.signature()))
}

/// Classify a source by its first line.
///
/// Read failures count as "not matched".
pub fn detect_reader<R: Read>(reader: R) -> Option<Dialect> {
    let mut first_line = Vec::new();
    if let Err(e) = BufReader::new(reader).read_until(b'\n', &mut first_line) {
        debug!("could not read first line: {}", e);
        return None;
    }
    detect_line(&String::from_utf8_lossy(&first_line))
}

/// Classify a file by its first line.
///
/// # Examples
///
/// ```no_run
/// use homebank_converter::dialect::{detect, Dialect};
///
/// assert_eq!(detect("export.csv"), Some(Dialect::Baloise));
/// ```
pub fn detect<P: AsRef<Path>>(path: P) -> Option<Dialect> {
    let path = path.as_ref();
    let detected = match File::open(path) {
        Ok(file) => detect_reader(file),
        Err(e) => {
            debug!("could not open {}: {}", path.display(), e);
            None
        }
    };
    debug!("detected {:?} for {}", detected, path.display());
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("baloise".parse::<Dialect>().unwrap(), Dialect::Baloise);
        assert_eq!("Cornercard".parse::<Dialect>().unwrap(), Dialect::Cornercard);
        assert!("postfinance".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_detect_line() {
        assert_eq!(
            detect_line("Datum;Valuta;Buchungstext;Belastung;Gutschrift;Saldo CHF;Kontonummer;Kontoinhaber\r\n"),
            Some(Dialect::Baloise)
        );
        assert_eq!(
            detect_line("Datum,Beschreibung,Belastung CHF,Gutschrift CHF,Kartennummer,Karteninhaber"),
            Some(Dialect::Cornercard)
        );
        assert_eq!(detect_line("Date,Description,Amount"), None);
        assert_eq!(detect_line(""), None);
    }

    #[test]
    fn test_detect_reader_reads_first_line_only() {
        let input = "Kontoauszug\nDatum;Valuta;Buchungstext;Belastung;Gutschrift\n";
        assert_eq!(detect_reader(input.as_bytes()), None);
        assert_eq!(detect_reader(&b""[..]), None);
    }

    #[test]
    fn test_detect_missing_file() {
        assert_eq!(detect("does/not/exist.csv"), None);
    }

    #[test]
    fn test_row_regex_compiled_once() {
        assert!(std::ptr::eq(cornercard_row_regex(), cornercard_row_regex()));
    }

    #[test]
    fn test_cornercard_transaction_lines() {
        let text = "Datum,Beschreibung,Belastung CHF,Gutschrift CHF\r\n\
                    25/01/2018,Coop,12.50,,,\r\n\
                    Total,,12.50,,,\r\n\
                    1/2/2018,short date,1.00,,,\r\n";
        let lines = Dialect::Cornercard.transaction_lines(text);
        assert_eq!(lines, vec!["25/01/2018,Coop,12.50,,,"]);
    }

    #[test]
    fn test_baloise_transaction_lines_skip_header() {
        let text = "header\r\nrow 1\r\nrow 2\r\n";
        let lines = Dialect::Baloise.transaction_lines(text);
        assert_eq!(lines, vec!["row 1", "row 2"]);
    }
}
