//! File-level conversion to the Homebank CSV format.
//!
//! A conversion reads the whole input, maps every transaction row and renders
//! the Homebank file in memory. The output file is only created once every row
//! converted, so a malformed row never leaves a partial file behind.

use crate::baloise_format;
use crate::cornercard_format;
use crate::csv_codec::{read_rows, HomebankWriter};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::types::{SourceRow, TargetRow};
use chrono::NaiveDate;
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem to name the output file.
pub const OUTPUT_SUFFIX: &str = "-homebank";

/// Re-format a date string from `input_format` to Homebank's `DD-MM-YYYY`.
///
/// # Examples
///
/// ```
/// use homebank_converter::conversion::normalize_date;
///
/// assert_eq!(normalize_date("31.12.2000", "%d.%m.%Y").unwrap(), "31-12-2000");
/// ```
pub fn normalize_date(value: &str, input_format: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(value.trim(), input_format).map_err(|_| {
        Error::InvalidDate {
            value: value.to_string(),
            format: input_format.to_string(),
        }
    })?;
    Ok(date.format("%d-%m-%Y").to_string())
}

/// Signed amount from a credit and a debit column.
///
/// Both values are trimmed of surrounding whitespace, otherwise passed through
/// unchanged (apart from removing `,` when `strip_thousands` is set). The credit
/// wins when both are filled. Debits get a leading `-`. Returns `None` when
/// both columns are empty.
pub fn signed_amount(credit: &str, debit: &str, strip_thousands: bool) -> Option<String> {
    let clean = |value: &str| {
        let value = value.trim();
        if strip_thousands {
            value.replace(',', "")
        } else {
            value.to_string()
        }
    };

    let credit = clean(credit);
    if !credit.is_empty() {
        return Some(credit);
    }
    let debit = clean(debit);
    if !debit.is_empty() {
        return Some(format!("-{}", debit));
    }
    None
}

/// Output path next to the input: `<stem>-homebank<.ext>`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use homebank_converter::conversion::derive_output_path;
///
/// assert_eq!(derive_output_path(Path::new("foo/bar.csv")), PathBuf::from("foo/bar-homebank.csv"));
/// ```
pub fn derive_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Pick the dialect to convert with.
///
/// A forced dialect always wins; the returned flag is `true` when it differs
/// from what detection found. Without a forced dialect the detected one is
/// used, and when there is none either the format is unknown.
pub fn resolve_dialect(
    forced: Option<Dialect>,
    detected: Option<Dialect>,
) -> Result<(Dialect, bool)> {
    match (forced, detected) {
        (Some(forced), detected) => Ok((forced, detected != Some(forced))),
        (None, Some(detected)) => Ok((detected, false)),
        (None, None) => Err(Error::UnknownFormat),
    }
}

/// Map one source row with the transformer of `dialect`.
pub fn transform(dialect: Dialect, row: &SourceRow) -> Result<TargetRow> {
    match dialect {
        Dialect::Baloise => baloise_format::transform(row),
        Dialect::Cornercard => cornercard_format::transform(row),
    }
}

/// Parse and transform every transaction of a whole file's text.
pub fn convert_text(text: &str, dialect: Dialect) -> Result<Vec<TargetRow>> {
    read_rows(text, dialect)?
        .iter()
        .map(|row| transform(dialect, row))
        .collect()
}

/// Convert a statement read from any source implementing `Read` and write the
/// Homebank rows to any destination implementing `Write`.
///
/// Returns the number of rows written.
///
/// # Examples
///
/// ```
/// use homebank_converter::{conversion::convert_reader, Dialect};
///
/// let input = "Datum;Valuta;Buchungstext;Belastung;Gutschrift;Saldo CHF;Kontonummer;Kontoinhaber\r\n\
///              01.01.2019;01.01.2019;Bancomat;100.00;;0.00;CH00;Jane Doe\r\n";
/// let mut output = Vec::new();
/// let rows = convert_reader(Dialect::Baloise, input.as_bytes(), &mut output)?;
/// assert_eq!(rows, 1);
/// assert_eq!(output, b"01-01-2019;8;;;Bancomat;-100.00;;\r\n");
/// # Ok::<(), homebank_converter::Error>(())
/// ```
pub fn convert_reader<R: Read, W: Write>(
    dialect: Dialect,
    mut reader: R,
    writer: W,
) -> Result<usize> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let rows = convert_text(&text, dialect)?;
    let mut homebank = HomebankWriter::new(writer);
    for row in &rows {
        homebank.write_row(row)?;
    }
    homebank.flush()?;

    Ok(rows.len())
}

/// Convert `in_path` as `dialect` and write the Homebank file to `out_path`.
///
/// Returns the number of rows written.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    dialect: Dialect,
    in_path: P,
    out_path: Q,
) -> Result<usize> {
    let (in_path, out_path) = (in_path.as_ref(), out_path.as_ref());
    debug!("converting {} as {:?}", in_path.display(), dialect);

    let input = fs::File::open(in_path)?;
    let mut rendered = Vec::new();
    let rows = convert_reader(dialect, input, &mut rendered)?;
    fs::write(out_path, rendered)?;

    info!("wrote {} rows to {}", rows, out_path.display());
    Ok(rows)
}

/// Convert a Baloise Bank SoBa export.
pub fn convert_baloise<P: AsRef<Path>, Q: AsRef<Path>>(in_path: P, out_path: Q) -> Result<usize> {
    convert(Dialect::Baloise, in_path, out_path)
}

/// Convert a Cornercard export.
pub fn convert_cornercard<P: AsRef<Path>, Q: AsRef<Path>>(in_path: P, out_path: Q) -> Result<usize> {
    convert(Dialect::Cornercard, in_path, out_path)
}
