//! Dialect-aware CSV reader and the Homebank CSV writer.

use crate::dialect::Dialect;
use crate::error::Result;
use crate::types::{SourceRow, TargetRow};
use csv::{QuoteStyle, ReaderBuilder, Terminator, Writer, WriterBuilder};
use std::io::Write;

/// Parse the transaction lines of `text` into rows of `dialect`.
///
/// Only the lines selected by [`Dialect::transaction_lines`] are parsed. Blank
/// lines produce no row.
pub fn read_rows(text: &str, dialect: Dialect) -> Result<Vec<SourceRow>> {
    let body = dialect
        .transaction_lines(text)
        .join(dialect.line_terminator());

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter())
        .quote(dialect.quote())
        .double_quote(dialect.double_quote())
        .terminator(Terminator::CRLF)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(SourceRow::new(dialect.fields(), record.iter()));
    }

    Ok(rows)
}

/// Writer for Homebank import files.
///
/// Fields are `;`-separated and quoted only when needed, quotes inside fields
/// are doubled and records end with CRLF. No header row is written.
pub struct HomebankWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> HomebankWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = WriterBuilder::new()
            .has_headers(false)
            .delimiter(b';')
            .quote(b'"')
            .quote_style(QuoteStyle::Necessary)
            .double_quote(true)
            .terminator(Terminator::CRLF)
            .from_writer(writer);
        HomebankWriter { inner }
    }

    pub fn write_row(&mut self, row: &TargetRow) -> Result<()> {
        self.inner.serialize(row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
