//! Delimited-text serializer.

use crate::error::{Error, Result};
use crate::table::Row;
use std::io;

/// One line of delimited text per row, every field quoted. Fields keep
/// their embedded newlines inside the quotes.
pub fn render(rows: &[Row], separator: u8) -> Result<Vec<String>> {
    rows.iter().map(|row| record(row, separator)).collect()
}

fn record(row: &Row, separator: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(separator)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(row.cells.iter().map(|cell| cell.text.join("\n")))?;
    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    let line = String::from_utf8(bytes)
        .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok(line.trim_end_matches('\n').to_string())
}
