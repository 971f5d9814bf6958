//! DokuWiki table markup.

use crate::table::Row;

/// One markup line per row. Header rows use `^` separators, other rows
/// `|`. Embedded newlines become DokuWiki forced line breaks.
#[must_use]
pub fn render(rows: &[Row]) -> Vec<String> {
    rows.iter().map(line).collect()
}

fn line(row: &Row) -> String {
    let separator = if row.header { '^' } else { '|' };
    let values: Vec<String> = row
        .cells
        .iter()
        .map(|cell| cell.text.join("\\\\"))
        .collect();
    format!(
        "{separator} {} {separator}",
        values.join(&format!(" {separator} "))
    )
}
