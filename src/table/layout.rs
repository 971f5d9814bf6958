//! Column width allocation.
//!
//! Every column is first seeded at its minimum (or explicit) width, then the
//! space left on the terminal line is handed out one character at a time,
//! round-robin in column order, to columns that are still below their target
//! (`max_width` when set, else the natural text width). No column grows past
//! its minimum by more than one character before every other column has had
//! the same chance.

use super::Row;
use crate::cell::Cell;
use crate::error::{Error, Result};

/// Constraints aggregated over every cell of one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Largest explicit width of any cell.
    pub width: Option<usize>,
    /// Largest minimum width, never below the structural floor.
    pub min_width: usize,
    /// Largest explicit maximum width.
    pub max_width: Option<usize>,
    /// Widest unwrapped line, padding included.
    pub text_width: usize,
}

impl ColumnWidths {
    fn absorb(&mut self, cell: &Cell) {
        self.width = self.width.max(cell.width);
        self.min_width = self
            .min_width
            .max(cell.min_width.unwrap_or(0))
            .max(cell.floor_width());
        self.max_width = self.max_width.max(cell.max_width);
        self.text_width = self.text_width.max(cell.natural_width());
    }

    /// Width the column grows towards.
    #[must_use]
    pub fn target(&self) -> usize {
        self.max_width.unwrap_or(self.text_width)
    }
}

/// Result of width allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Content width of every column, borders excluded.
    pub widths: Vec<usize>,
    /// Characters by which the seeded widths exceeded the terminal, if any.
    pub overflow: Option<usize>,
}

impl ColumnLayout {
    /// Layout with caller-supplied widths; nothing is checked against the
    /// terminal.
    #[must_use]
    pub fn fixed(widths: &[usize]) -> Self {
        Self {
            widths: widths.to_vec(),
            overflow: None,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    /// Rendered line width: every column plus one border per boundary.
    #[must_use]
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.widths.len() + 1
    }
}

/// Check that every row has `expected` cells.
pub fn check_columns(rows: &[Row], expected: usize) -> Result<()> {
    match rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.cells.len() != expected)
    {
        Some((index, row)) => Err(Error::ColumnMismatch {
            row: index,
            expected,
            found: row.cells.len(),
        }),
        None => Ok(()),
    }
}

/// Aggregate per-column constraints. The first row decides the column count.
pub fn measure(rows: &[Row]) -> Result<Vec<ColumnWidths>> {
    let columns = rows.first().map_or(0, |row| row.cells.len());
    check_columns(rows, columns)?;

    let mut widths = vec![ColumnWidths::default(); columns];
    for row in rows {
        for (column, cell) in widths.iter_mut().zip(&row.cells) {
            column.absorb(cell);
        }
    }
    Ok(widths)
}

/// Distribute `terminal_width` across `columns`.
///
/// One character per column boundary (plus the closing border) is reserved
/// before any column is seeded. When the seeded widths alone do not fit, the
/// layout records the overflow and a warning is logged; the widths are still
/// usable.
#[must_use]
pub fn allocate(columns: &[ColumnWidths], terminal_width: usize) -> ColumnLayout {
    let mut remaining = terminal_width as isize - columns.len() as isize - 1;
    let mut widths = Vec::with_capacity(columns.len());
    let mut done = Vec::with_capacity(columns.len());

    for column in columns {
        let (width, finished) = match column.width {
            Some(width) => (width, true),
            None => (column.min_width, column.text_width <= column.min_width),
        };
        remaining -= width as isize;
        widths.push(width);
        done.push(finished);
    }

    let overflow = (remaining < 0).then(|| remaining.unsigned_abs());
    if let Some(overflow) = overflow {
        tracing::warn!(
            terminal_width,
            required = terminal_width + overflow,
            overflow,
            "table is wider than the terminal"
        );
    }

    'grow: while remaining > 0 && done.iter().any(|d| !d) {
        for (index, column) in columns.iter().enumerate() {
            if done[index] {
                continue;
            }
            let target = column.target();
            if widths[index] < target {
                widths[index] += 1;
                remaining -= 1;
            }
            if widths[index] >= target {
                done[index] = true;
            }
            if remaining == 0 {
                break 'grow;
            }
        }
    }

    tracing::debug!(?widths, remaining, "allocated column widths");
    ColumnLayout { widths, overflow }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Padding;

    fn column(min_width: usize, text_width: usize) -> ColumnWidths {
        ColumnWidths {
            width: None,
            min_width,
            max_width: None,
            text_width,
        }
    }

    #[test]
    fn test_measure_aggregates_columns() {
        let rows = vec![
            Row::new(["short", "x"]),
            Row::new([Cell::new("a much longer line\nhi"), Cell::new("y").min_width(6)]),
        ];
        let widths = measure(&rows).unwrap();
        assert_eq!(widths.len(), 2);
        assert_eq!(widths[0].text_width, 20);
        assert_eq!(widths[0].min_width, 3);
        assert_eq!(widths[1].min_width, 6);
        assert_eq!(widths[1].text_width, 3);
    }

    #[test]
    fn test_measure_floor_includes_padding() {
        let rows = vec![Row::new([Cell::new("x").padding(Padding::symmetric(3, 0))])];
        assert_eq!(measure(&rows).unwrap()[0].min_width, 7);
    }

    #[test]
    fn test_measure_rejects_ragged_rows() {
        let rows = vec![Row::new(["a", "b"]), Row::new(["c"])];
        let err = measure(&rows).unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_measure_empty() {
        assert!(measure(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_round_robin_growth() {
        // 12 - 3 borders = 9 to share; seeds take 6, leaving 3.
        let layout = allocate(&[column(3, 10), column(3, 4)], 12);
        assert_eq!(layout.widths, [5, 4]);
        assert_eq!(layout.overflow, None);
        assert_eq!(layout.total_width(), 12);
    }

    #[test]
    fn test_columns_stop_at_text_width() {
        let layout = allocate(&[column(3, 5), column(3, 7)], 80);
        assert_eq!(layout.widths, [5, 7]);
    }

    #[test]
    fn test_max_width_caps_growth() {
        let mut capped = column(3, 50);
        capped.max_width = Some(8);
        let layout = allocate(&[capped], 80);
        assert_eq!(layout.widths, [8]);
    }

    #[test]
    fn test_max_width_below_min_keeps_min() {
        let mut capped = column(5, 50);
        capped.max_width = Some(2);
        assert_eq!(allocate(&[capped], 80).widths, [5]);
    }

    #[test]
    fn test_explicit_width_is_final() {
        let mut fixed = column(3, 50);
        fixed.width = Some(4);
        let layout = allocate(&[fixed, column(3, 10)], 80);
        assert_eq!(layout.widths, [4, 10]);
    }

    #[test]
    fn test_overflow_is_recorded() {
        let layout = allocate(&[column(10, 10), column(10, 10)], 15);
        assert_eq!(layout.widths, [10, 10]);
        assert_eq!(layout.overflow, Some(8));
    }

    #[test]
    fn test_no_columns() {
        let layout = allocate(&[], 80);
        assert!(layout.widths.is_empty());
        assert_eq!(layout.total_width(), 1);
    }

    #[test]
    fn test_check_columns() {
        let rows = vec![Row::new(["a"]), Row::new(["b"])];
        assert!(check_columns(&rows, 1).is_ok());
        assert!(check_columns(&rows, 2).is_err());
    }
}
