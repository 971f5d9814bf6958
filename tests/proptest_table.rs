//! Property-based tests for wrapping, width allocation and rendering.
//!
//! Uses proptest to check the invariants the renderer relies on: wrapping
//! never loses text and always fills the column, allocation respects the
//! terminal width unless it reports overflow, and rendering is a pure
//! function of the table's contents.

use gridtable::table::layout::{ColumnWidths, allocate};
use gridtable::{Align, Cell, Padding, Row, Table, TableOptions, TerminalSize};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Lower-case words separated by single spaces.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}( [a-z]{1,12}){0,8}"
}

fn align_strategy() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Left), Just(Align::Center), Just(Align::Right)]
}

fn column_strategy() -> impl Strategy<Value = ColumnWidths> {
    (3usize..12, 0usize..40, prop::option::of(3usize..30)).prop_map(
        |(min_width, extra, max_width)| ColumnWidths {
            width: None,
            min_width,
            max_width,
            text_width: min_width + extra,
        },
    )
}

/// A rectangular grid of cell texts.
fn grid_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..4, 1usize..4).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(prop::collection::vec(text_strategy(), columns), rows)
    })
}

fn non_space(text: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    text.into_iter()
        .flat_map(|line| line.as_ref().chars().filter(|c| *c != ' ').collect::<Vec<_>>())
        .collect()
}

fn build(grid: &[Vec<String>]) -> Table {
    let mut table = Table::with_options(TableOptions::default().style("classic"));
    for row in grid {
        table.add_row(Row::new(row.iter().map(String::as_str)));
    }
    table
}

// ============================================================================
// Wrapping
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Wrapping only ever adds or removes spaces.
    #[test]
    fn wrap_preserves_text(
        text in text_strategy(),
        width in 3usize..30,
        indent in 0usize..4,
    ) {
        let cell = Cell::new(&text).newline_indent(indent);
        let lines = cell.wrap_lines(width);
        prop_assert_eq!(non_space(&lines), non_space([&text]));
    }

    /// Every wrapped line fills the column exactly, whatever the alignment.
    #[test]
    fn wrap_fills_width(
        text in text_strategy(),
        width in 3usize..30,
        align in align_strategy(),
    ) {
        let lines = Cell::new(&text).align(align).wrap_lines(width);
        prop_assert!(!lines.is_empty());
        for line in &lines {
            prop_assert_eq!(line.chars().count(), width, "line {:?}", line);
        }
    }

    /// A single word is cut into ceil(len / width) chunks.
    #[test]
    fn hard_split_chunk_count(word in "[a-z]{1,60}", width in 1usize..20) {
        let lines = Cell::new(&word).padding(Padding::NONE).wrap_lines(width);
        prop_assert_eq!(lines.len(), word.len().div_ceil(width));
        let joined = lines.concat();
        prop_assert_eq!(joined.trim_end(), word.as_str());
    }
}

// ============================================================================
// Allocation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Without overflow the table fits; with overflow nothing grew.
    #[test]
    fn allocation_fits_terminal(
        columns in prop::collection::vec(column_strategy(), 1..6),
        terminal_width in 5usize..200,
    ) {
        let layout = allocate(&columns, terminal_width);
        prop_assert_eq!(layout.columns(), columns.len());

        for (width, column) in layout.widths.iter().zip(&columns) {
            prop_assert!(*width >= column.min_width);
            prop_assert!(*width <= column.min_width.max(column.target()));
        }

        match layout.overflow {
            None => prop_assert!(layout.total_width() <= terminal_width),
            Some(overflow) => {
                let seeded: Vec<usize> = columns.iter().map(|c| c.min_width).collect();
                prop_assert_eq!(&layout.widths, &seeded);
                prop_assert_eq!(layout.total_width(), terminal_width + overflow);
            }
        }
    }

    /// Columns still short of their target at the end grew at most one
    /// character less than any other column.
    #[test]
    fn allocation_is_round_robin(
        columns in prop::collection::vec(column_strategy(), 1..6),
        terminal_width in 5usize..200,
    ) {
        let layout = allocate(&columns, terminal_width);
        let growth: Vec<usize> = layout
            .widths
            .iter()
            .zip(&columns)
            .map(|(width, column)| width - column.min_width)
            .collect();

        for (i, column) in columns.iter().enumerate() {
            let eligible = column.text_width > column.min_width;
            if eligible && layout.widths[i] < column.target() {
                for other in &growth {
                    prop_assert!(*other <= growth[i] + 1, "growth {:?}", growth);
                }
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Tables built from the same contents render identically.
    #[test]
    fn rendering_is_deterministic(grid in grid_strategy(), width in 10usize..120) {
        let term = TerminalSize::new(width, 24);
        let first = build(&grid).render(term).unwrap();
        let second = build(&grid).render(term).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every line spans the full table width and the line count is the sum
    /// of row heights plus one shared border per row and a closing border.
    #[test]
    fn rendering_shape(grid in grid_strategy(), width in 10usize..120) {
        let mut table = build(&grid);
        let before: Vec<Row> = table.rows().to_vec();
        let rendering = table.render(TerminalSize::new(width, 24)).unwrap();

        let total = rendering.layout.total_width();
        for line in &rendering.lines {
            prop_assert_eq!(line.chars().count(), total, "line {:?}", line);
        }

        let heights: usize = before
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .zip(&rendering.layout.widths)
                    .map(|(cell, &w)| cell.wrap_lines(w).len())
                    .max()
                    .unwrap_or(0)
            })
            .sum();
        prop_assert_eq!(rendering.lines.len(), heights + before.len() + 1);
    }

    /// No text is lost between the cells and the rendered output.
    #[test]
    fn rendering_keeps_text(grid in grid_strategy(), width in 10usize..120) {
        let mut table = build(&grid);
        let rendering = table.render(TerminalSize::new(width, 24)).unwrap();

        let borders = ['+', '-', '|'];
        let rendered: String = rendering
            .lines
            .iter()
            .flat_map(|line| line.chars())
            .filter(|c| !borders.contains(c))
            .collect();
        let expected: usize = grid.iter().flatten().map(|t| non_space([t]).len()).sum();
        prop_assert_eq!(non_space([rendered]).len(), expected);
    }
}
