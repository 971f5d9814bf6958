//! Tables and the text renderer.
//!
//! A [`Table`] is an ordered list of [`Row`]s plus [`TableOptions`].
//! Rendering runs in four steps:
//!
//! 1. Column widths come from [`TableOptions::widths`] or from
//!    [`layout::allocate`] against the injected terminal width.
//! 2. Every cell is wrapped to its column width ([`Cell::wrap`]); a row is
//!    as tall as its tallest cell.
//! 3. Borders, text lines and blank fill are written into a [`LineBuffer`],
//!    with every border position resolved by the [`BorderComposer`].
//! 4. The optional title is laid over the first line and the buffer is
//!    flattened into text.
//!
//! Adjacent rows share one border line, so a table of `R` rows with heights
//! `h_i` is `sum(h_i) + R + 1` lines tall.
//!
//! # Examples
//!
//! ```
//! use gridtable::{Row, Table, TableOptions, TerminalSize};
//!
//! let mut table = Table::with_options(TableOptions::default().style("classic"));
//! table.add_row(Row::new(["a"]));
//!
//! let rendering = table.render(TerminalSize::new(80, 24)).unwrap();
//! assert_eq!(rendering.to_string(), "+---+\n| a |\n+---+");
//! ```
//!
//! Wrapping replaces cell text in place, so a table is rendered once; build
//! fresh cells to render the same content again.

pub mod border;
pub mod buffer;
pub mod layout;

pub use border::{Arms, BorderComposer, Corner, Edge, Mark};
pub use buffer::LineBuffer;
pub use layout::{ColumnLayout, ColumnWidths};

use crate::ansi;
use crate::cell::{Cell, VAlign};
use crate::color::Color;
use crate::error::Result;
use crate::format::{Format, delimited, dokuwiki};
use crate::output::{self, DEFAULT_PAGER, Destination};
use crate::style::{BorderStyle, DEFAULT_STYLE, StyleRegistry};
use crate::terminal::TerminalSize;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

/// An ordered sequence of cells.
///
/// Header rows render exactly like other rows; the flag only matters to
/// callers and to the markup formats.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub header: bool,
}

impl Row {
    #[must_use]
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            header: false,
        }
    }

    /// A row of column labels.
    #[must_use]
    pub fn header<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        Self {
            header: true,
            ..Self::new(cells)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            header: false,
        }
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Name of the border style in the table's [`StyleRegistry`].
    pub style: String,
    /// Text laid over the top border, starting one column in.
    pub title: Option<String>,
    /// Column widths to use instead of allocating them.
    pub widths: Option<Vec<usize>>,
    pub format: Format,
    /// Write to this file instead of stdout.
    pub output_file: Option<PathBuf>,
    /// Pipe output through [`TableOptions::pager`].
    pub page: bool,
    pub pager: String,
    /// Border colour for cells that set none.
    pub border_color: Option<Color>,
    /// Text colour for cells that set none.
    pub text_color: Option<Color>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            title: None,
            widths: None,
            format: Format::Text,
            output_file: None,
            page: false,
            pager: DEFAULT_PAGER.to_string(),
            border_color: None,
            text_color: None,
        }
    }
}

impl TableOptions {
    #[must_use]
    pub fn style(mut self, name: impl Into<String>) -> Self {
        self.style = name.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn widths(mut self, widths: impl Into<Vec<usize>>) -> Self {
        self.widths = Some(widths.into());
        self
    }

    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn page(mut self, page: bool) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn pager(mut self, command: impl Into<String>) -> Self {
        self.pager = command.into();
        self
    }

    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Output file first, then the pager when paging, else stdout.
    #[must_use]
    pub fn destination(&self) -> Destination {
        if let Some(path) = &self.output_file {
            Destination::File(path.clone())
        } else if self.page {
            Destination::Pager(self.pager.clone())
        } else {
            Destination::Stdout
        }
    }
}

/// A finished rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendering {
    pub lines: Vec<String>,
    /// Widths used for the text format; empty for the other formats.
    pub layout: ColumnLayout,
}

impl Rendering {
    /// Lines joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Position and size of one cell in the output.
#[derive(Clone, Copy, Debug)]
struct Frame {
    row: usize,
    column: usize,
    /// Output column of the cell's left border.
    x: usize,
    /// Output line of the cell's top border.
    top: usize,
    width: usize,
    height: usize,
}

/// Rows of cells with their rendering options.
#[derive(Clone, Debug, Default)]
pub struct Table {
    rows: Vec<Row>,
    options: TableOptions,
    styles: StyleRegistry,
    /// Output file this table has already written, and so appends to.
    written: Option<PathBuf>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: TableOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Use `styles` to resolve [`TableOptions::style`].
    #[must_use]
    pub fn with_styles(mut self, styles: StyleRegistry) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TableOptions {
        &mut self.options
    }

    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    pub fn add_row(&mut self, row: impl Into<Row>) {
        self.rows.push(row.into());
    }

    pub fn add_header<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        self.rows.push(Row::header(cells));
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every row, keeping the options.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Render the table for a terminal of the given size.
    ///
    /// Fails with [`Error::UnknownStyle`](crate::Error::UnknownStyle) before
    /// touching any cell, and with
    /// [`Error::ColumnMismatch`](crate::Error::ColumnMismatch) before any
    /// line is produced. The text format wraps cell text in place.
    pub fn render(&mut self, terminal: TerminalSize) -> Result<Rendering> {
        let style = self.styles.get(&self.options.style)?.clone();

        let lines = match self.options.format {
            Format::Text => return self.render_text(terminal, &style),
            Format::Csv { separator } => delimited::render(&self.rows, separator)?,
            Format::Dokuwiki => dokuwiki::render(&self.rows),
        };
        Ok(Rendering {
            lines,
            layout: ColumnLayout::default(),
        })
    }

    /// Render, write to the configured destination, then clear the rows.
    ///
    /// The first flush to an output file replaces its content; later flushes
    /// to the same file append.
    pub fn flush(&mut self, terminal: TerminalSize) -> Result<()> {
        let rendering = self.render(terminal)?;
        let text = rendering.text();
        match self.options.destination() {
            Destination::File(path) if self.written.as_ref() == Some(&path) => {
                Destination::File(path).append(&text)?;
            }
            Destination::File(path) => {
                Destination::File(path.clone()).write(&text)?;
                self.written = Some(path);
            }
            destination => destination.write(&text)?,
        }
        self.rows.clear();
        Ok(())
    }

    /// Render, write to `writer`, then clear the rows.
    pub fn flush_to<W: Write>(&mut self, terminal: TerminalSize, writer: &mut W) -> Result<()> {
        let rendering = self.render(terminal)?;
        output::write_payload(writer, &rendering.text())?;
        self.rows.clear();
        Ok(())
    }

    fn render_text(&mut self, terminal: TerminalSize, style: &BorderStyle) -> Result<Rendering> {
        let layout = match &self.options.widths {
            Some(widths) => ColumnLayout::fixed(widths),
            None => layout::allocate(&layout::measure(&self.rows)?, terminal.width),
        };
        layout::check_columns(&self.rows, layout.columns())?;

        self.apply_default_colors();
        let heights: Vec<usize> = self
            .rows
            .iter_mut()
            .map(|row| {
                row.cells
                    .iter_mut()
                    .zip(&layout.widths)
                    .map(|(cell, &width)| cell.wrap(width).len())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let composer = BorderComposer::new(&self.rows, style);
        let mut buffer = LineBuffer::new();
        let mut top = 0;
        for (index, (row, &height)) in self.rows.iter().zip(&heights).enumerate() {
            tracing::trace!(row = index, height, "row height");
            let mut x = 0;
            for (column, (cell, &width)) in row.cells.iter().zip(&layout.widths).enumerate() {
                let frame = Frame {
                    row: index,
                    column,
                    x,
                    top,
                    width,
                    height,
                };
                draw_cell(&mut buffer, &composer, frame, cell);
                x += width + 1;
            }
            top += height + 1;
        }

        if let Some(title) = &self.options.title {
            let limit = buffer.width(0).saturating_sub(1);
            buffer.overlay(0, 1, title, limit);
        }

        Ok(Rendering {
            lines: buffer.into_lines(),
            layout,
        })
    }

    fn apply_default_colors(&mut self) {
        let TableOptions {
            border_color,
            text_color,
            ..
        } = &self.options;
        for cell in self.rows.iter_mut().flat_map(|row| row.cells.iter_mut()) {
            if cell.border_color.is_none() {
                cell.border_color.clone_from(border_color);
            }
            if cell.text_color.is_none() {
                cell.text_color.clone_from(text_color);
            }
        }
    }
}

/// Write one cell's borders and text lines.
fn draw_cell(buffer: &mut LineBuffer, composer: &BorderComposer<'_>, frame: Frame, cell: &Cell) {
    let Frame {
        row,
        column,
        x,
        top,
        width,
        height,
    } = frame;

    let horizontal = [
        (top, Corner::TopLeft, Edge::Top, Corner::TopRight),
        (top + height + 1, Corner::BottomLeft, Edge::Bottom, Corner::BottomRight),
    ];
    for (line, start, edge, end) in horizontal {
        let run = composer.paint(composer.edge(row, column, edge), 1);
        buffer.put(line, x, composer.paint(composer.corner(row, column, start), 1), 1);
        for offset in 1..=width {
            buffer.put(line, x + offset, run.clone(), 1);
        }
        buffer.put(
            line,
            x + width + 1,
            composer.paint(composer.corner(row, column, end), 1),
            1,
        );
    }

    let left = composer.paint(composer.edge(row, column, Edge::Left), 1);
    let right = composer.paint(composer.edge(row, column, Edge::Right), 1);
    let slack = height.saturating_sub(cell.text.len());
    let lead = match cell.valign {
        VAlign::Top => 0,
        VAlign::Middle => slack / 2,
        VAlign::Bottom => slack,
    };
    let blank = " ".repeat(width);

    for index in 0..height {
        let line = top + 1 + index;
        let text = index
            .checked_sub(lead)
            .and_then(|k| cell.text.get(k))
            .unwrap_or(&blank);
        buffer.put(line, x, left.clone(), 1);
        buffer.put(line, x + 1, ansi::colorize(text, cell.text_color.as_ref()), width);
        buffer.put(line, x + width + 1, right.clone(), 1);
    }
}
