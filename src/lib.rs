//! `gridtable` - Bordered text tables for the terminal
//!
//! Cells wrap their text to the width allocated to their column, adjacent
//! cells share border glyphs, and every cell can hide individual edges or
//! colour its text and borders independently.
//!
//! ```
//! use gridtable::{Cell, Row, Table, TableOptions, TerminalSize};
//!
//! let mut table = Table::with_options(TableOptions::default().title("Team"));
//! table.add_header(["Name", "Role"]);
//! table.add_row(Row::new([Cell::new("Ann"), Cell::new("Maintainer")]));
//!
//! let rendering = table.render(TerminalSize::new(80, 24)).unwrap();
//! assert_eq!(rendering.lines[0], "┌Team──┬────────────┐");
//! assert_eq!(rendering.lines[2], "├──────┼────────────┤");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for the ioctl)
#![allow(clippy::cast_possible_truncation)] // Intentional width casts
#![allow(clippy::cast_sign_loss)] // Intentional width conversions
#![allow(clippy::cast_possible_wrap)] // Remaining width may go negative
#![allow(clippy::module_name_repetitions)] // Allow table::TableOptions etc
#![allow(clippy::struct_excessive_bools)] // Junction arms are four flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod ansi;
pub mod cell;
pub mod color;
pub mod error;
pub mod format;
pub mod output;
pub mod style;
pub mod table;
pub mod terminal;

// Re-export core types at crate root
pub use cell::{Align, Cell, Padding, Sides, VAlign};
pub use color::Color;
pub use error::{Error, Result};
pub use style::{BorderStyle, DEFAULT_STYLE, Glyph, StyleRegistry};

// Re-export table types
pub use table::{ColumnLayout, Rendering, Row, Table, TableOptions};

// Re-export output types
pub use format::Format;
pub use output::{DEFAULT_PAGER, Destination};
pub use terminal::{TerminalSize, terminal_size};
