//! Table cells and text wrapping.
//!
//! A [`Cell`] carries its text (already split on newlines), sizing
//! constraints, padding, alignment, border visibility and colours. Before a
//! cell is drawn its text is wrapped to the column width with
//! [`Cell::wrap`], which replaces the text with padded, aligned display
//! lines of exactly that width.
//!
//! # Wrapping
//!
//! Lines that fit are kept whole. Longer lines are split on single spaces
//! and packed greedily; continuation lines start with `newline_indent`
//! spaces. A word that cannot fit on a line by itself is cut into
//! character chunks.
//!
//! ```
//! use gridtable::{Align, Cell};
//!
//! let mut cell = Cell::new("one two three").align(Align::Right);
//! cell.wrap(9);
//! assert_eq!(cell.text, [" one two ", "   three "]);
//! ```

use crate::color::Color;
use bitflags::bitflags;
use std::iter;

bitflags! {
    /// Edges of a cell that want a border drawn.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct Sides: u8 {
        const TOP    = 0x01;
        const RIGHT  = 0x02;
        const BOTTOM = 0x04;
        const LEFT   = 0x08;
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self::all()
    }
}

/// Horizontal alignment of text inside a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment of a cell's lines inside its row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Blank space around a cell's text, in characters (left/right) and
/// lines (top/bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    /// No padding on any side.
    pub const NONE: Self = Self::uniform(0);

    #[must_use]
    pub const fn uniform(n: usize) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Padding with `horizontal` characters left and right and `vertical`
    /// lines above and below.
    #[must_use]
    pub const fn symmetric(horizontal: usize, vertical: usize) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Left plus right padding.
    #[must_use]
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

impl Default for Padding {
    /// One space either side of the text, no blank lines.
    fn default() -> Self {
        Self::symmetric(1, 0)
    }
}

/// A single table entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// Text lines. Replaced by the wrapped display lines on [`Cell::wrap`].
    pub text: Vec<String>,
    /// Lower bound for the column width.
    pub min_width: Option<usize>,
    /// Exact column width, bypassing allocation for this column.
    pub width: Option<usize>,
    /// Upper bound the column grows towards instead of the text width.
    pub max_width: Option<usize>,
    pub padding: Padding,
    pub halign: Align,
    pub valign: VAlign,
    /// Spaces prefixed to continuation lines produced by wrapping.
    pub newline_indent: usize,
    /// Edges that want a border.
    pub borders: Sides,
    pub border_color: Option<Color>,
    pub text_color: Option<Color>,
}

impl Cell {
    /// Create a cell, splitting `text` on newlines.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().split('\n').map(str::to_string).collect(),
            ..Self::default()
        }
    }

    /// Cell with no text lines at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.halign = align;
        self
    }

    #[must_use]
    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    #[must_use]
    pub fn newline_indent(mut self, indent: usize) -> Self {
        self.newline_indent = indent;
        self
    }

    #[must_use]
    pub fn borders(mut self, borders: Sides) -> Self {
        self.borders = borders;
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

    /// Whether the cell wants a border on every edge in `sides`.
    #[must_use]
    pub fn shows(&self, sides: Sides) -> bool {
        self.borders.contains(sides)
    }

    /// Smallest width that still leaves one character for text.
    #[must_use]
    pub fn floor_width(&self) -> usize {
        self.padding.horizontal() + 1
    }

    /// Width needed to show the longest line unwrapped, padding included.
    #[must_use]
    pub fn natural_width(&self) -> usize {
        let longest = self
            .text
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        self.padding.horizontal() + longest
    }

    /// Wrapped display lines for a column of `width` characters, leaving the
    /// cell untouched.
    #[must_use]
    pub fn wrap_lines(&self, width: usize) -> Vec<String> {
        let wrap_width = width.saturating_sub(self.padding.horizontal()).max(1);
        iter::repeat_with(String::new)
            .take(self.padding.top)
            .chain(self.text.iter().cloned())
            .chain(iter::repeat_with(String::new).take(self.padding.bottom))
            .flat_map(|line| wrap_line(&line, wrap_width, self.newline_indent))
            .map(|line| self.format_line(&line, width))
            .collect()
    }

    /// Replace the text with its wrapped display lines.
    ///
    /// This is a one-way transformation: wrapping an already wrapped cell
    /// pads it a second time.
    pub fn wrap(&mut self, width: usize) -> &[String] {
        self.text = self.wrap_lines(width);
        &self.text
    }

    /// Pad and align one line to exactly `width` characters. Lines longer
    /// than the space available are never truncated.
    fn format_line(&self, line: &str, width: usize) -> String {
        let inner = width.saturating_sub(self.padding.horizontal());
        let len = line.chars().count();
        let slack = inner.saturating_sub(len);
        let (before, after) = match self.halign {
            Align::Left => (0, slack),
            Align::Center => (slack / 2, slack - slack / 2),
            Align::Right => (slack, 0),
        };

        let mut out = String::with_capacity(line.len() + width);
        out.extend(iter::repeat_n(' ', self.padding.left + before));
        out.push_str(line);
        out.extend(iter::repeat_n(' ', after + self.padding.right));
        out
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `n`th character, or the end of the string.
fn char_boundary(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Greedily pack the words of `line` into lines of at most `wrap`
/// characters, cutting words that do not fit on a line of their own.
pub(crate) fn wrap_line(line: &str, wrap: usize, indent: usize) -> Vec<String> {
    if char_len(line) <= wrap {
        return vec![line.to_string()];
    }

    let indent = if indent < wrap { indent } else { 0 };
    let prefix = " ".repeat(indent);
    let mut out = Vec::new();
    let mut current = String::new();
    // `current` holds nothing beyond the continuation prefix.
    let mut fresh = true;

    for word in line.split(' ') {
        if fresh && word.is_empty() && !out.is_empty() {
            continue;
        }

        let joined = char_len(&current) + usize::from(!fresh) + char_len(word);
        if joined <= wrap {
            if !fresh {
                current.push(' ');
            }
            current.push_str(word);
            fresh = false;
            continue;
        }

        if !fresh {
            if current.contains(|c: char| c != ' ') {
                out.push(std::mem::replace(&mut current, prefix.clone()));
            } else {
                current = if out.is_empty() {
                    String::new()
                } else {
                    prefix.clone()
                };
            }
            fresh = true;
            if word.is_empty() {
                continue;
            }
            if char_len(&current) + char_len(word) <= wrap {
                current.push_str(word);
                fresh = false;
                continue;
            }
        }

        let mut rest = word;
        loop {
            let room = wrap - char_len(&current);
            let (chunk, tail) = rest.split_at(char_boundary(rest, room));
            current.push_str(chunk);
            rest = tail;
            if rest.is_empty() {
                fresh = false;
                break;
            }
            out.push(std::mem::replace(&mut current, prefix.clone()));
        }
    }

    if !fresh || out.is_empty() {
        out.push(current);
    }
    out
}
