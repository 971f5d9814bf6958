//! Border glyph composition.
//!
//! Borders are shared: the line between two cells, and the junction where up
//! to four cells meet, are drawn once no matter how many cells ask for them.
//! Each junction is described by four arms (up, down, left, right). An arm
//! is present when either cell beside it wants that edge. The glyph is then
//! picked from [`JUNCTION_RULES`], most specific rule first.
//!
//! Grid coordinates: junction `(line, boundary)` sits above row `line` and
//! left of column `boundary`, so a table with `R` rows and `C` columns has
//! junction lines `0..=R` and boundaries `0..=C`. Outside the grid there are
//! no cells and therefore no arms.

use super::Row;
use crate::ansi;
use crate::cell::{Cell, Sides};
use crate::color::Color;
use crate::style::{BorderStyle, Glyph};
use std::iter;

/// Corner of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Which lines leave a junction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arms {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// A predicate over the arms and the glyph it selects.
pub type Rule = (fn(Arms) -> bool, Glyph);

/// Junction glyph rules, checked top to bottom.
pub const JUNCTION_RULES: [Rule; 12] = [
    (|a| a.up && a.down && a.left && a.right, Glyph::Cross),
    (|a| a.down && a.left && a.right, Glyph::TopTee),
    (|a| a.up && a.left && a.right, Glyph::BottomTee),
    (|a| a.up && a.down && a.right, Glyph::LeftTee),
    (|a| a.up && a.down && a.left, Glyph::RightTee),
    (|a| a.down && a.right, Glyph::TopLeft),
    (|a| a.down && a.left, Glyph::TopRight),
    (|a| a.up && a.right, Glyph::BottomLeft),
    (|a| a.up && a.left, Glyph::BottomRight),
    (|a| a.left || a.right, Glyph::Horizontal),
    (|a| a.up || a.down, Glyph::Vertical),
    (|_| true, Glyph::Blank),
];

impl Arms {
    /// Glyph for this combination of arms.
    #[must_use]
    pub fn glyph(self) -> Glyph {
        JUNCTION_RULES
            .iter()
            .find(|(applies, _)| applies(self))
            .map_or(Glyph::Blank, |(_, glyph)| *glyph)
    }
}

/// A resolved border position: what to draw and in which colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark<'a> {
    pub glyph: Glyph,
    pub color: Option<&'a Color>,
}

impl Mark<'_> {
    const BLANK: Self = Self {
        glyph: Glyph::Blank,
        color: None,
    };
}

/// Resolves border glyphs for a grid of rows.
pub struct BorderComposer<'a> {
    rows: &'a [Row],
    style: &'a BorderStyle,
}

impl<'a> BorderComposer<'a> {
    #[must_use]
    pub fn new(rows: &'a [Row], style: &'a BorderStyle) -> Self {
        Self { rows, style }
    }

    /// Cell at a grid position; `None` coordinates are off the grid.
    fn cell(&self, row: Option<usize>, column: Option<usize>) -> Option<&'a Cell> {
        self.rows.get(row?)?.cells.get(column?)
    }

    /// First cell in `candidates` that wants one of `sides` and has a
    /// border colour.
    fn color_of(candidates: [(Option<&'a Cell>, Sides); 4]) -> Option<&'a Color> {
        candidates
            .into_iter()
            .filter_map(|(cell, sides)| cell.filter(|c| c.borders.intersects(sides)))
            .find_map(|cell| cell.border_color.as_ref())
    }

    /// Junction above row `line`, left of column `boundary`.
    #[must_use]
    pub fn junction(&self, line: usize, boundary: usize) -> Mark<'a> {
        let above = line.checked_sub(1);
        let before = boundary.checked_sub(1);
        let nw = self.cell(above, before);
        let ne = self.cell(above, Some(boundary));
        let sw = self.cell(Some(line), before);
        let se = self.cell(Some(line), Some(boundary));

        let wants = |cell: Option<&Cell>, side: Sides| cell.is_some_and(|c| c.shows(side));
        let arms = Arms {
            up: wants(nw, Sides::RIGHT) || wants(ne, Sides::LEFT),
            down: wants(sw, Sides::RIGHT) || wants(se, Sides::LEFT),
            left: wants(nw, Sides::BOTTOM) || wants(sw, Sides::TOP),
            right: wants(ne, Sides::BOTTOM) || wants(se, Sides::TOP),
        };

        let glyph = arms.glyph();
        if glyph == Glyph::Blank {
            return Mark::BLANK;
        }
        // Forward diagonal first, the cell behind the junction last.
        let color = Self::color_of([
            (se, Sides::TOP | Sides::LEFT),
            (ne, Sides::BOTTOM | Sides::LEFT),
            (sw, Sides::TOP | Sides::RIGHT),
            (nw, Sides::BOTTOM | Sides::RIGHT),
        ]);
        Mark { glyph, color }
    }

    /// Horizontal border above row `line` over column `column`.
    #[must_use]
    pub fn horizontal(&self, line: usize, column: usize) -> Mark<'a> {
        let above = self.cell(line.checked_sub(1), Some(column));
        let below = self.cell(Some(line), Some(column));
        let none = (None, Sides::empty());
        let color = Self::color_of([(below, Sides::TOP), (above, Sides::BOTTOM), none, none]);

        let drawn =
            above.is_some_and(|c| c.shows(Sides::BOTTOM)) || below.is_some_and(|c| c.shows(Sides::TOP));
        if drawn {
            Mark {
                glyph: Glyph::Horizontal,
                color,
            }
        } else {
            Mark::BLANK
        }
    }

    /// Vertical border in row `row` left of column `boundary`.
    #[must_use]
    pub fn vertical(&self, row: usize, boundary: usize) -> Mark<'a> {
        let before = self.cell(Some(row), boundary.checked_sub(1));
        let after = self.cell(Some(row), Some(boundary));
        let none = (None, Sides::empty());
        let color = Self::color_of([(after, Sides::LEFT), (before, Sides::RIGHT), none, none]);

        let drawn =
            before.is_some_and(|c| c.shows(Sides::RIGHT)) || after.is_some_and(|c| c.shows(Sides::LEFT));
        if drawn {
            Mark {
                glyph: Glyph::Vertical,
                color,
            }
        } else {
            Mark::BLANK
        }
    }

    /// Glyph at one corner of cell `(row, column)`.
    #[must_use]
    pub fn corner(&self, row: usize, column: usize, corner: Corner) -> Mark<'a> {
        match corner {
            Corner::TopLeft => self.junction(row, column),
            Corner::TopRight => self.junction(row, column + 1),
            Corner::BottomLeft => self.junction(row + 1, column),
            Corner::BottomRight => self.junction(row + 1, column + 1),
        }
    }

    /// Glyph along one edge of cell `(row, column)`.
    #[must_use]
    pub fn edge(&self, row: usize, column: usize, edge: Edge) -> Mark<'a> {
        match edge {
            Edge::Top => self.horizontal(row, column),
            Edge::Bottom => self.horizontal(row + 1, column),
            Edge::Left => self.vertical(row, column),
            Edge::Right => self.vertical(row, column + 1),
        }
    }

    /// Text for `mark` repeated `len` times, colour-wrapped when coloured.
    #[must_use]
    pub fn paint(&self, mark: Mark<'_>, len: usize) -> String {
        let run: String = iter::repeat_n(self.style.glyph(mark.glyph), len).collect();
        ansi::colorize(&run, mark.color)
    }
}
