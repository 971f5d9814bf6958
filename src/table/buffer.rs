//! Dense, auto-growing line buffer.
//!
//! Output is assembled as a grid of segments addressed by `(line, column)`,
//! where a column is one display character. A segment may span several
//! columns (a wrapped text line); the columns it covers hold an empty string.
//! Writes past the end of the buffer grow it, filling skipped positions with
//! [`PLACEHOLDER`], so rows of different heights can be written in any order.

/// Filler for positions nothing has been written to.
pub const PLACEHOLDER: &str = " ";

/// Rendered lines under construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Vec<String>>,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines written so far.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Number of columns on `line` (zero past the end).
    #[must_use]
    pub fn width(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, Vec::len)
    }

    fn slots(&mut self, line: usize, end: usize) -> &mut Vec<String> {
        if self.lines.len() <= line {
            self.lines.resize_with(line + 1, Vec::new);
        }
        let slots = &mut self.lines[line];
        if slots.len() < end {
            slots.resize(end, PLACEHOLDER.to_string());
        }
        slots
    }

    /// Write `segment` at `(line, column)`, covering `span` columns.
    pub fn put(&mut self, line: usize, column: usize, segment: impl Into<String>, span: usize) {
        let span = span.max(1);
        let slots = self.slots(line, column + span);
        slots[column] = segment.into();
        for slot in &mut slots[column + 1..column + span] {
            slot.clear();
        }
    }

    /// Overwrite single columns of `line` with the characters of `text`,
    /// starting at `column` and stopping before `limit`. Control characters
    /// are written as spaces.
    pub fn overlay(&mut self, line: usize, column: usize, text: &str, limit: usize) {
        for (offset, ch) in text.chars().enumerate() {
            let at = column + offset;
            if at >= limit {
                break;
            }
            let ch = if ch.is_control() { ' ' } else { ch };
            self.put(line, at, ch.to_string(), 1);
        }
    }

    /// Concatenate every line's segments.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_iter().map(|slots| slots.concat()).collect()
    }
}
