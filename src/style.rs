//! Border glyph styles.
//!
//! A [`BorderStyle`] maps every junction role ([`Glyph`]) to one character.
//! Styles are looked up by name through a [`StyleRegistry`], which comes
//! preloaded with the built-in styles and accepts new ones at runtime:
//!
//! ```
//! use gridtable::{BorderStyle, Glyph, StyleRegistry};
//!
//! let mut registry = StyleRegistry::default();
//! assert_eq!(registry.get("classic").unwrap().glyph(Glyph::Cross), '+');
//!
//! registry.register("dots", BorderStyle::uniform('.', '.', '.'));
//! assert_eq!(registry.get("dots").unwrap().glyph(Glyph::TopLeft), '.');
//! assert!(registry.get("nope").is_err());
//! ```

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Role of a single border position in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Tee on the top edge, opening downwards (`┬`).
    TopTee,
    /// Tee on the bottom edge, opening upwards (`┴`).
    BottomTee,
    /// Tee on the left edge, opening rightwards (`├`).
    LeftTee,
    /// Tee on the right edge, opening leftwards (`┤`).
    RightTee,
    Cross,
    Horizontal,
    Vertical,
    /// No border at this position.
    Blank,
}

impl Glyph {
    /// Every role, in declaration order.
    pub const ALL: [Glyph; 12] = [
        Glyph::TopLeft,
        Glyph::TopRight,
        Glyph::BottomLeft,
        Glyph::BottomRight,
        Glyph::TopTee,
        Glyph::BottomTee,
        Glyph::LeftTee,
        Glyph::RightTee,
        Glyph::Cross,
        Glyph::Horizontal,
        Glyph::Vertical,
        Glyph::Blank,
    ];
}

/// Box drawing characters for every junction role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub top_tee: char,
    pub bottom_tee: char,
    pub left_tee: char,
    pub right_tee: char,
    pub cross: char,
    pub horizontal: char,
    pub vertical: char,
    pub blank: char,
}

impl BorderStyle {
    /// Single-line box drawing characters.
    #[must_use]
    pub const fn modern() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            top_tee: '┬',
            bottom_tee: '┴',
            left_tee: '├',
            right_tee: '┤',
            cross: '┼',
            horizontal: '─',
            vertical: '│',
            blank: ' ',
        }
    }

    /// ASCII box drawing characters (works in all terminals).
    #[must_use]
    pub const fn classic() -> Self {
        Self::uniform('+', '-', '|')
    }

    /// Double-line box drawing characters.
    #[must_use]
    pub const fn double() -> Self {
        Self {
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            top_tee: '╦',
            bottom_tee: '╩',
            left_tee: '╠',
            right_tee: '╣',
            cross: '╬',
            horizontal: '═',
            vertical: '║',
            blank: ' ',
        }
    }

    /// Heavy (bold) box drawing characters.
    #[must_use]
    pub const fn heavy() -> Self {
        Self {
            top_left: '┏',
            top_right: '┓',
            bottom_left: '┗',
            bottom_right: '┛',
            top_tee: '┳',
            bottom_tee: '┻',
            left_tee: '┣',
            right_tee: '┫',
            cross: '╋',
            horizontal: '━',
            vertical: '┃',
            blank: ' ',
        }
    }

    /// Rounded corners over single-line edges.
    #[must_use]
    pub const fn rounded() -> Self {
        let mut style = Self::modern();
        style.top_left = '╭';
        style.top_right = '╮';
        style.bottom_left = '╰';
        style.bottom_right = '╯';
        style
    }

    /// Style using one character for every corner, tee and cross.
    #[must_use]
    pub const fn uniform(junction: char, horizontal: char, vertical: char) -> Self {
        Self {
            top_left: junction,
            top_right: junction,
            bottom_left: junction,
            bottom_right: junction,
            top_tee: junction,
            bottom_tee: junction,
            left_tee: junction,
            right_tee: junction,
            cross: junction,
            horizontal,
            vertical,
            blank: ' ',
        }
    }

    /// Character drawn for `role`.
    #[must_use]
    pub const fn glyph(&self, role: Glyph) -> char {
        match role {
            Glyph::TopLeft => self.top_left,
            Glyph::TopRight => self.top_right,
            Glyph::BottomLeft => self.bottom_left,
            Glyph::BottomRight => self.bottom_right,
            Glyph::TopTee => self.top_tee,
            Glyph::BottomTee => self.bottom_tee,
            Glyph::LeftTee => self.left_tee,
            Glyph::RightTee => self.right_tee,
            Glyph::Cross => self.cross,
            Glyph::Horizontal => self.horizontal,
            Glyph::Vertical => self.vertical,
            Glyph::Blank => self.blank,
        }
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::modern()
    }
}

/// Name of the style used when none is configured.
pub const DEFAULT_STYLE: &str = "modern";

/// Named border styles.
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    styles: BTreeMap<String, BorderStyle>,
}

impl StyleRegistry {
    /// Registry with no styles at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// Add or replace a named style.
    pub fn register(&mut self, name: impl Into<String>, style: BorderStyle) {
        self.styles.insert(name.into(), style);
    }

    /// Look up a style by name.
    pub fn get(&self, name: &str) -> Result<&BorderStyle> {
        tracing::trace!(name, "looking up border style");
        self.styles.get(name).ok_or_else(|| Error::UnknownStyle {
            name: name.to_string(),
        })
    }

    /// Registered style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("modern", BorderStyle::modern());
        registry.register("classic", BorderStyle::classic());
        registry.register("double", BorderStyle::double());
        registry.register("heavy", BorderStyle::heavy());
        registry.register("rounded", BorderStyle::rounded());
        registry
    }
}
