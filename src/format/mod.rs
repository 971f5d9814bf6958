//! Output formats.
//!
//! [`Format::Text`] is the bordered terminal rendering. The other formats
//! write one record per row from the cells' raw text and ignore every
//! layout and border attribute.

pub mod delimited;
pub mod dokuwiki;

/// How a table is serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Bordered, wrapped text for the terminal.
    #[default]
    Text,
    /// Delimited values with every field quoted.
    Csv { separator: u8 },
    /// DokuWiki table markup.
    Dokuwiki,
}

impl Format {
    /// Comma-separated values.
    #[must_use]
    pub const fn csv() -> Self {
        Self::Csv { separator: b',' }
    }
}
