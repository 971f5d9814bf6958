//! ANSI escape sequence generation.

pub mod sequences;

pub use sequences::*;

use crate::color::Color;

/// SGR sequence selecting `color` as the foreground.
#[must_use]
pub fn fg_color(color: &Color) -> String {
    format!("{CSI}{}m", color.sgr())
}

/// Wrap `text` in a colour sequence and a reset. With no colour the text
/// is returned unchanged.
#[must_use]
pub fn colorize(text: &str, color: Option<&Color>) -> String {
    match color {
        Some(color) if !text.is_empty() => format!("{}{text}{RESET}", fg_color(color)),
        _ => text.to_string(),
    }
}

/// Remove CSI escape sequences, leaving only printable text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ESC {
            out.push(ch);
            continue;
        }
        if chars.peek() != Some(&'[') {
            continue;
        }
        chars.next();
        // Parameters and intermediates run until a final byte in 0x40..=0x7E.
        for c in chars.by_ref() {
            if ('\x40'..='\x7e').contains(&c) {
                break;
            }
        }
    }

    out
}

/// Number of characters `text` occupies once escape sequences are removed.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fg_color() {
        assert_eq!(fg_color(&Color::RED), "\x1b[31m");
        assert_eq!(fg_color(&Color::Rgb(1, 2, 3)), "\x1b[38;2;1;2;3m");
    }

    #[test]
    fn test_colorize() {
        assert_eq!(colorize("+", Some(&Color::GREEN)), "\x1b[32m+\x1b[0m");
        assert_eq!(colorize("plain", None), "plain");
        assert_eq!(colorize("", Some(&Color::GREEN)), "");
    }

    #[test]
    fn test_strip_ansi() {
        let colored = colorize("hello", Some(&Color::Indexed(208)));
        assert_eq!(strip_ansi(&colored), "hello");
        assert_eq!(strip_ansi("a\x1b[1;31mb\x1b[0mc"), "abc");
        assert_eq!(strip_ansi("no escapes"), "no escapes");
    }

    #[test]
    fn test_visible_len() {
        let colored = colorize("─┼─", Some(&Color::BLUE));
        assert_eq!(visible_len(&colored), 3);
    }
}
