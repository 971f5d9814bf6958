//! Constant ANSI escape sequences.

/// Escape character that starts every control sequence.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";
