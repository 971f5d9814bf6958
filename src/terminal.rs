//! Terminal size discovery.
//!
//! Layout never queries the terminal itself; callers pass a
//! [`TerminalSize`], usually from [`TerminalSize::detect`].

use std::env;
use std::io;

/// Terminal dimensions in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

impl TerminalSize {
    /// Size assumed when nothing better is known.
    pub const FALLBACK: Self = Self::new(80, 24);

    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Size of the terminal on stdout, else `COLUMNS`/`LINES`, else
    /// [`TerminalSize::FALLBACK`].
    #[must_use]
    pub fn detect() -> Self {
        match terminal_size() {
            Ok((cols, rows)) => Self::new(usize::from(cols), usize::from(rows)),
            Err(err) => {
                tracing::trace!(%err, "terminal size query failed");
                Self::from_env().unwrap_or(Self::FALLBACK)
            }
        }
    }

    /// Size from the `COLUMNS` and `LINES` environment variables. A missing
    /// `LINES` falls back to the default height.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let parse = |name: &str| {
            env::var(name)
                .ok()
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
        };
        let width = parse("COLUMNS")?;
        let height = parse("LINES").unwrap_or(Self::FALLBACK.height);
        Some(Self::new(width, height))
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Get terminal size (columns, rows) of stdout.
#[cfg(unix)]
#[allow(unsafe_code)]
pub fn terminal_size() -> io::Result<(u16, u16)> {
    // SAFETY: an all-zero winsize is a valid value for ioctl to fill in
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

/// Get terminal size (columns, rows) of stdout.
#[cfg(not(unix))]
pub fn terminal_size() -> io::Result<(u16, u16)> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "terminal size query is only implemented on unix",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_size_does_not_panic() {
        // This might fail in CI without a TTY, but should not panic
        let _ = terminal_size();
    }

    #[test]
    fn test_detect_is_positive() {
        let size = TerminalSize::detect();
        assert!(size.width > 0);
        assert!(size.height > 0);
    }

    #[test]
    fn test_default_is_fallback() {
        assert_eq!(TerminalSize::default(), TerminalSize::new(80, 24));
    }
}
