//! Output destinations for a rendered table.

use crate::error::{Error, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Pager used when paging is requested without a command.
pub const DEFAULT_PAGER: &str = "less -c -r";

/// Where a rendered payload goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Stdout,
    /// Written to a file. Missing parent directories are created.
    File(PathBuf),
    /// Piped through a pager command line (program and arguments split on
    /// whitespace).
    Pager(String),
}

impl Destination {
    /// Write `payload` followed by a newline, replacing the file's previous
    /// content.
    pub fn write(&self, payload: &str) -> Result<()> {
        self.emit(payload, false)
    }

    /// Like [`Destination::write`], but add to the end of an existing file.
    pub fn append(&self, payload: &str) -> Result<()> {
        self.emit(payload, true)
    }

    fn emit(&self, payload: &str, append: bool) -> Result<()> {
        tracing::debug!(destination = ?self, append, bytes = payload.len(), "writing table");
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                write_payload(&mut stdout, payload)?;
                stdout.flush()?;
                Ok(())
            }
            Self::File(path) => {
                let mut file = open_file(path, append)?;
                write_payload(&mut file, payload)?;
                Ok(())
            }
            Self::Pager(command) => page(command, payload),
        }
    }
}

/// Write `payload` and a trailing newline to any writer.
pub fn write_payload<W: Write>(writer: &mut W, payload: &str) -> io::Result<()> {
    writer.write_all(payload.as_bytes())?;
    writer.write_all(b"\n")
}

fn open_file(path: &Path, append: bool) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
}

fn page(command: &str, payload: &str) -> Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts.next().unwrap_or("less");
    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        match write_payload(&mut stdin, payload) {
            // The user quit the pager before reading everything.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
            other => other?,
        }
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Pager {
            command: command.to_string(),
            status: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_payload_appends_newline() {
        let mut out = Vec::new();
        write_payload(&mut out, "a\nb").unwrap();
        assert_eq!(out, b"a\nb\n");
    }

    #[test]
    fn test_file_destination_creates_parents_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/table.txt");
        let destination = Destination::File(path.clone());

        destination.write("first run, longer content").unwrap();
        destination.write("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_file_destination_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log/table.txt");
        let destination = Destination::File(path.clone());

        destination.append("one").unwrap();
        destination.append("two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");

        destination.write("three").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "three\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_pager_success_and_failure() {
        assert!(Destination::Pager("cat".into()).write("paged").is_ok());
        let err = Destination::Pager("false".into()).write("x").unwrap_err();
        assert!(matches!(err, Error::Pager { command, .. } if command == "false"));
    }

    #[test]
    fn test_missing_pager_is_io_error() {
        let err = Destination::Pager("definitely-not-a-pager-binary".into())
            .write("x")
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
