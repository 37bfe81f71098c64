//! Run output emission.
//!
//! Outputs are appended to the runtime's output file as `key=value` lines;
//! multiline values use the heredoc form (`key<<DELIM ... DELIM`). Downstream
//! workflow steps read these to learn whether the command triggered and what
//! its arguments were.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writes run outputs to the runtime's output sink.
#[derive(Debug)]
pub struct OutputWriter<W: Write> {
    out: W,
}

impl OutputWriter<File> {
    /// Opens the output file for appending, creating it if needed.
    pub fn append_to(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(OutputWriter { out: file })
    }
}

impl<W: Write> OutputWriter<W> {
    /// Wraps an arbitrary writer (tests use an in-memory buffer).
    pub fn new(out: W) -> Self {
        OutputWriter { out }
    }

    /// Emits one output.
    ///
    /// Values containing newlines are written in heredoc form with a
    /// delimiter guaranteed not to collide with any value line.
    pub fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        if key.is_empty() || key.contains(['=', '\n', '\r']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid output key: {key:?}"),
            ));
        }

        if value.contains(['\n', '\r']) {
            let delimiter = heredoc_delimiter(value);
            writeln!(self.out, "{key}<<{delimiter}")?;
            writeln!(self.out, "{value}")?;
            writeln!(self.out, "{delimiter}")?;
        } else {
            writeln!(self.out, "{key}={value}")?;
        }
        self.out.flush()
    }

    /// Emits a boolean output.
    pub fn set_bool(&mut self, key: &str, value: bool) -> io::Result<()> {
        self.set(key, if value { "true" } else { "false" })
    }
}

/// Picks a heredoc delimiter that no line of `value` equals.
fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = String::from("EOF");
    while value.lines().any(|line| line == delimiter) {
        delimiter.push('F');
    }
    delimiter
}
