//! # Output Sink
//!
//! `PRN` is the only instruction with a visible effect outside the machine. It
//! hands one line of text to an `Output`, which decides where the line goes.

use std::io::{self, Write};

/// Destination for lines emitted by a running program.
pub trait Output {
    /// Emits a single line. `line` never contains a trailing newline.
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory. Handy for tests and embedding.
impl Output for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes each line, newline-terminated, to any `io::Write`.
///
/// # Examples
///
/// ```
/// use ls8::{Console, Output};
///
/// let mut console = Console::new(Vec::new());
/// console.emit("42").unwrap();
/// assert_eq!(console.into_inner(), b"42\n");
/// ```
#[derive(Debug)]
pub struct Console<W: Write> {
    writer: W,
}

impl Console<io::Stdout> {
    /// Console bound to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    /// Console writing one line per `emit` to `writer`, flushing after each line.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the console and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for Console<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}
