//! # Program Loader
//!
//! Parses the `.ls8` text format into a byte image ready for `CPU::load_program`.
//!
//! ## Format
//!
//! One byte per line, written as an 8-digit binary literal. Anything after `#` is
//! a comment. Blank and comment-only lines are ignored.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! Lines that are not a binary byte (`hello`, `102`, `111111111`) are handled
//! according to `MalformedLines`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::MEMORY_SIZE;

/// Errors raised while turning a program file into a byte image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("couldn't read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line is not a binary byte literal (only under `MalformedLines::Reject`).
    #[error("line {line}: {text:?} is not an 8-bit binary literal")]
    Malformed { line: usize, text: String },

    /// The program does not fit in memory.
    #[error("program is {len} bytes but memory holds {}", MEMORY_SIZE)]
    TooLarge { len: usize },
}

/// What to do with a line that is neither blank, a comment, nor a binary byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLines {
    /// Log a warning and skip the line.
    #[default]
    Skip,
    /// Fail with `LoadError::Malformed`.
    Reject,
}

/// Parses `.ls8` source text into bytes.
///
/// # Examples
///
/// ```
/// use ls8::loader::{parse_program, MalformedLines};
///
/// let source = "10000010 # LDI\n\n# comment\n00000001\n";
/// let bytes = parse_program(source, MalformedLines::Skip).unwrap();
/// assert_eq!(bytes, vec![0b1000_0010, 0b0000_0001]);
/// ```
pub fn parse_program(source: &str, malformed: MalformedLines) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let code = raw.split('#').next().unwrap_or("").trim();

        if code.is_empty() {
            continue;
        }

        match u8::from_str_radix(code, 2) {
            Ok(byte) => bytes.push(byte),
            Err(_) => match malformed {
                MalformedLines::Skip => {
                    warn!(line, text = code, "skipping malformed program line");
                }
                MalformedLines::Reject => {
                    return Err(LoadError::Malformed {
                        line,
                        text: code.to_string(),
                    });
                }
            },
        }
    }

    if bytes.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge { len: bytes.len() });
    }

    Ok(bytes)
}

/// Reads and parses a `.ls8` file.
pub fn load_file(path: impl AsRef<Path>, malformed: MalformedLines) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bytes = parse_program(&source, malformed)?;
    debug!(path = %path.display(), bytes = bytes.len(), "parsed program file");

    Ok(bytes)
}
