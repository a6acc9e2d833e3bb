//! Fuzz target for the `.ls8` text loader.
//!
//! Feeds arbitrary text to the parser in both malformed-line modes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ls8::loader::{parse_program, LoadError, MalformedLines};
use ls8::MEMORY_SIZE;

fuzz_target!(|source: &str| {
    let lenient = parse_program(source, MalformedLines::Skip);
    let strict = parse_program(source, MalformedLines::Reject);

    if let Ok(bytes) = &lenient {
        assert!(bytes.len() <= MEMORY_SIZE);
    }

    // Anything strict mode accepts, lenient mode accepts identically
    if let Ok(bytes) = &strict {
        assert_eq!(lenient.as_ref().ok(), Some(bytes));
    }

    if let Err(LoadError::Malformed { line, .. }) = strict {
        assert!(line >= 1 && line <= source.lines().count());
    }
});
