//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary byte images to the disassembler and checks that the listing
//! covers every input byte exactly once.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ls8::disassembler::{disassemble, format_listing};

fuzz_target!(|bytes: &[u8]| {
    if bytes.len() > 4096 {
        return;
    }

    let instructions = disassemble(bytes);

    let covered: usize = instructions.iter().map(|i| i.size_bytes as usize).sum();
    assert_eq!(covered, bytes.len());

    let mut expected = 0;
    for instr in &instructions {
        assert_eq!(instr.address, expected);
        expected += instr.size_bytes as usize;
    }

    let listing = format_listing(&instructions);
    assert_eq!(listing.lines().count(), instructions.len());
});
