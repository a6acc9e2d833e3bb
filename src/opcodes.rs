//! # Opcode Metadata Table
//!
//! This module contains the LS-8 opcode byte values and the 256-entry metadata
//! table that serves as the single source of truth for instruction decoding.
//!
//! LS-8 opcodes are self-describing. Each byte is laid out as `AABCDDDD`:
//!
//! - `AA`: number of operand bytes that follow the opcode (0-2)
//! - `B`: 1 if the instruction is handled by the ALU
//! - `C`: 1 if the instruction sets the PC itself
//! - `DDDD`: instruction identifier
//!
//! The table is derived from those bits, so an instruction's size is always
//! `operand_count + 1`. Bytes with no instruction are marked `"???"`.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;
/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;
/// Push register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// Pop the stack into a register.
pub const POP: u8 = 0b0100_0110;
/// Print a register as a decimal line.
pub const PRN: u8 = 0b0100_0111;
/// Call subroutine at the address in a register.
pub const CALL: u8 = 0b0101_0000;
/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;
/// Jump if the E flag is set.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if the E flag is clear.
pub const JNE: u8 = 0b0101_0110;
/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;
/// Add two registers.
pub const ADD: u8 = 0b1010_0000;
/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;
/// Compare two registers.
pub const CMP: u8 = 0b1010_0111;
/// Bitwise AND of two registers.
pub const AND: u8 = 0b1010_1000;
/// Bitwise OR of two registers.
pub const OR: u8 = 0b1010_1010;

/// Metadata for a single LS-8 opcode.
///
/// # Examples
///
/// ```
/// use ls8::opcodes::{LDI, OPCODE_TABLE};
///
/// let ldi = &OPCODE_TABLE[LDI as usize];
/// assert_eq!(ldi.mnemonic, "LDI");
/// assert_eq!(ldi.operand_count, 2);
/// assert_eq!(ldi.size_bytes, 3);
/// assert!(!ldi.sets_pc);
/// assert!(ldi.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g. "LDI", "PRN", "???" for unassigned bytes).
    pub mnemonic: &'static str,

    /// Number of operand bytes following the opcode.
    pub operand_count: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether the handler sets the PC instead of advancing by `size_bytes`.
    ///
    /// Conditional jumps set this too: they advance by `size_bytes` only when the
    /// branch is not taken.
    pub sets_pc: bool,

    /// Whether a handler exists for this opcode.
    pub implemented: bool,
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    operand_count: 0,
    size_bytes: 1,
    sets_pc: false,
    implemented: false,
};

const fn entry(mnemonic: &'static str, opcode: u8) -> OpcodeMetadata {
    let operand_count = opcode >> 6;
    OpcodeMetadata {
        mnemonic,
        operand_count,
        size_bytes: operand_count + 1,
        sets_pc: opcode & 0b0001_0000 != 0,
        implemented: true,
    }
}

const fn build_table() -> [OpcodeMetadata; 256] {
    let mut table = [ILLEGAL; 256];

    table[HLT as usize] = entry("HLT", HLT);
    table[RET as usize] = entry("RET", RET);
    table[PUSH as usize] = entry("PUSH", PUSH);
    table[POP as usize] = entry("POP", POP);
    table[PRN as usize] = entry("PRN", PRN);
    table[CALL as usize] = entry("CALL", CALL);
    table[JMP as usize] = entry("JMP", JMP);
    table[JEQ as usize] = entry("JEQ", JEQ);
    table[JNE as usize] = entry("JNE", JNE);
    table[LDI as usize] = entry("LDI", LDI);
    table[ADD as usize] = entry("ADD", ADD);
    table[MUL as usize] = entry("MUL", MUL);
    table[CMP as usize] = entry("CMP", CMP);
    table[AND as usize] = entry("AND", AND);
    table[OR as usize] = entry("OR", OR);

    table
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use ls8::OPCODE_TABLE;
///
/// let hlt = &OPCODE_TABLE[0b0000_0001];
/// assert_eq!(hlt.mnemonic, "HLT");
/// assert_eq!(hlt.size_bytes, 1);
///
/// // Unassigned byte
/// let illegal = &OPCODE_TABLE[0x00];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.implemented);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();
