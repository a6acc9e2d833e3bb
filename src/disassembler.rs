//! LS-8 Disassembler Module
//!
//! Converts a byte image back into readable mnemonics, using the same opcode
//! table the CPU decodes with.

use std::fmt::Write as _;

use crate::opcodes::{LDI, OPCODE_TABLE};

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: usize,

    /// The opcode byte value
    pub opcode: u8,

    /// Instruction mnemonic (e.g. "LDI", "CALL"), or ".byte" for data
    pub mnemonic: &'static str,

    /// Operand bytes (0-2)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (opcode + operands)
    pub size_bytes: u8,
}

/// Decode a single instruction from the start of `bytes`.
///
/// Returns `None` for unassigned opcodes and for instructions truncated by the
/// end of the slice.
pub fn decode_instruction(bytes: &[u8], address: usize) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];

    if !metadata.implemented {
        return None;
    }

    let operand_count = metadata.operand_count as usize;
    if rest.len() < operand_count {
        return None;
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        operand_bytes: rest[..operand_count].to_vec(),
        size_bytes: metadata.size_bytes,
    })
}

/// Disassemble a byte image into instructions.
///
/// Bytes that do not decode become one-byte `.byte` entries so the walk can
/// always continue.
///
/// # Examples
///
/// ```
/// use ls8::disassembler::{disassemble, format_instruction};
///
/// let listing = disassemble(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]);
/// let text: Vec<String> = listing.iter().map(format_instruction).collect();
/// assert_eq!(text, vec!["LDI R0,8", "PRN R0", "HLT"]);
/// ```
pub fn disassemble(bytes: &[u8]) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;

    while pc < bytes.len() {
        match decode_instruction(&bytes[pc..], pc) {
            Some(instr) => {
                pc += instr.size_bytes as usize;
                instructions.push(instr);
            }
            None => {
                instructions.push(Instruction {
                    address: pc,
                    opcode: bytes[pc],
                    mnemonic: ".byte",
                    operand_bytes: Vec::new(),
                    size_bytes: 1,
                });
                pc += 1;
            }
        }
    }

    instructions
}

/// Format a single instruction as assembly text.
///
/// Register operands print as `Rn`; the LDI immediate prints in decimal.
pub fn format_instruction(instr: &Instruction) -> String {
    if instr.mnemonic == ".byte" {
        return format!(".byte 0b{:08b}", instr.opcode);
    }

    let operands: Vec<String> = instr
        .operand_bytes
        .iter()
        .enumerate()
        .map(|(i, byte)| {
            if instr.opcode == LDI && i == 1 {
                byte.to_string()
            } else {
                format!("R{}", byte)
            }
        })
        .collect();

    if operands.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operands.join(","))
    }
}

/// Format a full listing, one instruction per line, with address and raw bytes.
///
/// ```text
/// 00: 82 00 08  LDI R0,8
/// 03: 47 00     PRN R0
/// 05: 01        HLT
/// ```
pub fn format_listing(instructions: &[Instruction]) -> String {
    let mut out = String::new();

    for instr in instructions {
        let mut raw = format!("{:02X}", instr.opcode);
        for byte in &instr.operand_bytes {
            let _ = write!(raw, " {:02X}", byte);
        }
        let _ = writeln!(
            out,
            "{:02X}: {:<10}{}",
            instr.address,
            raw,
            format_instruction(instr)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::{CALL, HLT, MUL};

    #[test]
    fn test_disassemble_empty() {
        assert!(disassemble(&[]).is_empty());
    }

    #[test]
    fn test_decode_two_register_instruction() {
        let instr = decode_instruction(&[MUL, 0x00, 0x01], 0x10).unwrap();

        assert_eq!(instr.address, 0x10);
        assert_eq!(instr.mnemonic, "MUL");
        assert_eq!(instr.operand_bytes, vec![0x00, 0x01]);
        assert_eq!(instr.size_bytes, 3);
        assert_eq!(format_instruction(&instr), "MUL R0,R1");
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode_instruction(&[CALL], 0), None);
    }

    #[test]
    fn test_unknown_bytes_become_data() {
        let listing = disassemble(&[0xFF, HLT]);

        assert_eq!(listing.len(), 2);
        assert_eq!(format_instruction(&listing[0]), ".byte 0b11111111");
        assert_eq!(listing[1].address, 1);
        assert_eq!(format_instruction(&listing[1]), "HLT");
    }

    #[test]
    fn test_format_listing() {
        let listing = disassemble(&[0b1000_0010, 0x00, 0x08, HLT]);
        assert_eq!(
            format_listing(&listing),
            "00: 82 00 08  LDI R0,8\n03: 01        HLT\n"
        );
    }
}
