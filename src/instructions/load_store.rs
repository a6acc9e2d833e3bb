//! # Load Instructions
//!
//! - LDI: Load Immediate

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the LDI instruction: `reg <- imm8`.
///
/// Any register may be loaded, including R7. Loading R7 moves the stack.
///
/// Opcode: 0b1000_0010 (0x82)
/// Bytes: 3
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x82)
pub(crate) fn execute_ldi<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let reg = cpu.register_operand(1)?;
    let value = cpu.operand(2)?;

    cpu.registers[reg] = value;
    cpu.advance(opcode);

    Ok(())
}
