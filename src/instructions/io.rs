//! # Console Output
//!
//! - PRN: Print register as a decimal line

use crate::{ExecutionError, MemoryBus, Output, CPU};

/// Executes the PRN instruction.
///
/// Emits the decimal value of the operand register as one line of output.
/// A failed write is reported as `ExecutionError::OutputFailed` and the PC
/// stays on the PRN byte.
///
/// Opcode: 0b0100_0111 (0x47)
/// Bytes: 2
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x47)
/// * `out` - Sink that receives the printed line
pub(crate) fn execute_prn<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    out: &mut dyn Output,
) -> Result<(), ExecutionError> {
    let reg = cpu.register_operand(1)?;

    out.emit(&cpu.registers[reg].to_string())
        .map_err(|e| ExecutionError::OutputFailed {
            reason: e.to_string(),
        })?;

    cpu.advance(opcode);
    Ok(())
}
