//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PUSH: Push register onto the stack
//! - POP: Pop the stack into a register
//!
//! The stack grows downward from 0xF4. R7 holds the address of the current top
//! of stack; PUSH decrements it before writing, POP increments it after reading.
//! SP arithmetic wraps at 8 bits like any other register.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the PUSH instruction.
///
/// Stack operation:
/// 1. Decrement SP (wraps from 0x00 to 0xFF)
/// 2. Write the register value to memory at SP
///
/// `PUSH R7` pushes the stack pointer's value from before the decrement.
///
/// Opcode: 0b0100_0101 (0x45)
/// Bytes: 2
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x45)
pub(crate) fn execute_push<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let reg = cpu.register_operand(1)?;
    let value = cpu.registers[reg];

    cpu.push(value)?;
    cpu.advance(opcode);

    Ok(())
}

/// Executes the POP instruction.
///
/// Stack operation:
/// 1. Read memory at SP into the register
/// 2. Increment SP (wraps from 0xFF to 0x00)
///
/// `POP R7` leaves R7 holding the popped value.
///
/// Opcode: 0b0100_0110 (0x46)
/// Bytes: 2
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x46)
pub(crate) fn execute_pop<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let reg = cpu.register_operand(1)?;

    let value = cpu.pop()?;
    cpu.registers[reg] = value;
    cpu.advance(opcode);

    Ok(())
}
