//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements the two-register ALU operations:
//! - ADD: Add
//! - MUL: Multiply
//! - AND: Bitwise AND
//! - OR: Bitwise OR
//! - CMP: Compare
//!
//! All take `regA, regB` operands, store into regA (except CMP), and are 3 bytes.
//! Arithmetic wraps modulo 256.

use crate::{ExecutionError, Flags, MemoryBus, CPU};

/// Applies `op` to regA and regB, stores the result in regA, and advances PC.
fn binary_op<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    op: fn(u8, u8) -> u8,
) -> Result<(), ExecutionError> {
    let reg_a = cpu.register_operand(1)?;
    let reg_b = cpu.register_operand(2)?;

    cpu.registers[reg_a] = op(cpu.registers[reg_a], cpu.registers[reg_b]);
    cpu.advance(opcode);

    Ok(())
}

/// Executes the ADD instruction: `regA <- regA + regB`.
///
/// The sum wraps modulo 256.
///
/// Opcode: 0b1010_0000 (0xA0)
/// Bytes: 3
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0xA0)
pub(crate) fn execute_add<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    binary_op(cpu, opcode, u8::wrapping_add)
}

/// Executes the MUL instruction: `regA <- regA * regB`.
///
/// The product wraps modulo 256, so `MUL` of 16 and 16 leaves 0.
///
/// Opcode: 0b1010_0010 (0xA2)
/// Bytes: 3
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0xA2)
pub(crate) fn execute_mul<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    binary_op(cpu, opcode, u8::wrapping_mul)
}

/// Executes the AND instruction: `regA <- regA & regB`.
///
/// Opcode: 0b1010_1000 (0xA8)
/// Bytes: 3
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0xA8)
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    binary_op(cpu, opcode, |a, b| a & b)
}

/// Executes the OR instruction: `regA <- regA | regB`.
///
/// Opcode: 0b1010_1010 (0xAA)
/// Bytes: 3
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0xAA)
pub(crate) fn execute_or<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> Result<(), ExecutionError> {
    binary_op(cpu, opcode, |a, b| a | b)
}

/// Executes the CMP instruction.
///
/// Compares regA with regB as unsigned bytes and replaces the whole flags
/// register with the outcome: exactly one of E, G, L is set afterwards.
/// Registers are not modified.
///
/// Opcode: 0b1010_0111 (0xA7)
/// Bytes: 3
///
/// Flags affected: E, G, L
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0xA7)
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let reg_a = cpu.register_operand(1)?;
    let reg_b = cpu.register_operand(2)?;

    cpu.flags = Flags::from_comparison(cpu.registers[reg_a], cpu.registers[reg_b]);
    cpu.advance(opcode);

    Ok(())
}
