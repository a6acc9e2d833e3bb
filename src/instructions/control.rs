//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - HLT: Halt
//! - JMP: Jump to the address in a register
//! - CALL: Call subroutine at the address in a register
//! - RET: Return from subroutine
//!
//! CALL pushes the address of the following instruction (PC + 2) as a single byte
//! and RET pops it back into the PC. The stack pointer lives in R7.

use crate::{ExecutionError, MemoryBus, RunState, CPU, OPCODE_TABLE};

/// Executes the HLT instruction.
///
/// Stops the run loop. The PC is left on the HLT byte.
///
/// Opcode: 0b0000_0001 (0x01)
/// Bytes: 1
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x01)
pub(crate) fn execute_hlt<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.state = RunState::Halted;
    Ok(())
}

/// Executes the JMP instruction: `PC <- reg`.
///
/// Also used by JEQ and JNE when their branch is taken.
///
/// Opcode: 0b0101_0100 (0x54)
/// Bytes: 2
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x54, or 0x55/0x56 from a taken branch)
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    let reg = cpu.register_operand(1)?;
    cpu.pc = cpu.registers[reg] as usize;
    Ok(())
}

/// Executes the CALL instruction.
///
/// 1. Compute the return address, PC + 2
/// 2. Push it onto the stack
/// 3. Set PC to the value of the operand register
///
/// The return address must fit in a byte; a CALL in the last two bytes of
/// memory is `OutOfBounds`.
///
/// Opcode: 0b0101_0000 (0x50)
/// Bytes: 2
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x50)
pub(crate) fn execute_call<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let reg = cpu.register_operand(1)?;
    let target = cpu.registers[reg];

    let return_address = cpu.pc + OPCODE_TABLE[opcode as usize].size_bytes as usize;
    let return_byte = u8::try_from(return_address).map_err(|_| ExecutionError::OutOfBounds {
        address: return_address,
    })?;

    cpu.push(return_byte)?;
    cpu.pc = target as usize;

    Ok(())
}

/// Executes the RET instruction: pop the return address into PC.
///
/// Opcode: 0b0001_0001 (0x11)
/// Bytes: 1
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x11)
pub(crate) fn execute_ret<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), ExecutionError> {
    cpu.pc = cpu.pop()? as usize;
    Ok(())
}
