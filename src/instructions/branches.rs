//! # Branch Instructions
//!
//! This module implements the conditional jumps:
//! - JEQ: Jump if Equal
//! - JNE: Jump if Not Equal
//!
//! Both test the E flag only and take the target address from a register.
//! When the branch is not taken the PC moves past the 2-byte instruction.

use crate::instructions::control;
use crate::{ExecutionError, MemoryBus, CPU};

fn branch_if<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    taken: bool,
) -> Result<(), ExecutionError> {
    if taken {
        control::execute_jmp(cpu, opcode)
    } else {
        // Still validate the operand so a bad register faults on either path
        cpu.register_operand(1)?;
        cpu.advance(opcode);
        Ok(())
    }
}

/// Executes the JEQ instruction: jump to the address in the register if E is set.
///
/// Opcode: 0b0101_0101 (0x55)
/// Bytes: 2 (PC moves by 2 only when the branch is not taken)
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x55)
pub(crate) fn execute_jeq<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let taken = cpu.flags.equal();
    branch_if(cpu, opcode, taken)
}

/// Executes the JNE instruction: jump to the address in the register if E is clear.
///
/// Opcode: 0b0101_0110 (0x56)
/// Bytes: 2 (PC moves by 2 only when the branch is not taken)
///
/// Flags affected: None
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The opcode byte for this instruction (0x56)
pub(crate) fn execute_jne<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flags.equal();
    branch_if(cpu, opcode, taken)
}
