//! # LS-8 Instruction Implementations
//!
//! This module contains the implementations of all LS-8 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the CPU and the opcode byte.
//!
//! Every handler leaves the PC on the next instruction to execute. Handlers validate
//! their operands before mutating state, so a failed instruction changes nothing.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic, logic and comparison (ADD, MUL, AND, OR, CMP)
//! - **branches**: Conditional jumps on the E flag (JEQ, JNE)
//! - **control**: Unconditional control flow (HLT, JMP, CALL, RET)
//! - **io**: Console output (PRN)
//! - **load_store**: Immediate loads (LDI)
//! - **stack**: Stack operations (PUSH, POP)

pub mod alu;
pub mod branches;
pub mod control;
pub mod io;
pub mod load_store;
pub mod stack;

use crate::opcodes::*;
use crate::{ExecutionError, MemoryBus, Output, CPU};

/// Dispatches `opcode` to its handler.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    out: &mut dyn Output,
) -> Result<(), ExecutionError> {
    match opcode {
        HLT => control::execute_hlt(cpu, opcode),
        LDI => load_store::execute_ldi(cpu, opcode),
        PRN => io::execute_prn(cpu, opcode, out),
        ADD => alu::execute_add(cpu, opcode),
        MUL => alu::execute_mul(cpu, opcode),
        AND => alu::execute_and(cpu, opcode),
        OR => alu::execute_or(cpu, opcode),
        CMP => alu::execute_cmp(cpu, opcode),
        JMP => control::execute_jmp(cpu, opcode),
        JEQ => branches::execute_jeq(cpu, opcode),
        JNE => branches::execute_jne(cpu, opcode),
        PUSH => stack::execute_push(cpu, opcode),
        POP => stack::execute_pop(cpu, opcode),
        CALL => control::execute_call(cpu, opcode),
        RET => control::execute_ret(cpu, opcode),
        _ => Err(ExecutionError::IllegalInstruction { opcode, pc: cpu.pc }),
    }
}
