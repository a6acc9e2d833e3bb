//! # LS-8 Emulator Core
//!
//! An emulator for the LS-8, a tiny 8-bit computer with 256 bytes of memory,
//! eight byte-sized registers and a downward-growing stack.
//!
//! This crate provides the machine state, a fallible memory bus abstraction, a
//! table-driven opcode metadata system, the instruction handlers, and a loader
//! for the line-oriented `.ls8` program format.
//!
//! ## Quick Start
//!
//! ```rust
//! use ls8::{loader, Ram, CPU};
//!
//! let source = "\
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//!
//! let program = loader::parse_program(source, loader::MalformedLines::Skip).unwrap();
//!
//! let mut cpu = CPU::new(Ram::new());
//! cpu.load_program(&program).unwrap();
//!
//! let mut output: Vec<String> = Vec::new();
//! cpu.run(&mut output).unwrap();
//!
//! assert_eq!(output, vec!["8"]);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait,
//!   and from the console via the `Output` trait
//! - **Table-Driven Design**: opcode metadata lives in a single 256-entry table
//! - **Explicit State**: every handler is a free function taking `&mut CPU`
//! - **Fail Loudly**: out-of-range addresses, bad registers and unknown opcodes are
//!   errors, never wrapped or ignored
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and the 256-byte `Ram`
//! - `flags` - comparison flags register
//! - `opcodes` - opcode constants and metadata table
//! - `output` - line-oriented output sink used by `PRN`
//! - `loader` - `.ls8` program parser
//! - `disassembler` - byte image to mnemonic listing

pub mod cpu;
pub mod disassembler;
pub mod flags;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod output;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use cpu::{RunState, CPU, REGISTER_COUNT, SP, STACK_TOP};
pub use flags::Flags;
pub use loader::LoadError;
pub use memory::{MemoryBus, Ram, MEMORY_SIZE};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use output::{Console, Output};

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Every variant is fatal: the machine has no fault-handling instruction, so the
/// run loop stops and hands the error to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// A memory access used an address at or beyond the end of memory.
    #[error("memory address 0x{address:02X} is out of bounds")]
    OutOfBounds { address: usize },

    /// An instruction named a register index outside R0-R7.
    #[error("invalid register R{index} at PC 0x{pc:02X}")]
    InvalidRegister { index: u8, pc: usize },

    /// The opcode byte has no handler.
    #[error("illegal instruction 0x{opcode:02X} at PC 0x{pc:02X}")]
    IllegalInstruction { opcode: u8, pc: usize },

    /// The output sink rejected a `PRN` line.
    #[error("failed to write output: {reason}")]
    OutputFailed { reason: String },
}
