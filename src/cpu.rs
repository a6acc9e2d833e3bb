//! # CPU State and Execution
//!
//! This module contains the `CPU` struct representing LS-8 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: eight byte registers R0-R7; R7 is the stack pointer
//! - **Program counter** (PC): address of the next instruction byte
//! - **Flags**: outcome of the last `CMP`
//! - **Run state**: `Running` until `HLT` is executed
//! - **Step counter**: number of instructions executed
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction
//! - `run()`: execute until `HLT`
//! - `run_for_steps()`: execute until `HLT` or the step budget is exhausted
//!
//! The loop never advances the PC on its own. Each handler leaves the PC on the
//! next instruction, either by adding its encoded size or by jumping.

use std::fmt::Write as _;

use tracing::{debug, trace};

use crate::instructions;
use crate::{ExecutionError, Flags, MemoryBus, Output, OPCODE_TABLE};

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Index of the register that holds the stack pointer.
pub const SP: usize = 7;

/// Initial stack pointer value. The stack grows down from here.
pub const STACK_TOP: u8 = 0xF4;

/// Execution state of the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Instructions are being fetched and executed.
    Running,
    /// `HLT` was executed. Terminal.
    Halted,
}

/// LS-8 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use ls8::{Ram, RunState, CPU};
///
/// let cpu = CPU::new(Ram::new());
///
/// assert_eq!(cpu.pc(), 0);
/// assert_eq!(cpu.sp(), 0xF4);
/// assert_eq!(cpu.flags().bits(), 0);
/// assert_eq!(cpu.state(), RunState::Running);
/// ```
pub struct CPU<M: MemoryBus> {
    /// General-purpose registers R0-R7 (R7 is the stack pointer)
    pub(crate) registers: [u8; REGISTER_COUNT],

    /// Program counter (address of next instruction)
    pub(crate) pc: usize,

    /// Result of the most recent comparison
    pub(crate) flags: Flags,

    pub(crate) state: RunState,

    /// Total instructions executed
    pub(crate) steps: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU in its power-on state.
    ///
    /// - Registers R0-R6 are zero, R7 (SP) is `STACK_TOP`
    /// - PC is 0
    /// - Flags are clear
    pub fn new(memory: M) -> Self {
        let mut registers = [0; REGISTER_COUNT];
        registers[SP] = STACK_TOP;

        Self {
            registers,
            pc: 0,
            flags: Flags::default(),
            state: RunState::Running,
            steps: 0,
            memory,
        }
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// Fails without touching memory if the image is larger than memory.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        let size = self.memory.size();
        if program.len() > size {
            return Err(ExecutionError::OutOfBounds { address: size });
        }

        for (addr, &byte) in program.iter().enumerate() {
            self.memory.write(addr, byte)?;
        }

        debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Executes one instruction.
    ///
    /// 1. Fetch the opcode byte at PC
    /// 2. Look it up in the opcode table
    /// 3. Reject unassigned opcodes before any state changes
    /// 4. Dispatch to the handler, which updates state and PC
    ///
    /// Once halted, further calls do nothing and return `RunState::Halted`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{ExecutionError, MemoryBus, Ram, CPU};
    ///
    /// let mut mem = Ram::new();
    /// mem.write(0x00, 0xFF).unwrap(); // not an LS-8 opcode
    ///
    /// let mut cpu = CPU::new(mem);
    /// let mut out: Vec<String> = Vec::new();
    ///
    /// assert_eq!(
    ///     cpu.step(&mut out),
    ///     Err(ExecutionError::IllegalInstruction { opcode: 0xFF, pc: 0 })
    /// );
    /// ```
    pub fn step(&mut self, out: &mut dyn Output) -> Result<RunState, ExecutionError> {
        if self.state == RunState::Halted {
            return Ok(RunState::Halted);
        }

        let opcode = self.memory.read(self.pc)?;
        let metadata = &OPCODE_TABLE[opcode as usize];

        if !metadata.implemented {
            return Err(ExecutionError::IllegalInstruction {
                opcode,
                pc: self.pc,
            });
        }

        trace!("{}", self.trace_line());

        instructions::execute(self, opcode, out)?;
        self.steps += 1;

        Ok(self.state)
    }

    /// Runs until `HLT` or the first error.
    pub fn run(&mut self, out: &mut dyn Output) -> Result<(), ExecutionError> {
        while self.step(out)? == RunState::Running {}

        debug!(steps = self.steps, pc = self.pc, "halted");
        Ok(())
    }

    /// Runs until `HLT`, the first error, or `budget` instructions have executed.
    ///
    /// Returns the number of instructions executed by this call. Check `state()`
    /// to tell a halt from an exhausted budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{MemoryBus, Ram, RunState, CPU};
    ///
    /// // JMP R0 with R0 = 0: an infinite loop
    /// let mut mem = Ram::new();
    /// mem.write(0x00, 0b0101_0100).unwrap();
    /// mem.write(0x01, 0x00).unwrap();
    ///
    /// let mut cpu = CPU::new(mem);
    /// let mut out: Vec<String> = Vec::new();
    ///
    /// assert_eq!(cpu.run_for_steps(100, &mut out), Ok(100));
    /// assert_eq!(cpu.state(), RunState::Running);
    /// ```
    pub fn run_for_steps(
        &mut self,
        budget: u64,
        out: &mut dyn Output,
    ) -> Result<u64, ExecutionError> {
        let start = self.steps;

        while self.state == RunState::Running && self.steps - start < budget {
            self.step(out)?;
        }

        Ok(self.steps - start)
    }

    /// One-line dump of PC, the bytes at PC..PC+2, and all registers, in hex.
    ///
    /// Bytes past the end of memory are shown as `--`.
    ///
    /// ```text
    /// TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
    /// ```
    pub fn trace_line(&self) -> String {
        let mut line = format!("TRACE: {:02X} |", self.pc);

        for offset in 0..3 {
            let addr = self.pc.checked_add(offset);
            match addr.map(|addr| self.memory.read(addr)) {
                Some(Ok(byte)) => {
                    let _ = write!(line, " {:02X}", byte);
                }
                _ => line.push_str(" --"),
            }
        }

        line.push_str(" |");
        for value in self.registers {
            let _ = write!(line, " {:02X}", value);
        }

        line
    }

    // ========== Decode Helpers ==========

    /// Reads the operand byte `offset` bytes after the opcode.
    pub(crate) fn operand(&self, offset: usize) -> Result<u8, ExecutionError> {
        let addr = self
            .pc
            .checked_add(offset)
            .ok_or(ExecutionError::OutOfBounds {
                address: usize::MAX,
            })?;
        self.memory.read(addr)
    }

    /// Reads an operand that names a register and validates it.
    pub(crate) fn register_operand(&self, offset: usize) -> Result<usize, ExecutionError> {
        let index = self.operand(offset)?;
        if index as usize >= REGISTER_COUNT {
            return Err(ExecutionError::InvalidRegister {
                index,
                pc: self.pc,
            });
        }
        Ok(index as usize)
    }

    /// Moves the PC past the instruction at PC.
    pub(crate) fn advance(&mut self, opcode: u8) {
        self.pc += OPCODE_TABLE[opcode as usize].size_bytes as usize;
    }

    /// Decrements SP and stores `value` at the new top of stack.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        let sp = self.registers[SP].wrapping_sub(1);
        self.memory.write(sp as usize, value)?;
        self.registers[SP] = sp;
        Ok(())
    }

    /// Reads the top of stack and increments SP.
    pub(crate) fn pop(&mut self) -> Result<u8, ExecutionError> {
        let sp = self.registers[SP];
        let value = self.memory.read(sp as usize)?;
        self.registers[SP] = sp.wrapping_add(1);
        Ok(value)
    }

    // ========== State Access ==========

    /// Returns the program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    /// Returns the stack pointer (R7).
    pub fn sp(&self) -> u8 {
        self.registers[SP]
    }

    /// Returns the flags register.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns the run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns the number of instructions executed since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns all registers, R0 first.
    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.registers
    }

    /// Reads register `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{ExecutionError, Ram, CPU};
    ///
    /// let cpu = CPU::new(Ram::new());
    /// assert_eq!(cpu.register(7), Ok(0xF4));
    /// assert_eq!(
    ///     cpu.register(8),
    ///     Err(ExecutionError::InvalidRegister { index: 8, pc: 0 })
    /// );
    /// ```
    pub fn register(&self, index: u8) -> Result<u8, ExecutionError> {
        self.registers
            .get(index as usize)
            .copied()
            .ok_or(ExecutionError::InvalidRegister {
                index,
                pc: self.pc,
            })
    }

    /// Writes register `index`.
    pub fn set_register(&mut self, index: u8, value: u8) -> Result<(), ExecutionError> {
        let pc = self.pc;
        let slot = self
            .registers
            .get_mut(index as usize)
            .ok_or(ExecutionError::InvalidRegister { index, pc })?;
        *slot = value;
        Ok(())
    }

    /// Reads a byte of memory.
    pub fn read(&self, addr: usize) -> Result<u8, ExecutionError> {
        self.memory.read(addr)
    }

    /// Writes a byte of memory.
    pub fn write(&mut self, addr: usize, value: u8) -> Result<(), ExecutionError> {
        self.memory.write(addr, value)
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
