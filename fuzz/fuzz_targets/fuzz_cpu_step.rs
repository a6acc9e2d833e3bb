//! Fuzz target for CPU execution.
//!
//! Builds a machine from arbitrary memory and register contents, then runs a
//! bounded number of instructions. Errors are fine; panics are bugs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ls8::{ExecutionError, Ram, RunState, CPU, MEMORY_SIZE};

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Full memory image
    memory: [u8; MEMORY_SIZE],
    /// Initial R0-R7
    registers: [u8; 8],
    /// Starting program counter
    pc: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&input.memory).unwrap();
    for (index, value) in input.registers.iter().enumerate() {
        cpu.set_register(index as u8, *value).unwrap();
    }
    cpu.set_pc(input.pc as usize);

    let mut out: Vec<String> = Vec::new();
    let before = *cpu.registers();

    match cpu.run_for_steps(1024, &mut out) {
        Ok(steps) => assert!(steps <= 1024),
        Err(ExecutionError::IllegalInstruction { pc, .. }) => {
            // An illegal opcode at the very start must leave the machine untouched
            if cpu.steps() == 0 {
                assert_eq!(*cpu.registers(), before);
                assert_eq!(pc, input.pc as usize);
            }
        }
        Err(_) => {}
    }

    // Output lines are always decimal bytes
    for line in &out {
        assert!(line.parse::<u8>().is_ok());
    }

    if cpu.state() == RunState::Halted {
        assert_eq!(cpu.run_for_steps(1, &mut out), Ok(0));
    }
});
