//! Tests for the PRN instruction and the output sink.

use std::io;

use ls8::opcodes::{HLT, LDI, PRN};
use ls8::{Console, ExecutionError, Output, Ram, CPU};

#[test]
fn test_prn_emits_decimal_line() {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&[LDI, 4, 255, PRN, 4, HLT]).unwrap();
    let mut out: Vec<String> = Vec::new();

    cpu.run(&mut out).unwrap();

    assert_eq!(out, vec!["255"]);
}

#[test]
fn test_prn_advances_pc_by_two() {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&[PRN, 0]).unwrap();
    let mut out: Vec<String> = Vec::new();

    cpu.step(&mut out).unwrap();

    assert_eq!(out, vec!["0"]);
    assert_eq!(cpu.pc(), 2);
}

#[test]
fn test_prn_to_console_writer() {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&[LDI, 0, 1, PRN, 0, LDI, 0, 2, PRN, 0, HLT])
        .unwrap();
    let mut console = Console::new(Vec::new());

    cpu.run(&mut console).unwrap();

    assert_eq!(console.into_inner(), b"1\n2\n");
}

struct BrokenPipe;

impl Output for BrokenPipe {
    fn emit(&mut self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn test_prn_output_failure_is_reported() {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&[PRN, 0, HLT]).unwrap();

    let result = cpu.step(&mut BrokenPipe);

    assert_eq!(
        result,
        Err(ExecutionError::OutputFailed {
            reason: "pipe closed".to_string()
        })
    );
    assert_eq!(cpu.pc(), 0);
}
