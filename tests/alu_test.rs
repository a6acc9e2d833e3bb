//! Tests for the two-register ALU instructions: ADD, MUL, AND, OR.
//!
//! Results are bytes: ADD and MUL wrap modulo 256.

use ls8::opcodes::{ADD, AND, HLT, LDI, MUL, OR};
use ls8::{ExecutionError, Ram, CPU};

/// Loads `a` into R0 and `b` into R1, then runs `op R0,R1` and halts.
fn run_binary(op: u8, a: u8, b: u8) -> CPU<Ram> {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&[LDI, 0, a, LDI, 1, b, op, 0, 1, HLT])
        .unwrap();
    let mut out: Vec<String> = Vec::new();
    cpu.run(&mut out).unwrap();
    cpu
}

// ========== ADD ==========

#[test]
fn test_add_basic() {
    let cpu = run_binary(ADD, 20, 22);
    assert_eq!(cpu.register(0), Ok(42));
    assert_eq!(cpu.register(1), Ok(22));
}

#[test]
fn test_add_wraps_at_256() {
    let cpu = run_binary(ADD, 200, 100);
    assert_eq!(cpu.register(0), Ok(44));

    let cpu = run_binary(ADD, 0xFF, 0x01);
    assert_eq!(cpu.register(0), Ok(0x00));
}

#[test]
fn test_add_same_register_doubles() {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&[LDI, 2, 21, ADD, 2, 2, HLT]).unwrap();
    let mut out: Vec<String> = Vec::new();
    cpu.run(&mut out).unwrap();

    assert_eq!(cpu.register(2), Ok(42));
}

#[test]
fn test_add_advances_pc_by_three() {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&[ADD, 0, 1]).unwrap();
    let mut out: Vec<String> = Vec::new();

    cpu.step(&mut out).unwrap();
    assert_eq!(cpu.pc(), 3);
}

// ========== MUL ==========

#[test]
fn test_mul_basic() {
    let cpu = run_binary(MUL, 8, 9);
    assert_eq!(cpu.register(0), Ok(72));
}

#[test]
fn test_mul_wraps_at_256() {
    let cpu = run_binary(MUL, 16, 16);
    assert_eq!(cpu.register(0), Ok(0));

    let cpu = run_binary(MUL, 100, 3);
    assert_eq!(cpu.register(0), Ok(44));
}

#[test]
fn test_mul_by_zero() {
    let cpu = run_binary(MUL, 0xAB, 0);
    assert_eq!(cpu.register(0), Ok(0));
}

// ========== AND / OR ==========

#[test]
fn test_and_stores_result() {
    let cpu = run_binary(AND, 0b1100_1010, 0b1010_0110);
    assert_eq!(cpu.register(0), Ok(0b1000_0010));
}

#[test]
fn test_or_stores_result() {
    let cpu = run_binary(OR, 0b1100_0000, 0b0000_0011);
    assert_eq!(cpu.register(0), Ok(0b1100_0011));
}

#[test]
fn test_and_with_zero_clears() {
    let cpu = run_binary(AND, 0xFF, 0x00);
    assert_eq!(cpu.register(0), Ok(0x00));
}

// ========== Operand validation ==========

#[test]
fn test_alu_invalid_register_b_changes_nothing() {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&[LDI, 0, 5, ADD, 0, 9]).unwrap();
    let mut out: Vec<String> = Vec::new();

    cpu.step(&mut out).unwrap();
    assert_eq!(
        cpu.step(&mut out),
        Err(ExecutionError::InvalidRegister { index: 9, pc: 3 })
    );

    assert_eq!(cpu.register(0), Ok(5));
    assert_eq!(cpu.pc(), 3);
}
