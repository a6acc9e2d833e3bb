//! CPU initialization and state access tests

use ls8::{ExecutionError, Flags, Ram, RunState, CPU, REGISTER_COUNT, SP, STACK_TOP};

#[test]
fn test_power_on_state() {
    let cpu = CPU::new(Ram::new());

    assert_eq!(cpu.pc(), 0);
    assert_eq!(cpu.sp(), 0xF4);
    assert_eq!(cpu.flags(), Flags::default());
    assert_eq!(cpu.state(), RunState::Running);
    assert_eq!(cpu.steps(), 0);

    for index in 0..SP as u8 {
        assert_eq!(cpu.register(index), Ok(0), "R{} should start at 0", index);
    }
    assert_eq!(cpu.register(SP as u8), Ok(STACK_TOP));
}

#[test]
fn test_memory_starts_zeroed() {
    let cpu = CPU::new(Ram::new());

    for addr in 0..=0xFF {
        assert_eq!(cpu.read(addr), Ok(0x00));
    }
}

#[test]
fn test_set_and_get_register() {
    let mut cpu = CPU::new(Ram::new());

    for index in 0..REGISTER_COUNT as u8 {
        cpu.set_register(index, index * 10).unwrap();
    }
    for index in 0..REGISTER_COUNT as u8 {
        assert_eq!(cpu.register(index), Ok(index * 10));
    }
}

#[test]
fn test_register_index_8_is_rejected() {
    let mut cpu = CPU::new(Ram::new());

    assert_eq!(
        cpu.register(8),
        Err(ExecutionError::InvalidRegister { index: 8, pc: 0 })
    );
    assert_eq!(
        cpu.set_register(8, 1),
        Err(ExecutionError::InvalidRegister { index: 8, pc: 0 })
    );

    // Nothing aliased onto R0
    assert_eq!(cpu.register(0), Ok(0));
}

#[test]
fn test_memory_address_256_is_rejected() {
    let mut cpu = CPU::new(Ram::new());

    assert_eq!(
        cpu.write(256, 0x42),
        Err(ExecutionError::OutOfBounds { address: 256 })
    );
    assert_eq!(
        cpu.read(256),
        Err(ExecutionError::OutOfBounds { address: 256 })
    );

    // Address 256 does not wrap to 0
    assert_eq!(cpu.read(0), Ok(0x00));
}

#[test]
fn test_error_messages_carry_context() {
    let err = ExecutionError::IllegalInstruction {
        opcode: 0xFF,
        pc: 0x1A,
    };
    assert_eq!(err.to_string(), "illegal instruction 0xFF at PC 0x1A");

    let err = ExecutionError::OutOfBounds { address: 256 };
    assert_eq!(err.to_string(), "memory address 0x100 is out of bounds");

    let err = ExecutionError::InvalidRegister { index: 9, pc: 3 };
    assert_eq!(err.to_string(), "invalid register R9 at PC 0x03");
}
