//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, along with `Ram`, the flat 256-byte memory
//! the LS-8 ships with.
//!
//! Unlike a real bus, accesses here are checked: an address at or past the end of
//! memory is an `ExecutionError::OutOfBounds`, never silently wrapped.

use crate::ExecutionError;

/// Number of addressable bytes in LS-8 memory.
pub const MEMORY_SIZE: usize = 256;

/// Memory bus trait for the CPU to read and write bytes.
///
/// Addresses are `usize` so that computed addresses such as `PC + 2` can exceed
/// the byte range and be reported instead of wrapping.
///
/// # Examples
///
/// ```
/// use ls8::{ExecutionError, MemoryBus, Ram};
///
/// let mut mem = Ram::new();
/// mem.write(0x10, 0x42).unwrap();
/// assert_eq!(mem.read(0x10), Ok(0x42));
///
/// assert_eq!(
///     mem.write(256, 0x00),
///     Err(ExecutionError::OutOfBounds { address: 256 })
/// );
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`.
    fn read(&self, addr: usize) -> Result<u8, ExecutionError>;

    /// Writes `value` to `addr`.
    fn write(&mut self, addr: usize, value: u8) -> Result<(), ExecutionError>;

    /// Total number of addressable bytes.
    fn size(&self) -> usize;
}

/// Flat 256-byte memory, zero-initialized.
///
/// Program bytes are loaded from address 0 and the stack grows down from
/// `STACK_TOP` (0xF4), so a single array covers code, data and stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    data: [u8; MEMORY_SIZE],
}

impl Ram {
    /// Creates a new `Ram` with every byte set to zero.
    pub fn new() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }

    /// Returns the raw memory contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Ram {
    fn read(&self, addr: usize) -> Result<u8, ExecutionError> {
        self.data
            .get(addr)
            .copied()
            .ok_or(ExecutionError::OutOfBounds { address: addr })
    }

    fn write(&mut self, addr: usize, value: u8) -> Result<(), ExecutionError> {
        let cell = self
            .data
            .get_mut(addr)
            .ok_or(ExecutionError::OutOfBounds { address: addr })?;
        *cell = value;
        Ok(())
    }

    fn size(&self) -> usize {
        MEMORY_SIZE
    }
}
