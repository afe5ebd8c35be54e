//! Memory-map capability.
//!
//! This module defines the `MemoryMap` trait consumed by the disassembler front
//! ends and the breakpoint table. It provides:
//! 1. **Access:** Big-endian 32-bit word read/write at a CPU virtual address.
//! 2. **Failure:** Unbacked addresses surface as a [`MemoryError`], never a panic.

use crate::common::error::MemoryError;

/// Word-granular access to emulated memory by address.
///
/// Implemented by [`Memory`](crate::soc::memory::Memory); tests substitute a mock.
pub trait MemoryMap {
    /// Reads the big-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] if `addr` is not backed by memory.
    fn read_u32(&self, addr: u32) -> Result<u32, MemoryError>;

    /// Writes `value` as a big-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] if `addr` is not backed by memory.
    fn write_u32(&mut self, addr: u32, value: u32) -> Result<(), MemoryError>;
}
