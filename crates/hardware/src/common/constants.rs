//! Global Constants.
//!
//! This module defines constants shared across the core. It includes:
//! 1. **Instruction Constants:** Instruction width and segment masks used by address arithmetic.
//! 2. **Address Constants:** Bounds of the directly mapped kernel segments.
//! 3. **FPU Constants:** Reset and condition patterns of the COP1 control words.

/// Size of an instruction word in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Bits of the program counter preserved by a J-type jump.
pub const JUMP_SEGMENT_MASK: u32 = 0xF000_0000;

/// Start of KSEG0 (cached, directly mapped).
pub const KSEG0_BASE: u32 = 0x8000_0000;

/// End (exclusive) of KSEG1 (uncached, directly mapped).
pub const KSEG1_END: u32 = 0xC000_0000;

/// Mask folding a KSEG0/KSEG1 address onto its physical address.
pub const PHYS_ADDR_MASK: u32 = 0x1FFF_FFFF;

/// Number of COP1 control words.
pub const FPU_CONTROL_WORDS: usize = 32;

/// Number of 32-bit COP1 data slots.
pub const FPU_DATA_SLOTS: usize = 32;

/// Value of FCR0 after reset (implementation/revision).
pub const FCR0_RESET: u32 = 0x0000_0511;

/// Index of the FPU control/status word.
pub const FCR31: usize = 31;

/// Condition bit of FCR31, set by `c.cond.fmt` and read by `bc1t`/`bc1f`.
pub const FCR31_CONDITION: u32 = 0x0080_0000;
