//! MIPS III (VR4300) emulator core library.
//!
//! This crate implements the decode, register and memory substrate of an N64 CPU emulator:
//! 1. **ISA:** Table-driven decoding into operand records, text and register roles.
//! 2. **Memory:** Big-endian bounds-checked regions and an address-mapped main memory.
//! 3. **Core:** The COP1 register file with aliased integer and floating-point views.
//! 4. **Debug:** Breakpoints that patch the instruction stream and can be undone.
//! 5. **Simulation:** Image loading and configuration.

/// Common types and constants (errors, segment masks, FPU patterns).
pub mod common;
/// Core configuration (defaults and hierarchical config structures).
pub mod config;
/// Architectural register state (COP1 register file).
pub mod core;
/// Debugger support (breakpoints).
pub mod debug;
/// Instruction set (tables, decode, disassembly, register names).
pub mod isa;
/// Binary loader.
pub mod sim;
/// System memory (regions, mapped memory, memory-map trait).
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// COP1 register file.
pub use crate::core::Fpr;
/// Sentinel-patching breakpoint table.
pub use crate::debug::BreakpointTable;
/// Decoded instruction with register roles.
pub use crate::isa::instruction::Instruction;
/// Address-mapped memory and its backing region.
pub use crate::soc::{Memory, MemoryMap, MemoryRegion};
