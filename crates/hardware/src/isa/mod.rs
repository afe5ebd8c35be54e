//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the decode tables, field extraction and decoding logic for the
//! MIPS III instruction set as implemented by the VR4300.
//!
//! # Tables
//!
//! * `PRIMARY`: opcode field, re-dispatching to the tables below.
//! * `SPECIAL`, `REGIMM`: integer R-type and register-immediate forms.
//! * `COP0`: system control moves plus the TLB/ERET group.
//! * `COP1`, `COP1_FUNCT`: floating-point moves, branches and arithmetic.

/// Register name mappings for every register file.
pub mod abi;

/// Table cascade and operand extraction.
pub mod decode;

/// Instruction disassembler for debug listings and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Operation identifiers and mnemonics.
pub mod op;

/// Static decode tables and their structural checks.
pub mod tables;
