//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the R/I/J-type MIPS layouts and the
//! `Instruction` record produced for every decoded word.
//!
//! ```text
//! R-type: [op:6][rs:5][rt:5][rd:5][sa:5][funct:6]
//! I-type: [op:6][rs:5][rt:5][imm:16]
//! J-type: [op:6][target:26]
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::isa::abi::{COP0_NAMES, COP2_NAMES, FPR_NAMES, GPR_NAMES};

/// Bit mask for a 5-bit register or format field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for a 6-bit opcode or function field.
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Primary opcode (bits 26-31).
    fn op(&self) -> u32;
    /// First source register / format field (bits 21-25).
    fn rs(&self) -> usize;
    /// Second source or destination register (bits 16-20).
    fn rt(&self) -> usize;
    /// Destination register (bits 11-15).
    fn rd(&self) -> usize;
    /// Shift amount (bits 6-10).
    fn sa(&self) -> u32;
    /// Function code (bits 0-5).
    fn funct(&self) -> u32;
    /// Coprocessor format (bits 21-25). Same bits as `rs`.
    fn fmt(&self) -> u32;
    /// COP1 `ft` register (bits 16-20).
    fn ft(&self) -> usize;
    /// COP1 `fs` register (bits 11-15).
    fn fs(&self) -> usize;
    /// COP1 `fd` register (bits 6-10).
    fn fd(&self) -> usize;
    /// Raw 16-bit immediate, zero-extended.
    fn imm(&self) -> u32;
    /// 16-bit immediate, sign-extended.
    fn imm_signed(&self) -> i32;
    /// 26-bit jump target field.
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn op(&self) -> u32 {
        (self >> 26) & FUNCT_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sa(&self) -> u32 {
        (self >> 6) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn fmt(&self) -> u32 {
        (self >> 21) & REG_MASK
    }

    #[inline(always)]
    fn ft(&self) -> usize {
        self.rt()
    }

    #[inline(always)]
    fn fs(&self) -> usize {
        self.rd()
    }

    #[inline(always)]
    fn fd(&self) -> usize {
        self.sa() as usize
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    /// Reinterprets the low half-word as `i16` and widens it.
    #[inline(always)]
    fn imm_signed(&self) -> i32 {
        i32::from(*self as u16 as i16)
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// A register named by an instruction operand.
///
/// Ordering groups registers by file, then by index, so role sets iterate
/// deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reg {
    /// General-purpose register r0-r31.
    Gpr(u8),
    /// Floating-point register f0-f31.
    Fpr(u8),
    /// Coprocessor-0 control register.
    Cop0(u8),
    /// Coprocessor-2 register.
    Cop2(u8),
}

impl Reg {
    /// Builds a general-purpose register from a decoded 5-bit field.
    #[inline]
    pub const fn gpr(idx: usize) -> Self {
        Self::Gpr((idx & 0x1F) as u8)
    }

    /// Builds a floating-point register from a decoded 5-bit field.
    #[inline]
    pub const fn fpr(idx: usize) -> Self {
        Self::Fpr((idx & 0x1F) as u8)
    }

    /// Returns the canonical name from the static register tables.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gpr(i) => GPR_NAMES[usize::from(i & 0x1F)],
            Self::Fpr(i) => FPR_NAMES[usize::from(i & 0x1F)],
            Self::Cop0(i) => COP0_NAMES[usize::from(i & 0x1F)],
            Self::Cop2(i) => COP2_NAMES[usize::from(i & 0x1F)],
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of decoding one word: where it lives, which registers it reads
/// and writes, and where it transfers control to.
///
/// Built fresh for every decode and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Address the word was fetched from.
    pub address: u32,
    /// Raw 32-bit encoding.
    pub opcode: u32,
    /// Registers read by the instruction.
    pub sources: BTreeSet<Reg>,
    /// Registers written by the instruction, including implicit link registers.
    pub destinations: BTreeSet<Reg>,
    /// Resolved branch or jump target; only set for branch/jump forms.
    pub target: Option<u32>,
}

impl Instruction {
    /// True if the instruction is a branch or jump with a resolved target.
    #[inline]
    pub const fn is_branch_or_jump(&self) -> bool {
        self.target.is_some()
    }

    /// Names of the source registers, in register order.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|r| r.name()).collect()
    }

    /// Names of the destination registers, in register order.
    pub fn destination_names(&self) -> Vec<&'static str> {
        self.destinations.iter().map(|r| r.name()).collect()
    }
}
