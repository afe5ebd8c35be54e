//! Decode tables.
//!
//! Six fixed-size lookup tables drive the decoder, each keyed by one bitfield
//! of the instruction word:
//!
//! | Table         | Entries | Key            |
//! |---------------|---------|----------------|
//! | `PRIMARY`     | 64      | `op` (26-31)   |
//! | `SPECIAL`     | 64      | `funct` (0-5)  |
//! | `REGIMM`      | 32      | `rt` (16-20)   |
//! | `COP0`        | 32      | `fmt` (21-25)  |
//! | `COP1`        | 32      | `fmt` (21-25)  |
//! | `COP1_FUNCT`  | 64      | `funct` (0-5)  |
//!
//! plus the sparse TLB enumeration reached from `COP0`. Lengths are fixed by
//! the array types; [`verify_tables`] checks the cross-table invariants the
//! types cannot express.

use tracing::debug;

use crate::common::error::DecodeTableError;
use crate::isa::op::FpFmt;
#[allow(clippy::enum_glob_use)]
use crate::isa::op::Op::{self, *};

/// Shorthand for an unused slot.
const U: Op = Unknown;

/// Primary opcode table, keyed by bits 26-31.
#[rustfmt::skip]
pub static PRIMARY: [Op; 64] = [
    Special, RegImm, J, Jal, Beq, Bne, Blez, Bgtz, // 0x00
    Addi, Addiu, Slti, Sltiu, Andi, Ori, Xori, Lui, // 0x08
    Cop0, Cop1, Cop2, U, Beql, Bnel, Blezl, Bgtzl, // 0x10
    Daddi, Daddiu, Ldl, Ldr, U, U, U, U, // 0x18
    Lb, Lh, Lwl, Lw, Lbu, Lhu, Lwr, Lwu, // 0x20
    Sb, Sh, Swl, Sw, Sdl, Sdr, Swr, Cache, // 0x28
    Ll, Lwc1, Lwc2, U, Lld, Ldc1, Ldc2, Ld, // 0x30
    Sc, Swc1, Swc2, U, Scd, Sdc1, Sdc2, Sd, // 0x38
];

/// SPECIAL table, keyed by `funct` (bits 0-5).
#[rustfmt::skip]
pub static SPECIAL: [Op; 64] = [
    Sll, U, Srl, Sra, Sllv, U, Srlv, Srav, // 0x00
    Jr, Jalr, U, U, Syscall, Break, U, Sync, // 0x08
    Mfhi, Mthi, Mflo, Mtlo, Dsllv, U, Dsrlv, Dsrav, // 0x10
    Mult, Multu, Div, Divu, Dmult, Dmultu, Ddiv, Ddivu, // 0x18
    Add, Addu, Sub, Subu, And, Or, Xor, Nor, // 0x20
    U, U, Slt, Sltu, Dadd, Daddu, Dsub, Dsubu, // 0x28
    Tge, Tgeu, Tlt, Tltu, Teq, U, Tne, U, // 0x30
    Dsll, U, Dsrl, Dsra, Dsll32, U, Dsrl32, Dsra32, // 0x38
];

/// REGIMM table, keyed by `rt` (bits 16-20).
#[rustfmt::skip]
pub static REGIMM: [Op; 32] = [
    Bltz, Bgez, Bltzl, Bgezl, U, U, U, U, // 0x00
    Tgei, Tgeiu, Tlti, Tltiu, Teqi, U, Tnei, U, // 0x08
    Bltzal, Bgezal, Bltzall, Bgezall, U, U, U, U, // 0x10
    U, U, U, U, U, U, U, U, // 0x18
];

/// COP0 table, keyed by `fmt` (bits 21-25).
#[rustfmt::skip]
pub static COP0: [Op; 32] = [
    Mfc0, Dmfc0, U, U, Mtc0, Dmtc0, U, U, // 0x00
    U, U, U, U, U, U, U, U, // 0x08
    Tlb, U, U, U, U, U, U, U, // 0x10
    U, U, U, U, U, U, U, U, // 0x18
];

/// COP1 table, keyed by `fmt` (bits 21-25).
#[rustfmt::skip]
pub static COP1: [Op; 32] = [
    Mfc1, Dmfc1, Cfc1, U, Mtc1, Dmtc1, Ctc1, U, // 0x00
    Bc1, U, U, U, U, U, U, U, // 0x08
    Cop1Fmt(FpFmt::S), Cop1Fmt(FpFmt::D), U, U, Cop1Fmt(FpFmt::W), Cop1Fmt(FpFmt::L), U, U, // 0x10
    U, U, U, U, U, U, U, U, // 0x18
];

/// Shared COP1 arithmetic table, keyed by `funct` (bits 0-5).
///
/// One table serves all four formats; the format tag selects the mnemonic
/// suffix and register width at format time.
#[rustfmt::skip]
pub static COP1_FUNCT: [Op; 64] = [
    FAdd, FSub, FMul, FDiv, FSqrt, FAbs, FMov, FNeg, // 0x00
    RoundL, TruncL, CeilL, FloorL, RoundW, TruncW, CeilW, FloorW, // 0x08
    U, U, U, U, U, U, U, U, // 0x10
    U, U, U, U, U, U, U, U, // 0x18
    CvtS, CvtD, U, U, CvtW, CvtL, U, U, // 0x20
    U, U, U, U, U, U, U, U, // 0x28
    FCompare, FCompare, FCompare, FCompare, FCompare, FCompare, FCompare, FCompare, // 0x30
    FCompare, FCompare, FCompare, FCompare, FCompare, FCompare, FCompare, FCompare, // 0x38
];

/// TLB function codes reached from `COP0[16]`.
pub mod tlb {
    /// Read indexed TLB entry.
    pub const TLBR: u32 = 0x01;
    /// Write indexed TLB entry.
    pub const TLBWI: u32 = 0x02;
    /// Write random TLB entry.
    pub const TLBWR: u32 = 0x06;
    /// Probe TLB for matching entry.
    pub const TLBP: u32 = 0x08;
    /// Return from exception.
    pub const ERET: u32 = 0x18;

    /// Every key of the enumeration, in encoding order.
    pub const ALL: [u32; 5] = [TLBR, TLBWI, TLBWR, TLBP, ERET];
}

/// Looks up the sparse TLB enumeration.
pub const fn tlb_op(funct: u32) -> Op {
    match funct {
        tlb::TLBR => Tlbr,
        tlb::TLBWI => Tlbwi,
        tlb::TLBWR => Tlbwr,
        tlb::TLBP => Tlbp,
        tlb::ERET => Eret,
        _ => Unknown,
    }
}

/// A complete set of decode tables, borrowed for verification.
#[derive(Clone, Copy, Debug)]
pub struct TableSet<'a> {
    /// Primary opcode table.
    pub primary: &'a [Op; 64],
    /// SPECIAL funct table.
    pub special: &'a [Op; 64],
    /// REGIMM rt table.
    pub regimm: &'a [Op; 32],
    /// COP0 fmt table.
    pub cop0: &'a [Op; 32],
    /// COP1 fmt table.
    pub cop1: &'a [Op; 32],
    /// Shared COP1 arithmetic table.
    pub cop1_funct: &'a [Op; 64],
    /// Keys of the TLB enumeration.
    pub tlb_keys: &'a [u32],
}

impl TableSet<'static> {
    /// The tables the decoder runs on.
    pub fn shipped() -> Self {
        Self {
            primary: &PRIMARY,
            special: &SPECIAL,
            regimm: &REGIMM,
            cop0: &COP0,
            cop1: &COP1,
            cop1_funct: &COP1_FUNCT,
            tlb_keys: &tlb::ALL,
        }
    }
}

impl TableSet<'_> {
    /// Checks the structural invariants of this table set.
    ///
    /// Dispatch markers must sit exactly in the slots the decoder re-dispatches
    /// from, and nowhere else; the TLB keys must be distinct and each must name
    /// an operation.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`DecodeTableError`].
    pub fn verify(&self) -> Result<(), DecodeTableError> {
        expect_slots(
            "primary",
            self.primary,
            &[(0, Special), (1, RegImm), (16, Cop0), (17, Cop1), (18, Cop2)],
        )?;
        expect_slots("special", self.special, &[])?;
        expect_slots("regimm", self.regimm, &[])?;
        expect_slots("cop0", self.cop0, &[(16, Tlb)])?;
        expect_slots(
            "cop1",
            self.cop1,
            &[
                (8, Bc1),
                (16, Cop1Fmt(FpFmt::S)),
                (17, Cop1Fmt(FpFmt::D)),
                (20, Cop1Fmt(FpFmt::W)),
                (21, Cop1Fmt(FpFmt::L)),
            ],
        )?;
        expect_slots("cop1.fmt", self.cop1_funct, &[])?;

        for (i, &funct) in self.tlb_keys.iter().enumerate() {
            if self.tlb_keys[..i].contains(&funct) {
                return Err(DecodeTableError::DuplicateTlbFunction { funct });
            }
            if tlb_op(funct) == Unknown {
                return Err(DecodeTableError::UnknownTlbFunction { funct });
            }
        }
        Ok(())
    }
}

/// Verifies the shipped decode tables.
///
/// Call once at start-up and abort on error; see [`TableSet::verify`].
///
/// # Errors
///
/// Returns the first violated invariant as a [`DecodeTableError`].
pub fn verify_tables() -> Result<(), DecodeTableError> {
    TableSet::shipped().verify()?;
    debug!("decode tables verified");
    Ok(())
}

/// Every `(slot, op)` pair must match, and no other slot may hold a dispatch marker.
fn expect_slots(
    table: &'static str,
    entries: &[Op],
    markers: &[(usize, Op)],
) -> Result<(), DecodeTableError> {
    for &(slot, expected) in markers {
        let found = entries.get(slot).copied().unwrap_or(Unknown);
        if found != expected {
            return Err(DecodeTableError::MisplacedEntry {
                table,
                slot,
                found: found.mnemonic(),
                expected: expected.mnemonic(),
            });
        }
    }

    for (slot, op) in entries.iter().enumerate() {
        if op.is_dispatch() && !markers.iter().any(|&(s, _)| s == slot) {
            return Err(DecodeTableError::StrayDispatch {
                table,
                slot,
                found: op.mnemonic(),
            });
        }
    }
    Ok(())
}
