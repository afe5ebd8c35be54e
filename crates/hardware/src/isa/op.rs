//! Symbolic operations.
//!
//! `Op` names every operation the VR4300 decoder recognises, plus the dispatch
//! markers that send the decoder to a secondary table. `FpFmt` is the operand
//! width tag threaded through the COP1 arithmetic cases.

use std::fmt;

/// COP1 operand format (bits 21-25 of an arithmetic COP1 word).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpFmt {
    /// Single-precision float.
    S,
    /// Double-precision float.
    D,
    /// 32-bit fixed point.
    W,
    /// 64-bit fixed point.
    L,
}

impl FpFmt {
    /// Mnemonic suffix for the format.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::D => "d",
            Self::W => "w",
            Self::L => "l",
        }
    }
}

impl fmt::Display for FpFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Every decodable operation, plus dispatch markers for the table cascade.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Encoding not used by the instruction set.
    Unknown,

    // Dispatch markers.
    /// Primary opcode 0: re-dispatch on `funct`.
    Special,
    /// Primary opcode 1: re-dispatch on `rt`.
    RegImm,
    /// Coprocessor 0: re-dispatch on `fmt`.
    Cop0,
    /// Coprocessor 1: re-dispatch on `fmt`.
    Cop1,
    /// Coprocessor 2 moves.
    Cop2,
    /// COP0 `CO` form: re-dispatch on `funct` against the TLB enumeration.
    Tlb,
    /// COP1 branch: re-dispatch on the `nd`/`tf` bits.
    Bc1,
    /// COP1 arithmetic in the given format: re-dispatch on `funct`.
    Cop1Fmt(FpFmt),

    // Jumps and branches.
    J,
    Jal,
    Jr,
    Jalr,
    Beq,
    Bne,
    Blez,
    Bgtz,
    Beql,
    Bnel,
    Blezl,
    Bgtzl,
    Bltz,
    Bgez,
    Bltzl,
    Bgezl,
    Bltzal,
    Bgezal,
    Bltzall,
    Bgezall,
    Bc1f,
    Bc1t,
    Bc1fl,
    Bc1tl,

    // Immediate arithmetic and logic.
    Addi,
    Addiu,
    Slti,
    Sltiu,
    Andi,
    Ori,
    Xori,
    Lui,
    Daddi,
    Daddiu,

    // Loads and stores.
    Lb,
    Lh,
    Lwl,
    Lw,
    Lbu,
    Lhu,
    Lwr,
    Lwu,
    Sb,
    Sh,
    Swl,
    Sw,
    Sdl,
    Sdr,
    Swr,
    Ldl,
    Ldr,
    Ll,
    Lld,
    Ld,
    Sc,
    Scd,
    Sd,
    Lwc1,
    Ldc1,
    Swc1,
    Sdc1,
    Lwc2,
    Ldc2,
    Swc2,
    Sdc2,
    Cache,

    // SPECIAL shifts.
    Sll,
    Srl,
    Sra,
    Sllv,
    Srlv,
    Srav,
    Dsllv,
    Dsrlv,
    Dsrav,
    Dsll,
    Dsrl,
    Dsra,
    Dsll32,
    Dsrl32,
    Dsra32,

    // SPECIAL system.
    Syscall,
    Break,
    Sync,

    // HI/LO.
    Mfhi,
    Mthi,
    Mflo,
    Mtlo,
    Mult,
    Multu,
    Div,
    Divu,
    Dmult,
    Dmultu,
    Ddiv,
    Ddivu,

    // Register arithmetic and logic.
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Xor,
    Nor,
    Slt,
    Sltu,
    Dadd,
    Daddu,
    Dsub,
    Dsubu,

    // Traps.
    Tge,
    Tgeu,
    Tlt,
    Tltu,
    Teq,
    Tne,
    Tgei,
    Tgeiu,
    Tlti,
    Tltiu,
    Teqi,
    Tnei,

    // Coprocessor 0.
    Mfc0,
    Dmfc0,
    Mtc0,
    Dmtc0,
    Tlbr,
    Tlbwi,
    Tlbwr,
    Tlbp,
    Eret,

    // Coprocessor 1 moves.
    Mfc1,
    Dmfc1,
    Cfc1,
    Mtc1,
    Dmtc1,
    Ctc1,

    // Coprocessor 2 moves.
    Mfc2,
    Cfc2,
    Mtc2,
    Ctc2,

    // Coprocessor 1 arithmetic; the format comes from the decoded word.
    FAdd,
    FSub,
    FMul,
    FDiv,
    FSqrt,
    FAbs,
    FMov,
    FNeg,
    RoundL,
    TruncL,
    CeilL,
    FloorL,
    RoundW,
    TruncW,
    CeilW,
    FloorW,
    CvtS,
    CvtD,
    CvtW,
    CvtL,
    /// `c.cond.fmt`; the condition comes from the low four bits of `funct`.
    FCompare,
}

/// Condition names of `c.cond.fmt`, indexed by `funct & 0xF`.
pub const COMPARE_CONDITIONS: [&str; 16] = [
    "f", "un", "eq", "ueq", "olt", "ult", "ole", "ule", "sf", "ngle", "seq", "ngl", "lt", "nge",
    "le", "ngt",
];

impl Op {
    /// True for the markers that send the decoder to a secondary table.
    pub const fn is_dispatch(self) -> bool {
        matches!(
            self,
            Self::Special
                | Self::RegImm
                | Self::Cop0
                | Self::Cop1
                | Self::Cop2
                | Self::Tlb
                | Self::Bc1
                | Self::Cop1Fmt(_)
        )
    }

    /// True for COP1 arithmetic, whose mnemonic carries a format suffix.
    pub const fn is_fp_arith(self) -> bool {
        matches!(
            self,
            Self::FAdd
                | Self::FSub
                | Self::FMul
                | Self::FDiv
                | Self::FSqrt
                | Self::FAbs
                | Self::FMov
                | Self::FNeg
                | Self::RoundL
                | Self::TruncL
                | Self::CeilL
                | Self::FloorL
                | Self::RoundW
                | Self::TruncW
                | Self::CeilW
                | Self::FloorW
                | Self::CvtS
                | Self::CvtD
                | Self::CvtW
                | Self::CvtL
                | Self::FCompare
        )
    }

    /// True for branches and jumps that write the link register implicitly.
    pub const fn links(self) -> bool {
        matches!(
            self,
            Self::Jal | Self::Bltzal | Self::Bgezal | Self::Bltzall | Self::Bgezall
        )
    }

    /// Base mnemonic. COP1 arithmetic returns the stem without format suffix.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Special => "special",
            Self::RegImm => "regimm",
            Self::Cop0 => "cop0",
            Self::Cop1 => "cop1",
            Self::Cop2 => "cop2",
            Self::Tlb => "tlb",
            Self::Bc1 => "bc1",
            Self::Cop1Fmt(FpFmt::S) => "cop1.s",
            Self::Cop1Fmt(FpFmt::D) => "cop1.d",
            Self::Cop1Fmt(FpFmt::W) => "cop1.w",
            Self::Cop1Fmt(FpFmt::L) => "cop1.l",

            Self::J => "j",
            Self::Jal => "jal",
            Self::Jr => "jr",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blez => "blez",
            Self::Bgtz => "bgtz",
            Self::Beql => "beql",
            Self::Bnel => "bnel",
            Self::Blezl => "blezl",
            Self::Bgtzl => "bgtzl",
            Self::Bltz => "bltz",
            Self::Bgez => "bgez",
            Self::Bltzl => "bltzl",
            Self::Bgezl => "bgezl",
            Self::Bltzal => "bltzal",
            Self::Bgezal => "bgezal",
            Self::Bltzall => "bltzall",
            Self::Bgezall => "bgezall",
            Self::Bc1f => "bc1f",
            Self::Bc1t => "bc1t",
            Self::Bc1fl => "bc1fl",
            Self::Bc1tl => "bc1tl",

            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Lui => "lui",
            Self::Daddi => "daddi",
            Self::Daddiu => "daddiu",

            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lwl => "lwl",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Lwr => "lwr",
            Self::Lwu => "lwu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Swl => "swl",
            Self::Sw => "sw",
            Self::Sdl => "sdl",
            Self::Sdr => "sdr",
            Self::Swr => "swr",
            Self::Ldl => "ldl",
            Self::Ldr => "ldr",
            Self::Ll => "ll",
            Self::Lld => "lld",
            Self::Ld => "ld",
            Self::Sc => "sc",
            Self::Scd => "scd",
            Self::Sd => "sd",
            Self::Lwc1 => "lwc1",
            Self::Ldc1 => "ldc1",
            Self::Swc1 => "swc1",
            Self::Sdc1 => "sdc1",
            Self::Lwc2 => "lwc2",
            Self::Ldc2 => "ldc2",
            Self::Swc2 => "swc2",
            Self::Sdc2 => "sdc2",
            Self::Cache => "cache",

            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Sllv => "sllv",
            Self::Srlv => "srlv",
            Self::Srav => "srav",
            Self::Dsllv => "dsllv",
            Self::Dsrlv => "dsrlv",
            Self::Dsrav => "dsrav",
            Self::Dsll => "dsll",
            Self::Dsrl => "dsrl",
            Self::Dsra => "dsra",
            Self::Dsll32 => "dsll32",
            Self::Dsrl32 => "dsrl32",
            Self::Dsra32 => "dsra32",

            Self::Syscall => "syscall",
            Self::Break => "break",
            Self::Sync => "sync",

            Self::Mfhi => "mfhi",
            Self::Mthi => "mthi",
            Self::Mflo => "mflo",
            Self::Mtlo => "mtlo",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Dmult => "dmult",
            Self::Dmultu => "dmultu",
            Self::Ddiv => "ddiv",
            Self::Ddivu => "ddivu",

            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Dadd => "dadd",
            Self::Daddu => "daddu",
            Self::Dsub => "dsub",
            Self::Dsubu => "dsubu",

            Self::Tge => "tge",
            Self::Tgeu => "tgeu",
            Self::Tlt => "tlt",
            Self::Tltu => "tltu",
            Self::Teq => "teq",
            Self::Tne => "tne",
            Self::Tgei => "tgei",
            Self::Tgeiu => "tgeiu",
            Self::Tlti => "tlti",
            Self::Tltiu => "tltiu",
            Self::Teqi => "teqi",
            Self::Tnei => "tnei",

            Self::Mfc0 => "mfc0",
            Self::Dmfc0 => "dmfc0",
            Self::Mtc0 => "mtc0",
            Self::Dmtc0 => "dmtc0",
            Self::Tlbr => "tlbr",
            Self::Tlbwi => "tlbwi",
            Self::Tlbwr => "tlbwr",
            Self::Tlbp => "tlbp",
            Self::Eret => "eret",

            Self::Mfc1 => "mfc1",
            Self::Dmfc1 => "dmfc1",
            Self::Cfc1 => "cfc1",
            Self::Mtc1 => "mtc1",
            Self::Dmtc1 => "dmtc1",
            Self::Ctc1 => "ctc1",

            Self::Mfc2 => "mfc2",
            Self::Cfc2 => "cfc2",
            Self::Mtc2 => "mtc2",
            Self::Ctc2 => "ctc2",

            Self::FAdd => "add",
            Self::FSub => "sub",
            Self::FMul => "mul",
            Self::FDiv => "div",
            Self::FSqrt => "sqrt",
            Self::FAbs => "abs",
            Self::FMov => "mov",
            Self::FNeg => "neg",
            Self::RoundL => "round.l",
            Self::TruncL => "trunc.l",
            Self::CeilL => "ceil.l",
            Self::FloorL => "floor.l",
            Self::RoundW => "round.w",
            Self::TruncW => "trunc.w",
            Self::CeilW => "ceil.w",
            Self::FloorW => "floor.w",
            Self::CvtS => "cvt.s",
            Self::CvtD => "cvt.d",
            Self::CvtW => "cvt.w",
            Self::CvtL => "cvt.l",
            Self::FCompare => "c",
        }
    }
}
