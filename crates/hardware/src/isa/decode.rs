//! MIPS Instruction Decoder.
//!
//! Decoding is split into three pure steps:
//! 1. **Structure:** [`decode`] walks the table cascade and yields a [`Decoded`]
//!    record (operation, format tag, raw word).
//! 2. **Operands:** [`Decoded::operands`] lists every operand with its role,
//!    including hidden ones such as the implicit link register.
//! 3. **Roles:** [`Decoded::instruction`] folds the operand list into the
//!    source/destination sets of an [`Instruction`].
//!
//! The text view lives in [`disasm`](crate::isa::disasm); both views read the
//! same operand list, so a single decode serves display and dependency
//! extraction.

use std::collections::BTreeSet;

use crate::common::constants::{INSTRUCTION_SIZE, JUMP_SEGMENT_MASK};
use crate::isa::abi::REG_RA;
use crate::isa::instruction::{Instruction, InstructionBits, Reg};
use crate::isa::op::{FpFmt, Op};
use crate::isa::tables::{COP0, COP1, COP1_FUNCT, PRIMARY, REGIMM, SPECIAL, tlb_op};

/// Whether an operand is read or written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Read by the instruction.
    Source,
    /// Written by the instruction.
    Destination,
}

/// One operand of a decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Register shown in the text.
    Reg(Reg, Role),
    /// Register accessed implicitly; contributes a role but no text.
    Implicit(Reg, Role),
    /// COP1 control register (`cfc1`/`ctc1`).
    FpControl(u8),
    /// Sign-extended 16-bit immediate.
    Imm(i32),
    /// Zero-extended 16-bit immediate.
    UImm(u32),
    /// Shift amount.
    Shift(u32),
    /// Resolved branch or jump target.
    Target(u32),
    /// Base register plus signed displacement. The base is a source.
    Mem {
        /// Base register.
        base: Reg,
        /// Sign-extended displacement.
        offset: i32,
    },
    /// `syscall`/`break` code field.
    Code(u32),
    /// `cache` operation field.
    CacheOp(u32),
}

/// Structural decode of one instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Address the word was fetched from.
    pub address: u32,
    /// Raw 32-bit encoding.
    pub raw: u32,
    /// Operation selected by the table cascade.
    pub op: Op,
    /// Operand format, for COP1 arithmetic only.
    pub fmt: Option<FpFmt>,
}

/// Decodes a word fetched from `address`.
///
/// Total over all 32-bit inputs: unused encodings decode to [`Op::Unknown`].
pub fn decode(address: u32, inst: u32) -> Decoded {
    let (op, fmt) = match PRIMARY[inst.op() as usize] {
        Op::Special => (SPECIAL[inst.funct() as usize], None),
        Op::RegImm => (REGIMM[inst.rt()], None),
        Op::Cop0 => match COP0[inst.fmt() as usize] {
            Op::Tlb => (tlb_op(inst.funct()), None),
            op => (op, None),
        },
        Op::Cop1 => match COP1[inst.fmt() as usize] {
            Op::Bc1 => (bc1_op(inst), None),
            Op::Cop1Fmt(fmt) => (cop1_arith_op(fmt, inst.funct()), Some(fmt)),
            op => (op, None),
        },
        Op::Cop2 => (cop2_op(inst), None),
        op => (op, None),
    };

    Decoded {
        address,
        raw: inst,
        op,
        fmt,
    }
}

/// Selects the COP1 branch from the `nd`/`tf` bits (16-17).
const fn bc1_op(inst: u32) -> Op {
    match (inst >> 16) & 0x3 {
        0 => Op::Bc1f,
        1 => Op::Bc1t,
        2 => Op::Bc1fl,
        _ => Op::Bc1tl,
    }
}

/// Looks up the shared COP1 arithmetic table for one format.
///
/// Fixed-point formats only convert to floating point, and no format converts
/// to itself.
fn cop1_arith_op(fmt: FpFmt, funct: u32) -> Op {
    let op = COP1_FUNCT[funct as usize];
    let valid = match (fmt, op) {
        (FpFmt::W | FpFmt::L, Op::CvtS | Op::CvtD) => true,
        (FpFmt::W | FpFmt::L, _) => false,
        (FpFmt::S, Op::CvtS) | (FpFmt::D, Op::CvtD) => false,
        _ => true,
    };
    if valid { op } else { Op::Unknown }
}

/// Coprocessor 2 only exposes the move forms.
fn cop2_op(inst: u32) -> Op {
    match inst.fmt() {
        0 => Op::Mfc2,
        2 => Op::Cfc2,
        4 => Op::Mtc2,
        6 => Op::Ctc2,
        _ => Op::Unknown,
    }
}

/// `(address + 4) + 4 * sign_extend(imm)`, wrapping at 32 bits.
#[inline]
pub fn branch_target(address: u32, inst: u32) -> u32 {
    address
        .wrapping_add(INSTRUCTION_SIZE)
        .wrapping_add((inst.imm_signed() << 2) as u32)
}

/// `(address & 0xF000_0000) | (target * 4)`.
#[inline]
pub fn jump_target(address: u32, inst: u32) -> u32 {
    (address & JUMP_SEGMENT_MASK) | (inst.target() << 2)
}

impl Decoded {
    /// Resolved branch/jump target, if the operation transfers control to one.
    pub fn target(&self) -> Option<u32> {
        self.operands().into_iter().find_map(|o| match o {
            Operand::Target(t) => Some(t),
            _ => None,
        })
    }

    /// Lists the operands in display order, hidden operands last.
    pub fn operands(&self) -> Vec<Operand> {
        use Operand::{CacheOp, Code, FpControl, Imm, Implicit, Mem, Shift, Target, UImm};
        use Role::{Destination as Dst, Source as Src};

        let i = self.raw;
        let rs = Reg::gpr(i.rs());
        let rt = Reg::gpr(i.rt());
        let rd = Reg::gpr(i.rd());
        let ft = Reg::fpr(i.ft());
        let fs = Reg::fpr(i.fs());
        let fd = Reg::fpr(i.fd());
        let ra = Reg::gpr(REG_RA);
        // Displacements are sign-extended, as the address adder applies them.
        let mem = Mem {
            base: rs,
            offset: i.imm_signed(),
        };
        let branch = Target(branch_target(self.address, i));
        let reg = Operand::Reg;

        let mut operands = match self.op {
            Op::Sll
            | Op::Srl
            | Op::Sra
            | Op::Dsll
            | Op::Dsrl
            | Op::Dsra
            | Op::Dsll32
            | Op::Dsrl32
            | Op::Dsra32 => vec![reg(rd, Dst), reg(rt, Src), Shift(i.sa())],
            Op::Sllv | Op::Srlv | Op::Srav | Op::Dsllv | Op::Dsrlv | Op::Dsrav => {
                vec![reg(rd, Dst), reg(rt, Src), reg(rs, Src)]
            }

            Op::Jr => vec![reg(rs, Src)],
            Op::Jalr => vec![reg(rd, Dst), reg(rs, Src)],
            Op::J | Op::Jal => vec![Target(jump_target(self.address, i))],

            Op::Beq | Op::Bne | Op::Beql | Op::Bnel => vec![reg(rs, Src), reg(rt, Src), branch],
            Op::Blez
            | Op::Bgtz
            | Op::Blezl
            | Op::Bgtzl
            | Op::Bltz
            | Op::Bgez
            | Op::Bltzl
            | Op::Bgezl
            | Op::Bltzal
            | Op::Bgezal
            | Op::Bltzall
            | Op::Bgezall => vec![reg(rs, Src), branch],
            Op::Bc1f | Op::Bc1t | Op::Bc1fl | Op::Bc1tl => vec![branch],

            Op::Syscall | Op::Break => {
                let code = (i >> 6) & 0xF_FFFF;
                if code == 0 { vec![] } else { vec![Code(code)] }
            }
            Op::Sync | Op::Tlbr | Op::Tlbwi | Op::Tlbwr | Op::Tlbp | Op::Eret => vec![],

            Op::Mfhi | Op::Mflo => vec![reg(rd, Dst)],
            Op::Mthi | Op::Mtlo => vec![reg(rs, Src)],
            Op::Mult
            | Op::Multu
            | Op::Div
            | Op::Divu
            | Op::Dmult
            | Op::Dmultu
            | Op::Ddiv
            | Op::Ddivu => vec![reg(rs, Src), reg(rt, Src)],

            Op::Add
            | Op::Addu
            | Op::Sub
            | Op::Subu
            | Op::And
            | Op::Or
            | Op::Xor
            | Op::Nor
            | Op::Slt
            | Op::Sltu
            | Op::Dadd
            | Op::Daddu
            | Op::Dsub
            | Op::Dsubu => vec![reg(rd, Dst), reg(rs, Src), reg(rt, Src)],

            Op::Tge | Op::Tgeu | Op::Tlt | Op::Tltu | Op::Teq | Op::Tne => {
                vec![reg(rs, Src), reg(rt, Src)]
            }
            Op::Tgei | Op::Tgeiu | Op::Tlti | Op::Tltiu | Op::Teqi | Op::Tnei => {
                vec![reg(rs, Src), Imm(i.imm_signed())]
            }

            Op::Addi | Op::Addiu | Op::Slti | Op::Sltiu | Op::Daddi | Op::Daddiu => {
                vec![reg(rt, Dst), reg(rs, Src), Imm(i.imm_signed())]
            }
            Op::Andi | Op::Ori | Op::Xori => vec![reg(rt, Dst), reg(rs, Src), UImm(i.imm())],
            Op::Lui => vec![reg(rt, Dst), UImm(i.imm())],

            Op::Lb | Op::Lh | Op::Lw | Op::Lbu | Op::Lhu | Op::Lwu | Op::Ll | Op::Lld | Op::Ld => {
                vec![reg(rt, Dst), mem]
            }
            // Unaligned loads merge into the old register contents.
            Op::Lwl | Op::Lwr | Op::Ldl | Op::Ldr => vec![reg(rt, Dst), mem, Implicit(rt, Src)],
            Op::Sb | Op::Sh | Op::Sw | Op::Sd | Op::Swl | Op::Swr | Op::Sdl | Op::Sdr => {
                vec![reg(rt, Src), mem]
            }
            // Store-conditional writes the success flag back into rt.
            Op::Sc | Op::Scd => vec![reg(rt, Src), mem, Implicit(rt, Dst)],
            Op::Lwc1 | Op::Ldc1 => vec![reg(ft, Dst), mem],
            Op::Swc1 | Op::Sdc1 => vec![reg(ft, Src), mem],
            Op::Lwc2 | Op::Ldc2 => vec![reg(Reg::Cop2(i.rt() as u8), Dst), mem],
            Op::Swc2 | Op::Sdc2 => vec![reg(Reg::Cop2(i.rt() as u8), Src), mem],
            Op::Cache => vec![CacheOp(i.rt() as u32), mem],

            Op::Mfc0 | Op::Dmfc0 => vec![reg(rt, Dst), reg(Reg::Cop0(i.rd() as u8), Src)],
            Op::Mtc0 | Op::Dmtc0 => vec![reg(rt, Src), reg(Reg::Cop0(i.rd() as u8), Dst)],
            Op::Mfc1 | Op::Dmfc1 => vec![reg(rt, Dst), reg(fs, Src)],
            Op::Mtc1 | Op::Dmtc1 => vec![reg(rt, Src), reg(fs, Dst)],
            Op::Cfc1 => vec![reg(rt, Dst), FpControl(i.fs() as u8)],
            Op::Ctc1 => vec![reg(rt, Src), FpControl(i.fs() as u8)],
            Op::Mfc2 | Op::Cfc2 => vec![reg(rt, Dst), reg(Reg::Cop2(i.rd() as u8), Src)],
            Op::Mtc2 | Op::Ctc2 => vec![reg(rt, Src), reg(Reg::Cop2(i.rd() as u8), Dst)],

            Op::FAdd | Op::FSub | Op::FMul | Op::FDiv => {
                vec![reg(fd, Dst), reg(fs, Src), reg(ft, Src)]
            }
            Op::FSqrt
            | Op::FAbs
            | Op::FMov
            | Op::FNeg
            | Op::RoundL
            | Op::TruncL
            | Op::CeilL
            | Op::FloorL
            | Op::RoundW
            | Op::TruncW
            | Op::CeilW
            | Op::FloorW
            | Op::CvtS
            | Op::CvtD
            | Op::CvtW
            | Op::CvtL => vec![reg(fd, Dst), reg(fs, Src)],
            Op::FCompare => vec![reg(fs, Src), reg(ft, Src)],

            Op::Unknown
            | Op::Special
            | Op::RegImm
            | Op::Cop0
            | Op::Cop1
            | Op::Cop2
            | Op::Tlb
            | Op::Bc1
            | Op::Cop1Fmt(_) => vec![],
        };

        if self.op.links() {
            operands.push(Implicit(ra, Dst));
        }
        operands
    }

    /// Folds the operand list into an [`Instruction`] with its register roles.
    pub fn instruction(&self) -> Instruction {
        let operands = self.operands();
        let with_role = |wanted: Role| -> BTreeSet<Reg> {
            operands
                .iter()
                .filter_map(move |o| match *o {
                    Operand::Reg(r, role) | Operand::Implicit(r, role) if role == wanted => Some(r),
                    Operand::Mem { base, .. } if wanted == Role::Source => Some(base),
                    _ => None,
                })
                .collect()
        };

        Instruction {
            address: self.address,
            opcode: self.raw,
            sources: with_role(Role::Source),
            destinations: with_role(Role::Destination),
            target: operands.iter().find_map(|o| match *o {
                Operand::Target(t) => Some(t),
                _ => None,
            }),
        }
    }
}

impl From<&Decoded> for Instruction {
    fn from(d: &Decoded) -> Self {
        d.instruction()
    }
}
