//! Instruction Disassembler for MIPS III (VR4300).
//!
//! Converts decoded instructions into human-readable text for debug listings
//! and test diagnostics, and batches decoding over address ranges.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::decode_one;
//! let d = decode_one(0x8000_0000, 0x0085_1020); // add v0, a0, a1
//! assert_eq!(d.text, "add v0, a0, a1");
//! assert_eq!(d.instruction.destination_names(), ["v0"]);
//! ```

use std::collections::HashSet;

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::MemoryError;
use crate::isa::decode::{Decoded, Operand, decode};
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::op::{COMPARE_CONDITIONS, Op};

/// Upper bound on the entries reserved before the first read; wider ranges grow on demand.
const RESERVE_LIMIT: usize = 4096;

/// One line of a disassembly listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    /// Decoded instruction with its register roles and target.
    pub instruction: Instruction,
    /// Mnemonic and operands.
    pub text: String,
    /// Whether another instruction of the same batch branches or jumps here.
    pub is_jump_target: bool,
}

/// Disassembles a raw word into text, as if fetched from address 0.
///
/// Branch and jump targets are resolved relative to address 0; use
/// [`decode_one`] when the address is known.
pub fn disassemble(inst: u32) -> String {
    format(&decode(0, inst))
}

/// Decodes and formats one word fetched from `address`.
///
/// Never fails; `is_jump_target` is always `false` because a lone
/// instruction has no batch to be targeted from.
pub fn decode_one(address: u32, opcode: u32) -> Disassembly {
    let decoded = decode(address, opcode);
    Disassembly {
        instruction: decoded.instruction(),
        text: format(&decoded),
        is_jump_target: false,
    }
}

/// Decodes every 4-byte-aligned address in `[begin, end)`, in increasing order.
///
/// Words are fetched through `read`. Once the whole batch is decoded, every
/// entry whose address is the target of some entry in the batch is marked
/// with `is_jump_target`, regardless of which comes first.
///
/// # Errors
///
/// Propagates the first error returned by `read`.
pub fn decode_range<F>(begin: u32, end: u32, mut read: F) -> Result<Vec<Disassembly>, MemoryError>
where
    F: FnMut(u32) -> Result<u32, MemoryError>,
{
    let requested = (end.saturating_sub(begin) / INSTRUCTION_SIZE) as usize;
    let mut lines = Vec::with_capacity(requested.min(RESERVE_LIMIT));

    let mut next = align_up(begin);
    while let Some(addr) = next.filter(|&a| a < end) {
        let word = read(addr)?;
        lines.push(decode_one(addr, word));
        next = addr.checked_add(INSTRUCTION_SIZE);
    }

    let targets: HashSet<u32> = lines.iter().filter_map(|l| l.instruction.target).collect();
    for line in &mut lines {
        line.is_jump_target = targets.contains(&line.instruction.address);
    }

    trace!(
        begin,
        end,
        count = lines.len(),
        targets = targets.len(),
        "decoded range"
    );
    Ok(lines)
}

/// Rounds up to the next instruction boundary; `None` past the address space.
fn align_up(addr: u32) -> Option<u32> {
    addr.checked_add(INSTRUCTION_SIZE - 1)
        .map(|a| a & !(INSTRUCTION_SIZE - 1))
}

/// Formats a decoded instruction.
///
/// Unrecognised encodings render as `unknown (0x????????)`; the all-zero word
/// renders as `nop`.
pub fn format(d: &Decoded) -> String {
    if d.op == Op::Unknown || d.op.is_dispatch() {
        return format!("unknown ({:#010x})", d.raw);
    }
    if d.raw == 0 {
        return "nop".to_string();
    }

    let mnemonic = mnemonic(d);
    let shown: Vec<String> = d.operands().iter().filter_map(render).collect();
    if shown.is_empty() {
        mnemonic
    } else {
        format!("{mnemonic} {}", shown.join(", "))
    }
}

/// Full mnemonic, including the COP1 format suffix and compare condition.
fn mnemonic(d: &Decoded) -> String {
    match (d.op, d.fmt) {
        (Op::FCompare, Some(fmt)) => {
            let cond = COMPARE_CONDITIONS[(d.raw.funct() & 0xF) as usize];
            format!("c.{cond}.{fmt}")
        }
        (op, Some(fmt)) if op.is_fp_arith() => format!("{}.{fmt}", op.mnemonic()),
        (op, _) => op.mnemonic().to_string(),
    }
}

/// Text of one operand; hidden operands render as nothing.
fn render(operand: &Operand) -> Option<String> {
    match *operand {
        Operand::Reg(reg, _) => Some(reg.name().to_string()),
        Operand::Implicit(..) => None,
        Operand::FpControl(n) => Some(format!("fcr{n}")),
        Operand::Imm(v) => Some(v.to_string()),
        Operand::UImm(v) | Operand::Code(v) | Operand::CacheOp(v) => Some(format!("{v:#x}")),
        Operand::Shift(v) => Some(v.to_string()),
        Operand::Target(t) => Some(format!("{t:#010x}")),
        Operand::Mem { base, offset } => Some(format!("{offset}({base})")),
    }
}
