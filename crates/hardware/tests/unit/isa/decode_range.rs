//! # Range Decoding Tests
//!
//! Alignment, termination at the top of the address space, error
//! propagation, and jump-target marking across a batch.

use mipsim_core::common::error::MemoryError;
use mipsim_core::isa::disasm::decode_range;
use mipsim_core::soc::MemoryMap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::builder::instruction::{i_type, j_type, op};
use crate::common::{init_tracing, ram_with_words};

// KSEG0 view of RAM mapped at physical 0.
const BASE: u32 = 0x8000_0000;

#[test]
fn marks_targets_inside_the_batch() {
    init_tracing();
    let mem = ram_with_words(
        0,
        &[
            i_type(op::BEQ, 0, 0, 1), // -> BASE + 8
            0,
            i_type(op::ADDIU, 29, 29, -8),
            j_type(op::J, 0), // -> BASE
        ],
    );

    let lines = decode_range(BASE, BASE + 16, |a| mem.read_u32(a)).unwrap();

    let marks: Vec<bool> = lines.iter().map(|l| l.is_jump_target).collect();
    assert_eq!(marks, vec![true, false, true, false]);
    assert_eq!(lines[0].text, "beq r0, r0, 0x80000008");
    assert_eq!(lines[1].text, "nop");
    assert_eq!(lines[3].instruction.target, Some(BASE));
}

#[test]
fn backward_and_forward_targets_are_both_marked() {
    // Entry 0 is targeted by a later jump; entry 3 by an earlier branch.
    let mem = ram_with_words(
        0,
        &[0, i_type(op::BNE, 4, 5, 1), j_type(op::J, 0), 0],
    );
    let lines = decode_range(BASE, BASE + 16, |a| mem.read_u32(a)).unwrap();
    assert!(lines[0].is_jump_target);
    assert!(lines[3].is_jump_target);
    assert!(!lines[1].is_jump_target);
    assert!(!lines[2].is_jump_target);
}

#[test]
fn targets_outside_the_range_mark_nothing() {
    let mem = ram_with_words(0, &[i_type(op::BEQ, 0, 0, 100), 0]);
    let lines = decode_range(BASE, BASE + 8, |a| mem.read_u32(a)).unwrap();
    assert!(lines.iter().all(|l| !l.is_jump_target));
}

#[test]
fn unaligned_begin_rounds_up() {
    let mem = ram_with_words(0, &[1, 2, 3, 4]);
    let lines = decode_range(BASE + 2, BASE + 16, |a| mem.read_u32(a)).unwrap();
    let addrs: Vec<u32> = lines.iter().map(|l| l.instruction.address).collect();
    assert_eq!(addrs, vec![BASE + 4, BASE + 8, BASE + 12]);
}

#[test]
fn empty_when_begin_not_below_end() {
    let fail = |addr: u32| -> Result<u32, MemoryError> { Err(MemoryError::Unmapped { addr }) };
    assert!(decode_range(BASE, BASE, fail).unwrap().is_empty());
    assert!(decode_range(BASE + 8, BASE, fail).unwrap().is_empty());
}

#[test]
fn stops_at_top_of_address_space() {
    let lines = decode_range(0xFFFF_FFF8, 0xFFFF_FFFF, |_| Ok(0)).unwrap();
    let addrs: Vec<u32> = lines.iter().map(|l| l.instruction.address).collect();
    assert_eq!(addrs, vec![0xFFFF_FFF8, 0xFFFF_FFFC]);

    assert!(decode_range(0xFFFF_FFFD, u32::MAX, |_| Ok(0)).unwrap().is_empty());
}

#[test]
fn read_error_propagates() {
    let mem = ram_with_words(0, &[0, 0]);
    let err = decode_range(BASE, BASE + 16, |a| mem.read_u32(a)).unwrap_err();
    assert!(matches!(err, MemoryError::OutOfBounds { offset: 8, .. }));
}

#[test]
fn full_width_range_returns_the_first_read_error() {
    let err = decode_range(0, u32::MAX, |addr| Err(MemoryError::Unmapped { addr })).unwrap_err();
    assert_eq!(err, MemoryError::Unmapped { addr: 0 });
}

#[test]
fn full_width_range_stops_where_memory_ends() {
    let mem = ram_with_words(0, &[0; 8]);
    let err = decode_range(0, u32::MAX, |a| mem.read_u32(a)).unwrap_err();
    assert!(matches!(err, MemoryError::OutOfBounds { offset: 32, .. }));
}

#[test]
fn reads_each_word_once_in_order() {
    let mut seen = Vec::new();
    let _ = decode_range(0x100, 0x110, |a| {
        seen.push(a);
        Ok(0)
    })
    .unwrap();
    assert_eq!(seen, vec![0x100, 0x104, 0x108, 0x10C]);
}

proptest! {
    #[test]
    fn prop_addresses_ascend_by_four(begin in 0u32..0x1000, len in 0u32..0x200) {
        let end = begin + len;
        let lines = decode_range(begin, end, |_| Ok(0)).unwrap();

        let first = (begin + 3) & !3;
        let expected = if end > first { (end - first).div_ceil(4) } else { 0 };
        prop_assert_eq!(lines.len() as u32, expected);
        for (i, line) in lines.iter().enumerate() {
            prop_assert_eq!(line.instruction.address, first + 4 * i as u32);
        }
    }
}
