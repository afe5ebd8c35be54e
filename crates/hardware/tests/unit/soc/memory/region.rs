//! # Memory Region Tests
//!
//! Big-endian layout of every access width, bounds checking, read-modify-write
//! helpers, and storage sharing between sub-regions.

use mipsim_core::common::error::MemoryError;
use mipsim_core::soc::MemoryRegion;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn bytes(region: &MemoryRegion) -> Vec<u8> {
    region.read_bytes(0, region.len()).unwrap()
}

#[test]
fn new_region_is_zeroed() {
    let r = MemoryRegion::new(16);
    assert_eq!(r.len(), 16);
    assert!(!r.is_empty());
    assert_eq!(r.base(), 0);
    assert_eq!(bytes(&r), vec![0; 16]);
}

#[test]
fn default_region_is_empty() {
    let r = MemoryRegion::default();
    assert!(r.is_empty());
    assert_eq!(
        r.get_u8(0).unwrap_err(),
        MemoryError::OutOfBounds {
            offset: 0,
            len: 1,
            size: 0
        }
    );
}

#[test]
fn word_is_stored_most_significant_byte_first() {
    let r = MemoryRegion::new(8);
    r.set_u32(0, 0x1234_5678).unwrap();
    assert_eq!(r.read_bytes(0, 4).unwrap(), vec![0x12, 0x34, 0x56, 0x78]);

    r.set_u16(4, 0xBEEF).unwrap();
    assert_eq!(r.read_bytes(4, 2).unwrap(), vec![0xBE, 0xEF]);
}

#[test]
fn doubleword_layout() {
    let r = MemoryRegion::new(8);
    r.set_u64(0, 0x0102_0304_0506_0708).unwrap();
    assert_eq!(bytes(&r), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(r.get_u32(0).unwrap(), 0x0102_0304);
    assert_eq!(r.get_u32(4).unwrap(), 0x0506_0708);
}

#[test]
fn from_bytes_reads_big_endian() {
    let r = MemoryRegion::from_bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(r.get_u32(0).unwrap(), 0xDEAD_BEEF);
    assert_eq!(r.get_u16(2).unwrap(), 0xBEEF);
    assert_eq!(r.get_u8(1).unwrap(), 0xAD);
}

#[test]
fn signed_views_share_bits_with_unsigned() {
    let r = MemoryRegion::new(16);
    r.set_i8(0, -1).unwrap();
    assert_eq!(r.get_u8(0).unwrap(), 0xFF);

    r.set_i16(2, -2).unwrap();
    assert_eq!(r.get_u16(2).unwrap(), 0xFFFE);

    r.set_i32(4, i32::MIN).unwrap();
    assert_eq!(r.get_u32(4).unwrap(), 0x8000_0000);

    r.set_i64(8, -3).unwrap();
    assert_eq!(r.get_u64(8).unwrap(), 0xFFFF_FFFF_FFFF_FFFD);
    assert_eq!(r.get_i64(8).unwrap(), -3);
}

#[test]
fn masked_store_keeps_unselected_bits() {
    let r = MemoryRegion::new(16);
    r.set_u32(0, 0xAABB_CCDD).unwrap();
    r.set_u32_masked(0, 0x1122_3344, 0x00FF_00FF).unwrap();
    assert_eq!(r.get_u32(0).unwrap(), 0xAA22_CC44);

    r.set_u64(8, u64::MAX).unwrap();
    r.set_u64_masked(8, 0, 0xFFFF_0000_0000_FFFF).unwrap();
    assert_eq!(r.get_u64(8).unwrap(), 0x0000_FFFF_FFFF_0000);
}

#[test]
fn bit_helpers() {
    let r = MemoryRegion::new(4);
    r.set_bits32(0, 0x0000_0101).unwrap();
    r.set_bits32(0, 0x8000_0000).unwrap();
    assert_eq!(r.get_u32(0).unwrap(), 0x8000_0101);

    r.clear_bits32(0, 0x0000_0001).unwrap();
    assert_eq!(r.get_u32(0).unwrap(), 0x8000_0100);

    assert_eq!(r.get_bits32(0, 0xFFFF_0000).unwrap(), 0x8000_0000);
    assert_eq!(r.get_bits32(0, 0x0000_00FF).unwrap(), 0);
}

#[rstest]
#[case::word_straddles_end(6, 4)]
#[case::starts_at_end(8, 1)]
#[case::far_past_end(0x1000, 4)]
#[case::offset_overflows(usize::MAX, 4)]
fn out_of_bounds_reads_fail(#[case] offset: usize, #[case] len: usize) {
    let r = MemoryRegion::new(8);
    assert_eq!(
        r.read_bytes(offset, len).unwrap_err(),
        MemoryError::OutOfBounds {
            offset,
            len,
            size: 8
        }
    );
}

#[test]
fn typed_access_reports_its_width() {
    let r = MemoryRegion::new(8);
    assert_eq!(
        r.get_u64(4).unwrap_err(),
        MemoryError::OutOfBounds {
            offset: 4,
            len: 8,
            size: 8
        }
    );
    assert!(r.set_u16(7, 0).is_err());
    assert!(r.get_u8(7).is_ok());
}

#[test]
fn failed_write_changes_nothing() {
    let r = MemoryRegion::from_bytes(vec![1, 2, 3, 4, 5, 6]);
    assert!(r.set_u32(4, 0xFFFF_FFFF).is_err());
    assert!(r.set_u32_masked(4, 0, u32::MAX).is_err());
    assert!(r.write_bytes(2, &[0; 8]).is_err());
    assert_eq!(bytes(&r), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn clear_and_clear_range() {
    let r = MemoryRegion::from_bytes(vec![9; 8]);
    r.clear_range(2, 3).unwrap();
    assert_eq!(bytes(&r), vec![9, 9, 0, 0, 0, 9, 9, 9]);
    assert!(r.clear_range(6, 3).is_err());
    assert_eq!(r.get_u8(7).unwrap(), 9);

    r.clear();
    assert_eq!(bytes(&r), vec![0; 8]);
}

#[test]
fn sub_region_shares_storage() {
    let parent = MemoryRegion::new(16);
    let child = parent.sub_region(4, 8).unwrap();
    assert_eq!(child.len(), 8);
    assert_eq!(child.base(), 4);
    assert!(child.shares_storage(&parent));

    child.set_u32(0, 0xCAFE_F00D).unwrap();
    assert_eq!(parent.get_u32(4).unwrap(), 0xCAFE_F00D);

    parent.set_u8(11, 0x7F).unwrap();
    assert_eq!(child.get_u8(7).unwrap(), 0x7F);
}

#[test]
fn sub_region_is_bounded_by_its_window() {
    let parent = MemoryRegion::new(16);
    let child = parent.sub_region(4, 8).unwrap();
    assert!(child.get_u32(8).is_err());
    assert!(child.sub_region(4, 8).is_err());

    let grandchild = child.sub_region(2, 4).unwrap();
    assert_eq!(grandchild.base(), 6);
    grandchild.set_u16(0, 0xABCD).unwrap();
    assert_eq!(parent.get_u16(6).unwrap(), 0xABCD);
}

#[test]
fn clear_on_sub_region_stays_inside_window() {
    let parent = MemoryRegion::from_bytes(vec![1; 8]);
    parent.sub_region(2, 4).unwrap().clear();
    assert_eq!(bytes(&parent), vec![1, 1, 0, 0, 0, 0, 1, 1]);
}

#[test]
fn clone_shares_storage() {
    let a = MemoryRegion::new(4);
    let b = a.clone();
    b.set_u32(0, 5).unwrap();
    assert_eq!(a.get_u32(0).unwrap(), 5);
    assert!(!a.shares_storage(&MemoryRegion::new(4)));
}

#[test]
fn copy_between_distinct_regions() {
    let src = MemoryRegion::from_bytes(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    let dst = MemoryRegion::new(8);
    dst.copy_from(4, &src, 2, 4).unwrap();
    assert_eq!(bytes(&dst), vec![0, 0, 0, 0, 3, 4, 5, 6]);
}

#[test]
fn copy_rejects_either_window_out_of_bounds() {
    let src = MemoryRegion::from_bytes(vec![1; 4]);
    let dst = MemoryRegion::new(8);

    let err = dst.copy_from(6, &src, 0, 4).unwrap_err();
    assert_eq!(
        err,
        MemoryError::OutOfBounds {
            offset: 6,
            len: 4,
            size: 8
        }
    );
    let err = dst.copy_from(0, &src, 2, 4).unwrap_err();
    assert_eq!(
        err,
        MemoryError::OutOfBounds {
            offset: 2,
            len: 4,
            size: 4
        }
    );
    assert_eq!(bytes(&dst), vec![0; 8]);
}

#[test]
fn overlapping_copy_within_one_storage() {
    let r = MemoryRegion::from_bytes(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    r.copy_from(2, &r, 0, 4).unwrap();
    assert_eq!(bytes(&r), vec![1, 2, 1, 2, 3, 4, 7, 8]);

    let r = MemoryRegion::from_bytes(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    r.copy_from(0, &r, 2, 4).unwrap();
    assert_eq!(bytes(&r), vec![3, 4, 5, 6, 5, 6, 7, 8]);
}

#[test]
fn copy_between_sibling_sub_regions() {
    let parent = MemoryRegion::from_bytes(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    let low = parent.sub_region(0, 4).unwrap();
    let high = parent.sub_region(4, 4).unwrap();
    high.copy_from(0, &low, 0, 4).unwrap();
    assert_eq!(bytes(&parent), vec![1, 2, 3, 4, 1, 2, 3, 4]);
}

proptest! {
    #[test]
    fn prop_u32_round_trip(offset in 0usize..=60, value: u32) {
        let r = MemoryRegion::new(64);
        r.set_u32(offset, value).unwrap();
        prop_assert_eq!(r.get_u32(offset).unwrap(), value);
        prop_assert_eq!(r.read_bytes(offset, 4).unwrap(), value.to_be_bytes().to_vec());
    }

    #[test]
    fn prop_masked_store(old: u32, value: u32, mask: u32) {
        let r = MemoryRegion::new(4);
        r.set_u32(0, old).unwrap();
        r.set_u32_masked(0, value, mask).unwrap();
        prop_assert_eq!(r.get_u32(0).unwrap(), (old & !mask) | (value & mask));
    }

    #[test]
    fn prop_accesses_past_end_fail(size in 0usize..64, offset in 0usize..128) {
        let r = MemoryRegion::new(size);
        prop_assert_eq!(r.get_u32(offset).is_ok(), offset + 4 <= size);
    }
}
