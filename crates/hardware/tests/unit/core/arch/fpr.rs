//! # COP1 Register File Tests
//!
//! Reset state, the FCR31 condition bit, and bit-exact aliasing between the
//! 32-bit and 64-bit views of the data slots.

use mipsim_core::core::arch::fpr::Fpr;
use proptest::prelude::*;

#[test]
fn reset_sets_only_fcr0() {
    let mut fpr = Fpr::new();
    fpr.store_u32(7, 0xFFFF_FFFF);
    fpr.set_control(31, 0x1234_5678);
    fpr.set_control(0, 0);

    fpr.reset();

    assert_eq!(fpr.control(0), 0x0000_0511);
    for i in 1..32 {
        assert_eq!(fpr.control(i), 0, "control word {i}");
    }
    for i in 0..32 {
        assert_eq!(fpr.load_u32(i), 0, "slot {i}");
    }
    assert_eq!(fpr, Fpr::default());
}

#[test]
fn condition_touches_only_its_bit() {
    let mut fpr = Fpr::new();
    fpr.set_control(31, 0x0000_0003);

    fpr.set_condition(true);
    assert!(fpr.condition());
    assert_eq!(fpr.control(31), 0x0080_0003);

    fpr.set_condition(true);
    assert_eq!(fpr.control(31), 0x0080_0003);

    fpr.set_condition(false);
    assert!(!fpr.condition());
    assert_eq!(fpr.control(31), 0x0000_0003);
}

#[test]
fn store_f64_as_i64_splits_large_value() {
    let mut fpr = Fpr::new();
    fpr.store_f64_as_i64(2, 2.0 * 2f64.powi(40) + 13.0);
    assert_eq!(fpr.load_u32(2), 13);
    assert_eq!(fpr.load_u32(3), 512);
}

#[test]
fn store_f64_as_i64_one() {
    let mut fpr = Fpr::new();
    fpr.store_f64_as_i64(2, 1.0);
    assert_eq!(fpr.load_u32(2), 1);
    assert_eq!(fpr.load_u32(3), 0);
}

#[test]
fn store_f64_as_i64_negative_is_twos_complement() {
    let mut fpr = Fpr::new();
    fpr.store_f64_as_i64(6, -1.0);
    assert_eq!(fpr.load_u32(6), 0xFFFF_FFFF);
    assert_eq!(fpr.load_i32(7), -1);
}

#[test]
fn store_64_halves_read_back_unsigned() {
    let mut fpr = Fpr::new();
    fpr.store_64(4, 0xDEAD_BEEF, 0xFACE_CAFE);
    assert_eq!(fpr.load_u32(4), 0xDEAD_BEEF);
    assert_eq!(fpr.load_u32(5), 0xFACE_CAFE);
    assert_eq!(fpr.load_u64(4), 0xFACE_CAFE_DEAD_BEEF);
}

#[test]
fn double_round_trip_is_bit_exact() {
    let mut fpr = Fpr::new();
    for value in [0.0, -0.0, 1.5, f64::MIN_POSITIVE, f64::INFINITY, f64::NAN] {
        fpr.store_f64(8, value);
        assert_eq!(fpr.load_f64(8).to_bits(), value.to_bits());
    }
}

#[test]
fn double_pattern_lands_low_word_first() {
    let mut fpr = Fpr::new();
    fpr.store_f64(10, 1.0);
    assert_eq!(fpr.load_u32(10), 0);
    assert_eq!(fpr.load_u32(11), 0x3FF0_0000);
}

#[test]
fn views_alias_the_same_bytes() {
    let mut fpr = Fpr::new();
    fpr.store_f32(1, -2.5);
    assert_eq!(fpr.load_u32(1), (-2.5f32).to_bits());
    assert_eq!(fpr.load_i32(1), (-2.5f32).to_bits() as i32);

    fpr.store_i32(1, -1);
    assert_eq!(fpr.load_u32(1), u32::MAX);
    assert!(fpr.load_f32(1).is_nan());
}

#[test]
fn load_i64_as_f64_matches_reference_for_non_negative_high() {
    let mut fpr = Fpr::new();
    fpr.store_64(12, 0x8000_0000, 3);
    let expected = 3.0 * 2f64.powi(32) + 2_147_483_648.0;
    assert_eq!(fpr.load_i64_as_f64(12), expected);
}

#[test]
fn load_i64_as_f64_negative_high_is_signed() {
    let mut fpr = Fpr::new();
    fpr.store_64(14, 0xFFFF_FFFE, 0xFFFF_FFFF);
    assert_eq!(fpr.load_i64_as_f64(14), -2.0);
}

proptest! {
    #[test]
    fn prop_u32_slots_are_independent(i in 0usize..31, a: u32, b: u32) {
        let mut fpr = Fpr::new();
        fpr.store_u32(i, a);
        fpr.store_u32(i + 1, b);
        prop_assert_eq!(fpr.load_u32(i), a);
        prop_assert_eq!(fpr.load_u32(i + 1), b);
    }

    #[test]
    fn prop_store_64_matches_double_view(half in 0usize..16, lo: u32, hi: u32) {
        let i = half * 2;
        let mut fpr = Fpr::new();
        fpr.store_64(i, lo, hi);
        let bits = (u64::from(hi) << 32) | u64::from(lo);
        prop_assert_eq!(fpr.load_f64(i).to_bits(), bits);
    }

    #[test]
    fn prop_integral_doubles_round_trip(v in -(1i64 << 52)..(1i64 << 52)) {
        let mut fpr = Fpr::new();
        fpr.store_f64_as_i64(0, v as f64);
        prop_assert_eq!(fpr.load_u64(0) as i64, v);
        prop_assert_eq!(fpr.load_i64_as_f64(0), v as f64);
    }
}
