//! VR4300 Floating-Point (COP1) Register File.
//!
//! This module implements the coprocessor-1 register state. It performs the following:
//! 1. **Storage:** 32 control words and one 128-byte data buffer of 32 four-byte slots.
//! 2. **Aliasing:** Each slot reads and writes as `u32`, `i32` or `f32`; an even slot
//!    paired with its successor reads and writes as one 64-bit pattern (`u64`, `i64`, `f64`).
//! 3. **Condition:** Tracks the compare condition bit in control word 31.
//!
//! All views share the same bytes: a value written through one alias is read back
//! through another as a bit reinterpretation, never as a numeric conversion.
//!
//! A 64-bit pattern at slot `i` keeps its low word in slot `i` and its high word in
//! slot `i + 1`. Double-width access must use an even `i`; odd pairs are accepted but
//! carry no architectural meaning.

use crate::common::constants::{
    FCR0_RESET, FCR31, FCR31_CONDITION, FPU_CONTROL_WORDS, FPU_DATA_SLOTS,
};

/// Bytes per data slot.
const SLOT_BYTES: usize = 4;

/// Floating-point register file.
///
/// # Panics
///
/// Every accessor panics if a slot or control index is out of range, like
/// indexing a fixed array. Double-width accessors also need `i + 1 < 32`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fpr {
    control: [u32; FPU_CONTROL_WORDS],
    data: [u8; FPU_DATA_SLOTS * SLOT_BYTES],
}

impl Fpr {
    /// Creates a register file in its reset state.
    pub const fn new() -> Self {
        let mut control = [0; FPU_CONTROL_WORDS];
        control[0] = FCR0_RESET;
        Self {
            control,
            data: [0; FPU_DATA_SLOTS * SLOT_BYTES],
        }
    }

    /// Zeroes every data slot and control word, then sets FCR0 to its identification value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Reads control word `idx`.
    #[inline]
    pub const fn control(&self, idx: usize) -> u32 {
        self.control[idx]
    }

    /// Writes control word `idx`.
    #[inline]
    pub const fn set_control(&mut self, idx: usize, value: u32) {
        self.control[idx] = value;
    }

    /// Compare condition bit of FCR31.
    #[inline]
    pub const fn condition(&self) -> bool {
        self.control[FCR31] & FCR31_CONDITION != 0
    }

    /// Sets or clears the compare condition bit of FCR31, leaving the other bits alone.
    pub const fn set_condition(&mut self, enable: bool) {
        if enable {
            self.control[FCR31] |= FCR31_CONDITION;
        } else {
            self.control[FCR31] &= !FCR31_CONDITION;
        }
    }

    fn slot(&self, i: usize) -> [u8; SLOT_BYTES] {
        let start = i * SLOT_BYTES;
        let mut bytes = [0; SLOT_BYTES];
        bytes.copy_from_slice(&self.data[start..start + SLOT_BYTES]);
        bytes
    }

    fn set_slot(&mut self, i: usize, bytes: [u8; SLOT_BYTES]) {
        let start = i * SLOT_BYTES;
        self.data[start..start + SLOT_BYTES].copy_from_slice(&bytes);
    }

    /// Reads slot `i` as an unsigned word.
    pub fn load_u32(&self, i: usize) -> u32 {
        u32::from_le_bytes(self.slot(i))
    }

    /// Writes slot `i` from an unsigned word.
    pub fn store_u32(&mut self, i: usize, value: u32) {
        self.set_slot(i, value.to_le_bytes());
    }

    /// Reads slot `i` as a signed word.
    pub fn load_i32(&self, i: usize) -> i32 {
        i32::from_le_bytes(self.slot(i))
    }

    /// Writes slot `i` from a signed word.
    pub fn store_i32(&mut self, i: usize, value: i32) {
        self.set_slot(i, value.to_le_bytes());
    }

    /// Reads slot `i` as a single-precision float.
    pub fn load_f32(&self, i: usize) -> f32 {
        f32::from_bits(self.load_u32(i))
    }

    /// Writes slot `i` from a single-precision float.
    pub fn store_f32(&mut self, i: usize, value: f32) {
        self.store_u32(i, value.to_bits());
    }

    /// Writes raw halves: `lo` into slot `i`, `hi` into slot `i + 1`.
    pub fn store_64(&mut self, i: usize, lo: u32, hi: u32) {
        self.store_u32(i, lo);
        self.store_u32(i + 1, hi);
    }

    /// Reads the 64-bit pattern of slots `i` (low) and `i + 1` (high).
    pub fn load_u64(&self, i: usize) -> u64 {
        (u64::from(self.load_u32(i + 1)) << 32) | u64::from(self.load_u32(i))
    }

    fn store_u64(&mut self, i: usize, value: u64) {
        self.store_64(i, value as u32, (value >> 32) as u32);
    }

    /// Stores an integral double as its 64-bit two's-complement pattern.
    ///
    /// Slot `i` receives `value mod 2^32`, slot `i + 1` receives `floor(value / 2^32)`.
    /// Fractions truncate toward zero and out-of-range values saturate.
    pub fn store_f64_as_i64(&mut self, i: usize, value: f64) {
        self.store_u64(i, value as i64 as u64);
    }

    /// Writes the IEEE-754 pattern of `value` over slots `i` and `i + 1`.
    pub fn store_f64(&mut self, i: usize, value: f64) {
        self.store_u64(i, value.to_bits());
    }

    /// Reads slots `i` and `i + 1` as a double-precision float, bit for bit.
    pub fn load_f64(&self, i: usize) -> f64 {
        f64::from_bits(self.load_u64(i))
    }

    /// Reads slots `i` and `i + 1` as a signed 64-bit integer, converted to a double.
    ///
    /// The result is `hi * 2^32 + lo` with `hi` signed and `lo` unsigned, rounded to
    /// the nearest double.
    pub fn load_i64_as_f64(&self, i: usize) -> f64 {
        self.load_u64(i) as i64 as f64
    }
}

impl Default for Fpr {
    fn default() -> Self {
        Self::new()
    }
}
