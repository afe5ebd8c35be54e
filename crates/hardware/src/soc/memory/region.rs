//! Big-endian memory region.
//!
//! A `MemoryRegion` is a window `[base, base + len)` over a shared byte buffer.
//! It provides:
//! 1. **Typed access:** 8/16/32/64-bit signed and unsigned loads and stores.
//! 2. **Read-modify-write:** masked stores and 32-bit bit set/clear/test.
//! 3. **Bulk operations:** zero-fill, cross-region copy and narrower sub-regions.
//!
//! Every multi-byte access is big-endian. Every access is bounds-checked against
//! the window and fails with [`MemoryError::OutOfBounds`] instead of clamping.
//!
//! Sub-regions and clones share the parent's storage, so a write through one view
//! is visible through all of them. Storage is reference-counted without locking
//! and regions are therefore confined to one thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::common::error::MemoryError;

/// A bounds-checked, big-endian window over shared byte storage.
#[derive(Clone)]
pub struct MemoryRegion {
    storage: Rc<RefCell<Vec<u8>>>,
    base: usize,
    len: usize,
}

/// Generates the typed load/store pair for one integer width.
macro_rules! typed_access {
    ($($get:ident, $set:ident, $ty:ty;)*) => {
        $(
            #[doc = concat!("Loads a big-endian `", stringify!($ty), "` at `offset`.")]
            ///
            /// # Errors
            ///
            /// Returns [`MemoryError::OutOfBounds`] if the access leaves the region.
            pub fn $get(&self, offset: usize) -> Result<$ty, MemoryError> {
                let mut buf = [0u8; size_of::<$ty>()];
                self.read_into(offset, &mut buf)?;
                Ok(<$ty>::from_be_bytes(buf))
            }

            #[doc = concat!("Stores a big-endian `", stringify!($ty), "` at `offset`.")]
            ///
            /// # Errors
            ///
            /// Returns [`MemoryError::OutOfBounds`] if the access leaves the region.
            pub fn $set(&self, offset: usize, value: $ty) -> Result<(), MemoryError> {
                self.write_bytes(offset, &value.to_be_bytes())
            }
        )*
    };
}

impl MemoryRegion {
    /// Allocates a zero-filled region of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self::from_bytes(vec![0; len])
    }

    /// Wraps an existing buffer; the region spans all of it.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self {
            storage: Rc::new(RefCell::new(bytes)),
            base: 0,
            len,
        }
    }

    /// Length of the window in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the window is zero bytes long.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of this window inside the shared storage.
    #[inline]
    pub const fn base(&self) -> usize {
        self.base
    }

    /// True if both regions view the same storage, whatever their windows.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }

    /// Validates `[offset, offset + len)` and returns its absolute storage range.
    fn window(&self, offset: usize, len: usize) -> Result<std::ops::Range<usize>, MemoryError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Ok(self.base + offset..self.base + end),
            _ => Err(MemoryError::OutOfBounds {
                offset,
                len,
                size: self.len,
            }),
        }
    }

    fn read_into(&self, offset: usize, buf: &mut [u8]) -> Result<(), MemoryError> {
        let range = self.window(offset, buf.len())?;
        buf.copy_from_slice(&self.storage.borrow()[range]);
        Ok(())
    }

    /// Copies `len` bytes starting at `offset` out of the region.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the range leaves the region.
    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        let range = self.window(offset, len)?;
        Ok(self.storage.borrow()[range].to_vec())
    }

    /// Writes `data` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the range leaves the region; nothing
    /// is written in that case.
    pub fn write_bytes(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        let range = self.window(offset, data.len())?;
        self.storage.borrow_mut()[range].copy_from_slice(data);
        Ok(())
    }

    typed_access! {
        get_u8, set_u8, u8;
        get_i8, set_i8, i8;
        get_u16, set_u16, u16;
        get_i16, set_i16, i16;
        get_u32, set_u32, u32;
        get_i32, set_i32, i32;
        get_u64, set_u64, u64;
        get_i64, set_i64, i64;
    }

    /// Replaces the bits selected by `mask` in the word at `offset`.
    ///
    /// `new = (old & !mask) | (value & mask)`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the word leaves the region.
    pub fn set_u32_masked(&self, offset: usize, value: u32, mask: u32) -> Result<(), MemoryError> {
        let old = self.get_u32(offset)?;
        self.set_u32(offset, (old & !mask) | (value & mask))
    }

    /// 64-bit counterpart of [`set_u32_masked`](Self::set_u32_masked).
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the doubleword leaves the region.
    pub fn set_u64_masked(&self, offset: usize, value: u64, mask: u64) -> Result<(), MemoryError> {
        let old = self.get_u64(offset)?;
        self.set_u64(offset, (old & !mask) | (value & mask))
    }

    /// Sets `bits` in the word at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the word leaves the region.
    pub fn set_bits32(&self, offset: usize, bits: u32) -> Result<(), MemoryError> {
        self.set_u32_masked(offset, u32::MAX, bits)
    }

    /// Clears `bits` in the word at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the word leaves the region.
    pub fn clear_bits32(&self, offset: usize, bits: u32) -> Result<(), MemoryError> {
        self.set_u32_masked(offset, 0, bits)
    }

    /// Returns the word at `offset` restricted to `bits`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the word leaves the region.
    pub fn get_bits32(&self, offset: usize, bits: u32) -> Result<u32, MemoryError> {
        Ok(self.get_u32(offset)? & bits)
    }

    /// Zero-fills the whole region.
    pub fn clear(&self) {
        let range = self.base..self.base + self.len;
        self.storage.borrow_mut()[range].fill(0);
    }

    /// Zero-fills `len` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the range leaves the region.
    pub fn clear_range(&self, offset: usize, len: usize) -> Result<(), MemoryError> {
        let range = self.window(offset, len)?;
        self.storage.borrow_mut()[range].fill(0);
        Ok(())
    }

    /// Copies `len` bytes from `src` at `src_offset` into this region at `dst_offset`.
    ///
    /// Both windows are validated before any byte moves. Overlapping views of the
    /// same storage copy as if through an intermediate buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if either window leaves its region.
    pub fn copy_from(
        &self,
        dst_offset: usize,
        src: &Self,
        src_offset: usize,
        len: usize,
    ) -> Result<(), MemoryError> {
        let dst_range = self.window(dst_offset, len)?;
        let src_range = src.window(src_offset, len)?;

        if self.shares_storage(src) {
            self.storage
                .borrow_mut()
                .copy_within(src_range, dst_range.start);
        } else {
            self.storage.borrow_mut()[dst_range].copy_from_slice(&src.storage.borrow()[src_range]);
        }
        Ok(())
    }

    /// Creates a narrower view `[offset, offset + len)` sharing this region's storage.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the window exceeds this region.
    pub fn sub_region(&self, offset: usize, len: usize) -> Result<Self, MemoryError> {
        let range = self.window(offset, len)?;
        Ok(Self {
            storage: Rc::clone(&self.storage),
            base: range.start,
            len,
        })
    }
}

impl Default for MemoryRegion {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRegion")
            .field("base", &self.base)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
