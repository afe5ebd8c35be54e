//! Error definitions.
//!
//! This module defines the error types surfaced by the core. It provides:
//! 1. **Memory Errors:** Out-of-bounds accesses on regions and unmapped addresses.
//! 2. **Table Errors:** Structural violations of the decode tables, detected at start-up.
//! 3. **Load Errors:** Failures while reading an image from disk into memory.
//!
//! Unrecognised instruction encodings are not errors: the decoder renders
//! them as text and never fails.

use thiserror::Error;

/// Failure of a memory access.
///
/// Recoverable: callers may treat the address as invalid and carry on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// A byte window `[offset, offset + len)` does not fit inside a region of `size` bytes.
    #[error("out of bounds: {len} byte(s) at offset {offset:#x} exceed region of {size:#x} bytes")]
    OutOfBounds {
        /// First byte of the requested window.
        offset: usize,
        /// Length of the requested window.
        len: usize,
        /// Length of the region that was addressed.
        size: usize,
    },

    /// An address does not fall inside any mapped memory.
    #[error("unmapped address {addr:#010x}")]
    Unmapped {
        /// The faulting address.
        addr: u32,
    },
}

/// Structural violation in a decode table.
///
/// Raised by [`verify_tables`](crate::isa::tables::verify_tables) and fatal:
/// nothing may be decoded with a malformed table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeTableError {
    /// A slot that must hold a specific entry holds something else.
    #[error("decode table {table}: slot {slot} holds {found}, expected {expected}")]
    MisplacedEntry {
        /// Name of the table.
        table: &'static str,
        /// Index of the offending slot.
        slot: usize,
        /// Mnemonic found in the slot.
        found: &'static str,
        /// Mnemonic required in the slot.
        expected: &'static str,
    },

    /// A dispatch marker appears in a table that cannot re-dispatch to it.
    #[error("decode table {table}: slot {slot} holds stray dispatch entry {found}")]
    StrayDispatch {
        /// Name of the table.
        table: &'static str,
        /// Index of the offending slot.
        slot: usize,
        /// Mnemonic of the stray entry.
        found: &'static str,
    },

    /// Two keys of the TLB enumeration collide.
    #[error("TLB function {funct} is assigned twice")]
    DuplicateTlbFunction {
        /// The duplicated function code.
        funct: u32,
    },

    /// A TLB enumeration key maps to no operation.
    #[error("TLB function {funct} names no operation")]
    UnknownTlbFunction {
        /// The unmapped function code.
        funct: u32,
    },
}

/// Failure while loading an image into emulated memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The image does not fit at the requested offset.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}
