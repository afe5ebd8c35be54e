//! # Error Type Tests
//!
//! Display formatting and conversions of the core error types.

use std::error::Error;
use std::io;

use mipsim_core::common::error::{DecodeTableError, LoadError, MemoryError};

#[test]
fn out_of_bounds_message_names_window_and_size() {
    let e = MemoryError::OutOfBounds {
        offset: 0x10,
        len: 4,
        size: 0x12,
    };
    assert_eq!(
        e.to_string(),
        "out of bounds: 4 byte(s) at offset 0x10 exceed region of 0x12 bytes"
    );
}

#[test]
fn unmapped_message_is_zero_padded() {
    let e = MemoryError::Unmapped { addr: 0x40 };
    assert_eq!(e.to_string(), "unmapped address 0x00000040");
}

#[test]
fn table_errors_name_table_and_slot() {
    let e = DecodeTableError::MisplacedEntry {
        table: "cop1",
        slot: 16,
        found: "unknown",
        expected: "cop1.fmt",
    };
    assert_eq!(
        e.to_string(),
        "decode table cop1: slot 16 holds unknown, expected cop1.fmt"
    );

    let e = DecodeTableError::DuplicateTlbFunction { funct: 2 };
    assert!(e.to_string().contains("TLB function 2"));

    let e = DecodeTableError::UnknownTlbFunction { funct: 63 };
    assert_eq!(e.to_string(), "TLB function 63 names no operation");
}

#[test]
fn load_error_wraps_memory_error_transparently() {
    let inner = MemoryError::Unmapped { addr: 0 };
    let e: LoadError = inner.clone().into();
    assert_eq!(e.to_string(), inner.to_string());
}

#[test]
fn load_error_keeps_io_source() {
    let e = LoadError::Io {
        path: "missing.bin".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };
    assert!(e.to_string().starts_with("could not read 'missing.bin'"));
    assert!(e.source().is_some());
}
