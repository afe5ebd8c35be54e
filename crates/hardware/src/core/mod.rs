//! Core processor state.
//!
//! This module holds the architectural state shared between the decoder and
//! an external execution loop.

/// Architecture-specific components (register files).
pub mod arch;

pub use self::arch::fpr::Fpr;
