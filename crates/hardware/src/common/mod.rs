//! Common types and constants shared by the decoder, memory and register file.
//!
//! This module provides:
//! 1. **Constants:** Instruction width, segment masks and FPU control patterns.
//! 2. **Error Handling:** Memory, decode-table and loader error types.

/// Common constants used throughout the core.
pub mod constants;

/// Error types for memory access, table verification and image loading.
pub mod error;

pub use error::{DecodeTableError, LoadError, MemoryError};
