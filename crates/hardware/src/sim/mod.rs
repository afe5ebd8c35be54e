//! Program loading.
//!
//! Provides utilities for reading images from disk and placing them in
//! emulated memory ahead of decoding or execution.

pub mod loader;
