//! Binary Loader.
//!
//! This module provides utilities for getting program images into memory. It performs:
//! 1. **Binary loading:** Reads a raw big-endian image from disk into a byte buffer.
//! 2. **Placement:** Copies the image into emulated memory at an offset past its base.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::LoadError;
use crate::soc::memory::Memory;

/// Loads a binary file from disk into a byte vector.
///
/// # Errors
///
/// Returns [`LoadError::Io`] with the offending path if the file cannot be read.
pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads the image at `path` and copies it into `memory` at `offset`.
///
/// Returns the number of bytes loaded.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Memory`] if the image does not fit.
pub fn load_into<P: AsRef<Path>>(
    memory: &Memory,
    path: P,
    offset: usize,
) -> Result<usize, LoadError> {
    let data = load_binary(&path)?;
    memory.load(offset, &data)?;
    debug!(
        path = %path.as_ref().display(),
        offset,
        len = data.len(),
        "binary loaded"
    );
    Ok(data.len())
}
