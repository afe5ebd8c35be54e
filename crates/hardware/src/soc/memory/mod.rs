//! Emulated System Memory.
//!
//! This module implements the main memory seen by the CPU. It provides:
//! 1. **Region:** Big-endian, bounds-checked backing storage (`MemoryRegion`).
//! 2. **Memory:** A region mapped at a physical base address, reachable through
//!    the cached (KSEG0) and uncached (KSEG1) segments.

/// Big-endian byte storage with typed and masked access.
pub mod region;

use tracing::trace;

use self::region::MemoryRegion;
use crate::common::constants::{KSEG0_BASE, KSEG1_END, PHYS_ADDR_MASK};
use crate::common::error::MemoryError;
use crate::config::Config;
use crate::soc::traits::MemoryMap;

/// System Memory structure.
#[derive(Clone, Debug)]
pub struct Memory {
    /// Backing storage.
    region: MemoryRegion,
    /// The physical address where the region starts.
    base_addr: u32,
    /// Fold KSEG0/KSEG1 addresses onto physical ones before lookup.
    mirror_kseg: bool,
}

impl Memory {
    /// Maps `region` at physical address `base_addr`, with segment mirroring enabled.
    pub const fn new(base_addr: u32, region: MemoryRegion) -> Self {
        Self {
            region,
            base_addr,
            mirror_kseg: true,
        }
    }

    /// Allocates zeroed RAM as described by the memory section of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            region: MemoryRegion::new(config.memory.ram_size),
            base_addr: config.memory.ram_base,
            mirror_kseg: config.memory.mirror_kseg,
        }
    }

    /// Enables or disables KSEG0/KSEG1 mirroring.
    #[must_use]
    pub const fn with_kseg_mirroring(mut self, enabled: bool) -> Self {
        self.mirror_kseg = enabled;
        self
    }

    /// The backing region.
    pub const fn region(&self) -> &MemoryRegion {
        &self.region
    }

    /// Physical base address.
    pub const fn base_addr(&self) -> u32 {
        self.base_addr
    }

    /// Size of the mapped region in bytes.
    pub const fn size(&self) -> usize {
        self.region.len()
    }

    /// Translates a CPU address into an offset inside the region.
    ///
    /// The offset is only checked against the start of the region; the typed
    /// accessors check the end.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::Unmapped`] if the address lies below the base.
    pub fn offset_of(&self, addr: u32) -> Result<usize, MemoryError> {
        let phys = if self.mirror_kseg && (KSEG0_BASE..KSEG1_END).contains(&addr) {
            addr & PHYS_ADDR_MASK
        } else {
            addr
        };
        phys.checked_sub(self.base_addr)
            .map(|o| o as usize)
            .ok_or(MemoryError::Unmapped { addr })
    }

    /// Copies an image into memory at `offset` bytes past the base.
    ///
    /// Used for loading ROMs, test programs or other binaries during setup.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the image does not fit.
    pub fn load(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        self.region.write_bytes(offset, data)?;
        trace!(offset, len = data.len(), "image loaded");
        Ok(())
    }
}

impl MemoryMap for Memory {
    fn read_u32(&self, addr: u32) -> Result<u32, MemoryError> {
        self.region.get_u32(self.offset_of(addr)?)
    }

    fn write_u32(&mut self, addr: u32, value: u32) -> Result<(), MemoryError> {
        self.region.set_u32(self.offset_of(addr)?, value)
    }
}
