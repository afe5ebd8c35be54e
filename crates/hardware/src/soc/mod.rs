//! System-on-Chip (SoC) Components.
//!
//! This module organizes the memory side of the emulated system: the
//! big-endian storage primitives, the address-mapped main memory built on them
//! and the capability trait through which the rest of the crate reads and
//! patches instruction words.

/// Main memory and its backing regions.
pub mod memory;

/// Capability trait definitions for address-based access.
pub mod traits;

pub use memory::Memory;
pub use memory::region::MemoryRegion;
pub use traits::MemoryMap;
