//! Instruction-patching breakpoints.
//!
//! A breakpoint replaces the live instruction word with [`BREAKPOINT_OPCODE`] and
//! shadows the original so it can be restored. Each address is either *clean*
//! (no entry) or *trapped* (entry present, sentinel in memory).
//!
//! Decoders and executors must fetch through [`BreakpointTable::instruction_at`]
//! to see the real program regardless of patch state.

use std::collections::HashMap;

use tracing::debug;

use crate::common::error::MemoryError;
use crate::soc::traits::MemoryMap;

/// Sentinel written over a trapped instruction: primary opcode 28, all other bits zero.
///
/// Opcode 28 is unused by the VR4300 grammar; this is an emulator convention,
/// not a hardware feature.
pub const BREAKPOINT_OPCODE: u32 = 28 << 26;

/// Formats an address or word as `0x????????` in log fields.
struct Hex(u32);

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Address to shadowed-opcode map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreakpointTable {
    shadowed: HashMap<u32, u32>,
}

impl BreakpointTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the breakpoint state at `addr` and returns whether it is now trapped.
    ///
    /// A trapped address (sentinel in memory and an entry present) is restored to
    /// its shadowed opcode. Anything else is trapped: the live word is shadowed and
    /// replaced by the sentinel.
    ///
    /// # Errors
    ///
    /// Propagates the memory error of the read or write. The table is left
    /// unchanged when the access fails.
    pub fn toggle<M: MemoryMap + ?Sized>(
        &mut self,
        mem: &mut M,
        addr: u32,
    ) -> Result<bool, MemoryError> {
        let live = mem.read_u32(addr)?;

        if let Some(original) = self.trapped(live, addr) {
            mem.write_u32(addr, original)?;
            let _ = self.shadowed.remove(&addr);
            debug!(addr = %Hex(addr), original = %Hex(original), "breakpoint cleared");
            return Ok(false);
        }

        self.patch(mem, addr, live)?;
        Ok(true)
    }

    /// Traps `addr` unless it is already trapped; returns whether it was newly set.
    ///
    /// Unlike [`toggle`](Self::toggle), repeating the call never clears the breakpoint.
    ///
    /// # Errors
    ///
    /// Propagates the memory error of the read or write.
    pub fn set<M: MemoryMap + ?Sized>(
        &mut self,
        mem: &mut M,
        addr: u32,
    ) -> Result<bool, MemoryError> {
        let live = mem.read_u32(addr)?;
        if self.trapped(live, addr).is_some() {
            return Ok(false);
        }
        self.patch(mem, addr, live)?;
        Ok(true)
    }

    /// Writes the sentinel over `live` and shadows it.
    fn patch<M: MemoryMap + ?Sized>(
        &mut self,
        mem: &mut M,
        addr: u32,
        live: u32,
    ) -> Result<(), MemoryError> {
        mem.write_u32(addr, BREAKPOINT_OPCODE)?;
        let _ = self.shadowed.insert(addr, live);
        debug!(addr = %Hex(addr), original = %Hex(live), "breakpoint set");
        Ok(())
    }

    /// True if the live word at `addr` is the sentinel.
    ///
    /// # Errors
    ///
    /// Propagates the memory error of the read.
    pub fn is_breakpoint<M: MemoryMap + ?Sized>(
        &self,
        mem: &M,
        addr: u32,
    ) -> Result<bool, MemoryError> {
        Ok(mem.read_u32(addr)? == BREAKPOINT_OPCODE)
    }

    /// The real instruction at `addr`: the shadowed opcode if trapped, else the live word.
    ///
    /// # Errors
    ///
    /// Propagates the memory error of the read.
    pub fn instruction_at<M: MemoryMap + ?Sized>(
        &self,
        mem: &M,
        addr: u32,
    ) -> Result<u32, MemoryError> {
        let live = mem.read_u32(addr)?;
        Ok(self.trapped(live, addr).unwrap_or(live))
    }

    /// Shadowed opcode, if `live` is the sentinel and `addr` has an entry.
    fn trapped(&self, live: u32, addr: u32) -> Option<u32> {
        if live == BREAKPOINT_OPCODE {
            self.shadowed.get(&addr).copied()
        } else {
            None
        }
    }

    /// True if the table holds an entry for `addr`.
    pub fn contains(&self, addr: u32) -> bool {
        self.shadowed.contains_key(&addr)
    }

    /// Trapped addresses in increasing order.
    pub fn addresses(&self) -> Vec<u32> {
        let mut addrs: Vec<u32> = self.shadowed.keys().copied().collect();
        addrs.sort_unstable();
        addrs
    }

    /// Number of trapped addresses.
    pub fn len(&self) -> usize {
        self.shadowed.len()
    }

    /// True if no address is trapped.
    pub fn is_empty(&self) -> bool {
        self.shadowed.is_empty()
    }

    /// Restores every shadowed opcode and empties the table.
    ///
    /// # Errors
    ///
    /// Stops at the first failed write; entries not yet restored stay in the table.
    pub fn clear_all<M: MemoryMap + ?Sized>(&mut self, mem: &mut M) -> Result<(), MemoryError> {
        for addr in self.addresses() {
            if let Some(&original) = self.shadowed.get(&addr) {
                mem.write_u32(addr, original)?;
                let _ = self.shadowed.remove(&addr);
            }
        }
        debug!("breakpoints cleared");
        Ok(())
    }
}
