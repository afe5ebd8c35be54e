//! Debugger support.
//!
//! Breakpoints patch the live instruction stream rather than keeping a side
//! table the fetch path would have to consult.

/// Sentinel-patching breakpoint table.
pub mod breakpoint;

pub use breakpoint::{BREAKPOINT_OPCODE, BreakpointTable};
