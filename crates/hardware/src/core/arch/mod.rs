//! VR4300 architectural register state.
//!
//! Only the coprocessor-1 register file lives here; integer registers and
//! COP0 state belong to the interpreter that drives this crate.

/// Floating-Point (COP1) register file implementation.
pub mod fpr;
