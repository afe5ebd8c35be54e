//! Architectural register tests.

/// COP1 register file aliasing and reset behaviour.
pub mod fpr;
