//! Memory tests.


/// Typed, masked and bulk region operations.
pub mod region;
