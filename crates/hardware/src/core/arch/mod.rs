//! Architectural register state.
//!
//! This module holds the two register resources of the MIPS32 integer core:
//! 1. **GPRs:** The 32 general-purpose registers, with `r0` wired to zero.
//! 2. **Accumulator:** The HI/LO pair written by multiply/divide.

/// HI/LO accumulator pair.
pub mod acc;
/// General-purpose register file.
pub mod gpr;

pub use acc::Accumulator;
pub use gpr::Gpr;
