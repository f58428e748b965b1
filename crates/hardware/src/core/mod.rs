//! CPU core of the MIPS32 simulator.
//!
//! This module groups the architectural state, the per-opcode execution
//! semantics, the retirement analytics, and the branch-prediction units:
//! 1. **Arch:** General-purpose registers and the HI/LO accumulator.
//! 2. **Cpu:** Lifecycle hooks and instruction behaviors.
//! 3. **Pipeline:** The retirement monitor (hazards, window, dual issue).
//! 4. **Units:** The branch-direction predictors.

/// Architectural register state (GPRs, HI/LO).
pub mod arch;
/// CPU state, lifecycle hooks, and opcode behaviors.
pub mod cpu;
/// Retirement-time pipeline analytics.
pub mod pipeline;
/// Prediction units.
pub mod units;

pub use cpu::Cpu;
