//! Global system constants.
//!
//! This module defines system-wide constants used across the simulator. It
//! includes:
//! 1. **Register ids:** ABI register numbers and the tracked-slot ids used by
//!    the hazard bookkeeping.
//! 2. **Alignment:** The word-alignment mask applied to every memory access.
//! 3. **Pipeline model:** The depths the analytics layer evaluates and the
//!    per-depth branch misprediction penalties.

/// Return-address register (`$ra`).
pub const RA: u32 = 31;

/// Stack-pointer register (`$sp`).
pub const SP: u32 = 29;

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Tracked-slot id of the HI register in the write-timestamp table.
pub const HI_SLOT: usize = 32;

/// Tracked-slot id of the LO register in the write-timestamp table.
pub const LO_SLOT: usize = 33;

/// Number of slots the write-timestamp table tracks (32 GPRs + HI + LO).
pub const TRACKED_REGS: usize = 34;

/// Mask aligning a byte address down to its containing word.
pub const WORD_ALIGN: u32 = !3;

/// Pipeline depths evaluated by the hazard analytics, in table order.
pub const PIPELINE_DEPTHS: [u32; 3] = [5, 7, 13];

/// Stall cycles charged per branch misprediction, indexed like
/// [`PIPELINE_DEPTHS`].
pub const MISPREDICT_PENALTIES: [u64; 3] = [1, 5, 13];
