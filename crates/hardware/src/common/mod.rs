//! Common utilities and types used throughout the MIPS32 simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Register ids, tracked-slot ids, alignment masks, and the
//!    pipeline depths evaluated by the analytics layer.
//! 2. **Error Handling:** Fault representations for the few fatal conditions
//!    the architecture defines.

/// Common constants used throughout the simulator.
pub mod constants;

/// Fault types raised by instruction execution.
pub mod error;

pub use constants::{HI_SLOT, LO_SLOT, RA, SP, TRACKED_REGS};
pub use error::Fault;
