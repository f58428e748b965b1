//! Simulation driver.
//!
//! This module contains the pieces outside the core proper:
//! 1. **Loader:** Reads flat binary images from disk.
//! 2. **Simulator:** Owns the CPU and memory and runs the retirement loop.

/// Binary loader.
pub mod loader;
/// Top-level driver loop.
pub mod simulator;

pub use simulator::Simulator;
