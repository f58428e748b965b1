//! MIPS32 functional simulator library.
//!
//! This crate implements a functional MIPS32 simulator whose focus is a
//! retirement-time microarchitectural analytics layer. It provides:
//! 1. **Core:** Architectural state (GPRs, HI/LO, PC/NPC) and per-opcode execution.
//! 2. **ISA:** Decoding of R/I/J instruction words and opcode classification.
//! 3. **Pipeline analytics:** Data/control hazard counting for 5/7/13-stage pipelines,
//!    three branch predictors, and a two-wide dual-issue pair counter.
//! 4. **Simulation:** Loader, configuration, driver loop, and statistics reporting.

/// Common types and constants (register ids, alignment, faults).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (architectural state, execution, pipeline analytics, predictors).
pub mod core;
/// Instruction set (opcodes, instruction record, decode, classification).
pub mod isa;
/// Binary loader and driver loop.
pub mod sim;
/// Memory interface and word-addressable RAM.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds architectural state and the pipeline monitor.
pub use crate::core::Cpu;
/// Top-level driver; owns the CPU and memory and runs the retirement loop.
pub use crate::sim::Simulator;
