//! Configuration system for the MIPS32 simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants (RAM size, stack carve-out, start PC).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//!
//! Configuration is supplied as JSON through the CLI (`--config`) or built with
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly
/// overridden by a JSON configuration file.
pub mod defaults {
    /// Total size of simulated RAM in 32-bit words (16 MiB).
    pub const RAM_WORDS: usize = 4 * 1024 * 1024;

    /// Bytes reserved at the top of RAM above the first stack.
    pub const STACK_RESERVE: u32 = 1024;

    /// Per-core stack carve-out in bytes (256 KiB).
    ///
    /// Core `n` gets its stack pointer placed `n` carve-outs below the
    /// reserved area, so multiple simulator instances never share a stack.
    pub const STACK_SIZE: u32 = 256 * 1024;

    /// Address of the first fetched instruction.
    pub const START_PC: u32 = 0;
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Address of the first fetched instruction.
    pub start_pc: u32,
    /// When true, every retired instruction is traced to stderr.
    pub trace_instructions: bool,
    /// Zero-based index of this simulator instance; selects the stack carve-out.
    pub core_index: u32,
    /// Retirement limit; 0 means unlimited.
    pub max_instructions: u64,
}

impl Default for GeneralConfig {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            trace_instructions: false,
            core_index: 0,
            max_instructions: 0,
        }
    }
}

/// Memory subsystem settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// RAM size in 32-bit words.
    pub ram_words: usize,
}

impl Default for MemoryConfig {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            ram_words: defaults::RAM_WORDS,
        }
    }
}

/// Pipeline model settings for the analytics layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Whether operand forwarding is modeled.
    ///
    /// Selects the hazard-distance row used by the analytics: with
    /// forwarding only load-use dependencies stall; without it every
    /// close register dependency does.
    pub forwarding: bool,
}

impl Default for PipelineConfig {
    /// Returns the default value.
    fn default() -> Self {
        Self { forwarding: false }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings.
    pub general: GeneralConfig,
    /// Memory subsystem settings.
    pub memory: MemoryConfig,
    /// Pipeline model settings.
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Returns the first byte address past the end of RAM.
    pub fn ram_end(&self) -> u32 {
        (self.memory.ram_words as u32).wrapping_mul(4)
    }

    /// Returns the initial stack pointer for this instance.
    ///
    /// The top of RAM is reserved, and each core index claims its own
    /// carve-out below it.
    pub fn initial_sp(&self) -> u32 {
        self.ram_end()
            .wrapping_sub(defaults::STACK_RESERVE)
            .wrapping_sub(self.general.core_index.wrapping_mul(defaults::STACK_SIZE))
    }
}
