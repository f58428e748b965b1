//! Simulator: owns the CPU and memory side-by-side.
//!
//! The driver loop follows the retirement contract: fetch at `pc`, decode,
//! run the generic per-instruction hook, feed the analytics, then commit the
//! behavior. `syscall` stops the loop cleanly; faults bubble up to the
//! caller.

use crate::common::constants::WORD_ALIGN;
use crate::common::error::Fault;
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::decode::decode;
use crate::soc::memory::{Ram, WordMemory};

/// Top-level simulator: CPU architectural state plus system RAM.
pub struct Simulator {
    /// CPU architectural state, analytics, and counters.
    pub cpu: Cpu,
    /// System RAM.
    pub bus: Ram,
    trace: bool,
    max_instructions: u64,
}

impl Simulator {
    /// Creates a new simulator from the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            bus: Ram::new(config.memory.ram_words),
            trace: config.general.trace_instructions,
            max_instructions: config.general.max_instructions,
        }
    }

    /// Fetches, decodes, and retires a single instruction.
    pub fn step(&mut self) -> Result<(), Fault> {
        let raw = self.bus.read(self.cpu.pc & WORD_ALIGN);
        let inst = decode(raw);
        if self.trace {
            eprintln!("[Trace] pc={:#010x} {}", self.cpu.pc, inst);
        }
        self.cpu.on_instruction();
        self.cpu.retire(&inst);
        self.cpu.execute(&inst, &mut self.bus)
    }

    /// Runs until a clean stop, the retirement limit, or a fault.
    ///
    /// # Returns
    ///
    /// The exit code requested by `syscall` (or 0 when the retirement limit
    /// ended the run) on success; the fault otherwise.
    pub fn run(&mut self) -> Result<u32, Fault> {
        loop {
            self.step()?;
            if let Some(code) = self.cpu.take_exit() {
                return Ok(code);
            }
            if self.max_instructions != 0 && self.cpu.stats.instructions >= self.max_instructions {
                return Ok(0);
            }
        }
    }
}
