//! Shared test infrastructure for the simulator test suite.


use mips_core::common::error::Fault;
use mips_core::config::Config;
use mips_core::core::Cpu;
use mips_core::isa::instruction::Instruction;
use mips_core::sim::Simulator;
use mips_core::soc::memory::Ram;

// ══════════════════════════════════════════════════════════
// Raw-word encoders
// ══════════════════════════════════════════════════════════

/// Encodes an R-form instruction word.
pub fn encode_r(rs: u32, rt: u32, rd: u32, shamt: u32, func: u32) -> u32 {
    (rs << 21) | (rt << 16) | (rd << 11) | (shamt << 6) | func
}

/// Encodes an I-form instruction word.
pub fn encode_i(op: u32, rs: u32, rt: u32, imm: i16) -> u32 {
    (op << 26) | (rs << 21) | (rt << 16) | (imm as u16 as u32)
}

/// Encodes a J-form instruction word.
pub fn encode_j(op: u32, addr: u32) -> u32 {
    (op << 26) | (addr & 0x03FF_FFFF)
}

/// The canonical NOP word.
pub const NOP_WORD: u32 = 0;

/// The `syscall` word (clean stop).
pub const SYSCALL_WORD: u32 = 0x0000_000C;

// ══════════════════════════════════════════════════════════
// Record builders
// ══════════════════════════════════════════════════════════

/// Builds a three-register R-form record.
pub fn r_inst(func: u32, rs: u32, rt: u32, rd: u32) -> Instruction {
    Instruction::R {
        op: 0,
        rs,
        rt,
        rd,
        shamt: 0,
        func,
    }
}

/// Builds an immediate-shift R-form record.
pub fn shift_inst(func: u32, rt: u32, rd: u32, shamt: u32) -> Instruction {
    Instruction::R {
        op: 0,
        rs: 0,
        rt,
        rd,
        shamt,
        func,
    }
}

/// Builds an I-form record.
pub fn i_inst(op: u32, rs: u32, rt: u32, imm: i32) -> Instruction {
    Instruction::I { op, rs, rt, imm }
}

/// Builds a J-form record.
pub fn j_inst(op: u32, addr: u32) -> Instruction {
    Instruction::J { op, addr }
}

/// Builds the canonical NOP record.
pub fn nop() -> Instruction {
    Instruction::R {
        op: 0,
        rs: 0,
        rt: 0,
        rd: 0,
        shamt: 0,
        func: 0,
    }
}

// ══════════════════════════════════════════════════════════
// Benches
// ══════════════════════════════════════════════════════════

/// Drives records straight through the retirement analytics, without memory
/// or execution. Register values (for branch outcomes) are set directly on
/// `cpu.regs`.
pub struct RetireBench {
    /// CPU under test.
    pub cpu: Cpu,
}

impl RetireBench {
    /// Creates a bench with the given forwarding setting.
    pub fn new(forwarding: bool) -> Self {
        let mut config = Config::default();
        config.pipeline.forwarding = forwarding;
        Self {
            cpu: Cpu::new(&config),
        }
    }

    /// Retires one record (counter bump + analytics, no execution).
    pub fn feed(&mut self, inst: &Instruction) {
        self.cpu.on_instruction();
        self.cpu.retire(inst);
    }

    /// Retires a sequence of records.
    pub fn feed_all(&mut self, insts: &[Instruction]) {
        for inst in insts {
            self.feed(inst);
        }
    }
}

/// Runs records through the full per-retirement flow (hooks, analytics, and
/// execution against a small RAM).
pub struct ExecBench {
    /// CPU under test.
    pub cpu: Cpu,
    /// Backing RAM (1024 words).
    pub ram: Ram,
}

impl ExecBench {
    /// Creates a bench with a small RAM and default configuration.
    pub fn new() -> Self {
        let mut config = Config::default();
        config.memory.ram_words = 1024;
        Self {
            cpu: Cpu::new(&config),
            ram: Ram::new(1024),
        }
    }

    /// Executes one record through the full driver sequence.
    pub fn exec(&mut self, inst: &Instruction) -> Result<(), Fault> {
        self.cpu.on_instruction();
        self.cpu.retire(inst);
        self.cpu.execute(inst, &mut self.ram)
    }

    /// Executes a record that must succeed.
    pub fn exec_ok(&mut self, inst: &Instruction) {
        self.exec(inst).expect("instruction faulted");
    }
}

impl Default for ExecBench {
    fn default() -> Self {
        Self::new()
    }
}

// ══════════════════════════════════════════════════════════
// Whole-program harness
// ══════════════════════════════════════════════════════════

/// Assembles words at the start PC and runs the program to a clean stop.
///
/// The program must end in `syscall` (or rely on a retirement limit set in
/// `config`).
pub fn run_words(words: &[u32], config: &Config) -> Simulator {
    let mut sim = Simulator::new(config);
    sim.bus.load_words(words, config.general.start_pc);
    sim.run().expect("program faulted");
    sim
}

/// Runs a program under the default configuration.
pub fn run_program(words: &[u32]) -> Simulator {
    run_words(words, &Config::default())
}
