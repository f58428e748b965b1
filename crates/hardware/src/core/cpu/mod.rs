//! CPU state, lifecycle hooks, and behavior dispatch.
//!
//! The driver calls the hooks in a fixed order per retired instruction:
//! 1. [`Cpu::on_instruction`] bumps the retirement count and advances the PC
//!    pair (`pc := npc; npc := pc + 4`). A taken branch or jump overwrites
//!    `npc` during execution, so the instruction after it (the delay slot)
//!    still runs before control transfers.
//! 2. [`Cpu::retire`] feeds the record through the pipeline analytics.
//! 3. [`Cpu::execute`] commits the architectural effects.

/// Branch and jump behaviors.
pub mod control;
/// ALU, shift, and HI/LO behaviors.
pub mod execution;
/// Load and store behaviors.
pub mod memory;

use crate::common::constants::SP;
use crate::common::error::Fault;
use crate::config::Config;
use crate::core::arch::{Accumulator, Gpr};
use crate::core::pipeline::PipelineMonitor;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::*;
use crate::soc::memory::WordMemory;
use crate::stats::SimStats;

/// MIPS32 CPU architectural state plus the retirement analytics.
pub struct Cpu {
    /// General-purpose register file.
    pub regs: Gpr,
    /// HI/LO accumulator pair.
    pub acc: Accumulator,
    /// Address of the next fetch.
    pub pc: u32,
    /// Address of the fetch after that; branches and jumps redirect it.
    pub npc: u32,
    /// Next-PC value recorded when the current instruction retired; used in
    /// fault diagnostics.
    pub pc_addr: u32,
    /// Retirement-time pipeline analytics.
    pub monitor: PipelineMonitor,
    /// Analytics counters, reported at end of simulation.
    pub stats: SimStats,
    exit_code: Option<u32>,
}

impl Cpu {
    /// Creates a CPU with the begin-of-simulation state applied.
    pub fn new(config: &Config) -> Self {
        let mut cpu = Self {
            regs: Gpr::new(),
            acc: Accumulator::new(),
            pc: 0,
            npc: 0,
            pc_addr: 0,
            monitor: PipelineMonitor::new(config.pipeline.forwarding),
            stats: SimStats::new(),
            exit_code: None,
        };
        cpu.begin(config);
        cpu
    }

    /// Begin-of-simulation hook.
    ///
    /// Zeroes all architectural registers, points the stack register at this
    /// instance's carve-out below the top of RAM, and primes the PC pair.
    pub fn begin(&mut self, config: &Config) {
        self.regs = Gpr::new();
        self.acc = Accumulator::new();
        self.pc = config.general.start_pc;
        self.npc = self.pc.wrapping_add(4);
        self.pc_addr = self.npc;
        self.regs.write(SP, config.initial_sp());
        self.exit_code = None;
    }

    /// Generic per-instruction hook: counts the retirement and advances the
    /// PC pair.
    pub fn on_instruction(&mut self) {
        self.stats.instructions += 1;
        self.pc_addr = self.npc;
        self.pc = self.npc;
        self.npc = self.pc.wrapping_add(4);
    }

    /// Feeds a record through the retirement analytics.
    pub fn retire(&mut self, inst: &Instruction) {
        self.monitor.retire(inst, &self.regs, &mut self.stats);
    }

    /// Commits the architectural effects of one record.
    ///
    /// # Arguments
    ///
    /// * `inst` - The record to execute.
    /// * `bus` - Word-addressable memory for loads and stores.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success; a [`Fault`] aborts the simulation.
    pub fn execute(&mut self, inst: &Instruction, bus: &mut dyn WordMemory) -> Result<(), Fault> {
        match *inst {
            Instruction::R {
                rs,
                rt,
                rd,
                shamt,
                func,
                ..
            } => self.exec_special(rs, rt, rd, shamt, func),
            Instruction::I { op, rs, rt, imm } => match op {
                OP_REGIMM => self.exec_regimm(rs, rt, imm),
                OP_BEQ | OP_BNE | OP_BLEZ | OP_BGTZ => {
                    self.exec_branch(op, rs, rt, imm);
                    Ok(())
                }
                OP_ADDI | OP_ADDIU | OP_SLTI | OP_SLTIU | OP_ANDI | OP_ORI | OP_XORI | OP_LUI => {
                    self.exec_alu_imm(op, rs, rt, imm)
                }
                OP_LB | OP_LH | OP_LWL | OP_LW | OP_LBU | OP_LHU | OP_LWR => {
                    self.exec_load(bus, op, rs, rt, imm);
                    Ok(())
                }
                OP_SB | OP_SH | OP_SWL | OP_SW | OP_SWR => {
                    self.exec_store(bus, op, rs, rt, imm);
                    Ok(())
                }
                _ => Err(Fault::ReservedInstruction {
                    op,
                    func: 0,
                    pc: self.pc_addr,
                }),
            },
            Instruction::J { op, addr } => {
                self.exec_jump(op, addr);
                Ok(())
            }
        }
    }

    /// Requests a clean stop (the `syscall` behavior).
    pub(crate) fn stop(&mut self) {
        self.exit_code = Some(0);
    }

    /// Retrieves the exit code if the simulation has finished.
    pub fn take_exit(&mut self) -> Option<u32> {
        self.exit_code.take()
    }

    /// Dumps the architectural state to stderr for post-mortem debugging.
    pub fn dump_state(&self) {
        eprintln!(
            "pc={:#010x} npc={:#010x} hi={:#010x} lo={:#010x}",
            self.pc,
            self.npc,
            self.acc.hi(),
            self.acc.lo()
        );
        self.regs.dump();
    }
}
