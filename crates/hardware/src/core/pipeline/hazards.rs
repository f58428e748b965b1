//! Hazard detection over the retirement stream.
//!
//! This module charges data and control hazards by distance arithmetic: a
//! source register incurs a hazard at a given pipeline depth when its last
//! producer retired within that depth's hazard distance. It provides:
//! 1. **Distance tables:** Per-depth thresholds with and without forwarding.
//! 2. **Read-hazard charging:** Per-class source-register sets, the
//!    load-use gate under forwarding, and the data/control split.
//! 3. **Write stamping:** Which slot of the timestamp table each producing
//!    instruction updates.

use std::collections::VecDeque;

use super::Retired;
use crate::common::constants::{HI_SLOT, LO_SLOT, PIPELINE_DEPTHS, TRACKED_REGS};
use crate::isa::groups;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::*;
use crate::stats::SimStats;

/// Hazard distances with forwarding, indexed like
/// [`PIPELINE_DEPTHS`].
///
/// With forwarding only a load's shadow stalls consumers; the deeper the
/// pipeline, the later the loaded value becomes available.
pub const WITH_FORWARDING: [u64; 3] = [1, 2, 3];

/// Hazard distances without forwarding, indexed like
/// [`PIPELINE_DEPTHS`].
pub const WITHOUT_FORWARDING: [u64; 3] = [2, 1, 1];

/// Returns the hazard-distance threshold for a depth index.
pub fn distance_threshold(forwarding: bool, depth: usize) -> u64 {
    if forwarding {
        WITH_FORWARDING[depth]
    } else {
        WITHOUT_FORWARDING[depth]
    }
}

/// Which counter a register access charges.
#[derive(Clone, Copy, PartialEq, Eq)]
enum HazardKind {
    /// The dependency is consumed by the execute stage.
    Data,
    /// The dependency feeds the fetch stage (branch operands, jump targets).
    Control,
}

/// Charges read hazards for one record at every modeled pipeline depth.
///
/// With forwarding enabled, data hazards are charged only inside a load-use
/// window: depth `d` looks back exactly its hazard distance in the raw
/// retirement stream (NOPs included) and charges only when that slot holds a
/// load. Control hazards are never gated; branch outcomes cannot be
/// forwarded into fetch.
pub(crate) fn charge_read_hazards(
    inst: &Instruction,
    window: &VecDeque<Retired>,
    last_write: &[u64; TRACKED_REGS],
    forwarding: bool,
    count: u64,
    stats: &mut SimStats,
) {
    let (regs, n, kind) = hazard_sources(inst);
    if n == 0 {
        return;
    }

    for depth in 0..PIPELINE_DEPTHS.len() {
        let threshold = distance_threshold(forwarding, depth);

        if kind == HazardKind::Data && forwarding && !load_at_distance(window, count, threshold) {
            continue;
        }

        for &reg in &regs[..n] {
            let distance = count.saturating_sub(last_write[reg]);
            if distance <= threshold {
                match kind {
                    HazardKind::Data => stats.data_hazards[depth] += 1,
                    HazardKind::Control => stats.control_hazards[depth] += 1,
                }
            }
        }
    }
}

/// Returns true when the instruction retired exactly `distance` ordinals ago
/// is a load.
///
/// The window stores raw ordinals, so intervening NOPs (which never enter
/// the window) still push a load out of the probed slot.
fn load_at_distance(window: &VecDeque<Retired>, count: u64, distance: u64) -> bool {
    window
        .iter()
        .any(|r| count.saturating_sub(r.ordinal) == distance && groups::is_load(r.inst.op()))
}

/// Stamps the write-timestamp slot produced by one record.
///
/// J-form records and the don't-write set stamp nothing. Multiplies and
/// divides produce both halves of the accumulator; the moves-to produce one;
/// other R forms produce `rd` and other I forms produce `rt`. `r0` is never
/// stamped.
pub(crate) fn stamp_write(inst: &Instruction, last_write: &mut [u64; TRACKED_REGS], count: u64) {
    let (op, func) = inst.key();
    if groups::commits_no_write(op, func) {
        return;
    }

    match *inst {
        Instruction::R { rd, func, .. } => match func {
            FUNC_MULT | FUNC_MULTU | FUNC_DIV | FUNC_DIVU => {
                last_write[HI_SLOT] = count;
                last_write[LO_SLOT] = count;
            }
            FUNC_MTHI => last_write[HI_SLOT] = count,
            FUNC_MTLO => last_write[LO_SLOT] = count,
            _ => {
                if rd != 0 {
                    last_write[rd as usize] = count;
                }
            }
        },
        Instruction::I { rt, .. } => {
            if rt != 0 {
                last_write[rt as usize] = count;
            }
        }
        Instruction::J { .. } => {}
    }
}

/// Returns the source-register slots a record reads for hazard purposes,
/// plus the hazard kind those reads charge.
///
/// Registers are deduplicated and `r0` is dropped, so `add r2, r1, r1`
/// charges at most one hazard per depth. `lui`, `syscall`, `break`, and the
/// J form read nothing the pipeline can stall on.
fn hazard_sources(inst: &Instruction) -> ([usize; 2], usize, HazardKind) {
    let mut regs = [0usize; 2];
    let mut n = 0;
    let push = |regs: &mut [usize; 2], n: &mut usize, reg: usize| {
        if reg != 0 && !regs[..*n].contains(&reg) {
            regs[*n] = reg;
            *n += 1;
        }
    };

    let kind = match *inst {
        Instruction::R { rs, rt, func, .. } => match func {
            FUNC_SYSCALL | FUNC_BREAK => HazardKind::Data,
            FUNC_JR | FUNC_JALR => {
                push(&mut regs, &mut n, rs as usize);
                HazardKind::Control
            }
            FUNC_MFHI => {
                push(&mut regs, &mut n, HI_SLOT);
                HazardKind::Data
            }
            FUNC_MFLO => {
                push(&mut regs, &mut n, LO_SLOT);
                HazardKind::Data
            }
            FUNC_MTHI | FUNC_MTLO => {
                push(&mut regs, &mut n, rs as usize);
                HazardKind::Data
            }
            FUNC_SLL | FUNC_SRL | FUNC_SRA => {
                push(&mut regs, &mut n, rt as usize);
                HazardKind::Data
            }
            FUNC_SLLV | FUNC_SRLV | FUNC_SRAV | FUNC_MULT | FUNC_MULTU | FUNC_DIV | FUNC_DIVU
            | FUNC_ADD | FUNC_ADDU | FUNC_SUB | FUNC_SUBU | FUNC_AND | FUNC_OR | FUNC_XOR
            | FUNC_NOR | FUNC_SLT | FUNC_SLTU => {
                push(&mut regs, &mut n, rs as usize);
                push(&mut regs, &mut n, rt as usize);
                HazardKind::Data
            }
            _ => HazardKind::Data,
        },
        Instruction::I { op, rs, rt, .. } => match op {
            OP_LUI => HazardKind::Data,
            OP_BEQ | OP_BNE => {
                push(&mut regs, &mut n, rs as usize);
                push(&mut regs, &mut n, rt as usize);
                HazardKind::Control
            }
            OP_REGIMM | OP_BLEZ | OP_BGTZ => {
                push(&mut regs, &mut n, rs as usize);
                HazardKind::Control
            }
            OP_SB | OP_SH | OP_SWL | OP_SW | OP_SWR => {
                push(&mut regs, &mut n, rs as usize);
                push(&mut regs, &mut n, rt as usize);
                HazardKind::Data
            }
            OP_LB | OP_LH | OP_LW | OP_LBU | OP_LHU | OP_LWL | OP_LWR => {
                push(&mut regs, &mut n, rs as usize);
                HazardKind::Data
            }
            OP_ADDI | OP_ADDIU | OP_SLTI | OP_SLTIU | OP_ANDI | OP_ORI | OP_XORI => {
                push(&mut regs, &mut n, rs as usize);
                HazardKind::Data
            }
            _ => HazardKind::Data,
        },
        Instruction::J { .. } => HazardKind::Data,
    };

    (regs, n, kind)
}
