//! Two-wide issue pair checking.
//!
//! After every retirement the checker asks whether the two most recent
//! windowed instructions could have issued in the same cycle: they must come
//! from different function-unit groups (two plain ALU ops being the
//! exception), share no HI/LO structural resource, and have disjoint GPR
//! dependence sets (no RAW, WAR, or WAW).
//!
//! A found pair arms a one-shot latch: the next retirement only disarms it,
//! so every instruction participates in at most one pair.

use std::collections::VecDeque;

use super::Retired;
use crate::isa::groups::{self, mask, ExecGroup};
use crate::isa::instruction::Instruction;
use crate::stats::SimStats;

/// The dual-issue checker state: a single issue latch.
pub struct DualIssue {
    issued: bool,
}

impl DualIssue {
    /// Creates a disarmed checker.
    pub fn new() -> Self {
        Self { issued: false }
    }

    /// Considers the newest window entry for pairing with its predecessor.
    ///
    /// Called once per non-NOP retirement, after the record entered the
    /// window. Bumps `stats.dual_issue_pairs` when a pair is found.
    pub fn observe(&mut self, window: &VecDeque<Retired>, stats: &mut SimStats) {
        if self.issued {
            self.issued = false;
            return;
        }
        if window.len() < 2 {
            return;
        }
        if can_pair(&window[1].inst, &window[0].inst) {
            self.issued = true;
            stats.dual_issue_pairs += 1;
        }
    }
}

impl Default for DualIssue {
    /// Returns the default value.
    fn default() -> Self {
        Self::new()
    }
}

/// Decides whether two consecutive instructions can issue together.
fn can_pair(prev: &Instruction, curr: &Instruction) -> bool {
    let (prev_group, curr_group) = match (groups::classify(prev), groups::classify(curr)) {
        (Some(p), Some(c)) => (p, c),
        _ => return false,
    };

    // One function unit per group; only the ALU is replicated.
    if prev_group == curr_group
        && !matches!(prev_group, ExecGroup::ArithLog | ExecGroup::ArithLogI)
    {
        return false;
    }

    let (prev_reads, prev_writes) = (prev_group.reads(), write_mask(prev, prev_group));
    let (curr_reads, curr_writes) = (curr_group.reads(), write_mask(curr, curr_group));

    // HI/LO is a single structural resource; any producer/consumer overlap
    // between the two serializes them.
    if ((prev_reads & curr_writes) | (prev_writes & curr_reads) | (prev_writes & curr_writes))
        & mask::ACC
        != 0
    {
        return false;
    }

    let (pr, pr_n) = gpr_set(prev, prev_reads);
    let (pw, pw_n) = gpr_set(prev, prev_writes);
    let (cr, cr_n) = gpr_set(curr, curr_reads);
    let (cw, cw_n) = gpr_set(curr, curr_writes);

    if overlaps(&pr[..pr_n], &cw[..cw_n])
        || overlaps(&cr[..cr_n], &pw[..pw_n])
        || overlaps(&pw[..pw_n], &cw[..cw_n])
    {
        return false;
    }

    true
}

/// Returns the write mask a record actually commits.
///
/// The memory group's `RT` write belongs to loads only; a store reads `rt`
/// for its data and writes no register at all.
fn write_mask(inst: &Instruction, group: ExecGroup) -> u8 {
    if group == ExecGroup::LoadStore && groups::is_store(inst.op()) {
        mask::NONE
    } else {
        group.writes()
    }
}

/// Materializes the GPR ids a capability mask selects on a record.
///
/// `r0` is dropped: it is not a real dependence, whether read or written.
fn gpr_set(inst: &Instruction, capability: u8) -> ([u32; 3], usize) {
    let mut regs = [0u32; 3];
    let mut n = 0;
    let push = |regs: &mut [u32; 3], n: &mut usize, reg: u32| {
        if reg != 0 {
            regs[*n] = reg;
            *n += 1;
        }
    };

    if capability & mask::RS != 0 {
        push(&mut regs, &mut n, inst.rs());
    }
    if capability & mask::RT != 0 {
        push(&mut regs, &mut n, inst.rt());
    }
    if capability & mask::RD != 0 {
        if let Instruction::R { rd, .. } = *inst {
            push(&mut regs, &mut n, rd);
        }
    }

    (regs, n)
}

/// Returns true when the two register sets intersect.
fn overlaps(a: &[u32], b: &[u32]) -> bool {
    a.iter().any(|reg| b.contains(reg))
}
