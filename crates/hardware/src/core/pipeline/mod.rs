//! Retirement-time pipeline analytics.
//!
//! This module implements the monitor every retired instruction passes
//! through. Per retirement, strictly in this order:
//! 1. **Read hazards** are charged against the write-timestamp table for each
//!    modeled pipeline depth.
//! 2. **Write stamps** record which register the instruction produced.
//! 3. **Branch analytics** resolve the outcome and train the predictors.
//! 4. The record joins the **window** of recent retirements.
//! 5. The **dual-issue checker** tries to pair it with its predecessor.
//!
//! NOPs are counted, advance every write stamp by one (so simulator-injected
//! padding never changes apparent hazard distances), and skip everything
//! else.

/// Hazard-distance tables and charging rules.
pub mod hazards;
/// Two-wide issue pair checking.
pub mod superscalar;

use std::collections::VecDeque;

use crate::common::constants::TRACKED_REGS;
use crate::core::arch::Gpr;
use crate::core::units::bru::{
    DirectionPredictor, SaturatingPredictor, StaticPredictor, TwoLevelPredictor,
};
use crate::isa::groups;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::{OP_BEQ, OP_BGTZ, OP_BLEZ, OP_BNE, OP_REGIMM};
use crate::stats::SimStats;
use superscalar::DualIssue;

/// Maximum number of records the retirement window keeps.
pub const WINDOW_CAPACITY: usize = 10;

/// One windowed retirement: the record plus the ordinal it retired at.
///
/// Ordinals come from the raw instruction count, so NOPs between two window
/// entries widen their ordinal gap even though they never enter the window.
pub struct Retired {
    /// The retired instruction record.
    pub inst: Instruction,
    /// Value of the instruction counter when the record retired.
    pub ordinal: u64,
}

/// The retirement monitor.
///
/// Owns all analytics state: the window, the write-timestamp table, the
/// three branch predictors, and the dual-issue latch. Counters live in
/// [`SimStats`], which the driver passes into [`Self::retire`].
pub struct PipelineMonitor {
    forwarding: bool,
    window: VecDeque<Retired>,
    last_write: [u64; TRACKED_REGS],
    dual_issue: DualIssue,
    static_bp: StaticPredictor,
    saturating: SaturatingPredictor,
    two_level: TwoLevelPredictor,
}

impl PipelineMonitor {
    /// Creates a monitor for the given forwarding setting.
    pub fn new(forwarding: bool) -> Self {
        Self {
            forwarding,
            window: VecDeque::with_capacity(WINDOW_CAPACITY + 1),
            last_write: [0; TRACKED_REGS],
            dual_issue: DualIssue::new(),
            static_bp: StaticPredictor::new(),
            saturating: SaturatingPredictor::new(),
            two_level: TwoLevelPredictor::new(),
        }
    }

    /// Runs the full analytics sequence for one retired record.
    ///
    /// # Arguments
    ///
    /// * `inst` - The record that just retired.
    /// * `regs` - Register file as of retirement; branch outcomes read it.
    /// * `stats` - Counter sink. `stats.instructions` must already include
    ///   this retirement.
    pub fn retire(&mut self, inst: &Instruction, regs: &Gpr, stats: &mut SimStats) {
        let count = stats.instructions;

        if inst.is_nop() {
            stats.nops += 1;
            // Keep distances NOP-transparent: the NOP consumed an ordinal,
            // so every stamp moves up with it.
            for stamp in self.last_write.iter_mut() {
                *stamp += 1;
            }
            return;
        }

        hazards::charge_read_hazards(
            inst,
            &self.window,
            &self.last_write,
            self.forwarding,
            count,
            stats,
        );
        hazards::stamp_write(inst, &mut self.last_write, count);

        if let Instruction::I { op, rs, rt, imm } = *inst {
            if groups::is_conditional_branch(op) {
                self.observe_branch(op, rt, regs.read(rs), regs.read(rt), imm, stats);
            }
        }

        self.window.push_front(Retired {
            inst: inst.clone(),
            ordinal: count,
        });
        if self.window.len() > WINDOW_CAPACITY {
            self.window.pop_back();
        }

        self.dual_issue.observe(&self.window, stats);
    }

    /// Resolves a branch outcome and trains all three predictors on it.
    ///
    /// Each predictor is queried before it sees the outcome; a disagreement
    /// bumps its misprediction counter.
    fn observe_branch(
        &mut self,
        op: u32,
        rt_field: u32,
        rs_val: u32,
        rt_val: u32,
        imm: i32,
        stats: &mut SimStats,
    ) {
        stats.branches += 1;
        let taken = branch_taken(op, rt_field, rs_val, rt_val);

        if self.static_bp.predict(imm) != taken {
            stats.static_wrong += 1;
        }
        self.static_bp.train(taken);

        if self.saturating.predict(imm) != taken {
            stats.saturating_wrong += 1;
        }
        self.saturating.train(taken);

        if self.two_level.predict(imm) != taken {
            stats.two_level_wrong += 1;
        }
        self.two_level.train(taken);
    }

    /// Returns the retirement window, most recent first.
    pub fn window(&self) -> &VecDeque<Retired> {
        &self.window
    }

    /// Returns the write-timestamp table.
    pub fn last_write(&self) -> &[u64; TRACKED_REGS] {
        &self.last_write
    }

    /// Returns the saturating-counter predictor.
    pub fn saturating(&self) -> &SaturatingPredictor {
        &self.saturating
    }

    /// Returns the two-level predictor.
    pub fn two_level(&self) -> &TwoLevelPredictor {
        &self.two_level
    }
}

/// Resolves whether a conditional branch is taken from register values.
///
/// The op 0x01 family encodes its comparison in the `rt` field: a non-zero
/// selector means the greater-or-equal variants.
fn branch_taken(op: u32, rt_field: u32, rs_val: u32, rt_val: u32) -> bool {
    match op {
        OP_BEQ => rs_val == rt_val,
        OP_BNE => rs_val != rt_val,
        OP_BLEZ => (rs_val as i32) <= 0,
        OP_BGTZ => (rs_val as i32) > 0,
        OP_REGIMM => {
            if rt_field != 0 {
                (rs_val as i32) >= 0
            } else {
                (rs_val as i32) < 0
            }
        }
        _ => false,
    }
}
